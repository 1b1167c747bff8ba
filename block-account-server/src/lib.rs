//! Block account REST API server.
//!
//! Wires the PostgreSQL account store into the account service and exposes
//! it over HTTP. The binary in `main.rs` builds the configuration, pool and
//! router from these modules.

pub mod config;
pub mod handlers;
pub mod routes;
pub mod service;
pub mod state;
