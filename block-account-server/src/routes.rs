//! HTTP routes.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Block account routes
        .route("/block-account", post(handlers::create_block_account))
        .route("/block-account/:id", get(handlers::get_block_account))
        .route("/block-account/:id", delete(handlers::delete_block_account))
        .route(
            "/user/:user_id/block-accounts",
            get(handlers::get_user_block_accounts),
        )
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
