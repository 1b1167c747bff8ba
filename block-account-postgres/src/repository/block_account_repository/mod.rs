pub mod repo_impl;

mod create;
mod delete;
mod find_by_id;
mod find_by_user_id;
mod ping;

pub use repo_impl::BlockAccountRepositoryImpl;
