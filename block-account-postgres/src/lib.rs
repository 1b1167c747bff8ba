pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use postgres_repositories::PostgresRepositories;
pub use repository::block_account_repository::BlockAccountRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
