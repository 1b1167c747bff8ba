use thiserror::Error;

/// Failure taxonomy shared by the service and HTTP layers.
///
/// Variants map one to one onto response classes: validation failures are
/// client errors, missing entities are not-found, store and internal
/// failures are server errors. Nothing here is retried.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl ApiError {
    /// Wrap a store failure, keeping only its display form.
    pub fn database(err: impl std::fmt::Display) -> Self {
        ApiError::DatabaseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::ValidationError(errors.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
