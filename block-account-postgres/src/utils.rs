use block_account_api::domain::AccountStatus;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Retrieves an `AccountStatus` from a textual column.
pub fn get_account_status(
    row: &PgRow,
    col_name: &str,
) -> Result<AccountStatus, Box<dyn Error + Send + Sync>> {
    let s: String = row.try_get(col_name)?;
    s.parse()
        .map_err(|err: String| format!("Column '{col_name}': {err}").into())
}
