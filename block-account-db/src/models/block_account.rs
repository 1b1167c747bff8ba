use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use block_account_api::domain::{AccountStatus, BlockAccount};
use crate::models::identifiable::Identifiable;

/// Persistence model for a `block_accounts` row.
///
/// Mirrors the table one to one. `id`, `created_at` and `updated_at` are
/// store-assigned: a model handed to the create operation carries
/// placeholders and the returned model carries the real values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockAccountModel {
    pub id: i32,
    pub user_id: i32,
    pub principal: Decimal,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub interest_rate: Decimal,
    #[serde(
        serialize_with = "block_account_api::domain::serialize_account_status",
        deserialize_with = "block_account_api::domain::deserialize_account_status"
    )]
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlockAccountModel {
    /// Model for a row that has not been inserted yet.
    ///
    /// Store-assigned fields hold placeholders (`id` 0, timestamps equal to
    /// `start_date`); the create operation returns the persisted values.
    pub fn new_unsaved(
        user_id: i32,
        principal: Decimal,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        interest_rate: Decimal,
    ) -> Self {
        Self {
            id: 0,
            user_id,
            principal,
            start_date,
            end_date,
            interest_rate,
            status: AccountStatus::Active,
            created_at: start_date,
            updated_at: start_date,
        }
    }
}

impl Identifiable for BlockAccountModel {
    fn get_id(&self) -> i32 {
        self.id
    }
}

impl From<BlockAccountModel> for BlockAccount {
    fn from(model: BlockAccountModel) -> Self {
        BlockAccount {
            id: model.id,
            user_id: model.user_id,
            principal: model.principal,
            start_date: model.start_date,
            end_date: model.end_date,
            interest_rate: model.interest_rate,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
