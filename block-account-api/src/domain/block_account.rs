use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A fixed-term investment account with locked principal and preset rate.
///
/// `start_date`, `end_date` and `interest_rate` are derived from the period
/// code at creation; `id`, `created_at` and `updated_at` are assigned by the
/// store. The record is read-only after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockAccount {
    pub id: i32,
    pub user_id: i32,
    pub principal: Decimal,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub interest_rate: Decimal,
    #[serde(
        serialize_with = "serialize_account_status",
        deserialize_with = "deserialize_account_status"
    )]
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lifecycle status of a block account.
///
/// Accounts are created `Active` and this service performs no transitions;
/// the closed enum keeps unexpected store values out of the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountStatus {
    #[default]
    Active,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
        }
    }
}

impl FromStr for AccountStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(AccountStatus::Active),
            other => Err(format!("Unknown account status: {other}")),
        }
    }
}

pub fn serialize_account_status<S>(status: &AccountStatus, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(status.as_str())
}

pub fn deserialize_account_status<'de, D>(deserializer: D) -> Result<AccountStatus, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
}
