use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;

/// Fixed term selectable at account opening.
///
/// The wire format is the short code (`3m`, `6m`, `1y`, `3y`). Duration and
/// annual rate come from a fixed table and never change for the lifetime of
/// an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodCode {
    ThreeMonths,
    SixMonths,
    OneYear,
    ThreeYears,
}

/// Duration and annual interest rate resolved for a period code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub duration_days: i64,
    pub annual_rate: Decimal,
}

impl PeriodCode {
    /// All valid period codes, in ascending term order.
    pub const ALL: [PeriodCode; 4] = [
        PeriodCode::ThreeMonths,
        PeriodCode::SixMonths,
        PeriodCode::OneYear,
        PeriodCode::ThreeYears,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodCode::ThreeMonths => "3m",
            PeriodCode::SixMonths => "6m",
            PeriodCode::OneYear => "1y",
            PeriodCode::ThreeYears => "3y",
        }
    }

    /// Resolve the fixed duration and annual rate for this period.
    pub fn term(&self) -> Term {
        match self {
            PeriodCode::ThreeMonths => Term {
                duration_days: 90,
                annual_rate: Decimal::new(2, 2),
            },
            PeriodCode::SixMonths => Term {
                duration_days: 180,
                annual_rate: Decimal::new(35, 3),
            },
            PeriodCode::OneYear => Term {
                duration_days: 365,
                annual_rate: Decimal::new(5, 2),
            },
            PeriodCode::ThreeYears => Term {
                duration_days: 1095,
                annual_rate: Decimal::new(10, 2),
            },
        }
    }
}

impl fmt::Display for PeriodCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodCode {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "3m" => Ok(PeriodCode::ThreeMonths),
            "6m" => Ok(PeriodCode::SixMonths),
            "1y" => Ok(PeriodCode::OneYear),
            "3y" => Ok(PeriodCode::ThreeYears),
            other => Err(ApiError::ValidationError(format!(
                "invalid period: {other}. Valid options are: 3m, 6m, 1y, 3y"
            ))),
        }
    }
}
