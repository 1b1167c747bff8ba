use rust_decimal::Decimal;
use serde::Deserialize;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Payload for opening a block account.
///
/// `period` stays a plain string here; the service resolves it against the
/// rate table so an unknown code reports the valid options.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBlockAccountRequest {
    #[validate(range(min = 1, message = "user_id must be positive"))]
    pub user_id: i32,
    #[validate(custom(function = principal_is_positive))]
    pub principal: Decimal,
    pub period: String,
}

fn principal_is_positive(principal: &Decimal) -> Result<(), ValidationError> {
    if *principal > Decimal::ZERO {
        Ok(())
    } else {
        let mut err = ValidationError::new("principal");
        err.message = Some(Cow::Borrowed("principal must be positive"));
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(user_id: i32, principal: Decimal) -> CreateBlockAccountRequest {
        CreateBlockAccountRequest {
            user_id,
            principal,
            period: "1y".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request(1, Decimal::new(500_000, 2)).validate().is_ok());
    }

    #[test]
    fn test_rejects_nonpositive_user_id() {
        assert!(request(0, Decimal::ONE).validate().is_err());
        assert!(request(-3, Decimal::ONE).validate().is_err());
    }

    #[test]
    fn test_rejects_nonpositive_principal() {
        assert!(request(1, Decimal::ZERO).validate().is_err());
        assert!(request(1, Decimal::new(-100, 2)).validate().is_err());
    }
}
