//! Business validation for API input
//!
//! Format validation (negative amounts, malformed decimals) happens at the
//! serde layer in [`crate::gateway::types::money`]. The checks here enforce
//! the business limits: amount range, amount precision, account id length.

use rust_decimal::Decimal;

/// Largest accepted monetary amount for deposits and transfers.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Longest accepted account identifier.
pub const MAX_ACCOUNT_ID_LEN: usize = 36;

/// Validation errors for monetary amounts and account identifiers
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be greater than 0")]
    NotPositive { field: &'static str },

    #[error("{field} must not exceed 1000000")]
    AboveMaximum { field: &'static str },

    #[error("{field} must have at most 2 decimal places")]
    TooPrecise { field: &'static str },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must be at most {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Validate a monetary amount: `0 < amount <= 1_000_000`, at most two
/// decimal places.
///
/// `field` names the request field in the error message.
pub fn validate_amount(field: &'static str, amount: Decimal) -> Result<Decimal, ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NotPositive { field });
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::AboveMaximum { field });
    }
    // Equal to itself rounded to 2dp == no more than 2 decimal places
    if amount.round_dp(2) != amount {
        return Err(ValidationError::TooPrecise { field });
    }
    Ok(amount)
}

/// Validate an account identifier: non-empty, at most 36 characters.
pub fn validate_account_id<'a>(
    field: &'static str,
    account_id: &'a str,
) -> Result<&'a str, ValidationError> {
    if account_id.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if account_id.len() > MAX_ACCOUNT_ID_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_ACCOUNT_ID_LEN,
            actual: account_id.len(),
        });
    }
    Ok(account_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_max_amount_constant() {
        assert_eq!(MAX_AMOUNT, dec("1000000"));
    }

    #[test]
    fn test_amount_in_range_passes() {
        assert_eq!(validate_amount("transfer_amount", dec("100.50")), Ok(dec("100.50")));
        assert_eq!(validate_amount("transfer_amount", dec("0.01")), Ok(dec("0.01")));
        assert_eq!(
            validate_amount("transfer_amount", dec("1000000")),
            Ok(dec("1000000"))
        );
    }

    #[test]
    fn test_amount_zero_or_negative_rejected() {
        assert_eq!(
            validate_amount("initial_deposit", Decimal::ZERO),
            Err(ValidationError::NotPositive {
                field: "initial_deposit"
            })
        );
        assert_eq!(
            validate_amount("initial_deposit", dec("-5")),
            Err(ValidationError::NotPositive {
                field: "initial_deposit"
            })
        );
    }

    #[test]
    fn test_amount_above_maximum_rejected() {
        assert_eq!(
            validate_amount("transfer_amount", dec("1000000.01")),
            Err(ValidationError::AboveMaximum {
                field: "transfer_amount"
            })
        );
    }

    #[test]
    fn test_amount_three_decimal_places_rejected() {
        assert_eq!(
            validate_amount("transfer_amount", dec("100.505")),
            Err(ValidationError::TooPrecise {
                field: "transfer_amount"
            })
        );
        // Trailing zeros beyond 2dp are still numerically 2dp
        assert_eq!(
            validate_amount("transfer_amount", dec("100.500")),
            Ok(dec("100.500"))
        );
    }

    #[test]
    fn test_account_id_length() {
        assert!(validate_account_id("from_account_id", "acc1-1234").is_ok());
        assert_eq!(
            validate_account_id("from_account_id", ""),
            Err(ValidationError::Empty {
                field: "from_account_id"
            })
        );
        let long = "a".repeat(37);
        assert_eq!(
            validate_account_id("to_account_id", &long),
            Err(ValidationError::TooLong {
                field: "to_account_id",
                max: 36,
                actual: 37
            })
        );
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let err = validate_amount("initial_deposit", dec("1.999")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "initial_deposit must have at most 2 decimal places"
        );
    }
}
