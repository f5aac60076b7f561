//! Domain models: customers, accounts, and the transfer log entry

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Bank customer. Seeded at startup and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub customer_id: i64,
    pub name: String,
    pub email: String,
}

/// Bank account. One customer may own several accounts.
///
/// `balance` is only ever mutated through the store's balance update path
/// (initial deposit aside).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Account {
    /// Account identifier, `acc-<8 hex>` for API-created accounts
    #[schema(example = "acc-1f2e3d4c")]
    pub account_id: String,
    pub customer_id: i64,
    /// Current balance, serialized as a string to preserve precision
    #[schema(value_type = String, example = "1000.00")]
    pub balance: Decimal,
}

/// Completed balance movement between two accounts.
///
/// Append-only: a transfer is written exactly once and never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Transfer {
    /// Globally unique transaction id (UUIDv4)
    pub transaction_id: String,
    pub from_account_id: String,
    pub to_account_id: String,
    /// Transferred amount, always positive
    #[schema(value_type = String, example = "100.00")]
    pub transfer_amount: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl Transfer {
    /// True if the given account is the sender or the receiver.
    pub fn involves(&self, account_id: &str) -> bool {
        self.from_account_id == account_id || self.to_account_id == account_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample_transfer() -> Transfer {
        Transfer {
            transaction_id: "txn-test".to_string(),
            from_account_id: "acc-a".to_string(),
            to_account_id: "acc-b".to_string(),
            transfer_amount: Decimal::from_str("100.00").unwrap(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_transfer_involves_sender_and_receiver() {
        let t = sample_transfer();
        assert!(t.involves("acc-a"));
        assert!(t.involves("acc-b"));
        assert!(!t.involves("acc-c"));
    }

    #[test]
    fn test_money_serializes_as_string() {
        let t = sample_transfer();
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["transfer_amount"], "100.00");
    }
}
