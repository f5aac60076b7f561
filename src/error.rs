use thiserror::Error;

/// Domain errors for banking operations.
///
/// Variants carry the offending identifier for logging; the HTTP layer maps
/// each kind to a fixed status and message and never exposes the identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankingError {
    #[error("account {0} not found")]
    AccountNotFound(String),

    #[error("customer {0} not found")]
    CustomerNotFound(i64),

    #[error("insufficient funds in account {0}")]
    InsufficientFunds(String),

    #[error("source and destination accounts are the same: {0}")]
    SelfTransfer(String),
}
