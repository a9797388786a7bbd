use thiserror::Error;

/// Error type that captures ledger business-rule and store failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },
    #[error("{kind} already exists: {key}")]
    AlreadyExists { kind: &'static str, key: String },
    #[error("invalid email: {0}")]
    InvalidEmail(String),
    #[error("invalid discount rate: {0}")]
    InvalidDiscountRate(String),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("credit limit exceeded for user {user}")]
    CreditLimitExceeded { user: String },
    #[error("no outstanding dues for user {user}")]
    NoDues { user: String },
    #[error("payback exceeds outstanding dues for user {user}")]
    ExcessPayback { user: String },
    #[error("internal inconsistency: {0}")]
    Internal(String),
}
