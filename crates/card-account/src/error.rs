use card_types::{NumberViolation, TypeError};
use rust_decimal::Decimal;

/// Errors produced by account operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("Credit Card name cannot be blank or null")]
    InvalidName,

    #[error("{0}")]
    InvalidNumber(NumberViolation),

    #[error("Balance cannot be negative")]
    InvalidBalance,

    #[error("Amount must be positive value")]
    InvalidAmount,

    #[error("Amount must not be more than balance")]
    InsufficientFunds { requested: Decimal, available: Decimal },

    #[error("Invalid template")]
    InvalidTemplate { missing: &'static str },

    #[error("invalid balance format: {0}")]
    InvalidFormat(String),

    #[error("account lock poisoned")]
    Poisoned,
}

impl From<TypeError> for AccountError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::BlankName => Self::InvalidName,
            TypeError::InvalidNumber(violation) => Self::InvalidNumber(violation),
            TypeError::InvalidFormat(reason) | TypeError::Config(reason) => {
                Self::InvalidFormat(reason)
            }
        }
    }
}

pub type AccountResult<T> = Result<T, AccountError>;
