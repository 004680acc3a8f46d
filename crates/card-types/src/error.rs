use thiserror::Error;

/// Errors produced by type construction and parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("Credit Card name cannot be blank or null")]
    BlankName,

    #[error("{0}")]
    InvalidNumber(NumberViolation),

    #[error("invalid balance format: {0}")]
    InvalidFormat(String),

    #[error("config error: {0}")]
    Config(String),
}

/// The rule a rejected card number broke.
///
/// Rules are checked in declaration order; the first one that fails is
/// reported.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NumberViolation {
    #[error("Credit Card number cannot be blank or null")]
    Blank,

    #[error("Credit Card number length must be 16")]
    Length { actual: usize },

    #[error("Credit Card must contain only numbers")]
    NonDigit,
}

impl From<NumberViolation> for TypeError {
    fn from(violation: NumberViolation) -> Self {
        Self::InvalidNumber(violation)
    }
}
