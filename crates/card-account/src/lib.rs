//! Credit card account entity.
//!
//! This crate provides:
//! - [`Account`] with validated construction, deposits, and withdrawals
//! - Templated statements via [`StatementTemplate`]
//! - [`SharedAccount`], a lock-guarded handle for concurrent mutators
//! - [`AccountError`], one variant per violated rule

pub mod account;
pub mod error;
pub mod shared;
pub mod statement;

pub use account::Account;
pub use error::{AccountError, AccountResult};
pub use shared::SharedAccount;
pub use statement::{
    StatementTemplate, BALANCE_PLACEHOLDER, NAME_PLACEHOLDER, NUMBER_PLACEHOLDER,
};

// Re-export key types
pub use card_types::{BalanceFormat, CardNumber, HolderName, NumberViolation};
