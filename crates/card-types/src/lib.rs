//! Foundation types for card accounts.
//!
//! Every identity field of an account is a validated value type: once a
//! [`HolderName`] or [`CardNumber`] exists, its invariants hold.
//!
//! # Key Types
//!
//! - [`HolderName`] — Non-blank display label for the cardholder
//! - [`CardNumber`] — Sixteen ASCII digits, masked in debug output
//! - [`BalanceFormat`] — Grouping, decimal separator, and fraction policy
//! - [`TypeError`] — Validation and configuration failures

pub mod error;
pub mod format;
pub mod holder;
pub mod number;
mod text;

pub use error::{NumberViolation, TypeError};
pub use format::BalanceFormat;
pub use holder::HolderName;
pub use number::{CardNumber, CARD_NUMBER_LEN};
