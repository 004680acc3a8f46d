use std::sync::RwLock;

use card_types::BalanceFormat;
use rust_decimal::Decimal;

use crate::account::Account;
use crate::error::{AccountError, AccountResult};

/// Thread-safe handle to an [`Account`].
///
/// Deposits and withdrawals hold the write lock across the whole
/// read-modify-write, so concurrent mutators never observe or produce a
/// negative balance.
#[derive(Debug)]
pub struct SharedAccount {
    inner: RwLock<Account>,
}

impl SharedAccount {
    pub fn new(account: Account) -> Self {
        Self {
            inner: RwLock::new(account),
        }
    }

    pub fn deposit(&self, amount: Decimal) -> AccountResult<()> {
        self.inner
            .write()
            .map_err(|_| AccountError::Poisoned)?
            .deposit(amount)
    }

    pub fn withdraw(&self, amount: Decimal) -> AccountResult<()> {
        self.inner
            .write()
            .map_err(|_| AccountError::Poisoned)?
            .withdraw(amount)
    }

    pub fn balance(&self) -> AccountResult<Decimal> {
        let account = self.inner.read().map_err(|_| AccountError::Poisoned)?;
        Ok(account.balance())
    }

    /// Copy of the account as of now.
    pub fn snapshot(&self) -> AccountResult<Account> {
        let account = self.inner.read().map_err(|_| AccountError::Poisoned)?;
        Ok(account.clone())
    }

    pub fn generate_statement(&self, template: &str) -> AccountResult<String> {
        self.generate_statement_with(template, &BalanceFormat::default())
    }

    pub fn generate_statement_with(
        &self,
        template: &str,
        format: &BalanceFormat,
    ) -> AccountResult<String> {
        let account = self.inner.read().map_err(|_| AccountError::Poisoned)?;
        account.generate_statement_with(template, format)
    }

    /// Unwrap the account, consuming the handle.
    pub fn into_inner(self) -> AccountResult<Account> {
        self.inner.into_inner().map_err(|_| AccountError::Poisoned)
    }
}

impl From<Account> for SharedAccount {
    fn from(account: Account) -> Self {
        Self::new(account)
    }
}
