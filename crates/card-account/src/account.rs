use card_types::{BalanceFormat, CardNumber, HolderName};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{AccountError, AccountResult};
use crate::statement::StatementTemplate;

/// A credit card account.
///
/// Holder name and card number are fixed at construction. The balance is
/// never negative and changes only through [`Account::deposit`] and
/// [`Account::withdraw`]; a failed call leaves it untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AccountRecord")]
pub struct Account {
    holder_name: HolderName,
    card_number: CardNumber,
    balance: Decimal,
}

/// Unvalidated wire shape of an [`Account`].
#[derive(Deserialize)]
struct AccountRecord {
    holder_name: String,
    card_number: String,
    balance: Decimal,
}

impl TryFrom<AccountRecord> for Account {
    type Error = AccountError;

    fn try_from(record: AccountRecord) -> Result<Self, Self::Error> {
        Self::new(&record.holder_name, &record.card_number, record.balance)
    }
}

impl Account {
    /// Create an account, validating name, then number, then balance.
    pub fn new(holder_name: &str, card_number: &str, balance: Decimal) -> AccountResult<Self> {
        let holder_name = HolderName::parse(holder_name)?;
        let card_number = CardNumber::parse(card_number)?;
        if balance < Decimal::ZERO {
            return Err(AccountError::InvalidBalance);
        }
        debug!(card = %card_number.masked(), %balance, "account created");
        Ok(Self {
            holder_name,
            card_number,
            balance,
        })
    }

    pub fn holder_name(&self) -> &HolderName {
        &self.holder_name
    }

    pub fn card_number(&self) -> &CardNumber {
        &self.card_number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Add a positive amount to the balance.
    ///
    /// Fails with [`AccountError::InvalidAmount`] if the sum overflows or
    /// cannot be represented without rounding.
    pub fn deposit(&mut self, amount: Decimal) -> AccountResult<()> {
        ensure_positive(amount)?;
        let balance = self
            .balance
            .checked_add(amount)
            .filter(|sum| *sum - self.balance == amount)
            .ok_or(AccountError::InvalidAmount)?;
        self.balance = balance;
        debug!(
            card = %self.card_number.masked(),
            %amount,
            balance = %self.balance,
            "deposit applied"
        );
        Ok(())
    }

    /// Take a positive amount no larger than the current balance.
    ///
    /// Like [`Account::deposit`], a result that would need rounding is
    /// rejected and the balance is left as it was.
    pub fn withdraw(&mut self, amount: Decimal) -> AccountResult<()> {
        ensure_positive(amount)?;
        if amount > self.balance {
            warn!(
                card = %self.card_number.masked(),
                %amount,
                balance = %self.balance,
                "withdrawal exceeds balance"
            );
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        let balance = self
            .balance
            .checked_sub(amount)
            .filter(|rest| self.balance - *rest == amount)
            .ok_or(AccountError::InvalidAmount)?;
        self.balance = balance;
        debug!(
            card = %self.card_number.masked(),
            %amount,
            balance = %self.balance,
            "withdrawal applied"
        );
        Ok(())
    }

    /// Render a statement with the default balance format.
    ///
    /// The template must contain `$name`, `$number` and `$balance`.
    pub fn generate_statement(&self, template: &str) -> AccountResult<String> {
        self.generate_statement_with(template, &BalanceFormat::default())
    }

    /// Render a statement with a caller-supplied balance format.
    pub fn generate_statement_with(
        &self,
        template: &str,
        format: &BalanceFormat,
    ) -> AccountResult<String> {
        let template = StatementTemplate::parse(template)?;
        format.validate()?;
        debug!(card = %self.card_number.masked(), "rendering statement");
        Ok(template.render(self, format))
    }
}

fn ensure_positive(amount: Decimal) -> AccountResult<()> {
    if amount <= Decimal::ZERO {
        return Err(AccountError::InvalidAmount);
    }
    Ok(())
}
