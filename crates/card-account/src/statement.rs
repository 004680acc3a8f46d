use card_types::BalanceFormat;

use crate::account::Account;
use crate::error::AccountError;

pub const NAME_PLACEHOLDER: &str = "$name";
pub const NUMBER_PLACEHOLDER: &str = "$number";
pub const BALANCE_PLACEHOLDER: &str = "$balance";

/// Placeholders in substitution order.
const PLACEHOLDERS: [&str; 3] = [NAME_PLACEHOLDER, NUMBER_PLACEHOLDER, BALANCE_PLACEHOLDER];

/// A statement template known to contain every placeholder.
///
/// Rendering replaces all occurrences of `$name`, then `$number`, then
/// `$balance`. Each pass runs over the output of the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatementTemplate<'a> {
    text: &'a str,
}

impl<'a> StatementTemplate<'a> {
    /// Check that `text` contains all three placeholders.
    ///
    /// The first missing placeholder, in substitution order, is reported.
    pub fn parse(text: &'a str) -> Result<Self, AccountError> {
        if let Some(missing) = PLACEHOLDERS.into_iter().find(|p| !text.contains(p)) {
            return Err(AccountError::InvalidTemplate { missing });
        }
        Ok(Self { text })
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Substitute the account's fields into the template.
    pub fn render(&self, account: &Account, format: &BalanceFormat) -> String {
        self.text
            .replace(NAME_PLACEHOLDER, account.holder_name().as_str())
            .replace(NUMBER_PLACEHOLDER, account.card_number().as_str())
            .replace(BALANCE_PLACEHOLDER, &format.format(account.balance()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    fn main_card() -> Account {
        Account::new("My Main Card", "1111222233334444", dec!(100)).unwrap()
    }

    #[test]
    fn renders_every_field() {
        let template = StatementTemplate::parse(
            "Card named '$name' with number $number has $balance dollars on balance",
        )
        .unwrap();
        assert_eq!(
            template.render(&main_card(), &BalanceFormat::default()),
            "Card named 'My Main Card' with number 1111222233334444 has 100.00 dollars on balance"
        );
    }

    #[test]
    fn replaces_every_occurrence() {
        let template = StatementTemplate::parse("$name/$name $number $balance $balance").unwrap();
        assert_eq!(
            template.render(&main_card(), &BalanceFormat::default()),
            "My Main Card/My Main Card 1111222233334444 100.00 100.00"
        );
    }

    #[rstest]
    #[case("", NAME_PLACEHOLDER)]
    #[case("Card with number $number has $balance dollars on balance", NAME_PLACEHOLDER)]
    #[case("Card named '$name has $balance dollars on balance", NUMBER_PLACEHOLDER)]
    #[case("Card named '$name' with number $number", BALANCE_PLACEHOLDER)]
    #[case("$balance dollars on balance", NAME_PLACEHOLDER)]
    #[case("Template without variables", NAME_PLACEHOLDER)]
    fn missing_placeholders_are_rejected(#[case] text: &str, #[case] missing: &'static str) {
        let err = StatementTemplate::parse(text).unwrap_err();
        assert_eq!(err, AccountError::InvalidTemplate { missing });
        assert_eq!(err.to_string(), "Invalid template");
    }

    #[test]
    fn substitution_runs_in_fixed_order() {
        let account = Account::new("$number", "1111222233334444", dec!(5)).unwrap();
        let template = StatementTemplate::parse("$name $number $balance").unwrap();
        assert_eq!(
            template.render(&account, &BalanceFormat::default()),
            "1111222233334444 1111222233334444 5.00"
        );
    }

    #[test]
    fn uses_supplied_format() {
        let format = BalanceFormat {
            grouping_separator: '.',
            decimal_separator: ',',
            fraction_digits: 2,
        };
        let account = Account::new("Euro", "1234567812345678", dec!(1234.5)).unwrap();
        let template = StatementTemplate::parse("$name $number $balance").unwrap();
        assert_eq!(
            template.render(&account, &format),
            "Euro 1234567812345678 1.234,50"
        );
    }
}
