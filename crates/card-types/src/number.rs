use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NumberViolation, TypeError};
use crate::text::{is_blank, utf16_len};

/// Number of digits in a card number.
pub const CARD_NUMBER_LEN: usize = 16;

/// Number of trailing digits left visible by [`CardNumber::masked`].
const VISIBLE_DIGITS: usize = 4;

/// Sixteen-digit card number identifying a payment instrument.
///
/// Construction checks, in order: the input is not blank, it has exactly
/// [`CARD_NUMBER_LEN`] UTF-16 code units, and every character is an ASCII
/// digit.
/// The first failing rule is reported as a [`NumberViolation`].
///
/// `Debug` output is masked so card numbers do not leak into logs; use
/// `Display` or [`CardNumber::as_str`] for the full value.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardNumber(String);

impl CardNumber {
    /// Validate and wrap a card number.
    pub fn parse(number: &str) -> Result<Self, TypeError> {
        validate(number)?;
        Ok(Self(number.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last four digits.
    pub fn last_four(&self) -> &str {
        &self.0[CARD_NUMBER_LEN - VISIBLE_DIGITS..]
    }

    /// The number with every digit except the last four replaced by `*`.
    pub fn masked(&self) -> String {
        let mut masked = "*".repeat(CARD_NUMBER_LEN - VISIBLE_DIGITS);
        masked.push_str(self.last_four());
        masked
    }
}

fn validate(number: &str) -> Result<(), NumberViolation> {
    if is_blank(number) {
        return Err(NumberViolation::Blank);
    }
    let actual = utf16_len(number);
    if actual != CARD_NUMBER_LEN {
        return Err(NumberViolation::Length { actual });
    }
    if !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumberViolation::NonDigit);
    }
    Ok(())
}

impl AsRef<str> for CardNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardNumber({})", self.masked())
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CardNumber {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(&value)?;
        Ok(Self(value))
    }
}

impl From<CardNumber> for String {
    fn from(number: CardNumber) -> Self {
        number.0
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[test]
    fn parse_accepts_sixteen_digits() {
        let number = CardNumber::parse("1111222233334444").unwrap();
        assert_eq!(number.as_str(), "1111222233334444");
    }

    #[rstest]
    #[case("", NumberViolation::Blank)]
    #[case("                ", NumberViolation::Blank)]
    #[case("123456781234567", NumberViolation::Length { actual: 15 })]
    #[case("12345678123456789", NumberViolation::Length { actual: 17 })]
    #[case("123456781234567A", NumberViolation::NonDigit)]
    #[case("1234 5678 1234 5", NumberViolation::NonDigit)]
    fn invalid_numbers_report_first_violation(
        #[case] input: &str,
        #[case] expected: NumberViolation,
    ) {
        assert_eq!(
            CardNumber::parse(input),
            Err(TypeError::InvalidNumber(expected))
        );
    }

    #[rstest]
    // 15 ASCII digits plus a BMP digit: one code unit, so length passes.
    #[case("123456781234567\u{0663}", NumberViolation::NonDigit)]
    // 15 ASCII digits plus an astral character: two code units.
    #[case("123456781234567\u{1F600}", NumberViolation::Length { actual: 17 })]
    // 14 ASCII digits plus an astral character: sixteen code units.
    #[case("12345678123456\u{1F600}", NumberViolation::NonDigit)]
    fn length_counts_utf16_code_units(#[case] input: &str, #[case] expected: NumberViolation) {
        assert_eq!(
            CardNumber::parse(input),
            Err(TypeError::InvalidNumber(expected))
        );
    }

    #[test]
    fn no_break_spaces_are_not_blank() {
        let input = "\u{00A0}".repeat(CARD_NUMBER_LEN);
        assert_eq!(
            CardNumber::parse(&input),
            Err(TypeError::InvalidNumber(NumberViolation::NonDigit))
        );
    }

    #[test]
    fn separator_controls_are_blank() {
        let input = "\u{001C}".repeat(CARD_NUMBER_LEN);
        assert_eq!(
            CardNumber::parse(&input),
            Err(TypeError::InvalidNumber(NumberViolation::Blank))
        );
    }

    #[test]
    fn masked_hides_all_but_last_four() {
        let number = CardNumber::parse("1111222233334444").unwrap();
        assert_eq!(number.masked(), "************4444");
        assert_eq!(number.last_four(), "4444");
    }

    #[test]
    fn debug_is_masked() {
        let number = CardNumber::parse("1111222233334444").unwrap();
        let debug = format!("{number:?}");
        assert_eq!(debug, "CardNumber(************4444)");
        assert!(!debug.contains("11112222"));
    }

    #[test]
    fn display_is_full_number() {
        let number = CardNumber::parse("1111222233334444").unwrap();
        assert_eq!(number.to_string(), "1111222233334444");
    }

    #[test]
    fn deserialize_revalidates() {
        let ok: CardNumber = serde_json::from_str("\"1234567812345678\"").unwrap();
        assert_eq!(ok.as_str(), "1234567812345678");
        let bad: Result<CardNumber, _> = serde_json::from_str("\"12345678\"");
        assert!(bad.is_err());
    }

    proptest! {
        #[test]
        fn prop_sixteen_ascii_digits_always_parse(digits in "[0-9]{16}") {
            let number = CardNumber::parse(&digits).unwrap();
            prop_assert_eq!(number.as_str(), digits.as_str());
        }

        #[test]
        fn prop_wrong_length_digit_strings_are_rejected(digits in "[0-9]{1,15}|[0-9]{17,24}") {
            let err = CardNumber::parse(&digits).unwrap_err();
            prop_assert_eq!(
                err,
                TypeError::InvalidNumber(NumberViolation::Length { actual: digits.len() })
            );
        }
    }
}
