use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Largest scale a `Decimal` can carry.
const MAX_FRACTION_DIGITS: u32 = 28;

/// Policy for rendering a balance as text.
///
/// The default renders `1234.5` as `1,234.50`: comma grouping every three
/// integer digits, a dot before the fraction, and exactly two fraction
/// digits. Values are rounded half away from zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceFormat {
    pub grouping_separator: char,
    pub decimal_separator: char,
    pub fraction_digits: u32,
}

impl Default for BalanceFormat {
    fn default() -> Self {
        Self {
            grouping_separator: ',',
            decimal_separator: '.',
            fraction_digits: 2,
        }
    }
}

impl BalanceFormat {
    /// Parse a format from a TOML document and validate it.
    ///
    /// Missing keys fall back to the defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, TypeError> {
        let format: Self = toml::from_str(s).map_err(|e| TypeError::Config(e.to_string()))?;
        format.validate()?;
        Ok(format)
    }

    /// Check that the separators are distinct non-digits and the fraction
    /// fits in a `Decimal`.
    pub fn validate(&self) -> Result<(), TypeError> {
        if self.grouping_separator == self.decimal_separator {
            return Err(TypeError::InvalidFormat(
                "grouping and decimal separators must differ".into(),
            ));
        }
        if self.grouping_separator.is_ascii_digit() || self.decimal_separator.is_ascii_digit() {
            return Err(TypeError::InvalidFormat(
                "separators must not be digits".into(),
            ));
        }
        if self.fraction_digits > MAX_FRACTION_DIGITS {
            return Err(TypeError::InvalidFormat(format!(
                "fraction_digits must be at most {MAX_FRACTION_DIGITS}, got {}",
                self.fraction_digits
            )));
        }
        Ok(())
    }

    /// Render `value` under this policy.
    ///
    /// Values too wide to carry `fraction_digits` in a `Decimal` are
    /// zero-padded to the configured width.
    pub fn format(&self, value: Decimal) -> String {
        let digits = self.fraction_digits.min(MAX_FRACTION_DIGITS);
        let mut rounded =
            value.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(digits);

        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let plain = rounded.abs().to_string();
        let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

        let width = digits as usize;
        let mut out = String::with_capacity(plain.len() + integer.len() / 3 + width + 2);
        if negative {
            out.push('-');
        }
        for (i, ch) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                out.push(self.grouping_separator);
            }
            out.push(ch);
        }
        if width > 0 {
            out.push(self.decimal_separator);
            out.push_str(fraction);
            out.extend(std::iter::repeat('0').take(width.saturating_sub(fraction.len())));
        }
        out
    }
}
