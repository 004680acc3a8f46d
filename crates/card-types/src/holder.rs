use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::text::is_blank;

/// Display label identifying the cardholder.
///
/// A `HolderName` is never blank: construction rejects empty and
/// whitespace-only input. No-break spaces count as content, not whitespace. The text is kept verbatim, including any leading
/// or trailing whitespace around a non-blank name.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HolderName(String);

impl HolderName {
    /// Validate and wrap a holder name.
    pub fn parse(name: &str) -> Result<Self, TypeError> {
        Self::try_from(name.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for HolderName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for HolderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HolderName({:?})", self.0)
    }
}

impl fmt::Display for HolderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HolderName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_blank(&value) {
            return Err(TypeError::BlankName);
        }
        Ok(Self(value))
    }
}

impl From<HolderName> for String {
    fn from(name: HolderName) -> Self {
        name.0
    }
}
