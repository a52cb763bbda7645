use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AugurError;

/// Normalized ticker symbol.
///
/// Input is trimmed and upper-cased. Only ASCII alphanumerics and `.`, `-`, `^`
/// are accepted, and at least one alphanumeric is required, so the symbol is
/// always a single literal path segment (never `.` or `..`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Normalize and validate a raw symbol.
    ///
    /// # Errors
    /// Returns `InvalidArg` for empty input, disallowed characters, or a symbol
    /// made only of punctuation.
    pub fn new(raw: &str) -> Result<Self, AugurError> {
        let sym = raw.trim().to_ascii_uppercase();
        if sym.is_empty() {
            return Err(AugurError::InvalidArg("ticker is empty".into()));
        }
        if let Some(c) = sym
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^')))
        {
            return Err(AugurError::InvalidArg(format!(
                "ticker '{sym}' contains invalid character {c:?}"
            )));
        }
        if !sym.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err(AugurError::InvalidArg(format!(
                "ticker '{sym}' has no letters or digits"
            )));
        }
        Ok(Self(sym))
    }

    /// The normalized symbol.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ticker {
    type Err = AugurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = AugurError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<Ticker> for String {
    fn from(t: Ticker) -> Self {
        t.0
    }
}
