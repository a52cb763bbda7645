use core::fmt;

use serde::{Deserialize, Serialize};

/// What a connector can be asked for. Used to route calls and to label
/// aggregate errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Capability {
    /// Per-ticker forecast payload.
    Forecast,
    /// Tickers shown when the dashboard opens.
    Watchlist,
}

impl Capability {
    /// Lowercase label used in errors and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forecast => "forecast",
            Self::Watchlist => "watchlist",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
