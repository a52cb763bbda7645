use core::fmt;

use serde::Serialize;

/// Name under which a connector is registered, e.g. `"augur-http"`.
///
/// Preference lists and provider errors refer to connectors by this key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ConnectorKey(&'static str);

impl ConnectorKey {
    /// Key for a connector's static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The connector name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Whether this key names the connector reporting `name`.
    #[must_use]
    pub fn matches(self, name: &str) -> bool {
        self.0 == name
    }
}

impl fmt::Display for ConnectorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
