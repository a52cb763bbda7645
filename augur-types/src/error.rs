use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type shared by every augur crate.
///
/// Shape and range errors come from the aligner and windowing code. The
/// remaining kinds describe what happened while fetching payloads, either from
/// a single connector or across all of them.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AugurError {
    /// A series does not fit the timeline it is placed on.
    #[error("shape mismatch: {detail}")]
    ShapeMismatch {
        /// What did not fit.
        detail: String,
    },

    /// Zero-length timeline, or a payload with no prices to anchor a chart.
    #[error("empty series: no data to display")]
    EmptySeries,

    /// Range tag outside `1d`, `3d`, `7d`, `1m`, `all`.
    #[error("unknown range: {tag}")]
    UnknownRange {
        /// Tag as received.
        tag: String,
    },

    /// No registered connector offers this capability.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// Capability label, e.g. `"forecast"`.
        capability: String,
    },

    /// Payload could not be decoded or is internally inconsistent.
    #[error("data issue: {0}")]
    Data(String),

    /// Rejected input, such as a malformed ticker or base URL.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Failure reported by one connector, e.g. a backend HTTP 500.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name.
        connector: String,
        /// Failure message.
        msg: String,
    },

    /// Anything without a more specific kind.
    #[error("unknown error: {0}")]
    Other(String),

    /// Nothing is known for the request, e.g. `"forecast for ZZZZ"`.
    #[error("not found: {what}")]
    NotFound {
        /// The missing resource.
        what: String,
    },

    /// Every attempted connector failed; one entry per connector.
    #[error("all providers failed: {0:?}")]
    AllProvidersFailed(Vec<AugurError>),

    /// One connector exceeded the provider timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector that timed out.
        connector: String,
        /// Capability label.
        capability: String,
    },

    /// Every attempted connector exceeded the provider timeout.
    #[error("all providers timed out: {capability}")]
    AllProvidersTimedOut {
        /// Capability label.
        capability: String,
    },
}

impl AugurError {
    /// `ShapeMismatch` with a description.
    pub fn shape(detail: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            detail: detail.into(),
        }
    }

    /// `UnknownRange` for a tag.
    pub fn unknown_range(tag: impl Into<String>) -> Self {
        Self::UnknownRange { tag: tag.into() }
    }

    /// `Unsupported` for a capability label.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// `Connector` failure attributed to `connector`.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// `NotFound` for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// `ProviderTimeout` for one connector and capability.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Whether a dashboard should show this error to the user.
    ///
    /// Misses and missing capabilities are quiet. An aggregate is actionable
    /// if any of its members is.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        match self {
            Self::Unsupported { .. } | Self::NotFound { .. } => false,
            Self::AllProvidersFailed(inner) => inner.iter().any(Self::is_actionable),
            _ => true,
        }
    }

    /// The individual errors behind nested aggregates, depth first.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllProvidersFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}

impl From<serde_json::Error> for AugurError {
    fn from(e: serde_json::Error) -> Self {
        Self::Data(e.to_string())
    }
}
