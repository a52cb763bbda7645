//! Configuration types shared across the orchestrator and connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Strategy for selecting among eligible data providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FetchStrategy {
    /// Use priority order and fall back to the next provider on failure.
    #[default]
    PriorityWithFallback,
    /// Race all eligible providers concurrently and return the first success.
    Latency,
}

/// Configuration for memoizing forecast payloads per ticker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of tickers kept in the cache.
    pub capacity: u64,
    /// Time-to-live of a cached payload in milliseconds; `0` disables caching.
    pub ttl_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            ttl_ms: 15 * 60 * 1000,
        }
    }
}

/// Global configuration for the `Augur` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AugurConfig {
    /// Strategy for fetching from multiple providers.
    pub fetch_strategy: FetchStrategy,
    /// Timeout for individual provider requests.
    ///
    /// Backends may train a model on demand, so the default is generous.
    pub provider_timeout: Duration,
    /// Range preset tag applied when the caller does not pick one.
    pub default_range: String,
}

impl Default for AugurConfig {
    fn default() -> Self {
        Self {
            fetch_strategy: FetchStrategy::default(),
            provider_timeout: Duration::from_secs(30),
            default_range: "all".to_string(),
        }
    }
}
