use async_trait::async_trait;
use augur_core::connector::{AugurConnector, ForecastProvider, WatchlistProvider};
use augur_core::{AugurError, ForecastPayload, Ticker};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Latency simulated for the `TIMEOUT` ticker.
pub const TIMEOUT_DELAY: std::time::Duration = std::time::Duration::from_millis(200);

/// Mock connector for CI-safe examples. Provides deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_timeout(
        ticker: &Ticker,
        capability: &'static str,
    ) -> Result<(), AugurError> {
        match ticker.as_str() {
            "FAIL" => Err(AugurError::connector(
                "augur-mock",
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                // Orchestrator may time out depending on config
                tokio::time::sleep(TIMEOUT_DELAY).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl AugurConnector for MockConnector {
    fn name(&self) -> &'static str {
        "augur-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_forecast_provider(&self) -> Option<&dyn ForecastProvider> {
        Some(self as &dyn ForecastProvider)
    }

    fn as_watchlist_provider(&self) -> Option<&dyn WatchlistProvider> {
        Some(self as &dyn WatchlistProvider)
    }
}

#[async_trait]
impl ForecastProvider for MockConnector {
    async fn forecast(&self, ticker: &Ticker) -> Result<ForecastPayload, AugurError> {
        Self::maybe_fail_or_timeout(ticker, "forecast").await?;
        fixtures::forecast::by_ticker(ticker.as_str())
            .ok_or_else(|| AugurError::not_found(format!("forecast for {ticker}")))
    }
}

#[async_trait]
impl WatchlistProvider for MockConnector {
    async fn watchlist(&self) -> Result<Vec<Ticker>, AugurError> {
        fixtures::WATCHLIST.iter().map(|s| Ticker::new(s)).collect()
    }
}
