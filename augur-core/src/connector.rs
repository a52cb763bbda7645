use async_trait::async_trait;

use crate::AugurError;
pub use augur_types::ConnectorKey;
use augur_types::{ForecastPayload, Ticker};

/// Focused role trait for connectors that serve forecast payloads.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch the forecast payload (backtest, horizon, technicals) for a ticker.
    async fn forecast(&self, ticker: &Ticker) -> Result<ForecastPayload, AugurError>;
}

/// Focused role trait for connectors that publish a default watchlist.
#[async_trait]
pub trait WatchlistProvider: Send + Sync {
    /// Fetch the tickers shown when the dashboard first opens.
    async fn watchlist(&self) -> Result<Vec<Ticker>, AugurError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
#[async_trait]
pub trait AugurConnector: Send + Sync {
    /// A stable identifier for priority lists (e.g., "augur-http", "augur-mock").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise forecast capability by returning a usable trait object reference when supported.
    fn as_forecast_provider(&self) -> Option<&dyn ForecastProvider> {
        None
    }

    /// Advertise watchlist capability by returning a usable trait object reference when supported.
    fn as_watchlist_provider(&self) -> Option<&dyn WatchlistProvider> {
        None
    }
}
