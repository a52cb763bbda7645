use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use augur_core::connector::{ForecastProvider, WatchlistProvider};
use augur_core::{AugurConnector, AugurError, ForecastPayload, Ticker};
use augur_types::{CacheConfig, Capability};
use moka::future::Cache;

/// Declarative wrapper that applies caching when building a connector stack.
pub struct CacheMiddleware {
    cfg: CacheConfig,
}

impl CacheMiddleware {
    /// Layer name reported through [`augur_core::Middleware::name`].
    pub const NAME: &'static str = "CachingMiddleware";

    /// Layer that caches with `cfg`.
    #[must_use]
    pub const fn new(cfg: CacheConfig) -> Self {
        Self { cfg }
    }
}

impl augur_core::Middleware for CacheMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn AugurConnector>) -> Arc<dyn AugurConnector> {
        let Self { cfg } = *self;
        Arc::new(CachingConnector::new(inner, &cfg))
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.cfg).unwrap_or(serde_json::Value::Null)
    }
}

/// Connector wrapper memoizing forecast payloads per ticker.
///
/// Only successful payloads are stored. The watchlist is passed through.
pub struct CachingConnector {
    inner: Arc<dyn AugurConnector>,
    // `None` when the TTL is zero.
    forecasts: Option<Cache<Ticker, Arc<ForecastPayload>>>,
}

impl CachingConnector {
    /// Wrap `inner`; a zero TTL leaves caching off.
    #[must_use]
    pub fn new(inner: Arc<dyn AugurConnector>, cfg: &CacheConfig) -> Self {
        let forecasts = (cfg.ttl_ms > 0).then(|| {
            Cache::builder()
                .max_capacity(cfg.capacity.max(1))
                .time_to_live(Duration::from_millis(cfg.ttl_ms))
                .build()
        });
        Self { inner, forecasts }
    }

    /// Drop any cached payload for `ticker`.
    pub async fn invalidate(&self, ticker: &Ticker) {
        if let Some(cache) = &self.forecasts {
            cache.invalidate(ticker).await;
        }
    }

    fn inner_forecast(&self) -> Result<&dyn ForecastProvider, AugurError> {
        self.inner
            .as_forecast_provider()
            .ok_or_else(|| AugurError::unsupported(Capability::Forecast.as_str()))
    }
}

#[async_trait]
impl AugurConnector for CachingConnector {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn vendor(&self) -> &'static str {
        self.inner.vendor()
    }

    fn as_forecast_provider(&self) -> Option<&dyn ForecastProvider> {
        self.inner
            .as_forecast_provider()
            .map(|_| self as &dyn ForecastProvider)
    }

    fn as_watchlist_provider(&self) -> Option<&dyn WatchlistProvider> {
        self.inner.as_watchlist_provider()
    }
}

#[async_trait]
impl ForecastProvider for CachingConnector {
    async fn forecast(&self, ticker: &Ticker) -> Result<ForecastPayload, AugurError> {
        let Some(cache) = &self.forecasts else {
            return self.inner_forecast()?.forecast(ticker).await;
        };
        if let Some(hit) = cache.get(ticker).await {
            #[cfg(feature = "tracing")]
            tracing::debug!(ticker = %ticker, connector = self.inner.name(), "forecast cache hit");
            return Ok((*hit).clone());
        }
        let value = self.inner_forecast()?.forecast(ticker).await?;
        cache.insert(ticker.clone(), Arc::new(value.clone())).await;
        Ok(value)
    }
}
