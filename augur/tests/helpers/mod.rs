#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use augur_core::connector::{AugurConnector, ForecastProvider, WatchlistProvider};
use augur_core::{AugurError, Backtest, ForecastPayload, Ticker};

/// Minimal payload: three actual prices, a matching backtest and a two-step horizon.
pub fn payload(ticker: &str) -> ForecastPayload {
    ForecastPayload {
        ticker: ticker.to_string(),
        metrics: None,
        backtest: Backtest {
            actual: vec![Some(10.0), Some(11.0), Some(12.0)],
            predicted: vec![Some(10.0), Some(12.0), Some(12.0)],
        },
        forecast: vec![Some(13.0), Some(14.0)],
        full_history: None,
        dates: None,
        technicals: None,
        intraday: None,
    }
}

pub fn t(s: &str) -> Ticker {
    Ticker::new(s).expect("valid ticker")
}

/// Wraps another connector, counting forecast calls and tracking how many run at once.
pub struct CountingConnector {
    pub name: &'static str,
    pub inner: Arc<dyn AugurConnector>,
    pub delay: Duration,
    pub calls: AtomicUsize,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

impl CountingConnector {
    pub fn new(name: &'static str, inner: Arc<dyn AugurConnector>, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            name,
            inner,
            delay,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AugurConnector for CountingConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_forecast_provider(&self) -> Option<&dyn ForecastProvider> {
        Some(self as &dyn ForecastProvider)
    }

    fn as_watchlist_provider(&self) -> Option<&dyn WatchlistProvider> {
        self.inner.as_watchlist_provider()
    }
}

#[async_trait]
impl ForecastProvider for CountingConnector {
    async fn forecast(&self, ticker: &Ticker) -> Result<ForecastPayload, AugurError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        let res = match self.inner.as_forecast_provider() {
            Some(p) => p.forecast(ticker).await,
            None => Err(AugurError::unsupported("forecast")),
        };
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        res
    }
}

/// Connector advertising no capabilities at all.
pub struct Inert;

impl AugurConnector for Inert {
    fn name(&self) -> &'static str {
        "inert"
    }
}
