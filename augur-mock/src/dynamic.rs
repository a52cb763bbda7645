use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use augur_core::connector::{AugurConnector, ForecastProvider, WatchlistProvider};
use augur_core::{AugurError, ForecastPayload, Ticker};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(AugurError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    forecast_rules: HashMap<Ticker, MockBehavior<ForecastPayload>>,
    watchlist_rule: Option<MockBehavior<Vec<Ticker>>>,
    forecast_requests: Vec<Ticker>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `forecast` calls for a specific ticker.
    pub async fn set_forecast_behavior(
        &self,
        ticker: Ticker,
        behavior: MockBehavior<ForecastPayload>,
    ) {
        let mut guard = self.state.lock().await;
        guard.forecast_rules.insert(ticker, behavior);
    }

    /// Set the behavior for `watchlist` calls.
    pub async fn set_watchlist_behavior(&self, behavior: MockBehavior<Vec<Ticker>>) {
        let mut guard = self.state.lock().await;
        guard.watchlist_rule = Some(behavior);
    }

    /// Tickers requested through `forecast`, in call order.
    pub async fn forecast_requests(&self) -> Vec<Ticker> {
        self.state.lock().await.forecast_requests.clone()
    }

    /// Clear all configured behaviors and request logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.forecast_rules.clear();
        guard.watchlist_rule = None;
        guard.forecast_requests.clear();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Calls without a configured behavior fail with `NotFound`.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn AugurConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn AugurConnector>, controller)
    }
}

async fn run<T>(behavior: Option<MockBehavior<T>>, what: String) -> Result<T, AugurError> {
    match behavior {
        Some(MockBehavior::Return(v)) => Ok(v),
        Some(MockBehavior::Fail(e)) => Err(e),
        Some(MockBehavior::Hang) => std::future::pending().await,
        None => Err(AugurError::not_found(what)),
    }
}

#[async_trait]
impl AugurConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_forecast_provider(&self) -> Option<&dyn ForecastProvider> {
        Some(self as &dyn ForecastProvider)
    }

    fn as_watchlist_provider(&self) -> Option<&dyn WatchlistProvider> {
        Some(self as &dyn WatchlistProvider)
    }
}

#[async_trait]
impl ForecastProvider for DynamicMockConnector {
    async fn forecast(&self, ticker: &Ticker) -> Result<ForecastPayload, AugurError> {
        // Snapshot the behavior without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.forecast_requests.push(ticker.clone());
            guard.forecast_rules.get(ticker).cloned()
        };
        run(behavior, format!("forecast for {ticker}")).await
    }
}

#[async_trait]
impl WatchlistProvider for DynamicMockConnector {
    async fn watchlist(&self) -> Result<Vec<Ticker>, AugurError> {
        let behavior = self.state.lock().await.watchlist_rule.clone();
        run(behavior, "watchlist".to_string()).await
    }
}
