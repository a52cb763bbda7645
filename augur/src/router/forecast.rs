use std::sync::Arc;

use augur_core::{AugurError, Capability, ForecastPayload, Ticker};

use crate::Augur;

impl Augur {
    /// Fetch the forecast payload for one ticker.
    ///
    /// Honors the builder's `FetchStrategy`: `PriorityWithFallback` tries
    /// connectors in order with the per-provider timeout and falls back on
    /// failure; `Latency` races every capable connector and returns the first
    /// success.
    ///
    /// # Errors
    /// - `Unsupported` if no connector serves forecasts.
    /// - `NotFound` if every attempted connector reported not-found.
    /// - `AllProvidersTimedOut` if every attempt timed out.
    /// - `AllProvidersFailed` otherwise.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "augur::router", skip(self), fields(ticker = %ticker))
    )]
    pub async fn forecast(&self, ticker: &Ticker) -> Result<ForecastPayload, AugurError> {
        self.fetch_single(
            Capability::Forecast,
            format!("forecast for {ticker}"),
            move |c| {
                c.as_forecast_provider()?;
                let c2 = Arc::clone(&c);
                let t = ticker.clone();
                Some(async move {
                    match c2.as_forecast_provider() {
                        Some(p) => p.forecast(&t).await,
                        None => Err(AugurError::connector(
                            c2.name(),
                            "missing forecast capability during call",
                        )),
                    }
                })
            },
        )
        .await
    }

    /// Parse a raw symbol and fetch its forecast.
    ///
    /// # Errors
    /// `InvalidArg` for a malformed symbol, otherwise as [`Augur::forecast`].
    pub async fn forecast_symbol(&self, symbol: &str) -> Result<ForecastPayload, AugurError> {
        let ticker = Ticker::new(symbol)?;
        self.forecast(&ticker).await
    }
}
