use std::collections::HashSet;

use augur_core::{
    AugurError, DashboardCard, DashboardReport, ForecastPayload, Ticker, TickerFailure,
    backtest_metrics, sparkline_frame,
};

use crate::Augur;

impl Augur {
    /// Load one card per ticker.
    ///
    /// Cards are loaded sequentially, one request in flight at a time, so a
    /// backend that trains on demand is not flooded. Repeated tickers are
    /// loaded once. A ticker whose forecast cannot be fetched or charted is
    /// recorded in `warnings` and the batch continues.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "augur::router", skip(self, tickers), fields(count = tickers.len()))
    )]
    pub async fn load_dashboard(&self, tickers: &[Ticker]) -> DashboardReport {
        let mut report = DashboardReport::default();
        let mut seen: HashSet<&Ticker> = HashSet::new();

        for ticker in tickers {
            if !seen.insert(ticker) {
                continue;
            }
            let card = match self.forecast(ticker).await {
                Ok(payload) => build_card(ticker, payload),
                Err(e) => Err(e),
            };
            match card {
                Ok(card) => report.cards.push(card),
                Err(error) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(ticker = %ticker, error = %error, "skipping dashboard card");
                    report.warnings.push(TickerFailure {
                        ticker: ticker.to_string(),
                        error,
                    });
                }
            }
        }
        report
    }

    /// Load the dashboard for raw symbols, recording malformed ones as warnings.
    pub async fn load_dashboard_symbols(&self, symbols: &[&str]) -> DashboardReport {
        let mut tickers = Vec::with_capacity(symbols.len());
        let mut invalid = Vec::new();
        for s in symbols {
            match Ticker::new(s) {
                Ok(t) => tickers.push(t),
                Err(error) => invalid.push(TickerFailure {
                    ticker: (*s).to_string(),
                    error,
                }),
            }
        }
        let mut report = self.load_dashboard(&tickers).await;
        report.warnings.extend(invalid);
        report
    }

    /// Load the dashboard for the default watchlist.
    ///
    /// # Errors
    /// Propagates the watchlist routing error; per-card failures become warnings.
    pub async fn load_default_dashboard(&self) -> Result<DashboardReport, AugurError> {
        let tickers = self.watchlist().await?;
        Ok(self.load_dashboard(&tickers).await)
    }
}

fn build_card(ticker: &Ticker, payload: ForecastPayload) -> Result<DashboardCard, AugurError> {
    let sparkline = sparkline_frame(&payload)?;
    let metrics = match payload.metrics {
        Some(m) => m,
        None => backtest_metrics(&payload.backtest.actual, &payload.backtest.predicted)?,
    };
    Ok(DashboardCard {
        ticker: ticker.clone(),
        metrics,
        sparkline,
        payload,
    })
}
