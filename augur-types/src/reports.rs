//! Report envelopes produced by the orchestrator.

use serde::Serialize;

use crate::error::AugurError;
use crate::payload::{BacktestMetrics, ForecastPayload};
use crate::series::AlignedFrame;
use crate::ticker::Ticker;

/// One dashboard card: a ticker's payload and its compact chart.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardCard {
    /// Ticker shown on the card.
    pub ticker: Ticker,
    /// Backtest accuracy displayed in the card overlay.
    pub metrics: BacktestMetrics,
    /// Backtest plus forecast sparkline.
    pub sparkline: AlignedFrame,
    /// Raw payload, kept so the detailed view can be opened without refetching.
    pub payload: ForecastPayload,
}

/// A ticker that could not be turned into a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickerFailure {
    /// Requested ticker.
    pub ticker: String,
    /// Why the card could not be built.
    pub error: AugurError,
}

/// Summary of a dashboard load.
///
/// Cards appear in load order. Per-ticker failures are collected in
/// `warnings` without aborting the batch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardReport {
    /// Successfully built cards.
    pub cards: Vec<DashboardCard>,
    /// Non-fatal issues encountered while loading.
    pub warnings: Vec<TickerFailure>,
}

impl DashboardReport {
    /// Find a card by ticker.
    #[must_use]
    pub fn card(&self, ticker: &str) -> Option<&DashboardCard> {
        self.cards.iter().find(|c| c.ticker.as_str() == ticker)
    }
}
