//! Augur orchestrates forecast requests across connectors and assembles the
//! chart frames of a forecast dashboard.
//!
//! Overview
//! - Routes requests to connectors implementing the `augur_core` contracts,
//!   in registration order or an explicit preference order.
//! - `PriorityWithFallback` tries connectors one by one with a per-provider
//!   timeout; `Latency` races them and keeps the first success.
//! - Dashboard cards are loaded sequentially; per-ticker failures become
//!   warnings instead of failing the batch.
//! - Detail views and zoom windows come from `augur_core::datasets`.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use augur::{Augur, RangePreset};
//! use augur_core::Ticker;
//!
//! let augur = Augur::builder()
//!     .with_connector(Arc::new(augur_mock::MockConnector::new()))
//!     .build()?;
//!
//! let report = augur.load_default_dashboard().await?;
//! for card in &report.cards {
//!     println!("{} mape={:.2}%", card.ticker, card.metrics.mape);
//! }
//! let week = augur.zoom(&Ticker::new("AAPL")?, RangePreset::SevenDays.as_str()).await?;
//! ```
#![warn(missing_docs)]

mod core;
mod router;

pub use crate::core::{Augur, AugurBuilder};
pub use augur_core::{
    AlignedFrame, AugurConfig, AugurError, CacheConfig, DashboardCard, DashboardReport,
    DetailView, FetchStrategy, Palette, RangePreset, Theme, Ticker, TickerFailure,
};
