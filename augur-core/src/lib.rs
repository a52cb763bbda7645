//! augur-core
//!
//! Core types, traits, and utilities shared across the augur workspace.
//!
//! - `types`: the series model, wire payload, errors and configuration.
//! - `align`: the series aligner (padding onto a shared timeline, zoom windows).
//! - `datasets`: chart frames assembled from a forecast payload.
//! - `technicals`: moving averages and backtest metrics computed locally.
//! - `connector`: the `AugurConnector` trait and capability provider traits.
//!
//! Alignment and dataset assembly are synchronous and pure. Only the connector
//! traits are async; they assume a Tokio 1.x runtime in practice but do not
//! depend on it.
#![warn(missing_docs)]

/// Series alignment, scans and zoom windows.
pub mod align;
/// Connector capability traits and the primary `AugurConnector` interface.
pub mod connector;
/// Chart datasets assembled from forecast payloads.
pub mod datasets;
/// Middleware trait implemented by connector wrappers.
pub mod middleware;
/// Indicator helpers.
pub mod technicals;
pub mod types;

pub use align::{
    RangePreset, align, align_labeled, compute_window, locate_last_non_null, window_for_preset,
};
pub use connector::AugurConnector;
pub use datasets::{DetailView, detail_view, intraday_frame, sparkline_frame, zoom};
pub use middleware::Middleware;
pub use technicals::{backtest_metrics, partition_inflections, simple_moving_average};
pub use types::*;
