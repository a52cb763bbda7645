//! Augur-specific data transfer objects: the series model handed to chart
//! renderers, the forecast payload served by the backend, and the shared error
//! and configuration primitives.
#![warn(missing_docs)]

mod capability;
mod config;
mod connector;
mod error;
mod payload;
mod reports;
mod series;
mod theme;
mod ticker;

pub use capability::Capability;
pub use config::{AugurConfig, CacheConfig, FetchStrategy};
pub use connector::ConnectorKey;
pub use error::AugurError;
pub use payload::{
    Backtest, BacktestMetrics, ErrorBody, ForecastPayload, IntradaySeries, Technicals,
};
pub use reports::{DashboardCard, DashboardReport, TickerFailure};
pub use series::{
    AlignedFrame, AlignedSeries, InflectionKind, InflectionPoint, NamedSeries, TimePoint,
};
pub use theme::{Palette, Theme};
pub use ticker::Ticker;
