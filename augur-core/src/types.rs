//! Re-export of foundational types from `augur-types`.
// Consolidated re-exports so downstream crates can depend on `augur-core` only

pub use augur_types::{AugurConfig, AugurError, CacheConfig, Capability, FetchStrategy};

pub use augur_types::ConnectorKey;

pub use augur_types::{
    AlignedFrame, AlignedSeries, InflectionKind, InflectionPoint, NamedSeries, TimePoint,
};

pub use augur_types::{
    Backtest, BacktestMetrics, ErrorBody, ForecastPayload, IntradaySeries, Technicals, Ticker,
};

pub use augur_types::{DashboardCard, DashboardReport, Palette, Theme, TickerFailure};
