//! Light/dark palettes handed to the chart renderer.
//!
//! The palette is plain data passed alongside an aligned frame; nothing here
//! holds global state.

use serde::{Deserialize, Serialize};

/// Dashboard color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark background (default).
    #[default]
    Dark,
    /// Light background.
    Light,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Colors for this theme.
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                actual: "#94a3b8",
                grid: "#334155",
                text: "#f8fafc",
                backtest: BACKTEST_COLOR,
                forecast: FORECAST_COLOR,
            },
            Self::Light => Palette {
                actual: "#64748b",
                grid: "#cbd5e1",
                text: "#0f172a",
                backtest: BACKTEST_COLOR,
                forecast: FORECAST_COLOR,
            },
        }
    }
}

const BACKTEST_COLOR: &str = "#38bdf8";
const FORECAST_COLOR: &str = "#4ade80";

/// Line and axis colors, as CSS hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Actual price line.
    pub actual: &'static str,
    /// Grid lines.
    pub grid: &'static str,
    /// Legend and tick labels.
    pub text: &'static str,
    /// Backtest prediction line.
    pub backtest: &'static str,
    /// Forecast line.
    pub forecast: &'static str,
}
