//! Wire shapes exchanged with the forecast backend.
//!
//! These mirror the JSON served by `/api/predict/<ticker>`. Fields the backend
//! may omit are optional; unknown fields are ignored.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AugurError;
use crate::series::InflectionPoint;

/// Accuracy of the backtest over the held-out period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BacktestMetrics {
    /// Mean squared error of predicted vs actual prices.
    pub mse: f64,
    /// Mean absolute percentage error, in percent.
    pub mape: f64,
}

/// Actual and predicted prices over the backtest period.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Backtest {
    /// Realized prices.
    pub actual: Vec<Option<f64>>,
    /// Model predictions for the same periods.
    pub predicted: Vec<Option<f64>>,
}

/// Precomputed indicators for the detailed view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Technicals {
    /// Moving averages keyed by tag (`ma15`, `ma30`, ...).
    #[serde(default)]
    pub mas: BTreeMap<String, Vec<Option<f64>>>,
    /// Labeled peaks and valleys on the full history.
    #[serde(default)]
    pub trend_points: Vec<InflectionPoint>,
}

/// Intraday price slice with optional time labels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IntradaySeries {
    /// Prices in time order.
    pub values: Vec<Option<f64>>,
    /// Time-of-day labels, one per value when present.
    #[serde(default)]
    pub labels: Option<Vec<String>>,
}

/// Full forecast response for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPayload {
    /// Ticker the forecast was computed for.
    pub ticker: String,
    /// Backtest accuracy; derived locally when absent.
    #[serde(default)]
    pub metrics: Option<BacktestMetrics>,
    /// Backtest actual/predicted pair.
    pub backtest: Backtest,
    /// Forecast horizon beyond the last actual price.
    pub forecast: Vec<Option<f64>>,
    /// Complete price history for the detailed view.
    #[serde(default)]
    pub full_history: Option<Vec<Option<f64>>>,
    /// Trading dates matching `full_history` one to one.
    #[serde(default)]
    pub dates: Option<Vec<NaiveDate>>,
    /// Moving averages and inflection points.
    #[serde(default)]
    pub technicals: Option<Technicals>,
    /// Intraday slice.
    #[serde(default)]
    pub intraday: Option<IntradaySeries>,
}

impl ForecastPayload {
    /// Parse a payload from a JSON body.
    ///
    /// # Errors
    /// Returns `Data` when the body is not a valid payload.
    pub fn from_json_str(body: &str) -> Result<Self, AugurError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Error body returned by the backend on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure message.
    pub error: String,
}
