//! Chart datasets assembled from a forecast payload.
//!
//! Two views are built from the same payload:
//! - the compact card sparkline (backtest period plus forecast), and
//! - the detailed view (full history, moving averages, inflection markers and
//!   the forecast overlay), which supports zooming by range preset.

use augur_types::{
    AlignedFrame, AugurError, ForecastPayload, InflectionPoint, NamedSeries,
};
use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::align::{RangePreset, align, align_labeled, last_non_null, locate_last_non_null};
use crate::technicals::{
    MOVING_AVERAGE_WINDOWS, moving_average_name, partition_inflections, simple_moving_average,
};

/// Series tags used in assembled frames.
pub mod names {
    /// Backtest actual prices on the sparkline.
    pub const ACTUAL: &str = "actual";
    /// Backtest predictions on the sparkline.
    pub const BACKTEST: &str = "backtest";
    /// Forecast horizon, joined to the last known price.
    pub const FORECAST: &str = "forecast";
    /// Full price history on the detailed view.
    pub const PRICE: &str = "price";
    /// Intraday prices.
    pub const INTRADAY: &str = "intraday";
}

/// Build the compact card chart.
///
/// Timeline: the backtest period followed by the forecast horizon. The
/// forecast starts on the last backtest position, seeded with the last actual
/// price and joined to it by the connector rule.
///
/// # Errors
/// - `EmptySeries` if the backtest has no actual prices.
/// - `ShapeMismatch` if the predicted series is longer than the timeline.
pub fn sparkline_frame(payload: &ForecastPayload) -> Result<AlignedFrame, AugurError> {
    let actual = &payload.backtest.actual;
    let seed = last_non_null(actual).ok_or(AugurError::EmptySeries)?;
    let total = actual.len() + payload.forecast.len();

    let series = [
        NamedSeries::new(names::BACKTEST, 0, payload.backtest.predicted.clone()),
        NamedSeries::new(names::ACTUAL, 0, actual.clone()),
        forecast_series(actual.len() - 1, seed, &payload.forecast),
    ];
    align(&series, total)
}

/// Expanded chart for one ticker, ready for zooming.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    /// Full aligned frame, inflection points attached as markers.
    pub frame: AlignedFrame,
    /// Peak markers.
    pub peaks: Vec<InflectionPoint>,
    /// Valley markers.
    pub valleys: Vec<InflectionPoint>,
    /// Position of the last known price; zoom windows are centered here.
    pub last_known_index: usize,
}

impl DetailView {
    /// Sub-frame for a range preset.
    ///
    /// # Errors
    /// Propagates window and slicing errors (`EmptySeries`, `ShapeMismatch`).
    pub fn zoom(&self, preset: RangePreset) -> Result<AlignedFrame, AugurError> {
        let (lookback, lookahead) = preset.span(self.last_known_index);
        let (start, end) = crate::align::compute_window(
            self.last_known_index,
            lookback,
            lookahead,
            self.frame.len(),
        )?;
        self.frame.slice(start, end)
    }
}

/// Build the detailed view.
///
/// - History is `full_history`, or the backtest actual prices when the payload
///   carries no full history.
/// - Moving averages come from the payload; arrays shorter than the history
///   are right-aligned to its end. Without technicals, the standard windows are
///   computed locally and windows longer than the history are skipped.
/// - The forecast overlay starts on the last history position and is joined
///   to the price line.
/// - With `dates` and `full_history`, labels are ISO dates and forecast
///   positions are labeled with the following weekdays. `dates` label the
///   full history only; on the backtest fallback they are ignored and the
///   labels are ordinals.
///
/// # Errors
/// - `EmptySeries` if the history has no prices.
/// - `ShapeMismatch` for moving averages longer than the history, a `dates`
///   list that does not match the full history, or inflection indices outside
///   it.
/// - `Data` for a moving average named `price` or `forecast`.
pub fn detail_view(payload: &ForecastPayload) -> Result<DetailView, AugurError> {
    let history: &[Option<f64>] = payload
        .full_history
        .as_deref()
        .unwrap_or(&payload.backtest.actual);
    let seed = last_non_null(history).ok_or(AugurError::EmptySeries)?;
    let hist_len = history.len();
    let total = hist_len + payload.forecast.len();

    let mut series = moving_averages(payload, history)?;
    series.push(NamedSeries::new(names::PRICE, 0, history.to_vec()));
    series.push(forecast_series(hist_len - 1, seed, &payload.forecast));

    let frame = match (&payload.full_history, &payload.dates) {
        (Some(_), Some(dates)) => {
            if dates.len() != hist_len {
                return Err(AugurError::shape(format!(
                    "{} dates supplied for {hist_len} history points",
                    dates.len()
                )));
            }
            align_labeled(&series, total, date_labels(dates, total))?
        }
        (None, Some(_)) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                ticker = %payload.ticker,
                "dates without full history; labeling the backtest by ordinal"
            );
            align(&series, total)?
        }
        _ => align(&series, total)?,
    };

    let points = payload
        .technicals
        .as_ref()
        .map(|t| t.trend_points.clone())
        .unwrap_or_default();
    if let Some(p) = points.iter().find(|p| p.index >= hist_len) {
        return Err(AugurError::shape(format!(
            "{} at index {} lies outside history of {hist_len}",
            p.kind, p.index
        )));
    }
    let (peaks, valleys) = partition_inflections(&points);
    let frame = frame.with_markers(points)?;
    let last_known_index = frame
        .get(names::PRICE)
        .map_or(0, locate_last_non_null);

    Ok(DetailView {
        frame,
        peaks,
        valleys,
        last_known_index,
    })
}

/// Zoom a detailed view by range tag.
///
/// # Errors
/// `UnknownRange` for an unrecognized tag, otherwise as [`DetailView::zoom`].
pub fn zoom(view: &DetailView, tag: &str) -> Result<AlignedFrame, AugurError> {
    view.zoom(tag.parse()?)
}

/// Build the intraday frame, if the payload has an intraday slice.
///
/// # Errors
/// - `EmptySeries` if the slice has no values.
/// - `ShapeMismatch` if labels are present but do not match the values.
pub fn intraday_frame(payload: &ForecastPayload) -> Result<Option<AlignedFrame>, AugurError> {
    let Some(intraday) = &payload.intraday else {
        return Ok(None);
    };
    let n = intraday.values.len();
    let series = [NamedSeries::new(names::INTRADAY, 0, intraday.values.clone())];
    let frame = match &intraday.labels {
        Some(labels) => align_labeled(&series, n, labels.clone())?,
        None => align(&series, n)?,
    };
    Ok(Some(frame))
}

fn forecast_series(offset: usize, seed: f64, horizon: &[Option<f64>]) -> NamedSeries {
    let mut values = Vec::with_capacity(horizon.len() + 1);
    values.push(Some(seed));
    values.extend_from_slice(horizon);
    NamedSeries::new(names::FORECAST, offset, values).connected()
}

fn moving_averages(
    payload: &ForecastPayload,
    history: &[Option<f64>],
) -> Result<Vec<NamedSeries>, AugurError> {
    let provided = payload
        .technicals
        .as_ref()
        .filter(|t| !t.mas.is_empty())
        .map(|t| &t.mas);

    let Some(mas) = provided else {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            ticker = %payload.ticker,
            "payload has no moving averages; deriving them from history"
        );
        let mut out = Vec::new();
        for window in MOVING_AVERAGE_WINDOWS {
            if window > history.len() {
                continue;
            }
            let values = simple_moving_average(history, window)?;
            out.push(NamedSeries::new(moving_average_name(window), 0, values));
        }
        return Ok(out);
    };

    let mut entries: Vec<(&String, &Vec<Option<f64>>)> = mas.iter().collect();
    entries.sort_by_key(|(name, _)| (ma_window(name).unwrap_or(usize::MAX), (*name).clone()));

    entries
        .into_iter()
        .map(|(name, values)| {
            if name == names::PRICE || name == names::FORECAST {
                return Err(AugurError::Data(format!(
                    "moving average named '{name}' collides with the {name} series"
                )));
            }
            let offset = history.len().checked_sub(values.len()).ok_or_else(|| {
                AugurError::shape(format!(
                    "moving average '{name}' has {} points, history has {}",
                    values.len(),
                    history.len()
                ))
            })?;
            Ok(NamedSeries::new(name.clone(), offset, values.clone()))
        })
        .collect()
}

fn ma_window(name: &str) -> Option<usize> {
    name.strip_prefix("ma")?.parse().ok()
}

fn date_labels(dates: &[NaiveDate], total: usize) -> Vec<String> {
    let mut labels: Vec<String> = dates.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect();
    let mut cursor = dates.last().copied();
    while labels.len() < total {
        cursor = cursor.and_then(next_weekday);
        match cursor {
            Some(d) => labels.push(d.format("%Y-%m-%d").to_string()),
            None => labels.push(format!("+{}", labels.len() + 1 - dates.len())),
        }
    }
    labels
}

fn next_weekday(d: NaiveDate) -> Option<NaiveDate> {
    let mut next = d.checked_add_days(Days::new(1))?;
    while matches!(next.weekday(), Weekday::Sat | Weekday::Sun) {
        next = next.checked_add_days(Days::new(1))?;
    }
    Some(next)
}
