//! Indicator helpers used when a payload arrives without precomputed technicals.

use augur_types::{AugurError, BacktestMetrics, InflectionKind, InflectionPoint};

/// Moving-average windows shown on the detailed chart, in legend order.
pub const MOVING_AVERAGE_WINDOWS: [usize; 4] = [15, 30, 60, 180];

/// Series tag for a moving average of `window` periods, e.g. `ma15`.
#[must_use]
pub fn moving_average_name(window: usize) -> String {
    format!("ma{window}")
}

/// Trailing simple moving average.
///
/// Position `i` averages `values[i + 1 - window ..= i]`. Positions before the
/// window fills, and windows containing a gap, are `None`.
///
/// # Errors
/// Returns `InvalidArg` when `window` is zero.
pub fn simple_moving_average(
    values: &[Option<f64>],
    window: usize,
) -> Result<Vec<Option<f64>>, AugurError> {
    if window == 0 {
        return Err(AugurError::InvalidArg(
            "moving average window must be positive".into(),
        ));
    }
    let mut out = vec![None; values.len()];
    let mut sum = 0.0;
    let mut gaps = 0usize;
    for (i, v) in values.iter().enumerate() {
        match v {
            Some(x) => sum += x,
            None => gaps += 1,
        }
        if i >= window {
            match values[i - window] {
                Some(x) => sum -= x,
                None => gaps -= 1,
            }
        }
        if i + 1 >= window && gaps == 0 {
            #[allow(clippy::cast_precision_loss)]
            let avg = sum / window as f64;
            out[i] = Some(avg);
        }
    }
    Ok(out)
}

/// Mean squared error and mean absolute percentage error of a backtest.
///
/// Only positions where both sides are present (and the actual is non-zero for
/// MAPE) contribute.
///
/// # Errors
/// - `ShapeMismatch` if the two sequences differ in length.
/// - `EmptySeries` if no position has both values.
pub fn backtest_metrics(
    actual: &[Option<f64>],
    predicted: &[Option<f64>],
) -> Result<BacktestMetrics, AugurError> {
    if actual.len() != predicted.len() {
        return Err(AugurError::shape(format!(
            "backtest actual has {} points, predicted has {}",
            actual.len(),
            predicted.len()
        )));
    }
    let pairs: Vec<(f64, f64)> = actual
        .iter()
        .zip(predicted)
        .filter_map(|(a, p)| Some(((*a)?, (*p)?)))
        .collect();
    if pairs.is_empty() {
        return Err(AugurError::EmptySeries);
    }
    #[allow(clippy::cast_precision_loss)]
    let n = pairs.len() as f64;
    let mse = pairs.iter().map(|(a, p)| (a - p).powi(2)).sum::<f64>() / n;

    let pct: Vec<f64> = pairs
        .iter()
        .filter(|(a, _)| *a != 0.0)
        .map(|(a, p)| ((a - p) / a).abs())
        .collect();
    #[allow(clippy::cast_precision_loss)]
    let mape = if pct.is_empty() {
        0.0
    } else {
        pct.iter().sum::<f64>() / pct.len() as f64 * 100.0
    };
    Ok(BacktestMetrics { mse, mape })
}

/// Split inflection points into `(peaks, valleys)`, preserving order.
#[must_use]
pub fn partition_inflections(
    points: &[InflectionPoint],
) -> (Vec<InflectionPoint>, Vec<InflectionPoint>) {
    points
        .iter()
        .copied()
        .partition(|p| p.kind == InflectionKind::Peak)
}
