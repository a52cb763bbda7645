use augur_types::{AlignedFrame, AlignedSeries, AugurError, NamedSeries, TimePoint};

use super::scan::{last_non_null, locate_first_non_null};

/// Merge independently-lengthed series onto one timeline of `total_length`
/// ordinal positions.
///
/// - Each output series is `None` × offset, then its own values, then `None`
///   up to `total_length`.
/// - A series flagged `connector` gets its first non-null aligned value
///   replaced with the last non-null value of the series immediately before it
///   in `series`. The preceding series is left untouched. Without a preceding
///   series, or when either side is entirely null, the rule does nothing.
/// - Labels are the ordinals `0..total_length`.
///
/// # Errors
/// - `EmptySeries` if `total_length` is zero.
/// - `ShapeMismatch` if any series extends past `total_length`, or if
///   `total_length` is not exactly the largest `offset + len` among the series.
///
/// Shapes are validated before any output is built.
pub fn align(series: &[NamedSeries], total_length: usize) -> Result<AlignedFrame, AugurError> {
    let labels = (0..total_length).map(TimePoint::ordinal).collect();
    align_inner(series, total_length, labels)
}

/// Same as [`align`], attaching one string label per timeline position.
///
/// # Errors
/// Everything [`align`] rejects, plus `ShapeMismatch` when
/// `labels.len() != total_length`.
pub fn align_labeled(
    series: &[NamedSeries],
    total_length: usize,
    labels: Vec<String>,
) -> Result<AlignedFrame, AugurError> {
    if labels.len() != total_length {
        return Err(AugurError::shape(format!(
            "{} labels supplied for a timeline of {total_length}",
            labels.len()
        )));
    }
    let labels = labels
        .into_iter()
        .enumerate()
        .map(|(i, l)| TimePoint::labeled(i, l))
        .collect();
    align_inner(series, total_length, labels)
}

fn align_inner(
    series: &[NamedSeries],
    total_length: usize,
    labels: Vec<TimePoint>,
) -> Result<AlignedFrame, AugurError> {
    validate_shape(series, total_length)?;

    let mut out: Vec<AlignedSeries> = Vec::with_capacity(series.len());
    for (i, s) in series.iter().enumerate() {
        let mut values = pad(s, total_length);
        if s.connector && i > 0 {
            let join = last_non_null(&out[i - 1].values);
            if let (Some(v), Some(pos)) = (join, locate_first_non_null(&values)) {
                values[pos] = Some(v);
            }
        }
        out.push(AlignedSeries {
            name: s.name.clone(),
            values,
        });
    }

    AlignedFrame::from_parts(labels, out, Vec::new())
}

fn validate_shape(series: &[NamedSeries], total_length: usize) -> Result<(), AugurError> {
    if total_length == 0 {
        return Err(AugurError::EmptySeries);
    }
    let mut max_extent = 0usize;
    for s in series {
        let extent = s
            .offset
            .checked_add(s.values.len())
            .ok_or_else(|| AugurError::shape(format!("series '{}' offset overflows", s.name)))?;
        if extent > total_length {
            return Err(AugurError::shape(format!(
                "series '{}' spans [{}, {extent}) past timeline length {total_length}",
                s.name, s.offset
            )));
        }
        max_extent = max_extent.max(extent);
    }
    if max_extent != total_length {
        return Err(AugurError::shape(format!(
            "timeline length {total_length} does not match longest series extent {max_extent}"
        )));
    }
    Ok(())
}

fn pad(s: &NamedSeries, total_length: usize) -> Vec<Option<f64>> {
    let mut values = Vec::with_capacity(total_length);
    values.resize(s.offset, None);
    values.extend_from_slice(&s.values);
    values.resize(total_length, None);
    values
}
