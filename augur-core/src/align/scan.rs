/// Index of the last non-null value.
///
/// Scans from the end. Returns `0` when every value is `None` or the slice is
/// empty; callers treat that as "nothing known yet" rather than an error.
#[must_use]
pub fn locate_last_non_null(values: &[Option<f64>]) -> usize {
    values.iter().rposition(Option::is_some).unwrap_or(0)
}

/// Index of the first non-null value, if any.
#[must_use]
pub fn locate_first_non_null(values: &[Option<f64>]) -> Option<usize> {
    values.iter().position(Option::is_some)
}

/// Last non-null value, if any.
#[must_use]
pub fn last_non_null(values: &[Option<f64>]) -> Option<f64> {
    values.iter().rev().find_map(|v| *v)
}
