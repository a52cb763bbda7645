use core::fmt;
use core::str::FromStr;

use augur_types::AugurError;
use serde::{Deserialize, Serialize};

/// Lookahead used by the `"all"` preset; matches the forecast horizon served by
/// the backend.
pub const DEFAULT_LOOKAHEAD: usize = 10;

/// Symbolic zoom range emitted by the range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RangePreset {
    /// `"1d"`: one period either side of the last known value.
    OneDay,
    /// `"3d"`
    ThreeDays,
    /// `"7d"`
    SevenDays,
    /// `"1m"`: roughly one trading month back, two weeks ahead.
    OneMonth,
    /// `"all"`: everything up to the last known value plus the horizon.
    All,
}

impl RangePreset {
    /// Every preset, in selector order.
    pub const ALL: [Self; 5] = [
        Self::OneDay,
        Self::ThreeDays,
        Self::SevenDays,
        Self::OneMonth,
        Self::All,
    ];

    /// The tag used on the wire and in the UI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::ThreeDays => "3d",
            Self::SevenDays => "7d",
            Self::OneMonth => "1m",
            Self::All => "all",
        }
    }

    /// `(lookback, lookahead)` for this preset.
    ///
    /// `All` looks back to the start of the timeline, so it needs the last known index.
    #[must_use]
    pub const fn span(self, last_known_index: usize) -> (usize, usize) {
        match self {
            Self::OneDay => (1, 1),
            Self::ThreeDays => (3, 3),
            Self::SevenDays => (7, 7),
            Self::OneMonth => (22, 10),
            Self::All => (last_known_index, DEFAULT_LOOKAHEAD),
        }
    }
}

impl fmt::Display for RangePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangePreset {
    type Err = AugurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| AugurError::unknown_range(s))
    }
}

impl TryFrom<String> for RangePreset {
    type Error = AugurError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RangePreset> for String {
    fn from(p: RangePreset) -> Self {
        p.as_str().to_string()
    }
}

/// Inclusive `(start, end)` window around `last_known_index`.
///
/// `start = max(0, last - lookback)` and `end = min(total - 1, last + lookahead)`,
/// so `0 <= start <= last <= end <= total - 1`.
///
/// # Errors
/// - `EmptySeries` if `total_length` is zero.
/// - `ShapeMismatch` if `last_known_index` is not on the timeline.
pub fn compute_window(
    last_known_index: usize,
    lookback: usize,
    lookahead: usize,
    total_length: usize,
) -> Result<(usize, usize), AugurError> {
    if total_length == 0 {
        return Err(AugurError::EmptySeries);
    }
    if last_known_index >= total_length {
        return Err(AugurError::shape(format!(
            "last known index {last_known_index} outside timeline of {total_length}"
        )));
    }
    let start = last_known_index.saturating_sub(lookback);
    let end = last_known_index
        .saturating_add(lookahead)
        .min(total_length - 1);
    Ok((start, end))
}

/// Resolve a preset tag and compute its window.
///
/// # Errors
/// `UnknownRange` for an unrecognized tag, otherwise as [`compute_window`].
pub fn window_for_preset(
    tag: &str,
    last_known_index: usize,
    total_length: usize,
) -> Result<(usize, usize), AugurError> {
    let preset: RangePreset = tag.parse()?;
    let (lookback, lookahead) = preset.span(last_known_index);
    compute_window(last_known_index, lookback, lookahead, total_length)
}
