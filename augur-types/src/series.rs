//! Series model shared by the aligner, dataset assembly and renderers.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AugurError;

/// A position on the combined timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePoint {
    /// Ordinal position within the timeline.
    pub index: usize,
    /// Optional date or time label; the ordinal index stands in when absent.
    pub label: Option<String>,
}

impl TimePoint {
    /// A point labeled only by its ordinal.
    #[must_use]
    pub const fn ordinal(index: usize) -> Self {
        Self { index, label: None }
    }

    /// A point carrying an explicit label.
    pub fn labeled(index: usize, label: impl Into<String>) -> Self {
        Self {
            index,
            label: Some(label.into()),
        }
    }

    /// Label to show on an axis: the explicit label, or the ordinal.
    #[must_use]
    pub fn display(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.index.to_string())
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(l) => f.write_str(l),
            None => write!(f, "{}", self.index),
        }
    }
}

/// A raw input series anchored at an ordinal offset of the combined timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSeries {
    /// Series tag, e.g. "history", "`backtest_predicted`", "forecast", "ma15".
    pub name: String,
    /// Ordinal at which `values[0]` sits on the combined timeline.
    pub offset: usize,
    /// Ordered values; `None` entries are gaps.
    pub values: Vec<Option<f64>>,
    /// Join this series to the one preceding it in an alignment request.
    ///
    /// When set, the first non-null aligned value is replaced with the last
    /// non-null value of the preceding series so both render as one line.
    #[serde(default)]
    pub connector: bool,
}

impl NamedSeries {
    /// Build a series from nullable values.
    pub fn new(name: impl Into<String>, offset: usize, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            offset,
            values,
            connector: false,
        }
    }

    /// Build a series from dense values (no gaps).
    pub fn dense(name: impl Into<String>, offset: usize, values: &[f64]) -> Self {
        Self::new(name, offset, values.iter().copied().map(Some).collect())
    }

    /// Enable the connector rule for this series.
    #[must_use]
    pub const fn connected(mut self) -> Self {
        self.connector = true;
        self
    }

    /// Number of raw values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the series carries no values at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Exclusive end ordinal (`offset + len`) on the combined timeline.
    #[must_use]
    pub fn extent(&self) -> usize {
        self.offset.saturating_add(self.values.len())
    }
}

/// Category of an inflection point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InflectionKind {
    /// Local maximum.
    // Older producers emit "peark"; normalized here at the wire boundary.
    #[serde(alias = "peark")]
    Peak,
    /// Local minimum.
    Valley,
}

impl fmt::Display for InflectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Peak => f.write_str("peak"),
            Self::Valley => f.write_str("valley"),
        }
    }
}

/// A labeled local extremum of a price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflectionPoint {
    /// Ordinal index on the history timeline.
    pub index: usize,
    /// Price at the extremum.
    pub value: f64,
    /// Peak or valley.
    #[serde(rename = "type")]
    pub kind: InflectionKind,
}

/// One output series of an [`AlignedFrame`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignedSeries {
    /// Series tag carried over from the input.
    pub name: String,
    /// Values padded with `None` to the frame length.
    pub values: Vec<Option<f64>>,
}

/// Index-aligned chart dataset.
///
/// Every series has exactly as many values as there are labels. Frames are
/// immutable once built; zooming produces a new frame via [`AlignedFrame::slice`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignedFrame {
    labels: Vec<TimePoint>,
    series: Vec<AlignedSeries>,
    markers: Vec<InflectionPoint>,
}

impl AlignedFrame {
    /// Assemble a frame, checking the shared-length invariant.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if any series length differs from the label count
    /// or a marker index falls outside the timeline.
    pub fn from_parts(
        labels: Vec<TimePoint>,
        series: Vec<AlignedSeries>,
        markers: Vec<InflectionPoint>,
    ) -> Result<Self, AugurError> {
        let n = labels.len();
        if let Some(bad) = series.iter().find(|s| s.values.len() != n) {
            return Err(AugurError::shape(format!(
                "series '{}' has {} values, timeline has {n}",
                bad.name,
                bad.values.len()
            )));
        }
        if let Some(m) = markers.iter().find(|m| !labels.iter().any(|l| l.index == m.index)) {
            return Err(AugurError::shape(format!(
                "{} marker at index {} lies outside the timeline",
                m.kind, m.index
            )));
        }
        Ok(Self {
            labels,
            series,
            markers,
        })
    }

    /// Timeline labels.
    #[must_use]
    pub fn labels(&self) -> &[TimePoint] {
        &self.labels
    }

    /// Aligned series in input order.
    #[must_use]
    pub fn series(&self) -> &[AlignedSeries] {
        &self.series
    }

    /// Scatter markers (inflection points) overlaid on the frame.
    #[must_use]
    pub fn markers(&self) -> &[InflectionPoint] {
        &self.markers
    }

    /// Timeline length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True for a frame with no timeline positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Look up a series by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[Option<f64>]> {
        self.series
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.values.as_slice())
    }

    /// Attach scatter markers, consuming the frame.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` when a marker index is not on the timeline.
    pub fn with_markers(self, markers: Vec<InflectionPoint>) -> Result<Self, AugurError> {
        Self::from_parts(self.labels, self.series, markers)
    }

    /// Restrict the frame to the inclusive position window `[start, end]`.
    ///
    /// Labels keep their original ordinal indices so a zoomed frame can be
    /// mapped back onto the full timeline. Markers outside the window are dropped.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if `start > end` or `end` is past the last position.
    pub fn slice(&self, start: usize, end: usize) -> Result<Self, AugurError> {
        if start > end || end >= self.labels.len() {
            return Err(AugurError::shape(format!(
                "window [{start}, {end}] does not fit a timeline of {}",
                self.labels.len()
            )));
        }
        let labels = self.labels[start..=end].to_vec();
        let lo = labels.first().map_or(0, |l| l.index);
        let hi = labels.last().map_or(0, |l| l.index);
        let series = self
            .series
            .iter()
            .map(|s| AlignedSeries {
                name: s.name.clone(),
                values: s.values[start..=end].to_vec(),
            })
            .collect();
        let markers = self
            .markers
            .iter()
            .filter(|m| (lo..=hi).contains(&m.index))
            .copied()
            .collect();
        Ok(Self {
            labels,
            series,
            markers,
        })
    }
}
