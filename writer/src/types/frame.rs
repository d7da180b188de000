//! `FRAME`: the layout of one family of FrameData records -- an index
//! Channel and the ordered data Channels that follow it in every row.

use dlis_core::obname::ObName;
use dlis_dictionary::schemas::frame::SCHEMA;

use crate::builder::EflrObjectBuilder;
use crate::error::{Error, Result};
use crate::types::channel::ChannelHandle;

/// Relative deviation, from the mean spacing, a Frame's index samples
/// are allowed before spacing is considered non-uniform.
const SPACING_TOLERANCE: f64 = 0.001;

/// The index types RP66 V1 allows for a Frame's `INDEX-TYPE` attribute.
pub const ALLOWED_INDEX_TYPES: &[&str] = &[
    "ANGULAR-DRIFT",
    "BOREHOLE-DEPTH",
    "NON-STANDARD",
    "RADIAL-DRIFT",
    "VERTICAL-DEPTH",
    "TIME",
];

/// How a Frame's index is established.
#[derive(Debug, Clone)]
pub enum FrameIndex {
    /// No explicit index Channel: rows are indexed `1..=n_rows`.
    RowNumber { n_rows: usize },
    /// An explicit index Channel, with its full column of values supplied
    /// up front so spacing/direction/min/max can be computed without
    /// streaming the whole Frame through [`crate::source_data::SourceData`]
    /// first.
    Explicit {
        channel: ChannelHandle,
        index_type: String,
        values: Vec<f64>,
    },
}

/// Summary statistics the FRAME record's `DIRECTION`/`SPACING`/
/// `INDEX-MIN`/`INDEX-MAX` attributes are derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct IndexStats {
    pub direction: Direction,
    pub spacing: f64,
    pub index_min: f64,
    pub index_max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Increasing,
    Decreasing,
}

impl Direction {
    fn as_ident(self) -> &'static str {
        match self {
            Direction::Increasing => "INCREASING",
            Direction::Decreasing => "DECREASING",
        }
    }
}

/// The Frame record: one data-row layout, its index, and the Channels
/// carried in every row.
#[derive(Debug, Clone)]
pub struct Frame {
    pub name: String,
    pub description: Option<String>,
    pub channels: Vec<ChannelHandle>,
    pub index: FrameIndex,
    pub encrypted: bool,
}

/// A Frame registered with a [`crate::file::DlisFile`], ready to accept
/// FrameData rows.
#[derive(Debug, Clone)]
pub struct FrameHandle {
    pub obname: ObName,
    pub channels: Vec<ChannelHandle>,
}

impl Frame {
    pub fn new(name: impl Into<String>, channels: Vec<ChannelHandle>) -> Self {
        Frame {
            name: name.into(),
            description: None,
            channels,
            index: FrameIndex::RowNumber { n_rows: 0 },
            encrypted: false,
        }
    }

    pub fn with_row_number_index(mut self, n_rows: usize) -> Self {
        self.index = FrameIndex::RowNumber { n_rows };
        self
    }

    pub fn with_explicit_index(
        mut self,
        channel: ChannelHandle,
        index_type: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<Self> {
        let index_type = index_type.into();
        if !ALLOWED_INDEX_TYPES.contains(&index_type.as_str()) {
            return Err(Error::from(dlis_core::Error::schema_violation(
                &self.name,
                "INDEX-TYPE",
                format!("`{index_type}` is not one of {ALLOWED_INDEX_TYPES:?}"),
            )));
        }
        self.index = FrameIndex::Explicit {
            channel,
            index_type,
            values,
        };
        Ok(self)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn index_stats(&self, high_compatibility: bool) -> Result<(&'static str, IndexStats)> {
        match &self.index {
            FrameIndex::RowNumber { n_rows } => Ok((
                "BOREHOLE-DEPTH",
                IndexStats {
                    direction: Direction::Increasing,
                    spacing: 1.0,
                    index_min: 1.0,
                    index_max: (*n_rows).max(1) as f64,
                },
            )),
            FrameIndex::Explicit {
                index_type, values, ..
            } => {
                let stats = uniform_index_stats(values, high_compatibility, &self.name)?;
                Ok((index_type.as_str(), stats))
            }
        }
    }

    pub(crate) fn build_attributes(
        &self,
        high_compatibility: bool,
    ) -> Result<Vec<dlis_core::Attribute>> {
        let mut builder = EflrObjectBuilder::new(&SCHEMA);
        if let Some(description) = &self.description {
            builder.set_text("DESCRIPTION", dlis_core::ReprCode::Ascii, description.clone())?;
        }
        let channel_names: Vec<ObName> = self.channels.iter().map(|c| c.obname.clone()).collect();
        builder.set_obname_list("CHANNELS", &channel_names)?;
        let (index_type, stats) = self.index_stats(high_compatibility)?;
        builder.set_text("INDEX-TYPE", dlis_core::ReprCode::Ident, index_type.to_string())?;
        builder.set_text(
            "DIRECTION",
            dlis_core::ReprCode::Ident,
            stats.direction.as_ident().to_string(),
        )?;
        builder.set_f64("SPACING", stats.spacing)?;
        builder.set_status("ENCRYPTED", self.encrypted)?;
        builder.set_f64("INDEX-MIN", stats.index_min)?;
        builder.set_f64("INDEX-MAX", stats.index_max)?;
        Ok(builder.into_attributes())
    }
}

/// Compute spacing/direction/min/max from an explicit index column.
///
/// Direction is inferred from the sign of consecutive differences: all
/// non-negative is `INCREASING`, all non-positive is `DECREASING`, a mix
/// of both is a schema violation (RP66 V1 requires a Frame's index to be
/// monotonic). Spacing is the mean step; a step deviating from the mean
/// by more than [`SPACING_TOLERANCE`] is non-uniform, which is only a
/// `tracing::warn!` unless `high_compatibility` is set.
fn uniform_index_stats(
    values: &[f64],
    high_compatibility: bool,
    frame_name: &str,
) -> Result<IndexStats> {
    if values.len() < 2 {
        return Err(Error::from(dlis_core::Error::schema_violation(
            frame_name,
            "INDEX-MIN",
            "an explicit Frame index needs at least two samples to establish direction and spacing",
        )));
    }

    let diffs: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    let increasing = diffs.iter().all(|d| *d >= 0.0);
    let decreasing = diffs.iter().all(|d| *d <= 0.0);
    let direction = match (increasing, decreasing) {
        (true, _) => Direction::Increasing,
        (_, true) => Direction::Decreasing,
        _ => {
            return Err(Error::from(dlis_core::Error::schema_violation(
                frame_name,
                "DIRECTION",
                "index values are neither monotonically increasing nor decreasing",
            )))
        }
    };

    let mean_spacing = diffs.iter().sum::<f64>() / diffs.len() as f64;
    let max_relative_deviation = diffs
        .iter()
        .map(|d| {
            if mean_spacing == 0.0 {
                0.0
            } else {
                ((d - mean_spacing) / mean_spacing).abs()
            }
        })
        .fold(0.0, f64::max);

    if max_relative_deviation > SPACING_TOLERANCE {
        let message = format!(
            "Frame `{frame_name}` index spacing deviates {:.4}% from its mean of {mean_spacing}",
            max_relative_deviation * 100.0
        );
        if high_compatibility {
            return Err(Error::from(dlis_core::Error::schema_violation(
                frame_name,
                "SPACING",
                message,
            )));
        }
        tracing::warn!("{message}");
    }

    let index_min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let index_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(IndexStats {
        direction,
        spacing: mean_spacing,
        index_min,
        index_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_number_index_spans_one_to_n_rows() {
        let frame = Frame::new("MAIN", Vec::new()).with_row_number_index(100);
        let (index_type, stats) = frame.index_stats(false).unwrap();
        assert_eq!(index_type, "BOREHOLE-DEPTH");
        assert_eq!(stats.index_min, 1.0);
        assert_eq!(stats.index_max, 100.0);
    }

    #[test]
    fn uniform_increasing_spacing_is_detected() {
        let values = vec![0.0, 0.5, 1.0, 1.5, 2.0];
        let stats = uniform_index_stats(&values, false, "MAIN").unwrap();
        assert_eq!(stats.direction, Direction::Increasing);
        assert!((stats.spacing - 0.5).abs() < 1e-9);
        assert_eq!(stats.index_min, 0.0);
        assert_eq!(stats.index_max, 2.0);
    }

    #[test]
    fn decreasing_index_is_detected() {
        let values = vec![10.0, 9.0, 8.0, 7.0];
        let stats = uniform_index_stats(&values, false, "MAIN").unwrap();
        assert_eq!(stats.direction, Direction::Decreasing);
    }

    #[test]
    fn mixed_direction_is_rejected() {
        let values = vec![1.0, 2.0, 1.5];
        assert!(uniform_index_stats(&values, false, "MAIN").is_err());
    }

    #[test]
    fn non_uniform_spacing_is_only_a_warning_by_default() {
        let values = vec![0.0, 1.0, 2.5, 3.0];
        assert!(uniform_index_stats(&values, false, "MAIN").is_ok());
    }

    #[test]
    fn non_uniform_spacing_is_an_error_in_high_compatibility_mode() {
        let values = vec![0.0, 1.0, 2.5, 3.0];
        assert!(uniform_index_stats(&values, true, "MAIN").is_err());
    }

    #[test]
    fn unknown_index_type_is_rejected() {
        let channel = ChannelHandle {
            obname: ObName::new(1, 0, "DEPTH"),
            name: "DEPTH".to_string(),
            representation_code: dlis_core::ReprCode::FDoubl,
            element_count: 1,
        };
        let frame = Frame::new("MAIN", Vec::new());
        assert!(frame
            .with_explicit_index(channel, "NOT-AN-INDEX-TYPE", vec![0.0, 1.0])
            .is_err());
    }
}
