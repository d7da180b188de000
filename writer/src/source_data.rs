//! The pull-based adapter a caller implements to hand channel samples to
//! the writer without loading an entire log into memory at once.

use std::collections::HashMap;

use dlis_core::repr_code::ReprCode;
use dlis_core::value::PrimitiveValue;

use crate::error::Result;

/// A source of Channel sample data, pulled in row-range chunks.
///
/// Mirrors the adapter boundary the original Python writer draws between
/// "whatever numpy/HDF5/LAS reader the caller has" and the writer itself:
/// this crate never owns a whole dataset, only asks for the rows it needs
/// right now.
pub trait SourceData {
    /// The total number of rows (samples per channel) this source holds.
    fn n_rows(&self) -> usize;

    /// Map a Channel's name to whatever key this source uses to look up
    /// its values (a column name, an HDF5 dataset path, ...). Returns
    /// `None` if this source has no data for that channel.
    fn dataset_key(&self, channel_name: &str) -> Option<&str>;

    /// Load one contiguous, half-open row range `[start, stop)` for the
    /// given channel, one pre-flattened [`PrimitiveValue`] per row (a
    /// multidimensional channel's row is itself a multi-element value).
    fn load_chunk(
        &self,
        channel_name: &str,
        start: usize,
        stop: usize,
    ) -> Result<Vec<PrimitiveValue>>;

    /// A hint of each channel's natural representation code, used when a
    /// Channel's `REPRESENTATION-CODE` is left for the writer to infer.
    /// Sources that do not track this may return an empty map; the
    /// writer then falls back to the code already fixed on the Channel.
    fn known_dtypes(&self) -> HashMap<String, ReprCode> {
        HashMap::new()
    }
}

/// A [`SourceData`] backed entirely by in-memory vectors, useful for
/// tests and for small logs that comfortably fit in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySourceData {
    n_rows: usize,
    channels: HashMap<String, Vec<PrimitiveValue>>,
}

impl InMemorySourceData {
    /// Start an in-memory source with a known row count and no channels.
    pub fn new(n_rows: usize) -> Self {
        InMemorySourceData {
            n_rows,
            channels: HashMap::new(),
        }
    }

    /// Add one channel's full column of row values.
    ///
    /// Fails if `values.len()` does not match this source's row count --
    /// every channel in one Frame must supply exactly one sample per row.
    pub fn with_channel(
        mut self,
        name: impl Into<String>,
        values: Vec<PrimitiveValue>,
    ) -> Result<Self> {
        let name = name.into();
        if values.len() != self.n_rows {
            return Err(dlis_core::Error::schema_violation(
                &name,
                "VALUES",
                format!(
                    "{} rows supplied, source declares {} rows",
                    values.len(),
                    self.n_rows
                ),
            )
            .into());
        }
        self.channels.insert(name, values);
        Ok(self)
    }
}

impl SourceData for InMemorySourceData {
    fn n_rows(&self) -> usize {
        self.n_rows
    }

    fn dataset_key(&self, channel_name: &str) -> Option<&str> {
        self.channels.contains_key(channel_name).then_some(channel_name)
    }

    fn load_chunk(
        &self,
        channel_name: &str,
        start: usize,
        stop: usize,
    ) -> Result<Vec<PrimitiveValue>> {
        let column = self.channels.get(channel_name).ok_or_else(|| {
            dlis_core::Error::schema_violation(
                channel_name,
                "VALUES",
                "no data registered for this channel",
            )
        })?;
        Ok(column[start..stop].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_chunk_slices_the_requested_range() {
        let values = (0..10).map(|i| PrimitiveValue::single_f64(i as f64)).collect();
        let source = InMemorySourceData::new(10)
            .with_channel("DEPT", values)
            .unwrap();
        let chunk = source.load_chunk("DEPT", 2, 5).unwrap();
        assert_eq!(chunk.len(), 3);
    }

    #[test]
    fn mismatched_row_count_is_rejected() {
        let values = vec![PrimitiveValue::single_f64(1.0)];
        assert!(InMemorySourceData::new(10)
            .with_channel("DEPT", values)
            .is_err());
    }

    #[test]
    fn unknown_channel_has_no_dataset_key() {
        let source = InMemorySourceData::new(0);
        assert_eq!(source.dataset_key("DEPT"), None);
    }
}
