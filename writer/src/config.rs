//! Writer-wide settings threaded through a single write session.

/// Default maximum Visible Record length, per RP66 V1.
pub const DEFAULT_MAX_VISIBLE_RECORD_LEN: u16 = dlis_encoding::segmenter::DEFAULT_MAX_VISIBLE_RECORD_LEN;
/// Default number of rows pulled from a [`crate::source_data::SourceData`]
/// at a time.
pub const DEFAULT_ROW_CHUNK_SIZE: usize = 100_000;
/// Default size, in bytes, of one output flush.
pub const DEFAULT_BYTE_CHUNK_SIZE: u64 = 4 * 1024 * 1024 * 1024;

/// Settings for one [`crate::file::DlisFile`] write session.
///
/// Grounded in Design Notes' resolution of the "high compatibility" open
/// question: an explicit field threaded through the writer, not global
/// state, so two `DlisFile`s in the same process can run under different
/// policies.
#[derive(Debug, Clone, PartialEq)]
pub struct WriterConfig {
    /// Maximum Visible Record length (even, `20..=16384`).
    pub max_visible_record_len: u16,
    /// When `true`, conditions that are ordinarily a `tracing::warn!`
    /// (non-standard units, non-uniform Frame spacing, a non-standard
    /// index type) are promoted to a hard [`crate::error::Error`].
    pub high_compatibility: bool,
    /// Number of rows pulled from a `SourceData` chunk at a time.
    pub row_chunk_size: usize,
    /// Target size, in bytes, of one output flush. Not currently load-
    /// bearing (the writer buffers a whole file in memory before a single
    /// write), but kept as a tunable for a future streaming output path.
    pub byte_chunk_size: u64,
}

impl Default for WriterConfig {
    fn default() -> Self {
        WriterConfig {
            max_visible_record_len: DEFAULT_MAX_VISIBLE_RECORD_LEN,
            high_compatibility: false,
            row_chunk_size: DEFAULT_ROW_CHUNK_SIZE,
            byte_chunk_size: DEFAULT_BYTE_CHUNK_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_rp66_and_design_notes() {
        let config = WriterConfig::default();
        assert_eq!(config.max_visible_record_len, 8192);
        assert!(!config.high_compatibility);
        assert_eq!(config.row_chunk_size, 100_000);
    }
}
