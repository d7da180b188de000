//! Crate-level error types.
//!
//! Mirrors the DLIS error taxonomy of the encoding/segmentation pipeline
//! (schema violations, representation-code overflow, attribute
//! reassignment conflicts, and internal invariant breaks). `InvariantBroken`
//! should never actually surface to a caller -- it marks a bug in this
//! crate, not a caller mistake -- but it is still a typed variant rather
//! than a panic, so callers embedding this crate in a long-running process
//! are not forced to catch unwinds.

use snafu::{Backtrace, Snafu};

/// Type alias for a result from this crate.
pub type Result<T, E = Error> = ::std::result::Result<T, E>;

/// The main data type for errors raised while building the in-memory
/// DLIS data model (attributes, items, sets).
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// An attribute value was of the wrong kind, an enumerated value fell
    /// outside the allowed set, or a cross-reference target was missing.
    #[snafu(display("schema violation in attribute `{label}` of `{item}`: {reason}"))]
    SchemaViolation {
        item: String,
        label: String,
        reason: String,
        backtrace: Backtrace,
    },

    /// A value could not be represented in the range of its representation
    /// code (UVARI over 2^30-1, a year outside 0-255, an IDENT longer than
    /// 255 bytes, a declared dimension mismatching the actual data, ...).
    #[snafu(display("value of `{label}` of `{item}` overflows its representation code: {reason}"))]
    EncodingOverflow {
        item: String,
        label: String,
        reason: String,
        backtrace: Backtrace,
    },

    /// An attribute was assigned two incompatible values, most commonly a
    /// second, different representation code after one was already fixed.
    #[snafu(display("conflicting assignment to `{label}` of `{item}`: {reason}"))]
    ConfigConflict {
        item: String,
        label: String,
        reason: String,
        backtrace: Backtrace,
    },

    /// Internal invariant broken; should never surface to a caller.
    #[snafu(display("internal invariant broken: {reason}"))]
    InvariantBroken {
        reason: String,
        backtrace: Backtrace,
    },
}

impl Error {
    /// Build a [`Error::SchemaViolation`] with the given item/label context.
    pub fn schema_violation(
        item: impl Into<String>,
        label: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SchemaViolationSnafu {
            item: item.into(),
            label: label.into(),
            reason: reason.into(),
        }
        .build()
    }

    /// Build a [`Error::EncodingOverflow`] with the given item/label context.
    pub fn encoding_overflow(
        item: impl Into<String>,
        label: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EncodingOverflowSnafu {
            item: item.into(),
            label: label.into(),
            reason: reason.into(),
        }
        .build()
    }

    /// Build a [`Error::ConfigConflict`] with the given item/label context.
    pub fn config_conflict(
        item: impl Into<String>,
        label: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConfigConflictSnafu {
            item: item.into(),
            label: label.into(),
            reason: reason.into(),
        }
        .build()
    }

    /// Build a [`Error::InvariantBroken`].
    pub fn invariant_broken(reason: impl Into<String>) -> Self {
        InvariantBrokenSnafu {
            reason: reason.into(),
        }
        .build()
    }
}
