//! Crate-level error type for `dlis-encoding`.

use snafu::{Backtrace, Snafu};

/// Type alias for a result from this crate.
pub type Result<T, E = Error> = ::std::result::Result<T, E>;

/// Errors raised while encoding or decoding DLIS wire bytes.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// Re-export of the data-model errors raised by `dlis-core` (an
    /// attribute value out of range, a conflicting representation code,
    /// ...), surfaced unchanged at this layer.
    #[snafu(display("{source}"), context(false))]
    DataModel {
        source: dlis_core::Error,
        backtrace: Backtrace,
    },

    /// A value or string exceeded the wire limits of its representation
    /// code (UVARI over 2^30-1, IDENT/UNITS text over 255 bytes, a DTIME
    /// field out of its valid range, ...).
    #[snafu(display("{what} does not fit in its wire encoding: {reason}"))]
    WireOverflow {
        what: String,
        reason: String,
        backtrace: Backtrace,
    },

    /// Bytes could not be decoded back into a value: truncated input, an
    /// invalid discriminant byte, non-UTF8 text, ...
    #[snafu(display("malformed {what}: {reason}"))]
    Malformed {
        what: String,
        reason: String,
        backtrace: Backtrace,
    },

    /// A logical record's whole body could not be packed into any Visible
    /// Record of the configured maximum length (the body plus the minimum
    /// fragment overhead exceeds the maximum visible-record length).
    #[snafu(display(
        "logical record body of {body_len} bytes cannot be segmented into visible records of at most {max_vr_len} bytes"
    ))]
    RecordTooLarge {
        body_len: usize,
        max_vr_len: usize,
        backtrace: Backtrace,
    },
}

impl Error {
    /// Build a [`Error::WireOverflow`].
    pub fn wire_overflow(what: impl Into<String>, reason: impl Into<String>) -> Self {
        WireOverflowSnafu {
            what: what.into(),
            reason: reason.into(),
        }
        .build()
    }

    /// Build a [`Error::Malformed`].
    pub fn malformed(what: impl Into<String>, reason: impl Into<String>) -> Self {
        MalformedSnafu {
            what: what.into(),
            reason: reason.into(),
        }
        .build()
    }
}
