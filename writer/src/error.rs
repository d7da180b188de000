//! Crate-level error type for the top-level `dlis` writer API.

use std::path::PathBuf;

use snafu::{Backtrace, IntoError, Snafu};

/// Type alias for a result from this crate.
pub type Result<T, E = Error> = ::std::result::Result<T, E>;

/// Errors raised while assembling or writing a DLIS file.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// Re-export of the data-model errors raised by `dlis-core` (a
    /// conflicting representation code, a cardinality violation, ...).
    #[snafu(display("{source}"), context(false))]
    DataModel {
        source: dlis_core::Error,
        backtrace: Backtrace,
    },

    /// Re-export of the byte-encoding errors raised by `dlis-encoding` (a
    /// value overflowing its wire representation, a record too large to
    /// segment, ...).
    #[snafu(display("{source}"), context(false))]
    Encoding {
        source: dlis_encoding::Error,
        backtrace: Backtrace,
    },

    /// The destination path could not be written to.
    #[snafu(display("failed to write `{}`: {source}", path.display()))]
    Io {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

impl Error {
    /// Wrap an [`std::io::Error`] with the path that was being written.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoSnafu { path: path.into() }.into_error(source)
    }
}
