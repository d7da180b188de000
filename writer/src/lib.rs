#![deny(trivial_casts, trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(missing_debug_implementations, unused_qualifications, unused_import_braces)]

//! A writer for RP66 V1 ("DLIS") well-log files.
//!
//! [`DlisFile`] is the entry point: register a file's `ORIGIN` and
//! `FILE-HEADER`, then any `CHANNEL`s, `FRAME`s, and other EFLR records
//! the log needs, and call [`DlisFile::write_to_path`] with a
//! [`SourceData`] supplying the bulk row data. Everything below this
//! layer -- the value model in `dlis-core`, the wire codecs and
//! segmenter in `dlis-encoding`, and the record schemas in
//! `dlis-dictionary` -- is re-exported here for convenience but can be
//! used on its own by a caller building a lower-level tool.

pub mod builder;
pub mod config;
pub mod error;
pub mod file;
pub mod registry;
pub mod set;
pub mod source_data;
pub mod sul;
pub mod types;

pub use builder::EflrObjectBuilder;
pub use config::WriterConfig;
pub use error::{Error, Result};
pub use file::DlisFile;
pub use registry::Registry;
pub use set::EflrSetBuilder;
pub use source_data::{InMemorySourceData, SourceData};
pub use sul::StorageUnitLabel;
pub use types::*;

pub use dlis_core as core;
pub use dlis_dictionary as dictionary;
pub use dlis_encoding as encoding;
