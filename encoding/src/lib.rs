#![deny(trivial_casts, trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(missing_debug_implementations, unused_qualifications, unused_import_braces)]

//! Byte-level encoding for RP66 V1 ("DLIS") well-log files.
//!
//! This crate turns the value-level building blocks defined by `dlis-core`
//! into wire bytes: the primitive codecs in [`basic`] and [`value_codec`],
//! Attribute template/body encoding in [`attribute`], full EFLR body
//! assembly in [`eflr`], IFLR (FrameData / NoFormat) body assembly in
//! [`iflr`], Logical Record Segment framing in [`lrs`], and the Visible
//! Record segmentation procedure in [`segmenter`]. It does not know
//! anything about *which* record types exist or what their templates look
//! like -- that is `dlis-dictionary` and `dlis`'s job.

pub mod attribute;
pub mod basic;
pub mod eflr;
pub mod error;
pub mod iflr;
pub mod lrs;
pub mod segmenter;
pub mod value_codec;

pub use eflr::{encode_eflr_body, EflrItem, EflrSet};
pub use error::{Error, Result};
pub use iflr::{encode_frame_data, encode_no_format_data, ChannelSample, IflrKind};
pub use segmenter::{segment_records, LogicalRecord, DEFAULT_MAX_VISIBLE_RECORD_LEN};
