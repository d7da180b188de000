#![deny(trivial_casts, trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(missing_debug_implementations, unused_qualifications, unused_import_braces)]

//! Core data model for RP66 V1 ("DLIS") compliant well-log writers.
//!
//! This crate defines the value-level building blocks shared by every other
//! `dlis-*` crate: the 27 Representation Codes, the [`Attribute`] type that
//! pairs a labeled value with its wire shape, the [`ObName`]/[`ObjRef`]
//! cross-reference identifiers, and the error taxonomy used throughout the
//! write pipeline. It does not know how to turn any of this into bytes --
//! that is `dlis-encoding`'s job.

pub mod attribute;
pub mod error;
pub mod obname;
pub mod repr_code;
pub mod value;

pub use attribute::{Attribute, Cardinality};
pub use error::{Error, Result};
pub use obname::{ObName, ObjRef};
pub use repr_code::ReprCode;
pub use value::{DateTime, PrimitiveValue, TimeZoneCode};
