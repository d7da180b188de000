//! Declarative schema tables for every RP66 V1 EFLR record type this
//! writer knows how to produce.
//!
//! Each record type (`CHANNEL`, `FRAME`, `ORIGIN`, ...) is expressed as a
//! `const`-friendly [`schema::EflrSchema`]: a `SET-TYPE`, a Logical
//! Record type code, and an ordered list of Attribute labels with their
//! representation codes and cardinalities. One generic builder in the
//! `dlis` crate walks these tables to emit both a Set's shared template
//! and each Object's body, rather than hand-writing an encoder per type.

#![deny(trivial_casts, trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(missing_debug_implementations, unused_qualifications, unused_import_braces)]

pub mod registry;
pub mod schema;
pub mod schemas;

pub use registry::schema_by_set_type;
pub use schema::{AttributeSpec, EflrSchema, EflrTypeCode};
