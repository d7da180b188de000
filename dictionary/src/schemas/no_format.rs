//! `NO-FORMAT`. Declares a stream of opaque bytes (e.g. an embedded
//! image or vendor blob) that `NOFMT` Indirectly Formatted Logical
//! Records will carry, addressed by this Object's `OBNAME`.

use dlis_core::{Cardinality, ReprCode};

use crate::schema::{AttributeSpec, EflrSchema, EflrTypeCode};

pub static ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("CONSUMER-NAME", ReprCode::Ident, Cardinality::Single),
    AttributeSpec::new("DESCRIPTION", ReprCode::Ascii, Cardinality::Single),
];

pub static SCHEMA: EflrSchema = EflrSchema {
    set_type: "NO-FORMAT",
    logical_record_type: EflrTypeCode::Udi,
    attributes: ATTRIBUTES,
};
