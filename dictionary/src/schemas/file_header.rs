//! `FILE-HEADER`. Written with its own fixed-width 10/65-byte encoding
//! rather than the generic template/body layout (RP66 V1 §5.1), so this
//! schema exists mainly to give the writer crate a `logical_record_type`
//! and a place to hang the two field labels.

use dlis_core::{Cardinality, ReprCode};

use crate::schema::{AttributeSpec, EflrSchema, EflrTypeCode};

pub static ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("SEQUENCE-NUMBER", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("ID", ReprCode::Ascii, Cardinality::Single),
];

pub static SCHEMA: EflrSchema = EflrSchema {
    set_type: "FILE-HEADER",
    logical_record_type: EflrTypeCode::Fhlr,
    attributes: ATTRIBUTES,
};
