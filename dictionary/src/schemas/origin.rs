//! `ORIGIN`. One per file; carries the `FILE-SET-NUMBER` that every other
//! Object's `OBNAME` origin reference points back to.

use dlis_core::{Cardinality, ReprCode};

use crate::schema::{AttributeSpec, EflrSchema, EflrTypeCode};

pub static ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("FILE-ID", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("FILE-SET-NAME", ReprCode::Ident, Cardinality::Single),
    AttributeSpec::new("FILE-SET-NUMBER", ReprCode::UVari, Cardinality::Single),
    AttributeSpec::new("FILE-NUMBER", ReprCode::UVari, Cardinality::Single),
    AttributeSpec::new("FILE-TYPE", ReprCode::Ident, Cardinality::Single),
    AttributeSpec::new("PRODUCT", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("VERSION", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("PROGRAMS", ReprCode::Ascii, Cardinality::Multi),
    AttributeSpec::new("CREATION-TIME", ReprCode::DTime, Cardinality::Single),
    AttributeSpec::new("ORDER-NUMBER", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("DESCENT-NUMBER", ReprCode::UNorm, Cardinality::Single),
    AttributeSpec::new("RUN-NUMBER", ReprCode::UNorm, Cardinality::Single),
    AttributeSpec::new("WELL-ID", ReprCode::UNorm, Cardinality::Single),
    AttributeSpec::new("WELL-NAME", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("FIELD-NAME", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("PRODUCER-CODE", ReprCode::UNorm, Cardinality::Single),
    AttributeSpec::new("PRODUCER-NAME", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("COMPANY", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("NAME-SPACE-NAME", ReprCode::Ident, Cardinality::Single),
    AttributeSpec::new("NAME-SPACE-VERSION", ReprCode::UVari, Cardinality::Single),
];

pub static SCHEMA: EflrSchema = EflrSchema {
    set_type: "ORIGIN",
    logical_record_type: EflrTypeCode::Olr,
    attributes: ATTRIBUTES,
};
