//! `LONG-NAME`. A structured, many-part name that other Objects'
//! `LONG-NAME` attribute can reference by `OBNAME` instead of inlining a
//! free-text description.

use dlis_core::{Cardinality, ReprCode};

use crate::schema::{AttributeSpec, EflrSchema, EflrTypeCode};

pub static ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("GENERAL-MODIFIER", ReprCode::Ascii, Cardinality::Multi),
    AttributeSpec::new("QUANTITY", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("QUANTITY-MODIFIER", ReprCode::Ascii, Cardinality::Multi),
    AttributeSpec::new("ALTERED-FORM", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("ENTITY", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("ENTITY-MODIFIER", ReprCode::Ascii, Cardinality::Multi),
    AttributeSpec::new("ENTITY-NUMBER", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("ENTITY-PART", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("ENTITY-PART-NUMBER", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("GENERIC-SOURCE", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("SOURCE-PART", ReprCode::Ascii, Cardinality::Multi),
    AttributeSpec::new("SOURCE-PART-NUMBER", ReprCode::Ascii, Cardinality::Multi),
    AttributeSpec::new("CONDITIONS", ReprCode::Ascii, Cardinality::Multi),
    AttributeSpec::new("STANDARD-SYMBOL", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("PRIVATE-SYMBOL", ReprCode::Ascii, Cardinality::Single),
];

pub static SCHEMA: EflrSchema = EflrSchema {
    set_type: "LONG-NAME",
    logical_record_type: EflrTypeCode::Lname,
    attributes: ATTRIBUTES,
};
