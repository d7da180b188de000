//! `GROUP`. An arbitrary named collection of Objects of one type, or of
//! other Groups.

use dlis_core::{Cardinality, ReprCode};

use crate::schema::{AttributeSpec, EflrSchema, EflrTypeCode};

pub static ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("DESCRIPTION", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("OBJECT-TYPE", ReprCode::Ident, Cardinality::Single),
    AttributeSpec::new("OBJECT-LIST", ReprCode::ObName, Cardinality::Multi),
    AttributeSpec::new("GROUP-LIST", ReprCode::ObName, Cardinality::Multi),
];

pub static SCHEMA: EflrSchema = EflrSchema {
    set_type: "GROUP",
    logical_record_type: EflrTypeCode::Static,
    attributes: ATTRIBUTES,
};
