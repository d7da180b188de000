//! `TOOL`. Groups Equipment parts, the Channels they produce and the
//! Parameters that configure them into one named logging tool.

use dlis_core::{Cardinality, ReprCode};

use crate::schema::{AttributeSpec, EflrSchema, EflrTypeCode};

pub static ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("DESCRIPTION", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("TRADEMARK-NAME", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("GENERIC-NAME", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("PARTS", ReprCode::ObName, Cardinality::Multi),
    AttributeSpec::new("STATUS", ReprCode::Status, Cardinality::Single),
    AttributeSpec::new("CHANNELS", ReprCode::ObName, Cardinality::Multi),
    AttributeSpec::new("PARAMETERS", ReprCode::ObName, Cardinality::Multi),
];

pub static SCHEMA: EflrSchema = EflrSchema {
    set_type: "TOOL",
    logical_record_type: EflrTypeCode::Static,
    attributes: ATTRIBUTES,
};
