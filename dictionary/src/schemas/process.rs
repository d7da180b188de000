//! `PROCESS`. Documents a processing step and the Channels/Computations
//! it consumed and produced.

use dlis_core::{Cardinality, ReprCode};

use crate::schema::{AttributeSpec, EflrSchema, EflrTypeCode};

pub static ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("DESCRIPTION", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("TRADEMARK-NAME", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("VERSION", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("PROPERTIES", ReprCode::Ident, Cardinality::Multi),
    AttributeSpec::new("STATUS", ReprCode::Ident, Cardinality::Single),
    AttributeSpec::new("INPUT-CHANNELS", ReprCode::ObName, Cardinality::Multi),
    AttributeSpec::new("OUTPUT-CHANNELS", ReprCode::ObName, Cardinality::Multi),
    AttributeSpec::new("INPUT-COMPUTATIONS", ReprCode::ObName, Cardinality::Multi),
    AttributeSpec::new("OUTPUT-COMPUTATIONS", ReprCode::ObName, Cardinality::Multi),
    AttributeSpec::new("PARAMETERS", ReprCode::ObName, Cardinality::Multi),
    AttributeSpec::new("COMMENTS", ReprCode::Ascii, Cardinality::Multi),
];

pub static SCHEMA: EflrSchema = EflrSchema {
    set_type: "PROCESS",
    logical_record_type: EflrTypeCode::Static,
    attributes: ATTRIBUTES,
};
