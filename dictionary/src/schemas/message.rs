//! `MESSAGE`. A timestamped operational note (tool malfunction, stopped
//! pumps, etc.), located in the borehole at the time it was recorded.

use dlis_core::{Cardinality, ReprCode};

use crate::schema::{AttributeSpec, EflrSchema, EflrTypeCode};

pub static ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("TYPE", ReprCode::Ident, Cardinality::Single),
    AttributeSpec::new("TIME", ReprCode::DTime, Cardinality::Single),
    AttributeSpec::new("BOREHOLE-DRIFT", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("VERTICAL-DEPTH", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("RADIAL-DRIFT", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("ANGULAR-DRIFT", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("TEXT", ReprCode::Ascii, Cardinality::Multi),
];

pub static SCHEMA: EflrSchema = EflrSchema {
    set_type: "MESSAGE",
    logical_record_type: EflrTypeCode::Script,
    attributes: ATTRIBUTES,
};
