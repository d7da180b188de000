//! `COMPUTATION`. A derived value computed from one or more Channels,
//! optionally restricted to a set of Zones.

use dlis_core::{Cardinality, ReprCode};

use crate::schema::{AttributeSpec, EflrSchema, EflrTypeCode};

pub static ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("LONG-NAME", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("PROPERTIES", ReprCode::Ident, Cardinality::Multi),
    AttributeSpec::new("DIMENSION", ReprCode::UVari, Cardinality::Multi),
    AttributeSpec::new("AXIS", ReprCode::ObName, Cardinality::Multi),
    AttributeSpec::new("ZONES", ReprCode::ObName, Cardinality::Multi),
    AttributeSpec::new("VALUES", ReprCode::FDoubl, Cardinality::Multi),
    AttributeSpec::new("SOURCE", ReprCode::ObjRef, Cardinality::Single),
];

pub static SCHEMA: EflrSchema = EflrSchema {
    set_type: "COMPUTATION",
    logical_record_type: EflrTypeCode::Static,
    attributes: ATTRIBUTES,
};
