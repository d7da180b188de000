//! `CHANNEL`. Describes one data column that a Frame's samples are drawn
//! from: its representation code, physical units, dimensionality and
//! source.

use dlis_core::{Cardinality, ReprCode};

use crate::schema::{AttributeSpec, EflrSchema, EflrTypeCode};

pub static ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("LONG-NAME", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("PROPERTIES", ReprCode::Ident, Cardinality::Multi),
    AttributeSpec::new("REPRESENTATION-CODE", ReprCode::UShort, Cardinality::Single),
    AttributeSpec::new("UNITS", ReprCode::Units, Cardinality::Single),
    AttributeSpec::new("DIMENSION", ReprCode::UVari, Cardinality::Multi),
    AttributeSpec::new("AXIS", ReprCode::ObName, Cardinality::Multi),
    AttributeSpec::new("ELEMENT-LIMIT", ReprCode::UVari, Cardinality::Multi),
    AttributeSpec::new("SOURCE", ReprCode::ObjRef, Cardinality::Single),
    AttributeSpec::new("MINIMUM-VALUE", ReprCode::FDoubl, Cardinality::Multi),
    AttributeSpec::new("MAXIMUM-VALUE", ReprCode::FDoubl, Cardinality::Multi),
];

pub static SCHEMA: EflrSchema = EflrSchema {
    set_type: "CHANNEL",
    logical_record_type: EflrTypeCode::Channl,
    attributes: ATTRIBUTES,
};
