//! `PARAMETER`. A named constant or per-zone value not tied to any Frame
//! (borehole diameter, mud weight, calibration date...).

use dlis_core::{Cardinality, ReprCode};

use crate::schema::{AttributeSpec, EflrSchema, EflrTypeCode};

pub static ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("LONG-NAME", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("DIMENSION", ReprCode::UVari, Cardinality::Multi),
    AttributeSpec::new("AXIS", ReprCode::ObName, Cardinality::Multi),
    AttributeSpec::new("ZONES", ReprCode::ObName, Cardinality::Multi),
    AttributeSpec::flexible("VALUES", Cardinality::Multi),
];

pub static SCHEMA: EflrSchema = EflrSchema {
    set_type: "PARAMETER",
    logical_record_type: EflrTypeCode::Static,
    attributes: ATTRIBUTES,
};
