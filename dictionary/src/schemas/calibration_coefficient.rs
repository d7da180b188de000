//! `CALIBRATION-COEFFICIENT`. One linear (or higher-order) correction
//! applied to a Channel's raw samples, with its tolerances.

use dlis_core::{Cardinality, ReprCode};

use crate::schema::{AttributeSpec, EflrSchema, EflrTypeCode};

pub static ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("LABEL", ReprCode::Ident, Cardinality::Single),
    AttributeSpec::new("COEFFICIENTS", ReprCode::FDoubl, Cardinality::Multi),
    AttributeSpec::new("REFERENCES", ReprCode::FDoubl, Cardinality::Multi),
    AttributeSpec::new("PLUS-TOLERANCES", ReprCode::FDoubl, Cardinality::Multi),
    AttributeSpec::new("MINUS-TOLERANCES", ReprCode::FDoubl, Cardinality::Multi),
];

pub static SCHEMA: EflrSchema = EflrSchema {
    set_type: "CALIBRATION-COEFFICIENT",
    logical_record_type: EflrTypeCode::Static,
    attributes: ATTRIBUTES,
};
