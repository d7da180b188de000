//! `CALIBRATION-MEASUREMENT`. One raw measurement taken during a
//! calibration pass (before/after a coefficient is applied).

use dlis_core::{Cardinality, ReprCode};

use crate::schema::{AttributeSpec, EflrSchema, EflrTypeCode};

pub static ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("PHASE", ReprCode::Ident, Cardinality::Single),
    AttributeSpec::new("MEASUREMENT-SOURCE", ReprCode::ObjRef, Cardinality::Single),
    AttributeSpec::new("TYPE", ReprCode::Ident, Cardinality::Single),
    AttributeSpec::new("DIMENSION", ReprCode::UVari, Cardinality::Multi),
    AttributeSpec::new("AXIS", ReprCode::ObName, Cardinality::Multi),
    AttributeSpec::new("MEASUREMENT", ReprCode::FDoubl, Cardinality::Multi),
    // Resolved Open Question: kept scalar, matching RP66 V1's definition
    // of a measurement set's single sample count rather than one count
    // per dimension.
    AttributeSpec::new("SAMPLE-COUNT", ReprCode::UVari, Cardinality::Single),
    AttributeSpec::new("MAXIMUM-DEVIATION", ReprCode::FDoubl, Cardinality::Multi),
    AttributeSpec::new("STANDARD-DEVIATION", ReprCode::FDoubl, Cardinality::Multi),
    AttributeSpec::new("BEGIN-TIME", ReprCode::DTime, Cardinality::Single),
    AttributeSpec::new("DURATION", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("REFERENCE", ReprCode::FDoubl, Cardinality::Multi),
    AttributeSpec::new("STANDARD", ReprCode::FDoubl, Cardinality::Multi),
    AttributeSpec::new("PLUS-TOLERANCE", ReprCode::FDoubl, Cardinality::Multi),
    AttributeSpec::new("MINUS-TOLERANCE", ReprCode::FDoubl, Cardinality::Multi),
];

pub static SCHEMA: EflrSchema = EflrSchema {
    set_type: "CALIBRATION-MEASUREMENT",
    logical_record_type: EflrTypeCode::Static,
    attributes: ATTRIBUTES,
};
