//! `PATH`. Maps a Frame's Channels onto the depth/time reference that a
//! `WELL-REFERENCE-POINT` establishes.

use dlis_core::{Cardinality, ReprCode};

use crate::schema::{AttributeSpec, EflrSchema, EflrTypeCode};

pub static ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("FRAME-TYPE", ReprCode::ObName, Cardinality::Single),
    AttributeSpec::new("WELL-REFERENCE-POINT", ReprCode::ObName, Cardinality::Single),
    AttributeSpec::new("VALUE", ReprCode::ObName, Cardinality::Multi),
    AttributeSpec::new("BOREHOLE-DEPTH", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("VERTICAL-DEPTH", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("RADIAL-DRIFT", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("ANGULAR-DRIFT", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("TIME", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("DEPTH-OFFSET", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("MEASURE-POINT-OFFSET", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("TOOL-ZERO-OFFSET", ReprCode::FDoubl, Cardinality::Single),
];

pub static SCHEMA: EflrSchema = EflrSchema {
    set_type: "PATH",
    logical_record_type: EflrTypeCode::Frame,
    attributes: ATTRIBUTES,
};
