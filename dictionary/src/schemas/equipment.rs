//! `EQUIPMENT`. Physical tool-string hardware: dimensions, pressure and
//! temperature ratings, serial number.

use dlis_core::{Cardinality, ReprCode};

use crate::schema::{AttributeSpec, EflrSchema, EflrTypeCode};

pub static ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("TRADEMARK-NAME", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("STATUS", ReprCode::Status, Cardinality::Single),
    AttributeSpec::new("TYPE", ReprCode::Ident, Cardinality::Single),
    AttributeSpec::new("SERIAL-NUMBER", ReprCode::Ident, Cardinality::Single),
    AttributeSpec::new("LOCATION", ReprCode::Ident, Cardinality::Single),
    AttributeSpec::new("HEIGHT", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("LENGTH", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("MINIMUM-DIAMETER", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("MAXIMUM-DIAMETER", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("VOLUME", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("WEIGHT", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("HOLE-SIZE", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("PRESSURE", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("TEMPERATURE", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("VERTICAL-DEPTH", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("RADIAL-DRIFT", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("ANGULAR-DRIFT", ReprCode::FDoubl, Cardinality::Single),
];

pub static SCHEMA: EflrSchema = EflrSchema {
    set_type: "EQUIPMENT",
    logical_record_type: EflrTypeCode::Static,
    attributes: ATTRIBUTES,
};
