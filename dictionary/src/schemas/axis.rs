//! `AXIS`. Names one dimension a multi-dimensional Channel is indexed
//! along (e.g. a tool's azimuthal sectors).

use dlis_core::{Cardinality, ReprCode};

use crate::schema::{AttributeSpec, EflrSchema, EflrTypeCode};

pub static ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("AXIS-ID", ReprCode::Ident, Cardinality::Single),
    // Coordinates may be DTIME, FDOUBL or ASCII depending on what the axis
    // represents; left flexible for the writer to infer per call.
    AttributeSpec::flexible("COORDINATES", Cardinality::Multi),
    AttributeSpec::new("SPACING", ReprCode::FDoubl, Cardinality::Single),
];

pub static SCHEMA: EflrSchema = EflrSchema {
    set_type: "AXIS",
    logical_record_type: EflrTypeCode::Axis,
    attributes: ATTRIBUTES,
};
