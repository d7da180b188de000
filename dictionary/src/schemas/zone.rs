//! `ZONE`. A named interval of depth, time, or angle, used to restrict
//! where a Parameter or Computation's value applies.

use dlis_core::{Cardinality, ReprCode};

use crate::schema::{AttributeSpec, EflrSchema, EflrTypeCode};

pub static ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("DESCRIPTION", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("DOMAIN", ReprCode::Ident, Cardinality::Single),
    // FDOUBL for depth/time domains, DTIME for the time domain's absolute
    // bounds; the writer infers the code from the value it is given.
    AttributeSpec::flexible("MAXIMUM", Cardinality::Single),
    AttributeSpec::flexible("MINIMUM", Cardinality::Single),
];

pub static SCHEMA: EflrSchema = EflrSchema {
    set_type: "ZONE",
    logical_record_type: EflrTypeCode::Static,
    attributes: ATTRIBUTES,
};
