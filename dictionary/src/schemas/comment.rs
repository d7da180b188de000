//! `COMMENT`. Free-text remarks with no location or timestamp, distinct
//! from [`super::message`]'s borehole-positioned notes.

use dlis_core::{Cardinality, ReprCode};

use crate::schema::{AttributeSpec, EflrSchema, EflrTypeCode};

pub static ATTRIBUTES: &[AttributeSpec] = &[AttributeSpec::new(
    "TEXT",
    ReprCode::Ascii,
    Cardinality::Multi,
)];

pub static SCHEMA: EflrSchema = EflrSchema {
    set_type: "COMMENT",
    logical_record_type: EflrTypeCode::Script,
    attributes: ATTRIBUTES,
};
