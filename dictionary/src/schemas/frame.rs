//! `FRAME`. Describes the layout of one family of `FDATA` Indirectly
//! Formatted Logical Records: its index Channel and the ordered list of
//! data Channels that follow it in every sample.

use dlis_core::{Cardinality, ReprCode};

use crate::schema::{AttributeSpec, EflrSchema, EflrTypeCode};

pub static ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("DESCRIPTION", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("CHANNELS", ReprCode::ObName, Cardinality::Multi),
    AttributeSpec::new("INDEX-TYPE", ReprCode::Ident, Cardinality::Single),
    AttributeSpec::new("DIRECTION", ReprCode::Ident, Cardinality::Single),
    AttributeSpec::new("SPACING", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("ENCRYPTED", ReprCode::UShort, Cardinality::Single),
    AttributeSpec::new("INDEX-MIN", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("INDEX-MAX", ReprCode::FDoubl, Cardinality::Single),
];

pub static SCHEMA: EflrSchema = EflrSchema {
    set_type: "FRAME",
    logical_record_type: EflrTypeCode::Frame,
    attributes: ATTRIBUTES,
};
