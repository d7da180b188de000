//! `SPLICE`. Describes one output Channel assembled by stitching together
//! input Channels across adjacent Zones.

use dlis_core::{Cardinality, ReprCode};

use crate::schema::{AttributeSpec, EflrSchema, EflrTypeCode};

pub static ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("OUTPUT-CHANNEL", ReprCode::ObName, Cardinality::Single),
    AttributeSpec::new("INPUT-CHANNELS", ReprCode::ObName, Cardinality::Multi),
    AttributeSpec::new("ZONES", ReprCode::ObName, Cardinality::Multi),
];

pub static SCHEMA: EflrSchema = EflrSchema {
    set_type: "SPLICE",
    logical_record_type: EflrTypeCode::Static,
    attributes: ATTRIBUTES,
};
