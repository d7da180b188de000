//! `CALIBRATION`. Ties a set of Channels to the Coefficients and
//! Measurements that were used to calibrate them.

use dlis_core::{Cardinality, ReprCode};

use crate::schema::{AttributeSpec, EflrSchema, EflrTypeCode};

pub static ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("CALIBRATED-CHANNELS", ReprCode::ObName, Cardinality::Multi),
    AttributeSpec::new("UNCALIBRATED-CHANNELS", ReprCode::ObName, Cardinality::Multi),
    AttributeSpec::new("COEFFICIENTS", ReprCode::ObName, Cardinality::Multi),
    AttributeSpec::new("MEASUREMENTS", ReprCode::ObName, Cardinality::Multi),
    AttributeSpec::new("PARAMETERS", ReprCode::ObName, Cardinality::Multi),
    AttributeSpec::new("METHOD", ReprCode::Ident, Cardinality::Single),
];

pub static SCHEMA: EflrSchema = EflrSchema {
    set_type: "CALIBRATION",
    logical_record_type: EflrTypeCode::Static,
    attributes: ATTRIBUTES,
};
