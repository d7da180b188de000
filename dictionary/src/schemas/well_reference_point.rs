//! `WELL-REFERENCE-POINT`. Anchors the coordinate system that Frame
//! indices (`BOREHOLE-DEPTH`, `VERTICAL-DEPTH`, ...) are measured from.

use dlis_core::{Cardinality, ReprCode};

use crate::schema::{AttributeSpec, EflrSchema, EflrTypeCode};

pub static ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("PERMANENT-DATUM", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("VERTICAL-ZERO", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new(
        "PERMANENT-DATUM-ELEVATION",
        ReprCode::FDoubl,
        Cardinality::Single,
    ),
    AttributeSpec::new("ABOVE-PERMANENT-DATUM", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("MAGNETIC-DECLINATION", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("COORDINATE-1-NAME", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("COORDINATE-1-VALUE", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("COORDINATE-2-NAME", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("COORDINATE-2-VALUE", ReprCode::FDoubl, Cardinality::Single),
    AttributeSpec::new("COORDINATE-3-NAME", ReprCode::Ascii, Cardinality::Single),
    AttributeSpec::new("COORDINATE-3-VALUE", ReprCode::FDoubl, Cardinality::Single),
];

pub static SCHEMA: EflrSchema = EflrSchema {
    set_type: "WELL-REFERENCE",
    logical_record_type: EflrTypeCode::Olr,
    attributes: ATTRIBUTES,
};
