//! A compile-time registry of every known `EflrSchema`, looked up by
//! `SET-TYPE`: a `Lazy` singleton built once and indexed by name, rather
//! than walking a list on every lookup.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::schema::EflrSchema;
use crate::schemas;

/// Every record type this crate knows a schema for, in the order RP66 V1
/// Appendix A lists them.
pub static ALL_SCHEMAS: &[&EflrSchema] = &[
    &schemas::file_header::SCHEMA,
    &schemas::origin::SCHEMA,
    &schemas::well_reference_point::SCHEMA,
    &schemas::axis::SCHEMA,
    &schemas::channel::SCHEMA,
    &schemas::frame::SCHEMA,
    &schemas::path::SCHEMA,
    &schemas::zone::SCHEMA,
    &schemas::parameter::SCHEMA,
    &schemas::equipment::SCHEMA,
    &schemas::tool::SCHEMA,
    &schemas::computation::SCHEMA,
    &schemas::process::SCHEMA,
    &schemas::splice::SCHEMA,
    &schemas::calibration_measurement::SCHEMA,
    &schemas::calibration_coefficient::SCHEMA,
    &schemas::calibration::SCHEMA,
    &schemas::group::SCHEMA,
    &schemas::long_name::SCHEMA,
    &schemas::message::SCHEMA,
    &schemas::comment::SCHEMA,
    &schemas::no_format::SCHEMA,
];

struct SchemaRegistry {
    by_set_type: HashMap<&'static str, &'static EflrSchema>,
}

impl SchemaRegistry {
    fn build() -> Self {
        let mut by_set_type = HashMap::with_capacity(ALL_SCHEMAS.len());
        for schema in ALL_SCHEMAS {
            by_set_type.insert(schema.set_type, *schema);
        }
        SchemaRegistry { by_set_type }
    }
}

static REGISTRY: Lazy<SchemaRegistry> = Lazy::new(SchemaRegistry::build);

/// Look up a record type's schema by its `SET-TYPE` string, e.g. `"CHANNEL"`.
pub fn schema_by_set_type(set_type: &str) -> Option<&'static EflrSchema> {
    REGISTRY.by_set_type.get(set_type).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_schema_resolves_by_its_own_set_type() {
        for schema in ALL_SCHEMAS {
            let found = schema_by_set_type(schema.set_type)
                .unwrap_or_else(|| panic!("{} missing from registry", schema.set_type));
            assert!(std::ptr::eq(found, *schema));
        }
    }

    #[test]
    fn unknown_set_type_is_none() {
        assert!(schema_by_set_type("NOT-A-REAL-SET-TYPE").is_none());
    }
}
