//! `COMPUTATION`: a derived value computed from one or more Channels,
//! optionally restricted to a set of Zones.

use dlis_core::obname::{ObName, ObjRef};
use dlis_core::ReprCode;
use dlis_dictionary::schemas::computation::SCHEMA;

use crate::builder::EflrObjectBuilder;
use crate::error::Result;

/// The Computation record.
#[derive(Debug, Clone, Default)]
pub struct Computation {
    pub name: String,
    pub long_name: Option<String>,
    pub properties: Vec<String>,
    pub dimension: Vec<u32>,
    pub axis: Vec<ObName>,
    pub zones: Vec<ObName>,
    pub values: Vec<f64>,
    pub source: Option<ObjRef>,
}

impl Computation {
    pub fn new(name: impl Into<String>) -> Self {
        Computation {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_long_name(mut self, value: impl Into<String>) -> Self {
        self.long_name = Some(value.into());
        self
    }

    pub fn with_dimension(mut self, dimension: Vec<u32>) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn with_zones(mut self, zones: Vec<ObName>) -> Self {
        self.zones = zones;
        self
    }

    pub fn with_values(mut self, values: Vec<f64>) -> Self {
        self.values = values;
        self
    }

    pub fn with_source(mut self, source: ObjRef) -> Self {
        self.source = Some(source);
        self
    }

    pub(crate) fn build_attributes(&self) -> Result<Vec<dlis_core::Attribute>> {
        let mut builder = EflrObjectBuilder::new(&SCHEMA);
        if let Some(value) = &self.long_name {
            builder.set_text("LONG-NAME", ReprCode::Ascii, value.clone())?;
        }
        if !self.properties.is_empty() {
            builder.set_text_list("PROPERTIES", ReprCode::Ident, &self.properties)?;
        }
        if !self.dimension.is_empty() {
            builder.set_uvari_list("DIMENSION", &self.dimension)?;
        }
        if !self.axis.is_empty() {
            builder.set_obname_list("AXIS", &self.axis)?;
        }
        if !self.zones.is_empty() {
            builder.set_obname_list("ZONES", &self.zones)?;
        }
        if !self.values.is_empty() {
            builder.set_f64_list("VALUES", &self.values)?;
        }
        if let Some(source) = &self.source {
            builder.set_objref("SOURCE", source.clone())?;
        }
        Ok(builder.into_attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_restricted_values_line_up_one_per_zone() {
        let computation = Computation::new("AVG-GR")
            .with_zones(vec![ObName::new(1, 0, "UPPER"), ObName::new(1, 0, "LOWER")])
            .with_values(vec![65.0, 72.0]);
        let attrs = computation.build_attributes().unwrap();
        let values = attrs.iter().find(|a| a.label() == "VALUES").unwrap();
        assert_eq!(values.count(), 2);
    }
}
