//! `PARAMETER`: a named constant or per-zone value not tied to any Frame.

use dlis_core::obname::ObName;
use dlis_core::value::PrimitiveValue;
use dlis_core::ReprCode;
use dlis_dictionary::schemas::parameter::SCHEMA;
use smallvec::SmallVec;

use crate::builder::EflrObjectBuilder;
use crate::error::Result;

/// A Parameter's `VALUES`: RP66 V1 leaves the representation code open,
/// so the writer infers `FDOUBL` or `ASCII` from whichever kind of value
/// the caller supplies.
#[derive(Debug, Clone)]
pub enum ParameterValues {
    F64(Vec<f64>),
    Text(Vec<String>),
}

/// The Parameter record.
#[derive(Debug, Clone, Default)]
pub struct Parameter {
    pub name: String,
    pub long_name: Option<String>,
    pub dimension: Vec<u32>,
    pub axis: Vec<ObName>,
    pub zones: Vec<ObName>,
    pub values: Option<ParameterValues>,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Parameter {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_long_name(mut self, long_name: impl Into<String>) -> Self {
        self.long_name = Some(long_name.into());
        self
    }

    pub fn with_dimension(mut self, dimension: Vec<u32>) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn with_axis(mut self, axis: Vec<ObName>) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_zones(mut self, zones: Vec<ObName>) -> Self {
        self.zones = zones;
        self
    }

    pub fn with_values(mut self, values: ParameterValues) -> Self {
        self.values = Some(values);
        self
    }

    pub(crate) fn build_attributes(&self) -> Result<Vec<dlis_core::Attribute>> {
        let mut builder = EflrObjectBuilder::new(&SCHEMA);
        if let Some(long_name) = &self.long_name {
            builder.set_text("LONG-NAME", ReprCode::Ascii, long_name.clone())?;
        }
        // RP66 V1 treats an unset DIMENSION as the scalar default `[1]`,
        // matching Channel's dimension/element-limit defaulting.
        let dimension = if self.dimension.is_empty() {
            vec![1]
        } else {
            self.dimension.clone()
        };
        builder.set_uvari_list("DIMENSION", &dimension)?;
        if !self.axis.is_empty() {
            builder.set_obname_list("AXIS", &self.axis)?;
        }
        if !self.zones.is_empty() {
            builder.set_obname_list("ZONES", &self.zones)?;
        }
        match &self.values {
            Some(ParameterValues::F64(values)) => {
                builder.set_value(
                    "VALUES",
                    PrimitiveValue::F64(SmallVec::from_slice(values)),
                    ReprCode::FDoubl,
                )?;
            }
            Some(ParameterValues::Text(values)) => {
                builder.set_value(
                    "VALUES",
                    PrimitiveValue::Text(SmallVec::from_slice(values)),
                    ReprCode::Ascii,
                )?;
            }
            None => {}
        }
        Ok(builder.into_attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_defaults_to_scalar() {
        let parameter = Parameter::new("MUD-WEIGHT");
        let attrs = parameter.build_attributes().unwrap();
        let dimension = attrs.iter().find(|a| a.label() == "DIMENSION").unwrap();
        assert_eq!(dimension.count(), 1);
    }

    #[test]
    fn text_values_resolve_to_ascii() {
        let parameter =
            Parameter::new("LOG-REMARK").with_values(ParameterValues::Text(vec!["OK".to_string()]));
        let attrs = parameter.build_attributes().unwrap();
        let values = attrs.iter().find(|a| a.label() == "VALUES").unwrap();
        assert_eq!(values.representation_code(), Some(ReprCode::Ascii));
    }
}
