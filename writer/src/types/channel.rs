//! `CHANNEL`: one data column that a Frame's samples are drawn from.

use dlis_core::obname::{ObName, ObjRef};
use dlis_core::repr_code::ReprCode;
use dlis_dictionary::schemas::channel::SCHEMA;

use crate::builder::EflrObjectBuilder;
use crate::error::{Error, Result};

/// A reference to a Channel already registered with a [`crate::file::DlisFile`]:
/// enough to address its data in a [`crate::source_data::SourceData`] and
/// encode its samples into a FrameData row.
#[derive(Debug, Clone)]
pub struct ChannelHandle {
    pub obname: ObName,
    pub name: String,
    pub representation_code: ReprCode,
    pub element_count: usize,
}

/// The Channel record: a named, typed data column.
///
/// `dimension` and `element_limit` default-fill off each other (RP66 V1
/// treats a channel with neither set as a scalar, `DIMENSION = [1]`); when
/// both are set, `element_limit` must dominate `dimension` component-wise
/// -- it declares the maximum shape a Channel's samples may ever take,
/// while `dimension` is this particular Frame's actual shape.
#[derive(Debug, Clone)]
pub struct Channel {
    pub name: String,
    pub long_name: Option<String>,
    pub properties: Vec<String>,
    pub representation_code: ReprCode,
    pub units: Option<String>,
    pub dimension: Option<Vec<u32>>,
    pub element_limit: Option<Vec<u32>>,
    pub axis: Vec<ObName>,
    pub source: Option<ObjRef>,
    pub minimum_value: Vec<f64>,
    pub maximum_value: Vec<f64>,
}

impl Channel {
    pub fn new(name: impl Into<String>, representation_code: ReprCode) -> Self {
        Channel {
            name: name.into(),
            long_name: None,
            properties: Vec::new(),
            representation_code,
            units: None,
            dimension: None,
            element_limit: None,
            axis: Vec::new(),
            source: None,
            minimum_value: Vec::new(),
            maximum_value: Vec::new(),
        }
    }

    pub fn with_long_name(mut self, long_name: impl Into<String>) -> Self {
        self.long_name = Some(long_name.into());
        self
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    pub fn with_dimension(mut self, dimension: Vec<u32>) -> Self {
        self.dimension = Some(dimension);
        self
    }

    pub fn with_element_limit(mut self, element_limit: Vec<u32>) -> Self {
        self.element_limit = Some(element_limit);
        self
    }

    pub fn with_axis(mut self, axis: Vec<ObName>) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_source(mut self, source: ObjRef) -> Self {
        self.source = Some(source);
        self
    }

    /// The product of this channel's dimension, i.e. how many raw
    /// elements one row contributes to a FrameData body.
    pub(crate) fn element_count(&self) -> usize {
        self.dimension
            .as_ref()
            .map(|d| d.iter().product::<u32>() as usize)
            .unwrap_or(1)
    }

    fn resolved_dimension_and_limit(&self) -> Result<(Vec<u32>, Vec<u32>)> {
        match (&self.dimension, &self.element_limit) {
            (None, None) => Ok((vec![1], vec![1])),
            (Some(dimension), None) => Ok((dimension.clone(), dimension.clone())),
            (None, Some(element_limit)) => Ok((element_limit.clone(), element_limit.clone())),
            (Some(dimension), Some(element_limit)) => {
                let dominates = dimension.len() == element_limit.len()
                    && dimension
                        .iter()
                        .zip(element_limit)
                        .all(|(d, e)| d <= e);
                if !dominates {
                    return Err(Error::from(dlis_core::Error::schema_violation(
                        &self.name,
                        "ELEMENT-LIMIT",
                        format!(
                            "element limit {element_limit:?} must dominate dimension {dimension:?} component-wise"
                        ),
                    )));
                }
                Ok((dimension.clone(), element_limit.clone()))
            }
        }
    }

    pub(crate) fn build_attributes(&self) -> Result<Vec<dlis_core::Attribute>> {
        let mut builder = EflrObjectBuilder::new(&SCHEMA);
        let long_name = self.long_name.clone().unwrap_or_else(|| self.name.clone());
        builder.set_text("LONG-NAME", ReprCode::Ascii, long_name)?;
        if !self.properties.is_empty() {
            builder.set_text_list("PROPERTIES", ReprCode::Ident, &self.properties)?;
        }
        builder.set_ushort("REPRESENTATION-CODE", self.representation_code.code())?;
        if let Some(units) = &self.units {
            builder.set_text("UNITS", ReprCode::Units, units.clone())?;
        }
        let (dimension, element_limit) = self.resolved_dimension_and_limit()?;
        builder.set_uvari_list("DIMENSION", &dimension)?;
        builder.set_uvari_list("ELEMENT-LIMIT", &element_limit)?;
        if !self.axis.is_empty() {
            builder.set_obname_list("AXIS", &self.axis)?;
        }
        if let Some(source) = &self.source {
            builder.set_objref("SOURCE", source.clone())?;
        }
        if !self.minimum_value.is_empty() {
            builder.set_f64_list("MINIMUM-VALUE", &self.minimum_value)?;
        }
        if !self.maximum_value.is_empty() {
            builder.set_f64_list("MAXIMUM-VALUE", &self.maximum_value)?;
        }
        Ok(builder.into_attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neither_dimension_nor_element_limit_defaults_to_scalar() {
        let channel = Channel::new("GR", ReprCode::FDoubl);
        let (dimension, element_limit) = channel.resolved_dimension_and_limit().unwrap();
        assert_eq!(dimension, vec![1]);
        assert_eq!(element_limit, vec![1]);
    }

    #[test]
    fn dimension_alone_copies_into_element_limit() {
        let channel = Channel::new("IMG", ReprCode::FDoubl).with_dimension(vec![128]);
        let (_, element_limit) = channel.resolved_dimension_and_limit().unwrap();
        assert_eq!(element_limit, vec![128]);
    }

    #[test]
    fn element_limit_must_dominate_dimension() {
        let channel = Channel::new("IMG", ReprCode::FDoubl)
            .with_dimension(vec![200])
            .with_element_limit(vec![128]);
        assert!(channel.resolved_dimension_and_limit().is_err());
    }

    #[test]
    fn element_limit_equal_to_dimension_is_allowed() {
        let channel = Channel::new("IMG", ReprCode::FDoubl)
            .with_dimension(vec![128])
            .with_element_limit(vec![128]);
        assert!(channel.resolved_dimension_and_limit().is_ok());
    }

    #[test]
    fn element_count_reflects_multidimensional_product() {
        let channel = Channel::new("IMG", ReprCode::FDoubl).with_dimension(vec![4, 32]);
        assert_eq!(channel.element_count(), 128);
    }

    #[test]
    fn long_name_defaults_to_channel_name() {
        let channel = Channel::new("GR", ReprCode::FDoubl);
        let attrs = channel.build_attributes().unwrap();
        let long_name = attrs.iter().find(|a| a.label() == "LONG-NAME").unwrap();
        match long_name.value().unwrap() {
            dlis_core::value::PrimitiveValue::Text(values) => assert_eq!(values[0], "GR"),
            other => panic!("expected text value, got {other:?}"),
        }
    }
}
