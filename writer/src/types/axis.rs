//! `AXIS`: names one dimension a multi-dimensional Channel is indexed
//! along.

use dlis_core::value::{DateTime, PrimitiveValue};
use dlis_core::ReprCode;
use dlis_dictionary::schemas::axis::SCHEMA;
use smallvec::SmallVec;

use crate::builder::EflrObjectBuilder;
use crate::error::Result;

/// An Axis's `COORDINATES`: RP66 V1 leaves the representation code open,
/// so the writer infers `FDOUBL`, `ASCII`, or `DTIME` from whichever kind
/// of value the caller supplies.
#[derive(Debug, Clone)]
pub enum AxisCoordinates {
    F64(Vec<f64>),
    Text(Vec<String>),
    Time(Vec<DateTime>),
}

/// The Axis record.
#[derive(Debug, Clone)]
pub struct Axis {
    pub name: String,
    pub axis_id: Option<String>,
    pub coordinates: Option<AxisCoordinates>,
    pub spacing: Option<f64>,
}

impl Axis {
    pub fn new(name: impl Into<String>) -> Self {
        Axis {
            name: name.into(),
            axis_id: None,
            coordinates: None,
            spacing: None,
        }
    }

    pub fn with_axis_id(mut self, axis_id: impl Into<String>) -> Self {
        self.axis_id = Some(axis_id.into());
        self
    }

    pub fn with_coordinates(mut self, coordinates: AxisCoordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub(crate) fn build_attributes(&self) -> Result<Vec<dlis_core::Attribute>> {
        let mut builder = EflrObjectBuilder::new(&SCHEMA);
        if let Some(axis_id) = &self.axis_id {
            builder.set_text("AXIS-ID", ReprCode::Ident, axis_id.clone())?;
        }
        match &self.coordinates {
            Some(AxisCoordinates::F64(values)) => {
                builder.set_value(
                    "COORDINATES",
                    PrimitiveValue::F64(SmallVec::from_slice(values)),
                    ReprCode::FDoubl,
                )?;
            }
            Some(AxisCoordinates::Text(values)) => {
                builder.set_value(
                    "COORDINATES",
                    PrimitiveValue::Text(SmallVec::from_slice(values)),
                    ReprCode::Ascii,
                )?;
            }
            Some(AxisCoordinates::Time(values)) => {
                builder.set_value(
                    "COORDINATES",
                    PrimitiveValue::DTime(SmallVec::from_slice(values)),
                    ReprCode::DTime,
                )?;
            }
            None => {}
        }
        if let Some(spacing) = self.spacing {
            builder.set_f64("SPACING", spacing)?;
        }
        Ok(builder.into_attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_coordinates_resolve_to_fdoubl() {
        let axis = Axis::new("AZIMUTH").with_coordinates(AxisCoordinates::F64(vec![0.0, 90.0, 180.0]));
        let attrs = axis.build_attributes().unwrap();
        let coords = attrs.iter().find(|a| a.label() == "COORDINATES").unwrap();
        assert_eq!(coords.representation_code(), Some(ReprCode::FDoubl));
        assert_eq!(coords.count(), 3);
    }

    #[test]
    fn text_coordinates_resolve_to_ascii() {
        let axis = Axis::new("SECTOR")
            .with_coordinates(AxisCoordinates::Text(vec!["N".to_string(), "S".to_string()]));
        let attrs = axis.build_attributes().unwrap();
        let coords = attrs.iter().find(|a| a.label() == "COORDINATES").unwrap();
        assert_eq!(coords.representation_code(), Some(ReprCode::Ascii));
    }
}
