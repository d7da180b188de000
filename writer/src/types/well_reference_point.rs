//! `WELL-REFERENCE-POINT`: anchors the coordinate system Frame indices
//! are measured from.

use dlis_core::ReprCode;
use dlis_dictionary::schemas::well_reference_point::SCHEMA;

use crate::builder::EflrObjectBuilder;
use crate::error::Result;

/// One of up to three named coordinates a Well Reference Point is
/// located by (e.g. latitude/longitude, or a local grid easting/northing).
#[derive(Debug, Clone, Default)]
pub struct NamedCoordinate {
    pub name: Option<String>,
    pub value: Option<f64>,
}

/// The Well Reference Point record.
#[derive(Debug, Clone, Default)]
pub struct WellReferencePoint {
    pub name: String,
    pub permanent_datum: Option<String>,
    pub vertical_zero: Option<String>,
    pub permanent_datum_elevation: Option<f64>,
    pub above_permanent_datum: Option<f64>,
    pub magnetic_declination: Option<f64>,
    pub coordinate_1: NamedCoordinate,
    pub coordinate_2: NamedCoordinate,
    pub coordinate_3: NamedCoordinate,
}

impl WellReferencePoint {
    pub fn new(name: impl Into<String>) -> Self {
        WellReferencePoint {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_permanent_datum(mut self, value: impl Into<String>) -> Self {
        self.permanent_datum = Some(value.into());
        self
    }

    pub fn with_vertical_zero(mut self, value: impl Into<String>) -> Self {
        self.vertical_zero = Some(value.into());
        self
    }

    pub fn with_permanent_datum_elevation(mut self, value: f64) -> Self {
        self.permanent_datum_elevation = Some(value);
        self
    }

    pub fn with_above_permanent_datum(mut self, value: f64) -> Self {
        self.above_permanent_datum = Some(value);
        self
    }

    pub fn with_magnetic_declination(mut self, value: f64) -> Self {
        self.magnetic_declination = Some(value);
        self
    }

    pub fn with_coordinate_1(mut self, name: impl Into<String>, value: f64) -> Self {
        self.coordinate_1 = NamedCoordinate {
            name: Some(name.into()),
            value: Some(value),
        };
        self
    }

    pub fn with_coordinate_2(mut self, name: impl Into<String>, value: f64) -> Self {
        self.coordinate_2 = NamedCoordinate {
            name: Some(name.into()),
            value: Some(value),
        };
        self
    }

    pub fn with_coordinate_3(mut self, name: impl Into<String>, value: f64) -> Self {
        self.coordinate_3 = NamedCoordinate {
            name: Some(name.into()),
            value: Some(value),
        };
        self
    }

    pub(crate) fn build_attributes(&self) -> Result<Vec<dlis_core::Attribute>> {
        let mut builder = EflrObjectBuilder::new(&SCHEMA);
        if let Some(value) = &self.permanent_datum {
            builder.set_text("PERMANENT-DATUM", ReprCode::Ascii, value.clone())?;
        }
        if let Some(value) = &self.vertical_zero {
            builder.set_text("VERTICAL-ZERO", ReprCode::Ascii, value.clone())?;
        }
        if let Some(value) = self.permanent_datum_elevation {
            builder.set_f64("PERMANENT-DATUM-ELEVATION", value)?;
        }
        if let Some(value) = self.above_permanent_datum {
            builder.set_f64("ABOVE-PERMANENT-DATUM", value)?;
        }
        if let Some(value) = self.magnetic_declination {
            builder.set_f64("MAGNETIC-DECLINATION", value)?;
        }
        self.build_coordinate(&mut builder, "1", &self.coordinate_1)?;
        self.build_coordinate(&mut builder, "2", &self.coordinate_2)?;
        self.build_coordinate(&mut builder, "3", &self.coordinate_3)?;
        Ok(builder.into_attributes())
    }

    fn build_coordinate(
        &self,
        builder: &mut EflrObjectBuilder,
        index: &str,
        coordinate: &NamedCoordinate,
    ) -> Result<()> {
        if let Some(name) = &coordinate.name {
            builder.set_text(&format!("COORDINATE-{index}-NAME"), ReprCode::Ascii, name.clone())?;
        }
        if let Some(value) = coordinate.value {
            builder.set_f64(&format!("COORDINATE-{index}-VALUE"), value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_coordinates_populate_their_paired_attributes() {
        let point = WellReferencePoint::new("AQUI").with_coordinate_1("LATITUDE", 29.5);
        let attrs = point.build_attributes().unwrap();
        assert!(attrs.iter().any(|a| a.label() == "COORDINATE-1-NAME"));
        assert!(attrs.iter().any(|a| a.label() == "COORDINATE-1-VALUE"));
        assert!(attrs
            .iter()
            .find(|a| a.label() == "COORDINATE-2-NAME")
            .unwrap()
            .value()
            .is_none());
    }
}
