//! `PATH`: maps a Frame's Channels onto the depth/time reference a
//! `WELL-REFERENCE-POINT` establishes.

use dlis_core::obname::ObName;
use dlis_dictionary::schemas::path::SCHEMA;

use crate::builder::EflrObjectBuilder;
use crate::error::Result;

/// The Path record.
#[derive(Debug, Clone, Default)]
pub struct Path {
    pub name: String,
    pub frame_type: Option<ObName>,
    pub well_reference_point: Option<ObName>,
    pub value: Vec<ObName>,
    pub borehole_depth: Option<f64>,
    pub vertical_depth: Option<f64>,
    pub radial_drift: Option<f64>,
    pub angular_drift: Option<f64>,
    pub time: Option<f64>,
    pub depth_offset: Option<f64>,
    pub measure_point_offset: Option<f64>,
    pub tool_zero_offset: Option<f64>,
}

impl Path {
    pub fn new(name: impl Into<String>) -> Self {
        Path {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_frame_type(mut self, frame_type: ObName) -> Self {
        self.frame_type = Some(frame_type);
        self
    }

    pub fn with_well_reference_point(mut self, well_reference_point: ObName) -> Self {
        self.well_reference_point = Some(well_reference_point);
        self
    }

    pub fn with_value(mut self, value: Vec<ObName>) -> Self {
        self.value = value;
        self
    }

    pub fn with_borehole_depth(mut self, value: f64) -> Self {
        self.borehole_depth = Some(value);
        self
    }

    pub fn with_vertical_depth(mut self, value: f64) -> Self {
        self.vertical_depth = Some(value);
        self
    }

    pub(crate) fn build_attributes(&self) -> Result<Vec<dlis_core::Attribute>> {
        let mut builder = EflrObjectBuilder::new(&SCHEMA);
        if let Some(frame_type) = &self.frame_type {
            builder.set_obname("FRAME-TYPE", frame_type.clone())?;
        }
        if let Some(well_reference_point) = &self.well_reference_point {
            builder.set_obname("WELL-REFERENCE-POINT", well_reference_point.clone())?;
        }
        if !self.value.is_empty() {
            builder.set_obname_list("VALUE", &self.value)?;
        }
        if let Some(value) = self.borehole_depth {
            builder.set_f64("BOREHOLE-DEPTH", value)?;
        }
        if let Some(value) = self.vertical_depth {
            builder.set_f64("VERTICAL-DEPTH", value)?;
        }
        if let Some(value) = self.radial_drift {
            builder.set_f64("RADIAL-DRIFT", value)?;
        }
        if let Some(value) = self.angular_drift {
            builder.set_f64("ANGULAR-DRIFT", value)?;
        }
        if let Some(value) = self.time {
            builder.set_f64("TIME", value)?;
        }
        if let Some(value) = self.depth_offset {
            builder.set_f64("DEPTH-OFFSET", value)?;
        }
        if let Some(value) = self.measure_point_offset {
            builder.set_f64("MEASURE-POINT-OFFSET", value)?;
        }
        if let Some(value) = self.tool_zero_offset {
            builder.set_f64("TOOL-ZERO-OFFSET", value)?;
        }
        Ok(builder.into_attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_and_well_reference_point_are_obnames() {
        let path = Path::new("PATH-1")
            .with_frame_type(ObName::new(1, 0, "MAIN"))
            .with_well_reference_point(ObName::new(1, 0, "AQUI"));
        let attrs = path.build_attributes().unwrap();
        assert!(attrs.iter().any(|a| a.label() == "FRAME-TYPE"));
        assert!(attrs.iter().any(|a| a.label() == "WELL-REFERENCE-POINT"));
    }
}
