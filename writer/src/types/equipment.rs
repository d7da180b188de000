//! `EQUIPMENT`: physical tool-string hardware.

use dlis_core::ReprCode;
use dlis_dictionary::schemas::equipment::SCHEMA;

use crate::builder::EflrObjectBuilder;
use crate::error::Result;

/// The Equipment record.
#[derive(Debug, Clone, Default)]
pub struct Equipment {
    pub name: String,
    pub trademark_name: Option<String>,
    pub status: Option<bool>,
    pub equipment_type: Option<String>,
    pub serial_number: Option<String>,
    pub location: Option<String>,
    pub height: Option<f64>,
    pub length: Option<f64>,
    pub minimum_diameter: Option<f64>,
    pub maximum_diameter: Option<f64>,
    pub volume: Option<f64>,
    pub weight: Option<f64>,
    pub hole_size: Option<f64>,
    pub pressure: Option<f64>,
    pub temperature: Option<f64>,
    pub vertical_depth: Option<f64>,
    pub radial_drift: Option<f64>,
    pub angular_drift: Option<f64>,
}

impl Equipment {
    pub fn new(name: impl Into<String>) -> Self {
        Equipment {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_trademark_name(mut self, value: impl Into<String>) -> Self {
        self.trademark_name = Some(value.into());
        self
    }

    pub fn with_status(mut self, value: bool) -> Self {
        self.status = Some(value);
        self
    }

    pub fn with_equipment_type(mut self, value: impl Into<String>) -> Self {
        self.equipment_type = Some(value.into());
        self
    }

    pub fn with_serial_number(mut self, value: impl Into<String>) -> Self {
        self.serial_number = Some(value.into());
        self
    }

    pub(crate) fn build_attributes(&self) -> Result<Vec<dlis_core::Attribute>> {
        let mut builder = EflrObjectBuilder::new(&SCHEMA);
        if let Some(value) = &self.trademark_name {
            builder.set_text("TRADEMARK-NAME", ReprCode::Ascii, value.clone())?;
        }
        if let Some(value) = self.status {
            builder.set_status("STATUS", value)?;
        }
        if let Some(value) = &self.equipment_type {
            builder.set_text("TYPE", ReprCode::Ident, value.clone())?;
        }
        if let Some(value) = &self.serial_number {
            builder.set_text("SERIAL-NUMBER", ReprCode::Ident, value.clone())?;
        }
        if let Some(value) = &self.location {
            builder.set_text("LOCATION", ReprCode::Ident, value.clone())?;
        }
        for (label, value) in [
            ("HEIGHT", self.height),
            ("LENGTH", self.length),
            ("MINIMUM-DIAMETER", self.minimum_diameter),
            ("MAXIMUM-DIAMETER", self.maximum_diameter),
            ("VOLUME", self.volume),
            ("WEIGHT", self.weight),
            ("HOLE-SIZE", self.hole_size),
            ("PRESSURE", self.pressure),
            ("TEMPERATURE", self.temperature),
            ("VERTICAL-DEPTH", self.vertical_depth),
            ("RADIAL-DRIFT", self.radial_drift),
            ("ANGULAR-DRIFT", self.angular_drift),
        ] {
            if let Some(value) = value {
                builder.set_f64(label, value)?;
            }
        }
        Ok(builder.into_attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_leave_their_attributes_valueless() {
        let equipment = Equipment::new("CALIPER");
        let attrs = equipment.build_attributes().unwrap();
        assert!(attrs.iter().all(|a| a.value().is_none()));
    }

    #[test]
    fn status_is_a_status_attribute() {
        let equipment = Equipment::new("CALIPER").with_status(true);
        let attrs = equipment.build_attributes().unwrap();
        let status = attrs.iter().find(|a| a.label() == "STATUS").unwrap();
        assert_eq!(status.representation_code(), Some(ReprCode::Status));
    }
}
