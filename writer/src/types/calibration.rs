//! `CALIBRATION`: ties a set of Channels to the Coefficients and
//! Measurements used to calibrate them.

use dlis_core::obname::ObName;
use dlis_core::ReprCode;
use dlis_dictionary::schemas::calibration::SCHEMA;

use crate::builder::EflrObjectBuilder;
use crate::error::Result;

/// The Calibration record.
#[derive(Debug, Clone, Default)]
pub struct Calibration {
    pub name: String,
    pub calibrated_channels: Vec<ObName>,
    pub uncalibrated_channels: Vec<ObName>,
    pub coefficients: Vec<ObName>,
    pub measurements: Vec<ObName>,
    pub parameters: Vec<ObName>,
    pub method: Option<String>,
}

impl Calibration {
    pub fn new(name: impl Into<String>) -> Self {
        Calibration {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_calibrated_channels(mut self, channels: Vec<ObName>) -> Self {
        self.calibrated_channels = channels;
        self
    }

    pub fn with_coefficients(mut self, coefficients: Vec<ObName>) -> Self {
        self.coefficients = coefficients;
        self
    }

    pub fn with_measurements(mut self, measurements: Vec<ObName>) -> Self {
        self.measurements = measurements;
        self
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub(crate) fn build_attributes(&self) -> Result<Vec<dlis_core::Attribute>> {
        let mut builder = EflrObjectBuilder::new(&SCHEMA);
        if !self.calibrated_channels.is_empty() {
            builder.set_obname_list("CALIBRATED-CHANNELS", &self.calibrated_channels)?;
        }
        if !self.uncalibrated_channels.is_empty() {
            builder.set_obname_list("UNCALIBRATED-CHANNELS", &self.uncalibrated_channels)?;
        }
        if !self.coefficients.is_empty() {
            builder.set_obname_list("COEFFICIENTS", &self.coefficients)?;
        }
        if !self.measurements.is_empty() {
            builder.set_obname_list("MEASUREMENTS", &self.measurements)?;
        }
        if !self.parameters.is_empty() {
            builder.set_obname_list("PARAMETERS", &self.parameters)?;
        }
        if let Some(value) = &self.method {
            builder.set_text("METHOD", ReprCode::Ident, value.clone())?;
        }
        Ok(builder.into_attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_channels_coefficients_and_measurements() {
        let calibration = Calibration::new("GR-CAL")
            .with_calibrated_channels(vec![ObName::new(1, 0, "GR")])
            .with_coefficients(vec![ObName::new(1, 0, "LINEAR")])
            .with_measurements(vec![ObName::new(1, 0, "PRE-GR"), ObName::new(1, 0, "POST-GR")]);
        let attrs = calibration.build_attributes().unwrap();
        assert_eq!(
            attrs
                .iter()
                .find(|a| a.label() == "MEASUREMENTS")
                .unwrap()
                .count(),
            2
        );
    }
}
