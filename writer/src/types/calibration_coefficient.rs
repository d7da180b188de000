//! `CALIBRATION-COEFFICIENT`: one correction applied to a Channel's raw
//! samples, with its tolerances.

use dlis_core::ReprCode;
use dlis_dictionary::schemas::calibration_coefficient::SCHEMA;

use crate::builder::EflrObjectBuilder;
use crate::error::Result;

/// The CalibrationCoefficient record.
#[derive(Debug, Clone, Default)]
pub struct CalibrationCoefficient {
    pub name: String,
    pub label: Option<String>,
    pub coefficients: Vec<f64>,
    pub references: Vec<f64>,
    pub plus_tolerances: Vec<f64>,
    pub minus_tolerances: Vec<f64>,
}

impl CalibrationCoefficient {
    pub fn new(name: impl Into<String>) -> Self {
        CalibrationCoefficient {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_coefficients(mut self, coefficients: Vec<f64>) -> Self {
        self.coefficients = coefficients;
        self
    }

    pub fn with_references(mut self, references: Vec<f64>) -> Self {
        self.references = references;
        self
    }

    pub(crate) fn build_attributes(&self) -> Result<Vec<dlis_core::Attribute>> {
        let mut builder = EflrObjectBuilder::new(&SCHEMA);
        if let Some(value) = &self.label {
            builder.set_text("LABEL", ReprCode::Ident, value.clone())?;
        }
        if !self.coefficients.is_empty() {
            builder.set_f64_list("COEFFICIENTS", &self.coefficients)?;
        }
        if !self.references.is_empty() {
            builder.set_f64_list("REFERENCES", &self.references)?;
        }
        if !self.plus_tolerances.is_empty() {
            builder.set_f64_list("PLUS-TOLERANCES", &self.plus_tolerances)?;
        }
        if !self.minus_tolerances.is_empty() {
            builder.set_f64_list("MINUS-TOLERANCES", &self.minus_tolerances)?;
        }
        Ok(builder.into_attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficients_and_references_pair_up() {
        let coefficient = CalibrationCoefficient::new("LINEAR")
            .with_coefficients(vec![1.0, 0.0])
            .with_references(vec![0.0, 100.0]);
        let attrs = coefficient.build_attributes().unwrap();
        assert_eq!(
            attrs.iter().find(|a| a.label() == "COEFFICIENTS").unwrap().count(),
            2
        );
    }
}
