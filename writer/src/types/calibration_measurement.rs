//! `CALIBRATION-MEASUREMENT`: one raw measurement taken during a
//! calibration pass (before/after a coefficient is applied).

use dlis_core::obname::{ObName, ObjRef};
use dlis_core::value::DateTime;
use dlis_core::ReprCode;
use dlis_dictionary::schemas::calibration_measurement::SCHEMA;

use crate::builder::EflrObjectBuilder;
use crate::error::Result;

/// The CalibrationMeasurement record.
#[derive(Debug, Clone, Default)]
pub struct CalibrationMeasurement {
    pub name: String,
    pub phase: Option<String>,
    pub measurement_source: Option<ObjRef>,
    pub measurement_type: Option<String>,
    pub dimension: Vec<u32>,
    pub axis: Vec<ObName>,
    pub measurement: Vec<f64>,
    pub sample_count: Option<u32>,
    pub maximum_deviation: Vec<f64>,
    pub standard_deviation: Vec<f64>,
    pub begin_time: Option<DateTime>,
    pub duration: Option<f64>,
    pub reference: Vec<f64>,
    pub standard: Vec<f64>,
    pub plus_tolerance: Vec<f64>,
    pub minus_tolerance: Vec<f64>,
}

impl CalibrationMeasurement {
    pub fn new(name: impl Into<String>) -> Self {
        CalibrationMeasurement {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = Some(phase.into());
        self
    }

    pub fn with_measurement_source(mut self, source: ObjRef) -> Self {
        self.measurement_source = Some(source);
        self
    }

    pub fn with_measurement(mut self, measurement: Vec<f64>) -> Self {
        self.measurement = measurement;
        self
    }

    pub fn with_sample_count(mut self, sample_count: u32) -> Self {
        self.sample_count = Some(sample_count);
        self
    }

    pub fn with_begin_time(mut self, begin_time: DateTime) -> Self {
        self.begin_time = Some(begin_time);
        self
    }

    pub(crate) fn build_attributes(&self) -> Result<Vec<dlis_core::Attribute>> {
        let mut builder = EflrObjectBuilder::new(&SCHEMA);
        if let Some(value) = &self.phase {
            builder.set_text("PHASE", ReprCode::Ident, value.clone())?;
        }
        if let Some(value) = &self.measurement_source {
            builder.set_objref("MEASUREMENT-SOURCE", value.clone())?;
        }
        if let Some(value) = &self.measurement_type {
            builder.set_text("TYPE", ReprCode::Ident, value.clone())?;
        }
        if !self.dimension.is_empty() {
            builder.set_uvari_list("DIMENSION", &self.dimension)?;
        }
        if !self.axis.is_empty() {
            builder.set_obname_list("AXIS", &self.axis)?;
        }
        if !self.measurement.is_empty() {
            builder.set_f64_list("MEASUREMENT", &self.measurement)?;
        }
        // Resolved as a scalar: RP66 V1 defines one sample count per
        // measurement set, not one per dimension.
        if let Some(value) = self.sample_count {
            builder.set_uvari("SAMPLE-COUNT", value)?;
        }
        if !self.maximum_deviation.is_empty() {
            builder.set_f64_list("MAXIMUM-DEVIATION", &self.maximum_deviation)?;
        }
        if !self.standard_deviation.is_empty() {
            builder.set_f64_list("STANDARD-DEVIATION", &self.standard_deviation)?;
        }
        if let Some(value) = self.begin_time {
            builder.set_dtime("BEGIN-TIME", value)?;
        }
        if let Some(value) = self.duration {
            builder.set_f64("DURATION", value)?;
        }
        if !self.reference.is_empty() {
            builder.set_f64_list("REFERENCE", &self.reference)?;
        }
        if !self.standard.is_empty() {
            builder.set_f64_list("STANDARD", &self.standard)?;
        }
        if !self.plus_tolerance.is_empty() {
            builder.set_f64_list("PLUS-TOLERANCE", &self.plus_tolerance)?;
        }
        if !self.minus_tolerance.is_empty() {
            builder.set_f64_list("MINUS-TOLERANCE", &self.minus_tolerance)?;
        }
        Ok(builder.into_attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_is_a_scalar_uvari() {
        let measurement = CalibrationMeasurement::new("PRE-GR").with_sample_count(50);
        let attrs = measurement.build_attributes().unwrap();
        let count = attrs.iter().find(|a| a.label() == "SAMPLE-COUNT").unwrap();
        assert_eq!(count.count(), 1);
        assert_eq!(count.representation_code(), Some(ReprCode::UVari));
    }
}
