//! `MESSAGE`: a timestamped operational note, located in the borehole at
//! the time it was recorded.

use dlis_core::value::DateTime;
use dlis_core::ReprCode;
use dlis_dictionary::schemas::message::SCHEMA;

use crate::builder::EflrObjectBuilder;
use crate::error::Result;

/// The Message record.
#[derive(Debug, Clone, Default)]
pub struct Message {
    pub name: String,
    pub message_type: Option<String>,
    pub time: Option<DateTime>,
    pub borehole_drift: Option<f64>,
    pub vertical_depth: Option<f64>,
    pub radial_drift: Option<f64>,
    pub angular_drift: Option<f64>,
    pub text: Vec<String>,
}

impl Message {
    pub fn new(name: impl Into<String>) -> Self {
        Message {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_message_type(mut self, message_type: impl Into<String>) -> Self {
        self.message_type = Some(message_type.into());
        self
    }

    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_text(mut self, text: Vec<String>) -> Self {
        self.text = text;
        self
    }

    pub(crate) fn build_attributes(&self) -> Result<Vec<dlis_core::Attribute>> {
        let mut builder = EflrObjectBuilder::new(&SCHEMA);
        if let Some(value) = &self.message_type {
            builder.set_text("TYPE", ReprCode::Ident, value.clone())?;
        }
        if let Some(value) = self.time {
            builder.set_dtime("TIME", value)?;
        }
        if let Some(value) = self.borehole_drift {
            builder.set_f64("BOREHOLE-DRIFT", value)?;
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
        if !self.text.is_empty() {
            builder.set_text_list("TEXT", ReprCode::Ascii, &self.text)?;
        }
        Ok(builder.into_attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlis_core::value::TimeZoneCode;

    #[test]
    fn a_message_without_a_time_leaves_time_valueless() {
        let message = Message::new("EVENT-1").with_text(vec!["pumps stopped".to_string()]);
        let attrs = message.build_attributes().unwrap();
        assert!(attrs.iter().find(|a| a.label() == "TIME").unwrap().value().is_none());
    }

    #[test]
    fn timestamped_message_carries_a_dtime_attribute() {
        let time = DateTime::from_ymd_hms_milli(2024, 6, 1, 8, 0, 0, 0, TimeZoneCode::Gmt).unwrap();
        let message = Message::new("EVENT-1").with_time(time);
        let attrs = message.build_attributes().unwrap();
        assert_eq!(
            attrs.iter().find(|a| a.label() == "TIME").unwrap().representation_code(),
            Some(ReprCode::DTime)
        );
    }
}
