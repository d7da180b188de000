//! `TOOL`: groups Equipment parts, the Channels they produce and the
//! Parameters that configure them into one named logging tool.

use dlis_core::obname::ObName;
use dlis_core::ReprCode;
use dlis_dictionary::schemas::tool::SCHEMA;

use crate::builder::EflrObjectBuilder;
use crate::error::Result;

/// The Tool record.
#[derive(Debug, Clone, Default)]
pub struct Tool {
    pub name: String,
    pub description: Option<String>,
    pub trademark_name: Option<String>,
    pub generic_name: Option<String>,
    pub parts: Vec<ObName>,
    pub status: Option<bool>,
    pub channels: Vec<ObName>,
    pub parameters: Vec<ObName>,
}

impl Tool {
    pub fn new(name: impl Into<String>) -> Self {
        Tool {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    pub fn with_parts(mut self, parts: Vec<ObName>) -> Self {
        self.parts = parts;
        self
    }

    pub fn with_status(mut self, value: bool) -> Self {
        self.status = Some(value);
        self
    }

    pub fn with_channels(mut self, channels: Vec<ObName>) -> Self {
        self.channels = channels;
        self
    }

    pub fn with_parameters(mut self, parameters: Vec<ObName>) -> Self {
        self.parameters = parameters;
        self
    }

    pub(crate) fn build_attributes(&self) -> Result<Vec<dlis_core::Attribute>> {
        let mut builder = EflrObjectBuilder::new(&SCHEMA);
        if let Some(value) = &self.description {
            builder.set_text("DESCRIPTION", ReprCode::Ascii, value.clone())?;
        }
        if let Some(value) = &self.trademark_name {
            builder.set_text("TRADEMARK-NAME", ReprCode::Ascii, value.clone())?;
        }
        if let Some(value) = &self.generic_name {
            builder.set_text("GENERIC-NAME", ReprCode::Ascii, value.clone())?;
        }
        if !self.parts.is_empty() {
            builder.set_obname_list("PARTS", &self.parts)?;
        }
        if let Some(value) = self.status {
            builder.set_status("STATUS", value)?;
        }
        if !self.channels.is_empty() {
            builder.set_obname_list("CHANNELS", &self.channels)?;
        }
        if !self.parameters.is_empty() {
            builder.set_obname_list("PARAMETERS", &self.parameters)?;
        }
        Ok(builder.into_attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_and_channels_are_obname_lists() {
        let tool = Tool::new("TRIPLE-COMBO")
            .with_parts(vec![ObName::new(1, 0, "CALIPER")])
            .with_channels(vec![ObName::new(1, 0, "GR"), ObName::new(1, 0, "RHOB")]);
        let attrs = tool.build_attributes().unwrap();
        let channels = attrs.iter().find(|a| a.label() == "CHANNELS").unwrap();
        assert_eq!(channels.count(), 2);
    }
}
