//! `PROCESS`: documents a processing step and the Channels/Computations
//! it consumed and produced.

use dlis_core::obname::ObName;
use dlis_core::ReprCode;
use dlis_dictionary::schemas::process::SCHEMA;

use crate::builder::EflrObjectBuilder;
use crate::error::Result;

/// The Process record.
#[derive(Debug, Clone, Default)]
pub struct Process {
    pub name: String,
    pub description: Option<String>,
    pub trademark_name: Option<String>,
    pub version: Option<String>,
    pub properties: Vec<String>,
    pub status: Option<String>,
    pub input_channels: Vec<ObName>,
    pub output_channels: Vec<ObName>,
    pub input_computations: Vec<ObName>,
    pub output_computations: Vec<ObName>,
    pub parameters: Vec<ObName>,
    pub comments: Vec<String>,
}

impl Process {
    pub fn new(name: impl Into<String>) -> Self {
        Process {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    pub fn with_status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    pub fn with_input_channels(mut self, channels: Vec<ObName>) -> Self {
        self.input_channels = channels;
        self
    }

    pub fn with_output_channels(mut self, channels: Vec<ObName>) -> Self {
        self.output_channels = channels;
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
        if let Some(value) = &self.version {
            builder.set_text("VERSION", ReprCode::Ascii, value.clone())?;
        }
        if !self.properties.is_empty() {
            builder.set_text_list("PROPERTIES", ReprCode::Ident, &self.properties)?;
        }
        if let Some(value) = &self.status {
            builder.set_text("STATUS", ReprCode::Ident, value.clone())?;
        }
        if !self.input_channels.is_empty() {
            builder.set_obname_list("INPUT-CHANNELS", &self.input_channels)?;
        }
        if !self.output_channels.is_empty() {
            builder.set_obname_list("OUTPUT-CHANNELS", &self.output_channels)?;
        }
        if !self.input_computations.is_empty() {
            builder.set_obname_list("INPUT-COMPUTATIONS", &self.input_computations)?;
        }
        if !self.output_computations.is_empty() {
            builder.set_obname_list("OUTPUT-COMPUTATIONS", &self.output_computations)?;
        }
        if !self.parameters.is_empty() {
            builder.set_obname_list("PARAMETERS", &self.parameters)?;
        }
        if !self.comments.is_empty() {
            builder.set_text_list("COMMENTS", ReprCode::Ascii, &self.comments)?;
        }
        Ok(builder.into_attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_an_ident_not_a_status_flag() {
        let process = Process::new("DESPIKE").with_status("COMPLETE");
        let attrs = process.build_attributes().unwrap();
        let status = attrs.iter().find(|a| a.label() == "STATUS").unwrap();
        assert_eq!(status.representation_code(), Some(ReprCode::Ident));
    }
}
