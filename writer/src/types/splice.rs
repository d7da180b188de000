//! `SPLICE`: describes one output Channel assembled by stitching together
//! input Channels across adjacent Zones.

use dlis_core::obname::ObName;
use dlis_dictionary::schemas::splice::SCHEMA;

use crate::builder::EflrObjectBuilder;
use crate::error::Result;

/// The Splice record.
#[derive(Debug, Clone)]
pub struct Splice {
    pub name: String,
    pub output_channel: ObName,
    pub input_channels: Vec<ObName>,
    pub zones: Vec<ObName>,
}

impl Splice {
    pub fn new(name: impl Into<String>, output_channel: ObName) -> Self {
        Splice {
            name: name.into(),
            output_channel,
            input_channels: Vec::new(),
            zones: Vec::new(),
        }
    }

    pub fn with_input_channels(mut self, input_channels: Vec<ObName>) -> Self {
        self.input_channels = input_channels;
        self
    }

    pub fn with_zones(mut self, zones: Vec<ObName>) -> Self {
        self.zones = zones;
        self
    }

    pub(crate) fn build_attributes(&self) -> Result<Vec<dlis_core::Attribute>> {
        let mut builder = EflrObjectBuilder::new(&SCHEMA);
        builder.set_obname("OUTPUT-CHANNEL", self.output_channel.clone())?;
        if !self.input_channels.is_empty() {
            builder.set_obname_list("INPUT-CHANNELS", &self.input_channels)?;
        }
        if !self.zones.is_empty() {
            builder.set_obname_list("ZONES", &self.zones)?;
        }
        Ok(builder.into_attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_channel_is_always_set() {
        let splice = Splice::new("SPLICED-GR", ObName::new(1, 0, "GR-SPLICED"));
        let attrs = splice.build_attributes().unwrap();
        let output_channel = attrs.iter().find(|a| a.label() == "OUTPUT-CHANNEL").unwrap();
        assert!(output_channel.value().is_some());
    }
}
