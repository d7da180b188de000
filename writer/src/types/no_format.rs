//! `NO-FORMAT`: declares a stream of opaque bytes that `NOFMT`
//! Indirectly Formatted Logical Records will carry, addressed by this
//! Object's `OBNAME`.

use dlis_core::ReprCode;
use dlis_dictionary::schemas::no_format::SCHEMA;

use crate::builder::EflrObjectBuilder;
use crate::error::Result;

/// The NoFormat record.
#[derive(Debug, Clone, Default)]
pub struct NoFormat {
    pub name: String,
    pub consumer_name: Option<String>,
    pub description: Option<String>,
}

impl NoFormat {
    pub fn new(name: impl Into<String>) -> Self {
        NoFormat {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_consumer_name(mut self, consumer_name: impl Into<String>) -> Self {
        self.consumer_name = Some(consumer_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn build_attributes(&self) -> Result<Vec<dlis_core::Attribute>> {
        let mut builder = EflrObjectBuilder::new(&SCHEMA);
        if let Some(value) = &self.consumer_name {
            builder.set_text("CONSUMER-NAME", ReprCode::Ident, value.clone())?;
        }
        if let Some(value) = &self.description {
            builder.set_text("DESCRIPTION", ReprCode::Ascii, value.clone())?;
        }
        Ok(builder.into_attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumer_name_is_an_ident() {
        let no_format = NoFormat::new("RAW-IMAGE").with_consumer_name("IMAGE-VIEWER");
        let attrs = no_format.build_attributes().unwrap();
        let consumer_name = attrs.iter().find(|a| a.label() == "CONSUMER-NAME").unwrap();
        assert_eq!(consumer_name.representation_code(), Some(ReprCode::Ident));
    }
}
