//! `COMMENT`: free-text remarks with no location or timestamp, distinct
//! from [`super::message::Message`]'s borehole-positioned notes.

use dlis_core::ReprCode;
use dlis_dictionary::schemas::comment::SCHEMA;

use crate::builder::EflrObjectBuilder;
use crate::error::Result;

/// The Comment record.
#[derive(Debug, Clone, Default)]
pub struct Comment {
    pub name: String,
    pub text: Vec<String>,
}

impl Comment {
    pub fn new(name: impl Into<String>, text: Vec<String>) -> Self {
        Comment {
            name: name.into(),
            text,
        }
    }

    pub(crate) fn build_attributes(&self) -> Result<Vec<dlis_core::Attribute>> {
        let mut builder = EflrObjectBuilder::new(&SCHEMA);
        if !self.text.is_empty() {
            builder.set_text_list("TEXT", ReprCode::Ascii, &self.text)?;
        }
        Ok(builder.into_attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_lines_are_kept_in_order() {
        let comment = Comment::new("NOTE-1", vec!["first".to_string(), "second".to_string()]);
        let attrs = comment.build_attributes().unwrap();
        let text = attrs.iter().find(|a| a.label() == "TEXT").unwrap();
        assert_eq!(text.count(), 2);
    }
}
