//! `LONG-NAME`: a structured, many-part name that other Objects'
//! `LONG-NAME` attribute can reference by `OBNAME` instead of inlining a
//! free-text description.

use dlis_core::ReprCode;
use dlis_dictionary::schemas::long_name::SCHEMA;

use crate::builder::EflrObjectBuilder;
use crate::error::Result;

/// The LongName record. RP66 V1 Appendix A orders these parts as a
/// sentence template: `GENERAL-MODIFIER QUANTITY QUANTITY-MODIFIER
/// ALTERED-FORM ENTITY ENTITY-MODIFIER ENTITY-NUMBER ENTITY-PART
/// ENTITY-PART-NUMBER GENERIC-SOURCE SOURCE-PART SOURCE-PART-NUMBER
/// CONDITIONS STANDARD-SYMBOL PRIVATE-SYMBOL`.
#[derive(Debug, Clone, Default)]
pub struct LongName {
    pub name: String,
    pub general_modifier: Vec<String>,
    pub quantity: Option<String>,
    pub quantity_modifier: Vec<String>,
    pub altered_form: Option<String>,
    pub entity: Option<String>,
    pub entity_modifier: Vec<String>,
    pub entity_number: Option<String>,
    pub entity_part: Option<String>,
    pub entity_part_number: Option<String>,
    pub generic_source: Option<String>,
    pub source_part: Vec<String>,
    pub source_part_number: Vec<String>,
    pub conditions: Vec<String>,
    pub standard_symbol: Option<String>,
    pub private_symbol: Option<String>,
}

impl LongName {
    pub fn new(name: impl Into<String>) -> Self {
        LongName {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    pub fn with_standard_symbol(mut self, standard_symbol: impl Into<String>) -> Self {
        self.standard_symbol = Some(standard_symbol.into());
        self
    }

    pub(crate) fn build_attributes(&self) -> Result<Vec<dlis_core::Attribute>> {
        let mut builder = EflrObjectBuilder::new(&SCHEMA);
        if !self.general_modifier.is_empty() {
            builder.set_text_list("GENERAL-MODIFIER", ReprCode::Ascii, &self.general_modifier)?;
        }
        if let Some(value) = &self.quantity {
            builder.set_text("QUANTITY", ReprCode::Ascii, value.clone())?;
        }
        if !self.quantity_modifier.is_empty() {
            builder.set_text_list("QUANTITY-MODIFIER", ReprCode::Ascii, &self.quantity_modifier)?;
        }
        if let Some(value) = &self.altered_form {
            builder.set_text("ALTERED-FORM", ReprCode::Ascii, value.clone())?;
        }
        if let Some(value) = &self.entity {
            builder.set_text("ENTITY", ReprCode::Ascii, value.clone())?;
        }
        if !self.entity_modifier.is_empty() {
            builder.set_text_list("ENTITY-MODIFIER", ReprCode::Ascii, &self.entity_modifier)?;
        }
        if let Some(value) = &self.entity_number {
            builder.set_text("ENTITY-NUMBER", ReprCode::Ascii, value.clone())?;
        }
        if let Some(value) = &self.entity_part {
            builder.set_text("ENTITY-PART", ReprCode::Ascii, value.clone())?;
        }
        if let Some(value) = &self.entity_part_number {
            builder.set_text("ENTITY-PART-NUMBER", ReprCode::Ascii, value.clone())?;
        }
        if let Some(value) = &self.generic_source {
            builder.set_text("GENERIC-SOURCE", ReprCode::Ascii, value.clone())?;
        }
        if !self.source_part.is_empty() {
            builder.set_text_list("SOURCE-PART", ReprCode::Ascii, &self.source_part)?;
        }
        if !self.source_part_number.is_empty() {
            builder.set_text_list("SOURCE-PART-NUMBER", ReprCode::Ascii, &self.source_part_number)?;
        }
        if !self.conditions.is_empty() {
            builder.set_text_list("CONDITIONS", ReprCode::Ascii, &self.conditions)?;
        }
        if let Some(value) = &self.standard_symbol {
            builder.set_text("STANDARD-SYMBOL", ReprCode::Ascii, value.clone())?;
        }
        if let Some(value) = &self.private_symbol {
            builder.set_text("PRIVATE-SYMBOL", ReprCode::Ascii, value.clone())?;
        }
        Ok(builder.into_attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_long_name_only_sets_quantity_and_entity() {
        let long_name = LongName::new("GR-LONG-NAME")
            .with_quantity("Gamma Ray")
            .with_entity("Formation");
        let attrs = long_name.build_attributes().unwrap();
        assert!(attrs.iter().find(|a| a.label() == "QUANTITY").unwrap().value().is_some());
        assert!(attrs
            .iter()
            .find(|a| a.label() == "ALTERED-FORM")
            .unwrap()
            .value()
            .is_none());
    }
}
