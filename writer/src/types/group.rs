//! `GROUP`: an arbitrary named collection of Objects of one type, or of
//! other Groups.

use dlis_core::obname::ObName;
use dlis_core::ReprCode;
use dlis_dictionary::schemas::group::SCHEMA;

use crate::builder::EflrObjectBuilder;
use crate::error::Result;

/// The Group record.
#[derive(Debug, Clone, Default)]
pub struct Group {
    pub name: String,
    pub description: Option<String>,
    pub object_type: Option<String>,
    pub object_list: Vec<ObName>,
    pub group_list: Vec<ObName>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Group {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_object_type(mut self, object_type: impl Into<String>) -> Self {
        self.object_type = Some(object_type.into());
        self
    }

    pub fn with_object_list(mut self, object_list: Vec<ObName>) -> Self {
        self.object_list = object_list;
        self
    }

    pub fn with_group_list(mut self, group_list: Vec<ObName>) -> Self {
        self.group_list = group_list;
        self
    }

    pub(crate) fn build_attributes(&self) -> Result<Vec<dlis_core::Attribute>> {
        let mut builder = EflrObjectBuilder::new(&SCHEMA);
        if let Some(value) = &self.description {
            builder.set_text("DESCRIPTION", ReprCode::Ascii, value.clone())?;
        }
        if let Some(value) = &self.object_type {
            builder.set_text("OBJECT-TYPE", ReprCode::Ident, value.clone())?;
        }
        if !self.object_list.is_empty() {
            builder.set_obname_list("OBJECT-LIST", &self.object_list)?;
        }
        if !self.group_list.is_empty() {
            builder.set_obname_list("GROUP-LIST", &self.group_list)?;
        }
        Ok(builder.into_attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_group_of_groups_has_no_object_list() {
        let group = Group::new("ALL-ZONE-GROUPS")
            .with_object_type("GROUP")
            .with_group_list(vec![ObName::new(1, 0, "UPPER-GROUP")]);
        let attrs = group.build_attributes().unwrap();
        assert!(attrs
            .iter()
            .find(|a| a.label() == "OBJECT-LIST")
            .unwrap()
            .value()
            .is_none());
    }
}
