//! One EFLR Set under construction: a schema, an optional Set name, and
//! the items built against it so far.

use dlis_core::obname::ObName;
use dlis_core::repr_code::ReprCode;
use dlis_core::Attribute;
use dlis_dictionary::EflrSchema;

use crate::error::Result;

/// A Set of EFLR items sharing one schema, accumulated in the order
/// items were added and ready to be turned into wire bytes.
#[derive(Debug)]
pub struct EflrSetBuilder {
    schema: &'static EflrSchema,
    set_name: Option<String>,
    items: Vec<(ObName, Vec<Attribute>)>,
}

impl EflrSetBuilder {
    /// Start an empty Set for the given schema.
    pub fn new(schema: &'static EflrSchema, set_name: Option<String>) -> Self {
        EflrSetBuilder {
            schema,
            set_name,
            items: Vec::new(),
        }
    }

    /// Append one item's finished attributes under `obname`.
    pub fn push(&mut self, obname: ObName, attributes: Vec<Attribute>) {
        self.items.push((obname, attributes));
    }

    /// The schema this Set's items were built from.
    pub fn schema(&self) -> &'static EflrSchema {
        self.schema
    }

    /// Resolve any schema-flexible attribute's representation code from
    /// the first item that set one, producing the Set's shared template.
    ///
    /// A flexible attribute (e.g. `ZONE`'s `MAXIMUM`/`MINIMUM`) has no
    /// fixed code in the schema; every item in one Set is still required
    /// to agree on a single code, so the first item to supply a value
    /// settles it for the whole template.
    fn build_template(&self) -> Vec<Attribute> {
        let mut template = self.schema.new_template();
        for (index, spec_template_attr) in template.iter_mut().enumerate() {
            if spec_template_attr.representation_code().is_some() {
                continue;
            }
            for (_, attrs) in &self.items {
                if let Some(code) = attrs[index].representation_code() {
                    spec_template_attr
                        .set_representation_code(code)
                        .expect("a freshly constructed template attribute has no prior code");
                    break;
                }
            }
        }
        template
    }

    /// Encode this Set's full body: SET, TEMPLATE, then one OBJECT
    /// component per item. Produces no bytes if the Set holds no items.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let template = self.build_template();
        let items: Vec<dlis_encoding::EflrItem> = self
            .items
            .iter()
            .map(|(obname, attributes)| dlis_encoding::EflrItem {
                obname: obname.clone(),
                attributes: attributes.clone(),
            })
            .collect();
        let set = dlis_encoding::EflrSet {
            set_type: self.schema.set_type,
            set_name: self.set_name.as_deref(),
            template: &template,
            items: &items,
        };
        Ok(dlis_encoding::encode_eflr_body(&set)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlis_core::value::PrimitiveValue;
    use dlis_dictionary::schemas::channel::SCHEMA as CHANNEL_SCHEMA;

    #[test]
    fn empty_set_encodes_to_no_bytes() {
        let builder = EflrSetBuilder::new(&CHANNEL_SCHEMA, None);
        assert!(builder.encode().unwrap().is_empty());
    }

    #[test]
    fn flexible_attribute_code_is_resolved_from_the_first_item() {
        use dlis_dictionary::schemas::zone::SCHEMA as ZONE_SCHEMA;

        let mut attrs = ZONE_SCHEMA.new_template();
        let maximum_index = ZONE_SCHEMA.attribute_index("MAXIMUM").unwrap();
        attrs[maximum_index]
            .set_value(PrimitiveValue::single_f64(100.0), ReprCode::FDoubl)
            .unwrap();

        let mut builder = EflrSetBuilder::new(&ZONE_SCHEMA, None);
        builder.push(ObName::new(1, 0, "ZONE-A"), attrs);

        let template = builder.build_template();
        assert_eq!(
            template[maximum_index].representation_code(),
            Some(ReprCode::FDoubl)
        );
    }

    #[test]
    fn one_item_roundtrips_through_encoding() {
        let mut attrs = CHANNEL_SCHEMA.new_template();
        let long_name_index = CHANNEL_SCHEMA.attribute_index("LONG-NAME").unwrap();
        attrs[long_name_index]
            .set_value(PrimitiveValue::single_text("Gamma Ray"), ReprCode::Ascii)
            .unwrap();

        let mut builder = EflrSetBuilder::new(&CHANNEL_SCHEMA, None);
        builder.push(ObName::new(1, 0, "GR"), attrs);

        let encoded = builder.encode().unwrap();
        assert_eq!(encoded[0], 0xF0);
        assert!(encoded.windows(2).any(|w| w == b"GR"));
    }
}
