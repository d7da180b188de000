//! A generic setter surface over one EFLR item's attributes, shared by
//! every typed record wrapper in [`crate::types`].
//!
//! Grounded in Design Notes' "declarative schema + generic builder"
//! pattern: rather than one hand-written encoder per record type, every
//! typed wrapper holds an `EflrObjectBuilder` and calls its `set_*`
//! methods by RP66 label, looking the attribute up in the schema's
//! template order.

use dlis_core::obname::{ObName, ObjRef};
use dlis_core::repr_code::ReprCode;
use dlis_core::value::{DateTime, PrimitiveValue};
use dlis_core::Attribute;
use dlis_dictionary::EflrSchema;
use smallvec::SmallVec;

use crate::error::{Error, Result};

/// One EFLR item under construction: an attribute vector in schema
/// template order, with its values filled in one label at a time.
#[derive(Debug, Clone)]
pub struct EflrObjectBuilder {
    schema: &'static EflrSchema,
    attributes: Vec<Attribute>,
}

impl EflrObjectBuilder {
    /// Start a new item from `schema`'s template, every attribute still
    /// valueless.
    pub fn new(schema: &'static EflrSchema) -> Self {
        EflrObjectBuilder {
            schema,
            attributes: schema.new_template(),
        }
    }

    /// Consume the builder, returning the finished attribute list in
    /// schema order.
    pub fn into_attributes(self) -> Vec<Attribute> {
        self.attributes
    }

    /// The underlying attributes, in schema order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    fn attribute_mut(&mut self, label: &str) -> Result<&mut Attribute> {
        let index = self.schema.attribute_index(label).ok_or_else(|| {
            Error::from(dlis_core::Error::invariant_broken(format!(
                "`{label}` is not an attribute of `{}`",
                self.schema.set_type
            )))
        })?;
        Ok(&mut self.attributes[index])
    }

    /// Set a text-valued (`IDENT`/`ASCII`/`UNITS`) attribute.
    pub fn set_text(&mut self, label: &str, code: ReprCode, value: impl Into<String>) -> Result<()> {
        self.attribute_mut(label)?
            .set_value(PrimitiveValue::single_text(value), code)?;
        Ok(())
    }

    /// Set a single `UVARI`-valued attribute.
    pub fn set_uvari(&mut self, label: &str, value: u32) -> Result<()> {
        self.attribute_mut(label)?.set_value(
            PrimitiveValue::UVari(SmallVec::from_slice(&[value])),
            ReprCode::UVari,
        )?;
        Ok(())
    }

    /// Set a multivalued text (`IDENT`/`ASCII`) attribute.
    pub fn set_text_list(&mut self, label: &str, code: ReprCode, values: &[String]) -> Result<()> {
        self.attribute_mut(label)?
            .set_value(PrimitiveValue::Text(SmallVec::from_slice(values)), code)?;
        Ok(())
    }

    /// Set a multivalued `UVARI` attribute.
    pub fn set_uvari_list(&mut self, label: &str, values: &[u32]) -> Result<()> {
        self.attribute_mut(label)?.set_value(
            PrimitiveValue::UVari(SmallVec::from_slice(values)),
            ReprCode::UVari,
        )?;
        Ok(())
    }

    /// Set a single `FDOUBL`-valued attribute.
    pub fn set_f64(&mut self, label: &str, value: f64) -> Result<()> {
        self.attribute_mut(label)?
            .set_value(PrimitiveValue::single_f64(value), ReprCode::FDoubl)?;
        Ok(())
    }

    /// Set a multivalued `FDOUBL` attribute.
    pub fn set_f64_list(&mut self, label: &str, values: &[f64]) -> Result<()> {
        self.attribute_mut(label)?.set_value(
            PrimitiveValue::F64(SmallVec::from_slice(values)),
            ReprCode::FDoubl,
        )?;
        Ok(())
    }

    /// Set a `DTIME`-valued attribute.
    pub fn set_dtime(&mut self, label: &str, value: DateTime) -> Result<()> {
        self.attribute_mut(label)?.set_value(
            PrimitiveValue::DTime(SmallVec::from_slice(&[value])),
            ReprCode::DTime,
        )?;
        Ok(())
    }

    /// Set a single `OBNAME`-valued attribute.
    pub fn set_obname(&mut self, label: &str, value: ObName) -> Result<()> {
        self.attribute_mut(label)?.set_value(
            PrimitiveValue::ObName(SmallVec::from_slice(&[value])),
            ReprCode::ObName,
        )?;
        Ok(())
    }

    /// Set a multivalued `OBNAME` attribute.
    pub fn set_obname_list(&mut self, label: &str, values: &[ObName]) -> Result<()> {
        self.attribute_mut(label)?.set_value(
            PrimitiveValue::ObName(SmallVec::from_slice(values)),
            ReprCode::ObName,
        )?;
        Ok(())
    }

    /// Set an `OBJREF`-valued attribute.
    pub fn set_objref(&mut self, label: &str, value: ObjRef) -> Result<()> {
        self.attribute_mut(label)?.set_value(
            PrimitiveValue::ObjRef(SmallVec::from_slice(&[value])),
            ReprCode::ObjRef,
        )?;
        Ok(())
    }

    /// Set a `STATUS`-valued attribute.
    pub fn set_status(&mut self, label: &str, value: bool) -> Result<()> {
        self.attribute_mut(label)?.set_value(
            PrimitiveValue::Status(SmallVec::from_slice(&[value])),
            ReprCode::Status,
        )?;
        Ok(())
    }

    /// Set a single `USHORT`-valued attribute.
    pub fn set_ushort(&mut self, label: &str, value: u8) -> Result<()> {
        self.attribute_mut(label)?.set_value(
            PrimitiveValue::U8(SmallVec::from_slice(&[value])),
            ReprCode::UShort,
        )?;
        Ok(())
    }

    /// Set a single `UNORM`-valued attribute.
    pub fn set_unorm(&mut self, label: &str, value: u16) -> Result<()> {
        self.attribute_mut(label)?.set_value(
            PrimitiveValue::U16(SmallVec::from_slice(&[value])),
            ReprCode::UNorm,
        )?;
        Ok(())
    }

    /// Set an attribute's units-of-measure string.
    pub fn set_units(&mut self, label: &str, units: impl Into<String>) -> Result<()> {
        self.attribute_mut(label)?.set_units(units);
        Ok(())
    }

    /// Set an attribute to an arbitrary value/code pair.
    ///
    /// Only needed for schema-flexible attributes (declared via
    /// [`dlis_dictionary::AttributeSpec::flexible`]), where the
    /// representation code is not fixed by the schema and instead depends
    /// on which kind of value the caller supplies (e.g. `ZONE`'s
    /// `MAXIMUM`/`MINIMUM`, `FDOUBL` or `DTIME` depending on `DOMAIN`).
    pub fn set_value(&mut self, label: &str, value: PrimitiveValue, code: ReprCode) -> Result<()> {
        self.attribute_mut(label)?.set_value(value, code)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlis_dictionary::schemas::channel::SCHEMA as CHANNEL_SCHEMA;

    #[test]
    fn set_text_fills_the_named_attribute() {
        let mut builder = EflrObjectBuilder::new(&CHANNEL_SCHEMA);
        builder
            .set_text("LONG-NAME", ReprCode::Ascii, "Gamma Ray")
            .unwrap();
        let attrs = builder.into_attributes();
        let long_name = attrs.iter().find(|a| a.label() == "LONG-NAME").unwrap();
        assert_eq!(long_name.value().unwrap().len(), 1);
    }

    #[test]
    fn unknown_label_is_an_error() {
        let mut builder = EflrObjectBuilder::new(&CHANNEL_SCHEMA);
        assert!(builder.set_text("NOT-A-REAL-LABEL", ReprCode::Ascii, "x").is_err());
    }

    #[test]
    fn set_f64_list_preserves_element_order() {
        let mut builder = EflrObjectBuilder::new(&CHANNEL_SCHEMA);
        builder
            .set_f64_list("MINIMUM-VALUE", &[1.0, 2.0, 3.0])
            .unwrap();
        let attrs = builder.into_attributes();
        let min = attrs
            .iter()
            .find(|a| a.label() == "MINIMUM-VALUE")
            .unwrap();
        assert_eq!(min.count(), 3);
    }
}
