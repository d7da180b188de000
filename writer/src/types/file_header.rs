//! `FILE-HEADER`: the first Logical Record after the Storage Unit Label,
//! written with RP66 V1's fixed 10/65-byte special-case encoding rather
//! than the generic Attribute template/body layout.

use dlis_core::ReprCode;
use dlis_dictionary::schemas::file_header::SCHEMA;

use crate::builder::EflrObjectBuilder;
use crate::error::{Error, Result};

const SEQUENCE_NUMBER_WIDTH: usize = 10;
const ID_WIDTH: usize = 65;

/// The File Header record. `sequence_number` is usually `"1"` for a
/// single-file storage set; `identification` is a free-text file label.
#[derive(Debug, Clone)]
pub struct FileHeader {
    pub name: String,
    pub sequence_number: String,
    pub identification: String,
}

impl FileHeader {
    pub fn new(name: impl Into<String>) -> Self {
        FileHeader {
            name: name.into(),
            sequence_number: "1".to_string(),
            identification: String::new(),
        }
    }

    pub fn with_sequence_number(mut self, sequence_number: impl Into<String>) -> Self {
        self.sequence_number = sequence_number.into();
        self
    }

    pub fn with_identification(mut self, identification: impl Into<String>) -> Self {
        self.identification = identification.into();
        self
    }

    /// Right-justify `SEQUENCE-NUMBER` into its 10-byte field and
    /// left-justify `ID` into its 65-byte field, the same justification
    /// `storage_unit_label.py` applies to the Storage Unit Label -- both
    /// widths stay under the 128-byte boundary where `IDENT`'s 1-byte
    /// length prefix and a fixed-width field coincide, so no bespoke byte
    /// layout is needed beyond padding the strings first.
    pub(crate) fn padded_fields(&self) -> Result<(String, String)> {
        let sequence_number = justify_right(&self.sequence_number, SEQUENCE_NUMBER_WIDTH)?;
        let identification = justify_left(&self.identification, ID_WIDTH)?;
        Ok((sequence_number, identification))
    }
}

fn justify_right(value: &str, width: usize) -> Result<String> {
    if value.len() > width {
        return Err(overflow("SEQUENCE-NUMBER", value, width));
    }
    Ok(format!("{value:>width$}"))
}

fn justify_left(value: &str, width: usize) -> Result<String> {
    if value.len() > width {
        return Err(overflow("ID", value, width));
    }
    Ok(format!("{value:<width$}"))
}

fn overflow(what: &str, value: &str, width: usize) -> Error {
    dlis_encoding::Error::wire_overflow(
        what.to_string(),
        format!("`{value}` is {} bytes, field width is {width}", value.len()),
    )
    .into()
}

impl FileHeader {
    pub(crate) fn build_attributes(&self) -> Result<Vec<dlis_core::Attribute>> {
        let (sequence_number, identification) = self.padded_fields()?;
        let mut builder = EflrObjectBuilder::new(&SCHEMA);
        builder.set_text("SEQUENCE-NUMBER", ReprCode::Ascii, sequence_number)?;
        builder.set_text("ID", ReprCode::Ascii, identification)?;
        Ok(builder.into_attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_number_is_right_justified() {
        let header = FileHeader::new("FILE-HEADER").with_sequence_number("1");
        let (sequence_number, _) = header.padded_fields().unwrap();
        assert_eq!(sequence_number.len(), 10);
        assert!(sequence_number.ends_with('1'));
    }

    #[test]
    fn identification_is_left_justified() {
        let header = FileHeader::new("FILE-HEADER").with_identification("well-001");
        let (_, identification) = header.padded_fields().unwrap();
        assert_eq!(identification.len(), 65);
        assert!(identification.starts_with("well-001"));
    }

    #[test]
    fn oversized_identification_is_rejected() {
        let header = FileHeader::new("FILE-HEADER").with_identification("x".repeat(66));
        assert!(header.padded_fields().is_err());
    }

    #[test]
    fn build_attributes_writes_both_padded_fields() {
        let header = FileHeader::new("FILE-HEADER")
            .with_sequence_number("1")
            .with_identification("well-001");
        let attrs = header.build_attributes().unwrap();
        let sequence_number = attrs.iter().find(|a| a.label() == "SEQUENCE-NUMBER").unwrap();
        let id = attrs.iter().find(|a| a.label() == "ID").unwrap();
        match sequence_number.value().unwrap() {
            dlis_core::value::PrimitiveValue::Text(values) => assert_eq!(values[0].len(), SEQUENCE_NUMBER_WIDTH),
            other => panic!("expected text value, got {other:?}"),
        }
        match id.value().unwrap() {
            dlis_core::value::PrimitiveValue::Text(values) => assert_eq!(values[0].len(), ID_WIDTH),
            other => panic!("expected text value, got {other:?}"),
        }
    }
}
