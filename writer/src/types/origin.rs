//! `ORIGIN`: the one-per-file record carrying the `FILE-SET-NUMBER` that
//! becomes every other object's `OBNAME` origin reference.

use dlis_core::value::DateTime;
use dlis_dictionary::schemas::origin::SCHEMA;
use rand::Rng;

use crate::builder::EflrObjectBuilder;
use crate::error::Result;

/// The highest `FILE-SET-NUMBER` this writer will pick at random when the
/// caller leaves it unset. RP66 V1 constrains `UVARI` to 30 bits; staying
/// well clear of the top of that range avoids ever needing the 4-byte
/// UVARI tier just for a file-set number.
const MAX_RANDOM_FILE_SET_NUMBER: u32 = (1 << 30) - 1;

/// The Origin record. `file_set_number` doubles as the `ORIGIN` reference
/// every OBNAME in the file carries; leave it unset to have a random one
/// chosen, matching how `origin.py` behaves when the caller does not
/// supply one explicitly.
#[derive(Debug, Clone)]
pub struct Origin {
    pub name: String,
    pub file_id: String,
    pub file_set_name: String,
    pub file_set_number: Option<u32>,
    pub file_number: u32,
    pub file_type: String,
    pub product: String,
    pub version: String,
    pub programs: Vec<String>,
    pub creation_time: Option<DateTime>,
    pub order_number: String,
    pub descent_number: u16,
    pub run_number: u16,
    pub well_id: u16,
    pub well_name: String,
    pub field_name: String,
    pub producer_code: u16,
    pub producer_name: String,
    pub company: String,
    pub name_space_name: String,
    pub name_space_version: u32,
}

impl Origin {
    pub fn new(name: impl Into<String>) -> Self {
        Origin {
            name: name.into(),
            file_id: String::new(),
            file_set_name: String::new(),
            file_set_number: None,
            file_number: 1,
            file_type: String::new(),
            product: String::new(),
            version: String::new(),
            programs: Vec::new(),
            creation_time: None,
            order_number: String::new(),
            descent_number: 1,
            run_number: 1,
            well_id: 0,
            well_name: String::new(),
            field_name: "WILDCAT".to_string(),
            producer_code: 0,
            producer_name: String::new(),
            company: String::new(),
            name_space_name: String::new(),
            name_space_version: 1,
        }
    }

    pub fn with_file_set_number(mut self, file_set_number: u32) -> Self {
        self.file_set_number = Some(file_set_number);
        self
    }

    pub fn with_well_name(mut self, well_name: impl Into<String>) -> Self {
        self.well_name = well_name.into();
        self
    }

    pub fn with_field_name(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = field_name.into();
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    pub fn with_creation_time(mut self, creation_time: DateTime) -> Self {
        self.creation_time = Some(creation_time);
        self
    }

    /// Pick this Origin's `FILE-SET-NUMBER`, choosing a random value in
    /// `1..=2^30-1` if the caller left it unset.
    pub(crate) fn resolve_file_set_number(&self) -> u32 {
        self.file_set_number
            .unwrap_or_else(|| rand::thread_rng().gen_range(1..=MAX_RANDOM_FILE_SET_NUMBER))
    }

    pub(crate) fn build_attributes(
        &self,
        file_set_number: u32,
    ) -> Result<Vec<dlis_core::Attribute>> {
        let mut builder = EflrObjectBuilder::new(&SCHEMA);
        builder.set_text(
            "FILE-ID",
            dlis_core::ReprCode::Ascii,
            if self.file_id.is_empty() {
                self.name.clone()
            } else {
                self.file_id.clone()
            },
        )?;
        if !self.file_set_name.is_empty() {
            builder.set_text("FILE-SET-NAME", dlis_core::ReprCode::Ident, self.file_set_name.clone())?;
        }
        builder.set_uvari("FILE-SET-NUMBER", file_set_number)?;
        builder.set_uvari("FILE-NUMBER", self.file_number)?;
        if !self.file_type.is_empty() {
            builder.set_text("FILE-TYPE", dlis_core::ReprCode::Ident, self.file_type.clone())?;
        }
        if !self.product.is_empty() {
            builder.set_text("PRODUCT", dlis_core::ReprCode::Ascii, self.product.clone())?;
        }
        if !self.version.is_empty() {
            builder.set_text("VERSION", dlis_core::ReprCode::Ascii, self.version.clone())?;
        }
        if !self.programs.is_empty() {
            builder.set_text_list("PROGRAMS", dlis_core::ReprCode::Ascii, &self.programs)?;
        }
        #[cfg(feature = "now")]
        let creation_time = self.creation_time.unwrap_or_else(DateTime::now);
        #[cfg(not(feature = "now"))]
        let creation_time = self.creation_time.ok_or_else(|| {
            crate::error::Error::from(dlis_core::Error::invariant_broken(
                "ORIGIN creation_time must be set explicitly unless built with the `now` feature",
            ))
        })?;
        builder.set_dtime("CREATION-TIME", creation_time)?;
        if !self.order_number.is_empty() {
            builder.set_text("ORDER-NUMBER", dlis_core::ReprCode::Ascii, self.order_number.clone())?;
        }
        builder.set_unorm("DESCENT-NUMBER", self.descent_number)?;
        builder.set_unorm("RUN-NUMBER", self.run_number)?;
        builder.set_unorm("WELL-ID", self.well_id)?;
        if !self.well_name.is_empty() {
            builder.set_text("WELL-NAME", dlis_core::ReprCode::Ascii, self.well_name.clone())?;
        }
        builder.set_text("FIELD-NAME", dlis_core::ReprCode::Ascii, self.field_name.clone())?;
        builder.set_unorm("PRODUCER-CODE", self.producer_code)?;
        if !self.producer_name.is_empty() {
            builder.set_text("PRODUCER-NAME", dlis_core::ReprCode::Ascii, self.producer_name.clone())?;
        }
        if !self.company.is_empty() {
            builder.set_text("COMPANY", dlis_core::ReprCode::Ascii, self.company.clone())?;
        }
        if !self.name_space_name.is_empty() {
            builder.set_text("NAME-SPACE-NAME", dlis_core::ReprCode::Ident, self.name_space_name.clone())?;
        }
        builder.set_uvari("NAME-SPACE-VERSION", self.name_space_version)?;
        Ok(builder.into_attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlis_core::value::TimeZoneCode;

    #[test]
    fn random_file_set_number_is_within_uvari_30_bit_range() {
        let origin = Origin::new("ORIGIN");
        let number = origin.resolve_file_set_number();
        assert!(number >= 1 && number <= MAX_RANDOM_FILE_SET_NUMBER);
    }

    #[test]
    fn explicit_file_set_number_is_kept() {
        let origin = Origin::new("ORIGIN").with_file_set_number(42);
        assert_eq!(origin.resolve_file_set_number(), 42);
    }

    #[test]
    fn field_name_defaults_to_wildcat() {
        let origin = Origin::new("ORIGIN")
            .with_creation_time(
                DateTime::from_ymd_hms_milli(2024, 1, 1, 0, 0, 0, 0, TimeZoneCode::Gmt).unwrap(),
            );
        let attrs = origin.build_attributes(1).unwrap();
        let field_name = attrs.iter().find(|a| a.label() == "FIELD-NAME").unwrap();
        match field_name.value().unwrap() {
            dlis_core::value::PrimitiveValue::Text(values) => {
                assert_eq!(values[0], "WILDCAT");
            }
            other => panic!("expected text value, got {other:?}"),
        }
    }
}
