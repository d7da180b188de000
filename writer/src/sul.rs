//! Storage Unit Label: the 80-byte ASCII preamble that opens every DLIS
//! file, ahead of the first Visible Record.

use crate::error::Result;

const DLIS_VERSION: &str = "V1.00";
const STORAGE_UNIT_STRUCTURE: &str = "RECORD";

/// The fixed 80-byte header written before the first Visible Record.
///
/// Grounded in `storage_unit_label.py`: `dlis_version` and
/// `storage_unit_structure` are not meaningfully configurable (RP66 V1
/// defines exactly one value for each), so they are kept as crate
/// constants rather than struct fields.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageUnitLabel {
    pub storage_unit_sequence_number: u32,
    pub max_record_length: u16,
    pub storage_set_identifier: String,
}

impl Default for StorageUnitLabel {
    fn default() -> Self {
        StorageUnitLabel {
            storage_unit_sequence_number: 1,
            max_record_length: 8192,
            storage_set_identifier: "DEFAULT STORAGE SET".to_string(),
        }
    }
}

impl StorageUnitLabel {
    /// Encode the fixed 80-byte ASCII label.
    pub fn encode(&self) -> Result<[u8; 80]> {
        let mut out = [0u8; 80];
        let mut cursor = 0;

        write_ascii_right(
            &mut out,
            &mut cursor,
            4,
            &self.storage_unit_sequence_number.to_string(),
            "storage unit sequence number",
        )?;
        write_ascii_left(&mut out, &mut cursor, 5, DLIS_VERSION, "DLIS version")?;
        write_ascii_right(
            &mut out,
            &mut cursor,
            6,
            STORAGE_UNIT_STRUCTURE,
            "storage unit structure",
        )?;
        write_ascii_right(
            &mut out,
            &mut cursor,
            5,
            &self.max_record_length.to_string(),
            "max record length",
        )?;
        write_ascii_left(
            &mut out,
            &mut cursor,
            60,
            &self.storage_set_identifier,
            "storage set identifier",
        )?;

        debug_assert_eq!(cursor, 80);
        Ok(out)
    }
}

/// Write `value` right-justified into a `width`-byte field, padding with
/// leading spaces.
fn write_ascii_right(
    out: &mut [u8; 80],
    cursor: &mut usize,
    width: usize,
    value: &str,
    what: &str,
) -> Result<()> {
    if value.len() > width {
        return Err(dlis_encoding::Error::wire_overflow(
            what.to_string(),
            format!("`{value}` is {} bytes, field width is {width}", value.len()),
        )
        .into());
    }
    let pad = width - value.len();
    out[*cursor..*cursor + pad].fill(b' ');
    out[*cursor + pad..*cursor + width].copy_from_slice(value.as_bytes());
    *cursor += width;
    Ok(())
}

/// Write `value` left-justified into a `width`-byte field, padding with
/// trailing spaces.
fn write_ascii_left(
    out: &mut [u8; 80],
    cursor: &mut usize,
    width: usize,
    value: &str,
    what: &str,
) -> Result<()> {
    if value.len() > width {
        return Err(dlis_encoding::Error::wire_overflow(
            what.to_string(),
            format!("`{value}` is {} bytes, field width is {width}", value.len()),
        )
        .into());
    }
    out[*cursor..*cursor + value.len()].copy_from_slice(value.as_bytes());
    out[*cursor + value.len()..*cursor + width].fill(b' ');
    *cursor += width;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_label_matches_rp66_defaults() {
        let encoded = StorageUnitLabel::default().encode().unwrap();
        assert_eq!(&encoded[0..4], b"   1");
        assert_eq!(&encoded[4..9], b"V1.00");
        assert_eq!(&encoded[9..15], b"RECORD");
        assert_eq!(&encoded[15..20], b" 8192");
        assert_eq!(&encoded[20..40], b"DEFAULT STORAGE SET ");
        assert_eq!(encoded[79], b' ');
    }

    #[test]
    fn sequence_number_is_right_justified_with_leading_blanks() {
        let label = StorageUnitLabel {
            storage_unit_sequence_number: 42,
            ..Default::default()
        };
        let encoded = label.encode().unwrap();
        assert_eq!(&encoded[0..4], b"  42");
    }

    #[test]
    fn identifier_longer_than_60_bytes_is_rejected() {
        let label = StorageUnitLabel {
            storage_set_identifier: "x".repeat(61),
            ..Default::default()
        };
        assert!(label.encode().is_err());
    }
}
