//! Component-descriptor byte and template/body serialization of a
//! [`dlis_core::Attribute`].

use dlis_core::repr_code::ReprCode;
use dlis_core::Attribute;

use crate::basic::{encode_ident, encode_units, encode_ushort, encode_uvari};
use crate::error::Error;
use crate::value_codec::encode_elements;

/// Top 3 bits of every Attribute component descriptor: role `001`.
const ATTRIBUTE_ROLE: u8 = 0b001_00000;

/// Write one Attribute in **template** mode: label, representation code,
/// and units -- the attribute's "shape", shared by every object in the
/// set.
pub fn encode_template(attr: &Attribute) -> Result<Vec<u8>, Error> {
    let label = encode_ident(attr.label())?;
    let code = attr.representation_code();
    let units = attr.units();

    let descriptor = ATTRIBUTE_ROLE
        | 0b10000 // label present
        | (if code.is_some() { 0b00100 } else { 0 })
        | (if units.is_some() { 0b00010 } else { 0 });

    let mut out = vec![descriptor];
    out.extend(label);
    if let Some(code) = code {
        out.extend(encode_ushort(code.code()));
    }
    if let Some(units) = units {
        out.extend(encode_units(units)?);
    }
    Ok(out)
}

/// Write one Attribute in **body** mode: count (only when it differs from
/// 1) and value (when present). A `None` value is written as a bare
/// descriptor byte with no characteristics set, per RP66's "absent value"
/// convention.
///
/// `count` is UVARI-encoded, not USHORT -- a Multi-valued Attribute backed
/// by, say, a 128-sample array must be able to carry a count past 255.
pub fn encode_body(attr: &Attribute) -> Result<Vec<u8>, Error> {
    let count = attr.count();
    match attr.value() {
        // RP66 V1's "absent value" convention: no characteristic bits set
        // at all, not even the `001` attribute-role bits -- a bare `0x00`.
        None => Ok(vec![0x00]),
        Some(value) => {
            let code = attr.representation_code().ok_or_else(|| {
                Error::malformed(
                    attr.label().to_string(),
                    "attribute has a value but no representation code",
                )
            })?;
            let write_count = count != 1;
            let descriptor = ATTRIBUTE_ROLE
                | (if write_count { 0b01000 } else { 0 })
                | 0b00001; // value present

            let mut out = vec![descriptor];
            if write_count {
                out.extend(encode_uvari(count as u32)?);
            }
            out.extend(encode_elements(value, code)?);
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlis_core::value::PrimitiveValue;
    use dlis_core::Cardinality;
    use smallvec::SmallVec;

    #[test]
    fn template_mode_writes_label_code_and_units() {
        let mut attr = Attribute::new("LONG-NAME", Cardinality::Single);
        attr.set_value(PrimitiveValue::single_text("Gamma Ray"), ReprCode::Ascii)
            .unwrap();
        attr.set_units("gAPI");
        let encoded = encode_template(&attr).unwrap();
        assert_eq!(encoded[0], ATTRIBUTE_ROLE | 0b10110);
    }

    #[test]
    fn body_mode_omits_count_when_single() {
        let mut attr = Attribute::new("DIMENSION", Cardinality::Multi);
        attr.set_value(
            PrimitiveValue::UVari(SmallVec::from_slice(&[10])),
            ReprCode::UVari,
        )
        .unwrap();
        let encoded = encode_body(&attr).unwrap();
        assert_eq!(encoded[0], ATTRIBUTE_ROLE | 0b00001);
    }

    #[test]
    fn body_mode_writes_count_when_multivalued() {
        let mut attr = Attribute::new("AXIS", Cardinality::Multi);
        attr.set_value(
            PrimitiveValue::F64(SmallVec::from_slice(&[1.0, 2.0])),
            ReprCode::FDoubl,
        )
        .unwrap();
        let encoded = encode_body(&attr).unwrap();
        assert_eq!(encoded[0], ATTRIBUTE_ROLE | 0b01001);
        assert_eq!(encoded[1], 2);
    }

    #[test]
    fn body_mode_uvari_encodes_counts_past_ushort_range() {
        let mut attr = Attribute::new("VALUES", Cardinality::Multi);
        let samples: Vec<f64> = (0..200).map(|i| i as f64).collect();
        attr.set_value(
            PrimitiveValue::F64(SmallVec::from_slice(&samples)),
            ReprCode::FDoubl,
        )
        .unwrap();
        let encoded = encode_body(&attr).unwrap();
        assert_eq!(encoded[0], ATTRIBUTE_ROLE | 0b01001);
        // 200 >= 128, so the count is a 2-byte UVARI (top bits `10`).
        assert_eq!(encoded[1] & 0b1100_0000, 0b1000_0000);
        let (count, consumed) = crate::basic::decode_uvari(&encoded[1..]).unwrap();
        assert_eq!(count, 200);
        assert_eq!(
            encoded[1 + consumed..],
            encode_elements(
                &PrimitiveValue::F64(SmallVec::from_slice(&samples)),
                ReprCode::FDoubl
            )
            .unwrap()[..]
        );
    }

    #[test]
    fn absent_value_writes_a_literal_zero_byte() {
        let attr = Attribute::new("LONG-NAME", Cardinality::Single);
        let encoded = encode_body(&attr).unwrap();
        assert_eq!(encoded, vec![0x00]);
    }
}
