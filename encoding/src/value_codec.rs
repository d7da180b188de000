//! Bridges [`dlis_core::value::PrimitiveValue`] (the typed, in-memory
//! value) and the bare-bytes codecs in [`crate::basic`], dispatching on a
//! [`ReprCode`].
//!
//! A handful of representation codes (`FSHORT`, `FSING1`, `FSING2`,
//! `ISINGL`, `VSINGL`, `FDOUB1`, `FDOUB2`, `ATTREF`) are part of RP66 V1
//! Appendix B but are not produced by any schema in [`dlis_dictionary`] --
//! no Channel, Parameter, or Calibration attribute in this writer ever
//! needs a legacy low-precision float or an attribute-level reference.
//! [`encode_elements`]/[`decode_elements`] recognize them (so
//! [`ReprCode::from_code`] round-trips for every wire value) but return
//! [`Error::Malformed`] if actually asked to encode or decode one, rather
//! than emitting a bit-for-bit reproduction of a format this codebase
//! never reads.

use dlis_core::repr_code::ReprCode;
use dlis_core::value::PrimitiveValue;
use smallvec::SmallVec;

use crate::basic::*;
use crate::error::Error;

fn unsupported(code: ReprCode) -> Error {
    Error::malformed(
        code.to_string(),
        "not produced by any schema in this writer; encoding is unimplemented",
    )
}

/// Encode every element of `value` back-to-back, using `code` for each.
pub fn encode_elements(value: &PrimitiveValue, code: ReprCode) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    match (value, code) {
        (PrimitiveValue::F32(v), ReprCode::FSingl) => {
            for x in v {
                out.extend(encode_fsingl(*x));
            }
        }
        (PrimitiveValue::F64(v), ReprCode::FDoubl) => {
            for x in v {
                out.extend(encode_fdoubl(*x));
            }
        }
        (PrimitiveValue::C32(v), ReprCode::CSingl) => {
            for (re, im) in v {
                out.extend(encode_fsingl(*re));
                out.extend(encode_fsingl(*im));
            }
        }
        (PrimitiveValue::C64(v), ReprCode::CDoubl) => {
            for (re, im) in v {
                out.extend(encode_fdoubl(*re));
                out.extend(encode_fdoubl(*im));
            }
        }
        (PrimitiveValue::I8(v), ReprCode::SShort) => {
            for x in v {
                out.extend(encode_sshort(*x));
            }
        }
        (PrimitiveValue::I16(v), ReprCode::SNorm) => {
            for x in v {
                out.extend(encode_snorm(*x));
            }
        }
        (PrimitiveValue::I32(v), ReprCode::SLong) => {
            for x in v {
                out.extend(encode_slong(*x));
            }
        }
        (PrimitiveValue::U8(v), ReprCode::UShort) => {
            for x in v {
                out.extend(encode_ushort(*x));
            }
        }
        (PrimitiveValue::U16(v), ReprCode::UNorm) => {
            for x in v {
                out.extend(encode_unorm(*x));
            }
        }
        (PrimitiveValue::U32(v), ReprCode::ULong) => {
            for x in v {
                out.extend(encode_ulong(*x));
            }
        }
        (PrimitiveValue::UVari(v), ReprCode::UVari) => {
            for x in v {
                out.extend(encode_uvari(*x)?);
            }
        }
        (PrimitiveValue::Origin(v), ReprCode::Origin) => {
            for x in v {
                out.extend(encode_uvari(*x)?);
            }
        }
        (PrimitiveValue::Text(v), ReprCode::Ident) => {
            for x in v {
                out.extend(encode_ident(x)?);
            }
        }
        (PrimitiveValue::Text(v), ReprCode::Ascii) => {
            for x in v {
                out.extend(encode_ascii(x)?);
            }
        }
        (PrimitiveValue::Text(v), ReprCode::Units) => {
            for x in v {
                out.extend(encode_units(x)?);
            }
        }
        (PrimitiveValue::DTime(v), ReprCode::DTime) => {
            for x in v {
                out.extend(encode_dtime(x)?);
            }
        }
        (PrimitiveValue::ObName(v), ReprCode::ObName) => {
            for x in v {
                out.extend(encode_obname(x)?);
            }
        }
        (PrimitiveValue::ObjRef(v), ReprCode::ObjRef) => {
            for x in v {
                out.extend(encode_objref(x)?);
            }
        }
        (PrimitiveValue::Status(v), ReprCode::Status) => {
            for x in v {
                out.extend(encode_status(*x));
            }
        }
        (
            _,
            ReprCode::FShort
            | ReprCode::FSing1
            | ReprCode::FSing2
            | ReprCode::ISingl
            | ReprCode::VSingl
            | ReprCode::FDoub1
            | ReprCode::FDoub2
            | ReprCode::AttRef,
        ) => return Err(unsupported(code)),
        (value, code) => {
            return Err(Error::malformed(
                code.to_string(),
                format!("value family does not match representation code (got {value:?})"),
            ))
        }
    }
    Ok(out)
}

/// The number of bytes one element of `code` occupies on the wire, if
/// known without inspecting the bytes themselves (`None` for variable-
/// length codes, where the caller must decode one element to discover its
/// width).
pub fn element_fixed_width(code: ReprCode) -> Option<usize> {
    code.fixed_width()
}

/// Decode exactly `count` elements of `code` from the start of `bytes`,
/// returning the assembled value and the number of bytes consumed.
pub fn decode_elements(
    bytes: &[u8],
    code: ReprCode,
    count: usize,
) -> Result<(PrimitiveValue, usize), Error> {
    let mut offset = 0;
    macro_rules! collect {
        ($decode:expr, $variant:ident) => {{
            let mut v = SmallVec::new();
            for _ in 0..count {
                let (x, width) = $decode(&bytes[offset..])?;
                v.push(x);
                offset += width;
            }
            PrimitiveValue::$variant(v)
        }};
    }
    let value = match code {
        ReprCode::FSingl => collect!(decode_fsingl, F32),
        ReprCode::FDoubl => collect!(decode_fdoubl, F64),
        ReprCode::SShort => collect!(decode_sshort, I8),
        ReprCode::SNorm => collect!(decode_snorm, I16),
        ReprCode::SLong => collect!(decode_slong, I32),
        ReprCode::UShort => collect!(decode_ushort, U8),
        ReprCode::UNorm => collect!(decode_unorm, U16),
        ReprCode::ULong => collect!(decode_ulong, U32),
        ReprCode::UVari => collect!(decode_uvari, UVari),
        ReprCode::Origin => collect!(decode_uvari, Origin),
        ReprCode::Ident => collect!(decode_ident, Text),
        ReprCode::Ascii => collect!(decode_ascii, Text),
        ReprCode::Units => collect!(decode_units, Text),
        ReprCode::DTime => collect!(decode_dtime, DTime),
        ReprCode::ObName => collect!(decode_obname, ObName),
        ReprCode::ObjRef => collect!(decode_objref, ObjRef),
        ReprCode::Status => collect!(decode_status, Status),
        ReprCode::CSingl => {
            let mut v = SmallVec::new();
            for _ in 0..count {
                let (re, w1) = decode_fsingl(&bytes[offset..])?;
                let (im, w2) = decode_fsingl(&bytes[offset + w1..])?;
                v.push((re, im));
                offset += w1 + w2;
            }
            PrimitiveValue::C32(v)
        }
        ReprCode::CDoubl => {
            let mut v = SmallVec::new();
            for _ in 0..count {
                let (re, w1) = decode_fdoubl(&bytes[offset..])?;
                let (im, w2) = decode_fdoubl(&bytes[offset + w1..])?;
                v.push((re, im));
                offset += w1 + w2;
            }
            PrimitiveValue::C64(v)
        }
        other => return Err(unsupported(other)),
    };
    Ok((value, offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_f64_sequence() {
        let value = PrimitiveValue::F64(SmallVec::from_slice(&[1.0, 2.5, -3.0]));
        let encoded = encode_elements(&value, ReprCode::FDoubl).unwrap();
        let (decoded, width) = decode_elements(&encoded, ReprCode::FDoubl, 3).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(width, encoded.len());
    }

    #[test]
    fn round_trips_uvari_sequence_across_width_tiers() {
        let value = PrimitiveValue::UVari(SmallVec::from_slice(&[1, 200, 20_000]));
        let encoded = encode_elements(&value, ReprCode::UVari).unwrap();
        let (decoded, width) = decode_elements(&encoded, ReprCode::UVari, 3).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(width, encoded.len());
    }

    #[test]
    fn rejects_legacy_low_precision_codes() {
        let value = PrimitiveValue::F32(SmallVec::from_slice(&[1.0]));
        assert!(encode_elements(&value, ReprCode::FShort).is_err());
    }
}
