//! Byte-level encode/decode functions for the fixed and variable-length
//! representation codes.
//!
//! Every function here operates on one bare value at a time -- no
//! component descriptors, no attribute shape -- so they can be reused
//! both by [`crate::attribute`] (attribute values) and by
//! [`crate::iflr`] (dense FrameData channel samples).

use dlis_core::obname::{ObName, ObjRef};
use dlis_core::value::{DateTime, TimeZoneCode};

use crate::error::Error;

/// Encode a `UVARI` per the three-tier length rule (1/2/4 bytes).
pub fn encode_uvari(value: u32) -> Result<Vec<u8>, Error> {
    if value < 128 {
        Ok(vec![value as u8])
    } else if value < 16_384 {
        let v = value | 0x8000;
        Ok(vec![(v >> 8) as u8, v as u8])
    } else if value < (1 << 30) {
        let v = value | 0xC000_0000;
        Ok(v.to_be_bytes().to_vec())
    } else {
        Err(Error::wire_overflow(
            "UVARI",
            format!("{value} is not representable (max is 2^30 - 1)"),
        ))
    }
}

/// Decode a `UVARI` from the start of `bytes`, returning the value and the
/// number of bytes consumed.
pub fn decode_uvari(bytes: &[u8]) -> Result<(u32, usize), Error> {
    let first = *bytes
        .first()
        .ok_or_else(|| Error::malformed("UVARI", "empty input"))?;
    match first >> 6 {
        0b00 | 0b01 => Ok(((first & 0x7F) as u32, 1)),
        0b10 => {
            if bytes.len() < 2 {
                return Err(Error::malformed("UVARI", "truncated 2-byte form"));
            }
            let v = (((bytes[0] & 0x3F) as u32) << 8) | bytes[1] as u32;
            Ok((v, 2))
        }
        _ => {
            if bytes.len() < 4 {
                return Err(Error::malformed("UVARI", "truncated 4-byte form"));
            }
            let v = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) & 0x3FFF_FFFF;
            Ok((v, 4))
        }
    }
}

/// Encode an `IDENT`: a `USHORT` length followed by that many ASCII bytes.
pub fn encode_ident(value: &str) -> Result<Vec<u8>, Error> {
    if value.len() > 255 {
        return Err(Error::wire_overflow(
            "IDENT",
            format!("{} bytes exceeds the 255-byte maximum", value.len()),
        ));
    }
    let mut out = Vec::with_capacity(1 + value.len());
    out.push(value.len() as u8);
    out.extend_from_slice(value.as_bytes());
    Ok(out)
}

/// Decode an `IDENT` from the start of `bytes`.
pub fn decode_ident(bytes: &[u8]) -> Result<(String, usize), Error> {
    let len = *bytes
        .first()
        .ok_or_else(|| Error::malformed("IDENT", "empty input"))? as usize;
    let text = bytes
        .get(1..1 + len)
        .ok_or_else(|| Error::malformed("IDENT", "truncated text"))?;
    let text = std::str::from_utf8(text)
        .map_err(|e| Error::malformed("IDENT", format!("not valid ASCII/UTF-8: {e}")))?
        .to_string();
    Ok((text, 1 + len))
}

/// Encode an `ASCII` value: a `UVARI` length followed by that many bytes.
pub fn encode_ascii(value: &str) -> Result<Vec<u8>, Error> {
    let mut out = encode_uvari(value.len() as u32)?;
    out.extend_from_slice(value.as_bytes());
    Ok(out)
}

/// Decode an `ASCII` value from the start of `bytes`.
pub fn decode_ascii(bytes: &[u8]) -> Result<(String, usize), Error> {
    let (len, len_width) = decode_uvari(bytes)?;
    let len = len as usize;
    let text = bytes
        .get(len_width..len_width + len)
        .ok_or_else(|| Error::malformed("ASCII", "truncated text"))?;
    let text = std::str::from_utf8(text)
        .map_err(|e| Error::malformed("ASCII", format!("not valid ASCII/UTF-8: {e}")))?
        .to_string();
    Ok((text, len_width + len))
}

const UNITS_CHARS: fn(char) -> bool = |c: char| {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '.' | '/' | '(' | ')' | ',')
};

/// Whether `value` matches the RP66 `UNITS` character set
/// (`[A-Za-z0-9 \-./(),]*`).
pub fn is_valid_units_charset(value: &str) -> bool {
    value.chars().all(UNITS_CHARS)
}

/// Encode a `UNITS` value. Layout is identical to `IDENT`; callers are
/// responsible for the charset check (see [`is_valid_units_charset`]) since
/// whether a violation is a warning or a hard error depends on the
/// writer's compatibility mode, which this crate has no knowledge of.
pub fn encode_units(value: &str) -> Result<Vec<u8>, Error> {
    encode_ident(value)
}

/// Decode a `UNITS` value. See [`encode_units`].
pub fn decode_units(bytes: &[u8]) -> Result<(String, usize), Error> {
    decode_ident(bytes)
}

/// Encode a `DTIME`: 8 bytes as laid out in RP66 V1 Appendix A.
pub fn encode_dtime(value: &DateTime) -> Result<[u8; 8], Error> {
    use chrono::Datelike;
    use chrono::Timelike;
    let year = value.naive.year();
    if !(1900..=2155).contains(&year) {
        return Err(Error::wire_overflow(
            "DTIME",
            format!("year {year} does not fit in (year - 1900) as a single byte"),
        ));
    }
    let milli = value.naive.nanosecond() / 1_000_000;
    let mut out = [0u8; 8];
    out[0] = (year - 1900) as u8;
    out[1] = ((value.time_zone as u8) << 4) | (value.naive.month() as u8 & 0x0F);
    out[2] = value.naive.day() as u8;
    out[3] = value.naive.hour() as u8;
    out[4] = value.naive.minute() as u8;
    out[5] = value.naive.second() as u8;
    out[6..8].copy_from_slice(&(milli as u16).to_be_bytes());
    Ok(out)
}

/// Decode a `DTIME` from the start of `bytes`.
pub fn decode_dtime(bytes: &[u8]) -> Result<(DateTime, usize), Error> {
    let b = bytes
        .get(0..8)
        .ok_or_else(|| Error::malformed("DTIME", "expected 8 bytes"))?;
    let year = 1900 + b[0] as i32;
    let time_zone = match b[1] >> 4 {
        0 => TimeZoneCode::Local,
        1 => TimeZoneCode::DaylightSavings,
        2 => TimeZoneCode::Gmt,
        other => {
            return Err(Error::malformed(
                "DTIME",
                format!("{other} is not a valid time-zone code"),
            ))
        }
    };
    let month = (b[1] & 0x0F) as u32;
    let day = b[2] as u32;
    let hour = b[3] as u32;
    let minute = b[4] as u32;
    let second = b[5] as u32;
    let milli = u16::from_be_bytes([b[6], b[7]]) as u32;
    let naive = DateTime::from_ymd_hms_milli(year, month, day, hour, minute, second, milli, time_zone)
        .ok_or_else(|| Error::malformed("DTIME", "calendar fields out of range"))?;
    Ok((naive, 8))
}

/// Encode an `OBNAME`: `UVARI` origin_reference, `USHORT` copy_number,
/// `IDENT` name.
pub fn encode_obname(value: &ObName) -> Result<Vec<u8>, Error> {
    let mut out = encode_uvari(value.origin_reference)?;
    out.push(value.copy_number);
    out.extend(encode_ident(&value.name)?);
    Ok(out)
}

/// Decode an `OBNAME` from the start of `bytes`.
pub fn decode_obname(bytes: &[u8]) -> Result<(ObName, usize), Error> {
    let (origin_reference, origin_width) = decode_uvari(bytes)?;
    let copy_number = *bytes
        .get(origin_width)
        .ok_or_else(|| Error::malformed("OBNAME", "truncated copy number"))?;
    let (name, name_width) = decode_ident(&bytes[origin_width + 1..])?;
    Ok((
        ObName::new(origin_reference, copy_number, name),
        origin_width + 1 + name_width,
    ))
}

/// Encode an `OBJREF`: `IDENT` set_type, then `OBNAME`.
pub fn encode_objref(value: &ObjRef) -> Result<Vec<u8>, Error> {
    let mut out = encode_ident(&value.obname_type)?;
    out.extend(encode_obname(&value.obname)?);
    Ok(out)
}

/// Decode an `OBJREF` from the start of `bytes`.
pub fn decode_objref(bytes: &[u8]) -> Result<(ObjRef, usize), Error> {
    let (obname_type, type_width) = decode_ident(bytes)?;
    let (obname, name_width) = decode_obname(&bytes[type_width..])?;
    Ok((ObjRef::new(obname_type, obname), type_width + name_width))
}

/// Encode a `STATUS` flag as a single `0`/`1` byte.
pub fn encode_status(value: bool) -> [u8; 1] {
    [value as u8]
}

/// Decode a `STATUS` byte, rejecting anything but `0` or `1`.
pub fn decode_status(bytes: &[u8]) -> Result<(bool, usize), Error> {
    match bytes.first() {
        Some(0) => Ok((false, 1)),
        Some(1) => Ok((true, 1)),
        Some(other) => Err(Error::malformed(
            "STATUS",
            format!("{other} is not 0 or 1"),
        )),
        None => Err(Error::malformed("STATUS", "empty input")),
    }
}

macro_rules! fixed_width_codec {
    ($encode:ident, $decode:ident, $ty:ty, $width:literal) => {
        #[doc = concat!("Encode a fixed-width `", stringify!($ty), "`-backed representation code.")]
        pub fn $encode(value: $ty) -> [u8; $width] {
            value.to_be_bytes()
        }

        #[doc = concat!("Decode a fixed-width `", stringify!($ty), "`-backed representation code.")]
        pub fn $decode(bytes: &[u8]) -> Result<($ty, usize), Error> {
            let arr: [u8; $width] = bytes
                .get(0..$width)
                .ok_or_else(|| {
                    Error::malformed(stringify!($ty), format!("expected {} bytes", $width))
                })?
                .try_into()
                .expect("slice of exact width");
            Ok((<$ty>::from_be_bytes(arr), $width))
        }
    };
}

fixed_width_codec!(encode_sshort, decode_sshort, i8, 1);
fixed_width_codec!(encode_snorm, decode_snorm, i16, 2);
fixed_width_codec!(encode_slong, decode_slong, i32, 4);
fixed_width_codec!(encode_ushort, decode_ushort, u8, 1);
fixed_width_codec!(encode_unorm, decode_unorm, u16, 2);
fixed_width_codec!(encode_ulong, decode_ulong, u32, 4);
fixed_width_codec!(encode_fsingl, decode_fsingl, f32, 4);
fixed_width_codec!(encode_fdoubl, decode_fdoubl, f64, 8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uvari_one_byte_boundary() {
        assert_eq!(encode_uvari(127).unwrap(), vec![0x7F]);
        assert_eq!(encode_uvari(128).unwrap(), vec![0x80, 0x80]);
    }

    #[test]
    fn uvari_two_byte_boundary() {
        assert_eq!(decode_uvari(&[0x80, 0x80]).unwrap(), (128, 2));
        assert_eq!(encode_uvari(16_383).unwrap(), vec![0xBF, 0xFF]);
        assert_eq!(encode_uvari(16_384).unwrap(), vec![0xC0, 0x00, 0x40, 0x00]);
    }

    #[test]
    fn uvari_four_byte_max() {
        let max = (1u32 << 30) - 1;
        let encoded = encode_uvari(max).unwrap();
        assert_eq!(encoded.len(), 4);
        assert_eq!(decode_uvari(&encoded).unwrap(), (max, 4));
        assert!(encode_uvari(1 << 30).is_err());
    }

    #[test]
    fn uvari_round_trips_every_tier() {
        for v in [0, 1, 42, 127, 128, 4000, 16_383, 16_384, 1_000_000] {
            let encoded = encode_uvari(v).unwrap();
            assert_eq!(decode_uvari(&encoded).unwrap(), (v, encoded.len()));
        }
    }

    #[test]
    fn ident_round_trip() {
        let encoded = encode_ident("DEPTH").unwrap();
        assert_eq!(encoded, vec![5, b'D', b'E', b'P', b'T', b'H']);
        assert_eq!(decode_ident(&encoded).unwrap(), ("DEPTH".to_string(), 6));
    }

    #[test]
    fn ascii_round_trip_with_uvari_length() {
        let encoded = encode_ascii("hello").unwrap();
        assert_eq!(decode_ascii(&encoded).unwrap(), ("hello".to_string(), encoded.len()));
    }

    #[test]
    fn units_charset_validation() {
        assert!(is_valid_units_charset("m/s"));
        assert!(is_valid_units_charset("in.lbf"));
        assert!(!is_valid_units_charset("m^3"));
    }

    #[test]
    fn dtime_matches_rp66_worked_example() {
        let dt = DateTime::from_ymd_hms_milli(1987, 4, 19, 21, 20, 15, 620, TimeZoneCode::DaylightSavings)
            .unwrap();
        let encoded = encode_dtime(&dt).unwrap();
        assert_eq!(
            encoded,
            [0x57, 0x14, 0x13, 0x15, 0x14, 0x0F, 0x02, 0x6C]
        );
        let (decoded, width) = decode_dtime(&encoded).unwrap();
        assert_eq!(width, 8);
        assert_eq!(decoded, dt);
    }

    #[test]
    fn obname_round_trip() {
        let name = ObName::new(12, 0, "DEPTH");
        let encoded = encode_obname(&name).unwrap();
        let (decoded, width) = decode_obname(&encoded).unwrap();
        assert_eq!(decoded, name);
        assert_eq!(width, encoded.len());
    }

    #[test]
    fn objref_round_trip() {
        let reference = ObjRef::new("CHANNEL", ObName::new(12, 0, "DEPTH"));
        let encoded = encode_objref(&reference).unwrap();
        let (decoded, width) = decode_objref(&encoded).unwrap();
        assert_eq!(decoded, reference);
        assert_eq!(width, encoded.len());
    }

    #[test]
    fn status_rejects_values_other_than_zero_or_one() {
        assert_eq!(decode_status(&[0]).unwrap(), (false, 1));
        assert_eq!(decode_status(&[1]).unwrap(), (true, 1));
        assert!(decode_status(&[2]).is_err());
    }

    #[test]
    fn fixed_width_round_trips() {
        assert_eq!(decode_slong(&encode_slong(-1234)).unwrap(), (-1234, 4));
        assert_eq!(decode_fdoubl(&encode_fdoubl(3.25)).unwrap(), (3.25, 8));
    }
}
