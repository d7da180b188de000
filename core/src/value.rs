//! The value types an [`crate::Attribute`] can hold.

use smallvec::SmallVec;
use std::fmt;

use crate::obname::{ObName, ObjRef};

/// An RP66 `DTIME`: a timestamp with one-millisecond resolution and an
/// explicit time-zone code, as carried by frame index channels and by the
/// `CREATION-TIME` attribute of `FILE-HEADER`/`ORIGIN`.
///
/// `chrono::NaiveDateTime` already gives millisecond resolution, matching
/// `DTIME`'s trailing `UNORM` milliseconds field exactly; the time-zone
/// code (local/DST/GMT) that `DTIME` packs into the month byte's high
/// nibble is tracked alongside it since `NaiveDateTime` carries no zone
/// information of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime {
    pub naive: chrono::NaiveDateTime,
    pub time_zone: TimeZoneCode,
}

/// The time-zone code packed into a `DTIME`'s month byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TimeZoneCode {
    Local = 0,
    DaylightSavings = 1,
    Gmt = 2,
}

impl DateTime {
    /// Build a `DateTime` from calendar fields, as used throughout the
    /// test suite and by callers constructing index channels by hand.
    pub fn from_ymd_hms_milli(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        milli: u32,
        time_zone: TimeZoneCode,
    ) -> Option<Self> {
        use chrono::NaiveDate;
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let naive = date.and_hms_milli_opt(hour, minute, second, milli)?;
        Some(DateTime { naive, time_zone })
    }

    #[cfg(feature = "now")]
    /// The current local time, used as the default `CREATION-TIME` for a
    /// freshly constructed `Origin` or `FileHeader`.
    pub fn now() -> Self {
        DateTime {
            naive: chrono::Local::now().naive_local(),
            time_zone: TimeZoneCode::Local,
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.naive.format("%Y-%m-%dT%H:%M:%S%.3f"))
    }
}

/// The inline capacity used for every multivalued family below. Most
/// channels and attributes in practice hold a single value or a short
/// fixed-size tuple (e.g. a 3-component `AXIS` coordinate); anything larger
/// spills to the heap transparently.
const INLINE: usize = 2;

/// A DLIS attribute or frame-channel value.
///
/// Every variant is a vector, never a bare scalar: a single value is simply
/// a one-element vector. This mirrors how RP66 itself treats values -- an
/// attribute's `COUNT` characteristic is always present, `1` being just the
/// common case -- and it lets multivalued attributes (e.g. a Channel's
/// `AXIS` or `MINIMUM-VALUE` list, or an `AXIS` item's `COORDINATES`) share
/// exactly the same representation and the same encoder path as
/// single-valued ones.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PrimitiveValue {
    /// `FSHORT`/`FSINGL`/`FSING1`/`VSINGL` family: single-precision floats.
    F32(SmallVec<[f32; INLINE]>),
    /// `FDOUBL`/`FDOUB1` family: double-precision floats.
    F64(SmallVec<[f64; INLINE]>),
    /// `CSINGL`: single-precision complex numbers, stored as (real, imag).
    C32(SmallVec<[(f32, f32); INLINE]>),
    /// `CDOUBL`: double-precision complex numbers.
    C64(SmallVec<[(f64, f64); INLINE]>),
    /// `SSHORT`.
    I8(SmallVec<[i8; INLINE]>),
    /// `SNORM`.
    I16(SmallVec<[i16; INLINE]>),
    /// `SLONG`.
    I32(SmallVec<[i32; INLINE]>),
    /// `USHORT`.
    U8(SmallVec<[u8; INLINE]>),
    /// `UNORM`.
    U16(SmallVec<[u16; INLINE]>),
    /// `ULONG`.
    U32(SmallVec<[u32; INLINE]>),
    /// `UVARI`: an unsigned integer encoded in its most compact fixed form.
    UVari(SmallVec<[u32; INLINE]>),
    /// `IDENT`/`ASCII`/`UNITS`: text of one kind or another. These three
    /// codes differ only in their length prefix width, never in content,
    /// so callers pick the representation code, not the value variant.
    Text(SmallVec<[String; INLINE]>),
    /// `DTIME`.
    DTime(SmallVec<[DateTime; INLINE]>),
    /// `ORIGIN`: a bare origin reference, encoded as `UVARI`.
    Origin(SmallVec<[u32; INLINE]>),
    /// `OBNAME`.
    ObName(SmallVec<[ObName; INLINE]>),
    /// `OBJREF`.
    ObjRef(SmallVec<[ObjRef; INLINE]>),
    /// `STATUS`: a boolean flag stored as a 0/1 byte on the wire.
    Status(SmallVec<[bool; INLINE]>),
}

impl PrimitiveValue {
    /// The number of elements held -- the value that becomes an
    /// attribute's `COUNT` characteristic.
    pub fn len(&self) -> usize {
        match self {
            PrimitiveValue::F32(v) => v.len(),
            PrimitiveValue::F64(v) => v.len(),
            PrimitiveValue::C32(v) => v.len(),
            PrimitiveValue::C64(v) => v.len(),
            PrimitiveValue::I8(v) => v.len(),
            PrimitiveValue::I16(v) => v.len(),
            PrimitiveValue::I32(v) => v.len(),
            PrimitiveValue::U8(v) => v.len(),
            PrimitiveValue::U16(v) => v.len(),
            PrimitiveValue::U32(v) => v.len(),
            PrimitiveValue::UVari(v) => v.len(),
            PrimitiveValue::Text(v) => v.len(),
            PrimitiveValue::DTime(v) => v.len(),
            PrimitiveValue::Origin(v) => v.len(),
            PrimitiveValue::ObName(v) => v.len(),
            PrimitiveValue::ObjRef(v) => v.len(),
            PrimitiveValue::Status(v) => v.len(),
        }
    }

    /// Whether this value holds zero elements (an absent attribute value).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Construct a single-element value from one `f64`, convenient for
    /// numeric attributes whose representation code is picked separately.
    pub fn single_f64(value: f64) -> Self {
        PrimitiveValue::F64(SmallVec::from_slice(&[value]))
    }

    /// Construct a single-element text value, convenient for `IDENT`/
    /// `ASCII`/`UNITS` attributes.
    pub fn single_text(value: impl Into<String>) -> Self {
        PrimitiveValue::Text(SmallVec::from_slice(&[value.into()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_value_has_length_one() {
        let v = PrimitiveValue::single_f64(1.5);
        assert_eq!(v.len(), 1);
        assert!(!v.is_empty());
    }

    #[test]
    fn empty_vector_reports_empty() {
        let v = PrimitiveValue::F32(SmallVec::new());
        assert!(v.is_empty());
    }

    #[test]
    fn datetime_formats_with_millisecond_precision() {
        let dt =
            DateTime::from_ymd_hms_milli(1987, 4, 19, 21, 20, 15, 620, TimeZoneCode::DaylightSavings)
                .unwrap();
        assert_eq!(dt.to_string(), "1987-04-19T21:20:15.620");
    }
}
