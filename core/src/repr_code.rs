//! The 27 RP66 V1 Representation Codes.

use crate::error::Error;

/// A representation code, as defined by RP66 V1 Appendix B.
///
/// Every attribute value and every frame channel sample is tagged, directly
/// or by schema default, with one of these 27 codes. The numeric
/// discriminants below are the wire values written into a `USHORT` whenever
/// a representation code itself needs to be serialized (for example in an
/// attribute's characteristics, or in a Channel's `REPRESENTATION-CODE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ReprCode {
    /// Two-byte IBM/Elf short float.
    FShort = 1,
    /// Four-byte IEEE single-precision float.
    FSingl = 2,
    /// Validated four-byte single float (IBM format).
    FSing1 = 3,
    /// Two validated four-byte single floats.
    FSing2 = 4,
    /// Variable-length signed "ISINGL" float.
    ISingl = 5,
    /// VAX single-precision float.
    VSingl = 6,
    /// Eight-byte IEEE double-precision float.
    FDoubl = 7,
    /// Validated eight-byte double float.
    FDoub1 = 8,
    /// Two validated eight-byte double floats.
    FDoub2 = 9,
    /// Single-precision complex number (two `FSingl`).
    CSingl = 10,
    /// Double-precision complex number (two `FDoubl`).
    CDoubl = 11,
    /// One-byte signed integer.
    SShort = 12,
    /// Two-byte signed integer.
    SNorm = 13,
    /// Four-byte signed integer.
    SLong = 14,
    /// One-byte unsigned integer.
    UShort = 15,
    /// Two-byte unsigned integer.
    UNorm = 16,
    /// Four-byte unsigned integer.
    ULong = 17,
    /// Variable-length unsigned integer (1, 2, or 4 bytes).
    UVari = 18,
    /// Variable-length ASCII identifier, length-prefixed by a `USHORT`.
    Ident = 19,
    /// Variable-length ASCII text, length-prefixed by a `UVARI`.
    Ascii = 20,
    /// An eight-byte date/time stamp.
    DTime = 21,
    /// An `ORIGIN` reference (encoded as a `UVARI`).
    Origin = 22,
    /// An object name (`ORIGIN` + `COPY-NUMBER` + `IDENT`).
    ObName = 23,
    /// An object reference (`IDENT` + `OBNAME`).
    ObjRef = 24,
    /// An attribute reference (`IDENT` + `OBNAME` + `IDENT`).
    AttRef = 25,
    /// A one-byte status flag (0 or 1).
    Status = 26,
    /// Variable-length ASCII units-of-measure string.
    Units = 27,
}

impl ReprCode {
    /// The numeric wire value (1..=27) for this code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Recover a [`ReprCode`] from its numeric wire value.
    pub fn from_code(code: u8) -> Result<Self, Error> {
        use ReprCode::*;
        Ok(match code {
            1 => FShort,
            2 => FSingl,
            3 => FSing1,
            4 => FSing2,
            5 => ISingl,
            6 => VSingl,
            7 => FDoubl,
            8 => FDoub1,
            9 => FDoub2,
            10 => CSingl,
            11 => CDoubl,
            12 => SShort,
            13 => SNorm,
            14 => SLong,
            15 => UShort,
            16 => UNorm,
            17 => ULong,
            18 => UVari,
            19 => Ident,
            20 => Ascii,
            21 => DTime,
            22 => Origin,
            23 => ObName,
            24 => ObjRef,
            25 => AttRef,
            26 => Status,
            27 => Units,
            other => {
                return Err(Error::encoding_overflow(
                    "<representation code>",
                    "<representation code>",
                    format!("{other} is not a valid representation code (must be 1..=27)"),
                ))
            }
        })
    }

    /// The fixed on-wire width in bytes of one value of this code, or
    /// `None` if the width is variable (length-prefixed or itself composed
    /// of variable-length fields).
    pub const fn fixed_width(self) -> Option<usize> {
        use ReprCode::*;
        match self {
            FShort => Some(2),
            FSingl => Some(4),
            FSing1 => Some(4),
            FSing2 => Some(8),
            ISingl => None,
            VSingl => Some(4),
            FDoubl => Some(8),
            FDoub1 => Some(8),
            FDoub2 => Some(16),
            CSingl => Some(8),
            CDoubl => Some(16),
            SShort => Some(1),
            SNorm => Some(2),
            SLong => Some(4),
            UShort => Some(1),
            UNorm => Some(2),
            ULong => Some(4),
            UVari => None,
            Ident => None,
            Ascii => None,
            DTime => Some(8),
            Origin => None,
            ObName => None,
            ObjRef => None,
            AttRef => None,
            Status => Some(1),
            Units => None,
        }
    }
}

impl std::fmt::Display for ReprCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ReprCode::FShort => "FSHORT",
            ReprCode::FSingl => "FSINGL",
            ReprCode::FSing1 => "FSING1",
            ReprCode::FSing2 => "FSING2",
            ReprCode::ISingl => "ISINGL",
            ReprCode::VSingl => "VSINGL",
            ReprCode::FDoubl => "FDOUBL",
            ReprCode::FDoub1 => "FDOUB1",
            ReprCode::FDoub2 => "FDOUB2",
            ReprCode::CSingl => "CSINGL",
            ReprCode::CDoubl => "CDOUBL",
            ReprCode::SShort => "SSHORT",
            ReprCode::SNorm => "SNORM",
            ReprCode::SLong => "SLONG",
            ReprCode::UShort => "USHORT",
            ReprCode::UNorm => "UNORM",
            ReprCode::ULong => "ULONG",
            ReprCode::UVari => "UVARI",
            ReprCode::Ident => "IDENT",
            ReprCode::Ascii => "ASCII",
            ReprCode::DTime => "DTIME",
            ReprCode::Origin => "ORIGIN",
            ReprCode::ObName => "OBNAME",
            ReprCode::ObjRef => "OBJREF",
            ReprCode::AttRef => "ATTREF",
            ReprCode::Status => "STATUS",
            ReprCode::Units => "UNITS",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_code() {
        for code in 1..=27u8 {
            let rc = ReprCode::from_code(code).unwrap();
            assert_eq!(rc.code(), code);
        }
    }

    #[test]
    fn rejects_out_of_range_codes() {
        assert!(ReprCode::from_code(0).is_err());
        assert!(ReprCode::from_code(28).is_err());
    }

    #[test]
    fn fixed_widths_match_rp66_appendix_b() {
        assert_eq!(ReprCode::FShort.fixed_width(), Some(2));
        assert_eq!(ReprCode::FDoubl.fixed_width(), Some(8));
        assert_eq!(ReprCode::ULong.fixed_width(), Some(4));
        assert_eq!(ReprCode::UVari.fixed_width(), None);
        assert_eq!(ReprCode::Ident.fixed_width(), None);
    }

    #[test]
    fn displays_canonical_mnemonic() {
        assert_eq!(ReprCode::UVari.to_string(), "UVARI");
        assert_eq!(ReprCode::ObName.to_string(), "OBNAME");
    }
}
