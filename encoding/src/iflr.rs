//! Indirectly Formatted Logical Record bodies: `FrameData` (dense,
//! per-Frame bulk samples) and `NoFormat` (opaque byte blobs referencing a
//! `NO-FORMAT` item).

use dlis_core::obname::ObName;
use dlis_core::repr_code::ReprCode;
use dlis_core::value::PrimitiveValue;

use crate::basic::{encode_obname, encode_uvari};
use crate::error::Error;
use crate::value_codec::encode_elements;

/// The per-type code distinguishing IFLR kinds in the Logical Record
/// Segment header (distinct from the EFLR per-type codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum IflrKind {
    /// `FDATA`: one row of Frame channel samples.
    FrameData = 0,
    /// `NOFORMAT`: an opaque, caller-supplied byte blob.
    NoFormat = 1,
}

/// One channel's samples for one FrameData row: its representation code
/// and the already-flattened values for its declared dimension product
/// (e.g. a `3`-dimensioned channel contributes 3 elements per row).
#[derive(Debug, Clone)]
pub struct ChannelSample<'a> {
    pub representation_code: ReprCode,
    pub values: &'a PrimitiveValue,
}

/// Encode one FrameData body: the owning Frame's OBNAME, the 1-based
/// frame number, then each channel's samples in template order.
pub fn encode_frame_data(
    frame: &ObName,
    frame_number: u32,
    channels: &[ChannelSample<'_>],
) -> Result<Vec<u8>, Error> {
    let mut out = encode_obname(frame)?;
    out.extend(encode_uvari(frame_number)?);
    for channel in channels {
        out.extend(encode_elements(channel.values, channel.representation_code)?);
    }
    Ok(out)
}

/// Encode one NoFormat body: the owning `NO-FORMAT` item's OBNAME
/// followed by the raw payload bytes, unprefixed.
pub fn encode_no_format_data(no_format_object: &ObName, data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut out = encode_obname(no_format_object)?;
    out.extend_from_slice(data);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::SmallVec;

    #[test]
    fn frame_data_lays_out_obname_then_number_then_samples() {
        let frame = ObName::new(1, 0, "MAIN");
        let depth = PrimitiveValue::F64(SmallVec::from_slice(&[100.5]));
        let gr = PrimitiveValue::F64(SmallVec::from_slice(&[65.2]));
        let channels = [
            ChannelSample {
                representation_code: ReprCode::FDoubl,
                values: &depth,
            },
            ChannelSample {
                representation_code: ReprCode::FDoubl,
                values: &gr,
            },
        ];
        let encoded = encode_frame_data(&frame, 1, &channels).unwrap();
        let expected_len = crate::basic::encode_obname(&frame).unwrap().len()
            + crate::basic::encode_uvari(1).unwrap().len()
            + 16;
        assert_eq!(encoded.len(), expected_len);
    }

    #[test]
    fn no_format_data_appends_raw_bytes_unprefixed() {
        let target = ObName::new(1, 0, "RAW-LOG");
        let encoded = encode_no_format_data(&target, b"hello world").unwrap();
        assert!(encoded.ends_with(b"hello world"));
    }
}
