//! Logical Record Segment header: the 4-byte header prefixing every
//! fragment of a Logical Record inside a Visible Record.

use crate::basic::{decode_unorm, decode_ushort, encode_unorm, encode_ushort};
use crate::error::Error;

/// The minimum total segment size (4-byte header + 12-byte body), below
/// which a fragment may never be started.
pub const MIN_SEGMENT_LEN: usize = 16;

/// Attribute bits of a Logical Record Segment header, MSB first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SegmentAttributes {
    pub is_eflr: bool,
    pub has_predecessor: bool,
    pub has_successor: bool,
    pub is_encrypted: bool,
    pub has_encryption_packet: bool,
    pub has_checksum: bool,
    pub has_trailing_length: bool,
    pub has_padding: bool,
}

impl SegmentAttributes {
    fn to_byte(self) -> u8 {
        (self.is_eflr as u8) << 7
            | (self.has_predecessor as u8) << 6
            | (self.has_successor as u8) << 5
            | (self.is_encrypted as u8) << 4
            | (self.has_encryption_packet as u8) << 3
            | (self.has_checksum as u8) << 2
            | (self.has_trailing_length as u8) << 1
            | (self.has_padding as u8)
    }

    fn from_byte(byte: u8) -> Self {
        SegmentAttributes {
            is_eflr: byte & 0x80 != 0,
            has_predecessor: byte & 0x40 != 0,
            has_successor: byte & 0x20 != 0,
            is_encrypted: byte & 0x10 != 0,
            has_encryption_packet: byte & 0x08 != 0,
            has_checksum: byte & 0x04 != 0,
            has_trailing_length: byte & 0x02 != 0,
            has_padding: byte & 0x01 != 0,
        }
    }
}

/// Encode one Logical Record Segment: header followed by `body`, with a
/// single `0x01` padding byte appended if `body`'s length is odd (keeping
/// `segment_length` even, as RP66 requires).
///
/// `logical_record_type` is the per-type EFLR code (`FHLR`=0, ...,
/// `STATIC`=5, ...) or the per-type IFLR code (`FrameData`=0,
/// `NoFormat`=1); callers pick the right code table.
pub fn encode_segment(
    mut attributes: SegmentAttributes,
    logical_record_type: u8,
    body: &[u8],
) -> Result<Vec<u8>, Error> {
    let needs_padding = body.len() % 2 == 1;
    attributes.has_padding = needs_padding;

    let segment_length = 4 + body.len() + needs_padding as usize;
    if segment_length > u16::MAX as usize {
        return Err(Error::wire_overflow(
            "logical record segment",
            format!("segment length {segment_length} exceeds UNORM range"),
        ));
    }

    let mut out = Vec::with_capacity(segment_length);
    out.extend(encode_unorm(segment_length as u16));
    out.extend(encode_ushort(attributes.to_byte()));
    out.extend(encode_ushort(logical_record_type));
    out.extend_from_slice(body);
    if needs_padding {
        out.push(0x01);
    }
    Ok(out)
}

/// A decoded Logical Record Segment header plus its body slice.
#[derive(Debug, Clone, Copy)]
pub struct DecodedSegment<'a> {
    pub segment_length: u16,
    pub attributes: SegmentAttributes,
    pub logical_record_type: u8,
    pub body: &'a [u8],
}

/// Decode one Logical Record Segment from the start of `bytes`.
pub fn decode_segment(bytes: &[u8]) -> Result<DecodedSegment<'_>, Error> {
    let (segment_length, _) = decode_unorm(bytes)?;
    let (attributes_byte, _) = decode_ushort(&bytes[2..])?;
    let attributes = SegmentAttributes::from_byte(attributes_byte);
    let (logical_record_type, _) = decode_ushort(&bytes[3..])?;

    let total = segment_length as usize;
    let padded_body_len = total.saturating_sub(4);
    let body_len = padded_body_len - attributes.has_padding as usize;
    let body = bytes
        .get(4..4 + body_len)
        .ok_or_else(|| Error::malformed("logical record segment", "truncated body"))?;

    Ok(DecodedSegment {
        segment_length: segment_length as u16,
        attributes,
        logical_record_type,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_odd_length_bodies_to_keep_segment_length_even() {
        let attrs = SegmentAttributes {
            is_eflr: true,
            ..Default::default()
        };
        let encoded = encode_segment(attrs, 3, &[1, 2, 3]).unwrap();
        assert_eq!(encoded.len(), 8); // 4 header + 3 body + 1 pad
        assert_eq!(encoded.len() % 2, 0);
    }

    #[test]
    fn round_trips_header_and_body() {
        let attrs = SegmentAttributes {
            is_eflr: false,
            has_successor: true,
            ..Default::default()
        };
        let encoded = encode_segment(attrs, 0, &[9, 9, 9, 9]).unwrap();
        let decoded = decode_segment(&encoded).unwrap();
        assert_eq!(decoded.attributes, attrs);
        assert_eq!(decoded.logical_record_type, 0);
        assert_eq!(decoded.body, &[9, 9, 9, 9]);
    }
}
