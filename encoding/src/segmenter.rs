//! Packs a sequence of whole logical-record bodies into Visible Records,
//! splitting any record too large for one Visible Record into
//! predecessor/successor-linked segments.

use crate::basic::encode_unorm;
use crate::error::Error;
use crate::lrs::{encode_segment, SegmentAttributes, MIN_SEGMENT_LEN};

/// Visible Record format version, fixed by RP66 V1.
const VR_FORMAT_VERSION: [u8; 2] = [0xFF, 0x01];
/// Size of a Visible Record's own header (length + format version).
const VR_HEADER_LEN: usize = 4;
/// Size of a Logical Record Segment header.
const SEGMENT_HEADER_LEN: usize = 4;

/// Default maximum Visible Record length, per RP66 V1 and this writer's
/// default configuration.
pub const DEFAULT_MAX_VISIBLE_RECORD_LEN: u16 = 8192;

/// One whole, unsegmented logical record, ready to be packed (and
/// fragmented if necessary) into the Visible Record stream.
#[derive(Debug, Clone, Copy)]
pub struct LogicalRecord<'a> {
    pub is_eflr: bool,
    pub logical_record_type: u8,
    pub body: &'a [u8],
}

/// Pack `records` into a Visible Record byte stream (not including the
/// Storage Unit Label, which precedes this stream but is written
/// separately -- see [`crate::sul`]).
///
/// `max_visible_record_len` must be even and in `20..=16384`.
pub fn segment_records(
    records: &[LogicalRecord<'_>],
    max_visible_record_len: u16,
) -> Result<Vec<u8>, Error> {
    if max_visible_record_len % 2 != 0 || !(20..=16_384).contains(&max_visible_record_len) {
        return Err(Error::wire_overflow(
            "visible record length",
            format!("{max_visible_record_len} must be even and in 20..=16384"),
        ));
    }
    let max_vr_len = max_visible_record_len as usize;

    let mut out = Vec::new();
    let mut record_index = 0usize;
    // The unwritten tail of a record currently being split across VRs.
    let mut carry: Option<(bool, u8, &[u8], bool)> = None; // (is_eflr, type, remaining_body, has_predecessor)

    while record_index < records.len() || carry.is_some() {
        let vr_body_start = out.len();
        out.extend(&[0u8, 0u8]); // length placeholder, back-filled below
        out.extend(VR_FORMAT_VERSION);
        let mut remaining_budget = max_vr_len - VR_HEADER_LEN;

        loop {
            if let Some((is_eflr, lr_type, body, has_predecessor)) = carry.take() {
                let capacity = remaining_budget - SEGMENT_HEADER_LEN;
                if body.len() <= capacity {
                    let attrs = SegmentAttributes {
                        is_eflr,
                        has_predecessor,
                        has_successor: false,
                        ..Default::default()
                    };
                    let segment = encode_segment(attrs, lr_type, body)?;
                    remaining_budget -= segment.len();
                    out.extend(segment);
                } else {
                    let (head, tail) = body.split_at(capacity);
                    let attrs = SegmentAttributes {
                        is_eflr,
                        has_predecessor,
                        has_successor: true,
                        ..Default::default()
                    };
                    let segment = encode_segment(attrs, lr_type, head)?;
                    remaining_budget -= segment.len();
                    out.extend(segment);
                    carry = Some((is_eflr, lr_type, tail, true));
                    break;
                }
            } else if record_index < records.len() {
                let record = records[record_index];
                let whole_len = SEGMENT_HEADER_LEN + record.body.len() + (record.body.len() % 2);
                if whole_len <= remaining_budget {
                    let attrs = SegmentAttributes {
                        is_eflr: record.is_eflr,
                        ..Default::default()
                    };
                    let segment = encode_segment(attrs, record.logical_record_type, record.body)?;
                    remaining_budget -= segment.len();
                    out.extend(segment);
                    record_index += 1;
                } else if remaining_budget >= MIN_SEGMENT_LEN {
                    let capacity = remaining_budget - SEGMENT_HEADER_LEN;
                    let (head, tail) = record.body.split_at(capacity);
                    let attrs = SegmentAttributes {
                        is_eflr: record.is_eflr,
                        has_successor: true,
                        ..Default::default()
                    };
                    let segment = encode_segment(attrs, record.logical_record_type, head)?;
                    remaining_budget -= segment.len();
                    out.extend(segment);
                    carry = Some((record.is_eflr, record.logical_record_type, tail, false));
                    record_index += 1;
                    break;
                } else {
                    break;
                }
            } else {
                break;
            }
        }

        let vr_len = out.len() - vr_body_start;
        if vr_len > max_vr_len {
            return Err(Error::wire_overflow(
                "visible record",
                format!("{vr_len} exceeds the configured maximum of {max_vr_len}"),
            ));
        }
        let length_bytes = encode_unorm(vr_len as u16);
        out[vr_body_start..vr_body_start + 2].copy_from_slice(&length_bytes);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lrs::decode_segment;

    #[test]
    fn small_records_share_one_visible_record() {
        let records = [
            LogicalRecord {
                is_eflr: true,
                logical_record_type: 0,
                body: &[1, 2, 3, 4],
            },
            LogicalRecord {
                is_eflr: false,
                logical_record_type: 0,
                body: &[5, 6, 7, 8],
            },
        ];
        let out = segment_records(&records, 64).unwrap();
        // one VR header + two whole 8-byte segments (4 header + 4 body)
        assert_eq!(out.len(), 4 + 8 + 8);
    }

    #[test]
    fn oversized_record_is_fragmented_with_predecessor_successor_flags() {
        let body: Vec<u8> = (0..100u8).collect();
        let records = [LogicalRecord {
            is_eflr: true,
            logical_record_type: 3,
            body: &body,
        }];
        let out = segment_records(&records, 40).unwrap();

        // Walk every visible record, collecting segment fragments.
        let mut offset = 0;
        let mut reconstructed = Vec::new();
        let mut predecessor_count = 0;
        let mut successor_count = 0;
        while offset < out.len() {
            let vr_len = u16::from_be_bytes([out[offset], out[offset + 1]]) as usize;
            let vr_body = &out[offset + 4..offset + vr_len];
            let mut seg_offset = 0;
            while seg_offset < vr_body.len() {
                let seg = decode_segment(&vr_body[seg_offset..]).unwrap();
                if !seg.attributes.has_predecessor {
                    predecessor_count += 1;
                }
                if !seg.attributes.has_successor {
                    successor_count += 1;
                }
                reconstructed.extend_from_slice(seg.body);
                seg_offset += seg.segment_length as usize;
            }
            offset += vr_len;
        }

        assert_eq!(predecessor_count, 1);
        assert_eq!(successor_count, 1);
        assert_eq!(reconstructed, body);
    }

    #[test]
    fn every_visible_record_length_is_even_and_bounded() {
        let body: Vec<u8> = (0..250u8).map(|b| b).collect();
        let records = [LogicalRecord {
            is_eflr: true,
            logical_record_type: 4,
            body: &body,
        }];
        let out = segment_records(&records, 40).unwrap();
        let mut offset = 0;
        while offset < out.len() {
            let vr_len = u16::from_be_bytes([out[offset], out[offset + 1]]) as usize;
            assert_eq!(vr_len % 2, 0);
            assert!(vr_len <= 40);
            offset += vr_len;
        }
    }
}
