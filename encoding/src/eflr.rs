//! Assembly of one Explicitly Formatted Logical Record body: SET
//! component, attribute TEMPLATE, and one OBJECT component per item.

use dlis_core::obname::ObName;
use dlis_core::Attribute;

use crate::attribute::{encode_body, encode_template};
use crate::basic::encode_ident;
use crate::error::Error;

/// SET component descriptor, unnamed set (`111` role + no name flag).
const SET_UNNAMED: u8 = 0xF0;
/// SET component descriptor, named set.
const SET_NAMED: u8 = 0xF8;
/// OBJECT component descriptor (`011` role).
const OBJECT_DESCRIPTOR: u8 = 0x70;

/// One object within an EFLR Set: its identity and its attribute values
/// in template order. A `None` at index `i` means attribute `i` is absent
/// for this item; `Some` attributes must carry a value (an attribute with
/// no value set still encodes correctly as the absent form, so callers
/// may also just pass the attribute through unconditionally).
#[derive(Debug, Clone)]
pub struct EflrItem {
    pub obname: ObName,
    pub attributes: Vec<Attribute>,
}

/// One EFLR Set: a shared template and the items that conform to it.
#[derive(Debug, Clone)]
pub struct EflrSet<'a> {
    pub set_type: &'a str,
    pub set_name: Option<&'a str>,
    pub template: &'a [Attribute],
    pub items: &'a [EflrItem],
}

/// Encode the full body of an EFLR: SET, TEMPLATE, then one OBJECT
/// component per item.
///
/// An empty set (no items) produces no bytes at all -- there is nothing
/// worth a SET and TEMPLATE with no OBJECTs to describe.
pub fn encode_eflr_body(set: &EflrSet<'_>) -> Result<Vec<u8>, Error> {
    if set.items.is_empty() {
        return Ok(Vec::new());
    }

    let mut out = Vec::new();

    out.push(if set.set_name.is_some() {
        SET_NAMED
    } else {
        SET_UNNAMED
    });
    out.extend(encode_ident(set.set_type)?);
    if let Some(name) = set.set_name {
        out.extend(encode_ident(name)?);
    }

    for attr in set.template {
        out.extend(encode_template(attr)?);
    }

    for item in set.items {
        out.push(OBJECT_DESCRIPTOR);
        out.extend(crate::basic::encode_obname(&item.obname)?);
        for attr in &item.attributes {
            out.extend(encode_body(attr)?);
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlis_core::repr_code::ReprCode;
    use dlis_core::value::PrimitiveValue;
    use dlis_core::Cardinality;

    fn long_name_template() -> Attribute {
        let mut attr = Attribute::new("LONG-NAME", Cardinality::Single);
        attr.set_representation_code(ReprCode::Ascii).unwrap();
        attr
    }

    #[test]
    fn unnamed_set_starts_with_0xf0() {
        let template = [long_name_template()];
        let items = [EflrItem {
            obname: ObName::new(1, 0, "GR"),
            attributes: vec![long_name_template()],
        }];
        let set = EflrSet {
            set_type: "CHANNEL",
            set_name: None,
            template: &template,
            items: &items,
        };
        let encoded = encode_eflr_body(&set).unwrap();
        assert_eq!(encoded[0], 0xF0);
    }

    #[test]
    fn named_set_starts_with_0xf8_and_includes_name() {
        let template = [long_name_template()];
        let items = [EflrItem {
            obname: ObName::new(1, 0, "CONF"),
            attributes: vec![long_name_template()],
        }];
        let set = EflrSet {
            set_type: "PARAMETER",
            set_name: Some("CONFIG"),
            template: &template,
            items: &items,
        };
        let encoded = encode_eflr_body(&set).unwrap();
        assert_eq!(encoded[0], 0xF8);
        assert!(encoded.windows(6).any(|w| w == b"CONFIG"));
    }

    #[test]
    fn empty_set_produces_no_bytes() {
        let template = [long_name_template()];
        let set = EflrSet {
            set_type: "CHANNEL",
            set_name: None,
            template: &template,
            items: &[],
        };
        assert!(encode_eflr_body(&set).unwrap().is_empty());
    }

    #[test]
    fn object_component_starts_with_0x70_and_carries_obname() {
        let mut body_attr = long_name_template();
        body_attr
            .set_value(PrimitiveValue::single_text("Gamma Ray"), ReprCode::Ascii)
            .unwrap();
        let template = [long_name_template()];
        let items = [EflrItem {
            obname: ObName::new(1, 0, "GR"),
            attributes: vec![body_attr],
        }];
        let set = EflrSet {
            set_type: "CHANNEL",
            set_name: None,
            template: &template,
            items: &items,
        };
        let encoded = encode_eflr_body(&set).unwrap();
        let object_start = encoded
            .windows(1)
            .position(|w| w[0] == OBJECT_DESCRIPTOR)
            .unwrap();
        assert!(object_start > 0);
    }
}
