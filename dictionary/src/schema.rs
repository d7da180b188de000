//! The declarative shape of one EFLR record type: its `SET-TYPE`, its
//! per-type Logical Record Segment code, and the ordered list of
//! Attributes every item of that type carries.
//!
//! This is the "static table" the Design Notes call for in place of
//! runtime attribute reflection: [`EflrSchema::new_template`] builds a
//! fresh, empty [`Attribute`] list in schema order for both the shared
//! Set template and each item's body, so emitting either one is just
//! "walk the same table twice".

use dlis_core::{Attribute, Cardinality, ReprCode};

/// The per-type code written into a Logical Record Segment header for an
/// EFLR (RP66 V1 Appendix A, "LOGICAL-RECORD-TYPE"). Distinct from the
/// IFLR codes in `dlis_encoding::iflr::IflrKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EflrTypeCode {
    /// File Header.
    Fhlr = 0,
    /// Origin, Well-Reference-Point.
    Olr = 1,
    /// Axis.
    Axis = 2,
    /// Channel.
    Channl = 3,
    /// Frame, Path.
    Frame = 4,
    /// Zone, Parameter, Equipment, Tool, Computation, Process, Splice,
    /// Calibration and its sub-records, Group.
    Static = 5,
    /// Message, Comment.
    Script = 6,
    Update = 7,
    /// No-Format.
    Udi = 8,
    /// Long-Name.
    Lname = 9,
    Spec = 10,
    Dict = 11,
}

impl EflrTypeCode {
    /// The numeric wire value written into a Logical Record Segment header.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// One Attribute slot in a record type's template: its RP66 label, its
/// representation code (fixed by the schema, or left flexible for the
/// writer to infer from whatever value is set), and its cardinality.
#[derive(Debug, Clone, Copy)]
pub struct AttributeSpec {
    pub label: &'static str,
    pub representation_code: Option<ReprCode>,
    pub cardinality: Cardinality,
}

impl AttributeSpec {
    /// An attribute whose representation code is fixed by the schema.
    pub const fn new(
        label: &'static str,
        representation_code: ReprCode,
        cardinality: Cardinality,
    ) -> Self {
        AttributeSpec {
            label,
            representation_code: Some(representation_code),
            cardinality,
        }
    }

    /// An attribute whose representation code is left for the writer to
    /// infer from the runtime value it is given (e.g. `ZONE`'s `MAXIMUM`/
    /// `MINIMUM`, which are `DTIME` or `FDOUBL` depending on `DOMAIN`).
    pub const fn flexible(label: &'static str, cardinality: Cardinality) -> Self {
        AttributeSpec {
            label,
            representation_code: None,
            cardinality,
        }
    }
}

/// The full declarative shape of one EFLR record type.
#[derive(Debug)]
pub struct EflrSchema {
    pub set_type: &'static str,
    pub logical_record_type: EflrTypeCode,
    pub attributes: &'static [AttributeSpec],
}

impl EflrSchema {
    /// Build a fresh, valueless Attribute list in schema order. Used both
    /// as the Set's shared template (encoded in template mode) and as the
    /// starting point for one item's body (values filled in afterwards,
    /// encoded in body mode).
    pub fn new_template(&self) -> Vec<Attribute> {
        self.attributes
            .iter()
            .map(|spec| {
                let mut attr = Attribute::new(spec.label, spec.cardinality);
                if let Some(code) = spec.representation_code {
                    attr.set_representation_code(code)
                        .expect("a freshly constructed attribute never has a prior code");
                }
                attr
            })
            .collect()
    }

    /// The index of the attribute with the given RP66 label, if this
    /// schema declares one.
    pub fn attribute_index(&self, label: &str) -> Option<usize> {
        self.attributes
            .iter()
            .position(|spec| spec.label.eq_ignore_ascii_case(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_preserves_schema_order_and_codes() {
        static ATTRS: &[AttributeSpec] = &[
            AttributeSpec::new("AXIS-ID", ReprCode::Ident, Cardinality::Single),
            AttributeSpec::flexible("COORDINATES", Cardinality::Multi),
        ];
        static SCHEMA: EflrSchema = EflrSchema {
            set_type: "AXIS",
            logical_record_type: EflrTypeCode::Axis,
            attributes: ATTRS,
        };
        let template = SCHEMA.new_template();
        assert_eq!(template.len(), 2);
        assert_eq!(template[0].label(), "AXIS-ID");
        assert_eq!(template[0].representation_code(), Some(ReprCode::Ident));
        assert_eq!(template[1].representation_code(), None);
    }

    #[test]
    fn attribute_index_is_case_insensitive() {
        static ATTRS: &[AttributeSpec] =
            &[AttributeSpec::new("AXIS-ID", ReprCode::Ident, Cardinality::Single)];
        static SCHEMA: EflrSchema = EflrSchema {
            set_type: "AXIS",
            logical_record_type: EflrTypeCode::Axis,
            attributes: ATTRS,
        };
        assert_eq!(SCHEMA.attribute_index("axis-id"), Some(0));
        assert_eq!(SCHEMA.attribute_index("NOPE"), None);
    }
}
