//! Labeled attribute values attached to EFLR items.

use crate::error::Error;
use crate::repr_code::ReprCode;
use crate::value::PrimitiveValue;

/// Whether an attribute is expected to hold exactly one value or may hold
/// several.
///
/// This is schema metadata, not a property of any particular value: it
/// drives how a template-mode characteristic is written and lets the
/// dictionary crate validate an item's attributes without inspecting their
/// current contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Exactly one value is expected (e.g. `LONG-NAME`, `DIMENSION`).
    Single,
    /// Zero or more values are expected (e.g. `AXIS`, `MINIMUM-VALUE`).
    Multi,
}

/// One named, typed value slot on an EFLR item.
///
/// Mirrors the Attribute component of RP66 V1 Appendix A: a label, an
/// optional count, an optional representation code, an optional units
/// string, and an optional value (or several, for a multivalued
/// attribute). Any of the four characteristics plus the value may be
/// absent, in which case only the component-descriptor byte itself is
/// written -- this type represents that by leaving the corresponding
/// `Option` as `None`, never by a sentinel value.
///
/// The representation code is write-once: RP66 requires all values sharing
/// one attribute to share one representation, and letting the first
/// assignment pick it (directly, or implicitly from the first value set)
/// and rejecting a later, different one catches schema bugs at the point
/// they are introduced rather than silently re-tagging already-written
/// bytes.
#[derive(Debug, Clone)]
pub struct Attribute {
    label: String,
    cardinality: Cardinality,
    representation_code: Option<ReprCode>,
    units: Option<String>,
    value: Option<PrimitiveValue>,
}

impl Attribute {
    /// Create a new, empty attribute with the given label and cardinality.
    ///
    /// The label is upper-cased and has internal whitespace replaced with
    /// `-`, matching how RP66 attribute labels such as `LONG-NAME` or
    /// `REPRESENTATION-CODE` are always written.
    pub fn new(label: impl AsRef<str>, cardinality: Cardinality) -> Self {
        let label = label.as_ref().trim().to_uppercase().replace(' ', "-");
        Attribute {
            label,
            cardinality,
            representation_code: None,
            units: None,
            value: None,
        }
    }

    /// The attribute's label, e.g. `"LONG-NAME"`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether this attribute may hold more than one value.
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// The attribute's representation code, if one has been fixed yet
    /// (either explicitly or by the first call to [`Attribute::set_value`]).
    pub fn representation_code(&self) -> Option<ReprCode> {
        self.representation_code
    }

    /// The attribute's units-of-measure string, if any.
    pub fn units(&self) -> Option<&str> {
        self.units.as_deref()
    }

    /// The attribute's current value, if any.
    pub fn value(&self) -> Option<&PrimitiveValue> {
        self.value.as_ref()
    }

    /// The number of elements in the current value, or `0` if unset.
    pub fn count(&self) -> usize {
        self.value.as_ref().map_or(0, PrimitiveValue::len)
    }

    /// Fix the attribute's representation code.
    ///
    /// Returns [`Error::ConfigConflict`] if a different code was already
    /// fixed, either explicitly or implicitly via [`Attribute::set_value`].
    /// Setting the same code twice is a no-op, not an error.
    pub fn set_representation_code(&mut self, code: ReprCode) -> Result<(), Error> {
        match self.representation_code {
            Some(existing) if existing != code => Err(Error::config_conflict(
                "<item>",
                &self.label,
                format!(
                    "representation code already fixed as {existing}, cannot change to {code}"
                ),
            )),
            _ => {
                self.representation_code = Some(code);
                Ok(())
            }
        }
    }

    /// Set the attribute's units-of-measure string.
    ///
    /// RP66 does not constrain units to a closed enumeration, but schemas
    /// built on top of this type are expected to warn (via `tracing`, not
    /// by rejecting the call) when a non-standard unit is used.
    pub fn set_units(&mut self, units: impl Into<String>) {
        self.units = Some(units.into());
    }

    /// Clear the attribute's units-of-measure string.
    pub fn clear_units(&mut self) {
        self.units = None;
    }

    /// Set the attribute's value, fixing its representation code to
    /// `code` if none has been fixed yet.
    ///
    /// Returns [`Error::ConfigConflict`] if `code` conflicts with an
    /// already-fixed representation code, and [`Error::SchemaViolation`]
    /// if `value` holds more than one element while
    /// [`Cardinality::Single`] was declared.
    pub fn set_value(&mut self, value: PrimitiveValue, code: ReprCode) -> Result<(), Error> {
        if self.cardinality == Cardinality::Single && value.len() > 1 {
            return Err(Error::schema_violation(
                "<item>",
                &self.label,
                format!(
                    "single-valued attribute cannot hold {} values",
                    value.len()
                ),
            ));
        }
        self.set_representation_code(code)?;
        self.value = Some(value);
        Ok(())
    }

    /// Clear the attribute's value, leaving its label, cardinality,
    /// representation code, and units untouched.
    pub fn clear_value(&mut self) {
        self.value = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::PrimitiveValue;
    use smallvec::SmallVec;

    #[test]
    fn normalizes_label_casing_and_whitespace() {
        let attr = Attribute::new("long name", Cardinality::Single);
        assert_eq!(attr.label(), "LONG-NAME");
    }

    #[test]
    fn fixes_representation_code_on_first_value() {
        let mut attr = Attribute::new("DIMENSION", Cardinality::Multi);
        attr.set_value(
            PrimitiveValue::U32(SmallVec::from_slice(&[10])),
            ReprCode::ULong,
        )
        .unwrap();
        assert_eq!(attr.representation_code(), Some(ReprCode::ULong));
    }

    #[test]
    fn rejects_conflicting_representation_code() {
        let mut attr = Attribute::new("DIMENSION", Cardinality::Multi);
        attr.set_representation_code(ReprCode::ULong).unwrap();
        let err = attr.set_representation_code(ReprCode::UShort);
        assert!(err.is_err());
    }

    #[test]
    fn rejects_multiple_values_on_single_cardinality() {
        let mut attr = Attribute::new("LONG-NAME", Cardinality::Single);
        let value = PrimitiveValue::Text(SmallVec::from_slice(&[
            "a".to_string(),
            "b".to_string(),
        ]));
        assert!(attr.set_value(value, ReprCode::Ident).is_err());
    }

    #[test]
    fn count_reflects_current_value_length() {
        let mut attr = Attribute::new("AXIS", Cardinality::Multi);
        assert_eq!(attr.count(), 0);
        attr.set_value(
            PrimitiveValue::F64(SmallVec::from_slice(&[1.0, 2.0, 3.0])),
            ReprCode::FDoubl,
        )
        .unwrap();
        assert_eq!(attr.count(), 3);
    }
}
