//! Object name and object reference identifiers.

use std::fmt;

/// Uniquely identifies an Explicitly Formatted Logical Record item within a
/// file: the `ORIGIN` of the file section that defined it, a `COPY-NUMBER`
/// distinguishing otherwise-identical items sharing one origin, and an
/// `IDENT` name unique within that (origin, copy-number, object-type)
/// triple.
///
/// Corresponds to the `OBNAME` representation code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObName {
    /// The `ORIGIN` (file set/session) that produced this object.
    pub origin_reference: u32,
    /// Distinguishes multiple items that would otherwise collide.
    pub copy_number: u8,
    /// The object's name, unique within (origin, copy_number, set type).
    pub name: String,
}

impl ObName {
    /// Construct a new object name.
    pub fn new(origin_reference: u32, copy_number: u8, name: impl Into<String>) -> Self {
        ObName {
            origin_reference,
            copy_number,
            name: name.into(),
        }
    }
}

impl fmt::Display for ObName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.origin_reference, self.copy_number, self.name
        )
    }
}

/// A reference to another object, qualified by the name of the Set (object
/// type) it belongs to, e.g. `CHANNEL` or `AXIS`.
///
/// Corresponds to the `OBJREF` representation code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjRef {
    /// The name of the Set (e.g. `"CHANNEL"`) the referenced object is a
    /// member of.
    pub obname_type: String,
    /// The referenced object's name.
    pub obname: ObName,
}

impl ObjRef {
    /// Construct a new object reference.
    pub fn new(obname_type: impl Into<String>, obname: ObName) -> Self {
        ObjRef {
            obname_type: obname_type.into(),
            obname,
        }
    }
}

impl fmt::Display for ObjRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.obname_type, self.obname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_obname_as_dash_separated_triple() {
        let name = ObName::new(12, 0, "DEPTH");
        assert_eq!(name.to_string(), "12-0-DEPTH");
    }

    #[test]
    fn displays_objref_with_set_type_prefix() {
        let reference = ObjRef::new("CHANNEL", ObName::new(12, 0, "DEPTH"));
        assert_eq!(reference.to_string(), "CHANNEL:12-0-DEPTH");
    }

    #[test]
    fn obnames_with_same_fields_are_equal() {
        let a = ObName::new(1, 0, "X");
        let b = ObName::new(1, 0, "X");
        assert_eq!(a, b);
    }
}
