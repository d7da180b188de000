//! Tracks the one `ORIGIN` reference a file is built under and hands out
//! uniquely named [`ObName`]s within it.
//!
//! Grounded in Design Notes' resolution of the OBNAME-identity question: a
//! file-scoped registry owned by [`crate::file::DlisFile`], not a process-
//! global dictionary keyed by Python `id()`. Copy numbers are always `0`
//! here -- nothing in this writer ever needs to disambiguate two items
//! sharing one (origin, set type, name).

use std::collections::HashSet;

use dlis_core::obname::ObName;

use crate::error::{Error, Result};

/// File-scoped allocator of [`ObName`]s, and the single source of truth for
/// the file's `ORIGIN` reference.
#[derive(Debug, Default)]
pub struct Registry {
    origin_reference: Option<u32>,
    known: HashSet<(&'static str, String)>,
}

impl Registry {
    /// Create an empty registry with no `ORIGIN` reference set yet.
    pub fn new() -> Self {
        Registry::default()
    }

    /// Fix the file's `ORIGIN` reference. May only be called once: every
    /// OBNAME in a DLIS file shares one origin, and a second `Origin` object
    /// is a logical error, not a new origin.
    pub fn set_origin_reference(&mut self, origin_reference: u32) -> Result<()> {
        if self.origin_reference.is_some() {
            return Err(dlis_core::Error::invariant_broken(
                "origin reference was already set for this file",
            )
            .into());
        }
        self.origin_reference = Some(origin_reference);
        Ok(())
    }

    /// The file's `ORIGIN` reference, if one has been set yet.
    pub fn origin_reference(&self) -> Option<u32> {
        self.origin_reference
    }

    /// Allocate an [`ObName`] for a new object of the given set type.
    ///
    /// Fails if no `ORIGIN` has been set yet (every OBNAME carries the
    /// file's origin reference), or if `(set_type, name)` was already
    /// allocated.
    pub fn allocate(&mut self, set_type: &'static str, name: impl Into<String>) -> Result<ObName> {
        let origin_reference = self.origin_reference.ok_or_else(|| {
            Error::from(dlis_core::Error::invariant_broken(
                "attempted to allocate an object before the file's ORIGIN was set",
            ))
        })?;
        let name = name.into();
        if !self.known.insert((set_type, name.clone())) {
            return Err(dlis_core::Error::schema_violation(
                set_type,
                "NAME",
                format!("an object named `{name}` already exists in this set"),
            )
            .into());
        }
        Ok(ObName::new(origin_reference, 0, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_before_origin_is_set_fails() {
        let mut registry = Registry::new();
        assert!(registry.allocate("CHANNEL", "GR").is_err());
    }

    #[test]
    fn origin_reference_cannot_be_set_twice() {
        let mut registry = Registry::new();
        registry.set_origin_reference(1).unwrap();
        assert!(registry.set_origin_reference(2).is_err());
    }

    #[test]
    fn duplicate_names_within_a_set_type_are_rejected() {
        let mut registry = Registry::new();
        registry.set_origin_reference(1).unwrap();
        registry.allocate("CHANNEL", "GR").unwrap();
        assert!(registry.allocate("CHANNEL", "GR").is_err());
    }

    #[test]
    fn same_name_is_fine_across_different_set_types() {
        let mut registry = Registry::new();
        registry.set_origin_reference(1).unwrap();
        registry.allocate("CHANNEL", "GR").unwrap();
        assert!(registry.allocate("PARAMETER", "GR").is_ok());
    }

    #[test]
    fn allocated_obname_carries_the_fixed_origin() {
        let mut registry = Registry::new();
        registry.set_origin_reference(7).unwrap();
        let name = registry.allocate("CHANNEL", "GR").unwrap();
        assert_eq!(name.origin_reference, 7);
        assert_eq!(name.copy_number, 0);
    }
}
