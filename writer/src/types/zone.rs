//! `ZONE`: a named interval of depth, time, or angle.

use dlis_core::value::{DateTime, PrimitiveValue};
use dlis_core::{Error as CoreError, ReprCode};
use dlis_dictionary::schemas::zone::SCHEMA;
use smallvec::SmallVec;

use crate::builder::EflrObjectBuilder;
use crate::error::{Error, Result};

/// The domains RP66 V1 allows for a Zone's `DOMAIN` attribute.
pub const ALLOWED_DOMAINS: &[&str] = &["BOREHOLE-DEPTH", "TIME", "VERTICAL-DEPTH"];

/// A Zone's `MAXIMUM`/`MINIMUM` bound: `FDOUBL` for a depth or angle
/// domain, `DTIME` for the `TIME` domain's absolute bounds.
#[derive(Debug, Clone, Copy)]
pub enum ZoneBound {
    Depth(f64),
    Time(DateTime),
}

/// The Zone record.
#[derive(Debug, Clone)]
pub struct Zone {
    pub name: String,
    pub description: Option<String>,
    pub domain: String,
    pub maximum: Option<ZoneBound>,
    pub minimum: Option<ZoneBound>,
}

impl Zone {
    pub fn new(name: impl Into<String>, domain: impl Into<String>) -> Result<Self> {
        let domain = domain.into();
        if !ALLOWED_DOMAINS.contains(&domain.as_str()) {
            return Err(Error::from(CoreError::schema_violation(
                name.into(),
                "DOMAIN",
                format!("`{domain}` is not one of {ALLOWED_DOMAINS:?}"),
            )));
        }
        Ok(Zone {
            name: name.into(),
            description: None,
            domain,
            maximum: None,
            minimum: None,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_maximum(mut self, maximum: ZoneBound) -> Self {
        self.maximum = Some(maximum);
        self
    }

    pub fn with_minimum(mut self, minimum: ZoneBound) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// A `TIME` domain Zone must have both bounds, if set, as `DTIME`; a
    /// non-`TIME` domain must have both, if set, as plain floats.
    fn validate_bounds(&self) -> Result<()> {
        let is_time_domain = self.domain == "TIME";
        for (label, bound) in [("MAXIMUM", &self.maximum), ("MINIMUM", &self.minimum)] {
            if let Some(bound) = bound {
                let is_time_bound = matches!(bound, ZoneBound::Time(_));
                if is_time_bound != is_time_domain {
                    return Err(Error::from(CoreError::schema_violation(
                        &self.name,
                        label,
                        format!(
                            "domain is `{}`, so {label} must be {}",
                            self.domain,
                            if is_time_domain { "a DTIME" } else { "a float" }
                        ),
                    )));
                }
            }
        }
        Ok(())
    }

    pub(crate) fn build_attributes(&self) -> Result<Vec<dlis_core::Attribute>> {
        self.validate_bounds()?;
        let mut builder = EflrObjectBuilder::new(&SCHEMA);
        if let Some(description) = &self.description {
            builder.set_text("DESCRIPTION", ReprCode::Ascii, description.clone())?;
        }
        builder.set_text("DOMAIN", ReprCode::Ident, self.domain.clone())?;
        if let Some(maximum) = self.maximum {
            set_bound(&mut builder, "MAXIMUM", maximum)?;
        }
        if let Some(minimum) = self.minimum {
            set_bound(&mut builder, "MINIMUM", minimum)?;
        }
        Ok(builder.into_attributes())
    }
}

fn set_bound(builder: &mut EflrObjectBuilder, label: &str, bound: ZoneBound) -> Result<()> {
    match bound {
        ZoneBound::Depth(value) => {
            builder.set_value(
                label,
                PrimitiveValue::F64(SmallVec::from_slice(&[value])),
                ReprCode::FDoubl,
            )?;
        }
        ZoneBound::Time(value) => {
            builder.set_value(
                label,
                PrimitiveValue::DTime(SmallVec::from_slice(&[value])),
                ReprCode::DTime,
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_domain_is_rejected() {
        assert!(Zone::new("INTERVAL-1", "NOT-A-DOMAIN").is_err());
    }

    #[test]
    fn float_bound_on_time_domain_is_rejected() {
        let zone = Zone::new("INTERVAL-1", "TIME")
            .unwrap()
            .with_maximum(ZoneBound::Depth(10.0));
        assert!(zone.build_attributes().is_err());
    }

    #[test]
    fn depth_domain_accepts_float_bounds() {
        let zone = Zone::new("INTERVAL-1", "BOREHOLE-DEPTH")
            .unwrap()
            .with_maximum(ZoneBound::Depth(100.0))
            .with_minimum(ZoneBound::Depth(0.0));
        let attrs = zone.build_attributes().unwrap();
        let maximum = attrs.iter().find(|a| a.label() == "MAXIMUM").unwrap();
        assert_eq!(maximum.representation_code(), Some(ReprCode::FDoubl));
    }
}
