//! Reference sources backed by a plain value.

use preface_core::{
    application::ports::ReferenceSource,
    domain::ReferenceConfig,
    error::{PrefaceError, PrefaceResult},
};

/// Default location generated projects import Preface primitives from.
pub const DEFAULT_REFERENCE_LOCATION: &str = "https://deno.land/x/preface/mod.ts";

/// A reference location supplied as a raw string (CLI flag, test fixture).
///
/// Validation is deferred to [`ReferenceSource::load`] so a bad value is
/// reported as a configuration error by the scaffold service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedReference {
    location: Option<String>,
}

impl FixedReference {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
        }
    }

    /// A source with nothing configured.
    pub fn missing() -> Self {
        Self { location: None }
    }
}

impl Default for FixedReference {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_LOCATION)
    }
}

impl ReferenceSource for FixedReference {
    fn load(&self) -> PrefaceResult<ReferenceConfig> {
        let location = self
            .location
            .as_deref()
            .ok_or_else(|| PrefaceError::Configuration {
                message: "no reference location configured".into(),
            })?;

        ReferenceConfig::new(location).map_err(|e| PrefaceError::Configuration {
            message: e.to_string(),
        })
    }
}
