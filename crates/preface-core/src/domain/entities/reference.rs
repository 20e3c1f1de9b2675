use std::fmt;

use crate::domain::error::DomainError;

/// The external location generated projects import UI primitives from.
///
/// Read-only once constructed. The location is interpolated verbatim into a
/// quoted import specifier, so anything that would terminate or break that
/// string literal is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceConfig {
    primary_reference_location: String,
}

impl ReferenceConfig {
    pub fn new(location: impl Into<String>) -> Result<Self, DomainError> {
        let location = location.into();
        let reject = |reason: &str| {
            Err(DomainError::InvalidReferenceLocation {
                location: location.clone(),
                reason: reason.into(),
            })
        };

        if location.is_empty() {
            return reject("location is empty");
        }
        if location.chars().any(char::is_whitespace) {
            return reject("location cannot contain whitespace");
        }
        if location.contains(['"', '\'', '`', '\\']) {
            return reject("location cannot contain quotes or backslashes");
        }
        if location.chars().any(char::is_control) {
            return reject("location cannot contain control characters");
        }

        Ok(Self {
            primary_reference_location: location,
        })
    }

    pub fn primary_reference_location(&self) -> &str {
        &self.primary_reference_location
    }
}

impl fmt::Display for ReferenceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.primary_reference_location)
    }
}
