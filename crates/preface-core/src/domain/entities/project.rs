use std::fmt;

use crate::domain::error::DomainError;

/// Characters rejected by at least one supported host filesystem.
const RESERVED_CHARS: &[char] = &['/', '\\', '<', '>', ':', '"', '|', '?', '*'];

/// Device names Windows refuses as file or directory names.
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

const MAX_NAME_BYTES: usize = 255;

/// Parameters for one scaffolding run.
///
/// The name is both the page/README title and the workspace directory, so it
/// must be a single portable path component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectParameters {
    name: String,
}

impl ProjectParameters {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ProjectParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    let reject = |reason: &str| {
        Err(DomainError::InvalidProjectName {
            name: name.to_string(),
            reason: reason.to_string(),
        })
    };

    if name.trim().is_empty() {
        return reject("name cannot be empty");
    }
    if name.trim() != name {
        return reject("name cannot start or end with whitespace");
    }
    if name.starts_with('.') {
        return reject("name cannot start with '.'");
    }
    if name.len() > MAX_NAME_BYTES {
        return reject("name is longer than 255 bytes");
    }
    if let Some(c) = name.chars().find(|c| RESERVED_CHARS.contains(c)) {
        return if c == '/' || c == '\\' {
            reject("name cannot contain path separators")
        } else {
            reject(&format!("name cannot contain '{c}'"))
        };
    }
    if name.chars().any(char::is_control) {
        return reject("name cannot contain control characters");
    }
    if name.ends_with('.') {
        return reject("name cannot end with '.'");
    }

    let stem = name.split('.').next().unwrap_or(name);
    if RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(stem))
    {
        return reject("name is a reserved device name");
    }

    Ok(())
}
