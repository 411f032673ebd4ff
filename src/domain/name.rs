//! ContactName value object.

use super::errors::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Minimum number of characters in a visitor's name.
pub const MIN_NAME_CHARS: usize = 2;

/// The visitor's name, trimmed and at least [`MIN_NAME_CHARS`] characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName from raw input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the trimmed name is empty or
    /// too short.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let name = name.as_ref().trim();

        if name.chars().count() < MIN_NAME_CHARS {
            return Err(ValidationError::InvalidName(name.to_string()));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
