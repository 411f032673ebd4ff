//! Subject value object.

use super::errors::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Minimum number of characters in a subject line.
pub const MIN_SUBJECT_CHARS: usize = 3;

/// Subject line of a contact message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subject(String);

impl Subject {
    /// Create a new Subject from raw input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidSubject` if fewer than
    /// [`MIN_SUBJECT_CHARS`] characters remain after trimming.
    pub fn new(subject: impl AsRef<str>) -> Result<Self, ValidationError> {
        let subject = subject.as_ref().trim();

        if subject.chars().count() < MIN_SUBJECT_CHARS {
            return Err(ValidationError::InvalidSubject(subject.to_string()));
        }

        Ok(Self(subject.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for Subject {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
