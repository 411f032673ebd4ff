//! MessageBody value object.

use super::errors::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Minimum number of characters in a contact message.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// The free-text body of a contact message.
///
/// Inner whitespace and line breaks are kept; only the ends are trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageBody(String);

impl MessageBody {
    /// Create a new MessageBody from raw input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidMessage` if fewer than
    /// [`MIN_MESSAGE_CHARS`] characters remain after trimming.
    pub fn new(message: impl AsRef<str>) -> Result<Self, ValidationError> {
        let message = message.as_ref().trim();

        if message.chars().count() < MIN_MESSAGE_CHARS {
            return Err(ValidationError::InvalidMessage(message.to_string()));
        }

        Ok(Self(message.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for MessageBody {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for MessageBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
