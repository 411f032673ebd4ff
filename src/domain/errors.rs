//! Domain validation errors.

use std::fmt;

/// Errors that can occur during contact field validation.
///
/// Each variant carries the rejected (trimmed) input. `Display` renders the
/// message shown to the visitor, not the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The name is empty or shorter than two characters.
    InvalidName(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The subject is shorter than three characters.
    InvalidSubject(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The message is shorter than ten characters.
    InvalidMessage(String),
}

impl ValidationError {
    /// The offending input, as it was validated.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidName(s)
            | Self::InvalidEmail(s)
            | Self::InvalidSubject(s)
            | Self::InvalidPhone(s)
            | Self::InvalidMessage(s) => s,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(_) => write!(f, "Please enter a valid name"),
            Self::InvalidEmail(_) => write!(f, "Please enter a valid email address"),
            Self::InvalidSubject(_) => write!(f, "Please enter a subject"),
            Self::InvalidPhone(_) => write!(f, "Please enter a valid phone number"),
            Self::InvalidMessage(_) => {
                write!(f, "Please enter a message (at least 10 characters)")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
