//! Contact form state.

use super::control::SubmitControl;
use crate::models::{ContactField, FormField, FormFields};
use std::fmt;

/// Message shown after the backend accepted a submission.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// Message shown for every network, timeout or server failure.
pub const FAILURE_MESSAGE: &str = "Oops! Something went wrong. Please try again or email directly.";

/// The status line under the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Success(String),
    Error(String),
}

impl FormStatus {
    /// Status text, empty when idle.
    pub fn message(&self) -> &str {
        match self {
            FormStatus::Idle => "",
            FormStatus::Success(msg) | FormStatus::Error(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FormStatus::Error(_))
    }
}

impl fmt::Display for FormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The contact form: field values, status line and submit control.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    contact_field: ContactField,
    fields: FormFields,
    status: FormStatus,
    submit: SubmitControl,
}

impl ContactForm {
    pub fn new(contact_field: ContactField) -> Self {
        Self {
            contact_field,
            ..Self::default()
        }
    }

    pub fn contact_field(&self) -> ContactField {
        self.contact_field
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn value(&self, field: FormField) -> &str {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Clear every field. The status line is left alone.
    pub fn reset(&mut self) {
        self.fields = FormFields::default();
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn set_status(&mut self, status: FormStatus) {
        self.status = status;
    }

    pub fn clear_status(&mut self) {
        self.status = FormStatus::Idle;
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }
}
