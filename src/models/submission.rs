//! Contact submission records.
//!
//! [`FormFields`] holds what the visitor typed. [`FormFields::validate`] turns it
//! into a [`ContactSubmission`], the record that goes over the wire.

use crate::domain::{ContactName, EmailAddress, MessageBody, PhoneNumber, Subject, ValidationError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The extra field the contact form asks for besides name, email and message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Subject,
    Phone,
}

impl ContactField {
    /// JSON key and form element id of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Subject => "subject",
            ContactField::Phone => "phone",
        }
    }
}

impl FromStr for ContactField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "subject" => Ok(ContactField::Subject),
            "phone" => Ok(ContactField::Phone),
            other => Err(format!("Must be one of: subject, phone (got: {})", other)),
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single input of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    /// The subject or phone input, depending on the form's [`ContactField`]
    Detail,
    Message,
}

impl FormField {
    /// Fields in validation order.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Detail,
        FormField::Message,
    ];

    /// Element id of the input on a form carrying `contact_field`.
    pub fn element_id(&self, contact_field: ContactField) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Detail => contact_field.as_str(),
            FormField::Message => "message",
        }
    }
}

/// Raw, unvalidated form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub detail: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Detail => &self.detail,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Detail => &mut self.detail,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Validate in order name → email → subject/phone → message.
    ///
    /// Stops at the first invalid field; later fields are not inspected.
    pub fn validate(&self, contact_field: ContactField) -> Result<ContactSubmission, ValidationError> {
        let name = ContactName::new(&self.name)?;
        let email = EmailAddress::new(&self.email)?;
        let detail = match contact_field {
            ContactField::Subject => ContactDetail::Subject(Subject::new(&self.detail)?),
            ContactField::Phone => ContactDetail::Phone(PhoneNumber::new(&self.detail)?),
        };
        let message = MessageBody::new(&self.message)?;

        Ok(ContactSubmission {
            name,
            email,
            detail,
            message,
        })
    }
}

/// The subject-or-phone part of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactDetail {
    Subject(Subject),
    Phone(PhoneNumber),
}

impl ContactDetail {
    pub fn field(&self) -> ContactField {
        match self {
            ContactDetail::Subject(_) => ContactField::Subject,
            ContactDetail::Phone(_) => ContactField::Phone,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ContactDetail::Subject(s) => s.as_str(),
            ContactDetail::Phone(p) => p.as_str(),
        }
    }
}

/// A validated contact submission record.
///
/// Serializes to `{"name", "email", "subject" | "phone", "message"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: EmailAddress,
    #[serde(flatten)]
    pub detail: ContactDetail,
    pub message: MessageBody,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> FormFields {
        FormFields {
            name: "  Ada Lovelace ".to_string(),
            email: "ada@example.com ".to_string(),
            detail: " Collaboration".to_string(),
            message: "I'd like to talk about a project. ".to_string(),
        }
    }

    #[test]
    fn test_validate_trims_every_field() {
        let submission = filled().validate(ContactField::Subject).unwrap();
        assert_eq!(submission.name.as_str(), "Ada Lovelace");
        assert_eq!(submission.email.as_str(), "ada@example.com");
        assert_eq!(submission.detail.as_str(), "Collaboration");
        assert_eq!(submission.message.as_str(), "I'd like to talk about a project.");
    }

    #[test]
    fn test_validate_reports_first_failure_in_order() {
        let mut fields = FormFields::default();
        assert!(matches!(
            fields.validate(ContactField::Subject),
            Err(ValidationError::InvalidName(_))
        ));

        fields.name = "Ada".to_string();
        assert!(matches!(
            fields.validate(ContactField::Subject),
            Err(ValidationError::InvalidEmail(_))
        ));

        fields.email = "ada@example.com".to_string();
        assert!(matches!(
            fields.validate(ContactField::Subject),
            Err(ValidationError::InvalidSubject(_))
        ));
        assert!(matches!(
            fields.validate(ContactField::Phone),
            Err(ValidationError::InvalidPhone(_))
        ));

        fields.detail = "555 0100".to_string();
        assert!(matches!(
            fields.validate(ContactField::Phone),
            Err(ValidationError::InvalidMessage(_))
        ));
    }

    #[test]
    fn test_submission_json_with_subject() {
        let submission = filled().validate(ContactField::Subject).unwrap();
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "subject": "Collaboration",
                "message": "I'd like to talk about a project."
            })
        );
    }

    #[test]
    fn test_submission_json_with_phone() {
        let mut fields = filled();
        fields.detail = "+44 20 7946 0958".to_string();
        let submission = fields.validate(ContactField::Phone).unwrap();
        assert_eq!(submission.detail.field(), ContactField::Phone);

        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["phone"], "+44 20 7946 0958");
        assert!(value.get("subject").is_none());
    }

    #[test]
    fn test_form_fields_get_set() {
        let mut fields = FormFields::default();
        assert!(fields.is_empty());
        fields.set(FormField::Message, "hello");
        assert_eq!(fields.get(FormField::Message), "hello");
        assert!(!fields.is_empty());
    }

    #[test]
    fn test_contact_field_parsing() {
        assert_eq!("Subject".parse::<ContactField>().unwrap(), ContactField::Subject);
        assert_eq!(" phone ".parse::<ContactField>().unwrap(), ContactField::Phone);
        assert!("fax".parse::<ContactField>().is_err());
        assert_eq!(FormField::Detail.element_id(ContactField::Phone), "phone");
    }
}
