//! Data models for the contact form.
//!
//! This module contains the raw form values, the validated submission record
//! sent to the backend, and the backend's receipt.

pub mod receipt;
pub mod submission;

pub use receipt::SubmissionReceipt;
pub use submission::{ContactDetail, ContactField, ContactSubmission, FormField, FormFields};
