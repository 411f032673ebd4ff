//! Contact form client for a personal portfolio site.
//!
//! Validates a visitor's contact message and posts it as JSON to the site's
//! backend with a client-side timeout, reporting the result through a small
//! form model.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for each form field
//! - **models**: Raw form values, the submission record and the backend receipt
//! - **client**: Blocking HTTP client and its async wrapper
//! - **form**: Form state, submit control and the submission flow
//! - **page**: Explicit initialization and event dispatch
//! - **config**, **error**, **metrics**: Environment configuration, error types, counters

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod metrics;
pub mod models;
pub mod page;

pub use client::{AsyncContactClient, AsyncContactClientImpl, ContactClient};
pub use config::{Config, Environment};
pub use domain::ValidationError;
pub use error::{ConfigError, ContactApiError};
pub use form::{ContactForm, ContactFormSubmitter, FormStatus, SubmissionOutcome, SubmitControl};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{ContactField, ContactSubmission, FormField, FormFields, SubmissionReceipt};
pub use page::{ContactPage, FormEvent};
