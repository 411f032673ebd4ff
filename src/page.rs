//! Page-level wiring: explicit initialization and event dispatch.
//!
//! Everything the contact section needs is built in [`ContactPage::init`] and
//! owned by the page. Input arrives as [`FormEvent`]s.

use crate::client::{AsyncContactClient, AsyncContactClientImpl, ContactClient};
use crate::config::Config;
use crate::form::{ContactForm, ContactFormSubmitter, FormStatus, SubmissionOutcome};
use crate::metrics::Metrics;
use crate::models::FormField;
use std::sync::Arc;

/// Something the visitor did to the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A field's value changed.
    Input { field: FormField, value: String },
    /// The form was submitted.
    Submit,
}

/// The contact section of the page.
pub struct ContactPage {
    form: ContactForm,
    submitter: ContactFormSubmitter,
}

impl ContactPage {
    /// Build the page from configuration: metrics, HTTP client, submitter, empty form.
    pub fn init(config: &Config) -> Self {
        let metrics = Metrics::new();
        let client = ContactClient::new(config).with_metrics(metrics.clone());
        let endpoint = client.endpoint();
        let client = Arc::new(AsyncContactClientImpl::new(client)) as Arc<dyn AsyncContactClient>;
        let submitter = ContactFormSubmitter::new(client, config.environment, metrics);

        tracing::debug!(
            endpoint = %endpoint,
            contact_field = %config.contact_field,
            environment = %config.environment,
            "Contact page initialized"
        );

        Self::new(ContactForm::new(config.contact_field), submitter)
    }

    pub fn new(form: ContactForm, submitter: ContactFormSubmitter) -> Self {
        Self { form, submitter }
    }

    /// Dispatch one event. Only `Submit` produces an outcome.
    pub async fn handle(&mut self, event: FormEvent) -> Option<SubmissionOutcome> {
        match event {
            FormEvent::Input { field, value } => {
                self.form.set_field(field, value);
                None
            }
            FormEvent::Submit => Some(self.submitter.submit(&mut self.form).await),
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> &FormStatus {
        self.form.status()
    }

    pub fn metrics(&self) -> &Metrics {
        self.submitter.metrics()
    }
}
