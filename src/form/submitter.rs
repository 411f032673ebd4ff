//! Contact form submission flow.

use super::state::{ContactForm, FormStatus, FAILURE_MESSAGE, SUCCESS_MESSAGE};
use crate::client::AsyncContactClient;
use crate::config::Environment;
use crate::domain::ValidationError;
use crate::error::ContactApiError;
use crate::metrics::Metrics;
use crate::models::SubmissionReceipt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// How a submit attempt ended.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// A field failed validation; nothing was sent.
    Rejected(ValidationError),
    /// The backend accepted the submission.
    Sent(SubmissionReceipt),
    /// The request failed, timed out, or got a non-2xx answer.
    Failed(ContactApiError),
    /// Another submission was still pending.
    Ignored,
}

impl SubmissionOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmissionOutcome::Sent(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, SubmissionOutcome::Rejected(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SubmissionOutcome::Failed(_))
    }
}

/// Validates the contact form and sends it to the backend.
///
/// Holds no per-submission state; everything a submission touches lives on
/// the [`ContactForm`] passed in.
#[derive(Clone)]
pub struct ContactFormSubmitter {
    client: Arc<dyn AsyncContactClient>,
    environment: Environment,
    metrics: Metrics,
}

impl ContactFormSubmitter {
    pub fn new(client: Arc<dyn AsyncContactClient>, environment: Environment, metrics: Metrics) -> Self {
        Self {
            client,
            environment,
            metrics,
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Handle a submit of `form`.
    ///
    /// Validation failures leave the field values untouched and never reach
    /// the network. The submit control is disabled only while the request is
    /// pending, and is re-enabled whatever the result.
    pub async fn submit(&self, form: &mut ContactForm) -> SubmissionOutcome {
        if form.submit_control().is_disabled() {
            debug!("Submit ignored, a submission is already pending");
            return SubmissionOutcome::Ignored;
        }

        form.clear_status();
        info!("Form submitted");

        let submission = match form.fields().validate(form.contact_field()) {
            Ok(submission) => submission,
            Err(e) => {
                debug!(input = e.input(), "Validation failed: {}", e);
                self.metrics.record_validation_failure();
                form.set_status(FormStatus::Error(e.to_string()));
                return SubmissionOutcome::Rejected(e);
            }
        };

        let Some(_pending) = form.submit_control().begin() else {
            return SubmissionOutcome::Ignored;
        };

        match self.client.submit(&submission).await {
            Ok(receipt) => {
                info!(status = receipt.status, "Contact message sent");
                self.metrics.record_submission_sent();
                form.set_status(FormStatus::Success(SUCCESS_MESSAGE.to_string()));
                form.reset();
                SubmissionOutcome::Sent(receipt)
            }
            Err(e) => {
                self.report_failure(&e);
                form.set_status(FormStatus::Error(FAILURE_MESSAGE.to_string()));
                SubmissionOutcome::Failed(e)
            }
        }
    }

    /// Log a failed submission. Details stay out of production logs.
    fn report_failure(&self, err: &ContactApiError) {
        if self.environment.is_production() {
            warn!("Form submission failed");
            return;
        }

        error!(
            error.message = %err,
            error.cause_chain = ?err,
            status = ?err.status(),
            timed_out = err.is_timeout(),
            "Form submission error"
        );
    }
}
