//! Async wrapper around the synchronous ContactClient.
//!
//! Runs the blocking HTTP call on tokio's blocking pool so the caller's
//! event loop stays responsive while a submission is in flight.

use crate::client::ContactClient;
use crate::error::{ContactApiError, ContactApiResult};
use crate::models::{ContactSubmission, SubmissionReceipt};
use async_trait::async_trait;
use std::sync::Arc;

/// Async seam for sending contact submissions.
///
/// The form submitter only depends on this trait, so tests can swap the
/// network for an in-memory double.
#[async_trait]
pub trait AsyncContactClient: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> ContactApiResult<SubmissionReceipt>;
}

/// Async wrapper around synchronous ContactClient.
#[derive(Clone)]
pub struct AsyncContactClientImpl {
    client: Arc<ContactClient>,
}

impl AsyncContactClientImpl {
    pub fn new(client: ContactClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncContactClient for AsyncContactClientImpl {
    async fn submit(&self, submission: &ContactSubmission) -> ContactApiResult<SubmissionReceipt> {
        let client = self.client.clone();
        let submission = submission.clone();

        tokio::task::spawn_blocking(move || client.submit(&submission))
            .await
            .map_err(|e| ContactApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
