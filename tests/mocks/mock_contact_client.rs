use async_trait::async_trait;
use portfolio_contact::error::{ContactApiError, ContactApiResult};
use portfolio_contact::{AsyncContactClient, ContactSubmission, SubmissionReceipt, SubmitControl};
use std::sync::{Arc, Mutex};

/// How the mock answers every submission.
#[allow(dead_code)]
#[derive(Clone, Copy, Debug)]
pub enum MockResponse {
    Accept,
    ServerError,
    Timeout,
}

/// Mock contact client for testing.
///
/// Records every submission it receives and, when given a handle on the
/// form's submit control, whether the control was disabled at that moment.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactClient {
    response: MockResponse,
    received: Arc<Mutex<Vec<serde_json::Value>>>,
    control: Option<SubmitControl>,
    disabled_during_call: Arc<Mutex<Vec<bool>>>,
}

#[allow(dead_code)]
impl MockContactClient {
    pub fn new(response: MockResponse) -> Self {
        Self {
            response,
            received: Arc::new(Mutex::new(Vec::new())),
            control: None,
            disabled_during_call: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Observe `control` on every call.
    pub fn watching(mut self, control: &SubmitControl) -> Self {
        self.control = Some(control.clone());
        self
    }

    pub fn call_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    /// JSON bodies received, in order.
    pub fn received(&self) -> Vec<serde_json::Value> {
        self.received.lock().unwrap().clone()
    }

    /// Control state seen on each call.
    pub fn disabled_during_call(&self) -> Vec<bool> {
        self.disabled_during_call.lock().unwrap().clone()
    }
}

#[async_trait]
impl AsyncContactClient for MockContactClient {
    async fn submit(&self, submission: &ContactSubmission) -> ContactApiResult<SubmissionReceipt> {
        self.received
            .lock()
            .unwrap()
            .push(serde_json::to_value(submission)?);

        if let Some(control) = &self.control {
            self.disabled_during_call
                .lock()
                .unwrap()
                .push(control.is_disabled());
        }

        // Yield once so the request is genuinely pending
        tokio::task::yield_now().await;

        match self.response {
            MockResponse::Accept => Ok(SubmissionReceipt::from_body(200, r#"{"success": true}"#)),
            MockResponse::ServerError => Err(ContactApiError::ApiError {
                status: 500,
                message: "Internal Server Error".to_string(),
            }),
            MockResponse::Timeout => Err(ContactApiError::Timeout),
        }
    }
}
