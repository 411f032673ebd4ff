//! HTTP client for the portfolio backend's contact endpoint.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client owns the client-side timeout and maps
//! every transport or status failure onto [`ContactApiError`].

mod async_wrapper;
pub use async_wrapper::{AsyncContactClient, AsyncContactClientImpl};

use crate::config::{Config, Environment};
use crate::error::{ContactApiError, ContactApiResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{ContactSubmission, SubmissionReceipt};
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Path of the contact endpoint, relative to the base URL.
pub const CONTACT_PATH: &str = "/contact";

/// HTTP client for the contact endpoint.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`. Request bodies and
/// failure details are only logged outside production.
#[derive(Clone)]
pub struct ContactClient {
    /// Base URL of the backend
    base_url: String,

    /// Client-side timeout applied to each request
    timeout: Duration,

    /// Deployment environment, gates diagnostic logging
    environment: Environment,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ContactClient {
    /// Create a new ContactClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(config.api_base_url.clone(), config.timeout())
            .with_environment(config.environment)
    }

    /// Create a ContactClient with a custom base URL and timeout (useful for testing).
    ///
    /// The environment defaults to development.
    pub fn with_base_url(base_url: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url,
            timeout,
            environment: Environment::default(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Set the deployment environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Share an existing metrics collector instead of a private one.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL of the contact endpoint.
    pub fn endpoint(&self) -> String {
        self.build_url(CONTACT_PATH)
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Send a validated submission to the contact endpoint.
    ///
    /// Any 2xx status is success, with or without a body. Everything else,
    /// including the timeout firing while the body is read, is an error.
    pub fn submit(&self, submission: &ContactSubmission) -> ContactApiResult<SubmissionReceipt> {
        let body = serde_json::to_value(submission)?;
        let url = self.endpoint();
        let timer = HttpTimer::new(self.metrics.clone());

        tracing::debug!("POST {}", url);
        if !self.environment.is_production() {
            tracing::debug!(
                "Request body: {}",
                serde_json::to_string_pretty(&body).unwrap_or_else(|_| "<invalid json>".to_string())
            );
        }

        let result = self.post(&url, &body);

        match &result {
            Ok(receipt) => {
                tracing::debug!("POST {} - Success (status: {})", url, receipt.status);
                timer.complete();
            }
            Err(e) => {
                if self.environment.is_production() {
                    tracing::debug!("POST {} - Failed", url);
                } else {
                    tracing::error!("POST {} - Error: {:?}", url, e);
                }
                if e.is_timeout() {
                    self.metrics.record_timeout();
                }
                timer.complete_with_error();
            }
        }

        result
    }

    /// Execute a POST request with a JSON body and read the whole response.
    fn post(&self, url: &str, body: &serde_json::Value) -> ContactApiResult<SubmissionReceipt> {
        let response = self
            .agent
            .post(url)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        let text = response.into_string().map_err(Self::map_io_error)?;

        if !(200..300).contains(&status) {
            return Err(ContactApiError::ApiError {
                status,
                message: Self::error_message(&text),
            });
        }

        Ok(SubmissionReceipt::from_body(status, &text))
    }

    /// Map a ureq error to a ContactApiError.
    fn map_error(&self, error: ureq::Error) -> ContactApiError {
        match error {
            ureq::Error::Status(status, response) => {
                let body = response.into_string().unwrap_or_default();
                ContactApiError::ApiError {
                    status,
                    message: Self::error_message(&body),
                }
            }
            // Connect timeouts surface as ConnectionFailed, so check the cause first
            ureq::Error::Transport(transport) if Self::is_timeout(&transport) => {
                ContactApiError::Timeout
            }
            ureq::Error::Transport(transport) => match transport.kind() {
                ureq::ErrorKind::ConnectionFailed | ureq::ErrorKind::Dns => {
                    ContactApiError::ConnectionFailed(transport.to_string())
                }
                _ => ContactApiError::HttpError(transport.to_string()),
            },
        }
    }

    fn map_io_error(error: io::Error) -> ContactApiError {
        match error.kind() {
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => ContactApiError::Timeout,
            _ => ContactApiError::HttpError(error.to_string()),
        }
    }

    fn is_timeout(transport: &ureq::Transport) -> bool {
        let io_timeout = std::error::Error::source(transport)
            .and_then(|source| source.downcast_ref::<io::Error>())
            .map(|e| matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock));

        io_timeout.unwrap_or_else(|| transport.to_string().contains("timed out"))
    }

    /// Diagnostic message for a failed response.
    ///
    /// Prefers the `error` or `message` field of a JSON body and falls back to
    /// the raw text.
    fn error_message(body: &str) -> String {
        let body = body.trim();
        if body.is_empty() {
            return "Unknown error".to_string();
        }

        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["error", "message"]
                    .iter()
                    .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(str::to_string))
            })
            .unwrap_or_else(|| body.to_string())
    }
}
