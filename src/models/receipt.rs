//! Backend response to a successful submission.

/// What the contact endpoint answered with a 2xx status.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    /// HTTP status code (2xx)
    pub status: u16,

    /// Parsed JSON body; `None` when the body was empty or not JSON
    pub body: Option<serde_json::Value>,
}

impl SubmissionReceipt {
    /// Build a receipt from a raw response body.
    ///
    /// Bodies are optional, so an empty or non-JSON body is not an error.
    pub fn from_body(status: u16, body: &str) -> Self {
        let trimmed = body.trim();
        let body = if trimmed.is_empty() {
            None
        } else {
            match serde_json::from_str(trimmed) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::debug!("Ignoring non-JSON response body: {}", e);
                    None
                }
            }
        };

        Self { status, body }
    }

    /// A top-level string field of the JSON body, e.g. `message`.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.body.as_ref()?.get(key)?.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_empty_body() {
        let receipt = SubmissionReceipt::from_body(204, "");
        assert_eq!(receipt.status, 204);
        assert!(receipt.body.is_none());
    }

    #[test]
    fn test_receipt_json_body() {
        let receipt = SubmissionReceipt::from_body(200, r#"{"success": true, "message": "Saved"}"#);
        assert_eq!(receipt.field("message"), Some("Saved"));
        assert_eq!(receipt.field("missing"), None);
    }

    #[test]
    fn test_receipt_non_json_body() {
        let receipt = SubmissionReceipt::from_body(200, "OK");
        assert!(receipt.body.is_none());
    }
}
