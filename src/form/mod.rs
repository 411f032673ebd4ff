//! The contact form and its submission flow.
//!
//! - **state**: field values and the status line
//! - **control**: the submit button, doubling as the reentrancy guard
//! - **submitter**: validate, send, report

pub mod control;
pub mod state;
pub mod submitter;

pub use control::{PendingSubmission, SubmitControl};
pub use state::{ContactForm, FormStatus, FAILURE_MESSAGE, SUCCESS_MESSAGE};
pub use submitter::{ContactFormSubmitter, SubmissionOutcome};
