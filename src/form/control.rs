//! The submit button's state, shared between the form and whoever observes it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Label shown while no submission is pending.
pub const IDLE_LABEL: &str = "Get In Touch";

/// Label shown while a submission is in flight.
pub const PENDING_LABEL: &str = "Sending...";

/// Handle on the submit control.
///
/// Clones share state. The disabled flag is the reentrancy guard for
/// submissions: [`SubmitControl::begin`] only succeeds while the control is
/// enabled.
#[derive(Debug, Clone, Default)]
pub struct SubmitControl {
    disabled: Arc<AtomicBool>,
}

impl SubmitControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::Acquire)
    }

    pub fn label(&self) -> &'static str {
        if self.is_disabled() {
            PENDING_LABEL
        } else {
            IDLE_LABEL
        }
    }

    /// Disable the control for the duration of a submission.
    ///
    /// Returns `None` if another submission already holds it. The control is
    /// enabled again when the returned guard is dropped.
    pub fn begin(&self) -> Option<PendingSubmission> {
        self.disabled
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| PendingSubmission {
                control: self.clone(),
            })
    }
}

/// Proof that a submission is pending. Re-enables the control on drop.
#[derive(Debug)]
#[must_use = "the control is re-enabled as soon as the guard is dropped"]
pub struct PendingSubmission {
    control: SubmitControl,
}

impl Drop for PendingSubmission {
    fn drop(&mut self) {
        self.control.disabled.store(false, Ordering::Release);
    }
}
