//! Submission outcome and its self-expiring revert timer.

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub use web_time::Instant;

/// Status shown on the submit button.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    Sending,
    Sent,
    Error(String),
}

impl SubmissionOutcome {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }

    /// The displayed error message, if in the error state.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Which status a pending timer reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevertKind {
    Sent,
    Error,
}

/// Deadline after which a `Sent` or `Error` outcome returns to idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertTimer {
    pub kind: RevertKind,
    pub deadline: Instant,
}

impl RevertTimer {
    /// Start a timer that expires `after` from now.
    pub fn start(kind: RevertKind, after: Duration) -> Self {
        Self {
            kind,
            deadline: Instant::now() + after,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}
