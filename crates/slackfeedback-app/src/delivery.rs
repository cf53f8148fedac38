//! Simulated delivery backend.
//!
//! Stands in for a webhook poster and an upload service: it logs what it
//! receives and reports back after a short delay, so the widget's
//! asynchronous completion hooks are exercised the same way a real
//! integration would.

use std::time::Duration;

use slackfeedback_core::{
    FeedbackHandler, FeedbackSession, ImageFile, Instant, OutgoingPayload, SubmitError, UploadId,
};

/// Delay before a simulated delivery reports back.
pub const DELIVERY_DELAY: Duration = Duration::from_millis(1200);
/// Delay before a simulated upload reports back.
pub const UPLOAD_DELAY: Duration = Duration::from_millis(800);
/// Uploads larger than this fail.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// A result waiting to be reported into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Delivered,
    DeliveryFailed(SubmitError),
    Uploaded(UploadId, String),
    UploadFailed(UploadId, String),
}

#[derive(Debug, Clone)]
struct Pending {
    due: Instant,
    completion: Completion,
}

/// Handler that answers submissions and uploads after a delay.
///
/// A message containing a `#status` tag (for example `#404`) fails with
/// that status, which makes the error paths easy to try by hand.
#[derive(Debug, Default)]
pub struct SimulatedDelivery {
    pending: Vec<Pending>,
    location: Option<String>,
    delivered: usize,
}

impl SimulatedDelivery {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            pending: Vec::new(),
            location: Some(location.into()),
            delivered: 0,
        }
    }

    /// Number of payloads whose delivery has been reported as successful.
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Earliest pending completion, for repaint scheduling.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Remove and return every completion due at `now`, oldest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<Completion> {
        let (due, waiting): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.pending).into_iter().partition(|p| p.due <= now);
        self.pending = waiting;
        due.into_iter().map(|p| p.completion).collect()
    }

    fn schedule(&mut self, delay: Duration, completion: Completion) {
        self.pending.push(Pending {
            due: Instant::now() + delay,
            completion,
        });
    }
}

impl FeedbackHandler for SimulatedDelivery {
    fn submit(&mut self, payload: OutgoingPayload) {
        match payload.to_json() {
            Ok(json) => log::info!("Delivering payload: {}", json),
            Err(e) => log::error!("Payload serialization failed: {}", e),
        }

        let text = payload.attachment().map(|a| a.text.as_str()).unwrap_or("");
        let completion = match requested_status(text) {
            Some(status) => Completion::DeliveryFailed(SubmitError::Status(status)),
            None => Completion::Delivered,
        };
        self.schedule(DELIVERY_DELAY, completion);
    }

    fn upload_image(&mut self, id: UploadId, file: &ImageFile) {
        log::info!("Uploading '{}' ({} bytes) as {}", file.name, file.len(), id);
        let completion = if file.len() > MAX_UPLOAD_BYTES {
            Completion::UploadFailed(id, format!("{} is larger than 5 MB", file.name))
        } else {
            Completion::Uploaded(id, format!("https://files.example.com/uploads/{}", file.name))
        };
        self.schedule(UPLOAD_DELAY, completion);
    }

    fn page_location(&self) -> Option<String> {
        self.location.clone()
    }
}

/// First `#nnn` tag in a message.
fn requested_status(text: &str) -> Option<u16> {
    text.split_whitespace()
        .filter_map(|word| word.strip_prefix('#'))
        .find_map(|code| code.parse::<u16>().ok())
}

/// Feed every due completion into the session's hooks.
pub fn report_due(session: &mut FeedbackSession<SimulatedDelivery>, now: Instant) -> bool {
    let completions = session.handler_mut().take_due(now);
    let changed = !completions.is_empty();
    for completion in completions {
        match completion {
            Completion::Delivered => {
                session.handler_mut().delivered += 1;
                session.submission_succeeded();
            }
            Completion::DeliveryFailed(error) => session.submission_failed(Some(error)),
            Completion::Uploaded(id, url) => session.image_uploaded(id, &url),
            Completion::UploadFailed(id, message) => {
                session.image_upload_failed(id, Some(message))
            }
        }
    }
    changed
}
