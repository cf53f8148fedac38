//! Outgoing payload handed to the submission callback.
//!
//! The shape matches a Slack incoming-webhook message with a single
//! attachment, so a host can post it without transformation.

use serde::{Deserialize, Serialize};

use crate::category::ColorLevel;

/// Message posted to the delivery callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutgoingPayload {
    pub channel: String,
    pub username: String,
    pub icon_emoji: String,
    pub attachments: Vec<Attachment>,
}

/// The single attachment carrying the feedback itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub fallback: String,
    pub author_name: String,
    pub color: ColorLevel,
    pub title: String,
    pub title_link: String,
    pub text: String,
    pub footer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl OutgoingPayload {
    /// Serialize to the JSON body a webhook expects.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// The feedback attachment, if present.
    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachments.first()
    }
}

/// Fallback summary for a category.
pub fn fallback_text(category: &str) -> String {
    format!("Feedback ({})", category)
}

/// Message body, with the page location appended as a Slack link when requested.
pub fn compose_text(message: &str, include_url: bool, location: Option<&str>) -> String {
    match (include_url, location) {
        (true, Some(location)) => format!("{}\n <{}>", message, location),
        _ => message.to_string(),
    }
}
