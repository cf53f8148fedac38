//! The in-progress, unsent feedback form.

use super::image::AttachedImage;

/// Form fields of the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub message: String,
    /// Value of the selected category.
    pub category: String,
    /// Append the page location to the message when sending.
    pub include_url: bool,
    pub image: Option<AttachedImage>,
}

impl FeedbackDraft {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            message: String::new(),
            category: category.into(),
            include_url: true,
            image: None,
        }
    }

    /// The image URL to submit, present only once the upload completed.
    pub fn ready_image_url(&self) -> Option<&str> {
        self.image.as_ref().and_then(AttachedImage::url)
    }
}

/// A single field write through the generic setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Message(String),
    Category(String),
    IncludeUrl(bool),
}
