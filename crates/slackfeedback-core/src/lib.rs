//! Slack Feedback Core Library
//!
//! Platform-agnostic state machines behind the embeddable feedback widget:
//! panel visibility, the feedback draft with its submission and image
//! attachment lifecycles, and the Slack-shaped payload handed to the host.

pub mod category;
pub mod config;
pub mod error;
pub mod payload;
pub mod session;
pub mod theme;
pub mod translations;
pub mod visibility;

pub use category::{CategoryMerge, ColorLevel, FeedbackCategory};
pub use config::{FeedbackConfig, SubmitPolicy};
pub use error::{ConfigError, ConfigResult, SubmitError, classify_error};
pub use payload::{Attachment, OutgoingPayload};
pub use session::{
    AttachedImage, FeedbackDraft, FeedbackHandler, FeedbackSession, FieldUpdate, ImageFile,
    ImagePreview, Instant, SendOutcome, SendRejection, SubmissionOutcome, UploadId,
};
pub use theme::{Theme, deep_merge};
pub use translations::{TranslationKey, Translations};
pub use visibility::{InteractionEvent, VisibilityController};
