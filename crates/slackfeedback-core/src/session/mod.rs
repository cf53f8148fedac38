//! Feedback session: the draft, the submission lifecycle and the image
//! attachment lifecycle of one widget instance.
//!
//! Delivery and upload are delegated to a [`FeedbackHandler`]. The host
//! reports their results back through the completion hooks
//! (`submission_succeeded`, `submission_failed`, `image_uploaded`,
//! `image_upload_failed`) whenever they finish; nothing here assumes they
//! complete synchronously, or at all.
//!
//! `Sent` and `Error` outcomes expire through a single timer owned by the
//! session. The host drives it by calling [`FeedbackSession::tick`] once per
//! frame.

mod draft;
mod image;
mod outcome;

pub use draft::{FeedbackDraft, FieldUpdate};
pub use image::{AttachedImage, ImageFile, ImagePreview, UploadId};
pub use outcome::{Instant, RevertKind, RevertTimer, SubmissionOutcome};

use serde_json::Value;

use crate::category::{ColorLevel, FeedbackCategory};
use crate::config::FeedbackConfig;
use crate::error::{ConfigResult, SubmitError, classify_error};
use crate::payload::{Attachment, OutgoingPayload, compose_text, fallback_text};
use crate::translations::{TranslationKey, Translations};

/// External collaborator performing delivery and upload.
pub trait FeedbackHandler {
    /// Deliver a payload. Report the result through
    /// `submission_succeeded` / `submission_failed`.
    fn submit(&mut self, payload: OutgoingPayload);

    /// Upload a picked image. Report the result through
    /// `image_uploaded` / `image_upload_failed` with the same `id`.
    fn upload_image(&mut self, id: UploadId, file: &ImageFile);

    /// Location of the page the feedback is about.
    fn page_location(&self) -> Option<String> {
        None
    }
}

/// Why `send` refused to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendRejection {
    Disabled,
    EmptyMessage,
    AlreadySending,
    UploadingImage,
}

/// Result of a `send` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The payload was handed to the handler.
    Submitted(ColorLevel),
    /// The submit policy excludes the selected category; nothing was sent.
    Skipped(ColorLevel),
    /// A precondition failed; state is unchanged.
    Rejected(SendRejection),
}

/// State of one feedback widget instance.
pub struct FeedbackSession<H: FeedbackHandler> {
    config: FeedbackConfig,
    translations: Translations,
    categories: Vec<FeedbackCategory>,
    handler: H,
    draft: FeedbackDraft,
    outcome: SubmissionOutcome,
    uploading: bool,
    timer: Option<RevertTimer>,
}

impl<H: FeedbackHandler> FeedbackSession<H> {
    /// Validate `config` and create a fresh draft.
    pub fn new(config: FeedbackConfig, handler: H) -> ConfigResult<Self> {
        config.validate()?;
        let translations = config.resolve_translations();
        let categories = config.resolve_categories(&translations);
        let draft = FeedbackDraft::new(config.initial_category(&categories));

        Ok(Self {
            config,
            translations,
            categories,
            handler,
            draft,
            outcome: SubmissionOutcome::Idle,
            uploading: false,
            timer: None,
        })
    }

    pub fn config(&self) -> &FeedbackConfig {
        &self.config
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    pub fn translate(&self, key: TranslationKey) -> &str {
        self.translations.get(key)
    }

    pub fn categories(&self) -> &[FeedbackCategory] {
        &self.categories
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn draft(&self) -> &FeedbackDraft {
        &self.draft
    }

    pub fn message(&self) -> &str {
        &self.draft.message
    }

    pub fn selected_category(&self) -> &str {
        &self.draft.category
    }

    pub fn include_url(&self) -> bool {
        self.draft.include_url
    }

    pub fn image(&self) -> Option<&AttachedImage> {
        self.draft.image.as_ref()
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Deadline of the pending revert, for hosts that schedule repaints.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.map(|t| t.deadline)
    }

    // ------------------------------------------------------------------
    // Form fields
    // ------------------------------------------------------------------

    /// Overwrite one draft field.
    pub fn set_field(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Message(message) => self.draft.message = message,
            FieldUpdate::Category(value) => self.select_category(&value),
            FieldUpdate::IncludeUrl(include) => self.draft.include_url = include,
        }
    }

    /// Select a configured category. Unknown values are ignored.
    pub fn select_category(&mut self, value: &str) {
        if self.categories.iter().any(|c| c.value == value) {
            self.draft.category = value.to_string();
        } else {
            log::warn!("Ignoring unknown feedback category '{}'", value);
        }
    }

    pub fn toggle_include_url(&mut self) {
        self.draft.include_url = !self.draft.include_url;
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// The precondition `send` would fail on, if any.
    pub fn send_blocker(&self) -> Option<SendRejection> {
        if self.config.disabled {
            Some(SendRejection::Disabled)
        } else if self.outcome.is_sending() {
            Some(SendRejection::AlreadySending)
        } else if self.uploading {
            Some(SendRejection::UploadingImage)
        } else if self.draft.message.is_empty() {
            Some(SendRejection::EmptyMessage)
        } else {
            None
        }
    }

    /// Whether the submit trigger should be enabled.
    pub fn can_submit(&self) -> bool {
        self.send_blocker().is_none()
    }

    /// Text for the submit trigger in the current state.
    pub fn submit_label(&self) -> &str {
        match &self.outcome {
            SubmissionOutcome::Error(message) => message.as_str(),
            SubmissionOutcome::Sent => self.translate(TranslationKey::SubmitSent),
            SubmissionOutcome::Sending => self.translate(TranslationKey::SubmitSending),
            SubmissionOutcome::Idle => self.translate(TranslationKey::SubmitText),
        }
    }

    /// Build the payload and hand it to the handler.
    pub fn send(&mut self) -> SendOutcome {
        if let Some(reason) = self.send_blocker() {
            log::debug!("Send rejected: {:?}", reason);
            return SendOutcome::Rejected(reason);
        }

        // A pending revert from an earlier outcome must not clobber this one.
        self.timer = None;
        self.outcome = SubmissionOutcome::Sending;

        let category = self.draft.category.clone();
        let level = ColorLevel::for_category(&category);

        if !self.config.submit_policy.allows(&category) {
            log::warn!(
                "Category '{}' is excluded by the submit policy, nothing sent",
                category
            );
            self.outcome = SubmissionOutcome::Idle;
            return SendOutcome::Skipped(level);
        }

        let payload = self.build_payload(level);
        log::debug!("Submitting {} feedback", category);
        self.handler.submit(payload);
        SendOutcome::Submitted(level)
    }

    /// Snapshot the draft into a payload.
    pub fn build_payload(&self, level: ColorLevel) -> OutgoingPayload {
        let location = self.handler.page_location();
        let category = &self.draft.category;
        let text = compose_text(
            &self.draft.message,
            self.draft.include_url,
            location.as_deref(),
        );

        OutgoingPayload {
            channel: self.config.channel.clone(),
            username: self.config.user.clone(),
            icon_emoji: self.config.emoji.clone(),
            attachments: vec![Attachment {
                fallback: fallback_text(category),
                author_name: self.config.user.clone(),
                color: level,
                title: category.clone(),
                title_link: location.unwrap_or_default(),
                text,
                footer: self.config.footer.clone(),
                image_url: self.draft.ready_image_url().map(str::to_string),
            }],
        }
    }

    /// Completion hook: delivery succeeded.
    pub fn submission_succeeded(&mut self) {
        if !self.outcome.is_sending() {
            log::warn!("Ignoring submission success while {:?}", self.outcome);
            return;
        }
        self.outcome = SubmissionOutcome::Sent;
        self.draft.message.clear();
        self.draft.image = None;
        self.uploading = false;
        self.timer = Some(RevertTimer::start(
            RevertKind::Sent,
            self.config.sent_timeout(),
        ));
    }

    /// Completion hook: delivery failed.
    pub fn submission_failed(&mut self, error: Option<SubmitError>) {
        if !self.outcome.is_sending() {
            log::warn!("Ignoring submission failure while {:?}", self.outcome);
            return;
        }
        let message = classify_error(error.as_ref(), &self.translations);
        log::debug!("Submission failed: {}", message);
        self.enter_error(message);
    }

    fn enter_error(&mut self, message: String) {
        self.outcome = SubmissionOutcome::Error(message);
        self.timer = Some(RevertTimer::start(
            RevertKind::Error,
            self.config.error_timeout(),
        ));
    }

    // ------------------------------------------------------------------
    // Image attachment
    // ------------------------------------------------------------------

    /// Attach the first of the picked files and start its upload.
    ///
    /// Returns false when nothing was attached.
    pub fn attach_image(&mut self, files: impl IntoIterator<Item = ImageFile>) -> bool {
        if self.config.disabled {
            return false;
        }
        if self.uploading {
            log::warn!("Image upload already in progress");
            return false;
        }
        let Some(file) = files.into_iter().next() else {
            return false;
        };

        log::debug!("Uploading image '{}' ({} bytes)", file.name, file.len());
        let image = AttachedImage::pending(file);
        self.uploading = true;
        if let Some(file) = image.file() {
            self.handler.upload_image(image.id(), file);
        }
        self.draft.image = Some(image);
        true
    }

    /// Whether `id` is the upload currently in flight.
    fn is_current_upload(&self, id: UploadId) -> bool {
        self.uploading && self.draft.image.as_ref().is_some_and(|i| i.id() == id)
    }

    /// Completion hook: upload `id` finished at `url`.
    pub fn image_uploaded(&mut self, id: UploadId, url: &str) {
        if !self.is_current_upload(id) {
            log::warn!("Ignoring completion of stale upload {} ({})", id, url);
            return;
        }
        if url.trim().is_empty() {
            log::error!("`image_uploaded` called with an empty URL");
            self.remove_image();
            return;
        }
        self.uploading = false;
        if let Some(image) = self.draft.image.as_mut() {
            image.complete(url);
        }
    }

    /// Completion hook for dynamic integrations where the URL arrives untyped.
    ///
    /// Anything but a string resets the attachment.
    pub fn image_uploaded_value(&mut self, id: UploadId, url: &Value) {
        match url.as_str() {
            Some(url) => self.image_uploaded(id, url),
            None if self.is_current_upload(id) => {
                log::error!("`url` argument in `image_uploaded` must be a string, got {}", url);
                self.remove_image();
            }
            None => log::warn!("Ignoring completion of stale upload {}", id),
        }
    }

    /// Completion hook: upload `id` failed.
    pub fn image_upload_failed(&mut self, id: UploadId, error: Option<String>) {
        if !self.is_current_upload(id) {
            log::warn!("Ignoring failure of stale upload {}", id);
            return;
        }
        let message = error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| self.translate(TranslationKey::ErrorUpload).to_string());
        self.remove_image();

        if self.outcome.is_sending() {
            log::warn!("Image upload failed during a submission: {}", message);
            return;
        }
        log::debug!("Image upload failed: {}", message);
        self.enter_error(message);
    }

    /// Drop the attachment. Safe when nothing is attached.
    pub fn remove_image(&mut self) {
        self.draft.image = None;
        self.uploading = false;
    }

    // ------------------------------------------------------------------
    // Timers
    // ------------------------------------------------------------------

    /// Expire the pending revert if it is due. Returns true when the outcome changed.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Like [`tick`](Self::tick) with an explicit clock reading.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        match self.timer {
            Some(timer) if timer.is_due(now) => {
                self.timer = None;
                log::debug!("{:?} status expired", timer.kind);
                self.outcome = SubmissionOutcome::Idle;
                true
            }
            _ => false,
        }
    }
}

impl<H: FeedbackHandler> std::fmt::Debug for FeedbackSession<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackSession")
            .field("draft", &self.draft)
            .field("outcome", &self.outcome)
            .field("uploading", &self.uploading)
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{BUG, FEATURE, IMPROVEMENT};
    use crate::config::SubmitPolicy;
    use serde_json::json;
    use std::time::Duration;

    const PAGE: &str = "https://example.com/app?tab=1";

    #[derive(Default)]
    struct RecordingHandler {
        payloads: Vec<OutgoingPayload>,
        uploads: Vec<(UploadId, String)>,
        location: Option<String>,
    }

    impl FeedbackHandler for RecordingHandler {
        fn submit(&mut self, payload: OutgoingPayload) {
            self.payloads.push(payload);
        }

        fn upload_image(&mut self, id: UploadId, file: &ImageFile) {
            self.uploads.push((id, file.name.clone()));
        }

        fn page_location(&self) -> Option<String> {
            self.location.clone()
        }
    }

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn session_with(config: FeedbackConfig) -> FeedbackSession<RecordingHandler> {
        init_logger();
        let handler = RecordingHandler {
            location: Some(PAGE.to_string()),
            ..Default::default()
        };
        FeedbackSession::new(config, handler).unwrap()
    }

    fn session() -> FeedbackSession<RecordingHandler> {
        session_with(FeedbackConfig {
            channel: "#feedback".to_string(),
            ..Default::default()
        })
    }

    fn png(name: &str) -> ImageFile {
        ImageFile::new(name, vec![0x89u8, b'P', b'N', b'G'])
    }

    /// Token of the most recently started upload.
    fn last_upload(s: &FeedbackSession<RecordingHandler>) -> UploadId {
        s.handler().uploads.last().unwrap().0
    }

    fn after(duration: Duration) -> Instant {
        Instant::now() + duration + Duration::from_millis(10)
    }

    #[test]
    fn test_new_session_defaults() {
        let s = session();
        assert_eq!(s.message(), "");
        assert_eq!(s.selected_category(), BUG);
        assert!(s.include_url());
        assert!(s.image().is_none());
        assert!(s.outcome().is_idle());
        assert!(!s.can_submit());
        assert_eq!(s.submit_label(), "Send Feedback");
    }

    #[test]
    fn test_field_setters() {
        let mut s = session();
        s.set_field(FieldUpdate::Message("Hi".to_string()));
        s.set_field(FieldUpdate::Category(FEATURE.to_string()));
        s.set_field(FieldUpdate::IncludeUrl(false));

        assert_eq!(s.message(), "Hi");
        assert_eq!(s.selected_category(), FEATURE);
        assert!(!s.include_url());

        s.toggle_include_url();
        assert!(s.include_url());

        s.select_category("not-configured");
        assert_eq!(s.selected_category(), FEATURE);
    }

    #[test]
    fn test_send_bug_builds_danger_payload_with_url() {
        let mut s = session();
        s.set_field(FieldUpdate::Message("It crashed".to_string()));

        assert_eq!(s.send(), SendOutcome::Submitted(ColorLevel::Danger));
        assert!(s.outcome().is_sending());
        assert_eq!(s.submit_label(), "Sending Feedback...");

        let payload = &s.handler().payloads[0];
        let attachment = payload.attachment().unwrap();
        assert_eq!(payload.channel, "#feedback");
        assert_eq!(payload.username, "Unknown User");
        assert_eq!(attachment.color, ColorLevel::Danger);
        assert_eq!(attachment.title, BUG);
        assert_eq!(attachment.title_link, PAGE);
        assert_eq!(attachment.fallback, "Feedback (bug)");
        assert_eq!(attachment.text, format!("It crashed\n <{}>", PAGE));
        assert_eq!(attachment.image_url, None);
    }

    #[test]
    fn test_send_feature_is_good() {
        let mut s = session();
        s.set_field(FieldUpdate::Message("More please".to_string()));
        s.select_category(FEATURE);
        assert_eq!(s.send(), SendOutcome::Submitted(ColorLevel::Good));
    }

    #[test]
    fn test_send_without_url() {
        let mut s = session();
        s.set_field(FieldUpdate::Message("Plain".to_string()));
        s.toggle_include_url();
        s.send();
        assert_eq!(s.handler().payloads[0].attachments[0].text, "Plain");
    }

    #[test]
    fn test_default_policy_submits_improvement() {
        let mut s = session();
        s.set_field(FieldUpdate::Message("Nicer".to_string()));
        s.select_category(IMPROVEMENT);
        assert_eq!(s.send(), SendOutcome::Submitted(ColorLevel::Warning));
        assert_eq!(s.handler().payloads.len(), 1);
    }

    #[test]
    fn test_legacy_policy_skips_other_categories() {
        let mut s = session_with(FeedbackConfig {
            categories: vec![FeedbackCategory::new("question", "Question")],
            submit_policy: SubmitPolicy::legacy(),
            ..Default::default()
        });

        for category in [IMPROVEMENT, "question"] {
            s.select_category(category);
            s.set_field(FieldUpdate::Message("Hm".to_string()));
            assert_eq!(s.send(), SendOutcome::Skipped(ColorLevel::Warning));
            assert!(s.outcome().is_idle());
        }
        assert!(s.handler().payloads.is_empty());
    }

    #[test]
    fn test_send_rejections() {
        let mut s = session();
        assert_eq!(s.send(), SendOutcome::Rejected(SendRejection::EmptyMessage));

        s.set_field(FieldUpdate::Message("x".to_string()));
        s.send();
        assert_eq!(s.send(), SendOutcome::Rejected(SendRejection::AlreadySending));
        assert_eq!(s.handler().payloads.len(), 1);

        let mut s = session();
        s.set_field(FieldUpdate::Message("x".to_string()));
        s.attach_image([png("a.png")]);
        assert_eq!(s.send(), SendOutcome::Rejected(SendRejection::UploadingImage));

        let mut s = session_with(FeedbackConfig {
            disabled: true,
            ..Default::default()
        });
        s.set_field(FieldUpdate::Message("x".to_string()));
        assert_eq!(s.send(), SendOutcome::Rejected(SendRejection::Disabled));
        assert!(!s.attach_image([png("a.png")]));
    }

    #[test]
    fn test_success_clears_draft_then_reverts() {
        let mut s = session();
        s.set_field(FieldUpdate::Message("Done".to_string()));
        s.attach_image([png("a.png")]);
        s.image_uploaded(last_upload(&s), "https://x/a.png");
        s.send();
        assert_eq!(
            s.handler().payloads[0].attachments[0].image_url.as_deref(),
            Some("https://x/a.png")
        );

        s.submission_succeeded();
        assert!(s.outcome().is_sent());
        assert_eq!(s.message(), "");
        assert!(s.image().is_none());
        assert_eq!(s.submit_label(), "Feedback Sent!");

        assert!(!s.tick_at(Instant::now()));
        assert!(s.outcome().is_sent());

        assert!(s.tick_at(after(s.config().sent_timeout())));
        assert!(s.outcome().is_idle());
        assert_eq!(s.next_deadline(), None);
    }

    #[test]
    fn test_failure_classified_then_reverts() {
        let mut s = session();
        s.set_field(FieldUpdate::Message("Oops".to_string()));
        s.send();
        s.submission_failed(Some(SubmitError::Status(404)));

        assert_eq!(s.outcome().error_message(), Some("Channel not found"));
        assert_eq!(s.submit_label(), "Channel not found");
        assert_eq!(s.message(), "Oops");
        assert!(s.can_submit());

        assert!(!s.tick_at(after(s.config().sent_timeout())));
        assert!(s.tick_at(after(s.config().error_timeout())));
        assert!(s.outcome().is_idle());
    }

    #[test]
    fn test_failure_without_error_is_unexpected() {
        let mut s = session();
        s.set_field(FieldUpdate::Message("Oops".to_string()));
        s.send();
        s.submission_failed(None);
        assert_eq!(
            s.outcome().error_message(),
            Some(s.translate(TranslationKey::ErrorUnexpected))
        );
    }

    #[test]
    fn test_new_send_cancels_pending_revert() {
        let mut s = session();
        s.set_field(FieldUpdate::Message("First".to_string()));
        s.send();
        s.submission_failed(Some(SubmitError::from("nope")));
        assert!(s.next_deadline().is_some());

        s.send();
        assert!(s.outcome().is_sending());
        assert_eq!(s.next_deadline(), None);
        assert!(!s.tick_at(after(s.config().error_timeout())));
        assert!(s.outcome().is_sending());
    }

    #[test]
    fn test_hooks_ignored_when_not_sending() {
        let mut s = session();
        s.submission_succeeded();
        assert!(s.outcome().is_idle());
        s.submission_failed(Some(SubmitError::Status(500)));
        assert!(s.outcome().is_idle());
    }

    #[test]
    fn test_attach_image_uploads_first_file() {
        let mut s = session();
        assert!(s.attach_image([png("first.png"), png("second.png")]));

        assert!(s.is_uploading());
        let names: Vec<_> = s.handler().uploads.iter().map(|(_, n)| n.as_str()).collect();
        assert_eq!(names, vec!["first.png"]);
        assert_eq!(last_upload(&s), s.image().unwrap().id());
        let image = s.image().unwrap();
        assert!(image.file().is_some());
        assert!(!image.is_ready());

        assert!(!s.attach_image([png("third.png")]));
        assert_eq!(s.handler().uploads.len(), 1);
    }

    #[test]
    fn test_attach_empty_selection_is_noop() {
        let mut s = session();
        assert!(!s.attach_image(Vec::new()));
        assert!(s.image().is_none());
        assert!(!s.is_uploading());
    }

    #[test]
    fn test_upload_success_keeps_preview_and_drops_file() {
        let mut s = session();
        s.attach_image([png("shot.png")]);
        let preview = s.image().unwrap().preview().clone();

        s.image_uploaded(last_upload(&s), "https://x/y.png");

        let image = s.image().unwrap();
        assert!(!s.is_uploading());
        assert_eq!(image.preview(), &preview);
        assert_eq!(image.url(), Some("https://x/y.png"));
        assert!(image.file().is_none());
    }

    #[test]
    fn test_upload_success_with_non_string_resets() {
        let mut s = session();
        s.attach_image([png("shot.png")]);

        s.image_uploaded_value(last_upload(&s), &json!({ "url": 42 }));
        assert!(s.image().is_none());
        assert!(!s.is_uploading());

        s.attach_image([png("shot.png")]);
        s.image_uploaded_value(last_upload(&s), &json!("https://x/y.png"));
        assert_eq!(s.image().unwrap().url(), Some("https://x/y.png"));
    }

    #[test]
    fn test_upload_after_removal_is_ignored() {
        let mut s = session();
        s.attach_image([png("shot.png")]);
        s.remove_image();
        s.image_uploaded(last_upload(&s), "https://x/y.png");
        assert!(s.image().is_none());
        assert!(!s.is_uploading());
    }

    #[test]
    fn test_stale_upload_success_does_not_touch_replacement() {
        let mut s = session();
        s.set_field(FieldUpdate::Message("With picture".to_string()));
        s.attach_image([png("a.png")]);
        let first = last_upload(&s);
        s.remove_image();
        s.attach_image([png("b.png")]);
        let second = last_upload(&s);

        s.image_uploaded(first, "https://x/a.png");
        assert!(s.is_uploading());
        assert_eq!(s.image().unwrap().url(), None);
        assert_eq!(s.send(), SendOutcome::Rejected(SendRejection::UploadingImage));

        s.image_uploaded(second, "https://x/b.png");
        assert_eq!(s.image().unwrap().url(), Some("https://x/b.png"));
        s.send();
        assert_eq!(
            s.handler().payloads[0].attachments[0].image_url.as_deref(),
            Some("https://x/b.png")
        );
    }

    #[test]
    fn test_stale_upload_failure_does_not_touch_replacement() {
        let mut s = session();
        s.attach_image([png("a.png")]);
        let first = last_upload(&s);
        s.remove_image();
        s.attach_image([png("b.png")]);

        s.image_upload_failed(first, Some("timeout".to_string()));
        assert!(s.is_uploading());
        assert!(s.image().is_some());
        assert!(s.outcome().is_idle());
        assert_eq!(s.next_deadline(), None);

        s.image_uploaded_value(first, &json!(7));
        assert!(s.image().is_some());
    }

    #[test]
    fn test_repeated_completion_is_ignored() {
        let mut s = session();
        s.attach_image([png("a.png")]);
        let id = last_upload(&s);
        s.image_uploaded(id, "https://x/a.png");
        s.image_upload_failed(id, None);

        assert_eq!(s.image().unwrap().url(), Some("https://x/a.png"));
        assert!(s.outcome().is_idle());
    }

    #[test]
    fn test_upload_failure_resets_and_reverts() {
        let mut s = session();
        s.attach_image([png("shot.png")]);
        s.image_upload_failed(last_upload(&s), None);

        assert!(s.image().is_none());
        assert!(!s.is_uploading());
        assert_eq!(s.outcome().error_message(), Some("Error uploading image!"));

        assert!(s.tick_at(after(s.config().error_timeout())));
        assert!(s.outcome().is_idle());

        s.attach_image([png("shot.png")]);
        s.image_upload_failed(last_upload(&s), Some("Too large".to_string()));
        assert_eq!(s.outcome().error_message(), Some("Too large"));
    }

    #[test]
    fn test_upload_failure_during_send_keeps_sending() {
        let mut s = session();
        s.set_field(FieldUpdate::Message("x".to_string()));
        s.send();
        s.attach_image([png("late.png")]);
        s.image_upload_failed(last_upload(&s), None);

        assert!(s.outcome().is_sending());
        assert!(s.image().is_none());
        s.submission_succeeded();
        assert!(s.outcome().is_sent());
    }

    #[test]
    fn test_remove_image_when_empty_is_noop() {
        let mut s = session();
        let before = s.draft().clone();
        s.remove_image();
        assert_eq!(s.draft(), &before);
        assert!(!s.is_uploading());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = FeedbackConfig {
            error_timeout_ms: 0,
            ..Default::default()
        };
        assert!(FeedbackSession::new(config, RecordingHandler::default()).is_err());
    }
}
