//! Translation lookup for every string the widget displays.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Every key the widget looks up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationKey {
    TypeBug,
    TypeImprovement,
    TypeFeature,
    HeaderTitle,
    Close,
    LabelChannel,
    LabelType,
    LabelMessage,
    Placeholder,
    UploadText,
    ImageRemove,
    CheckboxOption,
    SubmitText,
    SubmitSending,
    SubmitSent,
    TriggerText,
    ErrorUnexpected,
    ErrorBadRequest,
    ErrorForbidden,
    ErrorNotFound,
    ErrorArchived,
    ErrorInternal,
    ErrorUpload,
}

impl TranslationKey {
    /// All keys, in table order.
    pub const ALL: [TranslationKey; 23] = [
        Self::TypeBug,
        Self::TypeImprovement,
        Self::TypeFeature,
        Self::HeaderTitle,
        Self::Close,
        Self::LabelChannel,
        Self::LabelType,
        Self::LabelMessage,
        Self::Placeholder,
        Self::UploadText,
        Self::ImageRemove,
        Self::CheckboxOption,
        Self::SubmitText,
        Self::SubmitSending,
        Self::SubmitSent,
        Self::TriggerText,
        Self::ErrorUnexpected,
        Self::ErrorBadRequest,
        Self::ErrorForbidden,
        Self::ErrorNotFound,
        Self::ErrorArchived,
        Self::ErrorInternal,
        Self::ErrorUpload,
    ];

    /// The dotted key used in translation tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TypeBug => "feedback.type.bug",
            Self::TypeImprovement => "feedback.type.improvement",
            Self::TypeFeature => "feedback.type.feature",
            Self::HeaderTitle => "header.title",
            Self::Close => "close",
            Self::LabelChannel => "label.channel",
            Self::LabelType => "label.type",
            Self::LabelMessage => "label.message",
            Self::Placeholder => "placeholder",
            Self::UploadText => "upload.text",
            Self::ImageRemove => "image.remove",
            Self::CheckboxOption => "checkbox.option",
            Self::SubmitText => "submit.text",
            Self::SubmitSending => "submit.sending",
            Self::SubmitSent => "submit.sent",
            Self::TriggerText => "trigger.text",
            Self::ErrorUnexpected => "error.unexpected",
            Self::ErrorBadRequest => "error.badrequest",
            Self::ErrorForbidden => "error.forbidden",
            Self::ErrorNotFound => "error.notfound",
            Self::ErrorArchived => "error.archived",
            Self::ErrorInternal => "error.internal",
            Self::ErrorUpload => "error.upload",
        }
    }

    fn english(&self) -> &'static str {
        match self {
            Self::TypeBug => "Bug",
            Self::TypeImprovement => "Improvement",
            Self::TypeFeature => "Feature Request",
            Self::HeaderTitle => "Send Feedback to Slack",
            Self::Close => "close",
            Self::LabelChannel => "Channel",
            Self::LabelType => "Feedback Type",
            Self::LabelMessage => "Message",
            Self::Placeholder => "Explain your feedback...",
            Self::UploadText => "Attach Image",
            Self::ImageRemove => "Remove",
            Self::CheckboxOption => "Send URL with Feedback",
            Self::SubmitText => "Send Feedback",
            Self::SubmitSending => "Sending Feedback...",
            Self::SubmitSent => "Feedback Sent!",
            Self::TriggerText => "Slack Feedback",
            Self::ErrorUnexpected => "An unexpected error occurred",
            Self::ErrorBadRequest => "Bad request",
            Self::ErrorForbidden => "Forbidden",
            Self::ErrorNotFound => "Channel not found",
            Self::ErrorArchived => "Channel is archived",
            Self::ErrorInternal => "Internal server error",
            Self::ErrorUpload => "Error uploading image!",
        }
    }
}

/// Key to string table.
///
/// Lookups of keys missing from the table resolve to an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    entries: HashMap<String, String>,
}

impl Translations {
    /// A table with no entries; every lookup yields "".
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Look up a known key.
    pub fn get(&self, key: TranslationKey) -> &str {
        self.get_raw(key.as_str())
    }

    /// Look up a dotted key.
    pub fn get_raw(&self, key: &str) -> &str {
        self.entries.get(key).map(String::as_str).unwrap_or("")
    }

    /// Return a copy with `overrides` layered on top.
    pub fn with_overrides(&self, overrides: &HashMap<String, String>) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Translations {
    /// The English table.
    fn default() -> Self {
        let entries = TranslationKey::ALL
            .iter()
            .map(|key| (key.as_str().to_string(), key.english().to_string()))
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_covers_all_keys() {
        let translations = Translations::default();
        assert_eq!(translations.len(), TranslationKey::ALL.len());
        for key in TranslationKey::ALL {
            assert!(!translations.get(key).is_empty(), "missing {}", key.as_str());
        }
    }

    #[test]
    fn test_missing_key_is_empty_string() {
        let translations = Translations::empty();
        assert_eq!(translations.get(TranslationKey::SubmitText), "");
        assert_eq!(Translations::default().get_raw("no.such.key"), "");
    }

    #[test]
    fn test_overrides_layer_on_top() {
        let mut overrides = HashMap::new();
        overrides.insert("submit.text".to_string(), "Envoyer".to_string());
        let translations = Translations::default().with_overrides(&overrides);

        assert_eq!(translations.get(TranslationKey::SubmitText), "Envoyer");
        assert_eq!(translations.get(TranslationKey::Close), "close");
    }

    #[test]
    fn test_deserialize_from_flat_json() {
        let json = r#"{"header.title": "Feedback", "close": "x"}"#;
        let translations: Translations = serde_json::from_str(json).unwrap();
        assert_eq!(translations.get(TranslationKey::HeaderTitle), "Feedback");
        assert_eq!(translations.get(TranslationKey::Placeholder), "");
    }
}
