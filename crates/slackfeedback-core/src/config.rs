//! Constructor-time configuration for a feedback widget.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::category::{
    BUG, CategoryMerge, FEATURE, FeedbackCategory, default_categories, find_duplicate,
    merge_categories,
};
use crate::error::{ConfigError, ConfigResult};
use crate::theme::Theme;
use crate::translations::Translations;

/// Default time a delivery error stays on screen.
pub const DEFAULT_ERROR_TIMEOUT_MS: u64 = 8_000;
/// Default time the "sent" confirmation stays on screen.
pub const DEFAULT_SENT_TIMEOUT_MS: u64 = 5_000;
/// Default display name of the author.
pub const DEFAULT_USER: &str = "Unknown User";
/// Default avatar emoji.
pub const DEFAULT_EMOJI: &str = ":speaking_head_in_silhouette:";
/// Default attachment footer.
pub const DEFAULT_FOOTER: &str = "Slack Feedback";

/// Which categories actually reach the submission callback.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "categories", rename_all = "snake_case")]
pub enum SubmitPolicy {
    /// Every configured category submits.
    #[default]
    All,
    /// Only the listed category values submit; others are skipped.
    Only(Vec<String>),
}

impl SubmitPolicy {
    /// Only bug reports and feature requests submit.
    pub fn legacy() -> Self {
        Self::Only(vec![BUG.to_string(), FEATURE.to_string()])
    }

    pub fn allows(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(values) => values.iter().any(|v| v == category),
        }
    }
}

/// Widget configuration.
///
/// Every field has a default, so an empty JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Target channel identifier.
    pub channel: String,
    /// Display name of the author.
    pub user: String,
    /// Avatar emoji.
    pub emoji: String,
    /// Attachment footer text.
    pub footer: String,
    /// Entries overriding or extending the default categories.
    pub categories: Vec<FeedbackCategory>,
    /// How `categories` combine with the defaults.
    pub category_merge: CategoryMerge,
    /// Initially selected category value.
    pub default_category: Option<String>,
    /// Show the read-only channel field.
    pub show_channel: bool,
    /// Show the branding icon in the header and trigger.
    pub show_icon: bool,
    pub error_timeout_ms: u64,
    pub sent_timeout_ms: u64,
    /// Render nothing and ignore all input.
    pub disabled: bool,
    pub submit_policy: SubmitPolicy,
    /// Overrides layered on the English table.
    ///
    /// A partial table only replaces the keys it names; every other key
    /// keeps its English string rather than resolving to "".
    pub translations: HashMap<String, String>,
    /// Overrides deep-merged over the default theme.
    pub theme: Value,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            channel: String::new(),
            user: DEFAULT_USER.to_string(),
            emoji: DEFAULT_EMOJI.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
            categories: Vec::new(),
            category_merge: CategoryMerge::default(),
            default_category: None,
            show_channel: true,
            show_icon: true,
            error_timeout_ms: DEFAULT_ERROR_TIMEOUT_MS,
            sent_timeout_ms: DEFAULT_SENT_TIMEOUT_MS,
            disabled: false,
            submit_policy: SubmitPolicy::default(),
            translations: HashMap::new(),
            theme: Value::Null,
        }
    }
}

impl FeedbackConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(value) = find_duplicate(&self.categories) {
            return Err(ConfigError::DuplicateCategory(value.to_string()));
        }
        let merged = self.resolve_categories(&self.resolve_translations());
        if let Some(value) = find_duplicate(&merged) {
            return Err(ConfigError::DuplicateCategory(value.to_string()));
        }
        if self.error_timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout("error_timeout_ms"));
        }
        if self.sent_timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout("sent_timeout_ms"));
        }
        self.resolve_theme()?;
        Ok(())
    }

    /// English table with this config's overrides applied.
    pub fn resolve_translations(&self) -> Translations {
        Translations::default().with_overrides(&self.translations)
    }

    /// Default categories with this config's entries merged in.
    pub fn resolve_categories(&self, translations: &Translations) -> Vec<FeedbackCategory> {
        merge_categories(
            default_categories(translations),
            &self.categories,
            self.category_merge,
        )
    }

    /// Default theme with this config's overrides merged in.
    pub fn resolve_theme(&self) -> ConfigResult<Theme> {
        Theme::default().with_overrides(&self.theme)
    }

    /// Category selected when the draft is created.
    ///
    /// Falls back to the first entry when the configured default is unknown.
    pub fn initial_category(&self, categories: &[FeedbackCategory]) -> String {
        let first = categories
            .first()
            .map(|c| c.value.clone())
            .unwrap_or_else(|| BUG.to_string());

        match &self.default_category {
            Some(value) if categories.iter().any(|c| &c.value == value) => value.clone(),
            Some(value) => {
                log::warn!(
                    "Unknown default category '{}', falling back to '{}'",
                    value,
                    first
                );
                first
            }
            None => first,
        }
    }

    pub fn error_timeout(&self) -> Duration {
        Duration::from_millis(self.error_timeout_ms)
    }

    pub fn sent_timeout(&self) -> Duration {
        Duration::from_millis(self.sent_timeout_ms)
    }

    /// The channel readout is hidden when no channel is configured.
    pub fn channel_visible(&self) -> bool {
        self.show_channel && !self.channel.is_empty()
    }
}
