//! Feedback categories and the Slack colour level derived from them.

use serde::{Deserialize, Serialize};

use crate::translations::{TranslationKey, Translations};

/// Built-in category value for bug reports.
pub const BUG: &str = "bug";
/// Built-in category value for improvements.
pub const IMPROVEMENT: &str = "improvement";
/// Built-in category value for feature requests.
pub const FEATURE: &str = "feature";

/// A selectable feedback category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackCategory {
    /// Stable identifier, also used as the attachment title.
    pub value: String,
    /// Display string for the category tab.
    pub label: String,
}

impl FeedbackCategory {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Slack accepts three attachment colours: danger (red), good (green) and warning (orange).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorLevel {
    Danger,
    Good,
    Warning,
}

impl ColorLevel {
    /// Colour level for a category value. Anything but bug or feature is a warning.
    pub fn for_category(value: &str) -> Self {
        match value {
            BUG => Self::Danger,
            FEATURE => Self::Good,
            _ => Self::Warning,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Good => "good",
            Self::Warning => "warning",
        }
    }
}

/// The three default categories with labels resolved from `translations`.
pub fn default_categories(translations: &Translations) -> Vec<FeedbackCategory> {
    vec![
        FeedbackCategory::new(BUG, translations.get(TranslationKey::TypeBug)),
        FeedbackCategory::new(
            IMPROVEMENT,
            translations.get(TranslationKey::TypeImprovement),
        ),
        FeedbackCategory::new(FEATURE, translations.get(TranslationKey::TypeFeature)),
    ]
}

/// How caller categories combine with the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryMerge {
    /// Entry `i` replaces default `i`; entries past the defaults are appended.
    #[default]
    Position,
    /// An entry whose value matches a default replaces its label in place;
    /// any other entry is appended.
    Value,
}

/// Overlay caller entries on the defaults.
pub fn merge_categories(
    defaults: Vec<FeedbackCategory>,
    custom: &[FeedbackCategory],
    mode: CategoryMerge,
) -> Vec<FeedbackCategory> {
    let mut merged = defaults;
    match mode {
        CategoryMerge::Position => {
            for (i, entry) in custom.iter().enumerate() {
                match merged.get_mut(i) {
                    Some(slot) => *slot = entry.clone(),
                    None => merged.push(entry.clone()),
                }
            }
        }
        CategoryMerge::Value => {
            for entry in custom {
                match merged.iter_mut().find(|c| c.value == entry.value) {
                    Some(existing) => existing.label = entry.label.clone(),
                    None => merged.push(entry.clone()),
                }
            }
        }
    }
    merged
}

/// First value that appears more than once, if any.
pub fn find_duplicate(categories: &[FeedbackCategory]) -> Option<&str> {
    categories.iter().enumerate().find_map(|(i, c)| {
        categories[..i]
            .iter()
            .any(|earlier| earlier.value == c.value)
            .then_some(c.value.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_level_mapping() {
        assert_eq!(ColorLevel::for_category(BUG), ColorLevel::Danger);
        assert_eq!(ColorLevel::for_category(FEATURE), ColorLevel::Good);
        assert_eq!(ColorLevel::for_category(IMPROVEMENT), ColorLevel::Warning);
        assert_eq!(ColorLevel::for_category("question"), ColorLevel::Warning);
    }

    #[test]
    fn test_color_level_serializes_lowercase() {
        let json = serde_json::to_string(&ColorLevel::Danger).unwrap();
        assert_eq!(json, "\"danger\"");
        assert_eq!(ColorLevel::Good.as_str(), "good");
    }

    #[test]
    fn test_default_categories_use_translations() {
        let categories = default_categories(&Translations::default());
        let values: Vec<_> = categories.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec![BUG, IMPROVEMENT, FEATURE]);
        assert_eq!(categories[0].label, "Bug");
    }

    #[test]
    fn test_merge_by_position_replaces_slots() {
        let defaults = default_categories(&Translations::default());
        let custom = vec![FeedbackCategory::new("question", "Question")];
        let merged = merge_categories(defaults, &custom, CategoryMerge::Position);

        let values: Vec<_> = merged.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["question", IMPROVEMENT, FEATURE]);
    }

    #[test]
    fn test_merge_by_position_appends_past_defaults() {
        let defaults = default_categories(&Translations::default());
        let custom = vec![
            FeedbackCategory::new(BUG, "Defect"),
            FeedbackCategory::new(IMPROVEMENT, "Polish"),
            FeedbackCategory::new(FEATURE, "Idea"),
            FeedbackCategory::new("question", "Question"),
        ];
        let merged = merge_categories(defaults, &custom, CategoryMerge::Position);
        assert_eq!(merged, custom);
    }

    #[test]
    fn test_merge_by_position_can_repeat_a_default() {
        let defaults = default_categories(&Translations::default());
        let custom = vec![FeedbackCategory::new(FEATURE, "Idea")];
        let merged = merge_categories(defaults, &custom, CategoryMerge::Position);
        assert_eq!(find_duplicate(&merged), Some(FEATURE));
    }

    #[test]
    fn test_merge_by_value_overrides_label_and_appends() {
        let defaults = default_categories(&Translations::default());
        let custom = vec![
            FeedbackCategory::new(BUG, "Defect"),
            FeedbackCategory::new("question", "Question"),
        ];
        let merged = merge_categories(defaults, &custom, CategoryMerge::Value);

        assert_eq!(merged.len(), 4);
        assert_eq!(merged[0], FeedbackCategory::new(BUG, "Defect"));
        assert_eq!(merged[3].value, "question");
    }

    #[test]
    fn test_category_merge_deserializes_snake_case() {
        let mode: CategoryMerge = serde_json::from_str("\"value\"").unwrap();
        assert_eq!(mode, CategoryMerge::Value);
        assert_eq!(CategoryMerge::default(), CategoryMerge::Position);
    }

    #[test]
    fn test_find_duplicate() {
        let unique = vec![
            FeedbackCategory::new("a", "A"),
            FeedbackCategory::new("b", "B"),
        ];
        assert_eq!(find_duplicate(&unique), None);

        let dup = vec![
            FeedbackCategory::new("a", "A"),
            FeedbackCategory::new("b", "B"),
            FeedbackCategory::new("a", "Again"),
        ];
        assert_eq!(find_duplicate(&dup), Some("a"));
    }
}
