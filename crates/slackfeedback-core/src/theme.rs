//! Widget theme and structural deep merge of caller overrides.
//!
//! Colours are `#rrggbb` strings so a theme can be written in JSON and
//! consumed by any renderer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, ConfigResult};

/// Collapsed trigger button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerTheme {
    pub background: String,
    pub hover_background: String,
    pub text: String,
    pub border: String,
}

impl Default for TriggerTheme {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            hover_background: "#f5f5f5".to_string(),
            text: "#3c3c3c".to_string(),
            border: "#dcdcdc".to_string(),
        }
    }
}

/// Panel header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderTheme {
    pub background: String,
    pub text: String,
}

impl Default for HeaderTheme {
    fn default() -> Self {
        Self {
            background: "#4a154b".to_string(),
            text: "#ffffff".to_string(),
        }
    }
}

/// Panel body and form elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentTheme {
    pub background: String,
    pub text: String,
    pub muted_text: String,
    pub border: String,
    pub input_background: String,
}

impl Default for ContentTheme {
    fn default() -> Self {
        Self {
            background: "#fafafc".to_string(),
            text: "#3c3c3c".to_string(),
            muted_text: "#787878".to_string(),
            border: "#dcdcdc".to_string(),
            input_background: "#ffffff".to_string(),
        }
    }
}

/// Category tabs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsTheme {
    pub background: String,
    pub hover_background: String,
    pub selected_background: String,
    pub text: String,
    pub selected_text: String,
}

impl Default for TabsTheme {
    fn default() -> Self {
        Self {
            background: "#f5f5f5".to_string(),
            hover_background: "#ebebeb".to_string(),
            selected_background: "#3b82f6".to_string(),
            text: "#505050".to_string(),
            selected_text: "#ffffff".to_string(),
        }
    }
}

/// Submit button in each outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitTheme {
    pub background: String,
    pub disabled_background: String,
    pub sent_background: String,
    pub error_background: String,
    pub text: String,
}

impl Default for SubmitTheme {
    fn default() -> Self {
        Self {
            background: "#3b82f6".to_string(),
            disabled_background: "#b4b4b4".to_string(),
            sent_background: "#22c55e".to_string(),
            error_background: "#ef4444".to_string(),
            text: "#ffffff".to_string(),
        }
    }
}

/// Image upload button and preview overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageTheme {
    pub upload_background: String,
    pub upload_text: String,
    pub overlay_text: String,
    pub preview_height: f32,
}

impl Default for ImageTheme {
    fn default() -> Self {
        Self {
            upload_background: "#f5f5f5".to_string(),
            upload_text: "#505050".to_string(),
            overlay_text: "#ffffff".to_string(),
            preview_height: 120.0,
        }
    }
}

/// Full widget theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub width: f32,
    pub font_size: f32,
    pub corner_radius: u8,
    pub trigger: TriggerTheme,
    pub header: HeaderTheme,
    pub content: ContentTheme,
    pub tabs: TabsTheme,
    pub submit: SubmitTheme,
    pub image: ImageTheme,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            width: 360.0,
            font_size: 13.0,
            corner_radius: 8,
            trigger: TriggerTheme::default(),
            header: HeaderTheme::default(),
            content: ContentTheme::default(),
            tabs: TabsTheme::default(),
            submit: SubmitTheme::default(),
            image: ImageTheme::default(),
        }
    }
}

impl Theme {
    /// Deep-merge `overrides` over this theme.
    ///
    /// `Value::Null` leaves the theme unchanged.
    pub fn with_overrides(&self, overrides: &Value) -> ConfigResult<Theme> {
        if overrides.is_null() {
            return Ok(self.clone());
        }
        let mut base =
            serde_json::to_value(self).map_err(|e| ConfigError::InvalidTheme(e.to_string()))?;
        deep_merge(&mut base, overrides.clone());
        serde_json::from_value(base).map_err(|e| ConfigError::InvalidTheme(e.to_string()))
    }
}

/// Recursively merge `overlay` into `base`.
///
/// Objects merge key by key at every depth; any other overlay value
/// replaces the base value outright.
pub fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deep_merge_nested_keys() {
        let mut base = json!({
            "a": { "x": 1, "y": 2 },
            "b": "keep",
        });
        deep_merge(&mut base, json!({ "a": { "y": 20, "z": 30 }, "c": true }));

        assert_eq!(
            base,
            json!({
                "a": { "x": 1, "y": 20, "z": 30 },
                "b": "keep",
                "c": true,
            })
        );
    }

    #[test]
    fn test_deep_merge_scalar_replaces_object() {
        let mut base = json!({ "a": { "x": 1 } });
        deep_merge(&mut base, json!({ "a": 5 }));
        assert_eq!(base, json!({ "a": 5 }));
    }

    #[test]
    fn test_theme_override_keeps_siblings() {
        let theme = Theme::default()
            .with_overrides(&json!({ "submit": { "background": "#000000" }, "width": 400.0 }))
            .unwrap();

        assert_eq!(theme.submit.background, "#000000");
        assert_eq!(theme.submit.text, SubmitTheme::default().text);
        assert_eq!(theme.header, HeaderTheme::default());
        assert_eq!(theme.width, 400.0);
    }

    #[test]
    fn test_theme_override_wrong_type_is_error() {
        let result = Theme::default().with_overrides(&json!({ "width": "wide" }));
        assert!(matches!(result, Err(ConfigError::InvalidTheme(_))));
    }

    #[test]
    fn test_theme_null_override_is_identity() {
        let theme = Theme::default().with_overrides(&Value::Null).unwrap();
        assert_eq!(theme, Theme::default());
    }
}
