//! Theme colours resolved to egui colours.

use egui::Color32;
use slackfeedback_core::{ConfigResult, FeedbackConfig, Theme};

/// Parse a CSS hex colour (`#rgb`, `#rrggbb` or `#rrggbbaa`).
pub fn parse_css_color(color: &str) -> Option<Color32> {
    let hex = color.strip_prefix('#').filter(|h| h.is_ascii())?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            let r = digits.next()??;
            let g = digits.next()??;
            let b = digits.next()??;
            Some(Color32::from_rgb(r, g, b))
        }
        6 => Some(Color32::from_rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        8 => Some(Color32::from_rgba_unmultiplied(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])?,
        )),
        _ => None,
    }
}

fn resolve(color: &str, field: &str) -> Color32 {
    parse_css_color(color).unwrap_or_else(|| {
        log::warn!("Invalid theme colour '{}' for {}, using gray", color, field);
        Color32::from_rgb(128, 128, 128)
    })
}

/// Every colour and metric the widget paints with.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub width: f32,
    pub font_size: f32,
    pub corner_radius: u8,
    pub preview_height: f32,

    pub trigger_bg: Color32,
    pub trigger_hover_bg: Color32,
    pub trigger_text: Color32,
    pub trigger_border: Color32,

    pub header_bg: Color32,
    pub header_text: Color32,

    pub content_bg: Color32,
    pub text: Color32,
    pub text_muted: Color32,
    pub border: Color32,
    pub input_bg: Color32,

    pub tab_bg: Color32,
    pub tab_hover_bg: Color32,
    pub tab_selected_bg: Color32,
    pub tab_text: Color32,
    pub tab_selected_text: Color32,

    pub submit_bg: Color32,
    pub submit_disabled_bg: Color32,
    pub submit_sent_bg: Color32,
    pub submit_error_bg: Color32,
    pub submit_text: Color32,

    pub upload_bg: Color32,
    pub upload_text: Color32,
    pub overlay_text: Color32,
}

impl Palette {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            width: theme.width,
            font_size: theme.font_size,
            corner_radius: theme.corner_radius,
            preview_height: theme.image.preview_height,

            trigger_bg: resolve(&theme.trigger.background, "trigger.background"),
            trigger_hover_bg: resolve(&theme.trigger.hover_background, "trigger.hover_background"),
            trigger_text: resolve(&theme.trigger.text, "trigger.text"),
            trigger_border: resolve(&theme.trigger.border, "trigger.border"),

            header_bg: resolve(&theme.header.background, "header.background"),
            header_text: resolve(&theme.header.text, "header.text"),

            content_bg: resolve(&theme.content.background, "content.background"),
            text: resolve(&theme.content.text, "content.text"),
            text_muted: resolve(&theme.content.muted_text, "content.muted_text"),
            border: resolve(&theme.content.border, "content.border"),
            input_bg: resolve(&theme.content.input_background, "content.input_background"),

            tab_bg: resolve(&theme.tabs.background, "tabs.background"),
            tab_hover_bg: resolve(&theme.tabs.hover_background, "tabs.hover_background"),
            tab_selected_bg: resolve(&theme.tabs.selected_background, "tabs.selected_background"),
            tab_text: resolve(&theme.tabs.text, "tabs.text"),
            tab_selected_text: resolve(&theme.tabs.selected_text, "tabs.selected_text"),

            submit_bg: resolve(&theme.submit.background, "submit.background"),
            submit_disabled_bg: resolve(
                &theme.submit.disabled_background,
                "submit.disabled_background",
            ),
            submit_sent_bg: resolve(&theme.submit.sent_background, "submit.sent_background"),
            submit_error_bg: resolve(&theme.submit.error_background, "submit.error_background"),
            submit_text: resolve(&theme.submit.text, "submit.text"),

            upload_bg: resolve(&theme.image.upload_background, "image.upload_background"),
            upload_text: resolve(&theme.image.upload_text, "image.upload_text"),
            overlay_text: resolve(&theme.image.overlay_text, "image.overlay_text"),
        }
    }

    /// Palette for a config's merged theme.
    pub fn from_config(config: &FeedbackConfig) -> ConfigResult<Self> {
        Ok(Self::from_theme(&config.resolve_theme()?))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}
