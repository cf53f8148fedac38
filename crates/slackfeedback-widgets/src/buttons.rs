//! Button components: category tabs, submit button, trigger, text links.

use egui::{
    vec2, Align2, Color32, CornerRadius, CursorIcon, FontId, Pos2, Rect, Sense, Stroke,
    StrokeKind, Ui, Vec2,
};

use crate::colors::Palette;

/// A category tab. Solid accent background when selected.
pub struct CategoryTab<'a> {
    label: &'a str,
    selected: bool,
    palette: &'a Palette,
}

const TAB_HEIGHT: f32 = 26.0;

impl<'a> CategoryTab<'a> {
    pub fn new(label: &'a str, selected: bool, palette: &'a Palette) -> Self {
        Self {
            label,
            selected,
            palette,
        }
    }

    /// Show the tab and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font_id = FontId::proportional(self.palette.font_size - 1.0);
        let galley = ui.painter().layout_no_wrap(
            self.label.to_string(),
            font_id.clone(),
            Color32::PLACEHOLDER,
        );
        let size = vec2(galley.size().x + 20.0, TAB_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                self.palette.tab_selected_bg
            } else if response.hovered() {
                self.palette.tab_hover_bg
            } else {
                self.palette.tab_bg
            };
            let text_color = if self.selected {
                self.palette.tab_selected_text
            } else {
                self.palette.tab_text
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(4), bg_color);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                font_id,
                text_color,
            );
        }

        let clicked = response.clicked();
        response
            .on_hover_text(self.label)
            .on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// Visual state of the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTone {
    Normal,
    Sent,
    Error,
}

/// Full-width submit button whose colour follows the submission outcome.
pub struct SubmitButton<'a> {
    label: &'a str,
    enabled: bool,
    tone: SubmitTone,
    palette: &'a Palette,
}

impl<'a> SubmitButton<'a> {
    pub fn new(label: &'a str, palette: &'a Palette) -> Self {
        Self {
            label,
            enabled: true,
            tone: SubmitTone::Normal,
            palette,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn tone(mut self, tone: SubmitTone) -> Self {
        self.tone = tone;
        self
    }

    /// Show the button and return true if clicked while enabled.
    pub fn show(self, ui: &mut Ui) -> bool {
        let size = vec2(ui.available_width(), 34.0);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            // Sent and error colours win over the disabled look.
            let mut bg_color = match self.tone {
                SubmitTone::Sent => self.palette.submit_sent_bg,
                SubmitTone::Error => self.palette.submit_error_bg,
                SubmitTone::Normal if !self.enabled => self.palette.submit_disabled_bg,
                SubmitTone::Normal => self.palette.submit_bg,
            };
            if self.enabled && response.hovered() {
                bg_color = bg_color.gamma_multiply(0.9);
            }

            ui.painter().rect_filled(
                rect,
                CornerRadius::same(self.palette.corner_radius.min(6)),
                bg_color,
            );
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                FontId::proportional(self.palette.font_size),
                self.palette.submit_text,
            );
        }

        let clicked = self.enabled && response.clicked();
        let cursor = if self.enabled {
            CursorIcon::PointingHand
        } else {
            CursorIcon::NotAllowed
        };
        response.on_hover_cursor(cursor);
        clicked
    }
}

/// The collapsed trigger affordance.
pub struct TriggerButton<'a> {
    label: &'a str,
    show_icon: bool,
    palette: &'a Palette,
}

impl<'a> TriggerButton<'a> {
    pub fn new(label: &'a str, palette: &'a Palette) -> Self {
        Self {
            label,
            show_icon: true,
            palette,
        }
    }

    pub fn show_icon(mut self, show_icon: bool) -> Self {
        self.show_icon = show_icon;
        self
    }

    /// Show the trigger and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font_id = FontId::proportional(self.palette.font_size);
        let galley = ui.painter().layout_no_wrap(
            self.label.to_string(),
            font_id.clone(),
            Color32::PLACEHOLDER,
        );
        let icon_space = if self.show_icon { 22.0 } else { 0.0 };
        let size = vec2(galley.size().x + icon_space + 24.0, 36.0);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.hovered() {
                self.palette.trigger_hover_bg
            } else {
                self.palette.trigger_bg
            };
            let radius = CornerRadius::same(self.palette.corner_radius);
            ui.painter().rect_filled(rect, radius, bg_color);
            ui.painter().rect_stroke(
                rect,
                radius,
                Stroke::new(1.0, self.palette.trigger_border),
                StrokeKind::Inside,
            );

            let mut text_left = rect.left() + 12.0;
            if self.show_icon {
                let icon_rect = Rect::from_center_size(
                    Pos2::new(text_left + 8.0, rect.center().y),
                    Vec2::splat(16.0),
                );
                paint_slack_icon(ui, icon_rect);
                text_left += icon_space;
            }

            ui.painter().text(
                Pos2::new(text_left, rect.center().y),
                Align2::LEFT_CENTER,
                self.label,
                font_id,
                self.palette.trigger_text,
            );
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// Dashed-outline button asking the host to pick an image.
pub fn upload_button(ui: &mut Ui, label: &str, palette: &Palette) -> bool {
    let size = vec2(ui.available_width(), 30.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let bg_color = if response.hovered() {
            palette.tab_hover_bg
        } else {
            palette.upload_bg
        };
        ui.painter().rect_filled(rect, CornerRadius::same(4), bg_color);

        let stroke = Stroke::new(1.0, palette.border);
        let dash = 6.0;
        let gap = 4.0;
        for (a, b) in [
            (rect.left_top(), rect.right_top()),
            (rect.left_bottom(), rect.right_bottom()),
        ] {
            let shapes = egui::Shape::dashed_line(&[a, b], stroke, dash, gap);
            ui.painter().extend(shapes);
        }

        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(palette.font_size - 1.0),
            palette.upload_text,
        );
    }

    let clicked = response.clicked();
    response.on_hover_cursor(CursorIcon::PointingHand);
    clicked
}

/// Plain clickable text (close, remove image). Underlined on hover.
pub fn text_link(ui: &mut Ui, label: &str, color: Color32, font_size: f32) -> bool {
    let font_id = FontId::proportional(font_size);
    let galley = ui
        .painter()
        .layout_no_wrap(label.to_string(), font_id.clone(), color);
    let (rect, response) = ui.allocate_exact_size(galley.size(), Sense::click());

    if ui.is_rect_visible(rect) {
        ui.painter()
            .text(rect.left_center(), Align2::LEFT_CENTER, label, font_id, color);
        if response.hovered() {
            ui.painter().line_segment(
                [rect.left_bottom(), rect.right_bottom()],
                Stroke::new(1.0, color),
            );
        }
    }

    let clicked = response.clicked();
    response.on_hover_cursor(CursorIcon::PointingHand);
    clicked
}

/// Paint the four-colour Slack mark into `rect`.
pub fn paint_slack_icon(ui: &Ui, rect: Rect) {
    const BLUE: Color32 = Color32::from_rgb(54, 197, 240);
    const GREEN: Color32 = Color32::from_rgb(46, 182, 125);
    const YELLOW: Color32 = Color32::from_rgb(236, 178, 46);
    const RED: Color32 = Color32::from_rgb(224, 30, 90);

    let w = rect.width();
    let bar = w * 0.22;
    let radius = CornerRadius::same((bar / 2.0) as u8);
    let painter = ui.painter();

    // Two vertical and two horizontal bars forming a hash.
    let bars = [
        (Rect::from_min_size(rect.min + vec2(w * 0.25, 0.0), vec2(bar, w * 0.72)), RED),
        (Rect::from_min_size(rect.min + vec2(0.0, w * 0.53), vec2(w * 0.72, bar)), YELLOW),
        (Rect::from_min_size(rect.min + vec2(w * 0.53, w * 0.28), vec2(bar, w * 0.72)), GREEN),
        (Rect::from_min_size(rect.min + vec2(w * 0.28, w * 0.25), vec2(w * 0.72, bar)), BLUE),
    ];
    for (bar_rect, color) in bars {
        painter.rect_filled(bar_rect, radius, color);
    }
}
