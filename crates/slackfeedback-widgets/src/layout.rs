//! Layout helpers: frames, separators, form labels.

use egui::{Color32, CornerRadius, Frame, Margin, Stroke, Ui};

use crate::colors::Palette;

/// Outer frame of the open panel, with shadow.
pub fn panel_frame(palette: &Palette) -> Frame {
    Frame::new()
        .fill(palette.content_bg)
        .corner_radius(CornerRadius::same(palette.corner_radius))
        .stroke(Stroke::new(1.0, palette.border))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 12,
            offset: [0, 4],
            color: Color32::from_black_alpha(30),
        })
}

/// Coloured header strip at the top of the panel.
pub fn header_frame(palette: &Palette) -> Frame {
    let r = palette.corner_radius;
    Frame::new()
        .fill(palette.header_bg)
        .corner_radius(CornerRadius {
            nw: r,
            ne: r,
            sw: 0,
            se: 0,
        })
        .inner_margin(Margin::symmetric(12, 10))
}

/// Padding around the form body.
pub fn content_frame() -> Frame {
    Frame::new().inner_margin(Margin::same(12))
}

/// Draw a horizontal separator line.
pub fn separator(ui: &mut Ui, palette: &Palette) {
    let rect = ui.available_rect_before_wrap();
    let y = rect.top() + 4.0;
    ui.painter().line_segment(
        [
            egui::Pos2::new(rect.left(), y),
            egui::Pos2::new(rect.right(), y),
        ],
        Stroke::new(1.0, palette.border),
    );
    ui.add_space(8.0);
}

/// Draw a form label (small, muted text).
pub fn field_label(ui: &mut Ui, text: &str, palette: &Palette) {
    ui.label(
        egui::RichText::new(text)
            .size(palette.font_size - 2.0)
            .strong()
            .color(palette.text_muted),
    );
    ui.add_space(2.0);
}
