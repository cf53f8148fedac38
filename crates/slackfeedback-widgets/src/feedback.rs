//! The feedback widget: a trigger button and, when open, the form panel.
//!
//! Rendering reads the session every frame and routes user input back into
//! it. Picking an image is left to the host, which sees
//! [`WidgetResponse::pick_image_requested`] and calls
//! `FeedbackSession::attach_image` with whatever its file picker returned.

use egui::{
    Align, Align2, Area, Color32, Context, CornerRadius, FontId, Id, LayerId, Layout, Order,
    Pos2, Rect, RichText, Sense, TextEdit, Ui, Vec2, vec2,
};
use slackfeedback_core::{
    FeedbackHandler, FeedbackSession, FieldUpdate, Instant, InteractionEvent, SendOutcome,
    SubmissionOutcome, TranslationKey, VisibilityController,
};

use crate::buttons::{
    CategoryTab, SubmitButton, SubmitTone, TriggerButton, paint_slack_icon, text_link,
    upload_button,
};
use crate::colors::Palette;
use crate::layout::{content_frame, field_label, header_frame, panel_frame, separator};

/// What happened during one frame of the widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetResponse {
    /// Screen region of the widget, `None` when nothing was rendered.
    pub rect: Option<Rect>,
    /// The user asked to attach an image.
    pub pick_image_requested: bool,
    /// Result of a submit click, if one happened.
    pub send: Option<SendOutcome>,
}

/// Builder for one frame of the feedback widget.
pub struct FeedbackWidget<'a, H: FeedbackHandler> {
    session: &'a mut FeedbackSession<H>,
    visibility: &'a mut VisibilityController,
    palette: &'a Palette,
    id: Id,
    anchor: Align2,
    offset: Vec2,
    image_upload: bool,
}

impl<'a, H: FeedbackHandler> FeedbackWidget<'a, H> {
    pub fn new(
        session: &'a mut FeedbackSession<H>,
        visibility: &'a mut VisibilityController,
        palette: &'a Palette,
    ) -> Self {
        Self {
            session,
            visibility,
            palette,
            id: Id::new("slack_feedback"),
            anchor: Align2::RIGHT_BOTTOM,
            offset: vec2(-16.0, -16.0),
            image_upload: true,
        }
    }

    /// Use a distinct id when showing several widgets.
    pub fn id(mut self, id: impl std::hash::Hash) -> Self {
        self.id = Id::new(id);
        self
    }

    /// Screen corner the widget is pinned to.
    pub fn anchor(mut self, anchor: Align2, offset: Vec2) -> Self {
        self.anchor = anchor;
        self.offset = offset;
        self
    }

    /// Show or hide the image attachment row.
    pub fn image_upload(mut self, enabled: bool) -> Self {
        self.image_upload = enabled;
        self
    }

    /// Render the widget for this frame.
    pub fn show(self, ctx: &Context) -> WidgetResponse {
        let Self {
            session,
            visibility,
            palette,
            id,
            anchor,
            offset,
            image_upload,
        } = self;

        let mut response = WidgetResponse::default();
        if session.is_disabled() {
            return response;
        }

        if session.tick() {
            ctx.request_repaint();
        }
        if let Some(deadline) = session.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }

        let area = Area::new(id)
            .anchor(anchor, offset)
            .order(Order::Foreground)
            .show(ctx, |ui| {
                ui.with_layout(Layout::top_down(Align::Max), |ui| {
                    if visibility.is_open() {
                        let close = show_panel(ui, session, palette, image_upload, &mut response);
                        if close {
                            visibility.close();
                        }
                        ui.add_space(8.0);
                    }

                    let label = session.translate(TranslationKey::TriggerText);
                    let trigger = TriggerButton::new(label, palette)
                        .show_icon(session.config().show_icon)
                        .show(ui);
                    if trigger {
                        visibility.toggle();
                    }
                });
            });

        let rect = area.response.rect;
        let own_layer = area.response.layer_id;
        response.rect = Some(rect);

        if visibility.is_listening() {
            let (clicked, pos) = ctx.input(|i| (i.pointer.any_click(), i.pointer.interact_pos()));
            let consumed =
                pos.is_some_and(|p| claimed_by_other_layer(ctx.layer_id_at(p), own_layer));
            if let Some(event) = pointer_interaction(rect, clicked, pos, consumed) {
                visibility.handle_outside_interaction(event);
            }
        }

        response
    }
}

/// Translate this frame's pointer state into an interaction for the controller.
///
/// `consumed` marks a click that another surface already handled.
pub fn pointer_interaction(
    root: Rect,
    clicked: bool,
    pos: Option<Pos2>,
    consumed: bool,
) -> Option<InteractionEvent> {
    if !clicked {
        return None;
    }
    Some(InteractionEvent {
        consumed,
        inside: pos.is_some_and(|p| root.contains(p)),
    })
}

/// Whether the topmost layer under the pointer is a window or popup other
/// than the widget. Background panels do not count.
pub fn claimed_by_other_layer(hit: Option<LayerId>, own: LayerId) -> bool {
    hit.is_some_and(|layer| layer != own && layer.order != Order::Background)
}

/// Returns true when the close link was clicked.
fn show_panel<H: FeedbackHandler>(
    ui: &mut Ui,
    session: &mut FeedbackSession<H>,
    palette: &Palette,
    image_upload: bool,
    response: &mut WidgetResponse,
) -> bool {
    let mut close = false;
    panel_frame(palette).show(ui, |ui| {
        ui.set_width(palette.width);
        ui.with_layout(Layout::top_down(Align::Min), |ui| {
            close = show_header(ui, session, palette);
            content_frame().show(ui, |ui| {
                show_form(ui, session, palette, image_upload, response);
            });
        });
    });
    close
}

fn show_header<H: FeedbackHandler>(
    ui: &mut Ui,
    session: &FeedbackSession<H>,
    palette: &Palette,
) -> bool {
    let mut close = false;
    header_frame(palette).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            if session.config().show_icon {
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(16.0), Sense::hover());
                paint_slack_icon(ui, rect);
            }
            ui.label(
                RichText::new(session.translate(TranslationKey::HeaderTitle))
                    .size(palette.font_size + 1.0)
                    .strong()
                    .color(palette.header_text),
            );
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                close = text_link(
                    ui,
                    session.translate(TranslationKey::Close),
                    palette.header_text,
                    palette.font_size - 1.0,
                );
            });
        });
    });
    close
}

fn show_form<H: FeedbackHandler>(
    ui: &mut Ui,
    session: &mut FeedbackSession<H>,
    palette: &Palette,
    image_upload: bool,
    response: &mut WidgetResponse,
) {
    ui.spacing_mut().item_spacing.y = 6.0;

    if session.config().channel_visible() {
        field_label(ui, session.translate(TranslationKey::LabelChannel), palette);
        let mut channel = session.config().channel.clone();
        ui.add_enabled(
            false,
            TextEdit::singleline(&mut channel).desired_width(f32::INFINITY),
        );
    }

    field_label(ui, session.translate(TranslationKey::LabelType), palette);
    let mut picked = None;
    ui.horizontal_wrapped(|ui| {
        for category in session.categories() {
            let selected = category.value == session.selected_category();
            if CategoryTab::new(&category.label, selected, palette).show(ui) {
                picked = Some(category.value.clone());
            }
        }
    });
    if let Some(value) = picked {
        session.set_field(FieldUpdate::Category(value));
    }

    field_label(ui, session.translate(TranslationKey::LabelMessage), palette);
    let mut message = session.message().to_string();
    let editor = TextEdit::multiline(&mut message)
        .hint_text(session.translate(TranslationKey::Placeholder).to_string())
        .text_color(palette.text)
        .background_color(palette.input_bg)
        .desired_rows(4)
        .desired_width(f32::INFINITY);
    if ui.add(editor).changed() {
        session.set_field(FieldUpdate::Message(message));
    }

    if image_upload {
        response.pick_image_requested = show_image_row(ui, session, palette);
    }

    let mut include_url = session.include_url();
    let checkbox_label = session.translate(TranslationKey::CheckboxOption).to_string();
    if ui.checkbox(&mut include_url, checkbox_label).changed() {
        session.toggle_include_url();
    }

    separator(ui, palette);
    let tone = match session.outcome() {
        SubmissionOutcome::Sent => SubmitTone::Sent,
        SubmissionOutcome::Error(_) => SubmitTone::Error,
        _ => SubmitTone::Normal,
    };
    let label = session.submit_label().to_string();
    let submit = SubmitButton::new(&label, palette)
        .enabled(session.can_submit())
        .tone(tone)
        .show(ui);
    if submit {
        response.send = Some(session.send());
    }
}

/// Upload button, or the preview of the attached image. Returns true when
/// the host should open its file picker.
fn show_image_row<H: FeedbackHandler>(
    ui: &mut Ui,
    session: &mut FeedbackSession<H>,
    palette: &Palette,
) -> bool {
    let Some(image) = session.image() else {
        return upload_button(ui, session.translate(TranslationKey::UploadText), palette);
    };

    let preview = image.preview().clone();
    let uploading = session.is_uploading();
    let preview_response = ui.add(
        egui::Image::from_bytes(preview.uri, preview.bytes)
            .max_height(palette.preview_height)
            .max_width(ui.available_width())
            .sense(Sense::click()),
    );
    let rect = preview_response.rect;

    if uploading {
        ui.put(
            Rect::from_center_size(rect.center(), Vec2::splat(24.0)),
            egui::Spinner::new(),
        );
        return false;
    }

    if preview_response.hovered() {
        ui.painter()
            .rect_filled(rect, CornerRadius::same(4), Color32::from_black_alpha(140));
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            session.translate(TranslationKey::ImageRemove),
            FontId::proportional(palette.font_size),
            palette.overlay_text,
        );
    }
    if preview_response.clicked() {
        session.remove_image();
    }
    false
}
