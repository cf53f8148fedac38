//! egui rendering of the Slack feedback widget.
//!
//! - **Feedback**: the widget itself, trigger plus form panel
//! - **Buttons**: category tabs, submit button, trigger, upload button, links
//! - **Colors**: theme colours resolved into an egui [`Palette`]
//! - **Layout**: panel frames, separators, field labels

pub mod buttons;
pub mod colors;
pub mod feedback;
pub mod layout;

pub use buttons::{
    CategoryTab, SubmitButton, SubmitTone, TriggerButton, paint_slack_icon, text_link,
    upload_button,
};
pub use colors::{Palette, parse_css_color};
pub use feedback::{FeedbackWidget, WidgetResponse, claimed_by_other_layer, pointer_interaction};
pub use layout::{content_frame, field_label, header_frame, panel_frame, separator};
