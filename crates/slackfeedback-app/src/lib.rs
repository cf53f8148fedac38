//! Slack feedback demo host
//!
//! A native eframe window that embeds the feedback widget and answers its
//! submissions and uploads with a simulated backend.

mod app;
mod delivery;

pub use app::{AppError, DEMO_LOCATION, DemoApp, load_config};
pub use delivery::{Completion, SimulatedDelivery, report_due};

use slackfeedback_core::FeedbackConfig;

/// Open the demo window and block until it closes.
pub fn run(config: FeedbackConfig) -> Result<(), AppError> {
    let app = DemoApp::new(config)?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Slack Feedback Demo")
            .with_inner_size([960.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "slackfeedback-demo",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}
