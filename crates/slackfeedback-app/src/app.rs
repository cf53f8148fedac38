//! Demo application hosting one feedback widget.

use std::path::PathBuf;

use slackfeedback_core::{
    FeedbackConfig, FeedbackSession, ImageFile, Instant, SendOutcome, VisibilityController,
};
use slackfeedback_widgets::{FeedbackWidget, Palette};
use thiserror::Error;

use crate::delivery::{SimulatedDelivery, report_due};

/// Location reported as the page the feedback is about.
pub const DEMO_LOCATION: &str = "app://slackfeedback-demo/home";

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] slackfeedback_core::ConfigError),
    #[error("UI error: {0}")]
    Ui(#[from] eframe::Error),
}

/// Load a JSON config from `path`, or the defaults when no path is given.
pub fn load_config(path: Option<PathBuf>) -> Result<FeedbackConfig, AppError> {
    let Some(path) = path else {
        return Ok(FeedbackConfig::default());
    };
    let json = std::fs::read_to_string(&path).map_err(|source| AppError::ReadConfig {
        path: path.clone(),
        source,
    })?;
    let config = FeedbackConfig::from_json(&json)?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// eframe application state.
pub struct DemoApp {
    session: FeedbackSession<SimulatedDelivery>,
    visibility: VisibilityController,
    palette: Palette,
}

impl DemoApp {
    pub fn new(config: FeedbackConfig) -> Result<Self, AppError> {
        let palette = Palette::from_config(&config)?;
        let session = FeedbackSession::new(config, SimulatedDelivery::new(DEMO_LOCATION))?;
        let visibility = VisibilityController::new()
            .with_on_open(|| log::info!("Feedback panel opened"))
            .with_on_close(|| log::info!("Feedback panel closed"));

        Ok(Self {
            session,
            visibility,
            palette,
        })
    }

    /// Open the native file picker and attach the chosen image.
    fn pick_image(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp"])
            .pick_file()
        else {
            return;
        };

        match ImageFile::from_path(&path) {
            Ok(file) => {
                self.session.attach_image([file]);
            }
            Err(e) => log::error!("Failed to read {}: {}", path.display(), e),
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if report_due(&mut self.session, Instant::now()) {
            ctx.request_repaint();
        }
        if let Some(due) = self.session.handler().next_due() {
            ctx.request_repaint_after(due.saturating_duration_since(Instant::now()));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Slack feedback demo");
            ui.label("Use the trigger in the bottom-right corner to send feedback.");
            ui.label("Add a #status tag such as #404 to a message to simulate a failed delivery.");
            ui.add_space(12.0);
            ui.label(format!(
                "Delivered so far: {}",
                self.session.handler().delivered()
            ));
        });

        let response = FeedbackWidget::new(&mut self.session, &mut self.visibility, &self.palette)
            .show(ctx);

        match response.send {
            Some(SendOutcome::Skipped(level)) => {
                log::warn!("Feedback not sent for this category ({})", level.as_str())
            }
            Some(SendOutcome::Rejected(reason)) => log::debug!("Send rejected: {:?}", reason),
            _ => {}
        }

        if response.pick_image_requested {
            self.pick_image();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_defaults_without_path() {
        let config = load_config(None).unwrap();
        assert_eq!(config, FeedbackConfig::default());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config(Some(PathBuf::from("/nonexistent/slackfeedback.json")));
        assert!(matches!(result, Err(AppError::ReadConfig { .. })));
    }

    #[test]
    fn test_demo_app_rejects_bad_theme() {
        let config = FeedbackConfig {
            theme: serde_json::json!({ "width": "wide" }),
            ..Default::default()
        };
        assert!(matches!(DemoApp::new(config), Err(AppError::Config(_))));
    }
}
