//! Demo entry point.
//!
//! Usage: `slackfeedback-demo [config.json]`

use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting Slack feedback demo");

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let result = slackfeedback_app::load_config(path).and_then(slackfeedback_app::run);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("slackfeedback-demo: {}", e);
            ExitCode::FAILURE
        }
    }
}
