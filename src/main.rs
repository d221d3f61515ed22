mod app;
mod engine;
mod infra;
mod store;
mod ui;

use std::process::ExitCode;

use infra::config::AppConfig;
use infra::logging;

fn main() -> ExitCode {
    logging::init_logging();
    let config = AppConfig::default();

    match ui::app_shell::launch_window(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("failed to start UI: {error}");
            eprintln!("failed to start image-manipulator: {error}");
            ExitCode::from(1)
        }
    }
}
