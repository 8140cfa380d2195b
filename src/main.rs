use igc_tracks::api::api::{self, RunError};
use igc_tracks::config::{Config, ENV_INPUT_FOLDER};
use igc_tracks::logs;
use igc_tracks::renderer::LeafletRenderer;
use log::{error, info};
use simplelog::LevelFilter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = Config::from_env();
    let level = config
        .as_ref()
        .map(|c| c.log_level)
        .unwrap_or(LevelFilter::Info);
    if let Err(e) = logs::init(level) {
        eprintln!("failed to initialize logging: {e}");
    }

    let result = config
        .map_err(RunError::from)
        .and_then(|config| api::run(&config, &LeafletRenderer::new()));

    match result {
        Ok(summary) => {
            info!(
                "Rendered {} of {} files ({} empty, {} unreadable); {} points kept, {} skipped as jumps.",
                summary.files_rendered,
                summary.files_found,
                summary.files_empty,
                summary.files_failed,
                summary.stats.accepted,
                summary.stats.rejected
            );
            info!("Open this HTML file in your web browser to view the map.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            if let RunError::MissingInputFolder(_) = e {
                info!(
                    "Please create the folder and place your .igc files inside, or set {}.",
                    ENV_INPUT_FOLDER
                );
            }
            ExitCode::FAILURE
        }
    }
}
