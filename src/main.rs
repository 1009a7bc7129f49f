//! WPanel entry point.
//!
//! Takes no arguments. Reads the optional config file, sets up logging and
//! runs the panel until the GTK main loop exits.

use std::process::ExitCode;

use tracing::{Level, info, span, warn};
use wpanel::{
    config::{Config, ConfigPaths},
    tracing_config,
    ui::{self, PanelInit},
};

fn main() -> ExitCode {
    let config_path = ConfigPaths::main_config().ok();
    let loaded = config_path
        .as_deref()
        .filter(|path| path.exists())
        .map(Config::load_with_imports);

    let config = match &loaded {
        Some(Ok(config)) => config.clone(),
        _ => Config::default(),
    };

    let _guard = match tracing_config::init(&config.general) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("failed to initialize logging: {e}");
            None
        }
    };

    let _span = span!(Level::INFO, "wpanel_main").entered();

    match (&loaded, &config_path) {
        (Some(Ok(_)), Some(path)) => info!(path = %path.display(), "Loaded config"),
        (Some(Err(e)), _) => warn!(error = %e, "Invalid config, using defaults"),
        (None, Some(path)) => info!(path = %path.display(), "No config file, using defaults"),
        _ => warn!("Cannot locate config directory, using defaults"),
    }

    ui::run(PanelInit {
        config,
        config_path,
    });

    ExitCode::SUCCESS
}
