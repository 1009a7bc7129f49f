use std::error::Error;

use tracing::warn;
use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{Builder, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{ConfigPaths, GeneralConfig, LogFormat};

const DAYS_TO_KEEP: usize = 7;

/// Initialize tracing for the panel
///
/// Uses the `RUST_LOG` environment variable if set, otherwise the configured
/// log level. Console output is pretty or JSON per `log_format`; with
/// `log_to_file` a daily-rotated file under the log directory is added.
/// If the log file cannot be set up, console logging is installed alone and
/// a warning is emitted.
///
/// The returned guard flushes the file writer and must be kept alive for the
/// lifetime of the process.
///
/// # Errors
/// Returns error if the global subscriber cannot be installed
pub fn init(general: &GeneralConfig) -> Result<Option<WorkerGuard>, Box<dyn Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(general.log_level.to_string()));

    let (file_writer, file_error) = if general.log_to_file {
        match file_writer() {
            Ok(writer) => (Some(writer), None),
            Err(e) => (None, Some(e)),
        }
    } else {
        (None, None)
    };
    let (file_writer, guard) = file_writer.unzip();

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .compact()
            .with_target(true)
            .with_level(true)
            .with_writer(writer)
            .with_ansi(false)
    });

    let registry = tracing_subscriber::registry().with(env_filter).with(file_layer);

    match general.log_format {
        LogFormat::Json => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stdout),
                )
                .try_init()?;
        }
        LogFormat::Pretty => {
            registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_level(true)
                        .with_thread_names(true)
                        .with_writer(std::io::stdout),
                )
                .try_init()?;
        }
    }

    if let Some(e) = file_error {
        warn!(error = %e, "File logging disabled, logging to console only");
    }

    Ok(guard)
}

fn file_writer() -> Result<(NonBlocking, WorkerGuard), Box<dyn Error>> {
    let log_dir = ConfigPaths::log_dir()?;
    let file_appender = Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(DAYS_TO_KEEP)
        .filename_prefix("wpanel")
        .filename_suffix("log")
        .build(&log_dir)?;

    Ok(tracing_appender::non_blocking(file_appender))
}
