use anyhow::Result;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const APP_DIR: &str = "ewaste2go";

/// Directory the log files live in, under the platform config dir
pub fn logs_dir(config_dir: &Path) -> PathBuf {
    config_dir.join(APP_DIR).join("logs")
}

/// `ewaste2go-YYYY-MM-DD-HH-MM-SS.log`
pub fn log_file_name(started_at: DateTime<Local>) -> String {
    format!("{}-{}.log", APP_DIR, started_at.format("%Y-%m-%d-%H-%M-%S"))
}

/// Initialize tracing with file-based logging.
/// Logs are written to ~/.config/ewaste2go/logs/ewaste2go-YYYY-MM-DD-HH-MM-SS.log;
/// the terminal belongs to the TUI so nothing goes to stdout/stderr.
///
/// `default_level` applies when `RUST_LOG` is not set.
pub fn init_logging(default_level: &str) -> Result<PathBuf> {
    let config_dir =
        dirs::config_dir().ok_or(anyhow::anyhow!("Could not find config directory"))?;

    let logs_dir = logs_dir(&config_dir);
    std::fs::create_dir_all(&logs_dir)?;

    let log_filename = log_file_name(Local::now());
    let log_path = logs_dir.join(&log_filename);

    // Non-blocking so a slow disk never stalls a redraw
    let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    // The writer flushes on guard drop; keep it for the life of the process
    std::mem::forget(guard);

    Ok(log_path)
}
