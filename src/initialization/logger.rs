//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;
use std::path::Path;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level, format and optional file.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors and emojis) and JSON formats for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter overrides it.
///
/// When `log_file` is given, log lines are appended to that file instead of
/// stderr (colors are disabled for file output).
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if the logger is already set,
/// or `InitializationError::LoggerSetupError` if the log file cannot be opened.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug exhibitor_scraper scrape
/// exhibitor_scraper --log-level warn --log-format json scrape --max-pages 2
/// ```
pub fn init_logger_with(
    level: LevelFilter,
    format: LogFormat,
    log_file: Option<&Path>,
) -> Result<(), InitializationError> {
    colored::control::set_override(log_file.is_none());

    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    // NXDOMAIN answers are the normal "available" outcome, not worth a warning
    builder.filter_module("hickory_proto", LevelFilter::Error);
    builder.filter_module("hickory_resolver", LevelFilter::Error);
    builder.filter_module("exhibitor_scraper", level);

    if let Some(path) = log_file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                InitializationError::LoggerSetupError(format!(
                    "cannot create log directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                InitializationError::LoggerSetupError(format!(
                    "cannot open log file {}: {e}",
                    path.display()
                ))
            })?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}",
                    serde_json::json!({
                        "ts": chrono::Utc::now().timestamp_millis(),
                        "level": record.level().as_str(),
                        "target": record.target(),
                        "msg": record.args().to_string(),
                    })
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let (marker, level) = styled_level(record.level());
                writeln!(
                    buf,
                    "{} {} {} [{}] {}",
                    marker,
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                    record.target().cyan(),
                    level,
                    record.args()
                )
            });
        }
    }

    // try_init() so a second initialization (tests) returns an error instead of panicking
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Emoji marker and colored label for a plain-format log line.
fn styled_level(level: log::Level) -> (&'static str, ColoredString) {
    let label = level.as_str();
    match level {
        log::Level::Error => ("❌", label.red()),
        log::Level::Warn => ("⚠️", label.yellow()),
        log::Level::Info => ("✔️", label.green()),
        log::Level::Debug => ("🔍", label.blue()),
        log::Level::Trace => ("🔬", label.purple()),
    }
}
