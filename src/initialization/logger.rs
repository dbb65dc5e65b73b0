//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::{Level, LevelFilter};

/// Where log lines go. Chosen once at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Colored lines on stderr
    Stderr,
    /// Plain lines appended to a file, which is created if missing
    File(PathBuf),
}

impl LogSink {
    /// Sink for a `--log-file` value; `-` means the terminal.
    pub fn from_path(path: &Path) -> Self {
        if path == Path::new("-") {
            LogSink::Stderr
        } else {
            LogSink::File(path.to_path_buf())
        }
    }
}

/// Initializes the logger with the specified level, format, and sink.
///
/// Configures `env_logger` with custom formatting. Plain lines follow
/// `<timestamp> - <LEVEL> - <message>`; JSON lines carry the same fields.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it.
///
/// # Arguments
///
/// * `level` - Minimum log level to record (overrides `RUST_LOG` if set)
/// * `format` - Log format (Plain or Json)
/// * `sink` - Terminal or append-only file
///
/// # Errors
///
/// Returns `InitializationError::LoggerSetupError` if the log file cannot be
/// opened, or `InitializationError::LoggerError` if a logger is already set.
///
/// # Examples
///
/// ```bash
/// # Debug output for this crate only, hickory left at its defaults
/// RUST_LOG=dns_audit=debug dns_audit example.com --log-level debug
/// ```
pub fn init_logger_with(
    level: LevelFilter,
    format: LogFormat,
    sink: LogSink,
) -> Result<(), InitializationError> {
    let colorize = sink == LogSink::Stderr;
    colored::control::set_override(colorize);

    // Read from RUST_LOG environment variable first, then override with CLI arg
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    // hickory logs every malformed UDP datagram at warn; those are handled by retries
    builder.filter_module("hickory_proto", LevelFilter::Error);
    builder.filter_module("hickory_resolver", LevelFilter::Warn);
    builder.filter_module("lettre", LevelFilter::Warn);
    builder.filter_module("dns_audit", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":\"{}\",\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Local::now().to_rfc3339(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(move |buf, record| {
                let timestamp = chrono::Local::now()
                    .format("%Y-%m-%d %H:%M:%S,%3f")
                    .to_string();
                writeln!(
                    buf,
                    "{}",
                    plain_line(
                        &timestamp,
                        record.level(),
                        &record.args().to_string(),
                        colorize
                    )
                )
            });
        }
    }

    if let LogSink::File(path) = &sink {
        let file = OpenOptions::new()
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
        builder.write_style(env_logger::WriteStyle::Never);
    }

    // try_init() instead of init() so a second initialization is an error, not a panic
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

fn plain_line(timestamp: &str, level: Level, message: &str, colorize: bool) -> String {
    if !colorize {
        return format!("{timestamp} - {level} - {message}");
    }
    let colored_level = match level {
        Level::Error => level.to_string().red(),
        Level::Warn => level.to_string().yellow(),
        Level::Info => level.to_string().green(),
        Level::Debug => level.to_string().blue(),
        Level::Trace => level.to_string().purple(),
    };
    format!("{} - {} - {}", timestamp.dimmed(), colored_level, message)
}
