//! Logger initialization.
//!
//! Installs `env_logger` with one of two line formats. The library itself only
//! logs through the `log` facade.

use std::io::Write;

use colored::*;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Dependency targets that are capped below the application level.
const NOISY_TARGETS: [(&str, LevelFilter); 5] = [
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
    ("rustls", LevelFilter::Warn),
    // hickory logs every truncated or malformed UDP answer it retries
    ("hickory_proto", LevelFilter::Error),
];

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first; `level` then applies to this crate and as the
/// global default.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=domain_resolver=debug,hyper=info domain_resolver
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    for (target, cap) in NOISY_TARGETS {
        builder.filter_module(target, cap);
    }
    builder.filter_module("domain_resolver", level);

    match format {
        LogFormat::Json => builder.format(|buf, record| {
            writeln!(
                buf,
                "{}",
                json_line(record, chrono::Utc::now().timestamp_millis())
            )
        }),
        LogFormat::Plain => builder.format(|buf, record| {
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
            writeln!(buf, "{}", plain_line(record, &timestamp.to_string()))
        }),
    };

    builder.try_init()?;
    Ok(())
}

/// One JSON object per record: `{"ts","level","target","msg"}`.
fn json_line(record: &Record<'_>, ts_millis: i64) -> String {
    serde_json::json!({
        "ts": ts_millis,
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    })
    .to_string()
}

/// Human-readable line with a colored level and an emoji marker.
fn plain_line(record: &Record<'_>, timestamp: &str) -> String {
    let level = record.level();
    let (emoji, label) = match level {
        Level::Error => ("❌", level.as_str().red()),
        Level::Warn => ("⚠️", level.as_str().yellow()),
        Level::Info => ("✔️", level.as_str().green()),
        Level::Debug => ("🔍", level.as_str().blue()),
        Level::Trace => ("🔬", level.as_str().purple()),
    };

    format!(
        "{} {} {} [{}] {}",
        timestamp,
        emoji,
        record.target().cyan(),
        label,
        record.args()
    )
}
