//! Logging System
//!
//! Diagnostics through `tracing`. Stdout belongs to the prompts and command
//! output, so events go to stderr unless configured otherwise.

use crate::error::SetupError;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

const LEVEL_ENV: &str = "CSFIX_SETUP_LOG";
const FORMAT_ENV: &str = "CSFIX_SETUP_LOG_FORMAT";
const OUTPUT_ENV: &str = "CSFIX_SETUP_LOG_OUTPUT";

/// `[logging]` settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Disable all diagnostics when false
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Filter directive: trace, debug, info, warn, error, off
    #[serde(default = "default_level")]
    pub level: String,

    /// json or text
    #[serde(default = "default_format")]
    pub format: String,

    /// stderr, stdout or file
    #[serde(default = "default_output")]
    pub output: String,

    /// Required when output is "file"
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_enabled() -> bool {
    true
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            level: default_level(),
            format: default_format(),
            output: default_output(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Stdout,
    Stderr,
    File,
}

/// Install the global subscriber.
///
/// `CSFIX_SETUP_LOG`, `CSFIX_SETUP_LOG_FORMAT` and `CSFIX_SETUP_LOG_OUTPUT`
/// take precedence over `config`, which already has CLI flags folded in.
pub fn init_logging(config: &LoggingConfig) -> Result<(), SetupError> {
    if !config.enabled {
        return Ok(());
    }

    let filter = match EnvFilter::try_from_env(LEVEL_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            SetupError::ConfigError(format!("Invalid log level {}: {}", config.level, e))
        })?,
    };
    let format = resolve_format(config)?;
    let output = match std::env::var(OUTPUT_ENV) {
        Ok(value) => parse_output(&value)?,
        Err(_) => parse_output(&config.output)?,
    };

    let (writer, ansi) = match output {
        Output::Stderr => (
            BoxMakeWriter::new(std::io::stderr),
            std::io::stderr().is_terminal(),
        ),
        Output::Stdout => (
            BoxMakeWriter::new(std::io::stdout),
            std::io::stdout().is_terminal(),
        ),
        Output::File => (BoxMakeWriter::new(Mutex::new(open_log_file(config)?)), false),
    };

    let registry = Registry::default().with(filter);
    let layer = fmt::layer()
        .with_target(true)
        .with_timer(ChronoUtc::rfc_3339())
        .with_writer(writer);
    match format {
        Format::Json => registry.with(layer.json()).init(),
        Format::Text => registry.with(layer.with_ansi(ansi)).init(),
    }

    Ok(())
}

fn open_log_file(config: &LoggingConfig) -> Result<std::fs::File, SetupError> {
    let path = config.file.as_ref().ok_or_else(|| {
        SetupError::ConfigError("Log output 'file' requires a log file path".to_string())
    })?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            SetupError::ConfigError(format!("Failed to create log directory: {}", e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            SetupError::ConfigError(format!("Failed to open log file {}: {}", path.display(), e))
        })
}

/// An unrecognised env value is ignored; an unrecognised configured value is an error.
fn resolve_format(config: &LoggingConfig) -> Result<Format, SetupError> {
    if let Some(format) = std::env::var(FORMAT_ENV)
        .ok()
        .and_then(|value| parse_format(&value).ok())
    {
        return Ok(format);
    }
    parse_format(&config.format)
}

fn parse_format(format: &str) -> Result<Format, SetupError> {
    match format {
        "json" => Ok(Format::Json),
        "text" => Ok(Format::Text),
        _ => Err(SetupError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        ))),
    }
}

fn parse_output(output: &str) -> Result<Output, SetupError> {
    match output {
        "stdout" => Ok(Output::Stdout),
        "stderr" => Ok(Output::Stderr),
        "file" => Ok(Output::File),
        _ => Err(SetupError::ConfigError(format!(
            "Invalid log output: {} (must be 'stdout', 'stderr' or 'file')",
            output
        ))),
    }
}
