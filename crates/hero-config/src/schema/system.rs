//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for the `hero` crates at this level.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "hero=trace",
            LogLevel::Debug => "hero=debug",
            LogLevel::Info => "hero=info",
            LogLevel::Warn => "hero=warn",
            LogLevel::Error => "hero=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log the measured frame rate at debug level every few seconds.
    pub log_fps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            log_fps: true,
        }
    }
}
