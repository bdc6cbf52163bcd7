// Logging configuration section

use serde::Deserialize;
use std::path::PathBuf;

/// How file logs rotate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

impl LogRotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogRotation::Hourly => "hourly",
            LogRotation::Daily => "daily",
            LogRotation::Never => "never",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "hourly" => Some(LogRotation::Hourly),
            "daily" => Some(LogRotation::Daily),
            "never" => Some(LogRotation::Never),
            _ => None,
        }
    }
}

/// Resolved logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default level filter (overridden by RUST_LOG)
    pub level: String,

    /// Write JSON logs to rotating files in addition to the in-app panel
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_prefix: String,
    pub file_rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "campus-events".to_string(),
            file_rotation: LogRotation::default(),
        }
    }
}

/// [logging] section as it appears in the config file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_prefix: Option<String>,
    pub file_rotation: Option<String>,
}

impl LoggingConfig {
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let defaults = Self::default();
        let Some(file) = file else {
            return defaults;
        };

        Self {
            level: file.level.unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.map(PathBuf::from).unwrap_or(defaults.file_dir),
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
            file_rotation: file
                .file_rotation
                .as_deref()
                .and_then(LogRotation::parse)
                .unwrap_or(defaults.file_rotation),
        }
    }
}
