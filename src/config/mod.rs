//! Application configuration
//!
//! Loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/campus-events/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

mod logging;

#[cfg(test)]
mod tests;

pub use logging::{FileLogging, LogRotation, LoggingConfig};

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default simulated round-trip for stubbed submissions
const DEFAULT_LATENCY_MS: u64 = 1200;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "Campus Dark", "Campus Light", "Terminal"
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// Simulated latency for stubbed submissions, in milliseconds
    pub submit_latency_ms: u64,

    /// Page size for the public events listing
    pub events_page_size: usize,

    /// Page size for the departments listing
    pub departments_page_size: usize,

    /// Page size for admin tables (manage events, registrations)
    pub admin_page_size: usize,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Campus Dark".to_string(),
            use_theme_background: true,
            submit_latency_ms: DEFAULT_LATENCY_MS,
            events_page_size: 8,
            departments_page_size: 4,
            admin_page_size: 5,
            logging: LoggingConfig::default(),
        }
    }
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,
    pub submit_latency_ms: Option<u64>,
    pub events_page_size: Option<usize>,
    pub departments_page_size: Option<usize>,
    pub admin_page_size: Option<usize>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

impl Config {
    /// Get the config file path: ~/.config/campus-events/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("campus-events").join("config.toml"))
    }

    /// Create the config file with defaults if it doesn't exist, so users
    /// can discover the available options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };
        if path.exists() {
            return;
        }
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Render the config as a commented TOML template
    pub fn to_toml(&self) -> String {
        format!(
            "# campus-events configuration\n\
             #\n\
             # Delete this file and restart to regenerate the defaults.\n\
             \n\
             theme = {theme:?}\n\
             use_theme_background = {bg}\n\
             \n\
             # Simulated latency for stubbed submissions (milliseconds)\n\
             submit_latency_ms = {latency}\n\
             \n\
             # Listing page sizes\n\
             events_page_size = {events}\n\
             departments_page_size = {departments}\n\
             admin_page_size = {admin}\n\
             \n\
             [logging]\n\
             # error | warn | info | debug | trace\n\
             level = {level:?}\n\
             file_enabled = {file_enabled}\n\
             file_dir = {file_dir:?}\n\
             file_prefix = {file_prefix:?}\n\
             # hourly | daily | never\n\
             file_rotation = {rotation:?}\n",
            theme = self.theme,
            bg = self.use_theme_background,
            latency = self.submit_latency_ms,
            events = self.events_page_size,
            departments = self.departments_page_size,
            admin = self.admin_page_size,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display().to_string(),
            file_prefix = self.logging.file_prefix,
            rotation = self.logging.file_rotation.as_str(),
        )
    }

    /// Load file config if it exists.
    ///
    /// A config file that exists but cannot be parsed is a fatal error -
    /// failing fast beats silently running with defaults while the user
    /// debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Config error: failed to parse {}", path.display());
                    eprintln!("  {e}");
                    eprintln!("  To reset, delete the file and restart campus-events.");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("Config error: cannot read {}: {e}", path.display());
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env > file > defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        Self::resolve(file)
    }

    pub(crate) fn resolve(file: FileConfig) -> Self {
        let defaults = Config::default();

        let theme = std::env::var("CAMPUS_EVENTS_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let use_theme_background = file
            .use_theme_background
            .unwrap_or(defaults.use_theme_background);

        let submit_latency_ms = std::env::var("CAMPUS_EVENTS_LATENCY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.submit_latency_ms)
            .unwrap_or(DEFAULT_LATENCY_MS);

        // Page sizes come from the file only; zero would panic the view
        // model, so it is treated as "not set"
        let events_page_size = file
            .events_page_size
            .filter(|&n| n > 0)
            .unwrap_or(defaults.events_page_size);
        let departments_page_size = file
            .departments_page_size
            .filter(|&n| n > 0)
            .unwrap_or(defaults.departments_page_size);
        let admin_page_size = file
            .admin_page_size
            .filter(|&n| n > 0)
            .unwrap_or(defaults.admin_page_size);

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            theme,
            use_theme_background,
            submit_latency_ms,
            events_page_size,
            departments_page_size,
            admin_page_size,
            logging,
        }
    }
}
