//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{gesture, timing};
use crate::controller::ViewSettings;
use crate::error::Result;
use crate::types::Language;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Deck file to open when none is given on the command line
    pub deck_path: Option<PathBuf>,
    /// Language shown after startup
    pub start_language: Language,
    /// Milliseconds before the loading indicator is removed
    pub loader_ms: u64,
    /// Milliseconds before the swipe hint fades out
    pub hint_ms: u64,
    /// Ring the terminal bell after swipe navigation
    pub haptic_feedback: bool,
    /// Gesture units per terminal column
    pub units_per_cell: f64,
    /// Where tracing output is written
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            deck_path: None,
            start_language: Language::English,
            loader_ms: timing::DEFAULT_LOADER_MS,
            hint_ms: timing::DEFAULT_HINT_MS,
            haptic_feedback: false,
            units_per_cell: gesture::DEFAULT_UNITS_PER_CELL,
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();
        Ok(Self::from_lookup(|key| env::var(key).ok()))
    }

    /// Build a config from an arbitrary variable source. Invalid values
    /// keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("SLIDEVIEW_DECK") {
            config.deck_path = Some(expand(&path));
        }

        if let Some(lang) = lookup("SLIDEVIEW_LANG").and_then(|l| Language::from_code(&l)) {
            config.start_language = lang;
        }

        if let Some(ms) = lookup("SLIDEVIEW_LOADER_MS").and_then(|v| v.parse().ok()) {
            config.loader_ms = ms;
        }

        if let Some(ms) = lookup("SLIDEVIEW_HINT_MS").and_then(|v| v.parse().ok()) {
            config.hint_ms = ms;
        }

        if let Some(flag) = lookup("SLIDEVIEW_HAPTICS") {
            config.haptic_feedback = matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on");
        }

        if let Some(units) = lookup("SLIDEVIEW_UNITS_PER_CELL")
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|u| u.is_finite() && *u > 0.0)
        {
            config.units_per_cell = units;
        }

        if let Some(path) = lookup("SLIDEVIEW_LOG_FILE") {
            config.log_file = Some(expand(&path));
        }

        config
    }

    /// Startup settings for the view controller.
    pub const fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            start_language: self.start_language,
            loader_delay: Duration::from_millis(self.loader_ms),
            hint_delay: Duration::from_millis(self.hint_ms),
        }
    }
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

/// `<cache dir>/slideview/slideview.log`, if the platform has a cache dir.
fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join(env!("CARGO_PKG_NAME")).join("slideview.log"))
}
