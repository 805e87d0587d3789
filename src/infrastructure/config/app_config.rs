//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::swipe::{DEFAULT_DISMISS_THRESHOLD, SwipeConfig};

const APP_NAME: &str = "swipe-to-delete";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Enable mouse support.
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// List contents.
    #[serde(default)]
    pub list: ListConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Draw the shrink and fade when a row is deleted.
    #[serde(default = "default_true")]
    pub enable_animations: bool,

    /// Delay between delete confirmation and removal, in milliseconds.
    #[serde(default = "default_exit_animation_ms")]
    pub exit_animation_ms: u64,

    /// End-to-start drag distance, in terminal columns, that pins a row open.
    #[serde(default = "default_dismiss_threshold")]
    pub dismiss_threshold: u16,

    /// Columns moved per keyboard swipe step.
    #[serde(default = "default_keyboard_step")]
    pub keyboard_step: u16,

    /// Height of a row in terminal lines.
    #[serde(default = "default_row_height")]
    pub row_height: u16,
}

impl UiConfig {
    /// Row behavior derived from this configuration.
    #[must_use]
    pub const fn swipe_config(&self) -> SwipeConfig {
        SwipeConfig {
            dismiss_threshold: self.dismiss_threshold,
            exit_duration: Duration::from_millis(self.exit_animation_ms),
            animations: self.enable_animations,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_animations: true,
            exit_animation_ms: default_exit_animation_ms(),
            dismiss_threshold: default_dismiss_threshold(),
            keyboard_step: default_keyboard_step(),
            row_height: default_row_height(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,

    /// Backdrop color behind swiped rows (name or hex code).
    #[serde(default = "default_danger_color")]
    pub danger_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
            danger_color: default_danger_color(),
        }
    }
}

/// List configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// Confirmation prompt shown behind a swiped row.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Items to show instead of the built-in cities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            items: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_exit_animation_ms() -> u64 {
    500
}

fn default_dismiss_threshold() -> u16 {
    DEFAULT_DISMISS_THRESHOLD
}

fn default_keyboard_step() -> u16 {
    8
}

fn default_row_height() -> u16 {
    3
}

fn default_accent_color() -> String {
    "Yellow".to_string()
}

fn default_danger_color() -> String {
    "Red".to_string()
}

fn default_prompt() -> String {
    "Delete this city?".to_string()
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(mouse) = args.mouse {
            self.mouse = mouse;
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
        if let Some(exit_animation_ms) = args.exit_animation_ms {
            self.ui.exit_animation_ms = exit_animation_ms;
        }
        if let Some(dismiss_threshold) = args.dismiss_threshold {
            self.ui.dismiss_threshold = dismiss_threshold;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("swipe-to-delete.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            mouse: true,
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
            list: ListConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config() {
        let toml_content = r##"
            log_level = "debug"
            mouse = false

            [ui]
            enable_animations = false
            exit_animation_ms = 250
            dismiss_threshold = 24

            [theme]
            danger_color = "#aa0000"

            [list]
            prompt = "Remove?"
            items = ["Lisbon", "Porto"]
        "##;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(!config.mouse);
        assert!(!config.ui.enable_animations);
        assert_eq!(config.ui.keyboard_step, 8);
        assert_eq!(config.theme.accent_color, "Yellow");
        assert_eq!(config.list.prompt, "Remove?");
        assert_eq!(
            config.list.items,
            Some(vec!["Lisbon".to_string(), "Porto".to_string()])
        );

        let swipe = config.ui.swipe_config();
        assert_eq!(swipe.dismiss_threshold, 24);
        assert_eq!(swipe.exit_duration, Duration::from_millis(250));
        assert!(!swipe.animations);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert!(config.mouse);
        assert!(config.list.items.is_none());
        assert_eq!(config.ui.swipe_config(), SwipeConfig::default());
    }

    #[test]
    fn test_args_override_file_values() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "swipe-to-delete",
            "--dismiss-threshold",
            "12",
            "--enable-animations",
            "false",
            "--log-level",
            "trace",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.ui.dismiss_threshold, 12);
        assert!(!config.ui.enable_animations);
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.ui.exit_animation_ms, 500);
    }
}
