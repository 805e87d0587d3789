use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "swipe-to-delete",
    version,
    about = "A terminal list of cities where each row can be swiped away",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable mouse support.
    #[arg(long)]
    pub mouse: Option<bool>,

    /// Draw the exit animation when a row is deleted.
    #[arg(long)]
    pub enable_animations: Option<bool>,

    /// Delay between delete confirmation and removal, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub exit_animation_ms: Option<u64>,

    /// Drag distance in columns that pins a row open.
    #[arg(long, value_name = "COLUMNS")]
    pub dismiss_threshold: Option<u16>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
