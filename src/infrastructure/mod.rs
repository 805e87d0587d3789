//! Infrastructure layer: configuration loading and seed data.

/// Configuration file, CLI arguments and storage.
pub mod config;
/// Built-in list contents.
pub mod seed;

pub use config::{AppConfig, CliArgs, ConfigStore};
pub use seed::{CITIES, seed_items};
