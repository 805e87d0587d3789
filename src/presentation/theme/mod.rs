//! Colors and styles.

mod service;

pub use service::Theme;
