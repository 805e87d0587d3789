//! Swipe to delete - a terminal list whose rows are removed by swiping.
//!
//! Each row is wrapped in a swipe container: dragging it end-to-start past a
//! threshold reveals cancel and delete icons, and confirming plays an exit
//! animation before the item is removed from the list.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Domain layer containing the list store, swipe state machine and errors.
pub mod domain;
/// Infrastructure layer containing configuration and seed data.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "swipe-to-delete";
