//! Domain layer: the list store and the swipe interaction model.

/// Domain error types.
pub mod errors;
/// Ordered item store.
pub mod list_store;
/// Swipe state machine and gesture tracking.
pub mod swipe;

pub use list_store::ListStore;
