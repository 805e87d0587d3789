//! Domain error types.

mod swipe_error;

pub use swipe_error::SwipeError;
