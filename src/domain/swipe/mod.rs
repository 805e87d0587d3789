//! Swipe-to-delete interaction model.

mod gesture;
mod machine;
mod state;

use std::time::Duration;

pub use gesture::GestureTracker;
pub use machine::SwipeMachine;
pub use state::{Affordance, DismissalState, SwipeDirection, SwipeEvent};

/// Default exit animation length.
pub const DEFAULT_EXIT_DURATION: Duration = Duration::from_millis(500);

/// Default dismissal threshold, in terminal columns.
pub const DEFAULT_DISMISS_THRESHOLD: u16 = 40;

/// Tunables shared by every row of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeConfig {
    /// Minimum end-to-start drag, in columns, that pins a row open.
    pub dismiss_threshold: u16,
    /// Time between delete confirmation and removal.
    pub exit_duration: Duration,
    /// Whether the exit shrink and fade are drawn.
    pub animations: bool,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            dismiss_threshold: DEFAULT_DISMISS_THRESHOLD,
            exit_duration: DEFAULT_EXIT_DURATION,
            animations: true,
        }
    }
}
