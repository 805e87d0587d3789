//! Swipe dismissal states and the events that drive them.

use std::fmt;

/// Per-row dismissal state.
///
/// Lives only as long as the row is mounted and is never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DismissalState {
    /// Row shows its content with no drag offset.
    #[default]
    Idle,
    /// Row is pinned open past the threshold with cancel and delete exposed.
    RevealedToStart,
    /// Delete was confirmed; the exit animation has not started yet.
    PendingDelete,
    /// Exit animation is running; removal fires when it completes.
    Deleting,
}

impl DismissalState {
    /// Returns true once a deletion has been confirmed.
    #[must_use]
    pub const fn is_deleting(self) -> bool {
        matches!(self, Self::PendingDelete | Self::Deleting)
    }
}

impl fmt::Display for DismissalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::RevealedToStart => write!(f, "revealed"),
            Self::PendingDelete => write!(f, "pending-delete"),
            Self::Deleting => write!(f, "deleting"),
        }
    }
}

/// Discrete inputs accepted by the dismissal state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeEvent {
    /// A drag was released at or beyond the dismissal threshold.
    DragPastThreshold,
    /// A drag was released short of the dismissal threshold.
    DragBelowThreshold,
    /// The cancel affordance was tapped.
    TapCancel,
    /// The delete affordance was tapped.
    TapDelete,
    /// The exit animation ran for its full duration.
    AnimationComplete,
}

impl fmt::Display for SwipeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DragPastThreshold => write!(f, "drag-past-threshold"),
            Self::DragBelowThreshold => write!(f, "drag-below-threshold"),
            Self::TapCancel => write!(f, "tap-cancel"),
            Self::TapDelete => write!(f, "tap-delete"),
            Self::AnimationComplete => write!(f, "animation-complete"),
        }
    }
}

/// Direction of an in-progress swipe.
///
/// Only end-to-start swipes are enabled, so a row either has this
/// direction or none at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// From the reading-end edge toward the reading-start edge.
    EndToStart,
}

/// Tap targets revealed behind a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Affordance {
    /// Closes the row without deleting.
    Cancel,
    /// Confirms the deletion.
    Delete,
}

impl Affordance {
    /// Maps the tap to the event it produces.
    #[must_use]
    pub const fn event(self) -> SwipeEvent {
        match self {
            Self::Cancel => SwipeEvent::TapCancel,
            Self::Delete => SwipeEvent::TapDelete,
        }
    }
}
