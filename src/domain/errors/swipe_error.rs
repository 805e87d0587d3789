//! Swipe state machine error types.

use thiserror::Error;

use crate::domain::swipe::{DismissalState, SwipeEvent};

/// Swipe state machine error variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SwipeError {
    #[error("cannot handle {event} while {state}")]
    InvalidTransition {
        state: DismissalState,
        event: SwipeEvent,
    },

    #[error("row was already removed")]
    AlreadyRemoved,
}
