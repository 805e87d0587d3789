//! Dismissal state machine.

use std::time::Duration;

use super::state::{Affordance, DismissalState, SwipeEvent};
use crate::domain::errors::SwipeError;

/// Owns the dismissal state of one row and the exit timer.
///
/// Every transition goes through [`SwipeMachine::handle`]. Once a delete is
/// confirmed no further taps are accepted, so a row can only be removed once.
#[derive(Debug, Clone)]
pub struct SwipeMachine {
    state: DismissalState,
    exit_duration: Duration,
    elapsed: Duration,
    removed: bool,
}

impl SwipeMachine {
    /// Creates an idle machine with the given exit animation duration.
    #[must_use]
    pub const fn new(exit_duration: Duration) -> Self {
        Self {
            state: DismissalState::Idle,
            exit_duration,
            elapsed: Duration::ZERO,
            removed: false,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> DismissalState {
        self.state
    }

    /// Returns the configured exit animation duration.
    #[must_use]
    pub const fn exit_duration(&self) -> Duration {
        self.exit_duration
    }

    /// Returns the time spent in the exit animation so far.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns true after `AnimationComplete` was accepted.
    #[must_use]
    pub const fn is_removed(&self) -> bool {
        self.removed
    }

    /// Tap targets currently exposed.
    #[must_use]
    pub fn affordances(&self) -> &'static [Affordance] {
        match self.state {
            DismissalState::RevealedToStart => &[Affordance::Cancel, Affordance::Delete],
            _ => &[],
        }
    }

    /// Applies an event and returns the resulting state.
    ///
    /// # Errors
    /// Returns [`SwipeError::InvalidTransition`] when the event is not
    /// accepted in the current state, and [`SwipeError::AlreadyRemoved`] for
    /// any event after removal. The state is left untouched on error.
    pub fn handle(&mut self, event: SwipeEvent) -> Result<DismissalState, SwipeError> {
        use DismissalState as S;
        use SwipeEvent as E;

        if self.removed {
            return Err(SwipeError::AlreadyRemoved);
        }

        let next = match (self.state, event) {
            (S::Idle, E::DragPastThreshold) | (S::RevealedToStart, E::DragPastThreshold) => {
                S::RevealedToStart
            }
            (S::Idle, E::DragBelowThreshold)
            | (S::RevealedToStart, E::DragBelowThreshold | E::TapCancel) => S::Idle,
            (S::RevealedToStart, E::TapDelete) => {
                self.elapsed = Duration::ZERO;
                S::PendingDelete
            }
            (S::PendingDelete | S::Deleting, E::AnimationComplete)
                if self.elapsed >= self.exit_duration =>
            {
                self.removed = true;
                S::Deleting
            }
            (state, event) => return Err(SwipeError::InvalidTransition { state, event }),
        };

        self.state = next;
        Ok(next)
    }

    /// Advances the exit timer.
    ///
    /// The first tick after a confirmed delete starts the animation. Returns
    /// true exactly once: on the tick where the accumulated time reaches the
    /// exit duration.
    pub fn tick(&mut self, delta: Duration) -> bool {
        match self.state {
            DismissalState::PendingDelete => self.state = DismissalState::Deleting,
            DismissalState::Deleting => {}
            DismissalState::Idle | DismissalState::RevealedToStart => return false,
        }

        if self.removed {
            return false;
        }

        self.elapsed = self.elapsed.saturating_add(delta);
        self.elapsed >= self.exit_duration && self.handle(SwipeEvent::AnimationComplete).is_ok()
    }

    /// Fraction of the exit animation already played, in `0.0..=1.0`.
    #[must_use]
    pub fn exit_progress(&self) -> f32 {
        if !self.state.is_deleting() {
            return 0.0;
        }
        if self.exit_duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.exit_duration.as_secs_f32()).min(1.0)
    }
}

impl Default for SwipeMachine {
    fn default() -> Self {
        Self::new(super::DEFAULT_EXIT_DURATION)
    }
}
