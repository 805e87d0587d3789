//! Horizontal drag tracking for a single row.

use super::state::{SwipeDirection, SwipeEvent};

#[derive(Debug, Clone, Copy)]
struct DragOrigin {
    column: u16,
    offset: u16,
    moved: bool,
}

/// Tracks the end-to-start drag offset of a row, in terminal columns.
///
/// The offset is clamped to `0..=width`. A settled drag either snaps fully
/// open (past the threshold) or springs back to zero.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    threshold: u16,
    width: u16,
    offset: u16,
    origin: Option<DragOrigin>,
}

impl GestureTracker {
    /// Creates a tracker with the given dismissal threshold in columns.
    #[must_use]
    pub const fn new(threshold: u16) -> Self {
        Self {
            threshold,
            width: 0,
            offset: 0,
            origin: None,
        }
    }

    /// Current drag offset in columns.
    #[must_use]
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    /// Configured dismissal threshold in columns.
    #[must_use]
    pub const fn threshold(&self) -> u16 {
        self.threshold
    }

    /// Direction of the current swipe, if the row is displaced at all.
    #[must_use]
    pub const fn direction(&self) -> Option<SwipeDirection> {
        if self.offset > 0 {
            Some(SwipeDirection::EndToStart)
        } else {
            None
        }
    }

    /// Returns true while a pointer drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// Updates the row width, keeping a fully open row fully open.
    pub fn set_width(&mut self, width: u16) {
        let pinned = self.offset > 0 && self.offset == self.bound();
        self.width = width;
        self.offset = if pinned {
            self.bound()
        } else {
            self.offset.min(self.bound())
        };
    }

    /// Starts a pointer drag at `column`.
    pub const fn press(&mut self, column: u16) {
        self.origin = Some(DragOrigin {
            column,
            offset: self.offset,
            moved: false,
        });
    }

    /// Moves an active pointer drag to `column`.
    pub fn drag_to(&mut self, column: u16) {
        let Some(origin) = self.origin.as_mut() else {
            return;
        };

        if column != origin.column {
            origin.moved = true;
        }

        let offset = i32::from(origin.offset) + i32::from(origin.column) - i32::from(column);
        self.offset = clamp_offset(offset, self.bound());
    }

    /// Ends a pointer drag.
    ///
    /// Returns `None` for a press without movement (a tap), otherwise the
    /// settle event.
    pub fn release(&mut self) -> Option<SwipeEvent> {
        let origin = self.origin.take()?;
        origin.moved.then(|| self.settle())
    }

    /// Moves the row by `delta` columns without a pointer, as keyboard steps do.
    ///
    /// Positive deltas move end-to-start. Reaching the threshold snaps open;
    /// falling below it springs back. Returns the settle event when either
    /// happens.
    pub fn nudge(&mut self, delta: i32) -> Option<SwipeEvent> {
        let before = self.offset;
        self.offset = clamp_offset(i32::from(self.offset) + delta, self.bound());

        if delta > 0 && self.past_threshold() {
            Some(self.settle())
        } else if delta < 0 && before > 0 && !self.past_threshold() {
            Some(self.settle())
        } else {
            None
        }
    }

    /// Clears the offset and any active drag.
    pub const fn reset(&mut self) {
        self.offset = 0;
        self.origin = None;
    }

    fn settle(&mut self) -> SwipeEvent {
        if self.past_threshold() {
            self.offset = self.bound();
            SwipeEvent::DragPastThreshold
        } else {
            self.offset = 0;
            SwipeEvent::DragBelowThreshold
        }
    }

    fn past_threshold(&self) -> bool {
        let reachable = self.bound().saturating_sub(1).max(1);
        self.offset > 0 && self.offset >= self.threshold.min(reachable)
    }

    const fn bound(&self) -> u16 {
        if self.width == 0 { u16::MAX } else { self.width }
    }
}

fn clamp_offset(offset: i32, bound: u16) -> u16 {
    u16::try_from(offset.clamp(0, i32::from(bound))).unwrap_or(bound)
}
