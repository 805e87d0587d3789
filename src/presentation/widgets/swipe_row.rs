//! Swipe-to-delete row container.

use std::sync::Arc;
use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};
use tracing::{debug, info};

use super::delete_background::DeleteBackground;
use crate::domain::swipe::{
    Affordance, DismissalState, GestureTracker, SwipeConfig, SwipeDirection, SwipeEvent,
    SwipeMachine,
};
use crate::presentation::theme::Theme;

/// Removal callback invoked once per confirmed deletion.
pub type OnDelete<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Renders the content of a row.
pub type RowContent<'a, T> = &'a dyn Fn(&T) -> Line<'static>;

/// One mounted row: item, gesture, dismissal state and exit animation.
pub struct SwipeToDelete<T> {
    item: T,
    on_delete: OnDelete<T>,
    machine: SwipeMachine,
    gesture: GestureTracker,
    animations: bool,
    exit_effect: Option<Effect>,
    pending_fx: Duration,
}

impl<T: Clone> SwipeToDelete<T> {
    /// Mounts a row for `item`.
    #[must_use]
    pub fn new(item: T, on_delete: OnDelete<T>, config: &SwipeConfig) -> Self {
        Self {
            item,
            on_delete,
            machine: SwipeMachine::new(config.exit_duration),
            gesture: GestureTracker::new(config.dismiss_threshold),
            animations: config.animations,
            exit_effect: None,
            pending_fx: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn item(&self) -> &T {
        &self.item
    }

    #[must_use]
    pub const fn state(&self) -> DismissalState {
        self.machine.state()
    }

    #[must_use]
    pub fn affordances(&self) -> &'static [Affordance] {
        self.machine.affordances()
    }

    #[must_use]
    pub const fn offset(&self) -> u16 {
        self.gesture.offset()
    }

    #[must_use]
    pub const fn direction(&self) -> Option<SwipeDirection> {
        self.gesture.direction()
    }

    #[must_use]
    pub const fn is_removed(&self) -> bool {
        self.machine.is_removed()
    }

    /// Returns true while a pointer drag is in progress on this row.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn set_width(&mut self, width: u16) {
        self.gesture.set_width(width);
    }

    /// Starts a pointer drag. Ignored once a delete is confirmed.
    pub fn press(&mut self, column: u16) {
        if !self.machine.state().is_deleting() {
            self.gesture.press(column);
        }
    }

    pub fn drag_to(&mut self, column: u16) {
        self.gesture.drag_to(column);
    }

    /// Ends a pointer drag. Returns true if the drag settled into a state.
    pub fn release(&mut self) -> bool {
        self.gesture
            .release()
            .is_some_and(|event| self.dispatch(event))
    }

    /// Keyboard drag by `delta` columns, positive toward the start edge.
    pub fn nudge(&mut self, delta: i32) -> bool {
        if self.machine.state().is_deleting() {
            return false;
        }
        self.gesture
            .nudge(delta)
            .is_some_and(|event| self.dispatch(event))
    }

    /// Taps one of the revealed affordances.
    pub fn tap(&mut self, affordance: Affordance) -> bool {
        self.dispatch(affordance.event())
    }

    /// Advances the exit animation.
    ///
    /// Calls the removal callback and returns true on the tick where the exit
    /// duration is reached. Never fires more than once per row.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if !self.machine.state().is_deleting() {
            return false;
        }

        self.pending_fx = self.pending_fx.saturating_add(delta);

        if self.machine.tick(delta) {
            info!(elapsed = ?self.machine.elapsed(), "Exit finished, removing row");
            (self.on_delete)(self.item.clone());
            return true;
        }
        false
    }

    /// Row height while shrinking toward its top edge.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn visible_height(&self, full_height: u16) -> u16 {
        if !self.animations || !self.machine.state().is_deleting() {
            return full_height;
        }
        let remaining = 1.0 - self.machine.exit_progress();
        (f32::from(full_height) * remaining).ceil() as u16
    }

    fn dispatch(&mut self, event: SwipeEvent) -> bool {
        let from = self.machine.state();
        match self.machine.handle(event) {
            Ok(to) => {
                if from != to {
                    debug!(%from, %to, %event, "Swipe transition");
                }
                match to {
                    DismissalState::Idle => self.gesture.reset(),
                    DismissalState::PendingDelete => self.start_exit(),
                    DismissalState::RevealedToStart | DismissalState::Deleting => {}
                }
                true
            }
            Err(e) => {
                debug!(error = %e, "Swipe event ignored");
                false
            }
        }
    }

    fn start_exit(&mut self) {
        self.pending_fx = Duration::ZERO;
        if self.animations {
            let millis = u32::try_from(self.machine.exit_duration().as_millis()).unwrap_or(u32::MAX);
            self.exit_effect = Some(fx::dissolve((millis, Interpolation::Linear)));
        }
    }
}

/// Draws a [`SwipeToDelete`] row: the backdrop, the content shifted by the
/// drag offset, and the exit effect.
pub struct SwipeRow<'a, T> {
    content: RowContent<'a, T>,
    prompt: &'a str,
    theme: &'a Theme,
    selected: bool,
    full_height: u16,
}

impl<'a, T> SwipeRow<'a, T> {
    #[must_use]
    pub const fn new(content: RowContent<'a, T>, prompt: &'a str, theme: &'a Theme) -> Self {
        Self {
            content,
            prompt,
            theme,
            selected: false,
            full_height: 1,
        }
    }

    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Height of the row before any shrinking.
    #[must_use]
    pub const fn full_height(mut self, height: u16) -> Self {
        self.full_height = height;
        self
    }
}

impl<T: Clone> StatefulWidget for SwipeRow<'_, T> {
    type State = SwipeToDelete<T>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.is_empty() {
            return;
        }

        state.set_width(area.width);

        let full = Rect {
            height: self.full_height.max(area.height),
            ..area
        };
        let text_row = Rect::new(full.x, full.y + full.height / 2, full.width, 1);

        let mut content = Buffer::empty(full);
        let (content_style, marker) = if self.selected {
            (self.theme.selection_style, "▌ ")
        } else {
            (self.theme.base_style, "  ")
        };
        content.set_style(full, content_style);

        let mut spans = vec![Span::styled(marker, Style::default().fg(self.theme.accent))];
        spans.extend((self.content)(state.item()).spans);
        Paragraph::new(Line::from(spans))
            .style(content_style)
            .render(text_row, &mut content);

        let mut composed = Buffer::empty(full);
        DeleteBackground::new(state.direction(), self.prompt)
            .style(self.theme.on_danger_style)
            .render(full, &mut composed);

        let offset = state.offset().min(full.width);
        for y in full.top()..full.bottom() {
            for x in full.left()..full.right().saturating_sub(offset) {
                if let (Some(src), Some(dst)) =
                    (content.cell((x + offset, y)), composed.cell_mut((x, y)))
                {
                    *dst = src.clone();
                }
            }
        }

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let (Some(src), Some(dst)) = (composed.cell((x, y)), buf.cell_mut((x, y))) {
                    *dst = src.clone();
                }
            }
        }

        if let Some(effect) = state.exit_effect.as_mut() {
            let duration = state.pending_fx;
            state.pending_fx = Duration::ZERO;
            effect.process(duration.into(), buf, area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::delete_background::{CANCEL_ICON, DEFAULT_PROMPT};
    use std::sync::Mutex;

    const EXIT: Duration = Duration::from_millis(500);

    fn config() -> SwipeConfig {
        SwipeConfig {
            dismiss_threshold: 40,
            exit_duration: EXIT,
            animations: true,
        }
    }

    fn row(item: &str) -> (SwipeToDelete<String>, Arc<Mutex<Vec<String>>>) {
        let deleted = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&deleted);
        let on_delete: OnDelete<String> = Arc::new(move |item| sink.lock().unwrap().push(item));
        let mut row = SwipeToDelete::new(item.to_string(), on_delete, &config());
        row.set_width(80);
        (row, deleted)
    }

    fn swipe_open(row: &mut SwipeToDelete<String>) {
        row.press(75);
        row.drag_to(20);
        assert!(row.release());
    }

    fn line_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_short_drag_stays_idle() {
        let (mut row, deleted) = row("Austin, TX");
        row.press(75);
        row.drag_to(50);
        row.release();

        assert_eq!(row.state(), DismissalState::Idle);
        assert_eq!(row.offset(), 0);
        assert!(row.affordances().is_empty());
        assert!(deleted.lock().unwrap().is_empty());
    }

    #[test]
    fn test_drag_past_threshold_reveals_two_targets() {
        let (mut row, _) = row("Austin, TX");
        swipe_open(&mut row);

        assert_eq!(row.state(), DismissalState::RevealedToStart);
        assert_eq!(row.affordances(), &[Affordance::Cancel, Affordance::Delete]);
    }

    #[test]
    fn test_delete_fires_once_after_exit_duration() {
        let (mut row, deleted) = row("Brunswick, ME");
        swipe_open(&mut row);
        assert!(row.tap(Affordance::Delete));

        let tick = Duration::from_millis(33);
        let mut elapsed = Duration::ZERO;
        while elapsed + tick < EXIT {
            assert!(!row.tick(tick));
            elapsed += tick;
        }
        assert!(deleted.lock().unwrap().is_empty());

        assert!(row.tick(tick));
        assert!(!row.tick(tick));
        assert_eq!(*deleted.lock().unwrap(), vec!["Brunswick, ME".to_string()]);
    }

    #[test]
    fn test_cancel_resets_without_deleting() {
        let (mut row, deleted) = row("A");
        swipe_open(&mut row);

        assert!(row.tap(Affordance::Cancel));
        assert_eq!(row.state(), DismissalState::Idle);
        assert_eq!(row.offset(), 0);

        assert!(!row.tick(Duration::from_secs(5)));
        assert!(deleted.lock().unwrap().is_empty());
    }

    #[test]
    fn test_gestures_ignored_while_deleting() {
        let (mut row, _) = row("A");
        swipe_open(&mut row);
        row.tap(Affordance::Delete);

        assert!(!row.tap(Affordance::Delete));
        assert!(!row.tap(Affordance::Cancel));
        assert!(!row.nudge(-80));
        row.press(10);
        assert!(!row.is_dragging());
        assert_eq!(row.state(), DismissalState::PendingDelete);
    }

    #[test]
    fn test_visible_height_shrinks() {
        let (mut row, _) = row("A");
        assert_eq!(row.visible_height(3), 3);

        swipe_open(&mut row);
        row.tap(Affordance::Delete);
        row.tick(Duration::from_millis(250));
        assert_eq!(row.visible_height(3), 2);

        row.tick(Duration::from_millis(250));
        assert_eq!(row.visible_height(3), 0);
    }

    #[test]
    fn test_render_idle_shows_content() {
        let (mut row, _) = row("Austin, TX");
        let theme = Theme::default();
        let content = |item: &String| Line::from(item.clone());
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);

        SwipeRow::new(&content, DEFAULT_PROMPT, &theme)
            .full_height(3)
            .render(area, &mut buf, &mut row);

        assert!(line_text(&buf, 1).contains("Austin, TX"));
        assert!(!line_text(&buf, 1).contains(DEFAULT_PROMPT));
    }

    #[test]
    fn test_render_revealed_shows_backdrop() {
        let (mut row, _) = row("Austin, TX");
        let theme = Theme::default();
        let content = |item: &String| Line::from(item.clone());
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);
        swipe_open(&mut row);

        SwipeRow::new(&content, DEFAULT_PROMPT, &theme)
            .full_height(3)
            .render(area, &mut buf, &mut row);

        let text = line_text(&buf, 1);
        assert!(text.contains(DEFAULT_PROMPT));
        assert!(text.contains(CANCEL_ICON));
        assert!(!text.contains("Austin, TX"));
    }
}
