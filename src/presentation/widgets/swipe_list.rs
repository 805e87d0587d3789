//! Scrollable list of swipe-to-delete rows.

use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::{
        Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};
use tracing::debug;

use super::delete_background::{DEFAULT_PROMPT, DeleteBackground};
use super::swipe_row::{OnDelete, RowContent, SwipeRow, SwipeToDelete};
use crate::domain::list_store::ListStore;
use crate::domain::swipe::{Affordance, DismissalState, SwipeConfig};
use crate::presentation::theme::Theme;

const DEFAULT_KEYBOARD_STEP: u16 = 8;

/// State for [`SwipeList`]: the item store and one mounted row per item.
///
/// Rows are keyed by item identity. Whenever the store revision changes,
/// rows for removed items are unmounted and new items get a fresh row.
pub struct SwipeListState<T, K> {
    store: ListStore<T, K>,
    rows: HashMap<K, SwipeToDelete<T>>,
    on_delete: OnDelete<T>,
    config: SwipeConfig,
    prompt: String,
    keyboard_step: u16,
    synced_revision: Option<u64>,
    selected: Option<usize>,
    scroll: usize,
    row_areas: Vec<(usize, K, Rect)>,
    dragging: Option<K>,
}

impl<T: Clone, K: Clone + Eq + Hash> SwipeListState<T, K> {
    /// Creates the state and mounts a row for every item in `store`.
    #[must_use]
    pub fn new(store: ListStore<T, K>, on_delete: OnDelete<T>, config: SwipeConfig) -> Self {
        let mut state = Self {
            store,
            rows: HashMap::new(),
            on_delete,
            config,
            prompt: DEFAULT_PROMPT.to_string(),
            keyboard_step: DEFAULT_KEYBOARD_STEP,
            synced_revision: None,
            selected: None,
            scroll: 0,
            row_areas: Vec::new(),
            dragging: None,
        };
        state.sync();
        state
    }

    /// Sets the confirmation prompt shown behind swiped rows.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Sets how far one keyboard step drags a row, in columns.
    #[must_use]
    pub fn with_keyboard_step(mut self, step: u16) -> Self {
        self.keyboard_step = step.max(1);
        self
    }

    #[must_use]
    pub const fn store(&self) -> &ListStore<T, K> {
        &self.store
    }

    #[must_use]
    pub fn row(&self, key: &K) -> Option<&SwipeToDelete<T>> {
        self.rows.get(key)
    }

    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn selected_key(&self) -> Option<K> {
        self.selected
            .and_then(|index| self.store.items().get(index))
            .map(|item| self.store.key_of(item))
    }

    /// Returns true while any row is playing its exit animation.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.rows.values().any(|row| row.state().is_deleting())
    }

    /// Removes `item` from the store and unmounts its row.
    ///
    /// Absent items are ignored. A finished row is dropped even when another
    /// item still shares its key, so that item gets a fresh row.
    pub fn remove(&mut self, item: &T) -> bool {
        let key = self.store.key_of(item);
        if self.rows.get(&key).is_some_and(SwipeToDelete::is_removed) {
            self.rows.remove(&key);
        }
        let removed = self.store.remove(item);
        self.sync();
        removed
    }

    /// Reconciles mounted rows with the store.
    pub fn sync(&mut self) {
        if self.synced_revision == Some(self.store.revision()) {
            return;
        }

        let store = &self.store;
        self.rows.retain(|key, _| store.contains_key(key));
        for item in self.store.items() {
            let key = self.store.key_of(item);
            self.rows.entry(key).or_insert_with(|| {
                SwipeToDelete::new(item.clone(), self.on_delete.clone(), &self.config)
            });
        }

        if self
            .dragging
            .as_ref()
            .is_some_and(|key| !self.rows.contains_key(key))
        {
            self.dragging = None;
        }

        let len = self.store.len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(index) => Some(index.min(len - 1)),
            None => Some(0),
        };
        self.scroll = self.scroll.min(len.saturating_sub(1));
        self.synced_revision = Some(self.store.revision());

        debug!(rows = self.rows.len(), revision = self.store.revision(), "Rows reconciled");
    }

    /// Advances exit animations. Returns true if any row is still animating.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let mut animating = false;
        for row in self.rows.values_mut() {
            if row.state().is_deleting() {
                row.tick(delta);
                animating = true;
            }
        }
        animating
    }

    pub fn select_next(&mut self) {
        let len = self.store.len();
        if len > 0 {
            self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(len - 1)));
        }
    }

    pub fn select_previous(&mut self) {
        if !self.store.is_empty() {
            self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
        }
    }

    pub fn select_first(&mut self) {
        if !self.store.is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn select_last(&mut self) {
        if let Some(last) = self.store.len().checked_sub(1) {
            self.selected = Some(last);
        }
    }

    /// Handles a key event. Returns true if it was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let step = i32::from(self.keyboard_step);
        match (key.code, key.modifiers) {
            (KeyCode::Char('j') | KeyCode::Down, KeyModifiers::NONE) => {
                self.select_next();
                true
            }
            (KeyCode::Char('k') | KeyCode::Up, KeyModifiers::NONE) => {
                self.select_previous();
                true
            }
            (KeyCode::Char('g'), KeyModifiers::NONE) => {
                self.select_first();
                true
            }
            (KeyCode::Char('G'), KeyModifiers::SHIFT) => {
                self.select_last();
                true
            }
            (KeyCode::Char('h') | KeyCode::Left, KeyModifiers::NONE) => {
                self.with_selected_row(|row| {
                    row.nudge(step);
                })
            }
            (KeyCode::Char('l') | KeyCode::Right, KeyModifiers::NONE) => {
                self.with_selected_row(|row| {
                    row.nudge(-step);
                })
            }
            (KeyCode::Char('d') | KeyCode::Enter | KeyCode::Delete, KeyModifiers::NONE) => {
                self.tap_selected(Affordance::Delete)
            }
            (KeyCode::Char('c') | KeyCode::Esc | KeyCode::Backspace, KeyModifiers::NONE) => {
                self.tap_selected(Affordance::Cancel)
            }
            _ => false,
        }
    }

    /// Handles a mouse event. Returns true if it was consumed.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.select_next();
                true
            }
            MouseEventKind::ScrollUp => {
                self.select_previous();
                true
            }
            MouseEventKind::Down(MouseButton::Left) => self.press(mouse.column, mouse.row),
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(row) = self.dragging.as_ref().and_then(|key| self.rows.get_mut(key)) else {
                    return false;
                };
                row.drag_to(mouse.column);
                true
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some(key) = self.dragging.take() else {
                    return false;
                };
                if let Some(row) = self.rows.get_mut(&key) {
                    row.release();
                }
                true
            }
            _ => false,
        }
    }

    fn press(&mut self, column: u16, row: u16) -> bool {
        let position = Position::new(column, row);
        let Some((index, key, area)) = self
            .row_areas
            .iter()
            .find(|(_, _, area)| area.contains(position))
            .cloned()
        else {
            return false;
        };

        self.selected = Some(index);
        let Some(swipe_row) = self.rows.get_mut(&key) else {
            return false;
        };

        if swipe_row.state() == DismissalState::RevealedToStart
            && let Some(affordance) = DeleteBackground::new(swipe_row.direction(), &self.prompt)
                .target_at(area, position)
        {
            return swipe_row.tap(affordance);
        }

        swipe_row.press(column);
        self.dragging = Some(key);
        true
    }

    fn with_selected_row(&mut self, f: impl FnOnce(&mut SwipeToDelete<T>)) -> bool {
        let Some(key) = self.selected_key() else {
            return false;
        };
        self.rows.get_mut(&key).map(f).is_some()
    }

    fn tap_selected(&mut self, affordance: Affordance) -> bool {
        let Some(key) = self.selected_key() else {
            return false;
        };
        self.rows
            .get_mut(&key)
            .filter(|row| row.state() == DismissalState::RevealedToStart)
            .is_some_and(|row| row.tap(affordance))
    }

    fn scroll_to_selection(&mut self, per_page: usize) {
        if let Some(selected) = self.selected {
            if selected < self.scroll {
                self.scroll = selected;
            } else if selected >= self.scroll + per_page {
                self.scroll = selected + 1 - per_page;
            }
        }
    }
}

/// Renders a [`SwipeListState`] as a vertical list of rows.
pub struct SwipeList<'a, T, K> {
    content: RowContent<'a, T>,
    theme: &'a Theme,
    row_height: u16,
    empty_text: &'a str,
    _key: PhantomData<fn() -> K>,
}

impl<'a, T, K> SwipeList<'a, T, K> {
    #[must_use]
    pub const fn new(content: RowContent<'a, T>, theme: &'a Theme) -> Self {
        Self {
            content,
            theme,
            row_height: 3,
            empty_text: "Nothing left to swipe.",
            _key: PhantomData,
        }
    }

    #[must_use]
    pub const fn row_height(mut self, height: u16) -> Self {
        self.row_height = if height == 0 { 1 } else { height };
        self
    }

    #[must_use]
    pub const fn empty_text(mut self, text: &'a str) -> Self {
        self.empty_text = text;
        self
    }
}

impl<T: Clone, K: Clone + Eq + Hash> StatefulWidget for SwipeList<'_, T, K> {
    type State = SwipeListState<T, K>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.sync();
        state.row_areas.clear();

        if area.is_empty() {
            return;
        }

        if state.store.is_empty() {
            let y = area.y + area.height / 2;
            Paragraph::new(self.empty_text)
                .style(self.theme.dimmed_style)
                .centered()
                .render(Rect::new(area.x, y, area.width, 1), buf);
            return;
        }

        let len = state.store.len();
        let per_page = usize::from((area.height / self.row_height).max(1));
        let overflow = len > per_page;
        let list_area = if overflow {
            Rect {
                width: area.width.saturating_sub(1),
                ..area
            }
        } else {
            area
        };
        state.scroll_to_selection(per_page);

        let mut y = list_area.y;
        for (index, item) in state.store.items().iter().enumerate().skip(state.scroll) {
            if y >= list_area.bottom() {
                break;
            }
            let key = state.store.key_of(item);
            let Some(row) = state.rows.get_mut(&key) else {
                continue;
            };

            let height = row.visible_height(self.row_height).min(list_area.bottom() - y);
            if height == 0 {
                continue;
            }

            let row_area = Rect::new(list_area.x, y, list_area.width, height);
            SwipeRow::new(self.content, &state.prompt, self.theme)
                .selected(state.selected == Some(index))
                .full_height(self.row_height)
                .render(row_area, buf, row);
            state.row_areas.push((index, key, row_area));
            y += height;
        }

        if overflow {
            let mut scrollbar_state =
                ScrollbarState::new(len.saturating_sub(per_page)).position(state.scroll);
            Scrollbar::new(ScrollbarOrientation::VerticalRight).render(
                area,
                buf,
                &mut scrollbar_state,
            );
        }
    }
}
