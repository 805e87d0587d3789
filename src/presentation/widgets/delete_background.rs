//! Confirmation backdrop revealed behind a swiped row.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    widgets::{Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::swipe::{Affordance, SwipeDirection};

/// Cancel icon.
pub const CANCEL_ICON: &str = "✕";
/// Delete icon.
pub const DELETE_ICON: &str = "🗑";
/// Default confirmation prompt.
pub const DEFAULT_PROMPT: &str = "Delete this city?";

const EDGE_PADDING: u16 = 2;
const PROMPT_GAP: u16 = 3;
const ICON_GAP: u16 = 1;

/// Screen positions of the backdrop parts for a given row area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteBackgroundLayout {
    /// Prompt text.
    pub prompt: Rect,
    /// Cancel tap target.
    pub cancel: Rect,
    /// Delete tap target.
    pub delete: Rect,
}

/// Stateless backdrop with a prompt and the cancel/delete icons.
///
/// Painted only for end-to-start swipes; with no direction it draws nothing
/// and the row beneath shows through.
#[derive(Debug, Clone, Copy)]
pub struct DeleteBackground<'a> {
    direction: Option<SwipeDirection>,
    prompt: &'a str,
    style: Style,
}

impl<'a> DeleteBackground<'a> {
    /// Creates a backdrop for the current swipe direction.
    #[must_use]
    pub const fn new(direction: Option<SwipeDirection>, prompt: &'a str) -> Self {
        Self {
            direction,
            prompt,
            style: Style::new(),
        }
    }

    /// Sets the backdrop style.
    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Computes where the prompt and both tap targets land inside `area`.
    ///
    /// Parts are right-aligned and vertically centered. The prompt is
    /// truncated from the right when the row is too narrow.
    #[must_use]
    pub fn layout(&self, area: Rect) -> DeleteBackgroundLayout {
        let y = area.y + area.height / 2;
        let right = area.right().saturating_sub(EDGE_PADDING);

        let delete_width = icon_target_width(DELETE_ICON);
        let delete_x = right.saturating_sub(delete_width).max(area.x);
        let delete = Rect::new(delete_x, y, right.saturating_sub(delete_x), 1);

        let cancel_width = icon_target_width(CANCEL_ICON);
        let cancel_right = delete_x.saturating_sub(ICON_GAP);
        let cancel_x = cancel_right.saturating_sub(cancel_width).max(area.x);
        let cancel = Rect::new(cancel_x, y, cancel_right.saturating_sub(cancel_x), 1);

        let prompt_right = cancel_x.saturating_sub(PROMPT_GAP).max(area.x);
        let prompt_width = u16::try_from(self.prompt.width())
            .unwrap_or(u16::MAX)
            .min(prompt_right - area.x);
        let prompt = Rect::new(prompt_right - prompt_width, y, prompt_width, 1);

        DeleteBackgroundLayout {
            prompt,
            cancel,
            delete,
        }
    }

    /// Returns the affordance under `position`, if any.
    #[must_use]
    pub fn target_at(&self, area: Rect, position: Position) -> Option<Affordance> {
        let layout = self.layout(area);
        if layout.cancel.contains(position) {
            Some(Affordance::Cancel)
        } else if layout.delete.contains(position) {
            Some(Affordance::Delete)
        } else {
            None
        }
    }
}

impl Widget for DeleteBackground<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.direction != Some(SwipeDirection::EndToStart) || area.is_empty() {
            return;
        }

        Clear.render(area, buf);
        buf.set_style(area, self.style);

        let layout = self.layout(area);
        buf.set_stringn(
            layout.prompt.x,
            layout.prompt.y,
            self.prompt,
            usize::from(layout.prompt.width),
            self.style,
        );
        render_icon(CANCEL_ICON, layout.cancel, buf, self.style);
        render_icon(DELETE_ICON, layout.delete, buf, self.style);
    }
}

fn icon_target_width(icon: &str) -> u16 {
    u16::try_from(icon.width()).unwrap_or(1) + 2
}

fn render_icon(icon: &str, target: Rect, buf: &mut Buffer, style: Style) {
    if target.width < 3 {
        return;
    }
    buf.set_stringn(
        target.x + 1,
        target.y,
        icon,
        usize::from(target.width - 2),
        style,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_no_direction_draws_nothing() {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);

        DeleteBackground::new(None, DEFAULT_PROMPT)
            .style(Style::default().bg(Color::Red))
            .render(area, &mut buf);

        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn test_end_to_start_paints_prompt_and_backdrop() {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);

        DeleteBackground::new(Some(SwipeDirection::EndToStart), DEFAULT_PROMPT)
            .style(Style::default().bg(Color::Red))
            .render(area, &mut buf);

        assert!(row_text(&buf, 1).contains(DEFAULT_PROMPT));
        assert!(row_text(&buf, 1).contains(CANCEL_ICON));
        assert_eq!(buf[(0, 0)].bg, Color::Red);
        assert_eq!(buf[(39, 2)].bg, Color::Red);
    }

    #[test]
    fn test_layout_orders_prompt_cancel_delete() {
        let area = Rect::new(0, 4, 60, 3);
        let layout = DeleteBackground::new(None, DEFAULT_PROMPT).layout(area);

        assert_eq!(layout.prompt.y, 5);
        assert_eq!(layout.delete.right(), 58);
        assert!(layout.cancel.right() < layout.delete.x);
        assert!(layout.prompt.right() < layout.cancel.x);
        assert_eq!(usize::from(layout.prompt.width), DEFAULT_PROMPT.width());
    }

    #[test]
    fn test_target_at_exposes_two_targets() {
        let area = Rect::new(0, 0, 60, 3);
        let background = DeleteBackground::new(Some(SwipeDirection::EndToStart), DEFAULT_PROMPT);
        let layout = background.layout(area);

        assert_eq!(
            background.target_at(area, Position::new(layout.cancel.x + 1, 1)),
            Some(Affordance::Cancel)
        );
        assert_eq!(
            background.target_at(area, Position::new(layout.delete.x + 1, 1)),
            Some(Affordance::Delete)
        );
        assert_eq!(background.target_at(area, Position::new(0, 1)), None);
        assert_eq!(
            background.target_at(area, Position::new(layout.delete.x, 0)),
            None
        );
    }

    #[test]
    fn test_narrow_row_truncates_prompt() {
        let area = Rect::new(0, 0, 14, 1);
        let layout = DeleteBackground::new(None, DEFAULT_PROMPT).layout(area);

        assert!(usize::from(layout.prompt.width) < DEFAULT_PROMPT.width());
        assert!(layout.prompt.x >= area.x);
    }
}
