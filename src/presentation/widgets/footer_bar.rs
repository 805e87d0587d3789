use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::domain::swipe::DismissalState;
use crate::presentation::theme::Theme;

pub struct FooterBarStyle {
    pub key_style: Style,
    pub label_style: Style,
}

impl FooterBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            key_style: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            label_style: theme.dimmed_style,
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// Key hints for the state of the selected row.
pub struct FooterBar {
    context: Option<DismissalState>,
    style: FooterBarStyle,
}

impl FooterBar {
    #[must_use]
    pub const fn new(context: Option<DismissalState>, style: FooterBarStyle) -> Self {
        Self { context, style }
    }

    #[must_use]
    pub const fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.context {
            None => &[("q", "Quit")],
            Some(DismissalState::Idle) => &[
                ("j/k", "Move"),
                ("h/←", "Swipe"),
                ("drag", "Swipe"),
                ("q", "Quit"),
            ],
            Some(DismissalState::RevealedToStart) => &[
                ("d/Enter", "Delete"),
                ("c/Esc", "Cancel"),
                ("l/→", "Close"),
            ],
            Some(DismissalState::PendingDelete | DismissalState::Deleting) => {
                &[("…", "Removing"), ("q", "Quit")]
            }
        }
    }
}

impl Widget for FooterBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (key, label) in self.hints() {
            spans.push(Span::styled(format!(" {key} "), self.style.key_style));
            spans.push(Span::styled(format!(" {label}  "), self.style.label_style));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
