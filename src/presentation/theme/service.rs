use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub on_danger_style: Style,
    pub selection_style: Style,
    pub dimmed_style: Style,
    pub base_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Yellow", "Red")
    }
}

impl Theme {
    pub fn new(accent_color_str: &str, danger_color_str: &str) -> Self {
        let accent = parse_color(accent_color_str, Color::Yellow);
        let danger = parse_color(danger_color_str, Color::Red);
        Self::from_colors(accent, danger)
    }

    #[must_use]
    pub fn from_colors(accent: Color, danger: Color) -> Self {
        Self {
            accent,
            on_danger_style: Style::default()
                .bg(danger)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            selection_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            dimmed_style: Style::default().fg(Color::DarkGray),
            base_style: Style::default().fg(Color::Reset).bg(Color::Reset),
        }
    }
}

fn parse_color(s: &str, fallback: Color) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Ok((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => fallback,
    }
}

fn parse_hex_color(s: &str) -> Result<(u8, u8, u8), ()> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return Err(());
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| ());

    match s.len() {
        6 => Ok((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => Ok((
            channel(&s[0..1].repeat(2))?,
            channel(&s[1..2].repeat(2))?,
            channel(&s[2..3].repeat(2))?,
        )),
        _ => Err(()),
    }
}
