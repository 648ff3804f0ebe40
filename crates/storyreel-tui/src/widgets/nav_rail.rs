use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::themes::accent_color;

pub struct NavRailWidget;

impl NavRailWidget {
    /// Draw one row per nav entry and remember the inner area for clicks
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &app.theme;
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(theme.muted))
            .style(Style::default().bg(theme.bg_alt));
        let inner = block.inner(area);

        let lines: Vec<Line> = app
            .scroller
            .nav()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                // Entries keep the last accent they were given, even when inactive
                let accent = accent_color(entry.accent.as_deref(), theme);
                let marker = if entry.active { "▍" } else { " " };
                let label_style = if entry.active {
                    Style::default().fg(accent).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.muted)
                };
                let dot_style = if entry.accent.is_some() {
                    Style::default().fg(accent)
                } else {
                    Style::default().fg(theme.muted)
                };

                let key_hint = if i < 9 {
                    format!("{} ", i + 1)
                } else {
                    "  ".to_string()
                };

                Line::from(vec![
                    Span::styled(marker, Style::default().fg(accent)),
                    Span::styled(key_hint, Style::default().fg(theme.muted)),
                    Span::styled("● ", dot_style),
                    Span::styled(entry.display_label().to_string(), label_style),
                ])
            })
            .collect();

        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(lines), inner);
        app.nav_area = inner;
    }
}
