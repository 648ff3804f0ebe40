use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let total = app.section_count();

        let position = match app.scroller.current_section() {
            Some(section) => format!(
                " {}/{} {}",
                app.scroller.current_index().map(|i| i + 1).unwrap_or(0),
                total,
                section.display_title()
            ),
            None => " (empty story)".to_string(),
        };

        let status_text = match app.scroller.story().title.as_deref() {
            Some(title) => format!(" {} |{}", title, position),
            None => position,
        };

        let help_hint = " q:quit ↑/↓:section j/k:scroll 1-9:jump ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.chars().count() + help_hint.chars().count());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg).bg(theme.status_bg),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(theme.status_bg),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(theme.muted).bg(theme.status_bg),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
