use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use storyreel_core::Section;
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::theme::Theme;
use crate::themes::accent_color;

/// Gap between counters laid out on one row
const COUNTER_GAP: &str = "     ";

pub struct StoryWidget;

impl StoryWidget {
    /// Draw every section that overlaps the viewport at the current scroll
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), area);

        let height = app.viewport_height.min(area.height) as i64;
        if height == 0 {
            return;
        }
        let scroll = app.animator.current_scroll() as i64;

        for (index, section) in app.scroller.sections().iter().enumerate() {
            let top = index as i64 * height - scroll;
            if top >= area.height as i64 || top + height <= 0 {
                continue;
            }

            let lines = section_lines(section, area.width, height as u16, theme);
            let skip = (-top).max(0) as usize;
            let y = area.y as i64 + top.max(0);
            let visible = (height - skip as i64).min(area.y as i64 + area.height as i64 - y);
            if visible <= 0 {
                continue;
            }

            let rect = Rect::new(area.x, y as u16, area.width, visible as u16);
            let slice: Vec<Line> = lines.into_iter().skip(skip).take(visible as usize).collect();
            frame.render_widget(Paragraph::new(slice).alignment(Alignment::Center), rect);
        }
    }
}

/// Lay out one section as exactly `height` centered lines
///
/// Sections that have not entered view yet are drawn muted; once active the
/// title takes the section accent.
pub fn section_lines(section: &Section, width: u16, height: u16, theme: &Theme) -> Vec<Line<'static>> {
    let accent = accent_color(section.accent.as_deref(), theme);
    let (title_style, body_style) = if section.is_active() {
        (
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
            Style::default().fg(theme.fg),
        )
    } else {
        (
            Style::default().fg(theme.muted),
            Style::default().fg(theme.muted),
        )
    };

    let text_width = width.saturating_sub(4).max(1) as usize;
    let mut content: Vec<Line<'static>> = Vec::new();

    content.push(Line::from(Span::styled(
        section.display_title().to_string(),
        title_style,
    )));

    if let Some(body) = section.body.as_deref() {
        content.push(Line::default());
        for line in wrap_text(body, text_width) {
            content.push(Line::from(Span::styled(line, body_style)));
        }
    }

    if !section.counters.is_empty() {
        content.push(Line::default());
        let number_style = Style::default().fg(theme.fg).add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(theme.muted);

        let mut numbers = Vec::new();
        let mut labels = Vec::new();
        for (i, counter) in section.counters.iter().enumerate() {
            let text = counter.text();
            let label = counter.label.clone().unwrap_or_default();
            let cell = text.width().max(label.width());
            if i > 0 {
                numbers.push(Span::raw(COUNTER_GAP));
                labels.push(Span::raw(COUNTER_GAP));
            }
            numbers.push(Span::styled(pad_center(&text, cell), number_style));
            labels.push(Span::styled(pad_center(&label, cell), label_style));
        }
        content.push(Line::from(numbers));
        if section.counters.iter().any(|c| c.label.is_some()) {
            content.push(Line::from(labels));
        }
    }

    let height = height as usize;
    content.truncate(height);
    let top_pad = (height - content.len()) / 2;

    let mut lines = Vec::with_capacity(height);
    lines.extend(std::iter::repeat_with(Line::default).take(top_pad));
    lines.extend(content);
    lines.resize_with(height, Line::default);
    lines
}

/// Greedy word wrap by display width; explicit newlines are kept
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
            } else if line.width() + 1 + word.width() <= width {
                line.push(' ');
                line.push_str(word);
            } else {
                out.push(std::mem::take(&mut line));
                line.push_str(word);
            }
        }
        out.push(line);
    }

    out
}

fn pad_center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}
