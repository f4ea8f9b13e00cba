//! Dashboard views
//!
//! Each view renders into the content area. Text-heavy views build their
//! lines up front (so they can be tested without a terminal) and hand them
//! to a scrolled paragraph.

pub mod alerts;
pub mod code;
pub mod dashboard;
pub mod deliverables;
pub mod logs;
pub mod overview;
pub mod runbook;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
    Frame,
};

use super::markdown::wrap_runs;
use super::themes::Theme;

/// Bordered panel with a title
pub(crate) fn panel<'a>(title: impl Into<Line<'a>>, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border())
        .title(title)
        .title_style(theme.title())
        .padding(Padding::horizontal(1))
}

/// Usable text width inside a [`panel`]
pub(crate) fn inner_width(area: Rect) -> usize {
    area.width.saturating_sub(4) as usize
}

/// Usable text height inside a [`panel`]
pub(crate) fn inner_height(area: Rect) -> usize {
    area.height.saturating_sub(2) as usize
}

/// Word-wrap plain text (no markup interpretation)
pub(crate) fn wrap_plain(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap_runs(
        &[(text.to_string(), style)],
        width,
        Span::raw(""),
        Span::raw(""),
    )
}

/// View title, wrapped intro paragraph and a blank line
pub(crate) fn header(title: &str, intro: &str, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        title.to_string(),
        theme.heading(1),
    ))];
    lines.extend(wrap_plain(intro, width, theme.dim()));
    lines.push(Line::default());
    lines
}

pub(crate) fn section_title(text: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(theme.accent_color)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Scroll offset that keeps line `selected` in view
pub(crate) fn follow(selected: usize, height: usize) -> u16 {
    if height == 0 || selected < height {
        return 0;
    }
    (selected + 1 - height / 2).min(u16::MAX as usize) as u16
}

/// Render `lines` in a titled panel, scrolled by `scroll` (clamped to content)
pub(crate) fn render_scrolled(
    f: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'static>>,
    scroll: u16,
    theme: &Theme,
) {
    let max_scroll = lines.len().saturating_sub(inner_height(area)).min(u16::MAX as usize) as u16;
    let paragraph = Paragraph::new(lines)
        .block(panel(format!(" {} ", title), theme))
        .scroll((scroll.min(max_scroll), 0));
    f.render_widget(paragraph, area);
}

/// Compact age: `45s ago`, `5m ago`, `3h ago`
pub(crate) fn format_age(seconds: i64) -> String {
    match seconds {
        s if s < 60 => format!("{}s ago", s.max(0)),
        s if s < 3600 => format!("{}m ago", s / 60),
        s => format!("{}h ago", s / 3600),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(15), "15s ago");
        assert_eq!(format_age(300), "5m ago");
        assert_eq!(format_age(3 * 3600 + 59), "3h ago");
    }

    #[test]
    fn test_follow_keeps_selection_visible() {
        assert_eq!(follow(3, 10), 0);
        let offset = follow(25, 10) as usize;
        assert!(offset <= 25 && 25 < offset + 10);
    }
}
