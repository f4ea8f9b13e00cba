//! Mock log viewer

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use siemdeck_core::content::{LogEntry, View, MOCK_LOGS};

use super::{inner_height, panel};
use crate::tui::app::App;
use crate::tui::themes::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let lines = lines(app);
    let max_scroll = lines.len().saturating_sub(inner_height(area)) as u16;

    let paragraph = Paragraph::new(lines)
        .block(panel(format!(" {} ", View::Logs.label()), &app.theme))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll.min(max_scroll), 0));
    f.render_widget(paragraph, area);
}

pub(crate) fn lines(app: &App) -> Vec<Line<'static>> {
    let lines: Vec<Line<'static>> = MOCK_LOGS
        .iter()
        .map(|entry| log_line(entry, app, &app.theme))
        .collect();
    if lines.is_empty() {
        return vec![Line::from(Span::styled(
            "No log entries to display.",
            app.theme.dim(),
        ))];
    }
    lines
}

fn log_line(entry: &LogEntry, app: &App, theme: &Theme) -> Line<'static> {
    let color = theme.log_level_color(entry.level);
    let mut spans = vec![
        Span::styled(
            entry.timestamp(app.now).format("%H:%M:%S ").to_string(),
            theme.dim(),
        ),
        Span::styled(
            format!("{} {:<5} ", entry.level.icon().glyph(), entry.level.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(source) = entry.source {
        spans.push(Span::styled(
            format!("[{}] ", source),
            Style::default().fg(theme.ai_color),
        ));
    }
    spans.push(Span::styled(entry.message.to_string(), theme.text()));
    Line::from(spans)
}
