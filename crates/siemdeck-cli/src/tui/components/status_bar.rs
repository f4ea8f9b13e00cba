//! Bottom status bar: key hints and AI backend state

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use siemdeck_core::content::View;

use crate::tui::app::App;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let hints = match app.view {
        View::Alerts => " ↑↓ select  enter open  a analyze  r retry  d details  tab view  q quit",
        View::Overview => " ↑↓ select  enter expand  tab view  q quit",
        View::Deliverables => " ↑↓ select  enter go to  tab view  q quit",
        View::Rules | View::Playbooks | View::Artifacts => {
            " ↑↓ snippet  c copy  pgup/pgdn scroll  tab view  q quit"
        }
        _ => " ↑↓/pgup/pgdn scroll  tab view  1-9 jump  q quit",
    };

    let ai = match app.analysis.client().backend_name() {
        Some(model) => Span::styled(format!(" AI: {} ", model), Style::default().fg(theme.ai_color)),
        None => Span::styled(" AI: disabled ", theme.dim()),
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.view.label()),
            Style::default()
                .fg(theme.bg_color)
                .bg(theme.accent_color),
        ),
        ai,
        Span::styled(hints, theme.dim()),
    ]);

    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme.status_bar_bg_color)),
        area,
    );
}
