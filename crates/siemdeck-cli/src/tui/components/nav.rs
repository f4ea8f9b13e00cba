//! Navigation sidebar

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use siemdeck_core::content::View;

use crate::tui::app::App;
use crate::tui::utils::truncate_to_width;

/// Sidebar width including borders
pub const NAV_WIDTH: u16 = 26;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let inner_width = area.width.saturating_sub(2) as usize;

    let mut lines = vec![
        Line::from(Span::styled(
            truncate_to_width("SIEM & IR Pipeline", inner_width),
            theme.title(),
        )),
        Line::default(),
    ];

    for (i, view) in View::ALL.iter().enumerate() {
        let label = format!("{} {} {}", i + 1, view.icon().glyph(), view.label());
        let label = truncate_to_width(&label, inner_width);
        let style = if *view == app.view {
            theme.selected()
        } else {
            theme.text()
        };
        lines.push(Line::from(Span::styled(label, style)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border())
        .title(Span::styled(
            " siemdeck ",
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::BOLD),
        ));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
