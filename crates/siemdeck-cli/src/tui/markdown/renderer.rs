//! Block to line rendering

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use siemdeck_core::markup::Block;

use super::inline::{styled_runs, wrap_runs};
use crate::tui::themes::Theme;
use crate::tui::utils::display_width;

/// Render formatted blocks to styled lines
pub fn render_blocks(blocks: &[Block], width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                let runs = styled_runs(text, theme.heading(*level));
                lines.extend(wrap_runs(&runs, width, Span::raw(""), Span::raw("")));
            }
            Block::Paragraph { text } => {
                let runs = styled_runs(text, theme.text());
                lines.extend(wrap_runs(&runs, width, Span::raw(""), Span::raw("")));
            }
            Block::List { ordered, items } => {
                render_list(*ordered, items, width, theme, &mut lines);
            }
            Block::CodeBlock { text, language } => {
                render_code(text, language.as_deref(), theme, &mut lines);
            }
            Block::LineBreak => lines.push(Line::default()),
        }
    }
    lines
}

fn render_list(
    ordered: bool,
    items: &[String],
    width: usize,
    theme: &Theme,
    lines: &mut Vec<Line<'static>>,
) {
    let marker_style = Style::default().fg(theme.accent_color);
    for (i, item) in items.iter().enumerate() {
        let marker = if ordered {
            format!("{}. ", i + 1)
        } else {
            "• ".to_string()
        };
        let indent = " ".repeat(display_width(&marker));
        let runs = styled_runs(item, theme.text());
        lines.extend(wrap_runs(
            &runs,
            width,
            Span::styled(marker, marker_style),
            Span::raw(indent),
        ));
    }
}

/// Code is shown verbatim: no wrapping, no emphasis
fn render_code(text: &str, language: Option<&str>, theme: &Theme, lines: &mut Vec<Line<'static>>) {
    let bg = Style::default().bg(theme.code_bg_color);
    if let Some(language) = language {
        lines.push(
            Line::from(Span::styled(
                format!(" {} ", language),
                Style::default()
                    .fg(theme.dim_color)
                    .add_modifier(Modifier::ITALIC),
            ))
            .style(bg),
        );
    }
    for line in text.split('\n') {
        lines.push(
            Line::from(Span::styled(
                format!(" {}", line),
                Style::default().fg(theme.text_color),
            ))
            .style(bg),
        );
    }
}
