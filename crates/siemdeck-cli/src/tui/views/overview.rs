//! Project phases

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};
use siemdeck_core::content::{PlanPhase, View, PLAN_PHASES};
use siemdeck_core::markup::Block;

use super::{follow, header, inner_height, inner_width, render_scrolled, section_title, wrap_plain};
use crate::tui::app::App;
use crate::tui::markdown::render_blocks;
use crate::tui::themes::Theme;

const INTRO: &str = "Following the consolidated plan to build an automated, cloud-native SIEM & Incident Response pipeline. Select a phase and press enter to see details and conceptual deliverables.";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let (lines, selected_line) = lines(app, inner_width(area));
    let scroll = follow(selected_line, inner_height(area));
    render_scrolled(f, area, View::Overview.label(), lines, scroll, &app.theme);
}

/// Lines for every phase card, plus the index of the selected card's first line
pub(crate) fn lines(app: &App, width: usize) -> (Vec<Line<'static>>, usize) {
    let theme = &app.theme;
    let mut lines = header("Project Phases & Plan", INTRO, width, theme);
    let mut selected_line = 0;

    for (i, phase) in PLAN_PHASES.iter().enumerate() {
        if i == app.phase_cursor {
            selected_line = lines.len();
        }
        let expanded = app.expanded_phase == Some(i);
        lines.extend(phase_card(phase, i == app.phase_cursor, expanded, width, theme));
        lines.push(Line::default());
    }

    (lines, selected_line)
}

fn phase_card(
    phase: &PlanPhase,
    selected: bool,
    expanded: bool,
    width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let title_style = if selected {
        theme.selected()
    } else {
        Style::default()
            .fg(theme.title_color)
            .add_modifier(Modifier::BOLD)
    };
    let status_color = theme.phase_status_color(phase.status);

    let mut lines = vec![Line::from(vec![
        Span::styled(if expanded { "▾ " } else { "▸ " }, theme.dim()),
        Span::styled(format!("{} {}", phase.icon.glyph(), phase.title), title_style),
        Span::raw("  "),
        Span::styled(
            format!("[{} {}]", phase.status.icon().glyph(), phase.status.label()),
            Style::default().fg(status_color),
        ),
    ])];
    lines.extend(wrap_plain(phase.description, width, theme.text()));

    if expanded {
        lines.push(section_title("Key Actions", theme));
        lines.extend(render_blocks(
            &[Block::list(false, phase.key_actions.iter().copied())],
            width,
            theme,
        ));
        lines.push(section_title("Deliverables", theme));
        lines.extend(render_blocks(
            &[Block::list(false, phase.deliverables.iter().copied())],
            width,
            theme,
        ));
        if let Some(details) = phase.details {
            lines.push(section_title("Details", theme));
            lines.extend(wrap_plain(details, width, theme.dim()));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use siemdeck_core::analysis::{AnalysisClient, AnalysisSession};
    use std::time::Duration;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_collapsed_phases_hide_key_actions() {
        let app = App::new(
            View::Overview,
            AnalysisSession::new(AnalysisClient::Disabled, Duration::from_secs(1)),
        );
        let (lines, selected) = lines(&app, 80);
        let text = text(&lines);
        assert!(text.contains("Phase 0: Setup & Tooling"));
        assert!(!text.contains("Key Actions"));
        assert!(selected > 0);
    }

    #[test]
    fn test_expanded_phase_lists_key_actions() {
        let mut app = App::new(
            View::Overview,
            AnalysisSession::new(AnalysisClient::Disabled, Duration::from_secs(1)),
        );
        app.expanded_phase = Some(1);
        let text = text(&lines(&app, 200).0);
        assert!(text.contains("Key Actions"));
        assert!(text.contains("• Ingest Cloud Platform Logs"));
    }
}
