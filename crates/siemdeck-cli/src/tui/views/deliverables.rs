//! Deliverables checklist

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};
use siemdeck_core::content::{View, DELIVERABLES};
use siemdeck_core::icons::Icon;

use super::{follow, header, inner_height, inner_width, render_scrolled, wrap_plain};
use crate::tui::app::App;

const INTRO: &str = "The key deliverables for the Automated SIEM & Incident Response Pipeline project. Each item links to the view where it is simulated or showcased; select one and press enter to go there.";

const FOOTER: &str = "For example, IaC Examples under Code Artifacts showcases Terraform and Docker Compose snippets, Detection Rules shows KQL/DSL examples, and the SIEM Dashboard view simulates the required visualizations.";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let (lines, selected_line) = lines(app, inner_width(area));
    let scroll = follow(selected_line, inner_height(area));
    render_scrolled(f, area, View::Deliverables.label(), lines, scroll, &app.theme);
}

pub(crate) fn lines(app: &App, width: usize) -> (Vec<Line<'static>>, usize) {
    let theme = &app.theme;
    let mut lines = header("Project Deliverables Checklist", INTRO, width, theme);
    let mut selected_line = 0;

    for (i, item) in DELIVERABLES.iter().enumerate() {
        let selected = i == app.deliverable_cursor;
        if selected {
            selected_line = lines.len();
        }
        let title_style = if selected {
            theme.selected()
        } else {
            Style::default()
                .fg(theme.success_color)
                .add_modifier(Modifier::BOLD)
        };

        lines.push(Line::from(Span::styled(
            format!("{} {}", Icon::ClipboardCheck.glyph(), item.title),
            title_style,
        )));
        lines.push(Line::from(Span::styled(
            format!("Reference: {}", item.reference),
            theme.dim(),
        )));
        lines.extend(wrap_plain(item.description, width, theme.text()));
        lines.push(Line::from(vec![
            Span::styled(format!("→ {}", item.link_text), Style::default().fg(theme.accent_color)),
            Span::styled(format!("  ({})", item.link.label()), theme.dim()),
        ]));
        lines.push(Line::default());
    }

    lines.extend(wrap_plain(FOOTER, width, theme.dim()));
    (lines, selected_line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use siemdeck_core::analysis::{AnalysisClient, AnalysisSession};
    use std::time::Duration;

    #[test]
    fn test_description_is_not_formatted_as_a_list() {
        let app = App::new(
            View::Deliverables,
            AnalysisSession::new(AnalysisClient::Disabled, Duration::from_secs(1)),
        );
        let text: Vec<String> = lines(&app, 200)
            .0
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert!(text
            .iter()
            .any(|l| l.starts_with("1. How to onboard a new microservice's logs. 2. Steps")));
        assert!(text.iter().any(|l| l == "→ View Runbook  (Runbook)"));
    }
}
