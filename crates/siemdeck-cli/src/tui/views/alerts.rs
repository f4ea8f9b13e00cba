//! Alerts: list, selected alert details and the AI insight pane

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};
use siemdeck_core::analysis::{AnalysisOutcome, AnalysisState, API_KEY_HELP};
use siemdeck_core::content::{Alert, View};
use siemdeck_core::icons::Icon;

use super::{follow, format_age, inner_height, inner_width, render_scrolled, wrap_plain};
use crate::tui::app::App;
use crate::tui::markdown;
use crate::tui::utils::{display_width, truncate_to_width};

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(area);

    let (list, selected_line) = list_lines(app, inner_width(columns[0]));
    let scroll = follow(selected_line, inner_height(columns[0]));
    render_scrolled(f, columns[0], View::Alerts.label(), list, scroll, &app.theme);

    let Some(alert) = app.selected_alert else {
        let hint = vec![
            Line::default(),
            Line::from(Span::styled(
                format!("{} Select an alert to see AI-powered insights.", Icon::Sparkles.glyph()),
                app.theme.dim(),
            )),
        ];
        render_scrolled(f, columns[1], "AI Powered Insight", hint, 0, &app.theme);
        return;
    };

    let panes = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(columns[1]);

    let details = detail_lines(alert, app, inner_width(panes[0]));
    render_scrolled(f, panes[0], alert.id, details, 0, &app.theme);

    let insight = insight_lines(alert, app, inner_width(panes[1]));
    let title = format!("{} AI Powered Insight", Icon::Sparkles.glyph());
    render_scrolled(f, panes[1], &title, insight, app.scroll, &app.theme);
}

/// One row per alert, plus the line index of the cursor row
pub(crate) fn list_lines(app: &App, width: usize) -> (Vec<Line<'static>>, usize) {
    let theme = &app.theme;
    let mut lines = Vec::new();

    for (i, alert) in app.alerts.iter().enumerate() {
        let color = theme.severity_color(alert.severity);
        let is_cursor = i == app.alert_cursor;
        let is_selected = app.selected_alert.map(|a| a.id) == Some(alert.id);

        let marker = if is_selected { "● " } else { "  " };
        let badge = format!("{} {:<8} ", alert.severity.icon().glyph(), alert.severity.label());
        let age = format!(" {}", format_age(alert.minutes_ago * 60));
        let room = width.saturating_sub(display_width(marker) + display_width(&badge) + display_width(&age));

        let title_style = if is_cursor {
            theme.selected()
        } else {
            theme.text()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.accent_color)),
            Span::styled(badge, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(truncate_to_width(alert.title, room), title_style),
            Span::styled(age, theme.dim()),
        ]));
    }

    (lines, app.alert_cursor)
}

pub(crate) fn detail_lines(alert: &Alert, app: &App, width: usize) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let color = theme.severity_color(alert.severity);

    let mut lines = vec![
        Line::from(Span::styled(alert.title.to_string(), theme.heading(2))),
        Line::from(vec![
            Span::styled(
                format!("{} {}", alert.severity.icon().glyph(), alert.severity.label()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "  Source: {} | Time: {}",
                    alert.source,
                    alert.timestamp(app.now).format("%Y-%m-%d %H:%M UTC")
                ),
                theme.dim(),
            ),
        ]),
    ];
    if let Some(rule_id) = alert.rule_id {
        lines.push(Line::from(Span::styled(format!("Rule: {}", rule_id), theme.dim())));
    }
    lines.extend(wrap_plain(alert.description, width, theme.text()));

    if app.show_details {
        lines.push(Line::default());
        for (key, value) in alert.details {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", key), Style::default().fg(theme.accent_color)),
                Span::styled(value.to_string(), theme.text()),
            ]));
        }
    } else if !alert.details.is_empty() {
        lines.push(Line::from(Span::styled("d: show details", theme.dim())));
    }
    lines
}

pub(crate) fn insight_lines(alert: &Alert, app: &App, width: usize) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let mut lines = vec![
        Line::from(vec![
            Span::styled("AI Analysis for: ", theme.text()),
            Span::styled(alert.title.to_string(), Style::default().fg(theme.accent_color)),
        ]),
        Line::default(),
    ];

    match app.analysis.state() {
        AnalysisState::Loading { .. } => {
            let frame = SPINNER[(app.tick as usize) % SPINNER.len()];
            lines.push(Line::from(Span::styled(
                format!("{} Generating insights with Gemini...", frame),
                Style::default().fg(theme.ai_color),
            )));
        }
        AnalysisState::Ready { outcome, alert_id } if alert_id == alert.id => {
            let rendered = markdown::render(outcome.text(), width, theme);
            match outcome {
                AnalysisOutcome::Success(_) => lines.extend(rendered),
                AnalysisOutcome::Unavailable { .. } | AnalysisOutcome::Failure { .. } => {
                    lines.extend(rendered.into_iter().map(|mut line| {
                        for span in &mut line.spans {
                            span.style = span.style.fg(theme.warning_color);
                        }
                        line
                    }));
                    lines.push(Line::default());
                    lines.push(Line::from(Span::styled("r: retry", theme.dim())));
                }
            }
        }
        _ => {
            lines.push(Line::from(Span::styled(
                format!("{} Press a to get AI analysis", Icon::Sparkles.glyph()),
                Style::default().fg(theme.ai_color).add_modifier(Modifier::BOLD),
            )));
            if !app.analysis.client().is_enabled() {
                lines.push(Line::default());
                lines.extend(wrap_plain(API_KEY_HELP, width, theme.dim()));
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use siemdeck_core::analysis::{AnalysisClient, AnalysisSession, UNAVAILABLE_MESSAGE};
    use std::time::Duration;

    fn app() -> App {
        App::new(
            View::Alerts,
            AnalysisSession::new(AnalysisClient::Disabled, Duration::from_secs(1)),
        )
    }

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_list_is_newest_first_with_severity() {
        let app = app();
        let (lines, cursor) = list_lines(&app, 60);
        assert_eq!(cursor, 0);
        assert_eq!(lines.len(), 7);
        let first = &text(&lines)[0];
        assert!(first.contains("Critical"));
        assert!(first.contains("Potential Data Exfiltration"));
        assert!(first.ends_with("30m ago"));
        assert!(lines.iter().all(|l| l.width() <= 60));
    }

    #[test]
    fn test_details_toggle() {
        let mut app = app();
        app.select_alert();
        let alert = app.selected_alert.unwrap();
        assert!(!text(&detail_lines(alert, &app, 80)).iter().any(|l| l.starts_with("Data Volume")));
        app.show_details = true;
        assert!(text(&detail_lines(alert, &app, 80))
            .iter()
            .any(|l| l == "Data Volume: 5.2 GB"));
    }

    #[test]
    fn test_insight_prompts_before_request() {
        let mut app = app();
        app.select_alert();
        let alert = app.selected_alert.unwrap();
        let lines = text(&insight_lines(alert, &app, 80));
        assert!(lines.iter().any(|l| l.contains("Press a to get AI analysis")));
    }

    #[test]
    fn test_insight_unavailable_without_key() {
        let mut app = app();
        app.select_alert();
        app.analyze_selected();
        let alert = app.selected_alert.unwrap();
        let joined = text(&insight_lines(alert, &app, 400)).join("\n");
        assert!(joined.contains(UNAVAILABLE_MESSAGE));
        assert!(joined.contains("r: retry"));
    }
}
