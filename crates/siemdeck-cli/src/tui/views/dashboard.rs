//! SIEM overview dashboard: error-rate trend, access activity, data transfer

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols,
    text::Line,
    widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, LegendPosition, Paragraph},
    Frame,
};
use siemdeck_core::content::{
    series_max, View, ACCESS_ACTIVITY, DASHBOARD_NOTES, DATA_TRANSFER, ERROR_RATE,
};

use super::{inner_width, panel};
use crate::tui::app::App;
use crate::tui::markdown;
use crate::tui::themes::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let outer = panel(format!(" {} ", View::Dashboard.label()), theme);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(35),
            Constraint::Min(4),
        ])
        .split(inner);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    render_error_rate(f, top[0], theme);
    render_access(f, top[1], theme);
    render_transfer(f, rows[1], theme);

    let notes_panel = panel(" Dashboard Notes ", theme);
    let notes = markdown::render(DASHBOARD_NOTES, inner_width(rows[2]), theme);
    f.render_widget(
        Paragraph::new(notes)
            .block(notes_panel)
            .scroll((app.scroll, 0)),
        rows[2],
    );
}

/// (x, y) points for the error and critical series
pub(crate) fn error_series() -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
    ERROR_RATE
        .iter()
        .enumerate()
        .map(|(i, p)| ((i as f64, p.errors as f64), (i as f64, p.critical as f64)))
        .unzip()
}

fn render_error_rate(f: &mut Frame, area: Rect, theme: &Theme) {
    let (errors, critical) = error_series();
    let max = series_max(ERROR_RATE, |p| p.errors.max(p.critical)) as f64;
    let last = ERROR_RATE.len().saturating_sub(1) as f64;

    let datasets = vec![
        Dataset::default()
            .name("5xx Errors")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.warning_color))
            .data(&errors),
        Dataset::default()
            .name("Critical")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.error_color))
            .data(&critical),
    ];

    let x_labels: Vec<Line> = match (ERROR_RATE.first(), ERROR_RATE.last()) {
        (Some(first), Some(last)) => vec![Line::from(first.time), Line::from(last.time)],
        _ => Vec::new(),
    };

    let chart = Chart::new(datasets)
        .block(panel(" Error-Rate Trends (All Microservices) ", theme))
        .x_axis(
            Axis::default()
                .style(theme.dim())
                .bounds([0.0, last])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(theme.dim())
                .bounds([0.0, max])
                .labels(vec![Line::from("0"), Line::from(format!("{}", max as u64))]),
        )
        .legend_position(Some(LegendPosition::TopLeft));
    f.render_widget(chart, area);
}

fn render_access(f: &mut Frame, area: Rect, theme: &Theme) {
    let mut chart = BarChart::default()
        .block(panel(" Privilege Elevations vs. Login Successes ", theme))
        .bar_width(2)
        .bar_gap(0)
        .group_gap(1)
        .value_style(theme.dim())
        .label_style(theme.dim());

    for point in ACCESS_ACTIVITY {
        let bars = [
            Bar::default()
                .value(point.logins)
                .text_value(String::new())
                .style(Style::default().fg(theme.success_color)),
            Bar::default()
                .value(point.failed_logins)
                .text_value(String::new())
                .style(Style::default().fg(theme.highlight_color)),
            Bar::default()
                .value(point.elevations)
                .text_value(String::new())
                .style(Style::default().fg(theme.error_color)),
        ];
        chart = chart.data(BarGroup::default().label(Line::from(point.day)).bars(&bars));
    }
    f.render_widget(chart, area);
}

fn render_transfer(f: &mut Frame, area: Rect, theme: &Theme) {
    let mut chart = BarChart::default()
        .block(panel(" Data Transfer by Service (Egress/Ingress GB) ", theme))
        .bar_width(3)
        .bar_gap(0)
        .group_gap(2)
        .value_style(Style::default().fg(theme.bg_color))
        .label_style(theme.dim());

    for point in DATA_TRANSFER {
        let bars = [
            Bar::default()
                .value(point.egress_gb)
                .style(Style::default().fg(theme.ai_color)),
            Bar::default()
                .value(point.ingress_gb)
                .style(Style::default().fg(theme.success_color)),
        ];
        chart = chart.data(BarGroup::default().label(Line::from(point.service)).bars(&bars));
    }
    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use siemdeck_core::analysis::{AnalysisClient, AnalysisSession};
    use std::time::Duration;

    #[test]
    fn test_error_series_follows_table() {
        let (errors, critical) = error_series();
        assert_eq!(errors.len(), ERROR_RATE.len());
        assert_eq!(errors[4], (4.0, 27.0));
        assert_eq!(critical[4], (4.0, 15.0));
    }

    #[test]
    fn test_dashboard_renders_chart_titles() {
        let app = App::new(
            View::Dashboard,
            AnalysisSession::new(AnalysisClient::Disabled, Duration::from_secs(1)),
        );
        let mut terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();
        terminal.draw(|f| render(f, f.area(), &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(screen.contains("Error-Rate Trends"));
        assert!(screen.contains("Data Transfer by Service"));
        assert!(screen.contains("Dashboard Notes"));
    }
}
