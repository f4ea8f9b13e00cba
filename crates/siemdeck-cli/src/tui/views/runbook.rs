//! Runbook sections, rendered through the markup formatter

use ratatui::{layout::Rect, text::Line, Frame};
use siemdeck_core::content::{View, RUNBOOK_SECTIONS};

use super::{header, inner_width, render_scrolled, section_title};
use crate::tui::app::App;
use crate::tui::markdown;
use crate::tui::themes::Theme;

const INTRO: &str = "Guidelines for onboarding new microservices, responding to high-severity incidents, and tuning detection rules. A critical piece of documentation for maintaining an effective SIEM and IR pipeline.";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let lines = lines(inner_width(area), &app.theme);
    render_scrolled(f, area, View::Runbook.label(), lines, app.scroll, &app.theme);
}

pub(crate) fn lines(width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = header("SIEM Runbook", INTRO, width, theme);
    for section in RUNBOOK_SECTIONS {
        lines.push(section_title(section.title, theme));
        lines.extend(markdown::render(section.content, width, theme));
        lines.push(Line::default());
    }
    lines
}
