//! Code snippet views: detection rules, playbooks, IaC and CI/CD

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    Frame,
};
use siemdeck_core::content::{snippet_groups, CodeExample, View};
use siemdeck_core::icons::Icon;
use siemdeck_core::markup::Block;

use super::{header, inner_width, render_scrolled, section_title};
use crate::tui::app::{App, CopyNotice};
use crate::tui::markdown::{self, render_blocks};
use crate::tui::themes::Theme;

const RULES_INTRO: &str = "Example detection rules. For Azure Sentinel these are written in Kusto Query Language (KQL); for ELK they would be Elasticsearch DSL or configured via Kibana. Exported KQL/DSL rule definitions are key project deliverables.";
const PLAYBOOKS_INTRO: &str = "Simulated automated response playbooks for Azure Sentinel (Logic Apps) and ELK (Python scripts). They are triggered by detection rules and send notifications and (simulated) block malicious IPs.";
const IAC_INTRO: &str = "Illustrative snippets for setting up the SIEM environment using Terraform for Azure Sentinel and Docker Compose/Fluent Bit for a local ELK stack.";
const CICD_INTRO: &str = "Example of integrating a simulated SIEM check into a CI/CD pipeline using GitHub Actions.";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let page = lines(
        app.view,
        inner_width(area),
        &app.theme,
        app.snippet_cursor,
        app.copy_notice.as_ref(),
    );
    // Keep the intro visible while the first snippet is selected
    let base = match app.snippet_cursor {
        0 => 0,
        i => page.starts.get(i).copied().unwrap_or(0),
    };
    let scroll = u16::try_from(base).unwrap_or(u16::MAX).saturating_add(app.scroll);
    render_scrolled(f, area, app.view.label(), page.lines, scroll, &app.theme);
}

/// Rendered code view plus the first line of every snippet
pub(crate) struct SnippetPage {
    pub lines: Vec<Line<'static>>,
    pub starts: Vec<usize>,
}

fn headers(view: View) -> &'static [(&'static str, &'static str)] {
    match view {
        View::Rules => &[("Detection Rules (Simulated)", RULES_INTRO)],
        View::Playbooks => &[("Automated Response Playbooks", PLAYBOOKS_INTRO)],
        _ => &[
            ("Infrastructure as Code (IaC) Examples", IAC_INTRO),
            ("CI/CD Integration Examples", CICD_INTRO),
        ],
    }
}

pub(crate) fn lines(
    view: View,
    width: usize,
    theme: &Theme,
    selected: usize,
    notice: Option<&CopyNotice>,
) -> SnippetPage {
    let mut page = SnippetPage {
        lines: Vec::new(),
        starts: Vec::new(),
    };

    for (&(title, intro), group) in headers(view).iter().zip(snippet_groups(view)) {
        page.lines.extend(header(title, intro, width, theme));
        for example in group {
            let is_selected = page.starts.len() == selected;
            page.starts.push(page.lines.len());
            page.lines.extend(snippet(example, is_selected, notice, width, theme));
        }
    }
    page
}

fn snippet(
    example: &CodeExample,
    is_selected: bool,
    notice: Option<&CopyNotice>,
    width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let mut title = section_title(example.title, theme);
    let marker = if is_selected { "▶ " } else { "  " };
    title.spans.insert(0, Span::styled(marker, Style::default().fg(theme.accent_color)));
    title.spans.push(Span::styled(format!("  {}", example.language), theme.dim()));
    if is_selected {
        title.spans.push(Span::styled("  c: copy", theme.dim()));
    }
    lines.push(title);

    if let Some(notice) = notice.filter(|n| n.snippet_id == example.id) {
        lines.push(match &notice.error {
            None => Line::from(Span::styled(
                format!("{} Copied!", Icon::CheckCircle.glyph()),
                Style::default().fg(theme.success_color),
            )),
            Some(error) => Line::from(Span::styled(
                format!("{} Copy failed: {}", Icon::ErrorCircle.glyph(), error),
                Style::default().fg(theme.error_color),
            )),
        });
    }

    if let Some(description) = example.description {
        lines.extend(markdown::render(description, width, theme));
    }
    lines.extend(render_blocks(
        &[Block::CodeBlock {
            text: example.code.to_string(),
            language: None,
        }],
        width,
        theme,
    ));
    lines.push(Line::default());
    lines
}
