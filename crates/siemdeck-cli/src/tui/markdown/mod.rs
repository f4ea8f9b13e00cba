//! Markdown rendering for analysis text, runbook sections and snippet descriptions
//!
//! Formatting is done by `siemdeck_core::markup`; this module only maps the
//! resulting blocks to styled ratatui lines. Text always reaches the
//! terminal as span content, never as raw escape sequences.

mod inline;
mod renderer;

use ratatui::text::Line;

use super::themes::Theme;

pub use inline::wrap_runs;
pub use renderer::render_blocks;

/// Format and render `text` to lines no wider than `width`
pub fn render(text: &str, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    render_blocks(&siemdeck_core::markup::format(text), width, theme)
}
