//! Inline spans to styled words, and greedy word wrapping

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

use siemdeck_core::markup::{resolve, Inline};

use crate::tui::utils::display_width;

/// Resolve emphasis in `text` and apply it on top of `base`
pub fn styled_runs(text: &str, base: Style) -> Vec<(String, Style)> {
    resolve(text)
        .into_iter()
        .map(|span| match span {
            Inline::Plain(t) => (t, base),
            Inline::Bold(t) => (t, base.add_modifier(Modifier::BOLD)),
            Inline::Italic(t) => (t, base.add_modifier(Modifier::ITALIC)),
        })
        .collect()
}

/// A run of non-whitespace characters, possibly spanning several styles
#[derive(Debug, Default)]
struct Word {
    parts: Vec<(String, Style)>,
    width: usize,
}

impl Word {
    fn push(&mut self, c: char, style: Style) {
        match self.parts.last_mut() {
            Some((text, s)) if *s == style => text.push(c),
            _ => self.parts.push((c.to_string(), style)),
        }
        self.width += UnicodeWidthChar::width(c).unwrap_or(0);
    }

    fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    fn first_style(&self) -> Style {
        self.parts.first().map(|(_, s)| *s).unwrap_or_default()
    }

    /// Split into pieces no wider than `max_width`
    fn split(self, max_width: usize) -> Vec<Word> {
        if self.width <= max_width {
            return vec![self];
        }
        let mut pieces = Vec::new();
        let mut current = Word::default();
        for (text, style) in self.parts {
            for c in text.chars() {
                let w = UnicodeWidthChar::width(c).unwrap_or(0);
                if current.width + w > max_width && !current.is_empty() {
                    pieces.push(std::mem::take(&mut current));
                }
                current.push(c, style);
            }
        }
        if !current.is_empty() {
            pieces.push(current);
        }
        pieces
    }
}

fn words(runs: &[(String, Style)]) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current = Word::default();
    for (text, style) in runs {
        for c in text.chars() {
            if c.is_whitespace() {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            } else {
                current.push(c, *style);
            }
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Wrap styled runs to `width`. The first line starts with `first_prefix`,
/// later lines with `rest_prefix` (used for list markers and hanging indents).
pub fn wrap_runs(
    runs: &[(String, Style)],
    width: usize,
    first_prefix: Span<'static>,
    rest_prefix: Span<'static>,
) -> Vec<Line<'static>> {
    let prefix_width = display_width(&first_prefix.content).max(display_width(&rest_prefix.content));
    let available = width.saturating_sub(prefix_width).max(1);

    let mut rows: Vec<Vec<(String, Style)>> = Vec::new();
    let mut row: Vec<(String, Style)> = Vec::new();
    let mut row_width = 0usize;

    for word in words(runs) {
        for piece in word.split(available) {
            if row_width == 0 {
                row_width = piece.width;
                row.extend(piece.parts);
            } else if row_width + 1 + piece.width <= available {
                // Emphasis does not extend over the gap between differently styled words
                let prev = row.last().map(|(_, s)| *s).unwrap_or_default();
                let gap = if prev == piece.first_style() {
                    prev
                } else {
                    prev.remove_modifier(Modifier::BOLD | Modifier::ITALIC)
                };
                row.push((" ".to_string(), gap));
                row_width += 1 + piece.width;
                row.extend(piece.parts);
            } else {
                rows.push(std::mem::take(&mut row));
                row_width = piece.width;
                row.extend(piece.parts);
            }
        }
    }
    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            let prefix = if i == 0 {
                first_prefix.clone()
            } else {
                rest_prefix.clone()
            };
            let mut spans = vec![prefix];
            spans.extend(merge(row).into_iter().map(|(t, s)| Span::styled(t, s)));
            Line::from(spans)
        })
        .collect()
}

/// Join adjacent runs that share a style
fn merge(row: Vec<(String, Style)>) -> Vec<(String, Style)> {
    let mut merged: Vec<(String, Style)> = Vec::new();
    for (text, style) in row {
        match merged.last_mut() {
            Some((t, s)) if *s == style => t.push_str(&text),
            _ => merged.push((text, style)),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_styled_runs_apply_modifiers() {
        let runs = styled_runs("a **b** *c*", Style::default());
        assert_eq!(runs.len(), 4);
        assert!(runs[1].1.add_modifier.contains(Modifier::BOLD));
        assert!(runs[3].1.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_wrap_respects_width() {
        let runs = vec![("one two three four".to_string(), Style::default())];
        let lines = wrap_runs(&runs, 9, Span::raw(""), Span::raw(""));
        assert_eq!(plain(&lines), vec!["one two", "three", "four"]);
        assert!(lines.iter().all(|l| l.width() <= 9));
    }

    #[test]
    fn test_wrap_keeps_style_across_word_boundaries() {
        let runs = styled_runs("**Containment:** block", Style::default());
        let lines = wrap_runs(&runs, 40, Span::raw(""), Span::raw(""));
        assert_eq!(plain(&lines), vec!["Containment: block"]);
        assert!(lines[0].spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(lines[0].spans[1].content, "Containment:");
    }

    #[test]
    fn test_hanging_indent() {
        let runs = vec![("alpha beta gamma".to_string(), Style::default())];
        let lines = wrap_runs(&runs, 10, Span::raw("1. "), Span::raw("   "));
        assert_eq!(plain(&lines), vec!["1. alpha", "   beta", "   gamma"]);
    }

    #[test]
    fn test_long_word_is_broken() {
        let runs = vec![("abcdefghij".to_string(), Style::default())];
        let lines = wrap_runs(&runs, 4, Span::raw(""), Span::raw(""));
        assert_eq!(plain(&lines), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_empty_runs_still_emit_prefix() {
        let lines = wrap_runs(&[], 10, Span::raw("• "), Span::raw("  "));
        assert_eq!(plain(&lines), vec!["• "]);
    }
}
