//! Inline emphasis resolution
//!
//! Bold runs are matched first; italics are only searched for in the plain
//! text that survives the bold pass, so a bold run is never re-scanned.

use once_cell::sync::Lazy;
use regex::Regex;

use super::elements::Inline;

/// `**X**`, non-greedy, at least one character
static BOLD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// `*X*`, non-greedy, at least one character
static ITALIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());

/// Split text into plain, bold, and italic runs
pub fn resolve(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();

    for (plain, bold) in split_matches(&BOLD_REGEX, text) {
        if let Some(bold) = bold {
            push_span(&mut spans, Inline::Bold(bold.to_string()));
            continue;
        }
        for (rest, italic) in split_matches(&ITALIC_REGEX, plain) {
            match italic {
                Some(italic) => push_span(&mut spans, Inline::Italic(italic.to_string())),
                None => push_span(&mut spans, Inline::Plain(rest.to_string())),
            }
        }
    }

    spans
}

/// Concatenated text of all spans, without styling
pub fn plain_text(spans: &[Inline]) -> String {
    spans.iter().map(Inline::text).collect()
}

/// Walk `text`, yielding `(unmatched, None)` for gaps and `(_, Some(inner))`
/// for each match's first capture group
fn split_matches<'t>(regex: &Regex, text: &'t str) -> Vec<(&'t str, Option<&'t str>)> {
    let mut parts = Vec::new();
    let mut last_end = 0;

    for caps in regex.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last_end {
            parts.push((&text[last_end..whole.start()], None));
        }
        parts.push(("", Some(inner.as_str())));
        last_end = whole.end();
    }

    if last_end < text.len() {
        parts.push((&text[last_end..], None));
    }

    parts
}

/// Push a span, merging adjacent plain text and skipping empty plain runs
fn push_span(spans: &mut Vec<Inline>, span: Inline) {
    if let Inline::Plain(text) = &span {
        if text.is_empty() {
            return;
        }
        if let Some(Inline::Plain(prev)) = spans.last_mut() {
            prev.push_str(text);
            return;
        }
    }
    spans.push(span);
}
