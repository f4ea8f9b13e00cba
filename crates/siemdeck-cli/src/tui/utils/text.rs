//! Text width helpers
//!
//! All width calculations use unicode display width, not byte length.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Get display width of a string (handles unicode properly)
#[inline]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate to `max_width` columns, ending with `…` when shortened
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0usize;
    for c in s.chars() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + char_width > max_width - 1 {
            break;
        }
        out.push(c);
        width += char_width;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Anomalous RDP Login", 10), "Anomalous…");
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abc", 0), "");
        assert_eq!(display_width(&truncate_to_width("日本語テキスト", 7)), 7);
    }
}
