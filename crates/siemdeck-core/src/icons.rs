//! Icon identifiers
//!
//! Closed set of icons used by content tables and views. Every variant maps
//! to a terminal glyph; there is no string lookup and no fallback.

/// Known icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    // Project phases
    Setup,
    Ingestion,
    Detection,
    Response,
    CiCd,
    Docs,
    // Navigation
    Home,
    ChartPie,
    Alert,
    List,
    Eye,
    Play,
    FileCode,
    BookOpen,
    ClipboardCheck,
    // Indicators
    Sparkles,
    Info,
    Warning,
    ErrorCircle,
    Bug,
    CheckCircle,
    Clock,
    Exclamation,
    AcademicCap,
}

impl Icon {
    pub const ALL: [Icon; 24] = [
        Icon::Setup,
        Icon::Ingestion,
        Icon::Detection,
        Icon::Response,
        Icon::CiCd,
        Icon::Docs,
        Icon::Home,
        Icon::ChartPie,
        Icon::Alert,
        Icon::List,
        Icon::Eye,
        Icon::Play,
        Icon::FileCode,
        Icon::BookOpen,
        Icon::ClipboardCheck,
        Icon::Sparkles,
        Icon::Info,
        Icon::Warning,
        Icon::ErrorCircle,
        Icon::Bug,
        Icon::CheckCircle,
        Icon::Clock,
        Icon::Exclamation,
        Icon::AcademicCap,
    ];

    /// Single-cell glyph for terminal rendering
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Setup => "⚙",
            Icon::Ingestion => "⇣",
            Icon::Detection => "◎",
            Icon::Response => "⚡",
            Icon::CiCd => "↻",
            Icon::Docs => "☰",
            Icon::Home => "⌂",
            Icon::ChartPie => "◔",
            Icon::Alert => "▲",
            Icon::List => "≡",
            Icon::Eye => "◉",
            Icon::Play => "▶",
            Icon::FileCode => "⟨⟩",
            Icon::BookOpen => "❐",
            Icon::ClipboardCheck => "☑",
            Icon::Sparkles => "✦",
            Icon::Info => "ℹ",
            Icon::Warning => "⚠",
            Icon::ErrorCircle => "✖",
            Icon::Bug => "⌘",
            Icon::CheckCircle => "✔",
            Icon::Clock => "◷",
            Icon::Exclamation => "!",
            Icon::AcademicCap => "✎",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_icon_has_a_distinct_glyph() {
        let glyphs: HashSet<&str> = Icon::ALL.iter().map(|i| i.glyph()).collect();
        assert_eq!(glyphs.len(), Icon::ALL.len());
        assert!(glyphs.iter().all(|g| !g.is_empty()));
    }
}
