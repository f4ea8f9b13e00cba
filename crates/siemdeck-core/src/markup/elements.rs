//! Markup element types

use serde::{Deserialize, Serialize};

/// Block-level units produced by the formatter, in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Heading with level (1-3); inline spans are resolved at render time
    Heading { level: u8, text: String },
    /// A single non-empty line of prose
    Paragraph { text: String },
    /// Run of consecutive list items of the same kind
    List { ordered: bool, items: Vec<String> },
    /// Fenced content, never re-interpreted
    CodeBlock {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
    /// Blank source line
    LineBreak,
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    pub fn code(text: impl Into<String>) -> Self {
        Block::CodeBlock {
            text: text.into(),
            language: None,
        }
    }

    pub fn list<I, S>(ordered: bool, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::List {
            ordered,
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Inline styled run within heading, paragraph, or list-item text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Inline {
    Plain(String),
    Bold(String),
    Italic(String),
}

impl Inline {
    /// The text without its styling
    pub fn text(&self) -> &str {
        match self {
            Inline::Plain(t) | Inline::Bold(t) | Inline::Italic(t) => t,
        }
    }
}
