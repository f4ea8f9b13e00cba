//! Line-oriented formatter for the markdown subset used by AI responses,
//! runbook sections, and snippet descriptions.
//!
//! Single left-to-right pass. The only state carried between lines is the
//! open fence (if any) and the pending list accumulator.

use super::elements::Block;

/// Convert raw text into blocks. Never fails; unrecognised lines become paragraphs.
pub fn format(raw: &str) -> Vec<Block> {
    if raw.is_empty() {
        return Vec::new();
    }

    let mut state = FormatState::default();

    // Split on `\n` only: fenced text keeps any `\r`, and a trailing newline
    // still yields its own line
    for line in raw.split('\n') {
        state.push_line(line);
    }

    state.finish()
}

#[derive(Default)]
struct FormatState {
    blocks: Vec<Block>,
    /// Open fence: accumulated text plus the info string from the opening marker
    fence: Option<Fence>,
    list: Option<PendingList>,
}

struct Fence {
    text: String,
    language: Option<String>,
}

struct PendingList {
    ordered: bool,
    items: Vec<String>,
}

impl FormatState {
    fn push_line(&mut self, line: &str) {
        let trimmed = line.trim();

        if let Some(info) = fence_marker(trimmed) {
            self.flush_list();
            match self.fence.take() {
                Some(fence) => self.emit_fence(fence),
                None => {
                    self.fence = Some(Fence {
                        text: String::new(),
                        language: (!info.is_empty()).then(|| info.to_string()),
                    });
                }
            }
            return;
        }

        if let Some(fence) = self.fence.as_mut() {
            fence.text.push_str(line);
            fence.text.push('\n');
            return;
        }

        if let Some(text) = trimmed.strip_prefix("### ") {
            self.flush_list();
            self.blocks.push(Block::heading(3, text));
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            self.flush_list();
            self.blocks.push(Block::heading(2, text));
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            self.flush_list();
            self.blocks.push(Block::heading(1, text));
        } else if let Some(text) = unordered_item(trimmed) {
            self.push_item(false, text);
        } else if let Some(text) = ordered_item(trimmed) {
            self.push_item(true, text);
        } else if trimmed.is_empty() {
            self.flush_list();
            self.blocks.push(Block::LineBreak);
        } else {
            self.flush_list();
            self.blocks.push(Block::paragraph(trimmed));
        }
    }

    fn push_item(&mut self, ordered: bool, text: &str) {
        if self.list.as_ref().is_some_and(|l| l.ordered != ordered) {
            self.flush_list();
        }
        self.list
            .get_or_insert_with(|| PendingList {
                ordered,
                items: Vec::new(),
            })
            .items
            .push(text.trim_start().to_string());
    }

    fn flush_list(&mut self) {
        if let Some(list) = self.list.take() {
            self.blocks.push(Block::List {
                ordered: list.ordered,
                items: list.items,
            });
        }
    }

    fn emit_fence(&mut self, fence: Fence) {
        let Fence { mut text, language } = fence;
        if text.ends_with('\n') {
            text.pop();
        }
        self.blocks.push(Block::CodeBlock { text, language });
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_list();
        // Unterminated fence: close it at end of input instead of dropping the content
        if let Some(fence) = self.fence.take() {
            self.emit_fence(fence);
        }
        self.blocks
    }
}

/// Returns the info string if the trimmed line opens or closes a fence
fn fence_marker(trimmed: &str) -> Option<&str> {
    trimmed
        .strip_prefix("```")
        .or_else(|| trimmed.strip_prefix("~~~"))
        .map(|rest| rest.trim_matches(|c| c == '`' || c == '~').trim())
}

fn unordered_item(trimmed: &str) -> Option<&str> {
    trimmed
        .strip_prefix("* ")
        .or_else(|| trimmed.strip_prefix("- "))
}

/// `<digits>. rest` - returns the text after the first space
fn ordered_item(trimmed: &str) -> Option<&str> {
    let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    trimmed[digits..].strip_prefix(". ")
}
