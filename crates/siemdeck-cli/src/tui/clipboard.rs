//! System clipboard

use arboard::Clipboard;

/// Lazily opened clipboard handle, held for the whole session: on X11 the
/// copied text is only served while the handle lives.
#[derive(Default)]
pub struct SnippetClipboard {
    inner: Option<Clipboard>,
}

impl SnippetClipboard {
    pub fn copy(&mut self, text: &str) -> Result<(), String> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(|e| e.to_string())?,
        };
        self.inner
            .insert(clipboard)
            .set_text(text.to_string())
            .map_err(|e| e.to_string())
    }
}
