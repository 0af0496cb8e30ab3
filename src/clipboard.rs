//! Clipboard collaborator used by the share action.

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait Clipboard: Send {
    /// Replaces the clipboard contents.
    fn copy_to_clipboard(&mut self, text: &str);

    /// Current clipboard contents, if anything was copied.
    fn contents(&self) -> Option<String>;
}

/// Session-local clipboard. The dashboard footer shows its contents and the
/// headless CLI prints them.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy_to_clipboard(&mut self, text: &str) {
        self.contents = Some(text.to_string());
    }

    fn contents(&self) -> Option<String> {
        self.contents.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_keeps_latest_copy() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.contents(), None);

        clipboard.copy_to_clipboard("first");
        clipboard.copy_to_clipboard("second");
        assert_eq!(clipboard.contents().as_deref(), Some("second"));
    }
}
