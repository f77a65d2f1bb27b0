//! System clipboard access for copying project links.

use anyhow::{anyhow, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// Somewhere text can be copied to.
pub trait ClipboardSink {
    /// Replaces the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The OS clipboard, opened per copy.
///
/// Opening lazily keeps startup working on headless machines where no
/// clipboard exists; the failure only surfaces when the user copies.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
            .map_err(|e| anyhow!("Failed to copy to clipboard: {e}"))
    }
}

/// In-memory clipboard that records every copy.
///
/// Clones share the history, so a test can keep one handle and give the
/// other to the application.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    history: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl MemoryClipboard {
    /// Clipboard whose copies always fail.
    #[must_use]
    pub fn broken() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Copied texts, oldest first.
    pub fn copies(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            anyhow::bail!("clipboard unavailable");
        }
        self.history.borrow_mut().push(text.to_string());
        Ok(())
    }
}
