use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::engine::ClipboardError;

/// Destination for copied tokens
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Platform clipboard via `arboard`.
///
/// The handle is opened on first copy and held for the rest of the session;
/// on X11 and Wayland the copied text disappears once its owner is dropped.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self { handle: None }
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let handle = match self.handle.take() {
            Some(handle) => handle,
            None => {
                debug!("opening system clipboard");
                arboard::Clipboard::new()?
            }
        };
        self.handle.insert(handle).set_text(text)?;
        Ok(())
    }
}

/// In-memory clipboard for headless runs and tests.
///
/// Clones share the same history, so a caller can keep one clone to inspect
/// what the app copied.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    history: Rc<RefCell<Vec<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.history.borrow().last().cloned()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.history.borrow_mut().push(text.to_string());
        Ok(())
    }
}
