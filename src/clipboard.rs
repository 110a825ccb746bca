//! Clipboard service contract and an in-memory implementation.

use crate::error::ClipboardWriteError;
use std::cell::{Cell, RefCell};
use std::future::Future;

/// Platform clipboard. Writes are asynchronous and may be refused.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardWriteError>>;
}

/// Clipboard backed by an internal buffer.
///
/// Used when no platform clipboard is reachable. `deny` makes every subsequent
/// write fail with `PermissionDenied`, which is how a browser behaves outside a
/// secure context.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    buffer: RefCell<Option<String>>,
    denied: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deny(&self, denied: bool) {
        self.denied.set(denied);
    }

    /// Most recently written text.
    pub fn contents(&self) -> Option<String> {
        self.buffer.borrow().clone()
    }

    /// Number of writes attempted, successful or not.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardWriteError> {
        self.writes.set(self.writes.get().saturating_add(1));
        if self.denied.get() {
            return Err(ClipboardWriteError::PermissionDenied);
        }
        *self.buffer.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    #[test]
    fn test_write_overwrites() {
        let clipboard = MemoryClipboard::new();
        assert!(clipboard.contents().is_none());

        block_on(clipboard.write_text("npm i upfly multer")).unwrap();
        block_on(clipboard.write_text("yarn add upfly multer")).unwrap();

        assert_eq!(clipboard.contents().as_deref(), Some("yarn add upfly multer"));
        assert_eq!(clipboard.writes(), 2);
    }

    #[test]
    fn test_denied_write_keeps_previous_contents() {
        let clipboard = MemoryClipboard::new();
        block_on(clipboard.write_text("first")).unwrap();
        clipboard.deny(true);

        let result = block_on(clipboard.write_text("second"));
        assert_eq!(result, Err(ClipboardWriteError::PermissionDenied));
        assert_eq!(clipboard.contents().as_deref(), Some("first"));
    }
}
