use crate::domain::outcome::ConversionError;

/// Text access to the system clipboard.
///
/// The clipboard is a process-external shared resource; every method may fail
/// because another process holds it open.
pub trait Clipboard {
    /// Current clipboard text.
    ///
    /// Returns `None` when the clipboard cannot be opened or holds no text.
    fn text(&mut self) -> Option<String>;

    /// Replaces clipboard content with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), ConversionError>;

    /// Empties the clipboard.
    fn clear(&mut self) -> Result<(), ConversionError>;
}

/// Clipboard text captured at one point in time.
///
/// An invalid snapshot (read failed) is distinct from a valid empty one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClipboardSnapshot {
    text: Option<String>,
}

impl ClipboardSnapshot {
    pub fn capture<C: Clipboard + ?Sized>(clipboard: &mut C) -> Self {
        Self {
            text: clipboard.text(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.text.is_some()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Text worth writing back: valid and non-empty.
    fn restorable(&self) -> Option<&str> {
        self.text().filter(|t| !t.is_empty())
    }
}

/// RAII bracket around a clipboard mutation.
///
/// Snapshots the clipboard on acquisition and writes the snapshot back on drop,
/// on every exit path including unwinding. While the guard is alive it is the only
/// way to reach the clipboard.
#[must_use = "clipboard is restored when the guard is dropped"]
pub struct ClipboardGuard<'a, C: Clipboard + ?Sized> {
    clipboard: &'a mut C,
    snapshot: ClipboardSnapshot,
}

impl<'a, C: Clipboard + ?Sized> ClipboardGuard<'a, C> {
    pub fn acquire(clipboard: &'a mut C) -> Self {
        let snapshot = ClipboardSnapshot::capture(clipboard);
        if !snapshot.is_valid() {
            tracing::trace!("clipboard snapshot unavailable, nothing will be restored");
        }
        Self {
            clipboard,
            snapshot,
        }
    }

    pub fn snapshot(&self) -> &ClipboardSnapshot {
        &self.snapshot
    }

    pub fn text(&mut self) -> Option<String> {
        self.clipboard.text()
    }

    pub fn set_text(&mut self, text: &str) -> Result<(), ConversionError> {
        self.clipboard.set_text(text)
    }

    pub fn clear(&mut self) -> Result<(), ConversionError> {
        self.clipboard.clear()
    }
}

impl<C: Clipboard + ?Sized> Drop for ClipboardGuard<'_, C> {
    fn drop(&mut self) {
        let Some(text) = self.snapshot.restorable() else {
            return;
        };

        match self.clipboard.set_text(text) {
            Ok(()) => tracing::trace!(len = text.chars().count(), "clipboard restored"),
            Err(e) => tracing::warn!(error = %e, "clipboard restore failed"),
        }
    }
}
