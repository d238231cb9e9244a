use crate::ports::{ClipboardReader, Clock, FolderOpener, HistoryStore};

/// Application context holding the external collaborators.
pub struct AppContext<C, K, H, O>
where
    C: ClipboardReader,
    K: Clock,
    H: HistoryStore,
    O: FolderOpener,
{
    clipboard: C,
    clock: K,
    history: H,
    opener: O,
}

impl<C, K, H, O> AppContext<C, K, H, O>
where
    C: ClipboardReader,
    K: Clock,
    H: HistoryStore,
    O: FolderOpener,
{
    /// Create a new application context.
    pub fn new(clipboard: C, clock: K, history: H, opener: O) -> Self {
        Self { clipboard, clock, history, opener }
    }

    /// Get a reference to the clipboard reader.
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Get a mutable reference to the clipboard reader.
    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }

    /// Get a reference to the clock.
    pub fn clock(&self) -> &K {
        &self.clock
    }

    /// Get a reference to the history store.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Get a reference to the folder opener.
    pub fn opener(&self) -> &O {
        &self.opener
    }
}
