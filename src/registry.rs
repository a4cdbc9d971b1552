//! Bookkeeping for open note windows.
//!
//! The registry maps each note identifier to at most one live window
//! handle. What a "window" is belongs to the host shell; the registry only
//! needs [`NoteWindow`].

use std::collections::HashMap;

use tracing::debug;

use crate::name::NoteId;

/// A live note window the registry can drive.
pub trait NoteWindow {
    /// Show the window if hidden, hide it if shown.
    fn toggle(&mut self);

    /// Re-read displayed state after an external change (a config edit or a
    /// content change from another surface).
    fn refresh(&mut self);
}

/// Maps note identifiers to live windows.
///
/// An explicit value owned by the shell, not process state. Dropping the
/// registry drops every window it still tracks.
#[derive(Default)]
pub struct NoteRegistry<W> {
    windows: HashMap<NoteId, W>,
}

impl<W: NoteWindow> NoteRegistry<W> {
    pub fn new() -> Self {
        Self {
            windows: HashMap::new(),
        }
    }

    /// Toggle the window for `id`, creating it through `make` on first
    /// open. New windows are created hidden and toggled visible.
    pub fn open_or_toggle(&mut self, id: NoteId, make: impl FnOnce(&NoteId) -> W) {
        let window = self.windows.entry(id).or_insert_with_key(|id| {
            debug!(%id, "creating note window");
            make(id)
        });
        window.toggle();
    }

    /// Drop and forget the window for `id`, if open.
    pub fn close(&mut self, id: &NoteId) {
        if self.windows.remove(id).is_some() {
            debug!(%id, "closed note window");
        }
    }

    /// Ask the window for `id` to reload, if open.
    pub fn refresh(&mut self, id: &NoteId) {
        if let Some(window) = self.windows.get_mut(id) {
            window.refresh();
        }
    }

    pub fn is_open(&self, id: &NoteId) -> bool {
        self.windows.contains_key(id)
    }

    /// Identifiers with a live window.
    pub fn open_ids(&self) -> impl Iterator<Item = &NoteId> {
        self.windows.keys()
    }

    /// Drop every window. Used at shell shutdown.
    pub fn close_all(&mut self) {
        self.windows.clear();
    }
}
