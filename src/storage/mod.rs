//! Note persistence.
//!
//! [`NoteStore`] is the capability interface the shell and windows talk to.
//! [`FileNoteStore`] is the flat-file production backend;
//! [`MemoryNoteStore`] is an in-process fake for testing UI-side code.

mod file_store;
mod memory;

pub use file_store::FileNoteStore;
pub use memory::MemoryNoteStore;

use crate::entity::{Note, NoteConfig};
use crate::name::NoteId;
use crate::Result;

/// Storage operations for sticky notes.
///
/// Every operation sanitises the supplied name itself, so callers may pass
/// raw user input. A note that was never saved loads with empty content and
/// a missing or unreadable config loads as the default; neither case is an
/// error. Underlying I/O failures propagate unchanged.
pub trait NoteStore {
    /// Write `content` as the note text for `name`, overwriting any
    /// existing record.
    fn save_note(&self, name: &str, content: &str) -> Result<()>;

    /// Load the note for `name`.
    fn load_note(&self, name: &str) -> Result<Note>;

    /// Remove the note text for `name` if present; a no-op otherwise.
    ///
    /// The note's config record is left behind on purpose: recreating a
    /// note under the same name revives its old colour.
    fn delete_note(&self, name: &str) -> Result<()>;

    /// Every identifier with persisted note text, in no particular order.
    /// Blank identifiers are excluded.
    fn list_notes(&self) -> Result<Vec<NoteId>>;

    /// Load the display config for `name`, or the default when none is
    /// stored or the stored record no longer parses.
    fn get_config(&self, name: &str) -> Result<NoteConfig>;

    /// Persist the display config for `name`, overwriting any existing
    /// record.
    fn save_config(&self, name: &str, config: &NoteConfig) -> Result<()>;
}
