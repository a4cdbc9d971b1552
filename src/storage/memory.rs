use std::collections::HashMap;
use std::sync::Mutex;

use crate::entity::{Note, NoteConfig};
use crate::name::NoteId;
use crate::storage::NoteStore;
use crate::Result;

/// In-memory [`NoteStore`] with the same contract as the file-backed one.
///
/// Lets registry and shell code be tested without touching disk.
#[derive(Default)]
pub struct MemoryNoteStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    notes: HashMap<NoteId, String>,
    configs: HashMap<NoteId, NoteConfig>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteStore for MemoryNoteStore {
    fn save_note(&self, name: &str, content: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.notes.insert(NoteId::new(name), content.to_string());
        Ok(())
    }

    fn load_note(&self, name: &str) -> Result<Note> {
        let inner = self.inner.lock().unwrap();
        let content = inner
            .notes
            .get(&NoteId::new(name))
            .cloned()
            .unwrap_or_default();
        Ok(Note::new(name.to_string(), content))
    }

    fn delete_note(&self, name: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.notes.remove(&NoteId::new(name));
        Ok(())
    }

    fn list_notes(&self) -> Result<Vec<NoteId>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.notes.keys().filter(|id| !id.is_blank()).cloned().collect())
    }

    fn get_config(&self, name: &str) -> Result<NoteConfig> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .configs
            .get(&NoteId::new(name))
            .copied()
            .unwrap_or_default())
    }

    fn save_config(&self, name: &str, config: &NoteConfig) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.configs.insert(NoteId::new(name), *config);
        Ok(())
    }
}
