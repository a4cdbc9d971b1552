use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::entity::{Note, NoteConfig};
use crate::error::{Result, StickiesError};
use crate::name::NoteId;
use crate::storage::NoteStore;

const NOTES_DIR: &str = "StickyNotes";
const TEXT_EXT: &str = "txt";
const CONFIG_EXT: &str = "json";

/// Flat-file note storage.
///
/// Each note is two independent records in one directory: `<id>.txt` holds
/// the raw text (the whole file is the content) and `<id>.json` the display
/// config. The directory is created once when the store is opened; after
/// that every operation assumes it exists and is writable.
pub struct FileNoteStore {
    dir: PathBuf,
}

impl FileNoteStore {
    /// Open a store rooted at `root`, creating `<root>/StickyNotes/` if
    /// needed.
    pub fn open(root: &Path) -> Result<Self> {
        let dir = root.join(NOTES_DIR);
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Open the store under the user's configuration directory.
    ///
    /// The `STICKIES_DIR` environment variable overrides the root when set.
    pub fn open_default() -> Result<Self> {
        let root = match std::env::var_os("STICKIES_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .ok_or(StickiesError::NoConfigDir)?
                .join("stickies"),
        };
        Self::open(&root)
    }

    /// Directory holding the note files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, id: &NoteId, ext: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", id, ext))
    }
}

impl NoteStore for FileNoteStore {
    fn save_note(&self, name: &str, content: &str) -> Result<()> {
        let id = NoteId::new(name);
        debug!(%id, bytes = content.len(), "saving note");
        fs::write(self.record_path(&id, TEXT_EXT), content)?;
        Ok(())
    }

    fn load_note(&self, name: &str) -> Result<Note> {
        let path = self.record_path(&NoteId::new(name), TEXT_EXT);
        let content = if path.exists() {
            fs::read_to_string(&path)?
        } else {
            String::new()
        };
        Ok(Note::new(name.to_string(), content))
    }

    fn delete_note(&self, name: &str) -> Result<()> {
        let id = NoteId::new(name);
        let path = self.record_path(&id, TEXT_EXT);
        if path.exists() {
            debug!(%id, "deleting note");
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn list_notes(&self) -> Result<Vec<NoteId>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(TEXT_EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                let id = NoteId::new(stem);
                if !id.is_blank() {
                    ids.push(id);
                }
            }
        }
        Ok(ids)
    }

    fn get_config(&self, name: &str) -> Result<NoteConfig> {
        let path = self.record_path(&NoteId::new(name), CONFIG_EXT);
        if !path.exists() {
            return Ok(NoteConfig::default());
        }
        let json = fs::read_to_string(&path)?;
        // A record that no longer parses is treated as absent.
        Ok(serde_json::from_str(&json).unwrap_or_default())
    }

    fn save_config(&self, name: &str, config: &NoteConfig) -> Result<()> {
        let id = NoteId::new(name);
        debug!(%id, "saving config");
        let json = serde_json::to_string_pretty(config)?;
        fs::write(self.record_path(&id, CONFIG_EXT), json)?;
        Ok(())
    }
}
