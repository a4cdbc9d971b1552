// src/entity/note.rs
use serde::{Deserialize, Serialize};

/// A sticky note: the name it was looked up under plus its text content.
///
/// Notes exist exactly while their backing text record does; a name that
/// was never saved loads as a note with empty content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub name: String,
    pub content: String,
}

impl Note {
    pub fn new(name: String, content: String) -> Self {
        Self { name, content }
    }
}
