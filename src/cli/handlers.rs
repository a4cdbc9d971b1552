use std::io::{self, Read};

use serde::Serialize;

use crate::entity::Colour;
use crate::error::{Result, StickiesError};
use crate::name::NoteId;
use crate::storage::{FileNoteStore, NoteStore};

/// Name substituted when a command is invoked without one.
pub const DEFAULT_NOTE_NAME: &str = "default";

/// Longest note the editing surface accepts, in characters. The store
/// itself enforces no limit.
pub const MAX_NOTE_LEN: usize = 5000;

fn open_store() -> Result<FileNoteStore> {
    FileNoteStore::open_default()
}

fn resolve_name(name: Option<String>) -> String {
    match name {
        Some(n) if !n.is_empty() => n,
        _ => DEFAULT_NOTE_NAME.to_string(),
    }
}

pub fn handle_show(name: Option<String>, json: bool) -> Result<()> {
    let store = open_store()?;
    let note = store.load_note(&resolve_name(name))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("{}", note.content);
    }

    Ok(())
}

pub fn handle_save(
    name: Option<String>,
    content: Option<String>,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let store = open_store()?;
    let name = resolve_name(name);

    let content = if stdin {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        content.unwrap_or_default()
    };

    let len = content.chars().count();
    if len > MAX_NOTE_LEN {
        return Err(StickiesError::NoteTooLong {
            len,
            max: MAX_NOTE_LEN,
        });
    }

    store.save_note(&name, &content)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&store.load_note(&name)?)?
        );
    } else {
        println!("Saved note '{}' ({} characters)", NoteId::new(&name), len);
    }

    Ok(())
}

pub fn handle_delete(name: String, force: bool) -> Result<()> {
    let store = open_store()?;
    let id = NoteId::new(&name);

    // Deleting an absent note is a no-op at the store level; surface that
    // instead of prompting for nothing.
    if !store.list_notes()?.contains(&id) {
        println!("No note named '{}'.", id);
        return Ok(());
    }

    // Confirm deletion unless --force is used
    if !force {
        eprintln!("Delete note '{}'? [y/N] ", id);

        // Check if stdin is a tty for interactive confirmation
        if atty::is(atty::Stream::Stdin) {
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(());
            }
        } else {
            return Err(StickiesError::DeleteNeedsForce);
        }
    }

    store.delete_note(&name)?;
    println!("Deleted note '{}'.", id);

    Ok(())
}

#[derive(Serialize)]
struct ListEntry {
    name: NoteId,
    colour: Colour,
}

pub fn handle_list(json: bool) -> Result<()> {
    let store = open_store()?;

    // The store guarantees no order; sort here for stable output.
    let mut ids = store.list_notes()?;
    ids.sort();

    let mut entries = Vec::with_capacity(ids.len());
    for id in ids {
        let colour = store.get_config(id.as_str())?.colour;
        entries.push(ListEntry { name: id, colour });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if entries.is_empty() {
        println!("No notes yet.");
    } else {
        println!("Notes:\n");
        for entry in entries {
            println!("  {}  [{}]", entry.name, entry.colour);
        }
    }

    Ok(())
}

pub fn handle_colour(name: Option<String>, value: Option<String>, json: bool) -> Result<()> {
    let store = open_store()?;
    let name = resolve_name(name);

    match value {
        Some(raw) => {
            let colour: Colour = raw.parse().map_err(StickiesError::InvalidColour)?;
            let mut config = store.get_config(&name)?;
            config.colour = colour;
            store.save_config(&name, &config)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Set colour of '{}' to {}", NoteId::new(&name), colour);
            }
        }
        None => {
            let config = store.get_config(&name)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("{}", config.colour);
            }
        }
    }

    Ok(())
}
