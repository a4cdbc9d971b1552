// src/name.rs
//! Note name sanitisation.
//!
//! User-entered note names become filesystem-safe identifiers before they
//! touch disk. Two raw names that sanitise to the same identifier refer to
//! the same note; that collision is deliberate.

use std::fmt;

use serde::Serialize;

/// Characters that cannot appear in a file name on any supported platform.
fn is_illegal(c: char) -> bool {
    c.is_control() || matches!(c, '"' | '*' | '/' | ':' | '<' | '>' | '?' | '\\' | '|')
}

/// A sanitised note identifier, usable directly as a file stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Sanitise a raw name into an identifier.
    ///
    /// - Replaces each run of filename-illegal characters with a single `_`
    /// - Lower-cases the result
    /// - Trims surrounding whitespace
    ///
    /// Never fails; empty or all-illegal input yields a blank identifier,
    /// and sanitising an already-sanitised name is a no-op.
    pub fn new(raw: &str) -> Self {
        let mut out = String::with_capacity(raw.len());
        let mut last_was_sub = false;

        for c in raw.chars() {
            if is_illegal(c) {
                if !last_was_sub {
                    out.push('_');
                }
                last_was_sub = true;
            } else {
                out.extend(c.to_lowercase());
                last_was_sub = false;
            }
        }

        NoteId(out.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Blank identifiers never name a stored note and are excluded from
    /// listings.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
