use serde::{Deserialize, Serialize};

/// An RGBA colour, each channel in `[0, 1]`.
///
/// Serializes as a plain 4-element JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Colour(pub f32, pub f32, pub f32, pub f32);

impl Default for Colour {
    /// Mid-grey, fully opaque.
    fn default() -> Self {
        Colour(0.5, 0.5, 0.5, 1.0)
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.0, self.1, self.2, self.3)
    }
}

impl std::str::FromStr for Colour {
    type Err = String;

    /// Parses `r,g,b,a` with each channel a float in `[0, 1]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(format!("expected r,g,b,a, got '{}'", s));
        }

        let mut channels = [0f32; 4];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            let value: f32 = part
                .parse()
                .map_err(|_| format!("'{}' is not a number", part))?;
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("channel '{}' is outside 0-1", part));
            }
            *slot = value;
        }

        Ok(Colour(channels[0], channels[1], channels[2], channels[3]))
    }
}

/// Per-note display settings, stored as pretty-printed JSON next to the
/// note text.
///
/// Reads are forgiving: a missing or unreadable config means defaults, so
/// every field needs a sensible default value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteConfig {
    pub colour: Colour,
}
