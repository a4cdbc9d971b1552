use thiserror::Error;

#[derive(Error, Debug)]
pub enum StickiesError {
    #[error("Could not determine a configuration directory for this platform")]
    NoConfigDir,

    #[error("Note is {len} characters long, the editor caps notes at {max}")]
    NoteTooLong { len: usize, max: usize },

    #[error("Invalid colour: {0}")]
    InvalidColour(String),

    #[error("Refusing to delete without --force in non-interactive mode")]
    DeleteNeedsForce,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StickiesError>;
