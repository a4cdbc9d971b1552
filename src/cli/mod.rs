mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{
    handle_colour, handle_delete, handle_list, handle_save, handle_show, DEFAULT_NOTE_NAME,
    MAX_NOTE_LEN,
};
