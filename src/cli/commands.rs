use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "stickies")]
#[command(version, about = "Persistent sticky notes stored as plain files")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a note's content
    Show {
        /// Note name (defaults to "default")
        name: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a note's content, replacing whatever was there
    Save {
        /// Note name (defaults to "default")
        name: Option<String>,

        /// Content to store
        content: Option<String>,

        /// Read content from stdin instead
        #[arg(long)]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note (its colour is kept for if the name comes back)
    Delete {
        /// Note name
        name: String,

        /// Skip confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// List every note with its colour
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or set a note's background colour
    Colour {
        /// Note name (defaults to "default")
        name: Option<String>,

        /// New colour as "r,g,b,a" with channels in 0-1; prints the
        /// current colour when omitted
        value: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
