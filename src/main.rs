use clap::Parser;
use stickies::cli::{
    handle_colour, handle_delete, handle_list, handle_save, handle_show, Cli, Commands,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stickies=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show { name, json } => handle_show(name, json),
        Commands::Save {
            name,
            content,
            stdin,
            json,
        } => handle_save(name, content, stdin, json),
        Commands::Delete { name, force } => handle_delete(name, force),
        Commands::List { json } => handle_list(json),
        Commands::Colour { name, value, json } => handle_colour(name, value, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
