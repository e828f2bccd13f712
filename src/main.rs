//! mdmerge - Markdown knowledge base merger
//!
//! Concatenates every Markdown file in a directory into one document, with
//! optional AI context and prompt sections at the top, so the whole set can be
//! handed to an AI in a single file.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod merge;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Some(Commands::Completions(args)) => commands::completions::run(args),
        None => commands::merge::run(cli.merge),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
