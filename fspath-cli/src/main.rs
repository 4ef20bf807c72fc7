//! Main entry point for the fsp CLI.
//!
//! This is the command-line interface for the fspath filesystem library.
//! It provides commands for inspecting and manipulating paths and files:
//! - `stat`: Show status of a filesystem entry
//! - `list`: List directory contents, optionally recursively
//! - `copy` / `move` / `remove`: Mutate the filesystem
//! - `makedir` / `link`: Create directories and links
//! - `resolve`: Canonicalize paths
//! - `space`: Show filesystem capacity

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = fspath::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Stat(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Copy(cmd) => cmd.execute(&global),
        cli::Command::Move(cmd) => cmd.execute(&global),
        cli::Command::Remove(cmd) => cmd.execute(&global),
        cli::Command::Makedir(cmd) => cmd.execute(&global),
        cli::Command::Link(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Space(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            if !cli.quiet {
                eprintln!("Error: {err}");
            }
            std::process::exit(err.exit_code());
        }
    }
}
