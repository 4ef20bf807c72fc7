//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CopyCommand, LinkCommand, ListCommand, MakedirCommand, MoveCommand, RemoveCommand,
    ResolveCommand, SpaceCommand, StatCommand,
};
use clap::{Parser, Subcommand};

/// Command-line tool for inspecting and manipulating filesystem paths.
#[derive(Parser)]
#[command(name = "fsp")]
#[command(version, about = "Inspect and manipulate filesystem paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show status of a filesystem entry
    Stat(StatCommand),

    /// List directory contents
    List(ListCommand),

    /// Copy a file or directory tree
    Copy(CopyCommand),

    /// Move (rename) a file or directory
    #[command(name = "move")]
    Move(MoveCommand),

    /// Remove a file or directory
    Remove(RemoveCommand),

    /// Create a directory
    Makedir(MakedirCommand),

    /// Create a symbolic or hard link
    Link(LinkCommand),

    /// Resolve a path against the live filesystem
    Resolve(ResolveCommand),

    /// Show capacity of the filesystem containing a path
    Space(SpaceCommand),
}
