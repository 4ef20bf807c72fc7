//! Command to list directory contents.

use clap::Args;
use fspath::{fs, WalkOptions};
use serde::Serialize;

use crate::error::CliError;
use crate::utils::{input_path, print_json, type_tag, GlobalOptions};

/// List the entries of a directory, optionally recursively.
#[derive(Args)]
pub struct ListCommand {
    /// Directory to list (defaults to the current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Descend into subdirectories
    #[arg(long, short = 'r')]
    pub recursive: bool,

    /// Follow directory symlinks while descending
    #[arg(long, requires = "recursive")]
    pub follow_symlinks: bool,

    /// Skip unreadable subdirectories instead of failing
    #[arg(long, requires = "recursive")]
    pub skip_permission_denied: bool,

    /// Limit recursion depth (0 lists only immediate children)
    #[arg(long, value_name = "N", requires = "recursive")]
    pub max_depth: Option<usize>,

    /// Show entry types alongside names
    #[arg(long, short = 'l')]
    pub long: bool,

    /// Emit JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ListEntry {
    path: String,
    file_type: &'static str,
    depth: usize,
}

impl ListCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let path = input_path(&self.path)?;

        let mut entries: Vec<ListEntry> = Vec::new();
        if self.recursive {
            let options = WalkOptions::new()
                .with_follow_symlinks(self.follow_symlinks)
                .with_skip_permission_denied(self.skip_permission_denied)
                .with_max_depth(self.max_depth);
            for entry in fs::walk(&path, options)? {
                let entry = entry?;
                entries.push(ListEntry {
                    path: entry.path().to_string(),
                    file_type: type_tag(entry.file_type()),
                    depth: entry.depth(),
                });
            }
        } else {
            for entry in fs::read_dir(&path)? {
                let entry = entry?;
                entries.push(ListEntry {
                    path: entry.path().to_string(),
                    file_type: type_tag(entry.file_type()),
                    depth: 0,
                });
            }
        }

        if self.json {
            return print_json(&entries);
        }

        for entry in &entries {
            if self.long {
                println!("{:<6} {}", entry.file_type, entry.path);
            } else {
                println!("{}", entry.path);
            }
        }
        Ok(())
    }
}
