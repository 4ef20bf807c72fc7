//! Command to remove filesystem entries.

use clap::Args;
use fspath::fs;

use crate::error::CliError;
use crate::utils::{input_path, GlobalOptions};

/// Remove a file, symlink, or directory.
#[derive(Args)]
pub struct RemoveCommand {
    /// Path to remove
    pub path: String,

    /// Remove directories and their contents recursively
    #[arg(long, short = 'r')]
    pub recursive: bool,
}

impl RemoveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = input_path(&self.path)?;

        if self.recursive {
            let count = fs::remove_all(&path)?;
            if !global.quiet {
                println!("removed {count} entries");
            }
        } else {
            let removed = fs::remove(&path)?;
            if !global.quiet && !removed {
                println!("nothing to remove");
            }
        }
        Ok(())
    }
}
