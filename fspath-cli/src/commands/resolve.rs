//! Command to resolve a path against the live filesystem.

use clap::Args;
use fspath::fs;

use crate::error::CliError;
use crate::utils::{input_path, GlobalOptions};

/// Resolve symlinks and relative components of a path.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path to resolve
    pub path: String,

    /// Tolerate a non-existent tail (resolve the existing prefix)
    #[arg(long, conflicts_with = "lexical")]
    pub weak: bool,

    /// Only make the path absolute and normalize it, without touching
    /// symlinks or requiring existence
    #[arg(long)]
    pub lexical: bool,
}

impl ResolveCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let path = input_path(&self.path)?;

        let resolved = if self.lexical {
            fs::absolute(&path)?
        } else if self.weak {
            fs::weakly_canonical(&path)?
        } else {
            fs::canonical(&path)?
        };

        println!("{resolved}");
        Ok(())
    }
}
