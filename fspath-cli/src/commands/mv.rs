//! Command to move (rename) filesystem entries.

use clap::Args;
use fspath::fs;

use crate::error::CliError;
use crate::utils::{input_path, GlobalOptions};

/// Move (rename) a file or directory.
///
/// The move is atomic within one filesystem. Moving across filesystems
/// fails unless `--allow-copy` explicitly permits the copy+delete
/// fallback.
#[derive(Args)]
pub struct MoveCommand {
    /// Source path
    pub from: String,

    /// Destination path
    pub to: String,

    /// Permit a non-atomic copy+delete when crossing filesystems
    #[arg(long)]
    pub allow_copy: bool,
}

impl MoveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let from = input_path(&self.from)?;
        let to = input_path(&self.to)?;

        if self.allow_copy {
            fs::rename_or_copy(&from, &to)?;
        } else {
            fs::rename(&from, &to)?;
        }
        if global.verbose {
            eprintln!("moved {from} -> {to}");
        }
        Ok(())
    }
}
