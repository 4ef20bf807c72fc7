//! Command to create directories.

use clap::Args;
use fspath::fs;

use crate::error::CliError;
use crate::utils::{input_path, GlobalOptions};

/// Create a directory.
#[derive(Args)]
pub struct MakedirCommand {
    /// Directory to create
    pub path: String,

    /// Create missing parent directories as needed
    #[arg(long, short = 'p')]
    pub parents: bool,
}

impl MakedirCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = input_path(&self.path)?;

        let created = if self.parents {
            fs::create_dir_all(&path)?
        } else {
            fs::create_dir(&path)?
        };
        if !global.quiet && !created {
            println!("already exists");
        }
        Ok(())
    }
}
