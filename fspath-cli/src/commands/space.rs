//! Command to show filesystem capacity information.

use clap::Args;
use fspath::fs;

use crate::error::CliError;
use crate::utils::{input_path, print_json, GlobalOptions};

/// Show capacity, free, and available bytes for the filesystem containing
/// a path.
#[derive(Args)]
pub struct SpaceCommand {
    /// Path on the filesystem to query (defaults to the current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Emit JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,
}

impl SpaceCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let path = input_path(&self.path)?;
        let info = fs::space(&path)?;

        if self.json {
            return print_json(&info);
        }

        println!("capacity:  {}", info.capacity);
        println!("free:      {}", info.free);
        println!("available: {}", info.available);
        Ok(())
    }
}
