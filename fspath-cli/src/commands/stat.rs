//! Command to show the status of a filesystem entry.

use clap::Args;
use fspath::{fs, FileStatus};
use serde::Serialize;

use crate::error::CliError;
use crate::utils::{format_time, input_path, print_json, type_tag, GlobalOptions};

/// Show type, size, and modification time of a filesystem entry.
#[derive(Args)]
pub struct StatCommand {
    /// Path to inspect
    pub path: String,

    /// Inspect a symlink itself instead of its target
    #[arg(long)]
    pub no_follow: bool,

    /// Emit JSON instead of human-readable output
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct StatOutput<'a> {
    path: &'a str,
    #[serde(flatten)]
    status: &'a FileStatus,
}

impl StatCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let path = input_path(&self.path)?;
        let status = if self.no_follow {
            fs::symlink_status(&path)?
        } else {
            fs::status(&path)?
        };

        if self.json {
            return print_json(&StatOutput {
                path: path.as_str(),
                status: &status,
            });
        }

        println!("path:     {path}");
        println!("type:     {}", type_tag(Some(status.file_type())));
        println!("size:     {}", status.len());
        match status.modified() {
            Some(time) => println!("modified: {}", format_time(time)),
            None => println!("modified: unavailable"),
        }
        Ok(())
    }
}
