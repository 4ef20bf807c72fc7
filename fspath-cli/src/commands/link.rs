//! Command to create symbolic and hard links.

use clap::Args;
use fspath::fs;

use crate::error::CliError;
use crate::utils::{input_path, GlobalOptions};

/// Create a link at LINK pointing to TARGET (symbolic by default).
#[derive(Args)]
pub struct LinkCommand {
    /// Path the link will point to
    pub target: String,

    /// Location of the new link
    pub link: String,

    /// Create a hard link instead of a symbolic link
    #[arg(long, conflicts_with = "dir")]
    pub hard: bool,

    /// Create a directory symlink (matters on platforms that distinguish)
    #[arg(long)]
    pub dir: bool,
}

impl LinkCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let target = input_path(&self.target)?;
        let link = input_path(&self.link)?;

        if self.hard {
            fs::create_hard_link(&target, &link)?;
        } else if self.dir {
            fs::create_dir_symlink(&target, &link)?;
        } else {
            fs::create_symlink(&target, &link)?;
        }
        if global.verbose {
            eprintln!("linked {link} -> {target}");
        }
        Ok(())
    }
}
