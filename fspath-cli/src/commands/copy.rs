//! Command to copy files and directory trees.

use clap::Args;
use fspath::{fs, CopyOptions};

use crate::error::CliError;
use crate::utils::{input_path, GlobalOptions};

/// Copy a file or directory tree.
#[derive(Args)]
pub struct CopyCommand {
    /// Source path
    pub from: String,

    /// Destination path
    pub to: String,

    /// Copy directories recursively
    #[arg(long, short = 'r')]
    pub recursive: bool,

    /// Replace existing destination files
    #[arg(long)]
    pub overwrite: bool,

    /// Keep existing destination files
    #[arg(long)]
    pub skip_existing: bool,

    /// Replace existing destination files only if the source is newer
    #[arg(long)]
    pub update: bool,

    /// Copy symlinks as symlinks instead of following them
    #[arg(long)]
    pub copy_symlinks: bool,

    /// Create symlinks pointing at the source instead of copying
    #[arg(long)]
    pub symlink: bool,

    /// Create hard links to the source instead of copying
    #[arg(long)]
    pub hard_link: bool,
}

impl CopyCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let from = input_path(&self.from)?;
        let to = input_path(&self.to)?;

        let options = CopyOptions::new()
            .with_recursive(self.recursive)
            .with_overwrite_existing(self.overwrite)
            .with_skip_existing(self.skip_existing)
            .with_update_existing(self.update)
            .with_copy_symlinks(self.copy_symlinks)
            .with_create_symlinks(self.symlink)
            .with_create_hard_links(self.hard_link);

        fs::copy(&from, &to, &options)?;
        if global.verbose {
            eprintln!("copied {from} -> {to}");
        }
        Ok(())
    }
}
