#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # fspath
//!
//! A cross-platform filesystem path and metadata library.
//!
//! The crate splits into two layers with a hard boundary between them:
//!
//! - [`path`]: the [`PurePath`] value type and its lexical algebra -
//!   decomposition, normalization, comparison, relative-path computation.
//!   Pure data, no OS access, no failure modes.
//! - [`fs`]: queries and mutations against the live filesystem -
//!   existence and type checks, sizes and timestamps, create/remove/
//!   rename/copy, symlinks, and lazy directory traversal. Every call is
//!   fallible and reports failures through [`Error`].
//!
//! ## Examples
//!
//! ```
//! use fspath::PurePath;
//!
//! let path = PurePath::from("/data/logs/../archive/app.tar.gz");
//! assert_eq!(path.lexically_normal(), PurePath::from("/data/archive/app.tar.gz"));
//! assert_eq!(path.extension(), Some(".gz"));
//! assert_eq!(path.file_stem(), Some("app.tar"));
//! ```
//!
//! ```no_run
//! use fspath::{fs, CopyOptions, WalkOptions};
//!
//! fs::create_dir_all("/tmp/project/build").unwrap();
//! fs::copy_file(
//!     "/tmp/project/config",
//!     "/tmp/project/build/config",
//!     &CopyOptions::new().with_overwrite_existing(true),
//! )
//! .unwrap();
//!
//! for entry in fs::walk("/tmp/project", WalkOptions::new()).unwrap() {
//!     println!("{}", entry.unwrap().path());
//! }
//! ```

pub mod error;
pub mod fs;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use fs::{
    CopyOptions, DirEntry, FileStatus, FileType, ReadDir, SpaceInfo, Walk, WalkOptions,
};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{Ancestors, Component, Components, PathRelationship, PurePath};
