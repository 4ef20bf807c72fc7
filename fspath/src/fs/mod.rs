//! Filesystem queries, mutation, and traversal.
//!
//! Everything in this module consults the operating system and can fail
//! with a structured [`Error`](crate::Error) carrying the failed
//! operation, the offending path(s), and the OS error code. Calls are
//! synchronous and stateless: no handle outlives a call except the
//! directory iterators, which release their OS handle on drop.
//!
//! The filesystem is a shared, mutable resource this layer does not lock.
//! Individual operations are as atomic as the OS makes them (`rename`
//! within a filesystem is; `exists`-then-`create` is not), and the
//! documentation calls out the racy patterns.
//!
//! # Examples
//!
//! ```no_run
//! use fspath::fs;
//!
//! fs::create_dir_all("/tmp/workspace/logs").unwrap();
//! assert!(fs::is_dir("/tmp/workspace/logs"));
//!
//! for entry in fs::read_dir("/tmp/workspace").unwrap() {
//!     println!("{}", entry.unwrap().path());
//! }
//! ```

pub mod canonical;
pub mod mutate;
pub mod read_dir;
pub mod status;
pub mod walk;

pub use canonical::{absolute, canonical, expand_tilde, resolve_symlinks, weakly_canonical};
pub use mutate::{
    copy, copy_file, create_dir, create_dir_all, create_dir_symlink, create_hard_link,
    create_symlink, current_dir, read_symlink, remove, remove_all, rename, rename_or_copy,
    set_current_dir, temp_dir, CopyOptions,
};
pub use read_dir::{read_dir, DirEntry, ReadDir};
pub use status::{
    equivalent, exists, file_size, is_dir, is_empty, is_file, is_other, is_symlink,
    last_write_time, set_last_write_time, space, status, symlink_status, try_exists, FileStatus,
    FileType, SpaceInfo,
};
pub use walk::{walk, Walk, WalkOptions};
