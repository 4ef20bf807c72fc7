//! Filesystem mutation operations.
//!
//! Creation, removal, renaming, copying, and linking. Every operation is a
//! stateless call keyed by path: no handle survives the call. Operations
//! that can meaningfully be no-ops (creating an existing directory,
//! removing a missing entry) report that through their return value rather
//! than an error.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::fs::status::{equivalent, FileType};
use crate::path::PurePath;

/// Options controlling [`copy`] and [`copy_file`].
///
/// Defaults to plain behavior: no overwriting, no recursion, symlinks
/// followed. Conflicting combinations are rejected by [`validate`]
/// (called by the copy operations before touching the filesystem).
///
/// # Examples
///
/// ```
/// use fspath::CopyOptions;
///
/// let options = CopyOptions::new()
///     .with_recursive(true)
///     .with_overwrite_existing(true);
/// assert!(options.validate().is_ok());
///
/// let conflicting = CopyOptions::new()
///     .with_skip_existing(true)
///     .with_overwrite_existing(true);
/// assert!(conflicting.validate().is_err());
/// ```
///
/// [`validate`]: CopyOptions::validate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyOptions {
    skip_existing: bool,
    overwrite_existing: bool,
    update_existing: bool,
    recursive: bool,
    copy_symlinks: bool,
    create_symlinks: bool,
    create_hard_links: bool,
}

impl CopyOptions {
    /// Creates the default option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep existing destination files, reporting the copy as skipped.
    #[must_use]
    pub fn with_skip_existing(mut self, value: bool) -> Self {
        self.skip_existing = value;
        self
    }

    /// Replace existing destination files.
    #[must_use]
    pub fn with_overwrite_existing(mut self, value: bool) -> Self {
        self.overwrite_existing = value;
        self
    }

    /// Replace existing destination files only when the source is newer.
    #[must_use]
    pub fn with_update_existing(mut self, value: bool) -> Self {
        self.update_existing = value;
        self
    }

    /// Descend into directories, copying the whole tree.
    #[must_use]
    pub fn with_recursive(mut self, value: bool) -> Self {
        self.recursive = value;
        self
    }

    /// Copy symlinks as symlinks instead of following them.
    #[must_use]
    pub fn with_copy_symlinks(mut self, value: bool) -> Self {
        self.copy_symlinks = value;
        self
    }

    /// Create symlinks pointing at the source instead of copying content.
    #[must_use]
    pub fn with_create_symlinks(mut self, value: bool) -> Self {
        self.create_symlinks = value;
        self
    }

    /// Create hard links to the source instead of copying content.
    #[must_use]
    pub fn with_create_hard_links(mut self, value: bool) -> Self {
        self.create_hard_links = value;
        self
    }

    /// Rejects conflicting option combinations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if more than one of
    /// `skip_existing`/`overwrite_existing`/`update_existing` is set, if
    /// both link-creation modes are set, or if `copy_symlinks` is combined
    /// with a link-creation mode.
    pub fn validate(&self) -> Result<()> {
        let existing_modes = [
            self.skip_existing,
            self.overwrite_existing,
            self.update_existing,
        ];
        if existing_modes.iter().filter(|set| **set).count() > 1 {
            return Err(Error::InvalidArgument {
                reason: "at most one of skip_existing, overwrite_existing, update_existing \
                         may be set"
                    .to_string(),
            });
        }
        if self.create_symlinks && self.create_hard_links {
            return Err(Error::InvalidArgument {
                reason: "create_symlinks conflicts with create_hard_links".to_string(),
            });
        }
        if self.copy_symlinks && (self.create_symlinks || self.create_hard_links) {
            return Err(Error::InvalidArgument {
                reason: "copy_symlinks conflicts with link-creation modes".to_string(),
            });
        }
        Ok(())
    }
}

/// Creates a directory.
///
/// Returns `Ok(true)` if the directory was created and `Ok(false)` if it
/// already existed as a directory - repeated calls are a no-op, not an
/// error.
///
/// # Errors
///
/// Returns [`Error::FileType`] if the path exists as a non-directory, and
/// [`Error::NotFound`] if the parent directory is missing.
///
/// # Examples
///
/// ```no_run
/// use fspath::fs::create_dir;
///
/// assert!(create_dir("/tmp/fresh").unwrap());
/// assert!(!create_dir("/tmp/fresh").unwrap());
/// ```
pub fn create_dir(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    match fs::create_dir(path) {
        Ok(()) => {
            log::debug!("created directory {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            if fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false) {
                Ok(false)
            } else {
                Err(Error::FileType {
                    op: "create_dir",
                    path: path.to_path_buf(),
                    reason: "exists but is not a directory".to_string(),
                })
            }
        }
        Err(e) => Err(Error::from_io("create_dir", path, e)),
    }
}

/// Creates a directory and all missing parents.
///
/// Returns `Ok(true)` if anything was created and `Ok(false)` if the whole
/// chain already existed.
///
/// # Errors
///
/// Returns [`Error::FileType`] if a component exists as a non-directory.
pub fn create_dir_all(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    if fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false) {
        return Ok(false);
    }
    match fs::create_dir_all(path) {
        Ok(()) => {
            log::debug!("created directories {}", path.display());
            Ok(true)
        }
        Err(e)
            if e.kind() == std::io::ErrorKind::AlreadyExists
                || e.kind() == std::io::ErrorKind::NotADirectory =>
        {
            Err(Error::FileType {
                op: "create_dir_all",
                path: path.to_path_buf(),
                reason: "a component exists but is not a directory".to_string(),
            })
        }
        Err(e) => Err(Error::from_io("create_dir_all", path, e)),
    }
}

/// Removes a single entry: a file, symlink, or empty directory.
///
/// Returns `Ok(false)` if the entry does not exist - removing nothing is
/// not an error.
///
/// # Errors
///
/// Fails on a non-empty directory or any genuine OS error.
///
/// # Examples
///
/// ```
/// use fspath::fs::remove;
///
/// assert!(!remove("/nonexistent").unwrap());
/// ```
pub fn remove(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(Error::from_io("remove", path, e)),
    };
    if meta.is_dir() {
        fs::remove_dir(path).map_err(|e| Error::from_io("remove", path, e))?;
    } else {
        fs::remove_file(path).map_err(|e| Error::from_io("remove", path, e))?;
    }
    log::debug!("removed {}", path.display());
    Ok(true)
}

/// Recursively removes a directory tree (or a single non-directory entry).
///
/// Symlinks are removed, never followed. Returns the number of entries
/// removed; `Ok(0)` if the path does not exist.
///
/// # Errors
///
/// Fails on the first entry that cannot be removed.
pub fn remove_all(path: impl AsRef<Path>) -> Result<u64> {
    fn inner(path: &Path) -> Result<u64> {
        let meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(Error::from_io("remove_all", path, e)),
        };
        if meta.is_dir() {
            let mut count = 0;
            let entries = fs::read_dir(path).map_err(|e| Error::from_io("remove_all", path, e))?;
            for entry in entries {
                let entry = entry.map_err(|e| Error::from_io("remove_all", path, e))?;
                count += inner(&entry.path())?;
            }
            fs::remove_dir(path).map_err(|e| Error::from_io("remove_all", path, e))?;
            Ok(count + 1)
        } else {
            fs::remove_file(path).map_err(|e| Error::from_io("remove_all", path, e))?;
            Ok(1)
        }
    }
    let path = path.as_ref();
    let count = inner(path)?;
    if count > 0 {
        log::debug!("removed {count} entries under {}", path.display());
    }
    Ok(count)
}

/// Renames an entry, atomically when source and destination live on the
/// same filesystem.
///
/// A rename across filesystems fails with [`Error::CrossDevice`] and never
/// silently degrades; use [`rename_or_copy`] to opt into the copy+delete
/// fallback.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the source is missing and
/// [`Error::CrossDevice`] across filesystems.
pub fn rename(from: impl AsRef<Path>, to: impl AsRef<Path>) -> Result<()> {
    let (from, to) = (from.as_ref(), to.as_ref());
    fs::rename(from, to).map_err(|e| Error::from_io2("rename", from, to, e))?;
    log::debug!("renamed {} -> {}", from.display(), to.display());
    Ok(())
}

/// Renames an entry, falling back to copy+delete across filesystems.
///
/// The fallback copies recursively (replicating symlinks, overwriting the
/// destination as a same-filesystem rename would) and then removes the
/// source. The fallback is not atomic; this function exists so that the
/// degradation is always an explicit caller choice.
///
/// # Errors
///
/// Any error of [`rename`], [`copy`], or [`remove_all`].
pub fn rename_or_copy(from: impl AsRef<Path>, to: impl AsRef<Path>) -> Result<()> {
    let (from, to) = (from.as_ref(), to.as_ref());
    match rename(from, to) {
        Err(Error::CrossDevice { .. }) => {
            log::debug!(
                "rename {} -> {} crosses filesystems, copying",
                from.display(),
                to.display()
            );
            let options = CopyOptions::new()
                .with_recursive(true)
                .with_copy_symlinks(true)
                .with_overwrite_existing(true);
            copy(from, to, &options)?;
            remove_all(from)?;
            Ok(())
        }
        other => other,
    }
}

/// Copies a single regular file.
///
/// Returns `Ok(true)` if content was copied and `Ok(false)` if the copy
/// was skipped because of `skip_existing` or `update_existing`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] on a conflicting option set (before
/// touching the filesystem), [`Error::NotFound`] if the source is missing,
/// [`Error::FileType`] if the source is not a regular file, and
/// [`Error::AlreadyExists`] if the destination exists and no existing-file
/// policy was chosen.
///
/// # Examples
///
/// ```no_run
/// use fspath::{fs::copy_file, CopyOptions};
///
/// let options = CopyOptions::new().with_overwrite_existing(true);
/// copy_file("a.txt", "b.txt", &options).unwrap();
/// ```
pub fn copy_file(
    from: impl AsRef<Path>,
    to: impl AsRef<Path>,
    options: &CopyOptions,
) -> Result<bool> {
    options.validate()?;
    let (from, to) = (from.as_ref(), to.as_ref());

    let src = fs::metadata(from).map_err(|e| Error::from_io("copy_file", from, e))?;
    if !src.is_file() {
        return Err(Error::FileType {
            op: "copy_file",
            path: from.to_path_buf(),
            reason: "not a regular file".to_string(),
        });
    }

    if fs::symlink_metadata(to).is_ok() {
        if equivalent(from, to).unwrap_or(false) {
            return Err(Error::InvalidArgument {
                reason: format!(
                    "source and destination are the same file: {}",
                    from.display()
                ),
            });
        }
        if options.skip_existing {
            return Ok(false);
        }
        if options.update_existing {
            let src_time = src
                .modified()
                .map_err(|e| Error::from_io("copy_file", from, e))?;
            let dst_time = fs::metadata(to)
                .and_then(|m| m.modified())
                .map_err(|e| Error::from_io("copy_file", to, e))?;
            if src_time <= dst_time {
                return Ok(false);
            }
        } else if !options.overwrite_existing {
            return Err(Error::AlreadyExists {
                op: "copy_file",
                path: to.to_path_buf(),
            });
        }
    }

    fs::copy(from, to).map_err(|e| Error::from_io2("copy_file", from, to, e))?;
    log::debug!("copied {} -> {}", from.display(), to.display());
    Ok(true)
}

/// Copies a file, directory tree, or symlink according to `options`.
///
/// - Symlinks are followed unless `copy_symlinks` replicates them.
/// - Regular files are copied by content, or linked with
///   `create_symlinks`/`create_hard_links`.
/// - Directories require `recursive` and are copied as a tree.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] on conflicting options (before
/// touching the filesystem), [`Error::FileType`] for directories without
/// `recursive`, for link-creation modes applied to directories, and for
/// special files, plus any error of [`copy_file`].
pub fn copy(from: impl AsRef<Path>, to: impl AsRef<Path>, options: &CopyOptions) -> Result<()> {
    options.validate()?;
    let (from, to) = (from.as_ref(), to.as_ref());

    let src = fs::symlink_metadata(from).map_err(|e| Error::from_io("copy", from, e))?;
    if src.file_type().is_symlink() && options.copy_symlinks {
        let target = fs::read_link(from).map_err(|e| Error::from_io("copy", from, e))?;
        return symlink_any(&target, to, fs::metadata(from).map(|m| m.is_dir()).unwrap_or(false));
    }

    // Follow the link (or take the entry itself) from here on.
    let src = fs::metadata(from).map_err(|e| Error::from_io("copy", from, e))?;
    let file_type = FileType::from_std(src.file_type());

    if file_type.is_file() {
        if options.create_hard_links {
            fs::hard_link(from, to).map_err(|e| Error::from_io2("copy", from, to, e))?;
            return Ok(());
        }
        if options.create_symlinks {
            return symlink_any(from, to, false);
        }
        copy_file(from, to, options)?;
        return Ok(());
    }

    if file_type.is_dir() {
        if options.create_symlinks || options.create_hard_links {
            return Err(Error::FileType {
                op: "copy",
                path: from.to_path_buf(),
                reason: "cannot create links to a directory".to_string(),
            });
        }
        if !options.recursive {
            return Err(Error::FileType {
                op: "copy",
                path: from.to_path_buf(),
                reason: "is a directory (set recursive to copy directory trees)".to_string(),
            });
        }
        create_dir_all(to)?;
        let entries = fs::read_dir(from).map_err(|e| Error::from_io("copy", from, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| Error::from_io("copy", from, e))?;
            let name = entry.file_name();
            copy(entry.path(), to.join(&name), options)?;
        }
        log::debug!("copied directory {} -> {}", from.display(), to.display());
        return Ok(());
    }

    Err(Error::FileType {
        op: "copy",
        path: from.to_path_buf(),
        reason: "cannot copy special file".to_string(),
    })
}

/// Creates a symlink at `link` pointing to `target` (a file target).
///
/// The target need not exist; dangling links are permitted.
///
/// # Errors
///
/// Returns [`Error::AlreadyExists`] if `link` exists.
pub fn create_symlink(target: impl AsRef<Path>, link: impl AsRef<Path>) -> Result<()> {
    symlink_any(target.as_ref(), link.as_ref(), false)
}

/// Creates a symlink at `link` pointing to `target` (a directory target).
///
/// On platforms that distinguish file and directory links this creates the
/// directory flavor; elsewhere it is identical to [`create_symlink`].
///
/// # Errors
///
/// Returns [`Error::AlreadyExists`] if `link` exists.
pub fn create_dir_symlink(target: impl AsRef<Path>, link: impl AsRef<Path>) -> Result<()> {
    symlink_any(target.as_ref(), link.as_ref(), true)
}

#[cfg(unix)]
fn symlink_any(target: &Path, link: &Path, _dir: bool) -> Result<()> {
    std::os::unix::fs::symlink(target, link)
        .map_err(|e| Error::from_io("create_symlink", link, e))?;
    log::debug!("linked {} -> {}", link.display(), target.display());
    Ok(())
}

#[cfg(windows)]
fn symlink_any(target: &Path, link: &Path, dir: bool) -> Result<()> {
    let result = if dir {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    };
    result.map_err(|e| Error::from_io("create_symlink", link, e))?;
    log::debug!("linked {} -> {}", link.display(), target.display());
    Ok(())
}

/// Creates a hard link at `link` to the file at `original`.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the original is missing,
/// [`Error::AlreadyExists`] if `link` exists, and [`Error::CrossDevice`]
/// when the paths live on different filesystems.
pub fn create_hard_link(original: impl AsRef<Path>, link: impl AsRef<Path>) -> Result<()> {
    let (original, link) = (original.as_ref(), link.as_ref());
    fs::hard_link(original, link)
        .map_err(|e| Error::from_io2("create_hard_link", original, link, e))?;
    log::debug!("hard linked {} -> {}", link.display(), original.display());
    Ok(())
}

/// Reads the target of a symlink, without resolving it further.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the path is missing and an OS error if
/// the path is not a symlink.
pub fn read_symlink(path: impl AsRef<Path>) -> Result<PurePath> {
    let path = path.as_ref();
    let target = fs::read_link(path).map_err(|e| Error::from_io("read_symlink", path, e))?;
    PurePath::from_std_path(&target)
}

/// The current working directory.
///
/// # Errors
///
/// Fails if the current directory has been removed or is inaccessible.
pub fn current_dir() -> Result<PurePath> {
    let cwd = std::env::current_dir()
        .map_err(|e| Error::from_io("current_dir", Path::new("."), e))?;
    PurePath::from_std_path(&cwd)
}

/// Changes the current working directory.
///
/// The working directory is process-global state; concurrent callers see
/// each other's changes.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the path is missing and
/// [`Error::FileType`]-class OS errors if it is not a directory.
pub fn set_current_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::env::set_current_dir(path).map_err(|e| Error::from_io("set_current_dir", path, e))?;
    log::debug!("changed current directory to {}", path.display());
    Ok(())
}

/// The directory designated for temporary files.
///
/// # Errors
///
/// Fails only if the native path is not valid UTF-8.
pub fn temp_dir() -> Result<PurePath> {
    PurePath::from_std_path(&std::env::temp_dir())
}
