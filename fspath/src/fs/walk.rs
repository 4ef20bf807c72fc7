//! Recursive directory traversal.
//!
//! [`walk`] descends a directory tree depth-first, yielding a
//! [`DirEntry`] per discovered member. The walker holds one OS directory
//! handle per open level, all released when the iterator is dropped.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::read_dir::DirEntry;

/// Options controlling [`walk`].
///
/// # Examples
///
/// ```
/// use fspath::WalkOptions;
///
/// let options = WalkOptions::new()
///     .with_follow_symlinks(true)
///     .with_skip_permission_denied(true)
///     .with_max_depth(Some(3));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkOptions {
    follow_symlinks: bool,
    skip_permission_denied: bool,
    max_depth: Option<usize>,
}

impl WalkOptions {
    /// Creates the default option set: do not follow directory symlinks,
    /// abort on permission denied, no depth limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Descend into directories reached through symlinks.
    ///
    /// Cycles introduced by symlinks are detected; a directory already
    /// visited in this pass is not entered again.
    #[must_use]
    pub fn with_follow_symlinks(mut self, value: bool) -> Self {
        self.follow_symlinks = value;
        self
    }

    /// Skip subdirectories that cannot be opened for reading instead of
    /// failing the traversal.
    #[must_use]
    pub fn with_skip_permission_denied(mut self, value: bool) -> Self {
        self.skip_permission_denied = value;
        self
    }

    /// Limit how deep the walk descends. Immediate children of the root
    /// are at depth `0`; entries deeper than `max_depth` are neither
    /// yielded nor visited. `None` means unlimited.
    #[must_use]
    pub fn with_max_depth(mut self, value: Option<usize>) -> Self {
        self.max_depth = value;
        self
    }
}

#[derive(Debug)]
struct Frame {
    iter: fs::ReadDir,
    dir: PathBuf,
    depth: usize,
}

/// Depth-first recursive directory iterator.
///
/// Created by [`walk`]. Yields every member of the tree below the root
/// (the root itself is not yielded), parents before their contents, in
/// OS-defined order among siblings. Single-pass and non-restartable.
///
/// Concurrent mutation of the tree never crashes the walker: entries may
/// be missed or observed with an unavailable status, but a path already
/// yielded is never yielded again in the same pass.
#[derive(Debug)]
pub struct Walk {
    stack: Vec<Frame>,
    options: WalkOptions,
    pending_error: Option<Error>,
    #[cfg(unix)]
    visited: std::collections::HashSet<(u64, u64)>,
}

impl Walk {
    /// Registers a directory as visited; returns false if it was already.
    ///
    /// Only meaningful when following symlinks, which is the only way a
    /// tree walk can revisit a directory.
    fn mark_visited(&mut self, path: &Path) -> bool {
        if !self.options.follow_symlinks {
            return true;
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            if let Ok(meta) = fs::metadata(path) {
                return self.visited.insert((meta.dev(), meta.ino()));
            }
        }
        #[cfg(not(unix))]
        {
            let _ = path;
        }
        true
    }

    /// Decides whether to descend into the entry and, if so, pushes a new
    /// frame. Open failures become a pending error or are skipped per the
    /// options.
    fn maybe_descend(&mut self, entry: &fs::DirEntry, parent_depth: usize) {
        let child_depth = parent_depth + 1;
        if self
            .options
            .max_depth
            .is_some_and(|max| child_depth > max)
        {
            return;
        }

        let is_dir = match entry.file_type() {
            Ok(t) if t.is_dir() => true,
            Ok(t) if t.is_symlink() && self.options.follow_symlinks => {
                fs::metadata(entry.path()).map(|m| m.is_dir()).unwrap_or(false)
            }
            _ => false,
        };
        if !is_dir {
            return;
        }

        let path = entry.path();
        if !self.mark_visited(&path) {
            return;
        }
        match fs::read_dir(&path) {
            Ok(iter) => self.stack.push(Frame {
                iter,
                dir: path,
                depth: child_depth,
            }),
            Err(e)
                if e.kind() == std::io::ErrorKind::PermissionDenied
                    && self.options.skip_permission_denied => {}
            // Vanished between discovery and descent: skip, don't fail.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => self.pending_error = Some(Error::from_io("walk", &path, e)),
        }
    }
}

impl Iterator for Walk {
    type Item = Result<DirEntry>;

    fn next(&mut self) -> Option<Result<DirEntry>> {
        if let Some(err) = self.pending_error.take() {
            return Some(Err(err));
        }
        loop {
            let depth;
            let item = {
                let frame = self.stack.last_mut()?;
                depth = frame.depth;
                frame.iter.next()
            };
            match item {
                None => {
                    self.stack.pop();
                }
                Some(Err(e)) => {
                    let dir = self
                        .stack
                        .last()
                        .map(|f| f.dir.clone())
                        .unwrap_or_default();
                    return Some(Err(Error::from_io("walk", &dir, e)));
                }
                Some(Ok(std_entry)) => {
                    let entry = match DirEntry::from_std(&std_entry, depth) {
                        Ok(entry) => entry,
                        Err(err) => return Some(Err(err)),
                    };
                    self.maybe_descend(&std_entry, depth);
                    return Some(Ok(entry));
                }
            }
        }
    }
}

/// Begins a depth-first walk of the tree below `path`.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the root does not exist and
/// [`Error::PermissionDenied`] if it cannot be opened (the
/// `skip_permission_denied` option applies to subdirectories, not the
/// root).
///
/// # Examples
///
/// ```no_run
/// use fspath::{fs::walk, WalkOptions};
///
/// for entry in walk("/var/log", WalkOptions::new()).unwrap() {
///     let entry = entry.unwrap();
///     println!("{} {}", entry.depth(), entry.path());
/// }
/// ```
pub fn walk(path: impl AsRef<Path>, options: WalkOptions) -> Result<Walk> {
    let path = path.as_ref();
    let iter = fs::read_dir(path).map_err(|e| Error::from_io("walk", path, e))?;
    let mut walker = Walk {
        stack: vec![Frame {
            iter,
            dir: path.to_path_buf(),
            depth: 0,
        }],
        options,
        pending_error: None,
        #[cfg(unix)]
        visited: std::collections::HashSet::new(),
    };
    // The root belongs to the visited set, so a symlink pointing back at
    // it cannot re-enter the tree.
    walker.mark_visited(path);
    Ok(walker)
}
