//! Path resolution against the live filesystem.
//!
//! Unlike [`lexically_normal`](crate::PurePath::lexically_normal), the
//! functions here consult the OS: symlinks are followed and `.`/`..` are
//! resolved against what actually exists, with support for:
//! - Full canonicalization of existing paths
//! - Weak canonicalization tolerating a non-existent tail
//! - Symlink chain resolution with loop detection

use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};
use crate::path::PurePath;

/// Resolves a path against the live filesystem.
///
/// All symlinks are followed and all `.`/`..` components resolved; the
/// result is absolute. The path must exist. On some platforms the OS may
/// return an extended-length native form; the result is whatever the OS
/// reports, converted to a [`PurePath`].
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the path does not exist,
/// [`Error::PermissionDenied`] without access, [`Error::SymlinkLoop`] on a
/// cyclic symlink chain, or [`Error::InvalidArgument`] if the resolved
/// native path is not valid UTF-8.
///
/// # Examples
///
/// ```no_run
/// use fspath::fs::canonical;
///
/// let resolved = canonical("/tmp").unwrap();
/// assert!(resolved.is_absolute());
/// ```
pub fn canonical(path: impl AsRef<Path>) -> Result<PurePath> {
    let path = path.as_ref();
    let resolved = fs::canonicalize(path).map_err(|e| Error::from_io("canonical", path, e))?;
    PurePath::from_std_path(&resolved)
}

/// Resolves as much of a path as exists, tolerating a missing tail.
///
/// The longest existing ancestor is canonicalized; the non-existent
/// components are appended lexically. A path that exists entirely behaves
/// exactly like [`canonical`]; a path with no existing ancestor resolves
/// to its lexically normal form.
///
/// # Errors
///
/// Returns any error of [`canonical`] other than `NotFound`, which this
/// function absorbs by design.
///
/// # Examples
///
/// ```no_run
/// use fspath::fs::weakly_canonical;
///
/// // /tmp exists, the tail does not:
/// let p = weakly_canonical("/tmp/not/yet/created").unwrap();
/// assert!(p.as_str().ends_with("not/yet/created"));
/// ```
pub fn weakly_canonical(path: impl AsRef<Path>) -> Result<PurePath> {
    let original = path.as_ref();
    // Resolve dot components lexically up front so the walk below only
    // ever strips plain names. The missing tail cannot contain symlinks,
    // so the lexical answer is the only possible one there.
    let lexical = PurePath::from_std_path(original)?.lexically_normal();

    match fs::canonicalize(lexical.as_std_path()) {
        Ok(resolved) => return PurePath::from_std_path(&resolved),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(Error::from_io("weakly_canonical", original, e)),
    }

    // Walk up the path to find the existing portion.
    let mut current = lexical.as_std_path().to_path_buf();
    let mut missing: Vec<OsString> = Vec::new();

    loop {
        match fs::canonicalize(&current) {
            Ok(resolved) => {
                let mut out = PurePath::from_std_path(&resolved)?;
                for name in missing.iter().rev() {
                    match name.to_str() {
                        Some(name) => out.push(name),
                        None => {
                            return Err(Error::InvalidArgument {
                                reason: format!(
                                    "path is not valid UTF-8: {}",
                                    original.display()
                                ),
                            })
                        }
                    }
                }
                return Ok(out);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => match current.file_name() {
                Some(name) => {
                    missing.push(name.to_os_string());
                    current.pop();
                }
                None => {
                    // Nothing along the path exists.
                    return Ok(lexical);
                }
            },
            Err(e) => return Err(Error::from_io("weakly_canonical", &current, e)),
        }
    }
}

/// Makes a path absolute by joining it onto the current directory.
///
/// Purely textual apart from the current-directory lookup: no symlinks are
/// resolved and the path need not exist. The result is lexically
/// normalized. An empty path resolves to the current directory.
///
/// # Errors
///
/// Fails only if the current directory cannot be determined or a native
/// string is not valid UTF-8.
///
/// # Examples
///
/// ```
/// use fspath::fs::absolute;
///
/// let p = absolute("some/relative/file").unwrap();
/// assert!(p.is_absolute());
/// ```
pub fn absolute(path: impl AsRef<Path>) -> Result<PurePath> {
    let path = path.as_ref();
    let pure = PurePath::from_std_path(path)?;
    if pure.is_absolute() {
        return Ok(pure.lexically_normal());
    }
    let cwd = std::env::current_dir().map_err(|e| Error::from_io("absolute", path, e))?;
    let cwd = PurePath::from_std_path(&cwd)?;
    if pure.is_empty() {
        return Ok(cwd.lexically_normal());
    }
    Ok(cwd.join(pure.as_str()).lexically_normal())
}

/// Expands a leading tilde to the home directory.
///
/// Handles `~` and `~/path`; the `~user` form is not supported.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the path is not valid UTF-8, the
/// home directory cannot be determined, or the path uses `~user` syntax.
///
/// # Examples
///
/// ```
/// use fspath::fs::expand_tilde;
///
/// // Leaves paths without a tilde unchanged
/// let p = expand_tilde("/absolute").unwrap();
/// assert_eq!(p.as_str(), "/absolute");
/// ```
pub fn expand_tilde(path: impl AsRef<Path>) -> Result<PurePath> {
    let pure = PurePath::from_std_path(path.as_ref())?;
    let s = pure.as_str();
    if !s.starts_with('~') {
        return Ok(pure);
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidArgument {
        reason: format!("cannot determine home directory to expand {s}"),
    })?;
    let home = PurePath::from_std_path(&home)?;

    if s == "~" {
        Ok(home)
    } else if s.starts_with("~/") || s.starts_with("~\\") {
        Ok(home.join(&s[2..]))
    } else {
        // ~user syntax not supported
        Err(Error::InvalidArgument {
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Follows a chain of symlinks starting at `path`, with loop detection and
/// a bounded depth.
///
/// Stops at the first entry that is not a symlink (or does not exist) and
/// returns it without further resolution; use [`canonical`] to also
/// resolve symlinks in parent components.
///
/// # Errors
///
/// Returns [`Error::SymlinkLoop`] if the chain revisits a path, and
/// [`Error::InvalidArgument`] if it exceeds `max_depth` links.
///
/// # Examples
///
/// ```no_run
/// use fspath::fs::resolve_symlinks;
///
/// let target = resolve_symlinks("/usr/bin/editor", 40).unwrap();
/// ```
pub fn resolve_symlinks(path: impl AsRef<Path>, max_depth: usize) -> Result<PurePath> {
    let mut visited = HashSet::new();
    let mut current = path.as_ref().to_path_buf();
    let mut depth = 0;

    loop {
        // Check for loops
        if !visited.insert(current.clone()) {
            return Err(Error::SymlinkLoop {
                op: "resolve_symlinks",
                path: current,
            });
        }

        // Check depth
        if depth >= max_depth {
            return Err(Error::InvalidArgument {
                reason: format!("too many levels of symbolic links (max {max_depth})"),
            });
        }

        match fs::read_link(&current) {
            Ok(target) => {
                current = if target.is_absolute() {
                    target
                } else {
                    // Relative symlink - resolve relative to parent
                    match current.parent() {
                        Some(parent) => parent.join(target),
                        None => {
                            return Err(Error::InvalidArgument {
                                reason: format!(
                                    "symlink has no parent directory: {}",
                                    current.display()
                                ),
                            })
                        }
                    }
                };
                depth += 1;
            }
            Err(e) if e.kind() == ErrorKind::InvalidInput => {
                // Not a symlink - the chain ends here.
                return PurePath::from_std_path(&current);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // Dangling link target - return it as-is.
                return PurePath::from_std_path(&current);
            }
            Err(e) => return Err(Error::from_io("resolve_symlinks", &current, e)),
        }
    }
}
