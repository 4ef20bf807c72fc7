//! Error types for the fspath library.
//!
//! This module provides the error hierarchy for all filesystem-touching
//! operations, using `thiserror` for ergonomic error handling. Pure path
//! operations never fail and do not appear here.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that may fail with an fspath error.
///
/// # Examples
///
/// ```
/// use fspath::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the fspath library.
///
/// Every variant produced by an OS-touching operation carries the name of
/// the failed operation and the offending path(s), so callers can report
/// failures without keeping their own context.
#[derive(Debug, Error)]
pub enum Error {
    /// The path does not resolve to an existing filesystem entry.
    #[error("{op}: path not found: {}", path.display())]
    NotFound {
        /// The operation that failed.
        op: &'static str,
        /// The path that was not found.
        path: PathBuf,
    },

    /// The entry exists but is the wrong kind for the requested operation.
    #[error("{op}: {}: {reason}", path.display())]
    FileType {
        /// The operation that failed.
        op: &'static str,
        /// The path with the offending entry.
        path: PathBuf,
        /// What was expected and what was found.
        reason: String,
    },

    /// Permission was denied by the operating system.
    #[error("{op}: permission denied: {}", path.display())]
    PermissionDenied {
        /// The operation that failed.
        op: &'static str,
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// The target already exists and the operation does not overwrite.
    #[error("{op}: already exists: {}", path.display())]
    AlreadyExists {
        /// The operation that failed.
        op: &'static str,
        /// The pre-existing path.
        path: PathBuf,
    },

    /// A malformed path or a conflicting option combination was supplied.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected.
        reason: String,
    },

    /// An operation required both paths to live on the same filesystem.
    #[error("{op}: cannot cross filesystems: {} -> {}", from.display(), to.display())]
    CrossDevice {
        /// The operation that failed.
        op: &'static str,
        /// The source path.
        from: PathBuf,
        /// The destination path.
        to: PathBuf,
    },

    /// A symbolic link chain returned to a path it already visited.
    #[error("{op}: symlink loop detected: {}", path.display())]
    SymlinkLoop {
        /// The operation that failed.
        op: &'static str,
        /// The path where the loop was detected.
        path: PathBuf,
    },

    /// Any other operating system error, with the raw cause attached.
    #[error("{op}: I/O error on {}: {source}", path.display())]
    Os {
        /// The operation that failed.
        op: &'static str,
        /// The path involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Classify a raw [`io::Error`] from a single-path operation.
    ///
    /// Well-known error kinds (not found, permission denied, already
    /// exists, and symlink loops on Unix) map to their dedicated variants;
    /// everything else lands in [`Error::Os`].
    pub(crate) fn from_io(op: &'static str, path: &Path, source: io::Error) -> Self {
        #[cfg(unix)]
        {
            if source.raw_os_error() == Some(libc::ELOOP) {
                return Self::SymlinkLoop {
                    op,
                    path: path.to_path_buf(),
                };
            }
        }
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                op,
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                op,
                path: path.to_path_buf(),
            },
            io::ErrorKind::AlreadyExists => Self::AlreadyExists {
                op,
                path: path.to_path_buf(),
            },
            _ => Self::Os {
                op,
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Classify a raw [`io::Error`] from a two-path operation.
    ///
    /// Cross-device failures get their own variant carrying both paths. A
    /// not-found error is attributed to the source and an already-exists
    /// error to the destination, which is where each can originate.
    pub(crate) fn from_io2(op: &'static str, from: &Path, to: &Path, source: io::Error) -> Self {
        #[cfg(unix)]
        {
            if source.raw_os_error() == Some(libc::EXDEV) {
                return Self::CrossDevice {
                    op,
                    from: from.to_path_buf(),
                    to: to.to_path_buf(),
                };
            }
        }
        match source.kind() {
            io::ErrorKind::AlreadyExists => Self::AlreadyExists {
                op,
                path: to.to_path_buf(),
            },
            _ => Self::from_io(op, from, source),
        }
    }

    /// The name of the operation that failed, if the variant records one.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NotFound { op: "file_size", path: PathBuf::from("/missing") };
    /// assert_eq!(err.operation(), Some("file_size"));
    /// ```
    #[must_use]
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { op, .. }
            | Self::FileType { op, .. }
            | Self::PermissionDenied { op, .. }
            | Self::AlreadyExists { op, .. }
            | Self::CrossDevice { op, .. }
            | Self::SymlinkLoop { op, .. }
            | Self::Os { op, .. } => Some(op),
            Self::InvalidArgument { .. } => None,
        }
    }

    /// The first path involved in the failure, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path, .. }
            | Self::FileType { path, .. }
            | Self::PermissionDenied { path, .. }
            | Self::AlreadyExists { path, .. }
            | Self::SymlinkLoop { path, .. }
            | Self::Os { path, .. } => Some(path),
            Self::CrossDevice { from, .. } => Some(from),
            Self::InvalidArgument { .. } => None,
        }
    }

    /// The second path involved in the failure, if the operation had one.
    #[must_use]
    pub fn second_path(&self) -> Option<&Path> {
        match self {
            Self::CrossDevice { to, .. } => Some(to),
            _ => None,
        }
    }

    /// The OS-level error code associated with this error.
    ///
    /// For [`Error::Os`] this is the raw code reported by the operating
    /// system. Classified variants report the conventional POSIX code for
    /// their class; [`Error::FileType`] has no unambiguous code and
    /// returns `None`.
    #[must_use]
    pub fn os_error_code(&self) -> Option<i32> {
        match self {
            Self::Os { source, .. } => source.raw_os_error(),
            Self::NotFound { .. } => Some(2),
            Self::PermissionDenied { .. } => Some(13),
            Self::AlreadyExists { .. } => Some(17),
            Self::CrossDevice { .. } => Some(18),
            Self::InvalidArgument { .. } => Some(22),
            Self::SymlinkLoop { .. } => Some(40),
            Self::FileType { .. } => None,
        }
    }

    /// Check if this error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NotFound { op: "canonical", path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { op: "read_dir", path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}
