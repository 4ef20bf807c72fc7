//! Filesystem status queries.
//!
//! Every function here consults the operating system and can fail with a
//! structured [`Error`]. Predicates come in a tolerant form that folds OS
//! errors into `false` (the common "does this thing exist right now"
//! question) and, where the distinction matters, a strict `try_` form that
//! reports them. All answers are snapshots: the filesystem is shared and
//! mutable, and a check-then-act sequence is inherently racy.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The kind of entry a path resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    /// A regular file.
    Regular,
    /// A directory.
    Directory,
    /// A symbolic link (only reported by non-following queries).
    Symlink,
    /// A block device.
    Block,
    /// A character device.
    Character,
    /// A FIFO / named pipe.
    Fifo,
    /// A socket.
    Socket,
    /// Something the platform reports but this library cannot classify.
    Unknown,
}

impl FileType {
    pub(crate) fn from_std(t: fs::FileType) -> Self {
        if t.is_dir() {
            return Self::Directory;
        }
        if t.is_file() {
            return Self::Regular;
        }
        if t.is_symlink() {
            return Self::Symlink;
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            if t.is_block_device() {
                return Self::Block;
            }
            if t.is_char_device() {
                return Self::Character;
            }
            if t.is_fifo() {
                return Self::Fifo;
            }
            if t.is_socket() {
                return Self::Socket;
            }
        }
        Self::Unknown
    }

    /// Whether this is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory)
    }

    /// Whether this is a regular file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self, Self::Regular)
    }

    /// Whether this is a symbolic link.
    #[must_use]
    pub fn is_symlink(&self) -> bool {
        matches!(self, Self::Symlink)
    }

    /// Whether this is neither a regular file, a directory, nor a symlink.
    #[must_use]
    pub fn is_other(&self) -> bool {
        !matches!(self, Self::Regular | Self::Directory | Self::Symlink)
    }
}

/// Status of a filesystem entry, captured at query time.
///
/// # Examples
///
/// ```no_run
/// use fspath::fs::status;
///
/// let st = status("/etc/hosts").unwrap();
/// assert!(st.file_type().is_file());
/// println!("{} bytes", st.len());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileStatus {
    file_type: FileType,
    len: u64,
    modified: Option<SystemTime>,
}

impl FileStatus {
    fn from_metadata(meta: &fs::Metadata) -> Self {
        FileStatus {
            file_type: FileType::from_std(meta.file_type()),
            len: meta.len(),
            modified: meta.modified().ok(),
        }
    }

    /// The kind of entry.
    #[must_use]
    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    /// Size in bytes, as reported by the OS.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Whether the entry is zero-sized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Last modification time, if the platform reports one.
    #[must_use]
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }
}

/// Queries the status of `path`, following symlinks.
///
/// # Errors
///
/// Fails with [`Error::NotFound`] if the path does not resolve, or any
/// other classified OS error.
pub fn status(path: impl AsRef<Path>) -> Result<FileStatus> {
    let path = path.as_ref();
    let meta = fs::metadata(path).map_err(|e| Error::from_io("status", path, e))?;
    Ok(FileStatus::from_metadata(&meta))
}

/// Queries the status of `path` itself, without following a final symlink.
///
/// # Errors
///
/// Fails with [`Error::NotFound`] if the path does not exist, or any other
/// classified OS error.
pub fn symlink_status(path: impl AsRef<Path>) -> Result<FileStatus> {
    let path = path.as_ref();
    let meta = fs::symlink_metadata(path).map_err(|e| Error::from_io("symlink_status", path, e))?;
    Ok(FileStatus::from_metadata(&meta))
}

/// Whether `path` resolves to an existing entry, following symlinks.
///
/// This is the tolerant form: any OS error (including permission denied on
/// a parent directory) reads as `false`. Use [`try_exists`] to distinguish
/// "definitely absent" from "could not tell".
///
/// # Examples
///
/// ```
/// use fspath::fs::exists;
///
/// assert!(!exists("/definitely/not/here"));
/// ```
#[must_use]
pub fn exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path.as_ref()).is_ok()
}

/// Whether `path` resolves to an existing entry, reporting genuine errors.
///
/// # Errors
///
/// "Not found" is a normal `Ok(false)` result; anything else (permission
/// denied on a parent, I/O failure) is an error.
///
/// # Examples
///
/// ```
/// use fspath::fs::try_exists;
///
/// assert_eq!(try_exists("/definitely/not/here").unwrap(), false);
/// ```
pub fn try_exists(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::from_io("try_exists", path, e)),
    }
}

/// Whether `path` resolves to a directory, following symlinks.
#[must_use]
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    status(path).map(|s| s.file_type().is_dir()).unwrap_or(false)
}

/// Whether `path` resolves to a regular file, following symlinks.
#[must_use]
pub fn is_file(path: impl AsRef<Path>) -> bool {
    status(path).map(|s| s.file_type().is_file()).unwrap_or(false)
}

/// Whether `path` itself is a symbolic link.
#[must_use]
pub fn is_symlink(path: impl AsRef<Path>) -> bool {
    symlink_status(path)
        .map(|s| s.file_type().is_symlink())
        .unwrap_or(false)
}

/// Whether `path` resolves to something that is neither a regular file nor
/// a directory (device, FIFO, socket, ...).
#[must_use]
pub fn is_other(path: impl AsRef<Path>) -> bool {
    status(path).map(|s| s.file_type().is_other()).unwrap_or(false)
}

/// Whether `path` is an empty file or an empty directory.
///
/// # Errors
///
/// Fails with [`Error::NotFound`] if the path does not exist.
pub fn is_empty(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    let st = status(path)?;
    if st.file_type().is_dir() {
        let mut entries = fs::read_dir(path).map_err(|e| Error::from_io("is_empty", path, e))?;
        Ok(entries.next().is_none())
    } else {
        Ok(st.is_empty())
    }
}

/// The size of the regular file at `path`, in bytes.
///
/// # Errors
///
/// Fails with [`Error::NotFound`] if the path does not resolve, and with
/// [`Error::FileType`] if it resolves to a directory.
///
/// # Examples
///
/// ```
/// use fspath::fs::file_size;
///
/// assert!(file_size("/nonexistent").unwrap_err().is_not_found());
/// ```
pub fn file_size(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    let meta = fs::metadata(path).map_err(|e| Error::from_io("file_size", path, e))?;
    if meta.is_dir() {
        return Err(Error::FileType {
            op: "file_size",
            path: path.to_path_buf(),
            reason: "is a directory".to_string(),
        });
    }
    Ok(meta.len())
}

/// The last modification time of `path`, following symlinks.
///
/// Resolution is platform-dependent.
///
/// # Errors
///
/// Fails with [`Error::NotFound`] if the path does not resolve, or if the
/// platform does not report modification times.
pub fn last_write_time(path: impl AsRef<Path>) -> Result<SystemTime> {
    let path = path.as_ref();
    let meta = fs::metadata(path).map_err(|e| Error::from_io("last_write_time", path, e))?;
    meta.modified()
        .map_err(|e| Error::from_io("last_write_time", path, e))
}

/// Sets the last modification time of `path`.
///
/// Requires permission to write the entry's timestamps.
///
/// # Errors
///
/// Fails with [`Error::NotFound`] if the path does not resolve, or
/// [`Error::PermissionDenied`] without write access.
pub fn set_last_write_time(path: impl AsRef<Path>, time: SystemTime) -> Result<()> {
    let path = path.as_ref();
    let file = fs::File::open(path).map_err(|e| Error::from_io("set_last_write_time", path, e))?;
    file.set_modified(time)
        .map_err(|e| Error::from_io("set_last_write_time", path, e))
}

/// Whether two paths resolve, after following symlinks, to the same
/// underlying filesystem entry.
///
/// # Errors
///
/// Fails with [`Error::NotFound`] if either path does not resolve.
///
/// # Examples
///
/// ```no_run
/// use fspath::fs::equivalent;
///
/// assert!(equivalent("/tmp", "/tmp/.").unwrap());
/// ```
pub fn equivalent(a: impl AsRef<Path>, b: impl AsRef<Path>) -> Result<bool> {
    let (a, b) = (a.as_ref(), b.as_ref());
    let ma = fs::metadata(a).map_err(|e| Error::from_io("equivalent", a, e))?;
    let mb = fs::metadata(b).map_err(|e| Error::from_io("equivalent", b, e))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        Ok(ma.dev() == mb.dev() && ma.ino() == mb.ino())
    }
    #[cfg(not(unix))]
    {
        // No stable file identity available: fall back to comparing fully
        // resolved paths.
        let _ = (ma, mb);
        let ca = fs::canonicalize(a).map_err(|e| Error::from_io("equivalent", a, e))?;
        let cb = fs::canonicalize(b).map_err(|e| Error::from_io("equivalent", b, e))?;
        Ok(ca == cb)
    }
}

/// Capacity information for the filesystem containing a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceInfo {
    /// Total size of the filesystem, in bytes.
    pub capacity: u64,
    /// Free space, in bytes.
    pub free: u64,
    /// Space available to the calling process, in bytes (free minus
    /// reserved blocks).
    pub available: u64,
}

/// Queries capacity/free/available byte counts for the filesystem
/// containing `path`.
///
/// # Errors
///
/// Fails with [`Error::NotFound`] if the path does not resolve, and with
/// an [`Error::Os`] carrying `ErrorKind::Unsupported` on platforms without
/// a space query.
#[cfg(unix)]
#[allow(unsafe_code)]
pub fn space(path: impl AsRef<Path>) -> Result<SpaceInfo> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let path = path.as_ref();
    let c_path =
        CString::new(path.as_os_str().as_bytes()).map_err(|_| Error::InvalidArgument {
            reason: format!("path contains an interior NUL byte: {}", path.display()),
        })?;
    let mut vfs: libc::statvfs = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut vfs) };
    if rc != 0 {
        return Err(Error::from_io("space", path, std::io::Error::last_os_error()));
    }
    let frsize = if vfs.f_frsize as u64 > 0 {
        vfs.f_frsize as u64
    } else {
        vfs.f_bsize as u64
    };
    Ok(SpaceInfo {
        capacity: (vfs.f_blocks as u64).saturating_mul(frsize),
        free: (vfs.f_bfree as u64).saturating_mul(frsize),
        available: (vfs.f_bavail as u64).saturating_mul(frsize),
    })
}

/// Queries capacity/free/available byte counts for the filesystem
/// containing `path`.
///
/// # Errors
///
/// Always fails on this platform with an [`Error::Os`] carrying
/// `ErrorKind::Unsupported`.
#[cfg(not(unix))]
pub fn space(path: impl AsRef<Path>) -> Result<SpaceInfo> {
    Err(Error::from_io(
        "space",
        path.as_ref(),
        std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "space information is not available on this platform",
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_exists_and_try_exists() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("present.txt");
        fs::write(&file, "x").unwrap();

        assert!(exists(&file));
        assert!(try_exists(&file).unwrap());

        let missing = dir.path().join("absent.txt");
        assert!(!exists(&missing));
        assert!(!try_exists(&missing).unwrap());
    }

    #[test]
    fn test_type_predicates() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, "data").unwrap();

        assert!(is_dir(dir.path()));
        assert!(!is_dir(&file));
        assert!(is_file(&file));
        assert!(!is_file(dir.path()));
        assert!(!is_other(&file));
        assert!(!is_symlink(&file));
    }

    #[cfg(unix)]
    #[test]
    fn test_is_symlink_does_not_follow() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let target = dir.path().join("target");
        let link = dir.path().join("link");
        fs::write(&target, "x").unwrap();
        symlink(&target, &link).unwrap();

        assert!(is_symlink(&link));
        // Following predicates see the target.
        assert!(is_file(&link));
        assert!(!is_symlink(&target));
    }

    #[cfg(unix)]
    #[test]
    fn test_exists_dangling_symlink_is_false() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let link = dir.path().join("dangling");
        symlink(dir.path().join("gone"), &link).unwrap();

        assert!(!exists(&link));
        assert!(is_symlink(&link));
    }

    #[test]
    fn test_file_size() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("sized");
        let mut f = fs::File::create(&file).unwrap();
        f.write_all(b"hello").unwrap();
        drop(f);

        assert_eq!(file_size(&file).unwrap(), 5);
    }

    #[test]
    fn test_file_size_not_found() {
        let err = file_size("/nonexistent/xyz").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.operation(), Some("file_size"));
    }

    #[test]
    fn test_file_size_on_directory_is_file_type_error() {
        let dir = tempdir().unwrap();
        let err = file_size(dir.path()).unwrap_err();
        assert!(matches!(err, Error::FileType { .. }));
    }

    #[test]
    fn test_is_empty() {
        let dir = tempdir().unwrap();
        assert!(is_empty(dir.path()).unwrap());

        let file = dir.path().join("empty");
        fs::write(&file, "").unwrap();
        assert!(is_empty(&file).unwrap());

        fs::write(&file, "content").unwrap();
        assert!(!is_empty(&file).unwrap());
        assert!(!is_empty(dir.path()).unwrap());

        assert!(is_empty(dir.path().join("missing")).unwrap_err().is_not_found());
    }

    #[test]
    fn test_status_snapshot() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, "abc").unwrap();

        let st = status(&file).unwrap();
        assert_eq!(st.file_type(), FileType::Regular);
        assert_eq!(st.len(), 3);
        assert!(st.modified().is_some());
    }

    #[test]
    fn test_last_write_time_roundtrip() {
        use std::time::Duration;

        let dir = tempdir().unwrap();
        let file = dir.path().join("stamped");
        fs::write(&file, "x").unwrap();

        let past = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000_000);
        set_last_write_time(&file, past).unwrap();
        let read_back = last_write_time(&file).unwrap();
        // Platforms differ in timestamp resolution; stay within a second.
        let delta = read_back
            .duration_since(past)
            .unwrap_or_else(|e| e.duration());
        assert!(delta < Duration::from_secs(1), "delta was {delta:?}");
    }

    #[test]
    fn test_equivalent_same_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, "x").unwrap();

        assert!(equivalent(&file, &file).unwrap());
        let via_dot = dir.path().join(".").join("f");
        assert!(equivalent(&file, &via_dot).unwrap());
    }

    #[test]
    fn test_equivalent_distinct_files() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::write(&a, "x").unwrap();
        fs::write(&b, "x").unwrap();

        assert!(!equivalent(&a, &b).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_equivalent_through_symlink() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let target = dir.path().join("t");
        let link = dir.path().join("l");
        fs::write(&target, "x").unwrap();
        symlink(&target, &link).unwrap();

        assert!(equivalent(&target, &link).unwrap());
    }

    #[test]
    fn test_equivalent_missing_is_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, "x").unwrap();

        let err = equivalent(&file, dir.path().join("missing")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[cfg(unix)]
    #[test]
    fn test_space_reports_plausible_numbers() {
        let dir = tempdir().unwrap();
        let info = space(dir.path()).unwrap();
        assert!(info.capacity > 0);
        assert!(info.free <= info.capacity);
        assert!(info.available <= info.capacity);
    }

    #[test]
    fn test_space_missing_path() {
        assert!(space("/nonexistent/xyz").is_err());
    }
}
