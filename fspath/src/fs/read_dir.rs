//! Directory iteration.
//!
//! [`read_dir`] produces a lazy, single-pass iterator over the immediate
//! children of a directory. The iterator owns an OS directory handle,
//! released when iteration completes or the iterator is dropped - on every
//! exit path, including early abandonment.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::status::{FileStatus, FileType};
use crate::path::PurePath;

/// One member discovered while iterating a directory.
///
/// The entry pairs the child's path with type information captured at
/// discovery time, avoiding a second OS round-trip. The cached type is a
/// snapshot: the entry may have changed or vanished since. A cached type
/// of `None` means the status could not be captured (typically the entry
/// disappeared between discovery and the status query); use
/// [`metadata`](DirEntry::metadata) to re-query.
#[derive(Debug, Clone)]
pub struct DirEntry {
    path: PurePath,
    file_name: String,
    file_type: Option<FileType>,
    depth: usize,
}

impl DirEntry {
    pub(crate) fn from_std(entry: &fs::DirEntry, depth: usize) -> Result<Self> {
        let path = PurePath::from_std_path(&entry.path())?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        // A failed type query marks the status as unavailable instead of
        // failing the whole traversal.
        let file_type = entry.file_type().ok().map(FileType::from_std);
        Ok(DirEntry {
            path,
            file_name,
            file_type,
            depth,
        })
    }

    /// The full path of the entry.
    #[must_use]
    pub fn path(&self) -> &PurePath {
        &self.path
    }

    /// Consumes the entry, returning its path.
    #[must_use]
    pub fn into_path(self) -> PurePath {
        self.path
    }

    /// The entry's name within its parent directory.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The type captured at discovery time, or `None` if the status was
    /// unavailable. Does not follow symlinks.
    #[must_use]
    pub fn file_type(&self) -> Option<FileType> {
        self.file_type
    }

    /// Depth below the traversal root: `0` for immediate children.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Re-queries the entry's status from the filesystem (not following a
    /// final symlink).
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NotFound`] if the entry has since vanished.
    pub fn metadata(&self) -> Result<FileStatus> {
        crate::fs::status::symlink_status(&self.path)
    }
}

/// Iterator over the immediate children of a directory.
///
/// Created by [`read_dir`]. Entries arrive in OS-defined order - callers
/// must not assume sorting. The iterator is single-pass and
/// non-restartable; call [`read_dir`] again for a fresh pass.
///
/// If the directory is mutated concurrently, entries added or removed
/// mid-iteration may or may not be observed, but an entry already yielded
/// is never yielded again within the same pass, and mutation never turns
/// into a crash.
#[derive(Debug)]
pub struct ReadDir {
    inner: fs::ReadDir,
    dir: PathBuf,
}

impl Iterator for ReadDir {
    type Item = Result<DirEntry>;

    fn next(&mut self) -> Option<Result<DirEntry>> {
        match self.inner.next()? {
            Ok(entry) => Some(DirEntry::from_std(&entry, 0)),
            Err(e) => Some(Err(Error::from_io("read_dir", &self.dir, e))),
        }
    }
}

/// Begins iterating the immediate children of `path`.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the directory does not exist,
/// [`Error::PermissionDenied`] without read access, and an OS error if
/// `path` is not a directory.
///
/// # Examples
///
/// ```no_run
/// use fspath::fs::read_dir;
///
/// for entry in read_dir("/etc").unwrap() {
///     let entry = entry.unwrap();
///     println!("{}", entry.path());
/// }
/// ```
pub fn read_dir(path: impl AsRef<Path>) -> Result<ReadDir> {
    let path = path.as_ref();
    let inner = fs::read_dir(path).map_err(|e| Error::from_io("read_dir", path, e))?;
    Ok(ReadDir {
        inner,
        dir: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::tempdir;

    #[test]
    fn test_read_dir_yields_each_entry_once() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();

        let names: Vec<String> = read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string())
            .collect();
        let unique: HashSet<&String> = names.iter().collect();

        assert_eq!(names.len(), 2);
        assert_eq!(unique.len(), 2);
        assert!(names.contains(&"a.txt".to_string()));
        assert!(names.contains(&"b.txt".to_string()));
    }

    #[test]
    fn test_read_dir_missing_directory() {
        let dir = tempdir().unwrap();
        let err = read_dir(dir.path().join("missing")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.operation(), Some("read_dir"));
    }

    #[test]
    fn test_read_dir_on_file_fails() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain");
        fs::write(&file, "x").unwrap();

        assert!(read_dir(&file).is_err());
    }

    #[test]
    fn test_entry_carries_type_and_path() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("f"), "x").unwrap();
        fs::create_dir(dir.path().join("d")).unwrap();

        for entry in read_dir(dir.path()).unwrap() {
            let entry = entry.unwrap();
            match entry.file_name() {
                "f" => assert_eq!(entry.file_type(), Some(FileType::Regular)),
                "d" => assert_eq!(entry.file_type(), Some(FileType::Directory)),
                other => panic!("unexpected entry {other}"),
            }
            assert_eq!(entry.depth(), 0);
            assert!(entry.path().as_str().ends_with(entry.file_name()));
        }
    }

    #[test]
    fn test_removal_mid_iteration_does_not_crash_or_duplicate() {
        let dir = tempdir().unwrap();
        for i in 0..10 {
            fs::write(dir.path().join(format!("f{i}")), "x").unwrap();
        }

        let mut seen: Vec<String> = Vec::new();
        let mut iter = read_dir(dir.path()).unwrap();
        // Consume one entry, then delete everything, then keep iterating.
        if let Some(first) = iter.next() {
            seen.push(first.unwrap().file_name().to_string());
        }
        for i in 0..10 {
            let _ = fs::remove_file(dir.path().join(format!("f{i}")));
        }
        for entry in iter {
            // Surviving queue entries may appear or not; they must parse.
            if let Ok(entry) = entry {
                seen.push(entry.file_name().to_string());
            }
        }

        let unique: HashSet<&String> = seen.iter().collect();
        assert_eq!(unique.len(), seen.len(), "an entry was yielded twice");
    }

    #[test]
    fn test_entry_metadata_requery() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("f"), "abc").unwrap();

        let entry = read_dir(dir.path()).unwrap().next().unwrap().unwrap();
        let meta = entry.metadata().unwrap();
        assert_eq!(meta.len(), 3);

        fs::remove_file(dir.path().join("f")).unwrap();
        assert!(entry.metadata().unwrap_err().is_not_found());
    }
}
