//! The path value type.
//!
//! [`PurePath`] represents a filesystem path as pure data: a UTF-8 string
//! plus the lexical structure derived from it on demand. No operation in
//! this module touches the operating system, and none can fail; edge cases
//! resolve to well-defined empty results.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::component::{
    cmp_paths, hash_path, is_separator, root_name_len, split_root, Component, Components,
};
use crate::path::{normalize, relative};

/// An immutable-by-convention filesystem path value.
///
/// A `PurePath` stores the raw textual form of a path; decomposition into
/// components is computed lazily. Derived operations return new values, and
/// the handful of mutating operations (`push`, `set_extension`, ...) follow
/// the `std::path::PathBuf` convention of having a non-mutating `join`/
/// `with_*` counterpart.
///
/// Two paths compare equal iff their component sequences are equal, so
/// redundant separators are ignored: `a//b` equals `a/b`. A trailing
/// separator denotes an empty final filename and is significant: `a/b/`
/// does not equal `a/b`.
///
/// # Examples
///
/// ```
/// use fspath::PurePath;
///
/// let path = PurePath::from("/usr/local/lib");
/// assert!(path.is_absolute());
/// assert_eq!(path.file_name(), Some("lib"));
/// assert_eq!(path.parent(), Some(PurePath::from("/usr/local")));
///
/// let archive = PurePath::from("a.tar.gz");
/// assert_eq!(archive.file_stem(), Some("a.tar"));
/// assert_eq!(archive.extension(), Some(".gz"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PurePath {
    inner: String,
}

impl PurePath {
    /// Creates an empty path.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::PurePath;
    ///
    /// assert!(PurePath::new().is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts a native [`std::path::Path`] into a `PurePath`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the native string is not valid
    /// UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::PurePath;
    /// use std::path::Path;
    ///
    /// let path = PurePath::from_std_path(Path::new("/tmp/file")).unwrap();
    /// assert_eq!(path.as_str(), "/tmp/file");
    /// ```
    pub fn from_std_path(path: &Path) -> Result<Self> {
        match path.to_str() {
            Some(s) => Ok(Self::from(s)),
            None => Err(Error::InvalidArgument {
                reason: format!("path is not valid UTF-8: {}", path.display()),
            }),
        }
    }

    /// The raw textual form, exactly as stored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Consumes the path, returning the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.inner
    }

    /// Borrows the path as a native [`std::path::Path`] for OS calls.
    #[must_use]
    pub fn as_std_path(&self) -> &Path {
        Path::new(&self.inner)
    }

    /// The portable generic form, using forward slashes throughout.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::PurePath;
    ///
    /// assert_eq!(PurePath::from("a\\b").generic_string(), "a/b");
    /// assert_eq!(PurePath::from("a/b").generic_string(), "a/b");
    /// ```
    #[must_use]
    pub fn generic_string(&self) -> String {
        self.inner
            .chars()
            .map(|c| if is_separator(c) { '/' } else { c })
            .collect()
    }

    /// The native form, with separators rewritten to the platform's
    /// preferred separator.
    #[must_use]
    pub fn native_string(&self) -> String {
        self.inner
            .chars()
            .map(|c| {
                if is_separator(c) {
                    std::path::MAIN_SEPARATOR
                } else {
                    c
                }
            })
            .collect()
    }

    /// Whether the path is the empty path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates the lexical components of the path.
    ///
    /// The iterator is lazy, finite, and restartable: calling this method
    /// again starts a fresh pass.
    #[must_use]
    pub fn components(&self) -> Components<'_> {
        Components::new(&self.inner)
    }

    /// Iterates the components as single-component paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::PurePath;
    ///
    /// let parts: Vec<PurePath> = PurePath::from("/a/b").iter().collect();
    /// assert_eq!(parts, vec!["/".into(), "a".into(), "b".into()]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = PurePath> + '_ {
        self.components().map(|c| PurePath::from(c.as_str()))
    }

    /// The number of lexical components.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::PurePath;
    ///
    /// assert_eq!(PurePath::from("/a/b").depth(), 3);
    /// assert_eq!(PurePath::from("").depth(), 0);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        self.components().count()
    }

    /// The root name, if the path has one (`C:` or `//server`).
    #[must_use]
    pub fn root_name(&self) -> Option<&str> {
        let n = root_name_len(&self.inner);
        if n > 0 {
            Some(&self.inner[..n])
        } else {
            None
        }
    }

    /// The root directory, if the path has one.
    ///
    /// Always rendered as `/` regardless of how many separators the stored
    /// text used.
    #[must_use]
    pub fn root_directory(&self) -> Option<&'static str> {
        if self.has_root_directory() {
            Some("/")
        } else {
            None
        }
    }

    /// The root name plus root directory, as a path.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::PurePath;
    ///
    /// assert_eq!(PurePath::from("/a/b").root_path(), PurePath::from("/"));
    /// assert_eq!(PurePath::from("C:/a").root_path(), PurePath::from("C:/"));
    /// assert!(PurePath::from("a/b").root_path().is_empty());
    /// ```
    #[must_use]
    pub fn root_path(&self) -> PurePath {
        let (name, dirs, _) = split_root(&self.inner);
        PurePath::from(&self.inner[..name.len() + dirs.len()])
    }

    /// The path relative to its root, i.e. everything after the root path.
    #[must_use]
    pub fn relative_part(&self) -> PurePath {
        let (_, _, rest) = split_root(&self.inner);
        PurePath::from(rest)
    }

    /// The path without its final component.
    ///
    /// Returns `None` for the empty path and for root-only paths. The
    /// parent of a single relative name is the empty path.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::PurePath;
    ///
    /// assert_eq!(PurePath::from("/a/b").parent(), Some(PurePath::from("/a")));
    /// assert_eq!(PurePath::from("/a").parent(), Some(PurePath::from("/")));
    /// assert_eq!(PurePath::from("a").parent(), Some(PurePath::from("")));
    /// assert_eq!(PurePath::from("/").parent(), None);
    /// assert_eq!(PurePath::from("").parent(), None);
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<PurePath> {
        if self.inner.is_empty() {
            return None;
        }
        let (name, dirs, rest) = split_root(&self.inner);
        let root_len = name.len() + dirs.len();
        if rest.is_empty() {
            return None;
        }
        let trimmed = rest.trim_end_matches(is_separator);
        if trimmed.len() < rest.len() {
            // Trailing separator: the final component is the empty
            // filename marker, so the parent is the path without it.
            return Some(PurePath::from(&self.inner[..root_len + trimmed.len()]));
        }
        let name_start = rest.rfind(is_separator).map_or(0, |i| i + 1);
        let without_name = rest[..name_start].trim_end_matches(is_separator);
        Some(PurePath::from(&self.inner[..root_len + without_name.len()]))
    }

    /// Iterates the path and its successive parents, ending with the root
    /// path or the empty path.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::PurePath;
    ///
    /// let chain: Vec<PurePath> = PurePath::from("/a/b").ancestors().collect();
    /// assert_eq!(chain, vec!["/a/b".into(), "/a".into(), "/".into()]);
    /// ```
    #[must_use]
    pub fn ancestors(&self) -> Ancestors {
        Ancestors {
            next: Some(self.clone()),
        }
    }

    /// The final component of the path, if it names an entry.
    ///
    /// Root-only paths and paths with a trailing separator have no
    /// filename. `.` and `..` count as filenames, matching the lexical
    /// grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::PurePath;
    ///
    /// assert_eq!(PurePath::from("/a/b.txt").file_name(), Some("b.txt"));
    /// assert_eq!(PurePath::from("/a/b/").file_name(), None);
    /// assert_eq!(PurePath::from("/").file_name(), None);
    /// assert_eq!(PurePath::from("a/..").file_name(), Some(".."));
    /// ```
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        let (_, _, rest) = split_root(&self.inner);
        if rest.is_empty() || rest.ends_with(is_separator) {
            return None;
        }
        let start = rest.rfind(is_separator).map_or(0, |i| i + 1);
        Some(&rest[start..])
    }

    /// The filename without its extension.
    ///
    /// A filename whose only dot is the leading character keeps the dot in
    /// the stem: `.bashrc` is all stem, no extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::PurePath;
    ///
    /// assert_eq!(PurePath::from("a.tar.gz").file_stem(), Some("a.tar"));
    /// assert_eq!(PurePath::from(".bashrc").file_stem(), Some(".bashrc"));
    /// assert_eq!(PurePath::from("/").file_stem(), None);
    /// ```
    #[must_use]
    pub fn file_stem(&self) -> Option<&str> {
        self.file_name().map(|name| split_file_name(name).0)
    }

    /// The extension of the filename, including the leading dot.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::PurePath;
    ///
    /// assert_eq!(PurePath::from("a.tar.gz").extension(), Some(".gz"));
    /// assert_eq!(PurePath::from(".bashrc").extension(), None);
    /// assert_eq!(PurePath::from("a.").extension(), Some("."));
    /// assert_eq!(PurePath::from("Makefile").extension(), None);
    /// ```
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| split_file_name(name).1)
    }

    /// Whether the path has a root name.
    #[must_use]
    pub fn has_root_name(&self) -> bool {
        root_name_len(&self.inner) > 0
    }

    /// Whether the path has a root directory.
    #[must_use]
    pub fn has_root_directory(&self) -> bool {
        let (_, dirs, _) = split_root(&self.inner);
        !dirs.is_empty()
    }

    /// Whether the path has a filename.
    #[must_use]
    pub fn has_file_name(&self) -> bool {
        self.file_name().is_some()
    }

    /// Whether the path's filename has an extension.
    #[must_use]
    pub fn has_extension(&self) -> bool {
        self.extension().is_some()
    }

    /// Whether the path is absolute.
    ///
    /// A path is absolute iff it has a root directory; a drive-relative
    /// path such as `C:foo` is relative.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::PurePath;
    ///
    /// assert!(PurePath::from("/a").is_absolute());
    /// assert!(!PurePath::from("a").is_absolute());
    /// assert!(!PurePath::from("C:foo").is_absolute());
    /// ```
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.has_root_directory()
    }

    /// Whether the path is relative. Always the negation of
    /// [`is_absolute`](Self::is_absolute).
    #[must_use]
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Appends a path, inserting a separator as needed.
    ///
    /// If `p` is absolute, or carries a root name different from this
    /// path's, it replaces the path wholesale. Otherwise `p`'s relative
    /// part is appended as a child.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::PurePath;
    ///
    /// let mut path = PurePath::from("/usr");
    /// path.push("local");
    /// assert_eq!(path, PurePath::from("/usr/local"));
    ///
    /// path.push("/etc");
    /// assert_eq!(path, PurePath::from("/etc"));
    /// ```
    pub fn push(&mut self, p: impl AsRef<str>) {
        let p = p.as_ref();
        let (p_name, p_dirs, _) = split_root(p);
        let p_absolute = !p_dirs.is_empty();
        let foreign_root = !p_name.is_empty()
            && !root_names_equal(p_name, self.root_name().unwrap_or(""));
        if p_absolute || foreign_root {
            self.inner.clear();
            self.inner.push_str(p);
            return;
        }
        if self.has_file_name() {
            self.inner.push('/');
        }
        self.inner.push_str(&p[p_name.len()..]);
    }

    /// Returns a new path with `p` appended as a child.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::PurePath;
    ///
    /// let base = PurePath::from("/srv");
    /// assert_eq!(base.join("data"), PurePath::from("/srv/data"));
    /// assert_eq!(base.join("/abs"), PurePath::from("/abs"));
    /// ```
    #[must_use]
    pub fn join(&self, p: impl AsRef<str>) -> PurePath {
        let mut out = self.clone();
        out.push(p);
        out
    }

    /// Returns a new path with `s` appended at the raw string level, with
    /// no separator semantics.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::PurePath;
    ///
    /// assert_eq!(
    ///     PurePath::from("file").concat(".txt"),
    ///     PurePath::from("file.txt")
    /// );
    /// ```
    #[must_use]
    pub fn concat(&self, s: impl AsRef<str>) -> PurePath {
        let mut inner = self.inner.clone();
        inner.push_str(s.as_ref());
        PurePath { inner }
    }

    /// Replaces the extension of the filename.
    ///
    /// An empty `ext` removes the extension; a missing leading dot is
    /// supplied. Returns `false` (and leaves the path unchanged) when the
    /// path has no filename.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::PurePath;
    ///
    /// let mut path = PurePath::from("archive.tar.gz");
    /// assert!(path.set_extension("bz2"));
    /// assert_eq!(path, PurePath::from("archive.tar.bz2"));
    ///
    /// assert!(path.set_extension(""));
    /// assert_eq!(path, PurePath::from("archive.tar"));
    /// ```
    pub fn set_extension(&mut self, ext: impl AsRef<str>) -> bool {
        if self.file_name().is_none() {
            return false;
        }
        let ext = ext.as_ref();
        if let Some(cur_len) = self.extension().map(str::len) {
            let new_len = self.inner.len() - cur_len;
            self.inner.truncate(new_len);
        }
        if !ext.is_empty() {
            if !ext.starts_with('.') {
                self.inner.push('.');
            }
            self.inner.push_str(ext);
        }
        true
    }

    /// Returns a new path with the extension replaced.
    #[must_use]
    pub fn with_extension(&self, ext: impl AsRef<str>) -> PurePath {
        let mut out = self.clone();
        out.set_extension(ext);
        out
    }

    /// Removes the filename, keeping any trailing separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::PurePath;
    ///
    /// let mut path = PurePath::from("/foo/bar");
    /// path.remove_file_name();
    /// assert_eq!(path.as_str(), "/foo/");
    /// ```
    pub fn remove_file_name(&mut self) {
        if let Some(len) = self.file_name().map(str::len) {
            let new_len = self.inner.len() - len;
            self.inner.truncate(new_len);
        }
    }

    /// Replaces the filename with `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::PurePath;
    ///
    /// let mut path = PurePath::from("/tmp/old.log");
    /// path.set_file_name("new.log");
    /// assert_eq!(path, PurePath::from("/tmp/new.log"));
    /// ```
    pub fn set_file_name(&mut self, name: impl AsRef<str>) {
        self.remove_file_name();
        self.push(name);
    }

    /// Returns a new path with the filename replaced.
    #[must_use]
    pub fn with_file_name(&self, name: impl AsRef<str>) -> PurePath {
        let mut out = self.clone();
        out.set_file_name(name);
        out
    }

    /// Structurally collapses `.` and `..` components without consulting
    /// the filesystem.
    ///
    /// Idempotent: normalizing a normalized path returns it unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::PurePath;
    ///
    /// assert_eq!(
    ///     PurePath::from("/a/b/../c").lexically_normal(),
    ///     PurePath::from("/a/c")
    /// );
    /// assert_eq!(PurePath::from("foo/..").lexically_normal(), PurePath::from("."));
    /// ```
    #[must_use]
    pub fn lexically_normal(&self) -> PurePath {
        normalize::lexically_normal(self)
    }

    /// Computes a relative path from `base` to `self` using only textual
    /// structure.
    ///
    /// Returns `None` when no relative path can be expressed (differing
    /// root names, or an absolute/relative mismatch).
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::PurePath;
    ///
    /// let target = PurePath::from("/a/d");
    /// assert_eq!(
    ///     target.lexically_relative(&PurePath::from("/a/b/c")),
    ///     Some(PurePath::from("../../d"))
    /// );
    /// assert_eq!(PurePath::from("a").lexically_relative(&PurePath::from("/a")), None);
    /// ```
    #[must_use]
    pub fn lexically_relative(&self, base: &PurePath) -> Option<PurePath> {
        relative::lexically_relative(self, base)
    }

    /// Like [`lexically_relative`](Self::lexically_relative), but falls
    /// back to `self` when no relative path exists.
    #[must_use]
    pub fn lexically_proximate(&self, base: &PurePath) -> PurePath {
        self.lexically_relative(base)
            .unwrap_or_else(|| self.clone())
    }
}

/// Splits a filename into (stem, extension-with-dot).
fn split_file_name(name: &str) -> (&str, Option<&str>) {
    if name == "." || name == ".." {
        return (name, None);
    }
    match name.rfind('.') {
        Some(i) if i > 0 => (&name[..i], Some(&name[i..])),
        _ => (name, None),
    }
}

/// Compares two root names with separators normalized, so `//srv` and
/// `\\srv` count as the same root.
fn root_names_equal(a: &str, b: &str) -> bool {
    let norm = |c: char| if is_separator(c) { '/' } else { c };
    a.chars().map(norm).eq(b.chars().map(norm))
}

/// Iterator over a path and its successive parents.
///
/// Created by [`PurePath::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors {
    next: Option<PurePath>,
}

impl Iterator for Ancestors {
    type Item = PurePath;

    fn next(&mut self) -> Option<PurePath> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}

impl fmt::Display for PurePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl From<&str> for PurePath {
    fn from(s: &str) -> Self {
        PurePath {
            inner: s.to_string(),
        }
    }
}

impl From<String> for PurePath {
    fn from(inner: String) -> Self {
        PurePath { inner }
    }
}

impl AsRef<str> for PurePath {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<Path> for PurePath {
    fn as_ref(&self) -> &Path {
        self.as_std_path()
    }
}

impl PartialEq for PurePath {
    fn eq(&self, other: &Self) -> bool {
        cmp_paths(&self.inner, &other.inner) == Ordering::Equal
    }
}

impl Eq for PurePath {}

impl PartialOrd for PurePath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PurePath {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_paths(&self.inner, &other.inner)
    }
}

impl Hash for PurePath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_path(&self.inner, state);
    }
}

impl<'a> FromIterator<Component<'a>> for PurePath {
    fn from_iter<I: IntoIterator<Item = Component<'a>>>(iter: I) -> Self {
        let mut out = PurePath::new();
        for comp in iter {
            match comp {
                Component::RootName(s) => out.inner.push_str(s),
                Component::RootDir => {
                    if !out.inner.ends_with(is_separator) {
                        out.inner.push('/');
                    }
                }
                other => out.push(other.as_str()),
            }
        }
        out
    }
}
