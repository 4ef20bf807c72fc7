//! Lexical path normalization.
//!
//! Normalization simplifies a path structurally, resolving `.` and `..`
//! components without consulting the filesystem. The live filesystem may
//! disagree (a `..` across a symlink does not go where the lexical form
//! says); resolution against the filesystem is the job of
//! [`fs::canonical`](crate::fs::canonical).

use crate::path::component::Component;
use crate::path::PurePath;

/// Structurally collapses `.` and `..` components.
///
/// Rules, in order:
/// - `.` components are removed.
/// - A name followed by `..` removes both; a `..` directly under the root
///   directory is dropped; leading `..` components of a relative path are
///   kept (there is nothing to collapse them against).
/// - If the final component of the input was removed by one of the rules
///   above, the result keeps a trailing separator, marking it as naming a
///   directory.
/// - An empty result becomes `.`.
///
/// The operation is idempotent and never fails.
pub(crate) fn lexically_normal(path: &PurePath) -> PurePath {
    if path.is_empty() {
        return PurePath::new();
    }

    let root_name: String = path
        .root_name()
        .map(|n| {
            n.chars()
                .map(|c| if c == '\\' { '/' } else { c })
                .collect()
        })
        .unwrap_or_default();
    let has_root = path.has_root_directory();

    let mut out: Vec<&str> = Vec::new();
    // True while the most recent component was removed rather than kept;
    // decides whether the result marks a directory with a trailing
    // separator.
    let mut last_removed = false;

    for comp in path.relative_part_components() {
        match comp {
            Component::CurDir => last_removed = true,
            Component::ParentDir => {
                if out.last().is_some_and(|last| *last != "..") {
                    out.pop();
                    last_removed = true;
                } else if has_root {
                    last_removed = true;
                } else {
                    out.push("..");
                    last_removed = false;
                }
            }
            Component::Normal("") => last_removed = true,
            Component::Normal(name) => {
                out.push(name);
                last_removed = false;
            }
            // Root components were consumed by split_root.
            Component::RootName(_) | Component::RootDir => {}
        }
    }

    let mut s = root_name;
    if has_root {
        s.push('/');
    }
    s.push_str(&out.join("/"));
    if last_removed && out.last().is_some_and(|last| *last != "..") {
        s.push('/');
    }
    if s.is_empty() {
        s.push('.');
    }
    PurePath::from(s)
}

impl PurePath {
    /// Components of the relative part only, for the normalizer.
    fn relative_part_components(&self) -> impl Iterator<Item = Component<'_>> {
        self.components().filter(|c| {
            !matches!(c, Component::RootName(_) | Component::RootDir)
        })
    }
}
