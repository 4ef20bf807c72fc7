//! Property-based tests spanning the lexical path modules.
//!
//! Enabled with the `property-tests` feature. These complement the inline
//! property tests in the individual modules with cross-cutting invariants.

use proptest::prelude::*;

use crate::path::PurePath;

/// Strategy for relative path strings, with occasional dot components.
fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-zA-Z0-9_-]{1,10}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

fn relative_path() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..=6).prop_map(|parts| parts.join("/"))
}

fn any_path() -> impl Strategy<Value = String> {
    (prop::bool::ANY, relative_path()).prop_map(|(rooted, rel)| {
        if rooted {
            format!("/{rel}")
        } else {
            rel
        }
    })
}

proptest! {
    /// The generic rendering parses back to an equal path.
    #[test]
    fn generic_string_round_trips(s in any_path()) {
        let path = PurePath::from(s);
        let reparsed = PurePath::from(path.generic_string());
        prop_assert_eq!(reparsed, path);
    }

    /// Normalization is idempotent.
    #[test]
    fn lexically_normal_idempotent(s in any_path()) {
        let once = PurePath::from(s).lexically_normal();
        let twice = once.lexically_normal();
        prop_assert_eq!(once, twice);
    }

    /// Normalization never changes whether a path is absolute.
    #[test]
    fn lexically_normal_preserves_rootedness(s in any_path()) {
        let path = PurePath::from(s);
        let normal = path.lexically_normal();
        prop_assert_eq!(path.is_absolute(), normal.is_absolute());
    }

    /// Exactly one of is_absolute / is_relative holds.
    #[test]
    fn absolute_relative_partition(s in any_path()) {
        let path = PurePath::from(s);
        prop_assert_ne!(path.is_absolute(), path.is_relative());
    }

    /// Rebuilding a path from its own components yields an equal path.
    #[test]
    fn components_round_trip(s in any_path()) {
        let path = PurePath::from(s);
        let rebuilt: PurePath = path.components().collect();
        prop_assert_eq!(rebuilt, path);
    }

    /// parent() + file_name() reconstruct the path whenever it has a
    /// filename.
    #[test]
    fn parent_file_name_reconstruct(s in any_path()) {
        let path = PurePath::from(s);
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            prop_assert_eq!(parent.join(name), path);
        }
    }

    /// Depth equals the number of iterated sub-paths.
    #[test]
    fn depth_matches_iter(s in any_path()) {
        let path = PurePath::from(s);
        prop_assert_eq!(path.depth(), path.iter().count());
    }

    /// join never turns an absolute base into a relative result.
    #[test]
    fn join_keeps_base_rooted(base in any_path(), child in relative_path()) {
        let base = PurePath::from(base);
        if base.is_absolute() {
            prop_assert!(base.join(&child).is_absolute());
        }
    }

    /// with_extension followed by extension() reads the new extension back.
    #[test]
    fn with_extension_reads_back(s in relative_path(), ext in "[a-z]{1,4}") {
        let path = PurePath::from(s);
        if path.file_name().is_some_and(|n| n != "." && n != "..") {
            let changed = path.with_extension(&ext);
            prop_assert_eq!(changed.extension(), Some(format!(".{ext}").as_str()));
        }
    }
}
