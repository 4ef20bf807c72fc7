//! Integration tests for filesystem queries and mutation, exercised
//! end-to-end on a real temporary tree.

mod common;

use std::fs as stdfs;

use common::TreeFixture;
use fspath::{fs, CopyOptions, Error, PurePath};
use serial_test::serial;

#[test]
fn create_directories_then_exists_then_noop() {
    let tree = TreeFixture::new().build();
    let target = tree.path("x/y/z");

    assert!(fs::create_dir_all(&target).unwrap());
    assert!(fs::exists(tree.path("x/y")));
    assert!(fs::is_dir(&target));

    // Second call is a no-op, not an error.
    assert!(!fs::create_dir_all(&target).unwrap());
}

#[test]
fn remove_missing_is_false_file_size_missing_is_not_found() {
    let tree = TreeFixture::new().build();
    let ghost = tree.path("nonexistent");

    assert!(!fs::remove(&ghost).unwrap());

    let err = fs::file_size(&ghost).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.operation(), Some("file_size"));
    assert!(err.os_error_code().is_some());
}

#[test]
fn copy_file_scenario() {
    let tree = TreeFixture::new()
        .with_file("src.txt", "fresh content")
        .with_file("dst.txt", "stale content")
        .build();
    let (src, dst) = (tree.path("src.txt"), tree.path("dst.txt"));

    // Without an option: AlreadyExists.
    let err = fs::copy_file(&src, &dst, &CopyOptions::new()).unwrap_err();
    assert!(matches!(err, Error::AlreadyExists { .. }));
    assert_eq!(stdfs::read_to_string(&dst).unwrap(), "stale content");

    // With overwrite_existing: succeeds and content matches.
    let options = CopyOptions::new().with_overwrite_existing(true);
    assert!(fs::copy_file(&src, &dst, &options).unwrap());
    assert_eq!(stdfs::read_to_string(&dst).unwrap(), "fresh content");
}

#[test]
fn conflicting_copy_options_fail_before_touching_anything() {
    let tree = TreeFixture::new().with_file("src.txt", "x").build();
    let dst = tree.path("never-created");

    let options = CopyOptions::new()
        .with_overwrite_existing(true)
        .with_update_existing(true);
    let err = fs::copy_file(tree.path("src.txt"), &dst, &options).unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert!(!dst.exists());
}

#[test]
fn recursive_copy_preserves_tree_shape() {
    let tree = TreeFixture::new()
        .with_file("src/a.txt", "a")
        .with_file("src/nested/b.txt", "b")
        .with_dir("src/empty")
        .build();

    let options = CopyOptions::new().with_recursive(true);
    fs::copy(tree.path("src"), tree.path("dst"), &options).unwrap();

    assert_eq!(stdfs::read_to_string(tree.path("dst/a.txt")).unwrap(), "a");
    assert_eq!(
        stdfs::read_to_string(tree.path("dst/nested/b.txt")).unwrap(),
        "b"
    );
    assert!(fs::is_dir(tree.path("dst/empty")));
}

#[test]
fn rename_moves_content() {
    let tree = TreeFixture::new().with_file("old.txt", "payload").build();

    fs::rename(tree.path("old.txt"), tree.path("new.txt")).unwrap();
    assert!(!fs::exists(tree.path("old.txt")));
    assert_eq!(
        stdfs::read_to_string(tree.path("new.txt")).unwrap(),
        "payload"
    );
}

#[test]
fn rename_or_copy_same_filesystem_behaves_like_rename() {
    let tree = TreeFixture::new().with_file("old.txt", "payload").build();

    fs::rename_or_copy(tree.path("old.txt"), tree.path("new.txt")).unwrap();
    assert!(!fs::exists(tree.path("old.txt")));
    assert_eq!(
        stdfs::read_to_string(tree.path("new.txt")).unwrap(),
        "payload"
    );
}

#[test]
fn remove_all_returns_count() {
    let tree = TreeFixture::new()
        .with_file("top/one.txt", "1")
        .with_file("top/sub/two.txt", "2")
        .build();

    // top, sub, one.txt, two.txt
    assert_eq!(fs::remove_all(tree.path("top")).unwrap(), 4);
    assert!(!fs::exists(tree.path("top")));
}

#[test]
fn file_size_matches_content() {
    let tree = TreeFixture::new().with_file("f.bin", "12345678").build();
    assert_eq!(fs::file_size(tree.path("f.bin")).unwrap(), 8);
}

#[test]
fn is_empty_distinguishes_files_and_directories() {
    let tree = TreeFixture::new()
        .with_file("empty.txt", "")
        .with_file("full.txt", "data")
        .with_dir("empty_dir")
        .build();

    assert!(fs::is_empty(tree.path("empty.txt")).unwrap());
    assert!(!fs::is_empty(tree.path("full.txt")).unwrap());
    assert!(fs::is_empty(tree.path("empty_dir")).unwrap());
    assert!(!fs::is_empty(tree.root()).unwrap());
}

#[cfg(unix)]
#[test]
fn symlink_create_read_and_canonicalize() {
    let tree = TreeFixture::new().with_file("target.txt", "real").build();
    let link = tree.path("alias");

    fs::create_symlink(tree.path("target.txt"), &link).unwrap();
    assert!(fs::is_symlink(&link));

    let read_back = fs::read_symlink(&link).unwrap();
    assert_eq!(
        read_back,
        PurePath::from_std_path(&tree.path("target.txt")).unwrap()
    );

    let resolved = fs::canonical(&link).unwrap();
    assert_eq!(resolved, fs::canonical(tree.path("target.txt")).unwrap());
    assert!(fs::equivalent(&link, tree.path("target.txt")).unwrap());
}

#[cfg(unix)]
#[test]
fn weakly_canonical_tolerates_missing_tail() {
    let tree = TreeFixture::new().with_dir("exists").build();
    let missing = tree.path("exists/not/yet");

    let err = fs::canonical(&missing).unwrap_err();
    assert!(err.is_not_found());

    let weak = fs::weakly_canonical(&missing).unwrap();
    let expected = fs::canonical(tree.path("exists")).unwrap().join("not/yet");
    assert_eq!(weak, expected);
}

#[test]
fn equivalent_requires_existence() {
    let tree = TreeFixture::new().with_file("here.txt", "x").build();

    let err = fs::equivalent(tree.path("here.txt"), tree.path("gone.txt")).unwrap_err();
    assert!(err.is_not_found());
}

#[cfg(unix)]
#[test]
fn space_for_temp_filesystem() {
    let tree = TreeFixture::new().build();
    let info = fs::space(tree.root()).unwrap();
    assert!(info.capacity >= info.free);
}

#[test]
#[serial]
fn current_dir_round_trip() {
    let tree = TreeFixture::new().with_dir("workdir").build();
    let original = fs::current_dir().unwrap();

    fs::set_current_dir(tree.path("workdir")).unwrap();
    let now = fs::current_dir().unwrap();
    // Compare resolved forms: the tempdir may itself contain symlinks.
    assert_eq!(
        fs::canonical(&now).unwrap(),
        fs::canonical(tree.path("workdir")).unwrap()
    );

    fs::set_current_dir(&original).unwrap();
    assert_eq!(fs::current_dir().unwrap(), original);
}

#[test]
#[serial]
fn set_current_dir_missing_fails() {
    let tree = TreeFixture::new().build();
    let err = fs::set_current_dir(tree.path("missing")).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn temp_dir_is_usable() {
    let tmp = fs::temp_dir().unwrap();
    assert!(fs::is_dir(&tmp));
}

#[test]
fn error_context_is_complete() {
    let tree = TreeFixture::new().build();
    let ghost = tree.path("ghost");

    let err = fs::file_size(&ghost).unwrap_err();
    assert_eq!(err.operation(), Some("file_size"));
    assert_eq!(err.path(), Some(ghost.as_path()));
    assert_eq!(err.os_error_code(), Some(2));
    let rendered = err.to_string();
    assert!(rendered.contains("file_size"));
    assert!(rendered.contains("ghost"));
}
