// set-app-mode: Per-Environment File Selection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::memory::MemoryFileSystem;
use super::{DryRunFileSystem, FileSystem, RealFileSystem};
use crate::error::FsError;
use std::path::Path;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn test_real_list_dir_skips_directories() {
    let temp = temp_dir();
    std::fs::create_dir(temp.path().join("nested")).unwrap();
    std::fs::write(temp.path().join("b.txt"), "b").unwrap();
    std::fs::write(temp.path().join("a.txt"), "a").unwrap();

    let names = RealFileSystem.list_dir(temp.path()).unwrap();
    assert_eq!(names, vec!["a.txt".to_string(), "b.txt".to_string()]);
}

#[test]
fn test_real_copy_overwrites_and_delete_removes() {
    let temp = temp_dir();
    let src = temp.path().join("config.prod.js");
    let dest = temp.path().join("config.js");
    std::fs::write(&src, "prod").unwrap();
    std::fs::write(&dest, "stale").unwrap();

    RealFileSystem.copy(&src, &dest).unwrap();
    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "prod");

    RealFileSystem.delete(&src).unwrap();
    assert!(!RealFileSystem.exists(&src));
}

#[test]
fn test_real_delete_missing_is_not_found() {
    let temp = temp_dir();
    let err = RealFileSystem
        .delete(&temp.path().join("nope.js"))
        .unwrap_err();
    assert!(matches!(err, FsError::NotFound(_)));
}

#[test]
fn test_dry_run_does_not_mutate() {
    let dry = DryRunFileSystem::new(MemoryFileSystem::new().with_file("out/config.dev.js", "dev"));

    dry.copy(Path::new("out/config.dev.js"), Path::new("out/config.js"))
        .unwrap();
    dry.delete(Path::new("out/config.dev.js")).unwrap();

    assert_eq!(dry.inner().file_names("out"), vec!["config.dev.js".to_string()]);
}

#[test]
fn test_dry_run_copy_requires_source() {
    let dry = DryRunFileSystem::new(MemoryFileSystem::new());
    let err = dry
        .copy(Path::new("out/missing.js"), Path::new("out/x.js"))
        .unwrap_err();
    assert!(matches!(err, FsError::NotFound(_)));
}

#[test]
fn test_real_copy_failure_names_destination() {
    let temp = temp_dir();
    let src = temp.path().join("config.prod.js");
    let dest = temp.path().join("config.js");
    std::fs::write(&src, "prod").unwrap();
    std::fs::create_dir(&dest).unwrap();

    let err = RealFileSystem.copy(&src, &dest).unwrap_err();
    match err {
        FsError::Copy { dest: ref d, .. } => assert_eq!(d, &dest.display().to_string()),
        other => panic!("expected a copy error, got {other:?}"),
    }
}

#[test]
fn test_real_copy_missing_source_is_not_found() {
    let temp = temp_dir();
    let src = temp.path().join("config.prod.js");

    let err = RealFileSystem
        .copy(&src, &temp.path().join("config.js"))
        .unwrap_err();
    assert!(matches!(err, FsError::NotFound(ref p) if *p == src.display().to_string()));
}
