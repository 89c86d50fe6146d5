// set-app-mode: Per-Environment File Selection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::apply::apply;
use super::check::preflight;
use super::list::{format_listings, group_listings};
use crate::config::Settings;
use crate::utility::fs::DryRunFileSystem;
use crate::utility::fs::memory::MemoryFileSystem;

const SETTINGS: &str = r#"
[modes]
expected = ["dev", "staging", "prod"]
mode = "staging"

[[groups]]
src = "src/config.{{MODE}}.js"
dest = "build"

[[groups]]
src = "src/flags-{{MODE}}.json"
dest = "build"
"#;

fn full_fs() -> MemoryFileSystem {
    MemoryFileSystem::new()
        .with_variants("build", "config.{{MODE}}.js", &["dev", "staging", "prod"])
        .with_variants("build", "flags-{{MODE}}.json", &["dev", "staging", "prod"])
}

#[test]
fn test_apply_promotes_every_group() {
    let settings = Settings::parse(SETTINGS).unwrap();
    let fs = full_fs();

    apply(&settings, &fs).unwrap();

    assert_eq!(fs.file_names("build"), ["config.js", "flags.json"]);
    assert_eq!(fs.read("build/config.js").unwrap(), "config.{{MODE}}.js:staging");
    assert_eq!(fs.read("build/flags.json").unwrap(), "flags-{{MODE}}.json:staging");
}

#[test]
fn test_apply_preflight_blocks_partial_run() {
    let settings = Settings::parse(SETTINGS).unwrap();
    let fs = MemoryFileSystem::new()
        .with_variants("build", "config.{{MODE}}.js", &["dev", "staging", "prod"])
        .with_variants("build", "flags-{{MODE}}.json", &["dev", "staging"]);

    let err = apply(&settings, &fs).unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"1 group(s) failed preflight, no files were changed");
    assert_eq!(fs.file_names("build").len(), 5);
}

#[test]
fn test_apply_without_preflight_is_fail_fast() {
    let mut settings = Settings::parse(SETTINGS).unwrap();
    settings.global.preflight = false;
    let fs = MemoryFileSystem::new()
        .with_variants("build", "config.{{MODE}}.js", &["dev", "staging", "prod"])
        .with_variants("build", "flags-{{MODE}}.json", &["dev", "staging"]);

    // Collection construction validates every group, so nothing is applied.
    assert!(apply(&settings, &fs).is_err());
    assert_eq!(fs.file_names("build").len(), 5);
}

#[test]
fn test_apply_dry_run() {
    let settings = Settings::parse(SETTINGS).unwrap();
    let dry = DryRunFileSystem::new(full_fs());

    apply(&settings, &dry).unwrap();

    assert_eq!(dry.inner().file_names("build").len(), 6);
}

#[test]
fn test_preflight_after_apply_reports_both_groups() {
    let settings = Settings::parse(SETTINGS).unwrap();
    let fs = full_fs();
    apply(&settings, &fs).unwrap();

    let failures = preflight(&settings, &fs).unwrap();
    assert_eq!(failures.len(), 2);
    assert!(failures.iter().all(|f| f.error.kind() == "missing-mode-file"));
}

#[test]
fn test_preflight_missing_groups() {
    let settings = Settings::parse(
        r#"
[modes]
expected = ["dev"]
mode = "dev"
"#,
    )
    .unwrap();
    let fs = MemoryFileSystem::new();

    let err = preflight(&settings, &fs).unwrap_err();
    assert!(format!("{err:#}").contains("groups"));
    assert_eq!(fs.ops(), 0);
}

#[test]
fn test_list_text() {
    let settings = Settings::parse(SETTINGS).unwrap();
    let listings = group_listings(&settings).unwrap();
    insta::assert_snapshot!(format_listings(&listings), @r"
    config.{{MODE}}.js -> build
        dev        config.dev.js
      * staging    config.staging.js
        prod       config.prod.js
      = config.js
    flags-{{MODE}}.json -> build
        dev        flags-dev.json
      * staging    flags-staging.json
        prod       flags-prod.json
      = flags.json
    ");
}

#[test]
fn test_list_json() {
    let settings = Settings::parse(SETTINGS).unwrap();
    let listings = group_listings(&settings).unwrap();
    let value = serde_json::to_value(&listings).unwrap();

    assert_eq!(value[0]["stripped"], "config.js");
    assert_eq!(value[1]["files"][1]["file"], "flags-staging.json");
    assert_eq!(value[1]["files"][1]["selected"], true);
    assert_eq!(value[1]["files"][2]["selected"], false);
}

#[test]
fn test_apply_rejects_duplicate_groups_before_any_change() {
    let settings = Settings::parse(
        r#"
[modes]
expected = ["dev", "prod"]
mode = "prod"

[[groups]]
src = "config.{{MODE}}.js"
dest = "build"

[[groups]]
src = "config.{{MODE}}.js"
dest = "build"
"#,
    )
    .unwrap();
    let fs = MemoryFileSystem::new().with_variants("build", "config.{{MODE}}.js", &["dev", "prod"]);

    let err = apply(&settings, &fs).unwrap_err();

    assert!(format!("{err:#}").contains("groups 0 and 1 both claim"));
    assert_eq!(fs.file_names("build"), ["config.dev.js", "config.prod.js"]);
}
