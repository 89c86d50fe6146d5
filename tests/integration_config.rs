// set-app-mode: Per-Environment File Selection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for settings loading.
//!
//! Tests the settings layering with realistic TOML files.

use std::fs;

use set_app_mode::config::Settings;
use set_app_mode::config::loader::SettingsLoader;
use set_app_mode::error::{ConfigError, ModeError};
use set_app_mode::utility::fs::RealFileSystem;

const BASE: &str = r#"
[modes]
expected = ["dev", "staging", "prod"]
mode = "dev"

[[groups]]
src = "src/config.{{MODE}}.js"
dest = "build"
"#;

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn settings_from_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("set-app-mode.toml");
    fs::write(&path, BASE).unwrap();

    let settings = Settings::from_file(&path).unwrap();
    let config = settings.mode_config().unwrap();
    assert_eq!(config.mode(), "dev");
    assert_eq!(settings.mode_groups().unwrap().len(), 1);
}

#[test]
fn settings_later_file_overrides_earlier() {
    let tmp = tempfile::tempdir().unwrap();
    let base = tmp.path().join("base.toml");
    let local = tmp.path().join("local.toml");
    fs::write(&base, BASE).unwrap();
    fs::write(&local, "[modes]\nmode = \"prod\"\n").unwrap();

    let settings = SettingsLoader::new()
        .add_toml_file(&base)
        .add_toml_file(&local)
        .build()
        .unwrap();

    assert_eq!(settings.modes.mode.as_deref(), Some("prod"));
    assert_eq!(settings.modes.expected, ["dev", "staging", "prod"]);
}

#[test]
fn settings_missing_required_file() {
    let tmp = tempfile::tempdir().unwrap();
    let result = SettingsLoader::new()
        .add_toml_file(tmp.path().join("absent.toml"))
        .build();
    assert!(result.is_err());
}

#[test]
fn settings_optional_file_is_skipped() {
    let tmp = tempfile::tempdir().unwrap();
    let loader = SettingsLoader::new()
        .add_toml_str(BASE)
        .add_toml_file_optional(tmp.path().join("absent.toml"));
    assert_eq!(loader.loaded_files().len(), 1);
    assert!(loader.build().is_ok());
}

#[test]
fn settings_set_has_priority_over_files() {
    let settings = SettingsLoader::new()
        .add_toml_str(BASE)
        .set_assignment("modes.mode=staging")
        .unwrap()
        .set_assignment("global.dry=true")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(settings.modes.mode.as_deref(), Some("staging"));
    assert!(settings.global.dry);
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn settings_missing_groups_fails_before_fs() {
    let settings = Settings::parse(
        r#"
[modes]
expected = ["dev"]
mode = "dev"
"#,
    )
    .unwrap();
    let config = settings.mode_config().unwrap();

    let err = settings.build_collection(&config, &RealFileSystem).unwrap_err();
    assert!(
        matches!(err, ModeError::Config(ref inner) if matches!(**inner, ConfigError::MissingGroups))
    );
}

#[test]
fn settings_mode_not_expected() {
    let settings = SettingsLoader::new()
        .add_toml_str(BASE)
        .set_assignment("modes.mode=qa")
        .unwrap()
        .build()
        .unwrap();

    let err = settings.mode_config().unwrap_err();
    assert_eq!(err.kind(), "configuration");
    assert!(err.to_string().contains("qa"));
}

#[test]
fn settings_duplicate_modes_rejected() {
    let settings = Settings::parse(
        r#"
[modes]
expected = ["dev", "dev"]
mode = "dev"
"#,
    )
    .unwrap();
    assert_eq!(settings.mode_config().unwrap_err().kind(), "configuration");
}

#[test]
fn settings_unknown_group_field_rejected() {
    let result = Settings::parse(
        r#"
[modes]
expected = ["dev"]
mode = "dev"

[[groups]]
src = "a.{{MODE}}"
dest = "out"
target = "x"
"#,
    );
    assert!(result.is_err());
}

// =============================================================================
// Environment layer
// =============================================================================

#[test]
fn settings_env_sits_between_files_and_set() {
    // SAFETY: the APPMODEENV prefix is only read by this test.
    unsafe {
        std::env::set_var("APPMODEENV_MODES_MODE", "prod");
        std::env::set_var("APPMODEENV_MODES_EXPECTED", "dev,prod");
        std::env::set_var("APPMODEENV_GLOBAL_DRY", "true");
        std::env::set_var("APPMODEENV_GLOBAL_PREFLIGHT", "false");
    }

    let settings = SettingsLoader::new()
        .add_toml_str(BASE)
        .with_env_prefix("APPMODEENV")
        .set_assignment("global.preflight=true")
        .unwrap()
        .build();

    // SAFETY: same as above.
    unsafe {
        std::env::remove_var("APPMODEENV_MODES_MODE");
        std::env::remove_var("APPMODEENV_MODES_EXPECTED");
        std::env::remove_var("APPMODEENV_GLOBAL_DRY");
        std::env::remove_var("APPMODEENV_GLOBAL_PREFLIGHT");
    }

    let settings = settings.unwrap();
    assert_eq!(settings.modes.mode.as_deref(), Some("prod"));
    assert_eq!(settings.modes.expected, ["dev", "prod"]);
    assert!(settings.global.dry);
    assert!(settings.global.preflight, "--set should win over the environment");
    assert_eq!(settings.mode_config().unwrap().mode(), "prod");
}
