// set-app-mode: Per-Environment File Selection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings management for set-app-mode.
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. --config files (in order)
//! 3. set-app-mode.toml (cwd, optional)
//! 4. APPMODE_* env vars
//! 5. --set KEY=VALUE
//! 6. --mode
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! APPMODE_GLOBAL_DRY=true          → global.dry = true
//! APPMODE_MODES_MODE=prod          → modes.mode = "prod"
//! APPMODE_MODES_EXPECTED=dev,prod  → modes.expected = ["dev", "prod"]
//! ```
//!
//! # Example
//!
//! ```toml
//! [modes]
//! expected = ["dev", "staging", "prod"]
//! mode = "staging"
//!
//! [[groups]]
//! src = "src/config.{{MODE}}.js"
//! dest = "build"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, ModeResult, Result};
use crate::group::{GroupMapping, ModeGroupConfigCollection};
use crate::mode::ModeConfig;
use crate::utility::fs::FileSystem;

use loader::SettingsLoader;
use types::{GlobalSettings, ModesSettings};

/// Default settings file looked up in the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "set-app-mode.toml";

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "APPMODE";

/// Complete application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Global options.
    pub global: GlobalSettings,
    /// Mode selection.
    pub modes: ModesSettings,
    /// Mode groups; absent is an error, empty is a no-op.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupMapping>>,
}

impl Settings {
    /// Create a new settings loader.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use set_app_mode::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file("set-app-mode.toml")
    ///     .with_env_prefix("APPMODE")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> SettingsLoader {
        SettingsLoader::new()
    }

    /// Load settings from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not match the
    /// `Settings` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match
    /// the `Settings` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validated mode selection.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no mode is selected or the selection
    /// is invalid.
    pub fn mode_config(&self) -> ModeResult<ModeConfig> {
        let mode = self.modes.mode.as_deref().ok_or(ConfigError::MissingMode)?;
        ModeConfig::new(self.modes.expected.iter().cloned(), mode)
    }

    /// The configured mappings.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the `[[groups]]` list is absent.
    pub fn mode_groups(&self) -> ModeResult<&[GroupMapping]> {
        self.groups
            .as_deref()
            .ok_or_else(|| ConfigError::MissingGroups.into())
    }

    /// Resolve and validate every configured group against `fs`.
    ///
    /// The group list is checked before the filesystem is consulted.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for missing groups or the first group
    /// construction error.
    pub fn build_collection(
        &self,
        mode_config: &ModeConfig,
        fs: &dyn FileSystem,
    ) -> ModeResult<ModeGroupConfigCollection> {
        let mappings = self.mode_groups()?;
        ModeGroupConfigCollection::with_placeholder(
            mappings,
            mode_config.expected_modes(),
            &self.modes.placeholder,
            fs,
        )
    }

    /// Resolve every configured group without validating it on disk.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for missing groups or the first
    /// template error.
    pub fn resolve_collection(
        &self,
        mode_config: &ModeConfig,
    ) -> ModeResult<ModeGroupConfigCollection> {
        ModeGroupConfigCollection::resolve(
            self.mode_groups()?,
            mode_config.expected_modes(),
            &self.modes.placeholder,
        )
    }

    /// Format settings for display, one `key = value` per line.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert("global.dry".to_string(), self.global.dry.to_string());
        options.insert(
            "global.preflight".to_string(),
            self.global.preflight.to_string(),
        );
        options.insert(
            "modes.expected".to_string(),
            format!("[{}]", self.modes.expected.join(", ")),
        );
        options.insert(
            "modes.mode".to_string(),
            self.modes.mode.clone().unwrap_or_default(),
        );
        options.insert(
            "modes.placeholder".to_string(),
            self.modes.placeholder.clone(),
        );

        match &self.groups {
            None => {
                options.insert("groups".to_string(), "<missing>".to_string());
            }
            Some(groups) => {
                for (i, group) in groups.iter().enumerate() {
                    options.insert(
                        format!("groups.{i}.src"),
                        group.src.display().to_string(),
                    );
                    options.insert(
                        format!("groups.{i}.dest"),
                        group.dest.display().to_string(),
                    );
                }
            }
        }

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
