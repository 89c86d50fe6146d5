// set-app-mode: Per-Environment File Selection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mode groups: one template, one destination directory.
//!
//! # Lifecycle
//!
//! ```text
//! GroupMapping { src, dest }
//!        |
//!        v  resolve()      parse template, substitute every mode
//!   Unresolved
//!        |
//!        v  validate(fs)   every expected mode has a file in dest
//!   Validated
//!        |
//!        v  ModeExecutor::apply()
//!    Applied
//! ```
//!
//! # Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`GroupMapping`] | Source template path and destination directory |
//! | [`ModeGroupConfig`] | Resolved per-mode files of one group |
//! | [`ModeGroupConfigCollection`] | Ordered groups sharing one mode set |
//! | [`Template`] | Placeholder parsing, substitution and stripping |

pub mod collection;
pub mod template;


use std::path::{Component, Path, PathBuf};

use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{MissingModeFile, ModeError, ModeResult, TemplateError};
use crate::mode::validate_expected_modes;
use crate::utility::fs::FileSystem;

pub use collection::ModeGroupConfigCollection;
pub use template::{DEFAULT_PLACEHOLDER, Template};

/// One configured source/destination mapping.
///
/// Only the file name of `src` is used as the template; the per-mode
/// variants are expected to already sit in `dest`.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupMapping {
    #[builder(into)]
    pub src: PathBuf,
    #[builder(into)]
    pub dest: PathBuf,
}

/// Lifecycle state of a mode group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupState {
    Unresolved,
    Validated,
    Applied,
}

/// The resolved per-mode files of one group.
#[derive(Debug, Clone)]
pub struct ModeGroupConfig {
    template: Template,
    dest_dir: PathBuf,
    /// `(mode, file name)` in expected-mode order.
    resolved: Vec<(String, String)>,
    unexpected_tokens: Vec<String>,
    state: GroupState,
}

impl ModeGroupConfig {
    /// Resolve and validate a group using the default placeholder.
    ///
    /// # Errors
    ///
    /// See [`ModeGroupConfig::with_placeholder`].
    pub fn new(
        mapping: &GroupMapping,
        expected_modes: &[String],
        fs: &dyn FileSystem,
    ) -> ModeResult<Self> {
        Self::with_placeholder(mapping, expected_modes, DEFAULT_PLACEHOLDER, fs)
    }

    /// Resolve and validate a group.
    ///
    /// # Errors
    ///
    /// Returns a template error for a malformed template, a configuration
    /// error for a bad mode list, or a missing-mode-file error when a variant
    /// is absent from the destination directory.
    pub fn with_placeholder(
        mapping: &GroupMapping,
        expected_modes: &[String],
        placeholder: &str,
        fs: &dyn FileSystem,
    ) -> ModeResult<Self> {
        Self::resolve(mapping, expected_modes, placeholder)?.validate(fs)
    }

    /// Parse the template and substitute every expected mode, without
    /// touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns a template error for a malformed template or a configuration
    /// error for a bad mode list.
    pub fn resolve(
        mapping: &GroupMapping,
        expected_modes: &[String],
        placeholder: &str,
    ) -> ModeResult<Self> {
        let modes = validate_expected_modes(expected_modes.iter().cloned())?;
        let template = Template::parse(template_file_name(&mapping.src, placeholder)?, placeholder)?;

        let resolved: Vec<(String, String)> = modes
            .into_iter()
            .map(|mode| {
                let file = template.resolve(&mode);
                (mode, file)
            })
            .collect();

        debug!(
            template = %template,
            dest = %mapping.dest.display(),
            files = ?resolved.iter().map(|(_, f)| f.as_str()).collect::<Vec<_>>(),
            "resolved mode group"
        );

        Ok(Self {
            template,
            dest_dir: mapping.dest.clone(),
            resolved,
            unexpected_tokens: Vec::new(),
            state: GroupState::Unresolved,
        })
    }

    /// Run the completeness check and move to [`GroupState::Validated`].
    ///
    /// # Errors
    ///
    /// Returns a missing-mode-file error naming the first expected mode
    /// without a file, or a filesystem error if the directory listing fails.
    pub fn validate(mut self, fs: &dyn FileSystem) -> ModeResult<Self> {
        self.unexpected_tokens = self.verify(fs)?;
        for token in &self.unexpected_tokens {
            warn!(
                template = %self.template,
                dest = %self.dest_dir.display(),
                token = %token,
                "ignoring file for unexpected mode"
            );
        }
        self.state = GroupState::Validated;
        Ok(self)
    }

    /// Check that every expected mode has its file in the destination
    /// directory.
    ///
    /// Returns the tokens of files that match the template shape but name a
    /// mode outside the expected set. Those are tolerated.
    ///
    /// # Errors
    ///
    /// Returns a missing-mode-file error naming the first absent variant.
    pub fn verify(&self, fs: &dyn FileSystem) -> ModeResult<Vec<String>> {
        let on_disk = if fs.exists(&self.dest_dir) {
            fs.list_dir(&self.dest_dir)?
        } else {
            Vec::new()
        };

        for (mode, file) in &self.resolved {
            let path = self.dest_dir.join(file);
            if !fs.exists(&path) {
                return Err(MissingModeFile::new(mode.as_str(), path).into());
            }
        }

        Ok(on_disk
            .iter()
            .filter_map(|name| self.template.match_token(name))
            .filter(|token| !self.resolved.iter().any(|(mode, _)| mode.as_str() == *token))
            .map(String::from)
            .collect())
    }

    /// The file name holding `mode`'s variant.
    ///
    /// # Errors
    ///
    /// Returns an unknown-mode error if `mode` is not an expected mode.
    pub fn file_for(&self, mode: &str) -> ModeResult<&str> {
        self.resolved
            .iter()
            .find(|(m, _)| m == mode)
            .map(|(_, file)| file.as_str())
            .ok_or_else(|| ModeError::unknown_mode(mode))
    }

    /// All per-mode file names, in expected-mode order.
    #[must_use]
    pub fn all_resolved_files(&self) -> Vec<&str> {
        self.resolved.iter().map(|(_, f)| f.as_str()).collect()
    }

    /// The modes this group was resolved for.
    pub fn modes(&self) -> impl Iterator<Item = &str> {
        self.resolved.iter().map(|(m, _)| m.as_str())
    }

    /// The filename left after applying a mode.
    #[must_use]
    pub fn stripped_name(&self) -> String {
        self.template.stripped_name()
    }

    #[must_use]
    pub const fn template(&self) -> &Template {
        &self.template
    }

    #[must_use]
    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    /// Tokens seen on disk at validation time that are not expected modes.
    #[must_use]
    pub fn unexpected_tokens(&self) -> &[String] {
        &self.unexpected_tokens
    }

    #[must_use]
    pub const fn state(&self) -> GroupState {
        self.state
    }
}

/// Extract the template file name from `src`, rejecting placeholders in
/// directory components.
fn template_file_name<'a>(src: &'a Path, placeholder: &str) -> Result<&'a str, TemplateError> {
    let display = || src.display().to_string();

    let Some(Component::Normal(name)) = src.components().next_back() else {
        return Err(TemplateError::NoFileName(display()));
    };
    let name = name.to_str().ok_or_else(|| TemplateError::NoFileName(display()))?;

    if !placeholder.is_empty()
        && let Some(parent) = src.parent()
        && parent.to_string_lossy().contains(placeholder)
    {
        return Err(TemplateError::PlaceholderInDirectory(display()));
    }
    Ok(name)
}
