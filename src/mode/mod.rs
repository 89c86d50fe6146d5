// set-app-mode: Per-Environment File Selection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Selected mode and the ordered set of expected modes.
//!
//! ```text
//! expected_modes = [dev, staging, prod]   (ordered, distinct, non-empty)
//! mode           = staging                (must be a member, case-sensitive)
//! ```


use std::collections::HashSet;

use crate::error::{ConfigError, ModeResult};

/// Validated mode selection for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeConfig {
    expected_modes: Vec<String>,
    mode: String,
}

impl ModeConfig {
    /// Validate and build a mode selection.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `expected_modes` is empty, contains a
    /// duplicate or an unusable name, or does not contain `mode`.
    pub fn new<I, S>(expected_modes: I, mode: impl Into<String>) -> ModeResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let expected_modes = validate_expected_modes(expected_modes)?;
        let mode = mode.into();

        if !expected_modes.contains(&mode) {
            return Err(ConfigError::InvalidMode {
                mode,
                expected: expected_modes.join(", "),
            }
            .into());
        }

        Ok(Self {
            expected_modes,
            mode,
        })
    }

    /// The selected mode.
    #[must_use]
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// All expected modes, in declaration order.
    #[must_use]
    pub fn expected_modes(&self) -> &[String] {
        &self.expected_modes
    }

    /// Returns `true` if `candidate` is one of the expected modes.
    #[must_use]
    pub fn is_valid_mode(&self, candidate: &str) -> bool {
        self.expected_modes.iter().any(|m| m == candidate)
    }
}

/// Check an expected-mode list on its own, independent of any selection.
///
/// Mode names end up inside filenames, so anything that could escape the
/// destination directory is rejected.
///
/// # Errors
///
/// Returns a configuration error for an empty list, a duplicate, or an
/// unusable name.
pub fn validate_expected_modes<I, S>(expected_modes: I) -> ModeResult<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let modes: Vec<String> = expected_modes.into_iter().map(Into::into).collect();
    if modes.is_empty() {
        return Err(ConfigError::EmptyModes.into());
    }

    let mut seen = HashSet::with_capacity(modes.len());
    for name in &modes {
        check_mode_name(name)?;
        if !seen.insert(name.as_str()) {
            return Err(ConfigError::DuplicateMode(name.clone()).into());
        }
    }
    Ok(modes)
}

fn check_mode_name(name: &str) -> Result<(), ConfigError> {
    let message = if name.is_empty() {
        "mode names must not be empty"
    } else if name.contains(['/', '\\']) {
        "mode names must not contain path separators"
    } else if name == "." || name == ".." {
        "mode names must not be '.' or '..'"
    } else {
        return Ok(());
    };
    Err(ConfigError::InvalidModeName {
        name: name.to_string(),
        message: message.to_string(),
    })
}
