// set-app-mode: Per-Environment File Selection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Apply command.
//!
//! ```text
//! Settings
//!   |-- preflight (global.preflight) --> abort before any change
//!   |-- build_collection (validated)
//!   `-- ModeExecutor::apply_all
//! ```

use anyhow::{Context, bail};
use tracing::info;

use crate::cmd::check::preflight;
use crate::config::Settings;
use crate::error::Result;
use crate::executor::ModeExecutor;
use crate::utility::fs::{DryRunFileSystem, FileSystem, RealFileSystem};

/// Main handler for the apply command on the real filesystem.
///
/// `global.dry` swaps in a [`DryRunFileSystem`].
///
/// # Errors
///
/// Returns an error if the settings are incomplete, preflight fails, or a
/// group fails to apply.
pub fn run_apply_command(settings: &Settings) -> Result<()> {
    if settings.global.dry {
        apply(settings, &DryRunFileSystem::new(RealFileSystem))
    } else {
        apply(settings, &RealFileSystem)
    }
}

/// Apply the configured mode through `fs`.
///
/// # Errors
///
/// See [`run_apply_command`].
pub fn apply(settings: &Settings, fs: &dyn FileSystem) -> Result<()> {
    if settings.global.preflight {
        let failures = preflight(settings, fs)?;
        if !failures.is_empty() {
            bail!(
                "{} group(s) failed preflight, no files were changed",
                failures.len()
            );
        }
    }

    let mode_config = settings
        .mode_config()
        .context("invalid mode selection")?;
    let groups = settings
        .build_collection(&mode_config, fs)
        .context("failed to build mode groups")?;

    let mut executor = ModeExecutor::new(&mode_config, &groups, fs);
    executor
        .apply_all()
        .with_context(|| format!("failed to apply mode '{}'", mode_config.mode()))?;

    info!(
        mode = mode_config.mode(),
        groups = groups.len(),
        "mode applied"
    );
    Ok(())
}
