// set-app-mode: Per-Environment File Selection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Check command: preflight every group without changing files.

use anyhow::{Context, bail};
use tracing::{error, info};

use crate::config::Settings;
use crate::error::Result;
use crate::executor::{GroupFailure, ModeExecutor};
use crate::utility::fs::FileSystem;

/// Run preflight over every configured group and log each failure.
///
/// # Errors
///
/// Returns an error if the settings are incomplete or any group fails.
pub fn run_check_command(settings: &Settings, fs: &dyn FileSystem) -> Result<()> {
    let failures = preflight(settings, fs)?;
    if !failures.is_empty() {
        bail!("{} group(s) failed preflight", failures.len());
    }
    info!("all groups ready");
    Ok(())
}

/// Resolve every group and return the preflight failures, logging each one.
///
/// # Errors
///
/// Returns an error if the mode selection or a template is invalid.
pub fn preflight(settings: &Settings, fs: &dyn FileSystem) -> Result<Vec<GroupFailure>> {
    let mode_config = settings
        .mode_config()
        .context("invalid mode selection")?;
    let groups = settings
        .resolve_collection(&mode_config)
        .context("failed to resolve mode groups")?;

    let failures = ModeExecutor::new(&mode_config, &groups, fs).preflight();
    for failure in &failures {
        error!("{failure}");
    }
    Ok(failures)
}
