// set-app-mode: Per-Environment File Selection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Applies the selected mode to every group.
//!
//! ```text
//! apply_all()
//!   for group in collection (in order):
//!     apply(i)
//!       1. file_for(mode)          UnknownMode
//!       2. verify(fs)              MissingModeFile (e.g. second run)
//!       3. copy  selected -> stripped
//!       4. delete every variant
//!
//! fail-fast: the first failing group stops the run,
//!            groups already applied stay applied.
//!
//! preflight(): checks 1-2 for every group, collecting all failures.
//! ```


use tracing::{info, info_span};

use crate::error::{ModeError, ModeResult};
use crate::group::{GroupState, ModeGroupConfig, ModeGroupConfigCollection};
use crate::mode::ModeConfig;
use crate::utility::fs::FileSystem;

/// A group that failed preflight.
#[derive(Debug)]
pub struct GroupFailure {
    pub index: usize,
    pub template: String,
    pub error: ModeError,
}

impl std::fmt::Display for GroupFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "group {} ({}): {}", self.index, self.template, self.error)
    }
}

/// Promotes the selected mode's variant in every group.
#[derive(Debug)]
pub struct ModeExecutor<'a> {
    config: &'a ModeConfig,
    mode_groups: &'a ModeGroupConfigCollection,
    fs: &'a dyn FileSystem,
    states: Vec<GroupState>,
}

impl<'a> ModeExecutor<'a> {
    pub fn new(
        config: &'a ModeConfig,
        mode_groups: &'a ModeGroupConfigCollection,
        fs: &'a dyn FileSystem,
    ) -> Self {
        let states = mode_groups.iter().map(ModeGroupConfig::state).collect();
        Self {
            config,
            mode_groups,
            fs,
            states,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ModeConfig {
        self.config
    }

    #[must_use]
    pub const fn mode_groups(&self) -> &ModeGroupConfigCollection {
        self.mode_groups
    }

    /// Lifecycle state of the group at `index`.
    ///
    /// # Errors
    ///
    /// Returns an index error if `index` is out of bounds.
    pub fn state(&self, index: usize) -> ModeResult<GroupState> {
        self.states.get(index).copied().ok_or(ModeError::Index {
            index,
            len: self.states.len(),
        })
    }

    /// Apply the selected mode to every group, in order.
    ///
    /// Stops at the first failing group; earlier groups are not rolled back.
    ///
    /// # Errors
    ///
    /// Returns the first group's error.
    pub fn apply_all(&mut self) -> ModeResult<()> {
        info!(
            mode = self.config.mode(),
            groups = self.mode_groups.len(),
            "applying mode"
        );
        for index in 0..self.mode_groups.len() {
            self.apply(index)?;
        }
        Ok(())
    }

    /// Apply the selected mode to the group at `index`.
    ///
    /// # Errors
    ///
    /// Returns an index error for a bad index, an unknown-mode error if the
    /// group does not know the selected mode, a missing-mode-file error if a
    /// variant is gone (for example after a previous apply), or a filesystem
    /// error from the copy or cleanup.
    pub fn apply(&mut self, index: usize) -> ModeResult<()> {
        let mode_groups = self.mode_groups;
        let group = mode_groups.get(index)?;
        let _span = info_span!("group", template = %group.template()).entered();

        let selected = group.file_for(self.config.mode())?;
        group.verify(self.fs)?;
        self.states[index] = GroupState::Validated;

        let dest_dir = group.dest_dir();
        let stripped = dest_dir.join(group.stripped_name());
        self.fs.copy(&dest_dir.join(selected), &stripped)?;
        info!(
            from = selected,
            to = %stripped.display(),
            "promoted mode file"
        );

        for file in group.all_resolved_files() {
            self.fs.delete(&dest_dir.join(file))?;
        }

        self.states[index] = GroupState::Applied;
        Ok(())
    }

    /// Check every group without touching any file.
    ///
    /// Unlike [`apply_all`](Self::apply_all) this does not stop at the first
    /// problem: every failing group is reported.
    #[must_use]
    pub fn preflight(&self) -> Vec<GroupFailure> {
        self.mode_groups
            .iter()
            .enumerate()
            .filter_map(|(index, group)| {
                let checked = group
                    .file_for(self.config.mode())
                    .and_then(|_| group.verify(self.fs));
                checked.err().map(|error| GroupFailure {
                    index,
                    template: group.template().to_string(),
                    error,
                })
            })
            .collect()
    }
}
