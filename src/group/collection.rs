// set-app-mode: Per-Environment File Selection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::debug;

use super::{DEFAULT_PLACEHOLDER, GroupMapping, ModeGroupConfig};
use crate::error::{ConfigError, ModeError, ModeResult};
use crate::utility::fs::FileSystem;

/// Ordered mode groups built from the configured mappings.
///
/// Construction is fail-fast: the first group that fails to resolve or
/// validate is returned as the error and no collection is produced. Two
/// groups may not share a variant or a mode-stripped output in the same
/// directory.
#[derive(Debug, Clone, Default)]
pub struct ModeGroupConfigCollection {
    configs: Vec<ModeGroupConfig>,
}

impl ModeGroupConfigCollection {
    /// Build one group per mapping using the default placeholder.
    ///
    /// # Errors
    ///
    /// Returns the first group construction error.
    pub fn new(
        mappings: &[GroupMapping],
        expected_modes: &[String],
        fs: &dyn FileSystem,
    ) -> ModeResult<Self> {
        Self::with_placeholder(mappings, expected_modes, DEFAULT_PLACEHOLDER, fs)
    }

    /// Build one group per mapping, in input order.
    ///
    /// # Errors
    ///
    /// Returns the first group construction error, or a configuration error
    /// for overlapping groups.
    pub fn with_placeholder(
        mappings: &[GroupMapping],
        expected_modes: &[String],
        placeholder: &str,
        fs: &dyn FileSystem,
    ) -> ModeResult<Self> {
        let configs = mappings
            .iter()
            .map(|mapping| {
                ModeGroupConfig::with_placeholder(mapping, expected_modes, placeholder, fs)
            })
            .collect::<ModeResult<Vec<_>>>()?;
        check_overlaps(&configs)?;

        debug!(groups = configs.len(), "built mode group collection");
        Ok(Self { configs })
    }

    /// Resolve every mapping without consulting the filesystem.
    ///
    /// Groups are left unvalidated so that a later
    /// [`ModeExecutor::preflight`](crate::executor::ModeExecutor::preflight)
    /// can report every missing variant instead of only the first.
    ///
    /// # Errors
    ///
    /// Returns the first template or mode list error, or a configuration
    /// error for overlapping groups.
    pub fn resolve(
        mappings: &[GroupMapping],
        expected_modes: &[String],
        placeholder: &str,
    ) -> ModeResult<Self> {
        let configs = mappings
            .iter()
            .map(|mapping| ModeGroupConfig::resolve(mapping, expected_modes, placeholder))
            .collect::<ModeResult<Vec<_>>>()?;
        check_overlaps(&configs)?;
        Ok(Self { configs })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// The group at `index`.
    ///
    /// # Errors
    ///
    /// Returns an index error if `index` is out of bounds.
    pub fn get(&self, index: usize) -> ModeResult<&ModeGroupConfig> {
        self.configs.get(index).ok_or(ModeError::Index {
            index,
            len: self.configs.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModeGroupConfig> {
        self.configs.iter()
    }
}

impl<'a> IntoIterator for &'a ModeGroupConfigCollection {
    type Item = &'a ModeGroupConfig;
    type IntoIter = std::slice::Iter<'a, ModeGroupConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.configs.iter()
    }
}

/// Reject two groups touching the same path in the same directory.
fn check_overlaps(configs: &[ModeGroupConfig]) -> Result<(), ConfigError> {
    let mut claimed: HashMap<PathBuf, usize> = HashMap::new();
    for (index, group) in configs.iter().enumerate() {
        let stripped = group.stripped_name();
        let names = group
            .all_resolved_files()
            .into_iter()
            .chain(std::iter::once(stripped.as_str()));
        for name in names {
            let path = group.dest_dir().join(name);
            match claimed.get(&path) {
                Some(&first) if first != index => {
                    return Err(ConfigError::OverlappingGroups {
                        first,
                        second: index,
                        path: path.display().to_string(),
                    });
                }
                Some(_) => {}
                None => {
                    claimed.insert(path, index);
                }
            }
        }
    }
    Ok(())
}
