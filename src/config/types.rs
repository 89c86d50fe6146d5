// set-app-mode: Per-Environment File Selection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings sections.
//!
//! ```text
//! [global]  dry, preflight
//! [modes]   expected, mode, placeholder
//! [[groups]] src, dest          (see group::GroupMapping)
//! ```

use serde::{Deserialize, Serialize};

use crate::group::DEFAULT_PLACEHOLDER;

/// Global run options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalSettings {
    /// Log filesystem mutations instead of performing them.
    pub dry: bool,
    /// Verify every group before mutating any of them.
    pub preflight: bool,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            dry: false,
            preflight: true,
        }
    }
}

/// Mode selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModesSettings {
    /// Ordered universe of valid modes.
    pub expected: Vec<String>,
    /// Selected mode; `--mode` overrides it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Token replaced by a mode name in group templates.
    pub placeholder: String,
}

impl Default for ModesSettings {
    fn default() -> Self {
        Self {
            expected: Vec::new(),
            mode: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}
