// set-app-mode: Per-Environment File Selection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   apply, check, list, options
//! ```

pub mod apply;
pub mod check;
pub mod list;
pub mod options;

#[cfg(test)]
mod tests;
