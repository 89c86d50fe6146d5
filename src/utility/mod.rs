// set-app-mode: Per-Environment File Selection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   FileSystem trait: exists(), list_dir(), copy(), delete()
//!   RealFileSystem, DryRunFileSystem
//! ```

pub mod fs;
