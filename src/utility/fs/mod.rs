// set-app-mode: Per-Environment File Selection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem capability used by the mode engine.
//!
//! ```text
//! FileSystem (trait)
//!   exists()   list_dir()   copy()   delete()
//!      |
//!      +-- RealFileSystem     std::fs
//!      +-- DryRunFileSystem   reads pass through, writes logged only
//!      +-- MemoryFileSystem   in-memory map (unit tests)
//! ```

#[cfg(test)]
pub(crate) mod memory;

#[cfg(test)]
mod tests;

use std::path::Path;

use tracing::{debug, info};

use crate::error::FsError;

/// Result type for filesystem operations.
pub type FsResult<T> = std::result::Result<T, FsError>;

/// Abstraction over the filesystem primitives the engine needs.
///
/// The engine never touches `std::fs` directly, so tests can run against an
/// in-memory implementation and the CLI can swap in [`DryRunFileSystem`].
pub trait FileSystem: std::fmt::Debug {
    /// Returns `true` if `path` exists.
    fn exists(&self, path: &Path) -> bool;

    /// Returns the names of the regular files directly inside `dir`, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` cannot be read.
    fn list_dir(&self, dir: &Path) -> FsResult<Vec<String>>;

    /// Copies `src` to `dest`, overwriting `dest` if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if `src` cannot be read or `dest` cannot be written.
    fn copy(&self, src: &Path, dest: &Path) -> FsResult<()>;

    /// Deletes the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be removed.
    fn delete(&self, path: &Path) -> FsResult<()>;
}

/// Production [`FileSystem`] backed by [`std::fs`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dir(&self, dir: &Path) -> FsResult<Vec<String>> {
        let entries = std::fs::read_dir(dir).map_err(|e| FsError::io("read_dir", dir, e))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FsError::io("read_dir", dir, e))?;
            if !entry.path().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn copy(&self, src: &Path, dest: &Path) -> FsResult<()> {
        debug!(src = %src.display(), dest = %dest.display(), "copy");
        std::fs::copy(src, dest).map_err(|e| {
            if src.is_file() {
                FsError::copy(src, dest, e)
            } else {
                FsError::io("copy", src, e)
            }
        })?;
        Ok(())
    }

    fn delete(&self, path: &Path) -> FsResult<()> {
        debug!(path = %path.display(), "delete");
        std::fs::remove_file(path).map_err(|e| FsError::io("delete", path, e))
    }
}

/// [`FileSystem`] that reads through `inner` but only logs mutations.
#[derive(Debug, Default, Clone)]
pub struct DryRunFileSystem<F = RealFileSystem> {
    inner: F,
}

impl<F: FileSystem> DryRunFileSystem<F> {
    pub const fn new(inner: F) -> Self {
        Self { inner }
    }

    /// The wrapped filesystem.
    pub const fn inner(&self) -> &F {
        &self.inner
    }
}

impl<F: FileSystem> FileSystem for DryRunFileSystem<F> {
    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn list_dir(&self, dir: &Path) -> FsResult<Vec<String>> {
        self.inner.list_dir(dir)
    }

    fn copy(&self, src: &Path, dest: &Path) -> FsResult<()> {
        if !self.inner.exists(src) {
            return Err(FsError::NotFound(src.display().to_string()));
        }
        info!(src = %src.display(), dest = %dest.display(), "[dry] would copy");
        Ok(())
    }

    fn delete(&self, path: &Path) -> FsResult<()> {
        info!(path = %path.display(), "[dry] would delete");
        Ok(())
    }
}
