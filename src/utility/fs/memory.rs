// set-app-mode: Per-Environment File Selection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{FileSystem, FsResult};
use crate::error::FsError;

/// In-memory [`FileSystem`] for unit tests.
///
/// Directories exist implicitly as parents of stored files. Every call bumps
/// an operation counter so tests can assert that nothing touched the disk.
#[derive(Debug, Default)]
pub(crate) struct MemoryFileSystem {
    files: RefCell<BTreeMap<PathBuf, String>>,
    ops: Cell<usize>,
}

impl MemoryFileSystem {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub(crate) fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files
            .borrow_mut()
            .insert(path.into(), content.to_string());
        self
    }

    /// Adds one file per mode by substituting `{{MODE}}` in `template`.
    #[must_use]
    pub(crate) fn with_variants(self, dir: &str, template: &str, modes: &[&str]) -> Self {
        for mode in modes {
            let name = template.replace("{{MODE}}", mode);
            self.files
                .borrow_mut()
                .insert(Path::new(dir).join(name), format!("{template}:{mode}"));
        }
        self
    }

    pub(crate) fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    pub(crate) fn file_names(&self, dir: impl AsRef<Path>) -> Vec<String> {
        let dir = dir.as_ref();
        self.files
            .borrow()
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
            .collect()
    }

    pub(crate) fn ops(&self) -> usize {
        self.ops.get()
    }

    fn tick(&self) {
        self.ops.set(self.ops.get() + 1);
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.tick();
        let files = self.files.borrow();
        files.contains_key(path) || files.keys().any(|p| p.starts_with(path))
    }

    fn list_dir(&self, dir: &Path) -> FsResult<Vec<String>> {
        self.tick();
        Ok(self.file_names(dir))
    }

    fn copy(&self, src: &Path, dest: &Path) -> FsResult<()> {
        self.tick();
        let content = self
            .read(src)
            .ok_or_else(|| FsError::NotFound(src.display().to_string()))?;
        self.files.borrow_mut().insert(dest.to_path_buf(), content);
        Ok(())
    }

    fn delete(&self, path: &Path) -> FsResult<()> {
        self.tick();
        self.files
            .borrow_mut()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| FsError::NotFound(path.display().to_string()))
    }
}
