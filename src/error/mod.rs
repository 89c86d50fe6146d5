// set-app-mode: Per-Environment File Selection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                 ModeError (~24 bytes)
//!                        |
//!   +--------+--------+--+------+---------+--------+
//!   v        v        v         v         v        v
//! Config  Template  Missing  Unknown    Index     Fs
//!  Box      Box     ModeFile  Mode    {idx,len}   Box
//!                     Box     Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Config    EmptyModes, DuplicateMode, InvalidMode, MissingGroups, ...
//!   Template  NoPlaceholder, MultiplePlaceholders, EmptyStrippedName, ...
//!   Fs        NotFound, Io
//! ```
//!
//! The engine reports [`ModeError`]; command handlers and `main` work with
//! `anyhow` through [`Result`].

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ModeError`].
pub type ModeResult<T> = std::result::Result<T, ModeError>;

/// Top-level error type of the mode engine.
///
/// Large variants are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum ModeError {
    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Malformed template filename.
    #[error("template error: {0}")]
    Template(#[from] Box<TemplateError>),

    /// An expected per-mode file is absent on disk.
    #[error("missing mode file: {0}")]
    MissingModeFile(#[from] Box<MissingModeFile>),

    /// Mode not recognized by a group.
    #[error("unknown mode '{0}'")]
    UnknownMode(Box<str>),

    /// Out-of-range collection access.
    #[error("group index {index} out of bounds (len {len})")]
    Index { index: usize, len: usize },

    /// Filesystem capability failed.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),
}

impl ModeError {
    /// Create a [`ModeError::UnknownMode`].
    pub fn unknown_mode(mode: impl Into<String>) -> Self {
        Self::UnknownMode(mode.into().into_boxed_str())
    }

    /// Short machine-friendly name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "configuration",
            Self::Template(_) => "template",
            Self::MissingModeFile(_) => "missing-mode-file",
            Self::UnknownMode(_) => "unknown-mode",
            Self::Index { .. } => "index",
            Self::Fs(_) => "filesystem",
        }
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ModeError {
                fn from(err: $error) -> Self {
                    ModeError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    TemplateError => Template,
    MissingModeFile => MissingModeFile,
    FsError => Fs,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No expected modes were declared.
    #[error("expected modes must not be empty")]
    EmptyModes,

    /// The same mode name appears more than once.
    #[error("duplicate expected mode '{0}'")]
    DuplicateMode(String),

    /// A mode name is unusable as a filename fragment.
    #[error("invalid mode name '{name}': {message}")]
    InvalidModeName { name: String, message: String },

    /// Selected mode is not one of the expected modes.
    #[error("mode '{mode}' is not one of the expected modes [{expected}]")]
    InvalidMode { mode: String, expected: String },

    /// The mode group list was absent from the settings.
    #[error("no mode groups configured (missing [[groups]] section)")]
    MissingGroups,

    /// Two groups would read or write the same file.
    #[error("groups {first} and {second} both claim '{path}'")]
    OverlappingGroups {
        first: usize,
        second: usize,
        path: String,
    },

    /// No mode was selected.
    #[error("no mode selected (set modes.mode or pass --mode)")]
    MissingMode,

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Failed to load or parse the settings sources.
    #[error("failed to load settings: {0}")]
    Load(String),
}

// --- Template Errors ---

/// Template filename errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The placeholder token itself is empty.
    #[error("placeholder token must not be empty")]
    EmptyPlaceholder,

    /// The template contains no placeholder.
    #[error("template '{template}' does not contain placeholder '{placeholder}'")]
    NoPlaceholder {
        template: String,
        placeholder: String,
    },

    /// The template contains the placeholder more than once.
    #[error("template '{template}' contains placeholder '{placeholder}' {count} times")]
    MultiplePlaceholders {
        template: String,
        placeholder: String,
        count: usize,
    },

    /// The placeholder appears in a directory component instead of the filename.
    #[error("placeholder must be in the file name, not the directory of '{0}'")]
    PlaceholderInDirectory(String),

    /// The template has no file name component.
    #[error("template '{0}' has no file name")]
    NoFileName(String),

    /// Stripping the placeholder leaves nothing.
    #[error("template '{0}' has an empty mode-stripped name")]
    EmptyStrippedName(String),

    /// Stripping the placeholder leaves only a file extension.
    #[error("template '{0}' would strip to a bare extension")]
    BareExtension(String),
}

// --- Missing Mode File ---

/// An expected per-mode file is absent at validation time.
#[derive(Debug, Error)]
#[error("no file for mode '{mode}' at {}", path.display())]
pub struct MissingModeFile {
    pub mode: String,
    pub path: PathBuf,
}

impl MissingModeFile {
    pub fn new(mode: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            mode: mode.into(),
            path: path.into(),
        }
    }
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// General I/O error.
    #[error("{op} failed on '{path}': {source}")]
    Io {
        op: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Copy failed after the source was found, so the destination is at fault.
    #[error("copy to '{dest}' from '{src}' failed: {source}")]
    Copy {
        src: String,
        dest: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Wrap an I/O error raised by `op` on `path`.
    pub fn io(op: &'static str, path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::NotFound(path.display().to_string());
        }
        Self::Io {
            op,
            path: path.display().to_string(),
            source,
        }
    }

    /// Wrap an I/O error from copying an existing `src` to `dest`.
    pub fn copy(src: &Path, dest: &Path, source: std::io::Error) -> Self {
        Self::Copy {
            src: src.display().to_string(),
            dest: dest.display().to_string(),
            source,
        }
    }
}
