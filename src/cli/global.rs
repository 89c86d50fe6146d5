// set-app-mode: Per-Environment File Selection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Settings files (can repeat)
//! --mode NAME       ← modes.mode override
//! --dry             ← Log filesystem mutations only
//! --set KEY=VAL     ← Direct settings override (can repeat)
//! --log-level N     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity (defaults to --log-level)
//!
//! Precedence: --mode > --set > APPMODE_* > --config > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to a TOML settings file. Can be specified multiple times; later
    /// files override earlier ones.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        action = clap::ArgAction::Append
    )]
    pub configs: Vec<PathBuf>,

    /// Mode to apply, overriding `modes.mode`.
    #[arg(short = 'm', long = "mode", value_name = "NAME", global = true)]
    pub mode: Option<String>,

    /// Logs filesystem changes instead of performing them.
    #[arg(long, global = true)]
    pub dry: bool,

    /// Sets an option, such as 'modes.placeholder=@ENV@'.
    /// Can be specified multiple times.
    #[arg(
        short = 's',
        long = "set",
        value_name = "OPTION",
        global = true,
        action = clap::ArgAction::Append
    )]
    pub options: Vec<String>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(
        short = 'l',
        long = "log-level",
        value_name = "LEVEL",
        global = true,
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, defaults to --log-level.
    #[arg(
        long = "file-log-level",
        value_name = "LEVEL",
        global = true,
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Do not load `set-app-mode.toml` from the working directory.
    #[arg(long = "no-default-config", global = true)]
    pub no_default_config: bool,
}

impl GlobalOptions {
    /// Converts command-line options to settings overrides, in the order
    /// they should be applied.
    #[must_use]
    pub fn to_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if self.dry {
            overrides.push("global.dry=true".to_string());
        }

        if let Some(ref mode) = self.mode {
            overrides.push(format!("modes.mode={mode}"));
        }

        overrides
    }
}
