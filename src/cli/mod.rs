// set-app-mode: Per-Environment File Selection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for set-app-mode using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! set-app-mode [global options] <command>
//! apply
//! check
//! list [--json]
//! options
//! version
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Args, Parser, Subcommand};

/// Promote per-environment file variants for a build mode.
#[derive(Debug, Parser)]
#[command(
    name = "set-app-mode",
    author,
    version,
    about = "Promote per-environment file variants for a build mode",
    long_about = "set-app-mode Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  For every configured group, copies the variant of the selected\n\
                  mode (e.g. build/config.prod.js) to its mode-stripped name\n\
                  (build/config.js) and deletes all per-mode variants.",
    after_help = "SETTINGS:\n\n\
                  Settings are read from every --config file in order, then from\n\
                  set-app-mode.toml in the current directory if present (disable\n\
                  with --no-default-config), then from APPMODE_* environment\n\
                  variables, then from --set and --mode."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Verifies every group without changing any file.
    Check,

    /// Lists the resolved files of every group.
    List(ListArgs),

    /// Applies the selected mode to every group.
    Apply,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Prints JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
