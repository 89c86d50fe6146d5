// set-app-mode: Per-Environment File Selection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command: show how every group resolves for the expected modes.

use anyhow::Context;
use serde::Serialize;

use crate::cli::ListArgs;
use crate::config::Settings;
use crate::error::Result;

/// One group as printed by `list`.
#[derive(Debug, Serialize)]
pub struct GroupListing {
    pub template: String,
    pub dest: String,
    pub files: Vec<ModeFile>,
    pub stripped: String,
}

#[derive(Debug, Serialize)]
pub struct ModeFile {
    pub mode: String,
    pub file: String,
    pub selected: bool,
}

/// Main handler for list command.
///
/// # Errors
///
/// Returns an error if the settings are incomplete or a template is invalid.
pub fn run_list_command(args: &ListArgs, settings: &Settings) -> Result<()> {
    let listings = group_listings(settings)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&listings)?);
    } else if listings.is_empty() {
        println!("No groups configured");
    } else {
        print!("{}", format_listings(&listings));
    }
    Ok(())
}

/// Resolve every configured group without touching the filesystem.
///
/// # Errors
///
/// Returns an error if the settings are incomplete or a template is invalid.
pub fn group_listings(settings: &Settings) -> Result<Vec<GroupListing>> {
    let mode_config = settings
        .mode_config()
        .context("invalid mode selection")?;
    let groups = settings
        .resolve_collection(&mode_config)
        .context("failed to resolve mode groups")?;

    Ok(groups
        .iter()
        .map(|group| GroupListing {
            template: group.template().to_string(),
            dest: group.dest_dir().display().to_string(),
            files: group
                .modes()
                .zip(group.all_resolved_files())
                .map(|(mode, file)| ModeFile {
                    mode: mode.to_string(),
                    file: file.to_string(),
                    selected: mode == mode_config.mode(),
                })
                .collect(),
            stripped: group.stripped_name(),
        })
        .collect())
}

/// Render listings as indented text, one block per group.
#[must_use]
pub fn format_listings(listings: &[GroupListing]) -> String {
    let mut out = String::new();
    for listing in listings {
        out.push_str(&format!("{} -> {}\n", listing.template, listing.dest));
        for file in &listing.files {
            let marker = if file.selected { '*' } else { ' ' };
            out.push_str(&format!("  {marker} {:<10} {}\n", file.mode, file.file));
        }
        out.push_str(&format!("  = {}\n", listing.stripped));
    }
    out
}
