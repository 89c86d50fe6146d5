// set-app-mode: Per-Environment File Selection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings display.

use crate::config::Settings;

/// Display loaded settings sources followed by the effective settings.
pub fn run_options_command(settings: &Settings, sources: &[String]) {
    if sources.is_empty() {
        println!("No settings files loaded");
    } else {
        for line in sources {
            println!("{line}");
        }
    }
    println!();
    for line in settings.format_options() {
        println!("{line}");
    }
}
