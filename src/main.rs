// set-app-mode: Per-Environment File Selection
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Settings --> Command Dispatch
//!   Apply | Check | List | Options | Version
//! ```

use std::process::ExitCode;

use set_app_mode::cli::global::GlobalOptions;
use set_app_mode::cli::{self, Command};
use set_app_mode::cmd::apply::run_apply_command;
use set_app_mode::cmd::check::run_check_command;
use set_app_mode::cmd::list::run_list_command;
use set_app_mode::cmd::options::run_options_command;
use set_app_mode::config::loader::SettingsLoader;
use set_app_mode::config::{DEFAULT_SETTINGS_FILE, ENV_PREFIX, Settings};
use set_app_mode::error::Result;
use set_app_mode::logging::{LogConfig, LogLevel, init_logging};
use set_app_mode::utility::fs::RealFileSystem;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => build_settings_loader(&cli.global).and_then(|loader| {
            let sources = loader.format_loaded_files();
            loader
                .build()
                .map(|settings| run_options_command(&settings, &sources))
        }),
        Some(Command::Check) => load_settings(&cli.global)
            .and_then(|settings| run_check_command(&settings, &RealFileSystem)),
        Some(Command::List(args)) => {
            load_settings(&cli.global).and_then(|settings| run_list_command(args, &settings))
        }
        Some(Command::Apply) => load_settings(&cli.global).and_then(|s| run_apply_command(&s)),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_settings_loader(global: &GlobalOptions) -> Result<SettingsLoader> {
    let mut loader = Settings::builder();
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_SETTINGS_FILE);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for assignment in global.to_overrides() {
        loader = loader.set_assignment(&assignment)?;
    }
    Ok(loader)
}

fn load_settings(global: &GlobalOptions) -> Result<Settings> {
    build_settings_loader(global)?.build()
}
