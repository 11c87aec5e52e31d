// logsweep/src/main.rs
//! logsweep entry point.
//!
//! Parses the command line, sets up logging and the theme, loads the pattern
//! settings, and dispatches to the chosen subcommand.

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use std::process::ExitCode;

use logsweep::cli::{Cli, Commands};
use logsweep::commands::{error_msg, patterns, remove};
use logsweep::logger;
use logsweep::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};
use logsweep_core::{default_settings_path, LoggerSettings};

fn run(cli: Cli, theme_map: &ThemeMap) -> Result<()> {
    let settings_path = cli.settings.clone().unwrap_or_else(default_settings_path);
    debug!("Settings path: {}", settings_path.display());

    match &cli.command {
        Commands::Remove(cmd) => {
            let settings = LoggerSettings::load_or_default(&settings_path)
                .with_context(|| format!("Failed to load settings from {}", settings_path.display()))?;
            let opts = remove::RemoveOptions::from_command(cmd, cli.quiet);
            remove::run_remove(&settings, opts, theme_map)
        }
        Commands::Patterns(cmd) => patterns::run_patterns(cmd, &settings_path, theme_map, cli.quiet),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug, cli.disable_debug));

    let theme_map = match build_theme_map(cli.theme.as_ref()).context("Theme error") {
        Ok(map) => map,
        Err(e) => {
            let fallback = ThemeStyle::default_theme_map();
            error_msg(format!("{:#}", e), &fallback);
            return ExitCode::FAILURE;
        }
    };

    match run(cli, &theme_map) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error_msg(format!("{:#}", e), &theme_map);
            ExitCode::FAILURE
        }
    }
}
