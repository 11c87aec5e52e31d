// logsweep/src/cli.rs
//! This file defines the command-line interface (CLI) for the logsweep application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand, ValueEnum};
use logsweep_core::{RemovalScope, SETTINGS_PATH_ENV};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "logsweep",
    author = "Obscura Tech",
    version = env!("CARGO_PKG_VERSION"),
    about = "Strip inserted console-logger statements from a file or a whole project",
    long_about = "logsweep removes the console-logger lines you inserted while debugging. Nine configurable templates describe the log statements; each is compiled into a line-removal pattern and applied to one file or to every file under a project root.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the logsweep crates to DEBUG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Explicitly disable debug logging, even if RUST_LOG is set to DEBUG
    #[arg(long = "disable-debug", global = true, help = "Disable debug logging, overriding RUST_LOG.")]
    pub disable_debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// Path to the pattern settings file.
    #[arg(long = "settings", value_name = "FILE", global = true, env = SETTINGS_PATH_ENV, help = "Path to the pattern settings file (YAML).")]
    pub settings: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `logsweep` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Removes log statements from a file or a whole project.
    #[command(about = "Removes log statements from a file or a whole project.")]
    Remove(RemoveCommand),

    /// Inspects and edits the nine log templates.
    #[command(subcommand, about = "Inspects and edits the nine log templates.")]
    Patterns(PatternsCommand),
}

/// Arguments for the `remove` command.
#[derive(Parser, Debug)]
pub struct RemoveCommand {
    /// The current document. `-` reads stdin and writes the cleaned text to stdout.
    #[arg(value_name = "FILE", help = "The file to clean; '-' reads stdin and writes to stdout.")]
    pub file: Option<PathBuf>,

    /// Skip the interactive prompt and use this scope.
    #[arg(long, short = 's', value_enum, value_name = "SCOPE", help = "Scope to clean; prompts when omitted.")]
    pub scope: Option<ScopeChoice>,

    /// Root of the project for the `project` scope.
    #[arg(long = "project-root", value_name = "DIR", default_value = ".", help = "Root directory for a project-wide removal.")]
    pub project_root: PathBuf,

    /// Only visit files with these extensions (comma-separated).
    #[arg(long = "ext", value_delimiter = ',', value_name = "EXT", help = "Only visit files with these extensions (comma-separated).")]
    pub extensions: Vec<String>,

    /// Include hidden files and directories in a project run.
    #[arg(long, help = "Include hidden files and directories in a project run.")]
    pub hidden: bool,

    /// Ignore .gitignore and .ignore files in a project run.
    #[arg(long = "no-ignore", help = "Do not honor .gitignore and .ignore files.")]
    pub no_ignore: bool,

    /// Compute the result without writing any file.
    #[arg(long = "dry-run", short = 'n', help = "Show what would be removed without writing any file.")]
    pub dry_run: bool,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', conflicts_with = "json", help = "Show a unified diff to highlight the changes made.")]
    pub diff: bool,

    /// Print the removal report as JSON to stdout.
    #[arg(long, help = "Print the removal report as JSON to stdout.")]
    pub json: bool,

    /// Suppress the removal summary.
    #[arg(long = "no-summary", help = "Suppress the removal summary.")]
    pub no_summary: bool,

    /// Leave out slots whose template is empty or wildcard-only.
    #[arg(long = "skip-empty-slots", help = "Skip slots whose template would match every line.")]
    pub skip_empty_slots: bool,
}

/// Subcommands for the `patterns` command.
#[derive(Subcommand, Debug)]
pub enum PatternsCommand {
    #[command(about = "Lists the nine template slots.")]
    List {
        /// Also show the compiled regular expression of each slot.
        #[arg(long, help = "Also show the compiled pattern of each slot.")]
        compiled: bool,
    },
    #[command(about = "Replaces the template of one slot.")]
    Set {
        /// Slot index, 0 to 8.
        #[arg(value_name = "SLOT", help = "Slot index, 0 to 8.")]
        slot: usize,
        /// The new template.
        #[arg(value_name = "TEMPLATE", allow_hyphen_values = true, help = "The new template, e.g. \"console.log('$$', $$);\".")]
        template: String,
    },
    #[command(about = "Restores one slot, or every slot, to its built-in template.")]
    Reset {
        /// Slot index; resets every slot when omitted.
        #[arg(value_name = "SLOT", help = "Slot index; resets every slot when omitted.")]
        slot: Option<usize>,
    },
    #[command(about = "Prints the pattern compiled from a template.")]
    Compile {
        /// The template to compile.
        #[arg(value_name = "TEMPLATE", allow_hyphen_values = true, help = "The template to compile.")]
        template: String,
    },
}

/// Scope selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ScopeChoice {
    /// Only the given file.
    File,
    /// Every file under the project root.
    Project,
}

impl From<ScopeChoice> for RemovalScope {
    fn from(choice: ScopeChoice) -> Self {
        match choice {
            ScopeChoice::File => RemovalScope::CurrentDocument,
            ScopeChoice::Project => RemovalScope::WholeProject,
        }
    }
}
