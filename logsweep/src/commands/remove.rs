// logsweep/src/commands/remove.rs
//! The `remove` command: strips configured log statements from a file, a
//! project, or stdin.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use logsweep_core::{
    headless_remove_logs, run_with_options, DiscoveryOptions, Document, LoggerSettings,
    PresetScope, RegexReplaceEngine, RemovalOptions, RemovalOutcome, RemovalReport, ScopePrompt,
    Workspace,
};

use crate::cli::RemoveCommand;
use crate::commands::{info_msg, success_msg, warn_msg};
use crate::ui::diff_viewer;
use crate::ui::removal_summary;
use crate::ui::scope_prompt::TerminalScopePrompt;
use crate::ui::theme::ThemeMap;

/// Options for the `remove` runner, detached from clap.
#[derive(Debug, Clone, Default)]
pub struct RemoveOptions {
    pub file: Option<PathBuf>,
    pub scope: Option<logsweep_core::RemovalScope>,
    pub project_root: PathBuf,
    pub discovery: DiscoveryOptions,
    pub dry_run: bool,
    pub diff: bool,
    pub json: bool,
    pub no_summary: bool,
    pub skip_empty_slots: bool,
    pub quiet: bool,
}

impl RemoveOptions {
    pub fn from_command(cmd: &RemoveCommand, quiet: bool) -> Self {
        Self {
            file: cmd.file.clone(),
            scope: cmd.scope.map(Into::into),
            project_root: cmd.project_root.clone(),
            discovery: DiscoveryOptions {
                extensions: cmd.extensions.clone(),
                include_hidden: cmd.hidden,
                respect_gitignore: !cmd.no_ignore,
                ..DiscoveryOptions::default()
            },
            dry_run: cmd.dry_run,
            diff: cmd.diff,
            json: cmd.json,
            no_summary: cmd.no_summary,
            skip_empty_slots: cmd.skip_empty_slots,
            quiet,
        }
    }

    fn removal_options(&self) -> RemovalOptions {
        RemovalOptions {
            skip_degenerate: self.skip_empty_slots,
        }
    }

    fn reads_stdin(&self) -> bool {
        self.file.as_deref() == Some(Path::new("-"))
    }
}

/// The main operation runner for `logsweep remove`.
pub fn run_remove(settings: &LoggerSettings, opts: RemoveOptions, theme_map: &ThemeMap) -> Result<()> {
    info!("Starting remove operation.");
    if opts.reads_stdin() {
        return run_stdin(settings, &opts, theme_map);
    }

    let mut workspace = Workspace::new().with_project_root(&opts.project_root, opts.discovery.clone());
    if let Some(path) = &opts.file {
        workspace = workspace.with_active_document(Document::load(path)?);
    }

    let mut prompt: Box<dyn ScopePrompt + '_> = match opts.scope {
        Some(scope) => Box::new(PresetScope(Some(scope))),
        None => Box::new(TerminalScopePrompt::new(
            io::stdin().lock(),
            io::stderr(),
            theme_map,
            io::stderr().is_terminal(),
        )),
    };
    let mut engine = RegexReplaceEngine::new();

    let outcome = run_with_options(
        settings,
        prompt.as_mut(),
        &mut workspace,
        &mut engine,
        &opts.removal_options(),
    )
    .context("Removal failed")?;

    match outcome {
        RemovalOutcome::Cancelled => {
            if !opts.quiet {
                info_msg("Removal cancelled; no files were changed.", theme_map);
            }
        }
        RemovalOutcome::NoTarget => {
            warn_msg("Nothing to clean for the selected scope; no files were changed.", theme_map);
        }
        RemovalOutcome::Applied(report) => {
            handle_applied(&mut workspace, &report, &opts, theme_map)?;
        }
    }

    info!("Remove operation completed.");
    Ok(())
}

fn handle_applied(
    workspace: &mut Workspace,
    report: &RemovalReport,
    opts: &RemoveOptions,
    theme_map: &ThemeMap,
) -> Result<()> {
    let changed: Vec<String> = workspace
        .documents()
        .filter(|doc| doc.is_modified())
        .map(|doc| doc.path().display().to_string())
        .collect();
    debug!("{} document(s) changed: {:?}", changed.len(), changed);

    if opts.diff {
        let stdout = io::stdout();
        let supports_color = stdout.is_terminal();
        let mut writer = stdout.lock();
        for doc in workspace.documents().filter(|doc| doc.is_modified()) {
            diff_viewer::print_diff(
                &doc.path().display().to_string(),
                doc.original(),
                doc.content(),
                &mut writer,
                theme_map,
                supports_color,
            )?;
        }
    }

    if opts.json {
        let value = serde_json::json!({
            "scope": report.scope,
            "dry_run": opts.dry_run,
            "total_occurrences": report.total_occurrences(),
            "files": changed,
            "slots": report.items,
        });
        let mut stdout = io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &value).context("Failed to write JSON report")?;
        writeln!(stdout)?;
    }

    if !opts.no_summary && !opts.quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        removal_summary::print_summary(report, &mut io::stderr(), theme_map, stderr_supports_color)?;
    }

    if !report.has_changes() {
        if !opts.quiet {
            info_msg("No log statements found; no files were changed.", theme_map);
        }
        return Ok(());
    }

    let total = report.total_occurrences();
    if opts.dry_run {
        if !opts.quiet {
            info_msg(
                format!(
                    "Dry run: {} log statement(s) would be removed from {} file(s).",
                    total,
                    changed.len()
                ),
                theme_map,
            );
        }
        return Ok(());
    }

    let written = workspace.commit().context("Failed to write cleaned files")?;
    if !opts.quiet {
        success_msg(
            format!("Removed {} log statement(s) from {} file(s).", total, written),
            theme_map,
        );
    }
    Ok(())
}

fn run_stdin(settings: &LoggerSettings, opts: &RemoveOptions, theme_map: &ThemeMap) -> Result<()> {
    if opts.diff || opts.json || opts.scope.is_some() {
        warn_msg("--scope, --diff and --json are ignored when reading stdin.", theme_map);
    }

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read from stdin")?;

    let (cleaned, report) = headless_remove_logs(settings, &input, &opts.removal_options())?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(cleaned.as_bytes())?;
    stdout.flush()?;

    if !opts.no_summary && !opts.quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        removal_summary::print_summary(&report, &mut io::stderr(), theme_map, stderr_supports_color)?;
    }
    Ok(())
}
