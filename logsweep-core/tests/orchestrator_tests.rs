// logsweep-core/tests/orchestrator_tests.rs
//! Scenario tests for the removal orchestrator, driven through the public API
//! with a recording replace engine and scripted scope prompts.

use anyhow::Result;
use std::fs;
use tempfile::tempdir;
use test_log::test;

use logsweep_core::{
    run, run_with_options, DiscoveryOptions, Document, DocumentCollection, LoggerSettings,
    PresetScope, RegexReplaceEngine, RemovalOptions, RemovalOutcome, RemovalScope,
    ReplaceEngine, ReplaceOutcome, ReplaceRequest, ScopePrompt, SweepError, Workspace,
    PATTERN_SLOTS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Document(String),
    Collection(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Call {
    slot: usize,
    pattern: String,
    replacement: String,
    global: bool,
    prompt_on_replace: bool,
    target: Target,
}

/// Records every request and leaves documents untouched.
#[derive(Default)]
struct RecordingEngine {
    calls: Vec<Call>,
}

impl RecordingEngine {
    fn record(&mut self, request: &ReplaceRequest, target: Target) {
        self.calls.push(Call {
            slot: request.pattern.slot,
            pattern: request.pattern.pattern.clone(),
            replacement: request.replacement.clone(),
            global: request.global,
            prompt_on_replace: request.prompt_on_replace,
            target,
        });
    }
}

impl ReplaceEngine for RecordingEngine {
    fn replace_in_document(
        &mut self,
        request: &ReplaceRequest,
        document: &mut Document,
    ) -> Result<ReplaceOutcome, SweepError> {
        self.record(request, Target::Document(document.path().display().to_string()));
        Ok(ReplaceOutcome::default())
    }

    fn replace_in_collection(
        &mut self,
        request: &ReplaceRequest,
        collection: &mut DocumentCollection,
    ) -> Result<ReplaceOutcome, SweepError> {
        self.record(request, Target::Collection(collection.len()));
        Ok(ReplaceOutcome::default())
    }
}

/// Counts how often it was asked.
struct CountingPrompt {
    answer: Option<RemovalScope>,
    asked: usize,
}

impl ScopePrompt for CountingPrompt {
    fn choose_scope(&mut self) -> Result<Option<RemovalScope>, SweepError> {
        self.asked += 1;
        Ok(self.answer)
    }
}

fn two_templates() -> Vec<String> {
    vec![
        "console.log('$$', $$);".to_string(),
        "console.log('{FN}:{LN}');".to_string(),
    ]
}

#[test]
fn issues_nine_requests_in_slot_order_for_current_document() -> Result<()> {
    let mut workspace = Workspace::new().with_active_document(Document::new("main.js", "x();\n"));
    let mut engine = RecordingEngine::default();

    let outcome = run(
        &two_templates(),
        &mut PresetScope(Some(RemovalScope::CurrentDocument)),
        &mut workspace,
        &mut engine,
    )?;

    assert!(matches!(outcome, RemovalOutcome::Applied(_)));
    assert_eq!(engine.calls.len(), PATTERN_SLOTS);
    let slots: Vec<usize> = engine.calls.iter().map(|c| c.slot).collect();
    assert_eq!(slots, (0..PATTERN_SLOTS).collect::<Vec<_>>());

    assert_eq!(engine.calls[0].pattern, ".*console\\.log\\('.*', .*\\);\n");
    assert_eq!(engine.calls[1].pattern, ".*console\\.log\\('.*:\\d*'\\);\n");
    for call in &engine.calls[2..] {
        assert_eq!(call.pattern, ".*\n");
    }
    for call in &engine.calls {
        assert_eq!(call.replacement, "");
        assert!(call.global);
        assert!(!call.prompt_on_replace);
        assert_eq!(call.target, Target::Document("main.js".to_string()));
    }
    Ok(())
}

#[test]
fn whole_project_dispatches_against_the_collection() -> Result<()> {
    let collection = DocumentCollection::from_documents(vec![
        Document::new("a.js", "a\n"),
        Document::new("b.js", "b\n"),
    ]);
    let mut workspace = Workspace::new()
        .with_active_document(Document::new("a.js", "a\n"))
        .with_collection(collection);
    let mut engine = RecordingEngine::default();

    run(
        &two_templates(),
        &mut PresetScope(Some(RemovalScope::WholeProject)),
        &mut workspace,
        &mut engine,
    )?;

    assert_eq!(engine.calls.len(), PATTERN_SLOTS);
    assert!(engine.calls.iter().all(|c| c.target == Target::Collection(2)));
    Ok(())
}

#[test]
fn cancelled_prompt_makes_no_calls() -> Result<()> {
    let mut workspace = Workspace::new().with_active_document(Document::new("main.js", "x();\n"));
    let mut engine = RecordingEngine::default();
    let mut prompt = CountingPrompt { answer: None, asked: 0 };

    let outcome = run(&two_templates(), &mut prompt, &mut workspace, &mut engine)?;

    assert_eq!(outcome, RemovalOutcome::Cancelled);
    assert_eq!(prompt.asked, 1);
    assert!(engine.calls.is_empty());
    Ok(())
}

#[test]
fn missing_context_aborts_before_prompting() -> Result<()> {
    let mut workspace = Workspace::new();
    let mut engine = RecordingEngine::default();
    let mut prompt = CountingPrompt {
        answer: Some(RemovalScope::CurrentDocument),
        asked: 0,
    };

    let outcome = run(&two_templates(), &mut prompt, &mut workspace, &mut engine)?;

    assert_eq!(outcome, RemovalOutcome::NoTarget);
    assert_eq!(prompt.asked, 0);
    assert!(engine.calls.is_empty());
    Ok(())
}

#[test]
fn scope_without_target_makes_no_calls() -> Result<()> {
    let mut workspace = Workspace::new().with_active_document(Document::new("main.js", "x();\n"));
    let mut engine = RecordingEngine::default();

    let outcome = run(
        &two_templates(),
        &mut PresetScope(Some(RemovalScope::WholeProject)),
        &mut workspace,
        &mut engine,
    )?;

    assert_eq!(outcome, RemovalOutcome::NoTarget);
    assert!(engine.calls.is_empty());
    assert!(!workspace.active_document().unwrap().is_modified());
    Ok(())
}

#[test]
fn skip_degenerate_leaves_empty_slots_out() -> Result<()> {
    let mut workspace = Workspace::new().with_active_document(Document::new("main.js", "x();\n"));
    let mut engine = RecordingEngine::default();

    let outcome = run_with_options(
        &two_templates(),
        &mut PresetScope(Some(RemovalScope::CurrentDocument)),
        &mut workspace,
        &mut engine,
        &RemovalOptions { skip_degenerate: true },
    )?;

    assert_eq!(engine.calls.len(), 2);
    let RemovalOutcome::Applied(report) = outcome else {
        panic!("expected an applied outcome");
    };
    assert_eq!(report.items.len(), PATTERN_SLOTS);
    assert_eq!(report.dispatched().count(), 2);
    assert!(report.items[2..].iter().all(|i| i.skipped && i.degenerate));
    Ok(())
}

#[test]
fn empty_slots_wipe_every_terminated_line_by_default() -> Result<()> {
    let mut workspace =
        Workspace::new().with_active_document(Document::new("main.js", "keep();\nlast"));
    let mut engine = RegexReplaceEngine::new();

    run(
        &two_templates(),
        &mut PresetScope(Some(RemovalScope::CurrentDocument)),
        &mut workspace,
        &mut engine,
    )?;

    assert_eq!(workspace.active_document().unwrap().content(), "last");
    Ok(())
}

#[test]
fn removes_default_logger_lines_across_a_project() -> Result<()> {
    let dir = tempdir()?;
    fs::create_dir_all(dir.path().join("src"))?;
    fs::write(
        dir.path().join("src/app.js"),
        "function start() {\n  console.log('start src/app.js:2 state', state);\n  boot();\n}\n",
    )?;
    fs::write(
        dir.path().join("src/util.ts"),
        "export const f = (x) => {\r\n  console.warn('x', x);\r\n  return x;\r\n};\r\n",
    )?;
    fs::write(dir.path().join("src/clean.js"), "ok();\n")?;

    let settings = LoggerSettings::load_default()?;
    let mut workspace =
        Workspace::new().with_project_root(dir.path(), DiscoveryOptions::default());
    let mut engine = RegexReplaceEngine::new();

    let outcome = run(
        &settings,
        &mut PresetScope(Some(RemovalScope::WholeProject)),
        &mut workspace,
        &mut engine,
    )?;
    let RemovalOutcome::Applied(report) = outcome else {
        panic!("expected an applied outcome");
    };
    assert_eq!(report.total_occurrences(), 2);
    assert_eq!(report.items[0].occurrences, 1);
    assert_eq!(report.items[5].occurrences, 1);

    assert_eq!(workspace.commit()?, 2);
    assert_eq!(
        fs::read_to_string(dir.path().join("src/app.js"))?,
        "function start() {\n  boot();\n}\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("src/util.ts"))?,
        "export const f = (x) => {\r\n  return x;\r\n};\r\n"
    );
    assert_eq!(fs::read_to_string(dir.path().join("src/clean.js"))?, "ok();\n");
    Ok(())
}

#[test]
fn rerunning_after_removal_is_a_no_op() -> Result<()> {
    let settings = LoggerSettings::load_default()?;
    let mut workspace = Workspace::new().with_active_document(Document::new(
        "main.js",
        "go();\nconsole.error('boom', err);\n",
    ));
    let mut engine = RegexReplaceEngine::new();
    let mut prompt = PresetScope(Some(RemovalScope::CurrentDocument));

    run(&settings, &mut prompt, &mut workspace, &mut engine)?;
    let second = run(&settings, &mut prompt, &mut workspace, &mut engine)?;

    let RemovalOutcome::Applied(report) = second else {
        panic!("expected an applied outcome");
    };
    assert_eq!(report.total_occurrences(), 0);
    assert_eq!(workspace.active_document().unwrap().content(), "go();\n");
    Ok(())
}

#[test]
fn long_templates_are_compiled_and_applied() -> Result<()> {
    let template = format!("console.log('{}', $$);", "x".repeat(600));
    let line = format!("  console.log('{}', value);\n", "x".repeat(600));
    let mut workspace = Workspace::new()
        .with_active_document(Document::new("main.js", format!("a();\n{}b();\n", line)));
    let mut engine = RegexReplaceEngine::new();

    let outcome = run_with_options(
        &vec![template],
        &mut PresetScope(Some(RemovalScope::CurrentDocument)),
        &mut workspace,
        &mut engine,
        &RemovalOptions { skip_degenerate: true },
    )?;

    let RemovalOutcome::Applied(report) = outcome else {
        panic!("expected an applied outcome");
    };
    assert_eq!(report.items[0].occurrences, 1);
    assert_eq!(workspace.active_document().unwrap().content(), "a();\nb();\n");
    Ok(())
}
