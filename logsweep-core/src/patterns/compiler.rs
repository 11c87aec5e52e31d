//! compiler.rs - Compiles console-logger templates into line-removal patterns.
//!
//! Compilation is a single left-to-right pass over an ordered substitution
//! table. Placeholder tokens come first in the table so that `$$` is consumed
//! as a unit before the single-character `$` escape can see it.
//!
//! Compiled patterns are rebuilt on every removal run and never cached.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::config::{PatternSource, PATTERN_SLOTS};
use crate::errors::SweepError;

/// Leading wildcard: anything on the line before the logger call.
pub const LINE_PREFIX: &str = ".*";

/// Trailing newline, so a match spans the whole line.
pub const LINE_SUFFIX: &str = "\n";

/// Ordered (match, replacement) table. Multi-character tokens must precede
/// the single-character escapes.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("$$", ".*"),
    ("{FN}", ".*"),
    ("{FP}", ".*"),
    ("{LN}", r"\d*"),
    ("\\", r"\\"),
    ("(", r"\("),
    (")", r"\)"),
    ("[", r"\["),
    ("]", r"\]"),
    ("^", r"\^"),
    ("+", r"\+"),
    ("?", r"\?"),
    ("|", r"\|"),
    (".", r"\."),
    ("*", r"\*"),
    ("{", r"\{"),
    ("}", r"\}"),
    ("$", r"\$"),
];

/// A removal pattern compiled from one template slot.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// The slot (0..8) the template came from.
    pub slot: usize,
    /// The raw template as configured.
    pub template: String,
    /// The generated regular expression source.
    pub pattern: String,
    /// The built regular expression.
    pub regex: Regex,
}

impl CompiledPattern {
    /// True when the template contributes nothing but wildcards, so the
    /// pattern matches every line that has a terminator.
    pub fn is_degenerate(&self) -> bool {
        let body = self
            .pattern
            .strip_prefix(LINE_PREFIX)
            .and_then(|p| p.strip_suffix(LINE_SUFFIX))
            .unwrap_or(&self.pattern);
        body.replace(".*", "").replace(r"\d*", "").is_empty()
    }
}

/// Translates a template into regex source: `.*` + escaped template + newline.
///
/// Never fails: characters with special meaning are escaped rather than rejected.
pub fn compile_template(template: &str) -> String {
    let mut body = String::with_capacity(template.len() * 2);
    let mut rest = template;

    'scan: while !rest.is_empty() {
        for (token, replacement) in SUBSTITUTIONS {
            if let Some(tail) = rest.strip_prefix(token) {
                body.push_str(replacement);
                rest = tail;
                continue 'scan;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            body.push(c);
        }
        rest = chars.as_str();
    }

    format!("{LINE_PREFIX}{body}{LINE_SUFFIX}")
}

/// Compiles one slot's template into a ready-to-apply pattern.
///
/// Template content never causes a failure; only the regex size limit can.
pub fn compile_pattern(slot: usize, template: &str) -> Result<CompiledPattern, SweepError> {
    let pattern = compile_template(template);
    let regex = RegexBuilder::new(&pattern)
        .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
        .build()
        .map_err(|e| SweepError::PatternBuildError(slot, e))?;

    debug!(
        target: "logsweep_core::compiler",
        "Slot {} compiled: {:?} -> {:?}",
        slot, template, pattern
    );

    Ok(CompiledPattern {
        slot,
        template: template.to_string(),
        pattern,
        regex,
    })
}

/// Compiles every slot, 0 through 8, in order.
///
/// All slots are compiled even when their template is empty. Failures are
/// collected and reported together.
pub fn compile_patterns<S>(source: &S) -> Result<Vec<CompiledPattern>, SweepError>
where
    S: PatternSource + ?Sized,
{
    debug!("Starting compilation of {} pattern slots.", PATTERN_SLOTS);

    let mut compiled = Vec::with_capacity(PATTERN_SLOTS);
    let mut errors = Vec::new();

    for slot in 0..PATTERN_SLOTS {
        match compile_pattern(slot, &source.pattern(slot)) {
            Ok(pattern) => compiled.push(pattern),
            Err(e) => errors.push(e),
        }
    }

    if !errors.is_empty() {
        let error_message = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        return Err(SweepError::Fatal(format!(
            "Failed to compile {} pattern slot(s):\n{}",
            errors.len(),
            error_message
        )));
    }

    debug!("Finished compiling patterns. Total compiled: {}.", compiled.len());
    Ok(compiled)
}
