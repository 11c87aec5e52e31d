// logsweep-core/src/engines/regex_engine.rs
//! A `ReplaceEngine` implementation backed by the `regex` crate, operating on
//! in-memory documents.
//! License: MIT OR APACHE 2.0

use log::{debug, trace, warn};
use regex::NoExpand;

use crate::document::{Document, DocumentCollection};
use crate::engine::{ReplaceEngine, ReplaceOutcome, ReplaceRequest};
use crate::errors::SweepError;

#[derive(Debug, Default)]
pub struct RegexReplaceEngine {
    warned_about_prompt: bool,
}

impl RegexReplaceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn apply(&mut self, request: &ReplaceRequest, document: &mut Document) -> ReplaceOutcome {
        if request.prompt_on_replace && !self.warned_about_prompt {
            warn!("Per-match confirmation is not supported; replacing without prompting.");
            self.warned_about_prompt = true;
        }

        let regex = &request.pattern.regex;
        let limit = if request.global { 0 } else { 1 };
        let matches = regex.find_iter(document.content()).count();
        let occurrences = if request.global { matches } else { matches.min(1) };
        if occurrences == 0 {
            return ReplaceOutcome::default();
        }

        let replaced = regex
            .replacen(document.content(), limit, NoExpand(&request.replacement))
            .into_owned();
        let changed = replaced != document.content();
        trace!(
            "Slot {}: {} match(es) in {}",
            request.pattern.slot,
            occurrences,
            document.path().display()
        );
        document.set_content(replaced);

        ReplaceOutcome {
            occurrences,
            documents_changed: usize::from(changed),
        }
    }
}

impl ReplaceEngine for RegexReplaceEngine {
    fn replace_in_document(
        &mut self,
        request: &ReplaceRequest,
        document: &mut Document,
    ) -> Result<ReplaceOutcome, SweepError> {
        let outcome = self.apply(request, document);
        debug!(
            "Slot {} replaced {} occurrence(s) in {}.",
            request.pattern.slot,
            outcome.occurrences,
            document.path().display()
        );
        Ok(outcome)
    }

    fn replace_in_collection(
        &mut self,
        request: &ReplaceRequest,
        collection: &mut DocumentCollection,
    ) -> Result<ReplaceOutcome, SweepError> {
        let mut total = ReplaceOutcome::default();
        for document in collection.documents_mut() {
            total.merge(self.apply(request, document));
        }
        debug!(
            "Slot {} replaced {} occurrence(s) across {} of {} document(s).",
            request.pattern.slot,
            total.occurrences,
            total.documents_changed,
            collection.len()
        );
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::compiler::compile_pattern;

    fn removal(template: &str) -> ReplaceRequest {
        ReplaceRequest::removal(compile_pattern(0, template).unwrap())
    }

    #[test]
    fn removes_every_matching_line() {
        let mut doc = Document::new(
            "app.js",
            "start();\nconsole.log('a', a);\n  console.log('b', b);\nend();\n",
        );
        let mut engine = RegexReplaceEngine::new();
        let outcome = engine
            .replace_in_document(&removal("console.log('$$', $$);"), &mut doc)
            .unwrap();
        assert_eq!(outcome.occurrences, 2);
        assert_eq!(outcome.documents_changed, 1);
        assert_eq!(doc.content(), "start();\nend();\n");
    }

    #[test]
    fn non_global_replaces_first_only() {
        let mut doc = Document::new("app.js", "log(1)\nlog(2)\n");
        let mut request = removal("log($$)");
        request.global = false;
        let outcome = RegexReplaceEngine::new()
            .replace_in_document(&request, &mut doc)
            .unwrap();
        assert_eq!(outcome.occurrences, 1);
        assert_eq!(doc.content(), "log(2)\n");
    }

    #[test]
    fn replacement_is_literal() {
        let mut doc = Document::new("app.js", "log(1)\n");
        let mut request = removal("log($$)");
        request.replacement = "$0\n".to_string();
        RegexReplaceEngine::new()
            .replace_in_document(&request, &mut doc)
            .unwrap();
        assert_eq!(doc.content(), "$0\n");
    }

    #[test]
    fn last_line_without_terminator_is_kept() {
        let mut doc = Document::new("app.js", "console.log('x', x);");
        let outcome = RegexReplaceEngine::new()
            .replace_in_document(&removal("console.log('$$', $$);"), &mut doc)
            .unwrap();
        assert_eq!(outcome, ReplaceOutcome::default());
        assert!(!doc.is_modified());
    }

    #[test]
    fn collection_counts_changed_documents() {
        let mut collection = DocumentCollection::from_documents(vec![
            Document::new("a.js", "debug(1);\nrun();\n"),
            Document::new("b.js", "run();\n"),
            Document::new("c.js", "debug(2);\ndebug(3);\n"),
        ]);
        let outcome = RegexReplaceEngine::new()
            .replace_in_collection(&removal("debug($$);"), &mut collection)
            .unwrap();
        assert_eq!(outcome.occurrences, 3);
        assert_eq!(outcome.documents_changed, 2);
        assert_eq!(collection.documents()[2].content(), "");
    }
}
