//! Documents, project discovery, and the document context handed to the orchestrator.
//!
//! Document text is held with `\n` line endings so that compiled patterns, which end
//! in a newline, match CRLF lines too. CRLF is restored on commit only for files that
//! used it on every line; a changed mixed-ending file is written back with `\n`.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use log::{debug, info, warn};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::errors::SweepError;
use crate::scope::RemovalScope;

/// Default cap on the number of files loaded for a project run.
pub const DEFAULT_MAX_FILES: usize = 100_000;

/// Line terminator style detected when a document was loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineEnding {
    Lf,
    CrLf,
    /// Both `\r\n` and bare `\n` occur.
    Mixed,
}

impl LineEnding {
    pub fn detect(text: &str) -> Self {
        let newlines = text.matches('\n').count();
        let crlf = text.matches("\r\n").count();
        match crlf {
            0 => LineEnding::Lf,
            n if n == newlines => LineEnding::CrLf,
            _ => LineEnding::Mixed,
        }
    }
}

/// A single text document held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    content: String,
    original: String,
    line_ending: LineEnding,
}

impl Document {
    /// Creates a document from text, normalising every CRLF to `\n`.
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let text = text.into();
        let line_ending = LineEnding::detect(&text);
        let content = match line_ending {
            LineEnding::Lf => text,
            LineEnding::CrLf | LineEnding::Mixed => text.replace("\r\n", "\n"),
        };
        Self {
            path: path.into(),
            original: content.clone(),
            content,
            line_ending,
        }
    }

    /// Reads a UTF-8 document from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let text = String::from_utf8(bytes)
            .with_context(|| format!("{} is not valid UTF-8", path.display()))?;
        Ok(Self::new(path, text))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current text, with `\n` line endings.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Text as it was when loaded or last committed, with `\n` line endings.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    pub fn is_modified(&self) -> bool {
        self.content != self.original
    }

    /// Current text as it is written back: CRLF for all-CRLF files, `\n` otherwise.
    pub fn output_text(&self) -> String {
        match self.line_ending {
            LineEnding::CrLf => self.content.replace('\n', "\r\n"),
            LineEnding::Lf | LineEnding::Mixed => self.content.clone(),
        }
    }

    /// Writes the document back to disk if it changed. Returns whether a write happened.
    pub fn commit(&mut self) -> Result<bool> {
        if !self.is_modified() {
            return Ok(false);
        }
        fs::write(&self.path, self.output_text())
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        self.original = self.content.clone();
        debug!("Committed {}", self.path.display());
        Ok(true)
    }
}

/// Controls which files a project run loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// File extensions to keep, without the dot. Empty keeps every file.
    pub extensions: Vec<String>,
    /// Descend into hidden files and directories.
    pub include_hidden: bool,
    /// Honor `.gitignore` and `.ignore` files.
    pub respect_gitignore: bool,
    /// Stop after this many documents.
    pub max_files: usize,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            extensions: Vec::new(),
            include_hidden: false,
            respect_gitignore: true,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

impl DiscoveryOptions {
    fn accepts(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
            })
    }
}

/// An ordered set of documents, usually everything under a project root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentCollection {
    documents: Vec<Document>,
}

impl DocumentCollection {
    pub fn from_documents(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Loads every matching text file under `root`, sorted by path.
    ///
    /// Unreadable and non-UTF-8 files are skipped with a warning.
    pub fn discover<P: AsRef<Path>>(
        root: P,
        options: &DiscoveryOptions,
    ) -> Result<Self, SweepError> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(SweepError::IoError(io::Error::new(
                io::ErrorKind::NotFound,
                format!("project root {} is not a directory", root.display()),
            )));
        }

        debug!(
            "Discovering documents under {} (extensions: {:?}, hidden: {}, gitignore: {})",
            root.display(),
            options.extensions,
            options.include_hidden,
            options.respect_gitignore
        );

        let walker = WalkBuilder::new(root)
            .hidden(!options.include_hidden)
            .git_ignore(options.respect_gitignore)
            .git_exclude(options.respect_gitignore)
            .ignore(options.respect_gitignore)
            .require_git(false)
            .follow_links(false)
            .build();

        let mut paths = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Skipping inaccessible entry: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            if !options.accepts(entry.path()) {
                continue;
            }
            if paths.len() >= options.max_files {
                warn!(
                    "File limit of {} reached under {}; remaining files are ignored.",
                    options.max_files,
                    root.display()
                );
                break;
            }
            paths.push(entry.into_path());
        }
        paths.sort();

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            match Document::load(&path) {
                Ok(doc) => documents.push(doc),
                Err(e) => warn!("Skipping {}: {:#}", path.display(), e),
            }
        }

        info!(
            "Loaded {} document(s) from {}.",
            documents.len(),
            root.display()
        );
        Ok(Self { documents })
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn documents_mut(&mut self) -> &mut [Document] {
        &mut self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Writes every modified document. Returns how many were written.
    pub fn commit_all(&mut self) -> Result<usize> {
        let mut written = 0;
        for doc in &mut self.documents {
            if doc.commit()? {
                written += 1;
            }
        }
        Ok(written)
    }
}

/// What a removal run operates on once the scope is known.
#[derive(Debug)]
pub enum ScopeTarget<'a> {
    Document(&'a mut Document),
    Collection(&'a mut DocumentCollection),
}

/// Supplies the documents a removal run may touch.
pub trait DocumentContext {
    /// Whether any target exists at all, checked before prompting.
    fn is_available(&self) -> bool;

    /// Resolves the target for a scope. `Ok(None)` means nothing is available for it.
    fn resolve(&mut self, scope: RemovalScope) -> Result<Option<ScopeTarget<'_>>, SweepError>;
}

/// The default document context: an optional active document plus an optional
/// project, loaded from its root on first use.
#[derive(Debug, Default)]
pub struct Workspace {
    active_document: Option<Document>,
    project_root: Option<PathBuf>,
    discovery: DiscoveryOptions,
    project: Option<DocumentCollection>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active_document(mut self, document: Document) -> Self {
        self.active_document = Some(document);
        self
    }

    pub fn with_project_root(mut self, root: impl Into<PathBuf>, discovery: DiscoveryOptions) -> Self {
        self.project_root = Some(root.into());
        self.discovery = discovery;
        self.project = None;
        self
    }

    pub fn with_collection(mut self, collection: DocumentCollection) -> Self {
        self.project = Some(collection);
        self
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.active_document.as_ref()
    }

    /// Every document currently held, active document first.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.active_document
            .iter()
            .chain(self.project.iter().flat_map(|p| p.documents().iter()))
    }

    /// Writes back every modified document. Returns how many were written.
    pub fn commit(&mut self) -> Result<usize> {
        let mut written = 0;
        if let Some(doc) = self.active_document.as_mut() {
            if doc.commit()? {
                written += 1;
            }
        }
        if let Some(project) = self.project.as_mut() {
            written += project.commit_all()?;
        }
        Ok(written)
    }
}

impl DocumentContext for Workspace {
    fn is_available(&self) -> bool {
        self.active_document.is_some() || self.project.is_some() || self.project_root.is_some()
    }

    fn resolve(&mut self, scope: RemovalScope) -> Result<Option<ScopeTarget<'_>>, SweepError> {
        match scope {
            RemovalScope::CurrentDocument => {
                Ok(self.active_document.as_mut().map(ScopeTarget::Document))
            }
            RemovalScope::WholeProject => {
                if self.project.is_none() {
                    if let Some(root) = &self.project_root {
                        self.project = Some(DocumentCollection::discover(root, &self.discovery)?);
                    }
                }
                Ok(self.project.as_mut().map(ScopeTarget::Collection))
            }
        }
    }
}
