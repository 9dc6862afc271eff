//! Directory fixer.
//!
//! Walks `<docs_root>/<locale>` depth-first in lexical order, rewrites the
//! links of every `.md` file and writes back the files whose content changed.
//!
//! The first walk, read or write failure aborts the run. Files already written
//! stay written; nothing is rolled back.

mod locales;

pub use locales::discover_locales;

use jwalk::{Parallelism, WalkDir};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::rewrite::LinkRewriter;
use crate::utils::path::relative_display;
use crate::{debug, log};

/// File name suffix of the pages this fixer rewrites.
const MARKDOWN_SUFFIX: &str = ".md";

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum FixError {
    #[error("locale directory `{0}` is not accessible")]
    LocaleDir(PathBuf, #[source] io::Error),

    #[error("failed to walk `{0}`")]
    Walk(PathBuf, #[source] jwalk::Error),

    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] io::Error),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] io::Error),
}

// ============================================================================
// Summary
// ============================================================================

/// Outcome of one fixer run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FixSummary {
    /// Markdown files read.
    pub scanned: usize,
    /// Changed files, relative to the docs root, in traversal order.
    pub changed: Vec<PathBuf>,
}

impl FixSummary {
    #[inline]
    pub fn changed_count(&self) -> usize {
        self.changed.len()
    }
}

// ============================================================================
// Fixer
// ============================================================================

/// Rewrites the links of one locale tree.
pub struct DirFixer {
    docs_root: PathBuf,
    rewriter: LinkRewriter,
    dry_run: bool,
}

impl DirFixer {
    /// Fixer for `locale` with existence-aware rewriting against `docs_root`.
    pub fn new(docs_root: impl Into<PathBuf>, locale: &str) -> Self {
        let docs_root = docs_root.into();
        let rewriter = LinkRewriter::new(locale).with_docs_root(docs_root.clone());
        Self::with_rewriter(docs_root, rewriter)
    }

    /// Fixer driven by a preconfigured rewriter.
    pub fn with_rewriter(docs_root: impl Into<PathBuf>, rewriter: LinkRewriter) -> Self {
        Self {
            docs_root: docs_root.into(),
            rewriter,
            dry_run: false,
        }
    }

    /// Report changes without writing them.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn locale_dir(&self) -> PathBuf {
        self.docs_root.join(self.rewriter.locale())
    }

    /// Walk the locale tree and fix every markdown file.
    pub fn run(&self) -> Result<FixSummary, FixError> {
        let locale_dir = self.locale_dir();
        check_dir(&locale_dir)?;

        let mut summary = FixSummary::default();
        let walker = WalkDir::new(&locale_dir)
            .sort(true)
            .skip_hidden(false)
            .parallelism(Parallelism::Serial);

        for entry in walker {
            let mut entry = entry.map_err(|err| FixError::Walk(locale_dir.clone(), err))?;
            if entry.file_type().is_dir() {
                // jwalk keeps the failure on the entry instead of yielding it
                if let Some(err) = entry.read_children_error.take() {
                    return Err(FixError::Walk(entry.path(), err));
                }
                continue;
            }
            if !is_markdown(&entry.file_name().to_string_lossy()) {
                continue;
            }

            let path = entry.path();
            summary.scanned += 1;
            if self.fix_file(&path)? {
                summary
                    .changed
                    .push(path.strip_prefix(&self.docs_root).unwrap_or(&path).to_path_buf());
            }
        }

        debug!("fix"; "{}: scanned {} markdown files", self.rewriter.locale(), summary.scanned);
        Ok(summary)
    }

    /// Rewrite one file. Returns whether its content changed.
    fn fix_file(&self, path: &Path) -> Result<bool, FixError> {
        let content =
            fs::read_to_string(path).map_err(|err| FixError::Read(path.to_path_buf(), err))?;

        let rewritten = self.rewriter.rewrite(&content);
        if rewritten == content {
            return Ok(false);
        }

        let rel = relative_display(path, &self.docs_root);
        if self.dry_run {
            log!("dry-run"; "{}", rel);
        } else {
            fs::write(path, rewritten.as_bytes())
                .map_err(|err| FixError::Write(path.to_path_buf(), err))?;
            log!("fix"; "{}", rel);
        }
        debug!("fix"; "{}: {} links localized", rel, self.rewriter.count_rewrites(&content));

        Ok(true)
    }
}

/// Fail early with an I/O error when the locale directory is missing.
fn check_dir(dir: &Path) -> Result<(), FixError> {
    let meta = fs::metadata(dir).map_err(|err| FixError::LocaleDir(dir.to_path_buf(), err))?;
    if meta.is_dir() {
        Ok(())
    } else {
        Err(FixError::LocaleDir(
            dir.to_path_buf(),
            io::Error::from(io::ErrorKind::NotADirectory),
        ))
    }
}

#[inline]
fn is_markdown(file_name: &str) -> bool {
    file_name.ends_with(MARKDOWN_SUFFIX)
}

// ============================================================================
// Function-level interface
// ============================================================================

/// Fix links of every markdown file under `<docs_root>/<locale>`.
///
/// Returns the number of files overwritten.
pub fn fix_links_in_dir(docs_root: &Path, locale: &str) -> Result<usize, FixError> {
    DirFixer::new(docs_root, locale)
        .run()
        .map(|summary| summary.changed_count())
}
