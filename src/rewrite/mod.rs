//! Internal link rewriter.
//!
//! Prefixes root-relative links with a locale segment so translated pages
//! link into their own locale tree:
//!
//! | Syntax   | Before                 | After (`zh-CN`)              |
//! |----------|------------------------|------------------------------|
//! | Markdown | `](/start/wizard)`     | `](/zh-CN/start/wizard)`     |
//! | HTML     | `href="/start/wizard"` | `href="/zh-CN/start/wizard"` |
//!
//! A link is left alone when it is already localized, points at a shared
//! static directory (`/assets/`, `/images/`), is protocol-relative, or (with a
//! docs root) has no translated page yet.
//!
//! Rewriting is idempotent and never fails: text that does not match either
//! pattern passes through unchanged.

mod target;

pub use target::translated_page_exists;

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::utils::path::route::{is_protocol_relative, split_path_fragment};

/// Source locale. Its pages are never rewritten.
pub const DEFAULT_LOCALE: &str = "en";

/// Root-level directories shared by every locale.
pub const SHARED_PREFIXES: [&str; 2] = ["/assets/", "/images/"];

/// `](/path)`, capturing `/path`.
static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\((/[^)]*)\)").unwrap());

/// `href="/path"`, capturing `/path`.
static HTML_HREF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"href="(/[^"]*)""#).unwrap());

// =============================================================================
// Rewriter
// =============================================================================

/// Rewrites internal links of one locale.
///
/// # Example
///
/// ```ignore
/// let rewriter = LinkRewriter::new("zh-CN").with_docs_root("docs");
/// let out = rewriter.rewrite("see ](/start/wizard) for more");
/// ```
#[derive(Debug, Clone)]
pub struct LinkRewriter {
    locale: String,
    /// `/<locale>/`, the prefix that marks a link as already localized.
    prefix: String,
    default_locale: String,
    docs_root: Option<PathBuf>,
    shared_prefixes: Vec<String>,
}

impl LinkRewriter {
    pub fn new(locale: impl Into<String>) -> Self {
        let locale = locale.into();
        Self {
            prefix: format!("/{locale}/"),
            locale,
            default_locale: DEFAULT_LOCALE.to_string(),
            docs_root: None,
            shared_prefixes: SHARED_PREFIXES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Override the source locale sentinel.
    pub fn with_default_locale(mut self, default_locale: impl Into<String>) -> Self {
        self.default_locale = default_locale.into();
        self
    }

    /// Enable existence-aware rewriting against a documentation root.
    pub fn with_docs_root(mut self, docs_root: impl Into<PathBuf>) -> Self {
        self.docs_root = Some(docs_root.into());
        self
    }

    /// Replace the list of shared static prefixes.
    pub fn with_shared_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shared_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn docs_root(&self) -> Option<&Path> {
        self.docs_root.as_deref()
    }

    /// True when rewriting can never change anything.
    #[inline]
    pub fn is_noop(&self) -> bool {
        self.locale.is_empty() || self.locale == self.default_locale
    }

    /// Rewrite all eligible links in `content`.
    ///
    /// Borrows `content` when no link changed.
    pub fn rewrite<'c>(&self, content: &'c str) -> Cow<'c, str> {
        if self.is_noop() {
            return Cow::Borrowed(content);
        }

        let markdown = MARKDOWN_LINK.replace_all(content, |caps: &Captures<'_>| {
            self.replace_match(caps, "](", ")")
        });

        let html = match HTML_HREF.replace_all(&markdown, |caps: &Captures<'_>| {
            self.replace_match(caps, "href=\"", "\"")
        }) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };

        html.map_or(markdown, Cow::Owned)
    }

    /// Number of links `rewrite` would change.
    pub fn count_rewrites(&self, content: &str) -> usize {
        if self.is_noop() {
            return 0;
        }
        [&*MARKDOWN_LINK, &*HTML_HREF]
            .into_iter()
            .flat_map(|re| re.captures_iter(content))
            .filter(|caps| self.should_rewrite(&caps[1]))
            .count()
    }

    /// Decide whether a captured target (leading slash included) gets the prefix.
    pub fn should_rewrite(&self, target: &str) -> bool {
        if is_protocol_relative(target) || self.is_localized(target) {
            return false;
        }
        if self
            .shared_prefixes
            .iter()
            .any(|prefix| target.starts_with(prefix.as_str()))
        {
            return false;
        }
        match &self.docs_root {
            Some(root) => translated_page_exists(root, &self.locale, target),
            None => true,
        }
    }

    /// `/<locale>/...` or exactly `/<locale>`, with or without a fragment.
    fn is_localized(&self, target: &str) -> bool {
        let (path, _) = split_path_fragment(target);
        target.starts_with(&self.prefix) || path.strip_prefix('/') == Some(self.locale.as_str())
    }

    fn replace_match(&self, caps: &Captures<'_>, open: &str, close: &str) -> String {
        let target = &caps[1];
        if self.should_rewrite(target) {
            format!("{open}/{}{target}{close}", self.locale)
        } else {
            caps[0].to_string()
        }
    }
}

// =============================================================================
// Function-level interface
// =============================================================================

/// Rewrite internal links in `content` for `locale`.
///
/// With `docs_root`, links to pages not yet translated under
/// `<docs_root>/<locale>/` are left pointing at the source page.
pub fn rewrite_internal_links(content: &str, locale: &str, docs_root: Option<&Path>) -> String {
    let mut rewriter = LinkRewriter::new(locale);
    if let Some(root) = docs_root {
        rewriter = rewriter.with_docs_root(root);
    }
    rewriter.rewrite(content).into_owned()
}
