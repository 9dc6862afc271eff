//! `[docs]` and `[rewrite]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [docs]
//! root = "docs"               # Documentation root
//! default_locale = "en"       # Source locale, never rewritten
//! locales = ["zh-CN"]         # Locales handled by `fix` without arguments
//!
//! [rewrite]
//! shared_prefixes = ["/assets/", "/images/"]  # Never localized
//! check_targets = true        # Only prefix links whose translated page exists
//! ```

use serde::Deserialize;
use std::path::PathBuf;

use super::ConfigDiagnostics;
use crate::rewrite::{DEFAULT_LOCALE, SHARED_PREFIXES};

// ============================================================================
// [docs]
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Documentation root, relative to the config file.
    pub root: PathBuf,

    /// Source locale.
    pub default_locale: String,

    /// Translated locales (subdirectories of `root`).
    pub locales: Vec<String>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("docs"),
            default_locale: DEFAULT_LOCALE.to_string(),
            locales: Vec::new(),
        }
    }
}

/// Why `locale` cannot name a subdirectory of the docs root, if it cannot.
pub fn locale_problem(locale: &str) -> Option<&'static str> {
    if locale.trim().is_empty() {
        Some("must not be empty")
    } else if locale.contains(['/', '\\', ':']) {
        Some("contains a path separator")
    } else if locale == "." || locale == ".." {
        Some("names a relative directory")
    } else {
        None
    }
}

impl DocsConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.default_locale.trim().is_empty() {
            diag.error("docs.default_locale", "must not be empty");
        }

        for locale in &self.locales {
            if let Some(problem) = locale_problem(locale) {
                diag.error_with_hint(
                    "docs.locales",
                    format!("`{locale}` {problem}"),
                    "locales name a single subdirectory of the docs root",
                );
            } else if *locale == self.default_locale {
                diag.error_with_hint(
                    "docs.locales",
                    format!("`{locale}` is the default locale"),
                    "remove it from the list, default pages are never rewritten",
                );
            }
        }
    }
}

// ============================================================================
// [rewrite]
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Root-relative prefixes shared by every locale.
    pub shared_prefixes: Vec<String>,

    /// Skip links whose translated page does not exist yet.
    pub check_targets: bool,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            shared_prefixes: SHARED_PREFIXES.iter().map(|p| p.to_string()).collect(),
            check_targets: true,
        }
    }
}

impl RewriteConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for prefix in &self.shared_prefixes {
            if !prefix.starts_with('/') || !prefix.ends_with('/') || prefix.len() < 3 {
                diag.error_with_hint(
                    "rewrite.shared_prefixes",
                    format!("`{prefix}` is not a directory prefix"),
                    "write prefixes as `/name/`",
                );
            }
        }
    }

    /// Directory names behind the shared prefixes (`/assets/` -> `assets`).
    pub fn shared_dirs(&self) -> impl Iterator<Item = &str> {
        self.shared_prefixes.iter().map(|p| p.trim_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docs_defaults() {
        let docs = DocsConfig::default();
        assert_eq!(docs.root, PathBuf::from("docs"));
        assert_eq!(docs.default_locale, "en");
        assert!(docs.locales.is_empty());
    }

    #[test]
    fn test_docs_validate() {
        let docs = DocsConfig {
            locales: vec!["zh-CN".into(), "en".into(), "ja/JP".into(), " ".into()],
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        docs.validate(&mut diag);
        assert_eq!(diag.len(), 3);
        assert!(diag.errors().iter().all(|e| e.field == "docs.locales"));
    }

    #[test]
    fn test_locale_problem() {
        assert_eq!(locale_problem("zh-CN"), None);
        assert_eq!(locale_problem("pt_BR"), None);
        assert!(locale_problem("").is_some());
        assert!(locale_problem("..").is_some());
        assert!(locale_problem(".").is_some());
        assert!(locale_problem("../outside").is_some());
        assert!(locale_problem("/etc").is_some());
        assert!(locale_problem("C:").is_some());
        assert!(locale_problem("a\\b").is_some());
    }

    #[test]
    fn test_rewrite_validate_prefixes() {
        let rewrite = RewriteConfig {
            shared_prefixes: vec!["/assets/".into(), "images".into(), "//".into()],
            check_targets: true,
        };
        let mut diag = ConfigDiagnostics::new();
        rewrite.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_shared_dirs() {
        let rewrite = RewriteConfig::default();
        assert_eq!(rewrite.shared_dirs().collect::<Vec<_>>(), ["assets", "images"]);
    }
}
