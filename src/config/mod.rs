//! Configuration management for `locale-links.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section    # [docs] and [rewrite]
//! ├── error      # ConfigError, ConfigDiagnostics
//! ├── util       # config file discovery
//! └── mod.rs     # LinksConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[docs]`    | Documentation root, default locale, locale list  |
//! | `[rewrite]` | Shared static prefixes, existence checking       |
//!
//! The file is optional. Without it every field takes its default and
//! relative paths resolve against the current directory.

mod error;
mod section;
mod util;

pub use error::{ConfigDiagnostics, ConfigError};
pub use section::{DocsConfig, RewriteConfig, locale_problem};

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::cli::Cli;
use crate::rewrite::LinkRewriter;
use crate::utils::path::resolve_against;
use crate::{debug, log};
use util::find_config_file;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing locale-links.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Documentation tree settings
    pub docs: DocsConfig,

    /// Link rewriting settings
    pub rewrite: RewriteConfig,
}

impl LinksConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file, then applies
    /// `--root` / `--default-locale` overrides and validates.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let (mut config, base_dir) = match find_config_file(&cli.config, &cwd) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let config = Self::from_path(&path)?;
                let base = path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.clone());
                (Self { config_path: Some(path), ..config }, base)
            }
            None => {
                debug!("config"; "no {} found, using defaults", cli.config.display());
                (Self::default(), cwd.clone())
            }
        };

        // CLI paths are relative to cwd, config paths to the config file
        if let Some(root) = &cli.root {
            config.docs.root = resolve_against(&cwd, root);
        }
        if let Some(locale) = &cli.default_locale {
            config.docs.default_locale = locale.clone();
        }
        config.finalize(&base_dir);
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored);
        }
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Parse TOML and collect unknown field paths.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String]) {
        log!("warning"; "unknown fields in config, ignoring: {}", fields.join(", "));
    }

    /// Resolve the docs root against the directory holding the config.
    fn finalize(&mut self, base_dir: &Path) {
        self.docs.root = resolve_against(base_dir, &self.docs.root);
    }

    /// Validate all sections, reporting every problem at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.docs.validate(&mut diag);
        self.rewrite.validate(&mut diag);
        diag.into_result()
    }

    // ------------------------------------------------------------------------
    // accessors
    // ------------------------------------------------------------------------

    pub fn docs_root(&self) -> &Path {
        &self.docs.root
    }

    pub fn locale_dir(&self, locale: &str) -> PathBuf {
        self.docs.root.join(locale)
    }

    pub fn is_default_locale(&self, locale: &str) -> bool {
        locale == self.docs.default_locale
    }

    /// Reject a locale given on the command line that would leave the docs root.
    pub fn check_locale(&self, locale: &str) -> Result<(), ConfigError> {
        match locale_problem(locale) {
            Some(problem) => Err(ConfigError::Validation(format!("locale `{locale}` {problem}"))),
            None => Ok(()),
        }
    }

    /// Build a rewriter for `locale` from the configured settings.
    ///
    /// `check_targets` turns on existence-aware rewriting against the docs root.
    pub fn rewriter(&self, locale: &str, check_targets: bool) -> LinkRewriter {
        let rewriter = LinkRewriter::new(locale)
            .with_default_locale(self.docs.default_locale.clone())
            .with_shared_prefixes(self.rewrite.shared_prefixes.iter().cloned());
        if check_targets {
            rewriter.with_docs_root(self.docs.root.clone())
        } else {
            rewriter
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = LinksConfig::from_str("").unwrap();
        assert_eq!(config.docs.root, PathBuf::from("docs"));
        assert_eq!(config.docs.default_locale, "en");
        assert_eq!(config.rewrite.shared_prefixes, ["/assets/", "/images/"]);
        assert!(config.rewrite.check_targets);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let config = LinksConfig::from_str(
            r#"
            [docs]
            root = "site/docs"
            default_locale = "en-US"
            locales = ["zh-CN", "ja-JP"]

            [rewrite]
            shared_prefixes = ["/static/"]
            check_targets = false
            "#,
        )
        .unwrap();

        assert_eq!(config.docs.root, PathBuf::from("site/docs"));
        assert_eq!(config.docs.default_locale, "en-US");
        assert_eq!(config.docs.locales, ["zh-CN", "ja-JP"]);
        assert_eq!(config.rewrite.shared_prefixes, ["/static/"]);
        assert!(!config.rewrite.check_targets);
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let (config, ignored) = LinksConfig::parse_with_ignored(
            r#"
            [docs]
            root = "docs"
            colour = "red"

            [extra]
            key = 1
            "#,
        )
        .unwrap();
        assert_eq!(config.docs.root, PathBuf::from("docs"));
        assert!(ignored.iter().any(|f| f == "docs.colour"));
        assert!(ignored.iter().any(|f| f.starts_with("extra")));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let err = LinksConfig::from_str("[docs\nroot = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_finalize_resolves_root() {
        let mut config = LinksConfig::default();
        config.finalize(Path::new("/project"));
        assert_eq!(config.docs_root(), Path::new("/project/docs"));
        assert_eq!(config.locale_dir("zh-CN"), PathBuf::from("/project/docs/zh-CN"));

        let mut config = LinksConfig::from_str("[docs]\nroot = \"/abs/docs\"").unwrap();
        config.finalize(Path::new("/project"));
        assert_eq!(config.docs_root(), Path::new("/abs/docs"));
    }

    #[test]
    fn test_validate_reports_all_errors() {
        let config = LinksConfig::from_str(
            r#"
            [docs]
            default_locale = "en"
            locales = ["en", "zh/CN"]

            [rewrite]
            shared_prefixes = ["assets"]
            "#,
        )
        .unwrap();

        match config.validate() {
            Err(ConfigError::Diagnostics(diag)) => assert_eq!(diag.len(), 3),
            other => panic!("expected diagnostics, got {other:?}"),
        }
    }

    #[test]
    fn test_check_locale_rejects_paths() {
        let config = LinksConfig::default();
        assert!(config.check_locale("zh-CN").is_ok());
        for locale in ["../outside", "/tmp/outside", "", ".."] {
            let err = config.check_locale(locale).unwrap_err();
            assert!(matches!(err, ConfigError::Validation(_)), "{locale}");
        }
    }

    #[test]
    fn test_rewriter_follows_config() {
        let mut config = LinksConfig::from_str(
            r#"
            [docs]
            default_locale = "de"

            [rewrite]
            shared_prefixes = ["/static/"]
            "#,
        )
        .unwrap();
        config.finalize(Path::new("/project"));

        assert!(config.rewriter("de", false).is_noop());

        let rewriter = config.rewriter("en", false);
        assert_eq!(rewriter.docs_root(), None);
        assert_eq!(
            rewriter.rewrite("](/static/a.png) ](/images/b.png)"),
            "](/static/a.png) ](/en/images/b.png)"
        );

        let rewriter = config.rewriter("en", true);
        assert_eq!(rewriter.docs_root(), Some(Path::new("/project/docs")));
    }
}
