//! Locales command - list locale trees and resolve which ones to process.

use anyhow::{Context, Result};

use crate::config::LinksConfig;
use crate::fixer::discover_locales;
use crate::log;
use crate::utils::path::relative_display;

/// Locales from `docs.locales`, or discovered under the docs root when empty.
pub fn configured_locales(config: &LinksConfig) -> Result<Vec<String>> {
    if !config.docs.locales.is_empty() {
        return Ok(config.docs.locales.clone());
    }

    let root = config.docs_root();
    discover_locales(
        root,
        &config.docs.default_locale,
        config.rewrite.shared_dirs(),
    )
    .with_context(|| format!("failed to list locales under `{}`", root.display()))
}

/// Run the locales command
pub fn run_locales(config: &LinksConfig) -> Result<()> {
    let locales = configured_locales(config)?;
    if locales.is_empty() {
        log!("locales"; "no locale directories under {}", config.docs_root().display());
        return Ok(());
    }

    for locale in &locales {
        let dir = config.locale_dir(locale);
        let status = if dir.is_dir() { "" } else { " (missing)" };
        log!("locales"; "{}{}", relative_display(&dir, config.docs_root()), status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(root: &std::path::Path, toml: &str) -> LinksConfig {
        let mut config = LinksConfig::from_str(toml).unwrap();
        config.docs.root = root.to_path_buf();
        config
    }

    #[test]
    fn test_configured_locales_win_over_discovery() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("de")).unwrap();
        let config = config_for(dir.path(), "[docs]\nlocales = [\"zh-CN\"]");
        assert_eq!(configured_locales(&config).unwrap(), ["zh-CN"]);
    }

    #[test]
    fn test_discovery_when_unconfigured() {
        let dir = TempDir::new().unwrap();
        for sub in ["en", "de", "fr", "assets", "guide"] {
            fs::create_dir_all(dir.path().join(sub)).unwrap();
        }
        let config = config_for(dir.path(), "");
        assert_eq!(configured_locales(&config).unwrap(), ["de", "fr"]);
    }

    #[test]
    fn test_discovery_missing_root_is_error() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir.path().join("missing"), "");
        assert!(configured_locales(&config).is_err());
    }
}
