//! Locale directory discovery.
//!
//! A docs root mixes locale trees (`zh-CN/`, `ja-JP/`) with source page
//! directories (`start/`, `guide/`) and shared static directories. Only
//! subdirectories whose name looks like a language tag count as locales.

use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

/// `fr`, `zh-CN`, `zh-Hans`, `zh-Hant-TW`, `es-419`.
static LANGUAGE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]{2}(-[A-Z][a-z]{3})?(-([A-Z]{2}|[0-9]{3}))?$").unwrap()
});

/// Check if a directory name looks like a locale.
#[inline]
pub fn is_locale_name(name: &str) -> bool {
    LANGUAGE_TAG.is_match(name)
}

/// List translated locale directories under `docs_root`, sorted.
///
/// Skips the default locale and any directory named in `excluded`
/// (shared static directories such as `assets` or `images`).
pub fn discover_locales<'a>(
    docs_root: &Path,
    default_locale: &str,
    excluded: impl IntoIterator<Item = &'a str>,
) -> io::Result<Vec<String>> {
    let excluded: Vec<&str> = excluded.into_iter().collect();

    let mut locales = Vec::new();
    for entry in fs::read_dir(docs_root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if name == default_locale || excluded.contains(&name.as_str()) || !is_locale_name(&name) {
            continue;
        }
        locales.push(name);
    }

    locales.sort();
    Ok(locales)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_locale_name() {
        for name in ["fr", "zh-CN", "ja-JP", "zh-Hans", "zh-Hant-TW", "es-419"] {
            assert!(is_locale_name(name), "{name}");
        }
        for name in ["start", "guide", "assets", "api", "zh-cn", "ZH", "zh_CN", ""] {
            assert!(!is_locale_name(name), "{name}");
        }
    }

    #[test]
    fn test_discover_locales() {
        let dir = TempDir::new().unwrap();
        for sub in ["zh-CN", "ja-JP", "en", "start", "assets", "images", "de"] {
            fs::create_dir_all(dir.path().join(sub)).unwrap();
        }
        fs::write(dir.path().join("fr"), "not a directory").unwrap();

        let locales = discover_locales(dir.path(), "en", ["assets", "images"]).unwrap();
        assert_eq!(locales, ["de", "ja-JP", "zh-CN"]);
    }

    #[test]
    fn test_discover_locales_missing_root() {
        let dir = TempDir::new().unwrap();
        let err =
            discover_locales(&dir.path().join("missing"), "en", std::iter::empty()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
