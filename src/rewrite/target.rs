//! Translated target lookup.
//!
//! A link target `/guide/setup#step-2` points at a translated page when one of
//! these exists under `<docs_root>/<locale>/`:
//!
//! | Form            | File                          |
//! |-----------------|-------------------------------|
//! | Markdown page   | `guide/setup.md`              |
//! | MDX page        | `guide/setup.mdx`             |
//! | Directory index | `guide/setup/index.md`        |

use std::path::{Path, PathBuf};

use crate::utils::path::route::{split_path_fragment, strip_leading_slash};

/// Page extensions a target may resolve to, in lookup order.
const PAGE_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Index file looked up when a target names a directory.
const INDEX_FILE: &str = "index.md";

/// Check whether the translated page for `target` exists.
///
/// The fragment is dropped before lookup. A target that is empty once its
/// leading slash is gone (`/`, `/#top`) never exists.
pub fn translated_page_exists(docs_root: &Path, locale: &str, target: &str) -> bool {
    let (path, _) = split_path_fragment(target);
    let path = strip_leading_slash(path);
    if path.is_empty() {
        return false;
    }

    candidates(&docs_root.join(locale), path)
        .iter()
        .any(|candidate| candidate.is_file())
}

/// Candidate files for a slash-stripped, fragment-free path.
fn candidates(locale_dir: &Path, path: &str) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = PAGE_EXTENSIONS
        .iter()
        .map(|ext| locale_dir.join(format!("{path}.{ext}")))
        .collect();
    out.push(locale_dir.join(path).join(INDEX_FILE));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn docs_with(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for file in files {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "# page").unwrap();
        }
        dir
    }

    #[test]
    fn test_markdown_page_exists() {
        let docs = docs_with(&["ja-JP/guide.md"]);
        assert!(translated_page_exists(docs.path(), "ja-JP", "/guide"));
        assert!(!translated_page_exists(docs.path(), "zh-CN", "/guide"));
    }

    #[test]
    fn test_mdx_page_exists() {
        let docs = docs_with(&["ja-JP/start/intro.mdx"]);
        assert!(translated_page_exists(docs.path(), "ja-JP", "/start/intro"));
    }

    #[test]
    fn test_directory_index_exists() {
        let docs = docs_with(&["ja-JP/start/index.md"]);
        assert!(translated_page_exists(docs.path(), "ja-JP", "/start"));
        assert!(translated_page_exists(docs.path(), "ja-JP", "/start/"));
    }

    #[test]
    fn test_fragment_is_ignored() {
        let docs = docs_with(&["ja-JP/guide.md"]);
        assert!(translated_page_exists(docs.path(), "ja-JP", "/guide#setup"));
        assert!(!translated_page_exists(docs.path(), "ja-JP", "/missing#setup"));
    }

    #[test]
    fn test_empty_path_never_exists() {
        let docs = docs_with(&["ja-JP/index.md"]);
        assert!(!translated_page_exists(docs.path(), "ja-JP", "/"));
        assert!(!translated_page_exists(docs.path(), "ja-JP", "/#top"));
    }

    #[test]
    fn test_directory_without_index_does_not_exist() {
        let docs = docs_with(&["ja-JP/start/other.md"]);
        assert!(!translated_page_exists(docs.path(), "ja-JP", "/start"));
    }

    #[test]
    fn test_default_locale_page_is_not_enough() {
        // Only the untranslated source page exists
        let docs = docs_with(&["guide.md", "en/guide.md"]);
        assert!(!translated_page_exists(docs.path(), "ja-JP", "/guide"));
    }
}
