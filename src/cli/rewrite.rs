//! Rewrite command - rewrite a single file or stdin to stdout.

use anyhow::{Context, Result};
use std::io::{self, Read, Write};
use std::path::Path;

use super::RewriteArgs;
use crate::config::LinksConfig;
use crate::debug;

/// Run the rewrite command
///
/// Stdout carries only the rewritten document; logging goes to stderr.
pub fn run_rewrite(args: &RewriteArgs, config: &LinksConfig) -> Result<()> {
    config.check_locale(&args.locale)?;
    let content = read_input(args.file.as_deref())?;
    rewrite_into(args, config, &content, &mut io::stdout().lock())
}

fn rewrite_into(
    args: &RewriteArgs,
    config: &LinksConfig,
    content: &str,
    out: &mut impl Write,
) -> Result<()> {
    let rewriter = config.rewriter(&args.locale, config.rewrite.check_targets && !args.no_check);
    debug!("rewrite"; "{} links to localize", rewriter.count_rewrites(content));

    out.write_all(rewriter.rewrite(content).as_bytes())
        .context("failed to write to stdout")?;
    out.flush()?;
    Ok(())
}

/// Read the input file, or stdin for `None` / `-`.
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display())),
        _ => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            Ok(content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use std::fs;
    use tempfile::TempDir;

    fn args(locale: &str) -> RewriteArgs {
        RewriteArgs {
            locale: locale.to_string(),
            file: None,
            no_check: true,
        }
    }

    #[test]
    fn test_rewrite_output_is_only_the_document() {
        let mut out = Vec::new();
        rewrite_into(
            &args("zh-CN"),
            &LinksConfig::default(),
            "[a](/start) ![b](/images/b.png)\n",
            &mut out,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[a](/zh-CN/start) ![b](/images/b.png)\n"
        );
    }

    #[test]
    fn test_run_rewrite_rejects_path_locale() {
        let config = LinksConfig::default();
        for locale in ["../outside", "/tmp/outside"] {
            let err = run_rewrite(&args(locale), &config).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<ConfigError>(),
                Some(ConfigError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_read_input_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.md");
        fs::write(&path, "[a](/start)").unwrap();
        assert_eq!(read_input(Some(&path)).unwrap(), "[a](/start)");
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_input(Some(&dir.path().join("missing.md"))).unwrap_err();
        assert!(err.to_string().contains("missing.md"));
    }
}
