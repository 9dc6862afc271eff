//! Fix command - rewrite links across locale trees.

use anyhow::{Context, Result, bail};

use super::FixArgs;
use crate::config::LinksConfig;
use crate::fixer::{DirFixer, FixSummary};
use crate::log;
use crate::utils::plural::plural_count;

/// Run the fix command
///
/// Only locales given as arguments or listed in `docs.locales` are rewritten.
pub fn run_fix(args: &FixArgs, config: &LinksConfig) -> Result<()> {
    let locales = if args.all || args.locales.is_empty() {
        if config.docs.locales.is_empty() {
            bail!(
                "no locales to fix: pass locales explicitly or set `docs.locales` \
                 (`locale-links locales` lists candidate directories)"
            );
        }
        &config.docs.locales
    } else {
        &args.locales
    };

    for locale in locales {
        config.check_locale(locale)?;
    }

    let check_targets = config.rewrite.check_targets && !args.no_check;
    let mut total = FixSummary::default();

    for locale in locales {
        if config.is_default_locale(locale) {
            log!("warning"; "skipping `{}`: default locale pages are never rewritten", locale);
            continue;
        }

        let rewriter = config.rewriter(locale, check_targets);
        let summary = DirFixer::with_rewriter(config.docs_root(), rewriter)
            .dry_run(args.dry_run)
            .run()
            .with_context(|| format!("failed to fix locale `{locale}`"))?;

        log!("fix"; "{}: {}", locale, describe(&summary, args.dry_run));
        total.scanned += summary.scanned;
        total.changed.extend(summary.changed);
    }

    if locales.len() > 1 {
        log!("fix"; "total: {}", describe(&total, args.dry_run));
    }

    Ok(())
}

/// `2 files changed (12 scanned)` / `2 files would change (12 scanned)`
fn describe(summary: &FixSummary, dry_run: bool) -> String {
    let count = summary.changed_count();
    let verb = if dry_run { "would change" } else { "changed" };
    format!("{} {} ({} scanned)", plural_count(count, "file"), verb, summary.scanned)
}
