//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Rewrite internal documentation links into their locale tree
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: locale-links.toml)
    #[arg(short = 'C', long, global = true, default_value = "locale-links.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Documentation root (overrides `docs.root`, relative to current directory)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Source locale whose pages are never rewritten (overrides `docs.default_locale`)
    #[arg(long, global = true)]
    pub default_locale: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Rewrite links of every markdown page in one or more locale trees
    #[command(visible_alias = "f")]
    Fix {
        #[command(flatten)]
        args: FixArgs,
    },

    /// Rewrite links of a single file (or stdin) and print the result
    #[command(visible_alias = "r")]
    Rewrite {
        #[command(flatten)]
        args: RewriteArgs,
    },

    /// List the locale directories found under the docs root
    #[command(visible_alias = "l")]
    Locales,
}

/// Fix command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct FixArgs {
    /// Locales to fix. If omitted, fixes every locale in `docs.locales`.
    #[arg(value_name = "LOCALE")]
    pub locales: Vec<String>,

    /// Fix every locale in `docs.locales`
    #[arg(short, long, conflicts_with = "locales")]
    pub all: bool,

    /// Report files that would change without writing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Prefix links even when the translated page does not exist
    #[arg(long)]
    pub no_check: bool,
}

/// Rewrite command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RewriteArgs {
    /// Target locale
    pub locale: String,

    /// File to rewrite. Use `-` or omit to read from stdin.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Prefix links even when the translated page does not exist
    #[arg(long)]
    pub no_check: bool,
}
