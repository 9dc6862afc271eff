//! locale-links - keep translated documentation linking inside its own locale.
//!
//! Translated pages are copies of the source pages, so their root-relative
//! links (`](/start/wizard)`, `href="/guide"`) still point at the default
//! locale. This tool prefixes them with `/<locale>/` when the translated
//! target exists.

#![allow(dead_code)]

mod cli;
mod config;
mod fixer;
mod logger;
mod rewrite;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::LinksConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);
    // rewrite prints the document on stdout
    logger::set_stderr(matches!(cli.command, Commands::Rewrite { .. }));

    let config = LinksConfig::load(&cli)?;

    match &cli.command {
        Commands::Fix { args } => cli::fix::run_fix(args, &config),
        Commands::Rewrite { args } => cli::rewrite::run_rewrite(args, &config),
        Commands::Locales => cli::locales::run_locales(&config),
    }
}
