//! Command-line interface module.

mod args;
pub mod fix;
pub mod locales;
pub mod rewrite;

pub use args::{Cli, Commands, FixArgs, RewriteArgs};
