//! Small helpers shared by the rewriter, fixer and CLI.

pub mod path;
pub mod plural;
