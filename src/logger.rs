//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for output only shown with `--verbose`
//!
//! Output goes to stdout unless [`set_stderr`] is on, which commands that
//! print a document to stdout rely on.
//!
//! # Example
//!
//! ```ignore
//! log!("fix"; "zh-CN/start/wizard.md");
//! debug!("rewrite"; "{} links rewritten", count);
//! ```

use owo_colors::{OwoColorize, Stream};
use std::{
    io::{Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Route log output to stderr
static TO_STDERR: AtomicBool = AtomicBool::new(false);

/// Send all log lines to stderr instead of stdout
pub fn set_stderr(v: bool) {
    TO_STDERR.store(v, Ordering::SeqCst);
}

fn log_stream() -> Stream {
    if TO_STDERR.load(Ordering::SeqCst) {
        Stream::Stderr
    } else {
        Stream::Stdout
    }
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let stream = log_stream();
    let prefix = colorize_prefix(module, &module.to_ascii_lowercase(), stream);

    match stream {
        Stream::Stderr => write_line(&mut stderr().lock(), &prefix, message),
        _ => write_line(&mut stdout().lock(), &prefix, message),
    }
}

fn write_line(out: &mut impl Write, prefix: &str, message: &str) {
    writeln!(out, "{prefix} {message}").ok();
    out.flush().ok();
}

/// Apply color to a module prefix based on module type
///
/// Honors `--color` through the owo-colors override.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str, stream: Stream) -> String {
    let prefix = format!("[{module}]");
    let styled = |p: &String| match module_lower {
        "fix" => p.bright_green().bold().to_string(),
        "error" => p.bright_red().bold().to_string(),
        "warning" => p.yellow().bold().to_string(),
        "dry-run" => p.bright_blue().bold().to_string(),
        _ => p.bright_yellow().bold().to_string(),
    };
    prefix
        .if_supports_color(stream, styled)
        .to_string()
}

// ============================================================================
// Tests
// ============================================================================
