//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem paths (`resolve_against`, `relative_display`)
//! - [`route`]: Link target utilities (`split_path_fragment`, `strip_leading_slash`)

pub mod fs;
pub mod route;

pub use fs::{relative_display, resolve_against};
