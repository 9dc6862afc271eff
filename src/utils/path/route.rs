//! Link target utilities.
//!
//! Targets handled here are the raw strings captured from `](...)` and
//! `href="..."`, so they keep their leading slash and optional fragment.

/// Strip one leading slash from a link target
///
/// # Examples
/// ```ignore
/// assert_eq!(strip_leading_slash("/start/wizard"), "start/wizard");
/// assert_eq!(strip_leading_slash("start/wizard"), "start/wizard");
/// assert_eq!(strip_leading_slash("/"), "");
/// ```
#[inline]
pub fn strip_leading_slash(target: &str) -> &str {
    target.strip_prefix('/').unwrap_or(target)
}

/// Split a link target into path and fragment parts
///
/// The first `#` is the separator; everything after it is the fragment.
///
/// # Examples
/// ```ignore
/// assert_eq!(split_path_fragment("/guide#setup"), ("/guide", "setup"));
/// assert_eq!(split_path_fragment("/guide"), ("/guide", ""));
/// ```
#[inline]
pub fn split_path_fragment(target: &str) -> (&str, &str) {
    target.split_once('#').unwrap_or((target, ""))
}

/// Check if a target is protocol-relative (`//cdn.example.com/x.js`).
///
/// These point at another host, not at a page of this site.
#[inline]
pub fn is_protocol_relative(target: &str) -> bool {
    target.starts_with("//")
}
