//! Separator canonicalization for resource paths.
//!
//! Canonicalization here is deliberately narrow: every run of consecutive `/`
//! characters collapses to a single `/`. Nothing else changes. In particular
//! `.` and `..` segments and trailing separators are left alone.

use std::borrow::Cow;

/// The resource path separator.
pub const SEPARATOR: char = '/';

/// Collapse every run of consecutive `/` into a single `/`.
///
/// Already-canonical input is returned borrowed, without allocating.
///
/// # Examples
///
/// ```
/// use convention::path::canonicalize::canonicalize;
///
/// assert_eq!(canonicalize("//a///b////c"), "/a/b/c");
/// assert_eq!(canonicalize("/a/b/c"), "/a/b/c");
/// assert_eq!(canonicalize("a//b/"), "a/b/");
/// assert_eq!(canonicalize(""), "");
/// ```
#[must_use]
pub fn canonicalize(path: &str) -> Cow<'_, str> {
    if is_canonical(path) {
        return Cow::Borrowed(path);
    }

    let mut out = String::with_capacity(path.len());
    let mut previous_was_separator = false;
    for ch in path.chars() {
        if ch == SEPARATOR {
            if !previous_was_separator {
                out.push(ch);
            }
            previous_was_separator = true;
        } else {
            out.push(ch);
            previous_was_separator = false;
        }
    }
    Cow::Owned(out)
}

/// Canonicalize an optional path; an absent path stays absent.
///
/// # Examples
///
/// ```
/// use convention::path::canonicalize::canonicalize_opt;
///
/// assert_eq!(canonicalize_opt(None), None);
/// assert_eq!(canonicalize_opt(Some("///x//y")), Some("/x/y".to_string()));
/// ```
#[must_use]
pub fn canonicalize_opt(path: Option<&str>) -> Option<String> {
    path.map(|p| canonicalize(p).into_owned())
}

/// Returns `true` if `path` contains no run of two or more `/`.
///
/// # Examples
///
/// ```
/// use convention::path::canonicalize::is_canonical;
///
/// assert!(is_canonical("/a/b.jsp"));
/// assert!(!is_canonical("/a//b.jsp"));
/// ```
#[must_use]
pub fn is_canonical(path: &str) -> bool {
    !path.contains("//")
}
