//! Filename sanitization.
//!
//! Output filenames and scratch-directory names are derived from arbitrary
//! video base names, which may contain spaces, punctuation, or any unicode.
//! Sanitization keeps those derived names filesystem-safe everywhere.

use once_cell::sync::Lazy;
use regex::Regex;

// Compiled once; the pattern is a constant.
static UNSAFE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new("[^A-Za-z0-9_-]+").expect("static sanitization pattern is valid"));

/// Replaces every maximal run of characters outside `[A-Za-z0-9_-]` with a
/// single `_`.
///
/// Deterministic and total: any input string (including empty) produces a
/// result, and sanitizing an already-sanitized name returns it unchanged.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    UNSAFE_RUNS.replace_all(name, "_").into_owned()
}
