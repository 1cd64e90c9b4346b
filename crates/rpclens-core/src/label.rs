//! Metric label sanitizer.
//!
//! Identity components arrive from the RPC framework verbatim and may carry
//! arbitrary characters (`"My.Service/Call"`). Every component must pass
//! through [`sanitize`] before use as a label value so series stay within the
//! backend's label grammar and cardinality stays bounded.

use std::borrow::Cow;

/// Replace every character outside `[a-zA-Z0-9]` with `_`.
///
/// Returns a string of equal character length. Pure and total: no failure
/// mode, idempotent, and borrows the input when it is already label-safe.
pub fn sanitize(s: &str) -> Cow<'_, str> {
    if s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().map(sanitize_char).collect())
}

fn sanitize_char(c: char) -> char {
    if c.is_ascii_alphanumeric() {
        c
    } else {
        '_'
    }
}
