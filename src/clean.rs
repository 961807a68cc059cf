//! Text cleaning: citation markers, whitespace runs, and a letters-only view.

use regex::Regex;
use std::sync::LazyLock;

/// Bracketed digit runs, e.g. `[12]` or `[]`, as left behind by
/// reference-style citations.
static CITATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[0-9]*\]").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static NON_LETTER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z]").unwrap());

/// Output of [`clean`]: the readable text and its letters-only counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaned {
    /// Citation markers replaced by spaces, whitespace runs collapsed to a
    /// single space. Casing and punctuation survive; sentences are segmented
    /// from this.
    pub text: String,
    /// Derived from `text` by replacing every character outside `[A-Za-z]`
    /// with a space and collapsing whitespace again. Word frequencies are
    /// counted from this.
    pub formatted: String,
}

/// Clean raw article text into the two views the pipeline consumes.
///
/// Neither output is trimmed; a leading or trailing space is left as a
/// single space. Applying [`clean`] to its own `text` output is a no-op.
///
/// # Example
///
/// ```rust
/// let cleaned = webgist::clean("The cat [12] sat.");
/// assert_eq!(cleaned.text, "The cat sat.");
/// assert_eq!(cleaned.formatted, "The cat sat ");
/// ```
pub fn clean(raw: &str) -> Cleaned {
    let without_citations = CITATION_RE.replace_all(raw, " ");
    let text = WHITESPACE_RE
        .replace_all(&without_citations, " ")
        .into_owned();
    let letters_only = NON_LETTER_RE.replace_all(&text, " ");
    let formatted = WHITESPACE_RE.replace_all(&letters_only, " ").into_owned();
    Cleaned { text, formatted }
}
