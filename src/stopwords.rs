//! Stopword filtering backed by the `stop-words` corpora.

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

/// Shared English filter. Built once, on first use, from the `stop-words`
/// English list; read-only afterwards and safe to hand out by reference.
static ENGLISH: LazyLock<StopwordFilter> = LazyLock::new(|| {
    StopwordFilter::from_list(stop_words::get(stop_words::LANGUAGE::English))
});

/// Case-insensitive stopword membership test.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

impl StopwordFilter {
    /// The process-wide English filter.
    pub fn english() -> &'static StopwordFilter {
        &ENGLISH
    }

    /// Build a filter from a caller-supplied word list.
    ///
    /// Entries are stored lowercased, so lookups stay case-insensitive no
    /// matter how the list was written.
    pub fn from_list<I, S>(words: I) -> StopwordFilter
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        StopwordFilter {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// True when `word`, compared lowercased, is in the list.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_contains_common_function_words() {
        let filter = StopwordFilter::english();
        for word in ["the", "and", "was", "on", "of", "a"] {
            assert!(filter.is_stopword(word), "{word:?} should be a stopword");
        }
        assert!(!filter.is_stopword("volcano"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let filter = StopwordFilter::english();
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("AND"));
    }

    #[test]
    fn test_from_list_lowercases_entries() {
        let filter = StopwordFilter::from_list(["The", "ON"]);
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("on"));
        assert!(!filter.is_stopword("cat"));
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_empty_filter_matches_nothing() {
        let filter = StopwordFilter::from_list(Vec::<String>::new());
        assert!(filter.is_empty());
        assert!(!filter.is_stopword("the"));
    }

    #[test]
    fn test_english_singleton_is_shared() {
        let a = StopwordFilter::english() as *const StopwordFilter;
        let b = StopwordFilter::english() as *const StopwordFilter;
        assert_eq!(a, b);
    }
}
