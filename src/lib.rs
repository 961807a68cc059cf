//! Extractive webpage summarization.
//!
//! `webgist` fetches a page, concatenates its `<p>` text, and scores each
//! sentence by the summed normalized frequency of its non-stopword words.
//! The highest-scoring sentences, truncated to a requested word budget,
//! form the summary; the most frequent words form the keyword list. The
//! whole pipeline is deterministic: same page, same output.
//!
//! # Quick start
//!
//! ```rust
//! use webgist::{summarize_text, Config, StopwordFilter};
//!
//! let text = "The quick brown fox jumps. The lazy dog sleeps. The fox jumps again.";
//! let gist = summarize_text(text, 8, StopwordFilter::english(), &Config::default()).unwrap();
//! assert!(gist.summary.starts_with("The quick brown fox jumps."));
//! assert_eq!(gist.keywords[0], "fox");
//! ```
//!
//! Fetching and summarizing a live page:
//!
//! ```rust,no_run
//! let gist = webgist::summarize_url("https://en.wikipedia.org/wiki/Rust_(programming_language)", 100)?;
//! println!("{}", gist.summary);
//! # Ok::<(), webgist::WebgistError>(())
//! ```

mod clean;
mod error;
mod fetch;
mod frequency;
mod score;
mod stopwords;
mod summary;
mod tokenize;

pub use clean::{clean, Cleaned};
pub use error::WebgistError;
pub use fetch::{extract_paragraph_text, fetch_article_text};
pub use frequency::{count_words, WordFrequencies};
pub use score::{score_sentences, SentenceScores};
pub use stopwords::StopwordFilter;
pub use summary::assemble_summary;
pub use tokenize::{is_punctuation, sentences, words};

use serde::Serialize;
use tracing::debug;

/// Tuning knobs for the scoring pipeline.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Config {
    /// Sentences with at least this many whitespace-delimited words are
    /// excluded from scoring.
    pub max_sentence_words: usize,
    /// Maximum number of entries in [`Gist::keywords`].
    pub keyword_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_sentence_words: 30,
            keyword_count: 30,
        }
    }
}

impl Config {
    pub fn with_max_sentence_words(mut self, n: usize) -> Self {
        self.max_sentence_words = n;
        self
    }
    pub fn with_keyword_count(mut self, n: usize) -> Self {
        self.keyword_count = n;
        self
    }
}

/// Everything produced for one page: the summary, the ranked keywords, and
/// the normalized word frequencies behind them.
#[derive(Debug, Clone, Serialize)]
pub struct Gist {
    pub summary: String,
    pub keywords: Vec<String>,
    pub frequencies: WordFrequencies,
}

/// Summarize the page at `url` to at most `num_words` words.
///
/// Uses English stopwords and the default [`Config`]. `num_words` below 1
/// is a caller contract violation; 0 produces an empty summary.
pub fn summarize_url(url: &str, num_words: usize) -> Result<Gist, WebgistError> {
    summarize_url_with(url, num_words, StopwordFilter::english(), &Config::default())
}

/// [`summarize_url`] with a caller-chosen stopword filter and configuration.
pub fn summarize_url_with(
    url: &str,
    num_words: usize,
    stopwords: &StopwordFilter,
    config: &Config,
) -> Result<Gist, WebgistError> {
    let text = fetch::fetch_article_text(url)?;
    summarize_text(&text, num_words, stopwords, config)
}

/// Summarize an HTML document without any network access.
///
/// Fails with [`WebgistError::EmptyContent`] when the document has no
/// paragraph text.
pub fn summarize_html(
    html: &str,
    num_words: usize,
    stopwords: &StopwordFilter,
    config: &Config,
) -> Result<Gist, WebgistError> {
    let text = fetch::extract_paragraph_text(html);
    if text.trim().is_empty() {
        return Err(WebgistError::EmptyContent);
    }
    summarize_text(&text, num_words, stopwords, config)
}

/// The core pipeline over already-extracted article text.
///
/// Cleans the text, segments sentences, filters stopword and punctuation
/// tokens, normalizes word frequencies, scores sentences, and assembles
/// the ranked summary. Fails with [`WebgistError::EmptyInput`] when
/// filtering leaves no words to score.
pub fn summarize_text(
    raw: &str,
    num_words: usize,
    stopwords: &StopwordFilter,
    config: &Config,
) -> Result<Gist, WebgistError> {
    let cleaned = clean::clean(raw);
    let sentences = tokenize::sentences(&cleaned.text);
    let terms = tokenize::words(&cleaned.formatted)
        .into_iter()
        .filter(|word| !stopwords.is_stopword(word) && !tokenize::is_punctuation(word));
    let frequencies = frequency::count_words(terms).normalize()?;
    let scores = score::score_sentences(&sentences, &frequencies, config.max_sentence_words);
    debug!(
        sentences = sentences.len(),
        scored = scores.len(),
        distinct_words = frequencies.len(),
        "pipeline complete"
    );
    let summary = summary::assemble_summary(&scores, num_words);
    let keywords = frequencies.top_words(config.keyword_count);
    Ok(Gist {
        summary,
        keywords,
        frequencies,
    })
}
