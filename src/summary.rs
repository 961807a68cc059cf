//! Summary assembly from ranked sentences.

use crate::score::SentenceScores;

/// Join sentences best-first and truncate to `num_words` words.
///
/// Sentences are concatenated in [`SentenceScores::ranked`] order with
/// single spaces, then cut at a word boundary: the result holds
/// `min(num_words, available)` whitespace-delimited words, never padded.
/// Empty scores produce an empty string.
pub fn assemble_summary(scores: &SentenceScores, num_words: usize) -> String {
    let ranked = scores.ranked().join(" ");
    ranked
        .split_whitespace()
        .take(num_words)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::count_words;
    use crate::score::score_sentences;

    fn scores_for(sentences: &[&str], salient: &[&str]) -> SentenceScores {
        let frequencies = count_words(salient.iter().copied()).normalize().unwrap();
        score_sentences(sentences, &frequencies, 30)
    }

    #[test]
    fn test_best_sentence_leads() {
        let scores = scores_for(
            &["One cat here.", "A cat sat on a cat."],
            &["cat", "sat"],
        );
        let summary = assemble_summary(&scores, 100);
        assert_eq!(summary, "A cat sat on a cat. One cat here.");
    }

    #[test]
    fn test_truncates_at_word_boundary() {
        let scores = scores_for(&["The cat sat on the mat today."], &["cat"]);
        let summary = assemble_summary(&scores, 4);
        assert_eq!(summary, "The cat sat on");
    }

    #[test]
    fn test_returns_everything_when_budget_exceeds_available() {
        let scores = scores_for(&["Cat cat."], &["cat"]);
        let summary = assemble_summary(&scores, 500);
        assert_eq!(summary, "Cat cat.");
    }

    #[test]
    fn test_zero_budget_yields_empty() {
        let scores = scores_for(&["Cat cat."], &["cat"]);
        assert_eq!(assemble_summary(&scores, 0), "");
    }

    #[test]
    fn test_empty_scores_yield_empty() {
        let scores = SentenceScores::default();
        assert_eq!(assemble_summary(&scores, 10), "");
    }
}
