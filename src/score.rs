//! Sentence salience scoring against a normalized frequency table.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use crate::frequency::WordFrequencies;
use crate::tokenize::words;

/// Insertion-ordered map from sentence text to accumulated salience.
///
/// Keyed by the sentence's literal text: a sentence repeated verbatim
/// accumulates under a single key.
#[derive(Debug, Clone, Default)]
pub struct SentenceScores {
    entries: Vec<(String, f64)>,
    index: FxHashMap<String, usize>,
}

impl SentenceScores {
    /// Add `value` to the sentence's score, inserting it on first sight.
    fn add(&mut self, sentence: &str, value: f64) {
        match self.index.get(sentence) {
            Some(&i) => self.entries[i].1 += value,
            None => {
                self.index.insert(sentence.to_owned(), self.entries.len());
                self.entries.push((sentence.to_owned(), value));
            }
        }
    }

    /// Score of a sentence, if it scored at all.
    pub fn get(&self, sentence: &str) -> Option<f64> {
        self.index.get(sentence).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(sentence, value)| (sentence.as_str(), *value))
    }

    /// Sentence texts ranked by descending score; equal scores keep
    /// first-seen order.
    pub fn ranked(&self) -> Vec<&str> {
        let mut order: Vec<usize> = (0..self.entries.len()).collect();
        order.sort_by(|&a, &b| {
            self.entries[b]
                .1
                .partial_cmp(&self.entries[a].1)
                .unwrap_or(Ordering::Equal)
        });
        order
            .into_iter()
            .map(|i| self.entries[i].0.as_str())
            .collect()
    }
}

/// Score each sentence by summing the normalized frequencies of its words.
///
/// Sentences with `max_sentence_words` or more whitespace-delimited words
/// are skipped entirely. Each sentence is lowercased before tokenizing, and
/// only tokens present in `frequencies` contribute; sentences with no
/// contributing token are absent from the result. Frequency keys are
/// exact-case, so a key containing an uppercase letter never matches a
/// lowercased sentence token.
pub fn score_sentences(
    sentences: &[&str],
    frequencies: &WordFrequencies,
    max_sentence_words: usize,
) -> SentenceScores {
    let mut scores = SentenceScores::default();
    for sentence in sentences {
        if sentence.split_whitespace().count() >= max_sentence_words {
            continue;
        }
        let lowered = sentence.to_lowercase();
        for token in words(&lowered) {
            if let Some(value) = frequencies.get(token) {
                scores.add(sentence, value);
            }
        }
    }
    scores
}
