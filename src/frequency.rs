//! Word-frequency accumulation, normalization, and keyword ranking.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::WebgistError;

/// Insertion-ordered map from word to frequency.
///
/// Counting stores whole-number counts; [`WordFrequencies::normalize`]
/// rescales them so the most frequent word sits at exactly 1.0. Keys are
/// exact strings with no case folding, and iteration follows first-seen
/// order, which keeps every downstream ranking deterministic.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies {
    entries: Vec<(String, f64)>,
    index: FxHashMap<String, usize>,
}

impl WordFrequencies {
    pub fn new() -> WordFrequencies {
        WordFrequencies::default()
    }

    /// Record one occurrence of `word`: insert at 1.0 when absent,
    /// otherwise increment.
    pub fn add(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&i) => self.entries[i].1 += 1.0,
            None => {
                self.index.insert(word.to_owned(), self.entries.len());
                self.entries.push((word.to_owned(), 1.0));
            }
        }
    }

    /// Frequency of `word`, if it was ever counted.
    pub fn get(&self, word: &str) -> Option<f64> {
        self.index.get(word).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(word, value)| (word.as_str(), *value))
    }

    /// Largest stored value, `None` when nothing was counted.
    pub fn max_value(&self) -> Option<f64> {
        self.entries.iter().map(|entry| entry.1).reduce(f64::max)
    }

    /// Divide every value by the maximum so the top word scores exactly 1.0.
    ///
    /// Fails with [`WebgistError::EmptyInput`] when nothing was counted; an
    /// empty table has no maximum to scale by.
    pub fn normalize(mut self) -> Result<WordFrequencies, WebgistError> {
        let max = self.max_value().ok_or(WebgistError::EmptyInput)?;
        for entry in &mut self.entries {
            entry.1 /= max;
        }
        Ok(self)
    }

    /// Up to `n` words, most frequent first. Equal frequencies keep
    /// first-seen order.
    pub fn top_words(&self, n: usize) -> Vec<String> {
        let mut order: Vec<usize> = (0..self.entries.len()).collect();
        order.sort_by(|&a, &b| {
            self.entries[b]
                .1
                .partial_cmp(&self.entries[a].1)
                .unwrap_or(Ordering::Equal)
        });
        order
            .into_iter()
            .take(n)
            .map(|i| self.entries[i].0.clone())
            .collect()
    }
}

/// Count words by exact string identity, preserving first-seen order.
pub fn count_words<'a, I>(words: I) -> WordFrequencies
where
    I: IntoIterator<Item = &'a str>,
{
    let mut frequencies = WordFrequencies::new();
    for word in words {
        frequencies.add(word);
    }
    frequencies
}

impl Serialize for WordFrequencies {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, value) in self.iter() {
            map.serialize_entry(word, &value)?;
        }
        map.end()
    }
}
