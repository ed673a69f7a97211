//! Syllable frequency table in first-seen order.

use indexmap::IndexMap;
use pr_phonetics::{Syllable, Text};

/// Count of every distinct syllable of a text.
///
/// Iteration follows first appearance in the text, so pair scans over the
/// table are reproducible from one run to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: IndexMap<Syllable, usize>,
}

impl FrequencyTable {
    pub fn from_text(text: &Text) -> Self {
        let mut counts = IndexMap::new();
        for syllable in text {
            *counts.entry(*syllable).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Recount from scratch after the text changed.
    pub fn rebuild(&mut self, text: &Text) {
        *self = Self::from_text(text);
    }

    pub fn distinct_count(&self) -> usize {
        self.counts.len()
    }

    /// Occurrences of `syllable`, 0 when absent.
    pub fn frequency(&self, syllable: &Syllable) -> usize {
        self.counts.get(syllable).copied().unwrap_or(0)
    }

    /// Distinct syllables, first seen first.
    pub fn syllables(&self) -> impl Iterator<Item = &Syllable> + '_ {
        self.counts.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Syllable, usize)> + '_ {
        self.counts.iter().map(|(s, &n)| (s, n))
    }

    /// Total number of syllable occurrences.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
