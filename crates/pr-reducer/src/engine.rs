//! Greedy reduction engine.
//!
//! Each step merges the two closest distinct syllables: every occurrence of
//! the rarer one is rewritten as the more frequent one. Steps repeat until
//! the text holds no more distinct syllables than the target.

use std::fmt;

use pr_core::{DistanceWeights, ReducerConfig};
use pr_phonetics::{Syllable, Text};
use tracing::{debug, info};

use crate::frequency::FrequencyTable;

/// Whether another merge is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReductionState {
    Running,
    Converged,
}

/// The closest pair of a scan, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyllablePair {
    pub first: Syllable,
    pub second: Syllable,
    pub distance: u32,
}

impl SyllablePair {
    /// Decide which side gets replaced.
    ///
    /// The strictly rarer syllable is replaced; on equal counts `second`
    /// (the later-seen one) is.
    pub fn orient(&self, table: &FrequencyTable) -> Substitution {
        let first_count = table.frequency(&self.first);
        let second_count = table.frequency(&self.second);
        if first_count < second_count {
            Substitution {
                replaced: self.first,
                replacement: self.second,
                distance: self.distance,
                replaced_count: first_count,
                replacement_count: second_count,
            }
        } else {
            Substitution {
                replaced: self.second,
                replacement: self.first,
                distance: self.distance,
                replaced_count: second_count,
                replacement_count: first_count,
            }
        }
    }
}

/// One applied merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub replaced: Syllable,
    pub replacement: Syllable,
    pub distance: u32,
    /// Occurrences of `replaced` before the merge.
    pub replaced_count: usize,
    /// Occurrences of `replacement` before the merge.
    pub replacement_count: usize,
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) -> {} ({}), distance {}",
            self.replaced, self.replaced_count, self.replacement, self.replacement_count, self.distance
        )
    }
}

/// Outcome of a full reduction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReductionReport {
    pub initial_distinct: usize,
    pub final_distinct: usize,
    /// Target as requested, before clamping.
    pub target: usize,
    pub steps: Vec<Substitution>,
}

impl ReductionReport {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn is_noop(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Greedy closest-pair merger.
#[derive(Debug, Clone)]
pub struct ReductionEngine {
    target: usize,
    weights: DistanceWeights,
}

impl ReductionEngine {
    pub fn new(target: usize) -> Self {
        Self { target, weights: DistanceWeights::default() }
    }

    pub fn from_config(target: usize, config: &ReducerConfig) -> Self {
        Self { target, weights: config.weights }
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// A target of 0 acts as 1: the last distinct syllable is never merged away.
    pub fn effective_target(&self) -> usize {
        self.target.max(1)
    }

    pub fn weights(&self) -> &DistanceWeights {
        &self.weights
    }

    pub fn state(&self, table: &FrequencyTable) -> ReductionState {
        if table.distinct_count() > self.effective_target() {
            ReductionState::Running
        } else {
            ReductionState::Converged
        }
    }

    /// Scan every unordered pair `i < j` in table order.
    ///
    /// Only a strictly smaller distance replaces the current best, so the
    /// first minimal pair found wins.
    pub fn closest_pair(&self, table: &FrequencyTable) -> Option<SyllablePair> {
        let syllables: Vec<&Syllable> = table.syllables().collect();
        let mut best: Option<SyllablePair> = None;
        for (i, first) in syllables.iter().enumerate() {
            for second in &syllables[i + 1..] {
                let distance = first.distance_with(second, &self.weights);
                if best.map_or(true, |b| distance < b.distance) {
                    best = Some(SyllablePair { first: **first, second: **second, distance });
                }
            }
        }
        best
    }

    /// Apply one merge to `text` and refresh `table`.
    ///
    /// Returns `None`, leaving both untouched, when fewer than two distinct
    /// syllables remain.
    pub fn step(&self, text: &mut Text, table: &mut FrequencyTable) -> Option<Substitution> {
        let substitution = self.closest_pair(table)?.orient(table);
        let rewritten = text.replace_all(&substitution.replaced, &substitution.replacement);
        table.rebuild(text);
        debug!(
            replaced = %substitution.replaced,
            replacement = %substitution.replacement,
            distance = substitution.distance,
            rewritten,
            distinct = table.distinct_count(),
            "Merged syllables"
        );
        Some(substitution)
    }

    /// Merge until converged.
    pub fn reduce(&self, text: &mut Text) -> ReductionReport {
        let mut table = FrequencyTable::from_text(text);
        let initial_distinct = table.distinct_count();
        let mut steps = Vec::new();

        while self.state(&table) == ReductionState::Running {
            match self.step(text, &mut table) {
                Some(substitution) => steps.push(substitution),
                None => break,
            }
        }

        let report = ReductionReport {
            initial_distinct,
            final_distinct: table.distinct_count(),
            target: self.target,
            steps,
        };
        info!(
            syllables = table.total(),
            steps = report.step_count(),
            initial = report.initial_distinct,
            remaining = report.final_distinct,
            target = self.target,
            "Reduction converged"
        );
        report
    }
}

/// Reduce `text` in place with default weights.
pub fn reduce_to(text: &mut Text, target: usize) -> ReductionReport {
    ReductionEngine::new(target).reduce(text)
}
