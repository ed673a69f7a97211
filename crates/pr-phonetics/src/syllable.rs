//! Syllable: optional onset, vowel nucleus, optional coda.

use std::fmt;

use pr_core::DistanceWeights;

use crate::group::{optional_distance, ConsonantCluster, VowelNucleus};

/// An immutable syllable. Equality and hashing are structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Syllable {
    onset: Option<ConsonantCluster>,
    nucleus: VowelNucleus,
    coda: Option<ConsonantCluster>,
}

impl Syllable {
    pub fn new(onset: Option<ConsonantCluster>, nucleus: VowelNucleus, coda: Option<ConsonantCluster>) -> Self {
        Self { onset, nucleus, coda }
    }

    /// A bare nucleus, without onset or coda.
    pub fn nucleus_only(nucleus: VowelNucleus) -> Self {
        Self::new(None, nucleus, None)
    }

    pub fn onset(&self) -> Option<&ConsonantCluster> {
        self.onset.as_ref()
    }

    pub fn nucleus(&self) -> &VowelNucleus {
        &self.nucleus
    }

    pub fn coda(&self) -> Option<&ConsonantCluster> {
        self.coda.as_ref()
    }

    /// Distance under the default weights.
    pub fn distance_to(&self, other: &Syllable) -> u32 {
        self.distance_with(other, &DistanceWeights::default())
    }

    /// Weighted nucleus distance plus onset and coda terms.
    ///
    /// A component present on only one side costs its absence penalty,
    /// whatever the phonemes involved. Sums saturate at `u32::MAX`.
    pub fn distance_with(&self, other: &Syllable, weights: &DistanceWeights) -> u32 {
        let nucleus = self.nucleus.distance_to(&other.nucleus, weights).saturating_mul(weights.nucleus_weight);
        let onset = optional_distance(
            self.onset.as_ref(),
            other.onset.as_ref(),
            weights.onset_absence_penalty,
            |a, b| a.distance_to(b, weights),
        );
        let coda = optional_distance(
            self.coda.as_ref(),
            other.coda.as_ref(),
            weights.coda_absence_penalty,
            |a, b| a.distance_to(b, weights),
        );
        nucleus.saturating_add(onset).saturating_add(coda)
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(onset) = &self.onset {
            write!(f, "{onset}")?;
        }
        write!(f, "{}", self.nucleus)?;
        if let Some(coda) = &self.coda {
            write!(f, "{coda}")?;
        }
        Ok(())
    }
}
