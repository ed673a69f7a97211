//! Phoneme groups: consonant clusters (onset, coda) and vowel nuclei.

use std::fmt;

use pr_core::DistanceWeights;

use crate::phoneme::{Consonant, Vowel, NASAL_MARK};

/// Distance between two optional components.
///
/// Both present: `measure`. Exactly one present: `penalty`. Neither: 0.
pub(crate) fn optional_distance<T>(
    a: Option<&T>,
    b: Option<&T>,
    penalty: u32,
    measure: impl FnOnce(&T, &T) -> u32,
) -> u32 {
    match (a, b) {
        (Some(x), Some(y)) => measure(x, y),
        (None, None) => 0,
        _ => penalty,
    }
}

/// One or two consonants, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConsonantCluster {
    pub first: Consonant,
    pub second: Option<Consonant>,
}

impl ConsonantCluster {
    pub fn single(first: Consonant) -> Self {
        Self { first, second: None }
    }

    pub fn pair(first: Consonant, second: Consonant) -> Self {
        Self { first, second: Some(second) }
    }

    pub fn consonants(&self) -> impl Iterator<Item = &Consonant> {
        std::iter::once(&self.first).chain(self.second.as_ref())
    }

    pub fn distance_to(&self, other: &ConsonantCluster, weights: &DistanceWeights) -> u32 {
        self.first.distance(&other.first).saturating_add(optional_distance(
            self.second.as_ref(),
            other.second.as_ref(),
            weights.cluster_absence_penalty,
            |a, b| a.distance(b),
        ))
    }
}

impl fmt::Display for ConsonantCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        if let Some(second) = &self.second {
            write!(f, "{second}")?;
        }
        Ok(())
    }
}

/// A syllable nucleus: optional semivowel, base vowel, nasal flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VowelNucleus {
    pub semivowel: Option<Vowel>,
    pub vowel: Vowel,
    pub nasal: bool,
}

impl VowelNucleus {
    pub fn new(vowel: Vowel) -> Self {
        Self { semivowel: None, vowel, nasal: false }
    }

    pub fn nasalized(vowel: Vowel) -> Self {
        Self { semivowel: None, vowel, nasal: true }
    }

    pub fn with_semivowel(semivowel: Vowel, vowel: Vowel) -> Self {
        Self { semivowel: Some(semivowel), vowel, nasal: false }
    }

    pub fn set_nasal(mut self, nasal: bool) -> Self {
        self.nasal = nasal;
        self
    }

    pub fn is_nasal(&self) -> bool {
        self.nasal
    }

    pub fn distance_to(&self, other: &VowelNucleus, weights: &DistanceWeights) -> u32 {
        let nasal = if self.nasal != other.nasal { weights.nasal_mismatch_penalty } else { 0 };
        self.vowel
            .distance(&other.vowel)
            .saturating_add(optional_distance(
                self.semivowel.as_ref(),
                other.semivowel.as_ref(),
                weights.semivowel_absence_penalty,
                |a, b| a.distance(b),
            ))
            .saturating_add(nasal)
    }
}

impl fmt::Display for VowelNucleus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(semivowel) = &self.semivowel {
            write!(f, "{semivowel}")?;
        }
        write!(f, "{}", self.vowel)?;
        if self.nasal {
            write!(f, "{NASAL_MARK}")?;
        }
        Ok(())
    }
}
