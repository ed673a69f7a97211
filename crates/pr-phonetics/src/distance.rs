//! Phoneme distance: Hamming distance over the derived acoustic traits.

use pr_core::{PrError, Result};

use crate::phoneme::{Consonant, Phoneme, Vowel};

/// Number of traits compared between two consonants.
pub const CONSONANT_TRAITS: u32 = 6;
/// Number of traits compared between two vowels.
pub const VOWEL_TRAITS: u32 = 4;

#[inline]
fn differs(a: bool, b: bool) -> u32 {
    (a ^ b) as u32
}

impl Consonant {
    /// Distance in `0..=6` over vocalic, nasal, voiced, continuant, compact and acute.
    pub fn distance(&self, other: &Consonant) -> u32 {
        differs(self.is_vocalic(), other.is_vocalic())
            + differs(self.is_nasal(), other.is_nasal())
            + differs(self.is_voiced(), other.is_voiced())
            + differs(self.is_continuant(), other.is_continuant())
            + differs(self.is_compact(), other.is_compact())
            + differs(self.is_acute(), other.is_acute())
    }
}

impl Vowel {
    /// Distance in `0..=4`: backness, then height, rounding and openness.
    pub fn distance(&self, other: &Vowel) -> u32 {
        differs(self.is_back(), other.is_back())
            + differs(self.is_high(), other.is_high())
            + differs(self.is_rounded(), other.is_rounded())
            + differs(self.is_open(), other.is_open())
    }
}

/// Distance between two phonemes of the same class.
///
/// Comparing a consonant with a vowel is a caller error and fails with
/// [`PrError::InvalidPhonemeClass`].
pub fn phoneme_distance(a: &Phoneme, b: &Phoneme) -> Result<u32> {
    match (a, b) {
        (Phoneme::Consonant(x), Phoneme::Consonant(y)) => Ok(x.distance(y)),
        (Phoneme::Vowel(x), Phoneme::Vowel(y)) => Ok(x.distance(y)),
        _ => Err(PrError::InvalidPhonemeClass { left: a.symbol(), right: b.symbol() }),
    }
}
