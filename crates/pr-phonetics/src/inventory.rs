//! The fixed IPA phoneme inventory.
//!
//! Consonants and vowels are declared once, in table order, as static data.
//! [`INVENTORY`] indexes them by symbol on first use and is never mutated
//! afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::features::{
    Airstream as Air, Aperture as Ap, Cavity as Cv, ConsonantPlace as P, Flow as Fl, Manner as M,
    Phonation as Ph, Rounding as Rd, VowelPlace as Vp,
};
use crate::phoneme::{Consonant, Phoneme, Vowel};

const fn cons(symbol: char, manner: M, place: P, phonation: Ph, cavity: Cv, flow: Fl, airstream: Air) -> Consonant {
    Consonant::new(symbol, manner, place, phonation, cavity, flow, airstream)
}

const fn vow(symbol: char, aperture: Ap, place: Vp, rounding: Rd) -> Vowel {
    Vowel::new(symbol, aperture, place, rounding)
}

/// Pulmonic, implosive, click and co-articulated consonants.
pub static CONSONANTS: [Consonant; 79] = [
    cons('p', M::Plosive, P::Bilabial, Ph::Voiceless, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('b', M::Plosive, P::Bilabial, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('t', M::Plosive, P::Alveolar, Ph::Voiceless, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('d', M::Plosive, P::Alveolar, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ʈ', M::Plosive, P::Retroflex, Ph::Voiceless, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ɖ', M::Plosive, P::Retroflex, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('c', M::Plosive, P::Palatal, Ph::Voiceless, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ɟ', M::Plosive, P::Palatal, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('k', M::Plosive, P::Velar, Ph::Voiceless, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ɡ', M::Plosive, P::Velar, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('q', M::Plosive, P::Uvular, Ph::Voiceless, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ɢ', M::Plosive, P::Uvular, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ʔ', M::Plosive, P::Glottal, Ph::Voiceless, Cv::Unspecified, Fl::NotApplicable, Air::Unspecified),
    cons('m', M::Plosive, P::Bilabial, Ph::Voiced, Cv::Nasal, Fl::Central, Air::Pulmonic),
    cons('ɱ', M::Plosive, P::Labiodental, Ph::Voiced, Cv::Nasal, Fl::Central, Air::Pulmonic),
    cons('n', M::Plosive, P::Alveolar, Ph::Voiced, Cv::Nasal, Fl::Central, Air::Pulmonic),
    cons('ɳ', M::Plosive, P::Retroflex, Ph::Voiced, Cv::Nasal, Fl::Central, Air::Pulmonic),
    cons('ɲ', M::Plosive, P::Palatal, Ph::Voiced, Cv::Nasal, Fl::Central, Air::Pulmonic),
    cons('ŋ', M::Plosive, P::Velar, Ph::Voiced, Cv::Nasal, Fl::Central, Air::Pulmonic),
    cons('ɴ', M::Plosive, P::Uvular, Ph::Voiced, Cv::Nasal, Fl::Central, Air::Pulmonic),
    cons('ʙ', M::Trill, P::Bilabial, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('r', M::Trill, P::Alveolar, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ʀ', M::Trill, P::Uvular, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ɾ', M::Tap, P::Alveolar, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ɽ', M::Tap, P::Retroflex, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ɸ', M::Fricative, P::Bilabial, Ph::Voiceless, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('β', M::Fricative, P::Bilabial, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('f', M::Fricative, P::Labiodental, Ph::Voiceless, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('v', M::Fricative, P::Labiodental, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('θ', M::Fricative, P::Dental, Ph::Voiceless, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ð', M::Fricative, P::Dental, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('s', M::Fricative, P::Alveolar, Ph::Voiceless, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('z', M::Fricative, P::Alveolar, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ʃ', M::Fricative, P::PostAlveolar, Ph::Voiceless, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ʒ', M::Fricative, P::PostAlveolar, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ʂ', M::Fricative, P::Retroflex, Ph::Voiceless, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ʐ', M::Fricative, P::Retroflex, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ç', M::Fricative, P::Palatal, Ph::Voiceless, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ʝ', M::Fricative, P::Palatal, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('x', M::Fricative, P::Velar, Ph::Voiceless, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ɣ', M::Fricative, P::Velar, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('χ', M::Fricative, P::Uvular, Ph::Voiceless, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ʁ', M::Fricative, P::Uvular, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ħ', M::Fricative, P::Pharyngeal, Ph::Voiceless, Cv::Oral, Fl::NotApplicable, Air::Pulmonic),
    cons('ʕ', M::Fricative, P::Pharyngeal, Ph::Voiced, Cv::Oral, Fl::NotApplicable, Air::Pulmonic),
    cons('h', M::Fricative, P::Glottal, Ph::Voiceless, Cv::Oral, Fl::NotApplicable, Air::Pulmonic),
    cons('ɦ', M::Fricative, P::Glottal, Ph::Voiced, Cv::Oral, Fl::NotApplicable, Air::Pulmonic),
    cons('ɬ', M::Fricative, P::Alveolar, Ph::Voiceless, Cv::Oral, Fl::Lateral, Air::Pulmonic),
    cons('ɮ', M::Fricative, P::Alveolar, Ph::Voiced, Cv::Oral, Fl::Lateral, Air::Pulmonic),
    cons('ʋ', M::Approximant, P::Labiodental, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ɹ', M::Approximant, P::Alveolar, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ɻ', M::Approximant, P::Retroflex, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('j', M::Approximant, P::Palatal, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ɰ', M::Approximant, P::Velar, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('l', M::Approximant, P::Alveolar, Ph::Voiced, Cv::Oral, Fl::Lateral, Air::Pulmonic),
    cons('ɭ', M::Approximant, P::Retroflex, Ph::Voiced, Cv::Oral, Fl::Lateral, Air::Pulmonic),
    cons('ʎ', M::Approximant, P::Palatal, Ph::Voiced, Cv::Oral, Fl::Lateral, Air::Pulmonic),
    cons('ʟ', M::Approximant, P::Velar, Ph::Voiced, Cv::Oral, Fl::Lateral, Air::Pulmonic),
    cons('ɓ', M::Plosive, P::Bilabial, Ph::Voiced, Cv::Oral, Fl::Central, Air::Implosive),
    cons('ɗ', M::Plosive, P::Alveolar, Ph::Voiced, Cv::Oral, Fl::Central, Air::Implosive),
    cons('ʄ', M::Plosive, P::Palatal, Ph::Voiced, Cv::Oral, Fl::Central, Air::Implosive),
    cons('ɠ', M::Plosive, P::Velar, Ph::Voiced, Cv::Oral, Fl::Central, Air::Implosive),
    cons('ʛ', M::Plosive, P::Uvular, Ph::Voiced, Cv::Oral, Fl::Central, Air::Implosive),
    cons('ʍ', M::Approximant, P::LabioVelar, Ph::Voiceless, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('w', M::Approximant, P::LabioVelar, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ɥ', M::Approximant, P::LabioPalatal, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ʜ', M::Fricative, P::Epiglottal, Ph::Voiceless, Cv::Oral, Fl::NotApplicable, Air::Pulmonic),
    cons('ʡ', M::Plosive, P::Epiglottal, Ph::Voiceless, Cv::Oral, Fl::NotApplicable, Air::Pulmonic),
    cons('ʢ', M::Fricative, P::Epiglottal, Ph::Voiced, Cv::Oral, Fl::NotApplicable, Air::Pulmonic),
    cons('ɧ', M::Fricative, P::PostAlveoloVelar, Ph::Voiceless, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ʘ', M::Click, P::Unspecified, Ph::Unspecified, Cv::Unspecified, Fl::Central, Air::Click),
    cons('ǀ', M::Click, P::Unspecified, Ph::Unspecified, Cv::Unspecified, Fl::Central, Air::Click),
    cons('ǃ', M::Click, P::Unspecified, Ph::Unspecified, Cv::Unspecified, Fl::Central, Air::Click),
    cons('ǂ', M::Click, P::Unspecified, Ph::Unspecified, Cv::Unspecified, Fl::Central, Air::Click),
    cons('ǁ', M::Click, P::Unspecified, Ph::Unspecified, Cv::Unspecified, Fl::Lateral, Air::Click),
    cons('ɺ', M::Tap, P::Alveolar, Ph::Voiced, Cv::Oral, Fl::Lateral, Air::Pulmonic),
    cons('ɕ', M::Fricative, P::AlveoloPalatal, Ph::Voiceless, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ʑ', M::Fricative, P::AlveoloPalatal, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
    cons('ⱱ', M::Tap, P::Labiodental, Ph::Voiced, Cv::Oral, Fl::Central, Air::Pulmonic),
];

/// Monophthong vowels.
pub static VOWELS: [Vowel; 29] = [
    vow('i', Ap::Close, Vp::Front, Rd::Unrounded),
    vow('e', Ap::CloseMid, Vp::Front, Rd::Unrounded),
    vow('ɛ', Ap::OpenMid, Vp::Front, Rd::Unrounded),
    vow('a', Ap::Open, Vp::Front, Rd::Unrounded),
    vow('ɑ', Ap::Open, Vp::Back, Rd::Unrounded),
    vow('ɔ', Ap::OpenMid, Vp::Back, Rd::Rounded),
    vow('o', Ap::CloseMid, Vp::Back, Rd::Rounded),
    vow('u', Ap::Close, Vp::Back, Rd::Rounded),
    vow('y', Ap::Close, Vp::Front, Rd::Rounded),
    vow('ø', Ap::CloseMid, Vp::Front, Rd::Rounded),
    vow('œ', Ap::OpenMid, Vp::Front, Rd::Rounded),
    vow('ɶ', Ap::Open, Vp::Front, Rd::Rounded),
    vow('ɒ', Ap::OpenMid, Vp::Back, Rd::Rounded),
    vow('ʌ', Ap::OpenMid, Vp::Back, Rd::Unrounded),
    vow('ɤ', Ap::CloseMid, Vp::Back, Rd::Unrounded),
    vow('ɯ', Ap::Close, Vp::Back, Rd::Unrounded),
    vow('ɨ', Ap::Close, Vp::Central, Rd::Unrounded),
    vow('ʉ', Ap::Close, Vp::Central, Rd::Rounded),
    vow('ɪ', Ap::NearClose, Vp::NearFront, Rd::Unrounded),
    vow('ʏ', Ap::NearClose, Vp::NearFront, Rd::Rounded),
    vow('ʊ', Ap::NearClose, Vp::NearBack, Rd::Rounded),
    vow('ə', Ap::Mid, Vp::Central, Rd::Unspecified),
    vow('ɵ', Ap::CloseMid, Vp::Central, Rd::Rounded),
    vow('ɐ', Ap::NearOpen, Vp::Central, Rd::Unspecified),
    vow('æ', Ap::NearOpen, Vp::Front, Rd::Unrounded),
    vow('ɜ', Ap::OpenMid, Vp::Central, Rd::Unrounded),
    vow('ɞ', Ap::OpenMid, Vp::Central, Rd::Rounded),
    vow('ɘ', Ap::CloseMid, Vp::Central, Rd::Unrounded),
    vow('ä', Ap::Open, Vp::Central, Rd::Unspecified),
];

/// Symbol registry over [`CONSONANTS`] and [`VOWELS`].
#[derive(Debug)]
pub struct Inventory {
    ordered: Vec<Phoneme>,
    by_symbol: HashMap<char, Phoneme>,
}

impl Inventory {
    fn build() -> Self {
        let ordered: Vec<Phoneme> = CONSONANTS
            .iter()
            .copied()
            .map(Phoneme::Consonant)
            .chain(VOWELS.iter().copied().map(Phoneme::Vowel))
            .collect();
        let by_symbol = ordered.iter().map(|p| (p.symbol(), *p)).collect();
        Self { ordered, by_symbol }
    }

    /// Every phoneme, consonants first, in declaration order.
    pub fn all(&self) -> &[Phoneme] {
        &self.ordered
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn get(&self, symbol: char) -> Option<Phoneme> {
        self.by_symbol.get(&symbol).copied()
    }

    pub fn consonant(&self, symbol: char) -> Option<Consonant> {
        self.get(symbol).and_then(|p| p.as_consonant())
    }

    pub fn vowel(&self, symbol: char) -> Option<Vowel> {
        self.get(symbol).and_then(|p| p.as_vowel())
    }
}

/// The process-wide phoneme registry.
pub static INVENTORY: LazyLock<Inventory> = LazyLock::new(Inventory::build);

/// Look up any phoneme by its IPA symbol.
pub fn lookup(symbol: char) -> Option<Phoneme> {
    INVENTORY.get(symbol)
}

pub fn consonant(symbol: char) -> Option<Consonant> {
    INVENTORY.consonant(symbol)
}

pub fn vowel(symbol: char) -> Option<Vowel> {
    INVENTORY.vowel(symbol)
}
