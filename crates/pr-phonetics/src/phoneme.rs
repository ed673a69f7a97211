//! Phoneme records: one IPA symbol with its articulatory features.

use std::fmt;

use crate::features::*;

/// Combining tilde marking a nasal vowel.
pub const NASAL_MARK: char = '\u{0303}';

/// A consonant of the IPA inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Consonant {
    pub symbol: char,
    pub manner: Manner,
    pub place: ConsonantPlace,
    pub phonation: Phonation,
    pub cavity: Cavity,
    pub flow: Flow,
    pub airstream: Airstream,
}

impl Consonant {
    pub const fn new(
        symbol: char,
        manner: Manner,
        place: ConsonantPlace,
        phonation: Phonation,
        cavity: Cavity,
        flow: Flow,
        airstream: Airstream,
    ) -> Self {
        Self { symbol, manner, place, phonation, cavity, flow, airstream }
    }

    pub fn is_vocalic(&self) -> bool {
        self.manner.is_vocalic()
    }

    pub fn is_nasal(&self) -> bool {
        self.cavity.is_nasal()
    }

    pub fn is_voiced(&self) -> bool {
        self.phonation.is_voiced()
    }

    pub fn is_continuant(&self) -> bool {
        self.manner.is_continuant()
    }

    pub fn is_compact(&self) -> bool {
        self.place.is_compact()
    }

    pub fn is_acute(&self) -> bool {
        self.place.is_acute()
    }
}

/// A vowel of the IPA inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vowel {
    pub symbol: char,
    pub aperture: Aperture,
    pub place: VowelPlace,
    pub rounding: Rounding,
}

impl Vowel {
    pub const fn new(symbol: char, aperture: Aperture, place: VowelPlace, rounding: Rounding) -> Self {
        Self { symbol, aperture, place, rounding }
    }

    pub fn is_back(&self) -> bool {
        self.place.is_back()
    }

    pub fn is_high(&self) -> bool {
        self.aperture.is_high()
    }

    pub fn is_rounded(&self) -> bool {
        self.rounding.is_rounded()
    }

    pub fn is_open(&self) -> bool {
        self.aperture.is_open()
    }
}

/// Consonant or vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhonemeClass {
    Consonant,
    Vowel,
}

impl fmt::Display for PhonemeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Consonant => write!(f, "consonant"),
            Self::Vowel => write!(f, "vowel"),
        }
    }
}

/// Any phoneme of the inventory, tagged with its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phoneme {
    Consonant(Consonant),
    Vowel(Vowel),
}

impl Phoneme {
    pub fn symbol(&self) -> char {
        match self {
            Self::Consonant(c) => c.symbol,
            Self::Vowel(v) => v.symbol,
        }
    }

    pub fn class(&self) -> PhonemeClass {
        match self {
            Self::Consonant(_) => PhonemeClass::Consonant,
            Self::Vowel(_) => PhonemeClass::Vowel,
        }
    }

    pub fn as_consonant(&self) -> Option<Consonant> {
        match self {
            Self::Consonant(c) => Some(*c),
            Self::Vowel(_) => None,
        }
    }

    pub fn as_vowel(&self) -> Option<Vowel> {
        match self {
            Self::Vowel(v) => Some(*v),
            Self::Consonant(_) => None,
        }
    }
}

impl fmt::Display for Consonant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

impl fmt::Display for Vowel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
