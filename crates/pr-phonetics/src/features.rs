//! Articulatory feature categories and the binary acoustic traits derived from them.

/// Manner of articulation of a consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Manner {
    /// Full closure: stops and nasal stops.
    Plosive,
    Trill,
    /// Taps and flaps.
    Tap,
    Fricative,
    /// Approximants, lateral approximants included.
    Approximant,
    Click,
}

impl Manner {
    /// Liquids and approximants carry the 'vocalic' trait.
    pub fn is_vocalic(self) -> bool {
        matches!(self, Self::Trill | Self::Tap | Self::Approximant)
    }

    /// Airflow through the mouth is never fully interrupted.
    pub fn is_continuant(self) -> bool {
        matches!(self, Self::Fricative | Self::Approximant | Self::Trill)
    }
}

/// Place of articulation of a consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsonantPlace {
    Bilabial,
    Labiodental,
    Dental,
    Alveolar,
    PostAlveolar,
    Retroflex,
    AlveoloPalatal,
    Palatal,
    Velar,
    Uvular,
    Pharyngeal,
    Epiglottal,
    Glottal,
    LabioVelar,
    LabioPalatal,
    PostAlveoloVelar,
    /// Clicks carry no single place in the table.
    Unspecified,
}

impl ConsonantPlace {
    /// Articulations behind the alveolar ridge concentrate energy mid-spectrum.
    pub fn is_compact(self) -> bool {
        matches!(
            self,
            Self::PostAlveolar
                | Self::Retroflex
                | Self::AlveoloPalatal
                | Self::Palatal
                | Self::Velar
                | Self::Uvular
                | Self::Pharyngeal
                | Self::Epiglottal
                | Self::Glottal
                | Self::LabioVelar
                | Self::LabioPalatal
                | Self::PostAlveoloVelar
        )
    }

    /// Dental, alveolar and palatal articulations; labials and back places are grave.
    pub fn is_acute(self) -> bool {
        matches!(
            self,
            Self::Dental
                | Self::Alveolar
                | Self::PostAlveolar
                | Self::Retroflex
                | Self::AlveoloPalatal
                | Self::Palatal
                | Self::LabioPalatal
                | Self::PostAlveoloVelar
        )
    }
}

/// Vocal fold vibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phonation {
    Voiceless,
    Voiced,
    Unspecified,
}

impl Phonation {
    pub fn is_voiced(self) -> bool {
        self == Self::Voiced
    }
}

/// Velum position: oral or nasal resonance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cavity {
    Oral,
    Nasal,
    Unspecified,
}

impl Cavity {
    pub fn is_nasal(self) -> bool {
        self == Self::Nasal
    }
}

/// Path of the airflow over the tongue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    Central,
    Lateral,
    NotApplicable,
}

/// Airstream mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Airstream {
    Pulmonic,
    Implosive,
    Click,
    Unspecified,
}

/// Vowel height, from close to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aperture {
    Close,
    NearClose,
    CloseMid,
    Mid,
    OpenMid,
    NearOpen,
    Open,
}

impl Aperture {
    pub fn is_high(self) -> bool {
        matches!(self, Self::Close | Self::NearClose)
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open | Self::NearOpen)
    }
}

/// Vowel backness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelPlace {
    Front,
    NearFront,
    Central,
    NearBack,
    Back,
}

impl VowelPlace {
    pub fn is_back(self) -> bool {
        matches!(self, Self::Back | Self::NearBack)
    }
}

/// Lip rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    Rounded,
    Unrounded,
    /// Schwa-like vowels listed without a rounding value.
    Unspecified,
}

impl Rounding {
    pub fn is_rounded(self) -> bool {
        self == Self::Rounded
    }
}
