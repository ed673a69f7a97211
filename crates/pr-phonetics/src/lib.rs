//! PhonoReduce phonetics: the IPA feature model and its distance metrics.
//!
//! Layers, leaf first:
//! 1. `features` / `phoneme`: articulatory categories, derived acoustic traits
//! 2. `inventory`: the fixed consonant and vowel tables, indexed by symbol
//! 3. `distance`: Hamming distance between phonemes of one class
//! 4. `group`: consonant clusters and vowel nuclei
//! 5. `syllable` / `text`: weighted syllable distance, ordered transcripts

pub mod distance;
pub mod features;
pub mod group;
pub mod inventory;
pub mod phoneme;
pub mod syllable;
pub mod text;

pub use distance::phoneme_distance;
pub use group::{ConsonantCluster, VowelNucleus};
pub use inventory::{lookup, INVENTORY};
pub use phoneme::{Consonant, Phoneme, PhonemeClass, Vowel, NASAL_MARK};
pub use syllable::Syllable;
pub use text::{Text, SEPARATOR};
