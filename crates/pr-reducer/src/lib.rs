//! PhonoReduce reducer: merge acoustically close syllables until a text
//! uses at most a target number of distinct syllables.

pub mod engine;
pub mod frequency;

pub use engine::{reduce_to, ReductionEngine, ReductionReport, ReductionState, Substitution, SyllablePair};
pub use frequency::FrequencyTable;
