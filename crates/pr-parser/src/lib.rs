//! Transcript parsing for PhonoReduce.
//!
//! Input is a single line of IPA syllables separated by `.`, for example
//! `pa.ta.plan`. Serialization is `Text`'s `Display`, which this parser
//! reads back unchanged.

pub mod ipa;
pub mod traits;

mod reader;

pub use ipa::IpaParser;
pub use traits::TranscriptParser;

use pr_core::Result;
use pr_phonetics::{Syllable, Text};
use tracing::debug;

use reader::Reader;

/// Parse a whole transcript. Blank input yields an empty text.
pub fn parse_text(input: &str) -> Result<Text> {
    let text = Reader::new(input).text()?;
    debug!(syllables = text.len(), distinct = text.distinct_count(), "Parsed transcript");
    Ok(text)
}

/// Parse exactly one syllable, e.g. `plan` or `ia\u{303}`.
pub fn parse_syllable(input: &str) -> Result<Syllable> {
    Reader::new(input).single()
}

#[cfg(test)]
mod tests;
