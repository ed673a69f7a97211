//! Dotted IPA transcript parser.

use pr_core::Result;
use pr_phonetics::Text;

use crate::{parse_text, traits::TranscriptParser};

/// Parser for `.`-separated IPA syllable transcripts.
pub struct IpaParser;

impl IpaParser {
    pub fn new() -> Self { Self }
}

impl TranscriptParser for IpaParser {
    fn parse_content(&self, content: &str) -> Result<Text> {
        parse_text(content)
    }

    fn supported_extensions(&self) -> Vec<String> {
        vec![".ipa".into(), ".txt".into()]
    }
}

impl Default for IpaParser {
    fn default() -> Self { Self::new() }
}
