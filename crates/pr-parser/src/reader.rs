//! Character reader for the dotted IPA transcript grammar.
//!
//! ```text
//! text     := syllable ('.' syllable)* '.'?
//! syllable := cluster? nucleus cluster?
//! cluster  := consonant consonant?
//! nucleus  := '~'? vowel '~'? vowel? '~'?
//! ```
//!
//! `~` stands for the combining tilde U+0303. Offsets reported in errors are
//! byte offsets into the caller's input, surrounding whitespace included.

use std::iter::Peekable;
use std::str::CharIndices;

use pr_core::{PrError, Result};
use pr_phonetics::{inventory, lookup, Consonant, ConsonantCluster, Syllable, Text, Vowel, VowelNucleus, NASAL_MARK, SEPARATOR};

/// True for characters the grammar knows: phonemes, the separator, the tilde.
fn is_known(ch: char) -> bool {
    ch == SEPARATOR || ch == NASAL_MARK || lookup(ch).is_some()
}

pub(crate) struct Reader<'a> {
    chars: Peekable<CharIndices<'a>>,
    base: usize,
    end: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        let trimmed = input.trim();
        let base = input.len() - input.trim_start().len();
        Self {
            chars: trimmed.char_indices().peekable(),
            base,
            end: base + trimmed.len(),
        }
    }

    fn peek(&mut self) -> Option<(usize, char)> {
        let base = self.base;
        self.chars.peek().map(|&(i, ch)| (base + i, ch))
    }

    fn bump(&mut self) {
        self.chars.next();
    }

    fn at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    pub(crate) fn text(&mut self) -> Result<Text> {
        let mut text = Text::new();
        if self.at_end() {
            return Ok(text);
        }
        loop {
            text.push(self.syllable()?);
            match self.peek() {
                None => break,
                Some((_, SEPARATOR)) => {
                    self.bump();
                    if self.at_end() {
                        break;
                    }
                }
                Some((offset, ch)) if is_known(ch) => {
                    return Err(PrError::ExpectedSeparator { found: ch, offset });
                }
                Some((offset, ch)) => return Err(PrError::UnknownSymbol { symbol: ch, offset }),
            }
        }
        Ok(text)
    }

    /// Exactly one syllable, with nothing after it.
    pub(crate) fn single(&mut self) -> Result<Syllable> {
        let syllable = self.syllable()?;
        match self.peek() {
            None => Ok(syllable),
            Some((offset, ch)) if !is_known(ch) => Err(PrError::UnknownSymbol { symbol: ch, offset }),
            Some((offset, _)) => Err(PrError::TrailingInput { offset }),
        }
    }

    fn syllable(&mut self) -> Result<Syllable> {
        let onset = self.cluster();
        let nucleus = self.nucleus()?;
        let coda = self.cluster();
        Ok(Syllable::new(onset, nucleus, coda))
    }

    /// Greedy: up to two consonants.
    fn cluster(&mut self) -> Option<ConsonantCluster> {
        let first = self.consonant()?;
        Some(match self.consonant() {
            Some(second) => ConsonantCluster::pair(first, second),
            None => ConsonantCluster::single(first),
        })
    }

    fn nucleus(&mut self) -> Result<VowelNucleus> {
        let mut nasal = self.nasal_mark();
        let Some(first) = self.vowel() else {
            return Err(self.missing_nucleus());
        };
        nasal |= self.nasal_mark();
        let nucleus = match self.vowel() {
            Some(second) => VowelNucleus::with_semivowel(first, second),
            None => VowelNucleus::new(first),
        };
        nasal |= self.nasal_mark();
        Ok(nucleus.set_nasal(nasal))
    }

    fn missing_nucleus(&mut self) -> PrError {
        match self.peek() {
            Some((offset, ch)) if !is_known(ch) => PrError::UnknownSymbol { symbol: ch, offset },
            Some((offset, _)) => PrError::MissingNucleus { offset },
            None => PrError::MissingNucleus { offset: self.end },
        }
    }

    fn consonant(&mut self) -> Option<Consonant> {
        let (_, ch) = self.peek()?;
        let consonant = inventory::consonant(ch)?;
        self.bump();
        Some(consonant)
    }

    fn vowel(&mut self) -> Option<Vowel> {
        let (_, ch) = self.peek()?;
        let vowel = inventory::vowel(ch)?;
        self.bump();
        Some(vowel)
    }

    fn nasal_mark(&mut self) -> bool {
        match self.peek() {
            Some((_, NASAL_MARK)) => {
                self.bump();
                true
            }
            _ => false,
        }
    }
}
