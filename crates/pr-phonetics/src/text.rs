//! Text: syllables in reading order.

use std::collections::HashSet;
use std::fmt;

use crate::syllable::Syllable;

/// Syllable separator used when reading and writing transcripts.
pub const SEPARATOR: char = '.';

/// An ordered sequence of syllables. Duplicates are kept; they carry frequency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    syllables: Vec<Syllable>,
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, syllable: Syllable) {
        self.syllables.push(syllable);
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Syllable> {
        self.syllables.iter()
    }

    /// Number of structurally distinct syllables.
    pub fn distinct_count(&self) -> usize {
        self.syllables.iter().collect::<HashSet<_>>().len()
    }

    /// Replace every occurrence of `from` with `to`, in place.
    ///
    /// Returns the number of positions rewritten.
    pub fn replace_all(&mut self, from: &Syllable, to: &Syllable) -> usize {
        let mut replaced = 0;
        for slot in self.syllables.iter_mut().filter(|s| **s == *from) {
            *slot = *to;
            replaced += 1;
        }
        replaced
    }
}

impl From<Vec<Syllable>> for Text {
    fn from(syllables: Vec<Syllable>) -> Self {
        Self { syllables }
    }
}

impl FromIterator<Syllable> for Text {
    fn from_iter<I: IntoIterator<Item = Syllable>>(iter: I) -> Self {
        Self { syllables: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Text {
    type Item = &'a Syllable;
    type IntoIter = std::slice::Iter<'a, Syllable>;

    fn into_iter(self) -> Self::IntoIter {
        self.syllables.iter()
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, syllable) in self.syllables.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{syllable}")?;
        }
        Ok(())
    }
}
