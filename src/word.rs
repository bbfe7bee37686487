//! Five-letter lowercase words.

use crate::WORD_LENGTH;
use std::fmt;

/// An immutable five-letter lowercase ASCII word.
///
/// Used both as a secret and as a guess. Construction case-folds its input,
/// so two words compare equal regardless of how they were typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parse a word, folding it to lowercase.
    ///
    /// Returns `None` unless the text is exactly five ASCII letters.
    pub fn parse(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        if bytes.len() != WORD_LENGTH || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return None;
        }
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, b) in letters.iter_mut().zip(bytes) {
            *slot = b.to_ascii_lowercase();
        }
        Some(Self(letters))
    }

    /// The letters as lowercase ASCII bytes (`b'a'..=b'z'`)
    pub fn letters(&self) -> [u8; WORD_LENGTH] {
        self.0
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}
