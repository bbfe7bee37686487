//! Answer pool and valid-guess set.
//!
//! Word lists are flat files of back-to-back five-letter chunks. Whitespace
//! is ignored, so newline-separated lists load the same way.

use crate::error::DictionaryError;
use crate::word::Word;
use crate::WORD_LENGTH;
use log::info;
use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// The two word lists shared read-only by every session.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    answers: Vec<Word>,
    valid_guesses: HashSet<Word>,
}

impl Dictionary {
    pub fn new(answers: Vec<Word>, valid_guesses: impl IntoIterator<Item = Word>) -> Self {
        Self {
            answers,
            valid_guesses: valid_guesses.into_iter().collect(),
        }
    }

    /// Load both lists from disk.
    pub fn load(answers_path: &Path, valid_path: &Path) -> Result<Self, DictionaryError> {
        let answers = read_words(answers_path)?;
        let valid_guesses = read_words(valid_path)?;
        let dictionary = Self::new(answers, valid_guesses);
        info!(
            "Loaded {} answers and {} valid guesses",
            dictionary.answers.len(),
            dictionary.valid_guesses.len()
        );
        Ok(dictionary)
    }

    /// Build from in-memory list contents.
    pub fn from_lists(answers: &str, valid_guesses: &str) -> Result<Self, DictionaryError> {
        Ok(Self::new(
            parse_words(answers, "answers")?,
            parse_words(valid_guesses, "valid guesses")?,
        ))
    }

    pub fn is_valid_guess(&self, word: Word) -> bool {
        self.valid_guesses.contains(&word)
    }

    /// Uniformly pick a secret from the answer pool
    pub fn pick_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, DictionaryError> {
        self.answers
            .choose(rng)
            .copied()
            .ok_or(DictionaryError::EmptyPool)
    }

    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    pub fn valid_guess_count(&self) -> usize {
        self.valid_guesses.len()
    }
}

fn read_words(path: &Path) -> Result<Vec<Word>, DictionaryError> {
    let text = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_words(&text, &path.display().to_string())
}

/// Split a flat word list into words. `list` names the list in errors.
fn parse_words(text: &str, list: &str) -> Result<Vec<Word>, DictionaryError> {
    let letters: Vec<u8> = text
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    if letters.is_empty() {
        return Err(DictionaryError::Empty(list.to_string()));
    }
    if letters.len() % WORD_LENGTH != 0 {
        return Err(DictionaryError::Malformed {
            list: list.to_string(),
            len: letters.len(),
        });
    }

    letters
        .par_chunks(WORD_LENGTH)
        .map(|chunk| {
            std::str::from_utf8(chunk)
                .ok()
                .and_then(Word::parse)
                .ok_or_else(|| DictionaryError::InvalidWord {
                    list: list.to_string(),
                    chunk: String::from_utf8_lossy(chunk).into_owned(),
                })
        })
        .collect()
}
