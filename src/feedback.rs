//! Letter scoring for Wordle guesses.
//!
//! This module computes the per-position score (exact/present/absent) of a
//! guess against a secret word.

use crate::word::Word;
use crate::WORD_LENGTH;
use serde::Deserialize;
use std::fmt;

/// Represents the score for a single letter position.
///
/// Variants are ordered so that `Exact` ranks above `Present`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterScore {
    /// Letter not in word (gray)
    Absent,
    /// Correct letter in wrong position (yellow)
    Present,
    /// Correct letter in correct position (green)
    Exact,
}

impl LetterScore {
    /// Column of this score in the letter sheet
    pub fn index(self) -> usize {
        match self {
            LetterScore::Absent => 0,
            LetterScore::Present => 1,
            LetterScore::Exact => 2,
        }
    }

    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            LetterScore::Exact => '🟩',
            LetterScore::Present => '🟨',
            LetterScore::Absent => '⬛',
        }
    }
}

/// How letters that appear in the secret but not at the guessed position are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringRule {
    /// A letter is `Present` whenever it occurs anywhere in the secret.
    ///
    /// Repeated guess letters are not limited by how often they occur in the
    /// secret: "aaxxx" against "abcde" marks both a's.
    #[default]
    Containment,
    /// Standard Wordle rules: exact matches are resolved first, then each
    /// remaining secret letter accounts for at most one `Present` mark.
    Standard,
}

/// The scored result of one accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoredRow {
    guess: Word,
    scores: [LetterScore; WORD_LENGTH],
}

impl ScoredRow {
    /// Score a guess against the secret using the given rule.
    pub fn score(guess: Word, secret: Word, rule: ScoringRule) -> Self {
        let scores = match rule {
            ScoringRule::Containment => score_containment(guess, secret),
            ScoringRule::Standard => score_standard(guess, secret),
        };
        Self { guess, scores }
    }

    pub fn guess(&self) -> Word {
        self.guess
    }

    pub fn scores(&self) -> [LetterScore; WORD_LENGTH] {
        self.scores
    }

    /// (letter, score) pairs in position order
    pub fn cells(&self) -> impl Iterator<Item = (u8, LetterScore)> + '_ {
        self.guess.letters().into_iter().zip(self.scores)
    }

    /// Check if this row is a win (all exact)
    pub fn is_win(&self) -> bool {
        self.scores.iter().all(|&s| s == LetterScore::Exact)
    }

    /// Display as emoji string
    pub fn to_emoji_string(&self) -> String {
        self.scores.iter().map(|s| s.to_char()).collect()
    }
}

impl fmt::Display for ScoredRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}

/// Score a guess against the secret with the default (containment) rule.
pub fn score(guess: Word, secret: Word) -> ScoredRow {
    ScoredRow::score(guess, secret, ScoringRule::Containment)
}

fn score_containment(guess: Word, secret: Word) -> [LetterScore; WORD_LENGTH] {
    let guess_bytes = guess.letters();
    let secret_bytes = secret.letters();

    let mut scores = [LetterScore::Absent; WORD_LENGTH];
    for i in 0..WORD_LENGTH {
        scores[i] = if guess_bytes[i] == secret_bytes[i] {
            LetterScore::Exact
        } else if secret.contains(guess_bytes[i]) {
            LetterScore::Present
        } else {
            LetterScore::Absent
        };
    }
    scores
}

fn score_standard(guess: Word, secret: Word) -> [LetterScore; WORD_LENGTH] {
    let guess_bytes = guess.letters();
    let secret_bytes = secret.letters();

    let mut scores = [LetterScore::Absent; WORD_LENGTH];
    let mut secret_remaining = [0u8; 26];

    for i in 0..WORD_LENGTH {
        if guess_bytes[i] == secret_bytes[i] {
            scores[i] = LetterScore::Exact;
        } else {
            secret_remaining[(secret_bytes[i] - b'a') as usize] += 1;
        }
    }

    for i in 0..WORD_LENGTH {
        if scores[i] != LetterScore::Exact {
            let idx = (guess_bytes[i] - b'a') as usize;
            if secret_remaining[idx] > 0 {
                scores[i] = LetterScore::Present;
                secret_remaining[idx] -= 1;
            }
        }
    }

    scores
}
