//! A single game: secret word, accepted rows and win state.

use crate::atlas::TileAtlas;
use crate::dictionary::Dictionary;
use crate::error::GuessError;
use crate::feedback::{ScoredRow, ScoringRule};
use crate::render::{render, Canvas};
use crate::word::Word;
use log::debug;

/// Result of a guess the session did not reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// A row was appended; `won` is true if it matched the secret.
    Accepted { won: bool },
    /// The game was already won; nothing changed.
    AlreadyWon,
}

/// Game state. Sessions never end on their own: there is no guess limit and
/// no lost state, only `won` once the secret is matched.
#[derive(Debug, Clone)]
pub struct Session {
    secret: Word,
    rule: ScoringRule,
    rows: Vec<ScoredRow>,
    won: bool,
}

impl Session {
    pub fn new(secret: Word) -> Self {
        Self::with_rule(secret, ScoringRule::default())
    }

    pub fn with_rule(secret: Word, rule: ScoringRule) -> Self {
        Self {
            secret,
            rule,
            rows: Vec::new(),
            won: false,
        }
    }

    /// Submit a guess.
    ///
    /// The secret is always accepted, even if the dictionary does not list it.
    /// Any other text must be a valid guess; rejected guesses leave the
    /// session untouched.
    pub fn submit_guess(
        &mut self,
        text: &str,
        dictionary: &Dictionary,
    ) -> Result<GuessOutcome, GuessError> {
        if self.won {
            return Ok(GuessOutcome::AlreadyWon);
        }

        let guess = Word::parse(text).ok_or_else(|| GuessError::InvalidWord(text.to_string()))?;
        if guess == self.secret {
            self.won = true;
        } else if !dictionary.is_valid_guess(guess) {
            debug!("Rejected guess {:?}", text);
            return Err(GuessError::InvalidWord(text.to_string()));
        }

        let row = ScoredRow::score(guess, self.secret, self.rule);
        debug!("Guess {} scored {}", guess, row);
        self.rows.push(row);
        Ok(GuessOutcome::Accepted { won: self.won })
    }

    pub fn render(&self, atlas: &TileAtlas) -> Canvas {
        render(&self.rows, atlas)
    }

    /// Emoji grid of the rows so far, one line per guess
    pub fn share_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.to_emoji_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn secret(&self) -> Word {
        self.secret
    }

    pub fn rule(&self) -> ScoringRule {
        self.rule
    }

    pub fn rows(&self) -> &[ScoredRow] {
        &self.rows
    }

    pub fn is_won(&self) -> bool {
        self.won
    }
}
