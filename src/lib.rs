//! # Wordle Tiles
//!
//! A session-based Wordle game engine.
//!
//! Each session holds a secret five-letter word, validates guesses against a
//! dictionary, scores them letter by letter and renders the guess history as
//! a bitmap composed from a letter-tile atlas. Transport and image encoding
//! live outside the library; the bundled binary is a console stand-in for them.

pub mod atlas;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod feedback;
pub mod games;
pub mod render;
pub mod session;
pub mod word;

pub use atlas::TileAtlas;
pub use config::Config;
pub use dictionary::Dictionary;
pub use error::{AtlasError, ConfigError, DictionaryError, GameError, GuessError};
pub use feedback::{LetterScore, ScoredRow, ScoringRule};
pub use games::{GuessReply, Games, SessionMode, SetMode};
pub use render::{render, Canvas};
pub use session::{GuessOutcome, Session};
pub use word::Word;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Tile edge length, in pixels, of the stock letter sheet
pub const DEFAULT_TILE_SIZE: u32 = 204;
