//! Error types for asset loading and gameplay.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load or use the word lists.
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word list {0} is empty")]
    Empty(String),
    #[error("word list {list} has {len} bytes, not a multiple of 5")]
    Malformed { list: String, len: usize },
    #[error("word list {list} contains non-letter chunk {chunk:?}")]
    InvalidWord { list: String, chunk: String },
    #[error("no candidate secrets to choose from")]
    EmptyPool,
}

/// Failure to load the letter-tile sheet.
#[derive(Error, Debug)]
pub enum AtlasError {
    #[error("failed to decode letter sheet {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("tile size must be non-zero")]
    ZeroTileSize,
    #[error("letter sheet is {width}x{height}, not a multiple of tile size {tile_size}")]
    Dimensions { width: u32, height: u32, tile_size: u32 },
    #[error("letter sheet has {columns}x{rows} tiles, need at least {min_columns}x{min_rows}")]
    TooFewTiles {
        columns: u32,
        rows: u32,
        min_columns: u32,
        min_rows: u32,
    },
}

/// A guess the session refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("{0:?} is not a valid word")]
    InvalidWord(String),
}

/// Failure of a keyed game operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("no active game for this chat")]
    UnknownSession,
    #[error("games are disabled for this chat")]
    Disabled,
    #[error("no candidate secrets to choose from")]
    EmptyPool,
}

/// Failure to load the startup configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
