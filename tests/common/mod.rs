#![allow(dead_code)]

use image::{Rgba, RgbaImage};
use wordle_tiles::{Dictionary, LetterScore, TileAtlas, Word};

pub const TILE: u32 = 2;

/// A letter sheet where every pixel is `[column, row, 0, 255]` of its tile.
pub fn labelled_sheet(tile_size: u32) -> RgbaImage {
    RgbaImage::from_fn(4 * tile_size, 26 * tile_size, |x, y| {
        Rgba([(x / tile_size) as u8, (y / tile_size) as u8, 0, 255])
    })
}

pub fn atlas() -> TileAtlas {
    TileAtlas::from_sheet(&labelled_sheet(TILE), TILE).unwrap()
}

pub const BLANK: Rgba<u8> = Rgba([3, 0, 0, 255]);

/// Pixel colour of the tile for `letter` under `score`
pub fn tile_colour(letter: char, score: LetterScore) -> Rgba<u8> {
    Rgba([score.index() as u8, letter as u8 - b'a', 0, 255])
}

pub fn word(text: &str) -> Word {
    Word::parse(text).unwrap()
}

pub fn dictionary() -> Dictionary {
    Dictionary::from_lists(
        "apple",
        "apple apply crane charm creep speed geese arose quick dream",
    )
    .unwrap()
}
