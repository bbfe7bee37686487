//! Letter-tile atlas.
//!
//! The sheet is a grid of square tiles. Row `n` holds letter `'a' + n`; its
//! first three columns are the absent, present and exact variants. The
//! top-right tile of the sheet is the blank filler.

use crate::error::AtlasError;
use crate::feedback::LetterScore;
use image::{imageops, RgbaImage};
use log::info;
use rayon::prelude::*;
use std::path::Path;

pub const LETTER_COUNT: u32 = 26;

/// Minimum sheet width in tiles: three score columns plus the blank column
pub const MIN_COLUMNS: u32 = 4;

/// Pre-sliced tiles, one per (letter, score) pair, plus the blank tile.
#[derive(Debug, Clone)]
pub struct TileAtlas {
    tile_size: u32,
    /// Indexed by `letter * 3 + score`
    tiles: Vec<RgbaImage>,
    blank: RgbaImage,
}

impl TileAtlas {
    /// Decode and slice a letter sheet from disk.
    pub fn load(path: &Path, tile_size: u32) -> Result<Self, AtlasError> {
        let sheet = image::open(path)
            .map_err(|source| AtlasError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .into_rgba8();
        let atlas = Self::from_sheet(&sheet, tile_size)?;
        info!(
            "Loaded letter sheet {} ({}x{}, tile size {})",
            path.display(),
            sheet.width(),
            sheet.height(),
            tile_size
        );
        Ok(atlas)
    }

    /// Slice an already-decoded sheet.
    pub fn from_sheet(sheet: &RgbaImage, tile_size: u32) -> Result<Self, AtlasError> {
        if tile_size == 0 {
            return Err(AtlasError::ZeroTileSize);
        }
        let (width, height) = sheet.dimensions();
        if width % tile_size != 0 || height % tile_size != 0 {
            return Err(AtlasError::Dimensions {
                width,
                height,
                tile_size,
            });
        }
        let columns = width / tile_size;
        let rows = height / tile_size;
        if columns < MIN_COLUMNS || rows < LETTER_COUNT {
            return Err(AtlasError::TooFewTiles {
                columns,
                rows,
                min_columns: MIN_COLUMNS,
                min_rows: LETTER_COUNT,
            });
        }

        let tiles: Vec<RgbaImage> = (0..LETTER_COUNT * 3)
            .into_par_iter()
            .map(|i| {
                let (row, column) = (i / 3, i % 3);
                imageops::crop_imm(sheet, column * tile_size, row * tile_size, tile_size, tile_size)
                    .to_image()
            })
            .collect();
        let blank = imageops::crop_imm(sheet, width - tile_size, 0, tile_size, tile_size).to_image();

        Ok(Self {
            tile_size,
            tiles,
            blank,
        })
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Tile for a lowercase ASCII letter under a score, `None` outside `a..=z`.
    pub fn tile_for(&self, letter: u8, score: LetterScore) -> Option<&RgbaImage> {
        if !letter.is_ascii_lowercase() {
            return None;
        }
        self.tiles
            .get((letter - b'a') as usize * 3 + score.index())
    }

    pub fn blank_tile(&self) -> &RgbaImage {
        &self.blank
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// A sheet where every pixel encodes the tile it belongs to.
    fn labelled_sheet(tile_size: u32, columns: u32) -> RgbaImage {
        RgbaImage::from_fn(columns * tile_size, LETTER_COUNT * tile_size, |x, y| {
            Rgba([(x / tile_size) as u8, (y / tile_size) as u8, 0, 255])
        })
    }

    #[test]
    fn slices_letter_and_score() {
        let atlas = TileAtlas::from_sheet(&labelled_sheet(4, 4), 4).unwrap();
        let tile = atlas.tile_for(b'c', LetterScore::Present).unwrap();
        assert_eq!(tile.dimensions(), (4, 4));
        assert!(tile.pixels().all(|p| *p == Rgba([1, 2, 0, 255])));

        let tile = atlas.tile_for(b'z', LetterScore::Exact).unwrap();
        assert!(tile.pixels().all(|p| *p == Rgba([2, 25, 0, 255])));
    }

    #[test]
    fn blank_is_top_right() {
        let atlas = TileAtlas::from_sheet(&labelled_sheet(3, 5), 3).unwrap();
        assert!(atlas.blank_tile().pixels().all(|p| *p == Rgba([4, 0, 0, 255])));
    }

    #[test]
    fn rejects_out_of_range_letter() {
        let atlas = TileAtlas::from_sheet(&labelled_sheet(2, 4), 2).unwrap();
        assert!(atlas.tile_for(b'A', LetterScore::Absent).is_none());
        assert!(atlas.tile_for(b'{', LetterScore::Absent).is_none());
    }

    #[test]
    fn rejects_bad_dimensions() {
        let sheet = RgbaImage::new(4 * 4 + 1, 26 * 4);
        assert!(matches!(
            TileAtlas::from_sheet(&sheet, 4),
            Err(AtlasError::Dimensions { .. })
        ));

        let sheet = RgbaImage::new(3 * 4, 26 * 4);
        assert!(matches!(
            TileAtlas::from_sheet(&sheet, 4),
            Err(AtlasError::TooFewTiles { columns: 3, .. })
        ));

        let sheet = RgbaImage::new(4 * 4, 25 * 4);
        assert!(matches!(
            TileAtlas::from_sheet(&sheet, 4),
            Err(AtlasError::TooFewTiles { rows: 25, .. })
        ));

        assert!(matches!(
            TileAtlas::from_sheet(&labelled_sheet(4, 4), 0),
            Err(AtlasError::ZeroTileSize)
        ));
    }
}
