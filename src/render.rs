//! Composes scored rows into a single bitmap.

use crate::atlas::TileAtlas;
use crate::feedback::ScoredRow;
use crate::WORD_LENGTH;
use image::{imageops, RgbaImage};

/// Rendered guess history. Encoding is left to the caller.
pub type Canvas = RgbaImage;

/// Canvases are padded with blank rows up to this many tile rows.
pub const MIN_CANVAS_ROWS: usize = 2;

/// Render rows top to bottom in submission order.
///
/// Each row is five tiles wide. When there are fewer than
/// [`MIN_CANVAS_ROWS`] rows, blank rows fill the remainder; there is no upper
/// limit on height.
pub fn render(rows: &[ScoredRow], atlas: &TileAtlas) -> Canvas {
    let size = atlas.tile_size();
    let row_count = rows.len().max(MIN_CANVAS_ROWS);
    let mut canvas = Canvas::new(WORD_LENGTH as u32 * size, row_count as u32 * size);

    for (y, row) in rows.iter().enumerate() {
        for (x, (letter, score)) in row.cells().enumerate() {
            // letters come from `Word`, so always a..=z
            let tile = atlas
                .tile_for(letter, score)
                .unwrap_or_else(|| atlas.blank_tile());
            place(&mut canvas, tile, x, y, size);
        }
    }

    for y in rows.len()..row_count {
        for x in 0..WORD_LENGTH {
            place(&mut canvas, atlas.blank_tile(), x, y, size);
        }
    }

    canvas
}

fn place(canvas: &mut Canvas, tile: &RgbaImage, x: usize, y: usize, size: u32) {
    imageops::replace(
        canvas,
        tile,
        x as i64 * i64::from(size),
        y as i64 * i64::from(size),
    );
}
