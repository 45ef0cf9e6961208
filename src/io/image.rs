//! Board snapshots as PNG images with one colored block per tile

use image::{Rgba, RgbaImage};
use std::path::Path;

use crate::io::error::{GameError, Result};
use crate::spatial::{Board, TileKind};

/// Color drawn for empty cells
pub const EMPTY_COLOR: [u8; 4] = [0, 0, 0, 0];

/// Distinct opaque colors for `kinds` tile kinds, evenly spaced in hue
pub fn palette(kinds: usize) -> Vec<[u8; 4]> {
    (0..kinds)
        .map(|index| hue_to_rgba(index as f64 / kinds.max(1) as f64))
        .collect()
}

// Fully saturated color on the hue wheel, `hue` in [0, 1)
fn hue_to_rgba(hue: f64) -> [u8; 4] {
    let sector = hue * 6.0;
    let fraction = sector - sector.floor();
    let rising = (fraction * 255.0).round() as u8;
    let falling = 255 - rising;
    let [r, g, b] = match sector.floor() as u8 {
        0 => [255, rising, 0],
        1 => [falling, 255, 0],
        2 => [0, 255, rising],
        3 => [0, falling, 255],
        4 => [rising, 0, 255],
        _ => [255, 0, falling],
    };
    [r, g, b, 255]
}

fn kind_color(kind: TileKind, colors: &[[u8; 4]]) -> Result<Rgba<u8>> {
    colors
        .get(kind.index())
        .copied()
        .map(Rgba)
        .ok_or_else(|| GameError::InvalidParameter {
            parameter: "palette",
            value: kind.to_string(),
            reason: format!("no color for kind {} of {}", kind.index(), colors.len()),
        })
}

/// Draw the board with `cell_size` pixel squares per cell
///
/// # Errors
///
/// Returns an error if a tile kind has no palette color
pub fn draw_board(board: &Board, colors: &[[u8; 4]], cell_size: u32) -> Result<RgbaImage> {
    let width = board.cols() as u32 * cell_size;
    let height = board.rows() as u32 * cell_size;
    let mut img = RgbaImage::from_pixel(width, height, Rgba(EMPTY_COLOR));

    for tile in board.tiles() {
        let color = kind_color(tile.kind, colors)?;
        let left = tile.position.col as u32 * cell_size;
        let top = tile.position.row as u32 * cell_size;
        // One pixel gap keeps neighbouring tiles of the same kind apart
        let inner = cell_size.saturating_sub(1).max(1);
        for y in top..top + inner {
            for x in left..left + inner {
                img.put_pixel(x, y, color);
            }
        }
    }

    Ok(img)
}

/// Export the board as a PNG image with a transparent background
///
/// # Errors
///
/// Returns an error if:
/// - The board has no cells
/// - A tile kind has no palette color
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_as_png(
    board: &Board,
    colors: &[[u8; 4]],
    cell_size: u32,
    output_path: &Path,
) -> Result<()> {
    if board.rows() == 0 || board.cols() == 0 || cell_size == 0 {
        return Err(GameError::InvalidParameter {
            parameter: "board",
            value: format!("{}x{}", board.rows(), board.cols()),
            reason: "cannot draw an empty image".to_string(),
        });
    }

    let img = draw_board(board, colors, cell_size)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GameError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| GameError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
