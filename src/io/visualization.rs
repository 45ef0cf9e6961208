//! Frame capture and GIF generation for level replays

use image::{Delay, Frame};
use std::path::Path;

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{GameError, Result};
use crate::io::image::draw_board;
use crate::spatial::Board;

/// Captures board states for visualization
///
/// Records one snapshot per move so the level can be replayed as an
/// animation after it has been played.
#[derive(Debug, Clone)]
pub struct ReplayCapture {
    boards: Vec<Board>,
    colors: Vec<[u8; 4]>,
    cell_size: u32,
}

impl ReplayCapture {
    /// Create an empty capture drawing `cell_size` pixel cells
    pub const fn new(colors: Vec<[u8; 4]>, cell_size: u32) -> Self {
        Self {
            boards: Vec::new(),
            colors,
            cell_size,
        }
    }

    /// Records the board as it is now
    pub fn record(&mut self, board: &Board) {
        self.boards.push(board.clone());
    }

    /// Drop all recorded frames
    pub fn clear(&mut self) {
        self.boards.clear();
    }

    /// Returns the total number of recorded frames
    pub fn frame_count(&self) -> usize {
        self.boards.len()
    }

    /// Export the captured boards as a looping GIF
    ///
    /// The delay is raised to what viewers reliably support and the final
    /// frame is held longer so the end state is visible.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No boards were captured
    /// - A tile kind has no palette color
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.boards.is_empty() {
            return Err(GameError::InvalidParameter {
                parameter: "replay",
                value: "0 frames".to_string(),
                reason: "no boards captured for visualization".to_string(),
            });
        }

        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let mut frames = Vec::with_capacity(self.boards.len() + 1);
        for board in &self.boards {
            let img = draw_board(board, &self.colors, self.cell_size)?;
            frames.push(Frame::from_parts(
                img,
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms, 1),
            ));
        }

        // Final frame displays longer for better visibility
        if let Some(last) = frames.last().map(|frame| frame.buffer().clone()) {
            frames.push(Frame::from_parts(
                last,
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms * 10, 1),
            ));
        }

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GameError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| GameError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .set_repeat(image::codecs::gif::Repeat::Infinite)
            .map_err(|e| GameError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;
        encoder
            .encode_frames(frames)
            .map_err(|e| GameError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }
}
