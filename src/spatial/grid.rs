//! Board state for a single level
//!
//! The board is a fixed `rows x cols` array of cells that are either empty or hold
//! a typed tile. Cells one step outside the board form an open margin that paths
//! may cross; anything further out is impassable.

use ndarray::Array2;
use std::fmt;

use crate::io::configuration::BOARD_MARGIN;
use crate::io::error::{GameError, Result, invalid_parameter};
use crate::spatial::tiles::{CellState, Position, Tile, TileKind};

/// Grid of optional tiles with fixed dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<Option<TileKind>>,
}

impl Board {
    /// Create a board with every cell empty
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), None),
        }
    }

    /// Build a board from row-major cells
    ///
    /// # Errors
    ///
    /// Returns an error if the cell count doesn't equal `rows * cols`
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Option<TileKind>>) -> Result<Self> {
        let count = cells.len();
        let cells = Array2::from_shape_vec((rows, cols), cells).map_err(|e| {
            invalid_parameter("cells", &count, &format!("cannot form {rows}x{cols}: {e}"))
        })?;
        Ok(Self { cells })
    }

    /// Parse a board from text rows, `.` for empty and a letter per tile kind
    ///
    /// # Errors
    ///
    /// Returns an error if rows have different lengths or contain other characters
    pub fn parse(rows: &[&str]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.chars().count());
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (index, row) in rows.iter().enumerate() {
            if row.chars().count() != cols {
                return Err(invalid_parameter(
                    "rows",
                    row,
                    &format!("row {index} does not have {cols} cells"),
                ));
            }
            for symbol in row.chars() {
                let cell = match symbol {
                    '.' => None,
                    other => Some(TileKind::from_letter(other).ok_or_else(|| {
                        invalid_parameter("rows", row, &format!("unknown cell '{other}'"))
                    })?),
                };
                cells.push(cell);
            }
        }

        Self::from_cells(rows.len(), cols, cells)
    }

    /// Get the number of rows in the board
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Get the number of columns in the board
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Board dimensions (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Underlying cell array
    pub const fn cells(&self) -> &Array2<Option<TileKind>> {
        &self.cells
    }

    /// Check if a position addresses a cell of the board
    pub fn contains(&self, pos: Position) -> bool {
        self.index_of(pos).is_some()
    }

    fn index_of(&self, pos: Position) -> Option<[usize; 2]> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        (row < self.rows() && col < self.cols()).then_some([row, col])
    }

    /// Classify a position for path checking
    pub fn cell(&self, pos: Position) -> CellState {
        match self.index_of(pos) {
            Some(index) => match self.cells.get(index).copied().flatten() {
                Some(kind) => CellState::Occupied(kind),
                None => CellState::Empty,
            },
            None if self.within_margin(pos) => CellState::Margin,
            None => CellState::OffGrid,
        }
    }

    fn within_margin(&self, pos: Position) -> bool {
        let rows = self.rows() as i32;
        let cols = self.cols() as i32;
        pos.row >= -BOARD_MARGIN
            && pos.row < rows + BOARD_MARGIN
            && pos.col >= -BOARD_MARGIN
            && pos.col < cols + BOARD_MARGIN
    }

    /// Tile kind at a position, `None` for empty or off-board cells
    pub fn kind_at(&self, pos: Position) -> Option<TileKind> {
        self.index_of(pos)
            .and_then(|index| self.cells.get(index).copied().flatten())
    }

    /// Put a tile on a cell, replacing whatever was there
    ///
    /// # Errors
    ///
    /// Returns an error if the position is off the board
    pub fn place(&mut self, pos: Position, kind: TileKind) -> Result<()> {
        let dimensions = self.dimensions();
        let cell = self
            .index_of(pos)
            .and_then(|index| self.cells.get_mut(index))
            .ok_or(GameError::InvalidPosition {
                row: pos.row,
                col: pos.col,
                dimensions,
            })?;
        *cell = Some(kind);
        Ok(())
    }

    /// Clear a cell, returning the tile kind it held
    pub fn remove(&mut self, pos: Position) -> Option<TileKind> {
        let index = self.index_of(pos)?;
        self.cells.get_mut(index).and_then(Option::take)
    }

    /// Number of tiles left on the board
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Check if every tile has been removed
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells
            .indexed_iter()
            .filter_map(|((row, col), cell)| {
                cell.map(|kind| Tile {
                    position: Position::new(row as i32, col as i32),
                    kind,
                })
            })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let line: String = row
                .iter()
                .map(|cell| cell.map_or('.', TileKind::letter))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
