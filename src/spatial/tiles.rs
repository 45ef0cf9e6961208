//! Tile kinds, board positions and tile views

use std::fmt;

/// Type identifier of a matchable tile
///
/// Kinds are small integers; the text form uses `A..Z` for `0..26`
/// and `a..z` for `26..52`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileKind(pub u16);

/// Number of kinds with a single-letter text form
pub const LETTER_KINDS: u16 = 52;

impl TileKind {
    /// Parse a kind from its letter form
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'A'..='Z' => Some(Self(letter as u16 - 'A' as u16)),
            'a'..='z' => Some(Self(letter as u16 - 'a' as u16 + 26)),
            _ => None,
        }
    }

    /// Letter form of the kind, `?` when the kind has none
    pub fn letter(self) -> char {
        let offset = match self.0 {
            0..26 => b'A' + self.0 as u8,
            26..LETTER_KINDS => b'a' + (self.0 - 26) as u8,
            _ => b'?',
        };
        char::from(offset)
    }

    /// Zero-based index of the kind
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Cell coordinates, signed so margin cells outside the board are addressable
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index, `-1` and `rows` are margin rows
    pub row: i32,
    /// Column index, `-1` and `cols` are margin columns
    pub col: i32,
}

impl Position {
    /// Create a position
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Whether both positions share a row or a column
    pub const fn is_aligned_with(self, other: Self) -> bool {
        self.row == other.row || self.col == other.col
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// An occupied board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Where the tile sits
    pub position: Position,
    /// What the tile is
    pub kind: TileKind,
}

/// State of a cell as seen by path checking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Off the board but within the margin paths may cross
    Margin,
    /// Beyond the margin, never passable
    OffGrid,
    /// On the board with no tile
    Empty,
    /// On the board holding a tile
    Occupied(TileKind),
}

impl CellState {
    /// Whether a path may pass through the cell
    pub const fn is_passable(self) -> bool {
        matches!(self, Self::Margin | Self::Empty)
    }
}
