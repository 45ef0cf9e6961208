//! Tests for tile kinds, positions and cell states

#[cfg(test)]
mod tests {
    use tilelink::spatial::tiles::LETTER_KINDS;
    use tilelink::spatial::{CellState, Position, TileKind};

    // Tests letters map to kinds and back
    // Verified by offsetting lowercase letters from 'A'
    #[test]
    fn test_letter_round_trip() {
        assert_eq!(TileKind::from_letter('A'), Some(TileKind(0)));
        assert_eq!(TileKind::from_letter('Z'), Some(TileKind(25)));
        assert_eq!(TileKind::from_letter('a'), Some(TileKind(26)));
        assert_eq!(TileKind::from_letter('z'), Some(TileKind(51)));

        for letter in ('A'..='Z').chain('a'..='z') {
            let kind = TileKind::from_letter(letter);
            assert_eq!(kind.map(TileKind::letter), Some(letter));
        }
    }

    // Tests non-letters are rejected and large kinds have a placeholder
    // Verified by accepting digits as kinds
    #[test]
    fn test_unknown_letters() {
        assert_eq!(TileKind::from_letter('.'), None);
        assert_eq!(TileKind::from_letter('7'), None);
        assert_eq!(TileKind(LETTER_KINDS).letter(), '?');
        assert_eq!(TileKind(3).to_string(), "D");
    }

    // Tests alignment requires a shared row or column
    // Verified by comparing rows only
    #[test]
    fn test_position_alignment() {
        let origin = Position::new(2, 3);
        assert!(origin.is_aligned_with(Position::new(2, -1)));
        assert!(origin.is_aligned_with(Position::new(7, 3)));
        assert!(!origin.is_aligned_with(Position::new(1, 1)));
        assert_eq!(Position::from((2, 3)), origin);
        assert_eq!(origin.to_string(), "(2, 3)");
    }

    // Tests only margin and empty cells are passable
    // Verified by treating off-grid cells as passable
    #[test]
    fn test_cell_state_passable() {
        assert!(CellState::Margin.is_passable());
        assert!(CellState::Empty.is_passable());
        assert!(!CellState::OffGrid.is_passable());
        assert!(!CellState::Occupied(TileKind(0)).is_passable());
    }
}
