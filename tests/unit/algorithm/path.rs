//! Tests for the two-bend path checker and route geometry

#[cfg(test)]
mod tests {
    use tilelink::algorithm::path::{can_connect, find_path};
    use tilelink::spatial::{Board, Position};

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn corners(board: &[&str], a: Position, b: Position) -> Option<Vec<Position>> {
        let board = Board::parse(board).unwrap();
        find_path(&board, a, b).map(|path| path.corners().to_vec())
    }

    // Tests an unobstructed straight line needs no pivots
    // Verified by trying one-bend routes first
    #[test]
    fn test_straight_line() {
        assert_eq!(
            corners(&["A..A", "....", "....", "...."], p(0, 0), p(0, 3)),
            Some(vec![p(0, 0), p(0, 3)])
        );
        assert_eq!(
            corners(&["A.", "..", "A."], p(0, 0), p(2, 0)),
            Some(vec![p(0, 0), p(2, 0)])
        );
    }

    // Tests adjacent tiles connect with zero bends and length one
    // Verified by requiring at least one interior cell
    #[test]
    fn test_adjacent_tiles() {
        let board = Board::parse(&["AA"]).unwrap();
        let path = find_path(&board, p(0, 0), p(0, 1)).unwrap();

        assert_eq!(path.bends(), 0);
        assert_eq!(path.length(), 1);
        assert_eq!(path.cells(), vec![p(0, 0), p(0, 1)]);
    }

    // Tests the pivot sharing the first tile's row is preferred
    // Verified by swapping the order of the one-bend pivots
    #[test]
    fn test_one_bend_pivot_order() {
        assert_eq!(
            corners(&["A...", "....", "...A", "...."], p(0, 0), p(2, 3)),
            Some(vec![p(0, 0), p(0, 3), p(2, 3)])
        );
        assert_eq!(
            corners(&["AB.", ".B.", "..A"], p(0, 0), p(2, 2)),
            Some(vec![p(0, 0), p(2, 0), p(2, 2)])
        );
    }

    // Tests reversing the query changes the corner order but not connectivity
    // Verified by always ordering endpoints row-major before searching
    #[test]
    fn test_reversed_query() {
        let rows = ["A..", "BB.", ".BA"];
        assert_eq!(
            corners(&rows, p(0, 0), p(2, 2)),
            Some(vec![p(0, 0), p(0, 2), p(2, 2)])
        );
        assert_eq!(
            corners(&rows, p(2, 2), p(0, 0)),
            Some(vec![p(2, 2), p(0, 2), p(0, 0)])
        );
    }

    // Tests two-bend routes may run along the margin column
    // Verified by limiting candidate columns to the board
    #[test]
    fn test_two_bends_through_margin_column() {
        let path = corners(&["AB..", "BB..", "...A"], p(0, 0), p(2, 3)).unwrap();
        assert_eq!(path, vec![p(0, 0), p(0, -1), p(2, -1), p(2, 3)]);
    }

    // Tests a blocked straight line falls back to a U over the top margin
    // Verified by scanning rows before columns
    #[test]
    fn test_u_shape_over_top_margin() {
        assert_eq!(
            corners(&["ABA"], p(0, 0), p(0, 2)),
            Some(vec![p(0, 0), p(-1, 0), p(-1, 2), p(0, 2)])
        );
    }

    // Tests a Z shape entirely inside the board
    // Verified by skipping pivots that lie on the board
    #[test]
    fn test_z_shape_inside_board() {
        let board = Board::parse(&["BBBB", "A..B", "BB.A", "BBBB"]).unwrap();
        let path = find_path(&board, p(1, 0), p(2, 3)).unwrap();

        assert_eq!(path.corners(), &[p(1, 0), p(1, 2), p(2, 2), p(2, 3)]);
        assert_eq!(path.bends(), 2);
        assert_eq!(
            path.cells(),
            vec![p(1, 0), p(1, 1), p(1, 2), p(2, 2), p(2, 3)]
        );
        assert_eq!(path.length(), 4);
    }

    // Tests an enclosed tile cannot connect to anything
    // Verified by letting legs pass over third tiles
    #[test]
    fn test_enclosed_tile() {
        let board = Board::parse(&[".B..", "BAB.", ".B.A"]).unwrap();
        assert!(!can_connect(&board, p(1, 1), p(2, 3)));
        assert!(find_path(&board, p(2, 3), p(1, 1)).is_none());
    }

    // Tests routes needing three bends are refused
    // Verified by allowing an extra pivot
    #[test]
    fn test_three_bends_refused() {
        let board = Board::parse(&["A.B", "BBB", "B.A"]).unwrap();
        assert!(!can_connect(&board, p(0, 0), p(2, 2)));
    }

    // Tests degenerate queries: same cell, empty cell, off-board, mismatched kinds
    // Verified by removing the endpoint checks
    #[test]
    fn test_degenerate_queries() {
        let board = Board::parse(&["AB", "A."]).unwrap();

        assert!(!can_connect(&board, p(0, 0), p(0, 0)));
        assert!(!can_connect(&board, p(0, 0), p(1, 1)));
        assert!(!can_connect(&board, p(0, 0), p(-1, 0)));
        assert!(!can_connect(&board, p(0, 0), p(5, 5)));
        assert!(!can_connect(&board, p(0, 0), p(0, 1)));
        assert!(can_connect(&board, p(0, 0), p(1, 0)));
    }

    // Tests every walked cell other than the endpoints holds no tile
    // Verified by skipping the pivot clearance check
    #[test]
    fn test_route_avoids_third_tiles() {
        let board = Board::parse(&["AA..", "B...", "A..."]).unwrap();
        let path = find_path(&board, p(0, 0), p(2, 0)).unwrap();

        assert_eq!(path.corners(), &[p(0, 0), p(0, -1), p(2, -1), p(2, 0)]);
        assert!(path.cells().iter().all(|&cell| {
            cell == p(0, 0) || cell == p(2, 0) || board.kind_at(cell).is_none()
        }));
    }
}
