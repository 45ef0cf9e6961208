//! Tests for the match and removal controller

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use tilelink::GameError;
    use tilelink::algorithm::hint::has_available_match;
    use tilelink::io::data::LevelConfig;
    use tilelink::session::{GameSession, SelectOutcome, SessionStatus};
    use tilelink::spatial::{Board, Position, TileKind};

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn level(rows: usize, cols: usize, kinds: usize, seconds: u64, multiplier: f64) -> LevelConfig {
        LevelConfig {
            rows,
            cols,
            num_animal_types: kinds,
            time_limit_seconds: seconds,
            score_multiplier: multiplier,
        }
    }

    fn session(rows: &[&str], kinds: usize, multiplier: f64) -> GameSession {
        let board = Board::parse(rows).unwrap();
        let (r, c) = board.dimensions();
        GameSession::with_board(level(r, c, kinds, 60, multiplier), board, 7).unwrap()
    }

    // Tests clearing a board scores every match plus the time bonus
    // Verified by skipping the clear bonus
    #[test]
    fn test_clear_board_scoring() {
        let mut game = session(&["AAB", "CCB"], 3, 2.0);

        assert_eq!(game.select(p(0, 0)).unwrap(), SelectOutcome::Selected(p(0, 0)));
        let SelectOutcome::Matched(first) = game.select(p(0, 1)).unwrap() else {
            panic!("expected a match");
        };
        assert_eq!(first.kind, TileKind(0));
        assert_eq!(first.points, 20);
        assert_eq!(first.clear_bonus, 0);
        assert_eq!(game.score(), 20);

        game.select(p(1, 0)).unwrap();
        game.select(p(1, 1)).unwrap();
        game.select(p(0, 2)).unwrap();
        let SelectOutcome::Matched(last) = game.select(p(1, 2)).unwrap() else {
            panic!("expected a match");
        };

        assert_eq!(last.path.bends(), 0);
        assert_eq!(last.clear_bonus, 600);
        assert_eq!(game.score(), 660);
        assert_eq!(game.matches(), 3);
        assert_eq!(game.status(), SessionStatus::Completed);
        assert!(game.board().is_cleared());
    }

    // Tests clicking the selected tile again drops the selection
    // Verified by treating the repeat click as a pair
    #[test]
    fn test_deselect() {
        let mut game = session(&["AAB", "CCB"], 3, 1.0);

        game.select(p(0, 0)).unwrap();
        assert_eq!(game.select(p(0, 0)).unwrap(), SelectOutcome::Deselected(p(0, 0)));
        assert_eq!(game.selection(), None);
    }

    // Tests a failed pair keeps both tiles and moves the selection
    // Verified by clearing the selection on rejection
    #[test]
    fn test_rejected_pair() {
        let mut game = session(&["AAB", "CCB"], 3, 1.0);

        game.select(p(0, 0)).unwrap();
        assert_eq!(
            game.select(p(0, 2)).unwrap(),
            SelectOutcome::Rejected {
                previous: p(0, 0),
                current: p(0, 2),
            }
        );
        assert_eq!(game.selection(), Some(p(0, 2)));
        assert_eq!(game.board().tile_count(), 6);
        assert_eq!(game.score(), 0);
    }

    // Tests clicks on empty or off-board cells are ignored
    // Verified by selecting any in-margin position
    #[test]
    fn test_ignored_clicks() {
        let mut game = session(&["A.", "A."], 1, 1.0);

        assert_eq!(game.select(p(0, 1)).unwrap(), SelectOutcome::Ignored);
        assert_eq!(game.select(p(-1, 0)).unwrap(), SelectOutcome::Ignored);
        assert_eq!(game.select(p(9, 9)).unwrap(), SelectOutcome::Ignored);
        assert_eq!(game.selection(), None);
    }

    // Tests a match that leaves no moves triggers an automatic reshuffle
    // Verified by skipping deadlock resolution after removals
    #[test]
    fn test_reshuffle_after_deadlock() {
        let mut game = session(&["ABCC", "BA.."], 3, 1.0);

        game.select(p(0, 2)).unwrap();
        let SelectOutcome::Matched(event) = game.select(p(0, 3)).unwrap() else {
            panic!("expected a match");
        };

        assert!(event.reshuffles >= 1);
        assert_eq!(game.reshuffles(), event.reshuffles);
        assert_eq!(game.board().tile_count(), 4);
        assert!(has_available_match(game.board()));
        assert_eq!(game.status(), SessionStatus::Playing);
    }

    // Tests running out of time ends play and clears the selection
    // Verified by continuing to accept selections after the limit
    #[test]
    fn test_time_up() {
        let mut game = session(&["AAB", "CCB"], 3, 1.0);
        game.select(p(0, 0)).unwrap();

        assert_eq!(game.update(Duration::from_secs(59)), SessionStatus::Playing);
        assert_eq!(game.remaining(), Duration::from_secs(1));
        assert_eq!(game.update(Duration::from_secs(2)), SessionStatus::TimeUp);

        assert_eq!(game.selection(), None);
        assert_eq!(game.elapsed(), Duration::from_secs(60));
        assert_eq!(game.select(p(0, 1)).unwrap(), SelectOutcome::Ignored);
        assert!(game.hint().is_none());
        assert_eq!(game.shuffle().unwrap(), 0);
    }

    // Tests levels advance in order while keeping the score
    // Verified by resetting the score on each new level
    #[test]
    fn test_level_progression() {
        let levels = vec![level(1, 2, 1, 30, 1.0), level(1, 2, 1, 30, 1.0)];
        let mut game = GameSession::new(levels, 3).unwrap();
        assert_eq!(game.level_count(), 2);
        assert!(!game.advance_level().unwrap());

        game.select(p(0, 0)).unwrap();
        game.select(p(0, 1)).unwrap();
        assert_eq!(game.status(), SessionStatus::LevelCleared);
        assert_eq!(game.score(), 160);

        assert!(game.advance_level().unwrap());
        assert_eq!(game.level_index(), 1);
        assert_eq!(game.status(), SessionStatus::Playing);
        assert_eq!(game.score(), 160);
        assert_eq!(game.board().tile_count(), 2);

        game.select(p(0, 0)).unwrap();
        game.select(p(0, 1)).unwrap();
        assert_eq!(game.status(), SessionStatus::Completed);
        assert_eq!(game.score(), 320);
        assert!(!game.advance_level().unwrap());
    }

    // Tests restarting restores the score the level began with
    // Verified by keeping points earned during the abandoned attempt
    #[test]
    fn test_restart_level() {
        let levels = vec![level(1, 2, 1, 30, 1.0), level(2, 2, 1, 30, 1.0)];
        let mut game = GameSession::new(levels, 3).unwrap();
        game.select(p(0, 0)).unwrap();
        game.select(p(0, 1)).unwrap();
        game.advance_level().unwrap();

        let hint = game.hint().unwrap();
        game.select(hint.first).unwrap();
        game.select(hint.second).unwrap();
        assert_eq!(game.score(), 170);

        game.restart_level().unwrap();
        assert_eq!(game.score(), 160);
        assert_eq!(game.level_index(), 1);
        assert_eq!(game.board().tile_count(), 4);
        assert_eq!(game.matches(), 0);
    }

    // Tests a requested shuffle leaves a playable board
    // Verified by skipping the follow-up deadlock check
    #[test]
    fn test_shuffle() {
        let mut game = session(&["AB", "BA"], 2, 1.0);
        game.select(p(0, 0)).unwrap();

        let count = game.shuffle().unwrap();
        assert!(count >= 1);
        assert_eq!(game.reshuffles(), count);
        assert_eq!(game.selection(), None);
        assert!(has_available_match(game.board()));
    }

    // Tests the hint follows the kind and row-major scan order
    // Verified by returning the last available pair
    #[test]
    fn test_hint() {
        let game = session(&["BB", "AA"], 2, 1.0);
        let hint = game.hint().unwrap();
        assert_eq!((hint.first, hint.second), (p(1, 0), p(1, 1)));
    }

    // Tests construction rejects empty and invalid level lists
    // Verified by validating only the first level
    #[test]
    fn test_invalid_levels() {
        assert!(matches!(
            GameSession::new(Vec::new(), 0),
            Err(GameError::InvalidParameter { parameter: "levels", .. })
        ));
        assert!(matches!(
            GameSession::new(vec![level(2, 2, 1, 30, 1.0), level(3, 3, 1, 30, 1.0)], 0),
            Err(GameError::InvalidLevel { level: 1, .. })
        ));

        let mut game = GameSession::new(vec![level(2, 2, 1, 30, 1.0)], 0).unwrap();
        assert!(matches!(
            game.start_level(5),
            Err(GameError::InvalidLevel { level: 5, .. })
        ));
    }

    // Tests the same seed deals the same boards
    // Verified by seeding the session from entropy
    #[test]
    fn test_seeded_deal() {
        let levels = vec![level(4, 4, 4, 60, 1.0)];
        let first = GameSession::new(levels.clone(), 21).unwrap();
        let second = GameSession::new(levels, 21).unwrap();

        assert_eq!(first.board(), second.board());
        assert_eq!(first.level().rows, 4);
        assert_eq!(first.board().tile_count(), 16);
    }

    // Tests huge multipliers cap the score instead of overflowing
    // Verified by adding points with plain addition
    #[test]
    fn test_score_saturates() {
        let mut game = session(&["AABB"], 2, 1e300);

        game.select(p(0, 0)).unwrap();
        game.select(p(0, 1)).unwrap();
        assert_eq!(game.score(), u64::MAX);

        game.select(p(0, 2)).unwrap();
        let SelectOutcome::Matched(event) = game.select(p(0, 3)).unwrap() else {
            panic!("expected a match");
        };
        assert_eq!(event.clear_bonus, u64::MAX);
        assert_eq!(game.score(), u64::MAX);
        assert_eq!(game.status(), SessionStatus::Completed);
    }

    // Tests a failed deal leaves the score and level untouched
    // Verified by resetting the score before dealing the new board
    #[test]
    fn test_failed_deal_keeps_state() {
        let levels = vec![level(2, 2, 1, 30, 1.0)];
        let mut game = GameSession::new(levels, 3).unwrap();
        let hint = game.hint().unwrap();
        game.select(hint.first).unwrap();
        game.select(hint.second).unwrap();
        let board = game.board().clone();

        assert!(game.start_level(1).is_err());
        assert_eq!(game.score(), 10);
        assert_eq!(game.matches(), 1);
        assert_eq!(game.board(), &board);

        game.restart_level().unwrap();
        assert_eq!(game.score(), 0);
        assert_eq!(game.board().tile_count(), 4);
    }
}
