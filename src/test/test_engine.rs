
#[cfg(test)]
mod test {
    use serde_json::json;

    use crate::core::*;
    use Direction::*;

    fn scenario_layout() -> String {
        json!({
            "width": 5,
            "height": 5,
            "grid": ["WWWWW", "W.T.W", "W.B.W", "W.P.W", "WWWWW"],
        })
        .to_string()
    }

    fn loaded(layout: &str) -> PuzzleEngine {
        let mut engine = PuzzleEngine::new();
        engine.initialize(layout);
        engine
    }

    #[test]
    fn push_onto_target_completes_level() {
        let mut engine = loaded(&scenario_layout());
        assert_eq!(engine.game_state().player, Vec2 { x: 2, y: 3 });
        assert_eq!(engine.game_state().total_targets, 1);
        assert_eq!(engine.phase(), EnginePhase::Active);

        let outcome = engine.move_player(Up);

        assert_eq!(outcome, MoveOutcome::Accepted(GameChangeType::PlayerAndBoxMove));
        let state = engine.game_state();
        assert_eq!(state.grid[1][2], Cell::BoxOnTarget);
        assert_eq!(state.grid[2][2], Cell::Player);
        assert_eq!(state.grid[3][2], Cell::Floor);
        assert_eq!(state.boxes_on_target, 1);
        assert_eq!(state.moves, 1);
        assert!(engine.is_complete());
        assert_eq!(engine.phase(), EnginePhase::Complete);
    }

    #[test]
    fn push_into_wall_is_rejected() {
        let layout = json!({
            "width": 5,
            "height": 5,
            "grid": ["WWWWW", "W.B.W", "W.P.W", "W.T.W", "WWWWW"],
        })
        .to_string();
        let mut engine = loaded(&layout);
        let before = engine.game_state().clone();

        let outcome = engine.move_player(Up);

        assert_eq!(outcome, MoveOutcome::Rejected(MoveRejection::BoxBlocked));
        assert_eq!(engine.game_state(), &before);
        assert_eq!(engine.game_state().moves, 0);
    }

    #[test]
    fn reset_restores_initial_board() {
        let mut engine = loaded(&scenario_layout());
        let initial = engine.game_state().clone();

        engine.move_player(Left);
        engine.move_player(Up);
        engine.move_player(Right);
        assert_eq!(engine.game_state().moves, 3);

        engine.reset();

        assert_eq!(engine.game_state(), &initial);
        assert_eq!(engine.game_state().moves, 0);
    }

    #[test]
    fn reset_after_completion_reopens_level() {
        let mut engine = loaded(&scenario_layout());
        engine.move_player(Up);
        assert_eq!(engine.phase(), EnginePhase::Complete);

        engine.reset();

        assert_eq!(engine.phase(), EnginePhase::Active);
        assert_eq!(engine.game_state().boxes_on_target, 0);
    }

    #[test]
    fn rows_given_as_arrays_decode_like_strings() {
        let as_arrays = json!({
            "grid": [
                ["W", "W", "W", "W", "W"],
                ["W", ".", "T", ".", "W"],
                ["W", ".", "B", ".", "W"],
                ["W", ".", "P", ".", "W"],
                ["W", "W", "W", "W", "W"],
            ],
        })
        .to_string();

        assert_eq!(loaded(&as_arrays).game_state(), loaded(&scenario_layout()).game_state());
    }

    #[test]
    fn mixed_row_shapes_decode() {
        let mixed = json!({ "grid": ["WWWW", ["W", "P", "B", "W"], "WTWW"] }).to_string();
        let engine = loaded(&mixed);
        assert_eq!(engine.game_state().grid[1], vec![Cell::Wall, Cell::Player, Cell::Box, Cell::Wall]);
        assert_eq!(engine.game_state().total_targets, 1);
    }

    #[test]
    fn total_targets_counts_boxes_already_on_targets() {
        let layout = json!({ "grid": ["WWWWWW", "WP*BTW", "WWWWWW"] }).to_string();
        let engine = loaded(&layout);
        assert_eq!(engine.game_state().total_targets, 2);
        assert_eq!(engine.game_state().boxes_on_target, 1);
        assert!(!engine.is_complete());
    }

    #[test]
    fn malformed_layouts_leave_an_inert_board() {
        let cases = [
            "not json",
            r#"{"width": 3, "height": 3}"#,
            r#"{"grid": "WWW"}"#,
            r#"{"grid": [1, 2, 3]}"#,
            r#"{"grid": ["WWW", "WXW", "WWW"]}"#,
            r#"{"grid": [["W", "PP", "W"]]}"#,
            r#"{"grid": ["WWW", "W.W", "WWW"]}"#,
        ];
        for case in cases {
            let mut engine = loaded(case);
            let state = engine.game_state();
            assert!(state.grid.is_empty(), "expected empty board for {}", case);
            assert_eq!(state.moves, 0);
            assert_eq!(state.boxes_on_target, 0);
            assert_eq!(state.total_targets, 0);
            assert!(!engine.is_complete());
            assert_eq!(engine.move_player(Up), MoveOutcome::Rejected(MoveRejection::OutOfBounds));
            assert_eq!(engine.phase(), EnginePhase::Active);
        }
    }

    #[test]
    fn uninitialized_engine_ignores_input() {
        let mut engine = PuzzleEngine::new();
        assert_eq!(engine.phase(), EnginePhase::Uninitialized);

        engine.reset();
        assert_eq!(engine.move_player(Right), MoveOutcome::Rejected(MoveRejection::OutOfBounds));
        assert_eq!(engine.phase(), EnginePhase::Uninitialized);
    }

    #[test]
    fn reinitialize_replaces_the_board() {
        let mut engine = loaded(&scenario_layout());
        engine.move_player(Left);

        let other = json!({ "grid": ["WWWWW", "WPBTW", "WWWWW"] }).to_string();
        engine.initialize(&other);
        assert_eq!(engine.game_state().moves, 0);
        assert_eq!(engine.game_state().player, Vec2 { x: 1, y: 1 });

        engine.move_player(Right);
        engine.reset();
        assert_eq!(engine.game_state().player, Vec2 { x: 1, y: 1 });
        assert_eq!(engine.game_state().width(), 5);
    }

    #[test]
    fn moves_after_completion_are_still_resolved() {
        let layout = json!({ "grid": ["WWWWWW", "W.PBTW", "WWWWWW"] }).to_string();
        let mut engine = loaded(&layout);
        engine.move_player(Right);
        assert!(engine.is_complete());

        assert_eq!(engine.move_player(Left), MoveOutcome::Accepted(GameChangeType::PlayerMove));
        assert_eq!(engine.game_state().moves, 2);
        assert!(engine.is_complete());
    }
}
