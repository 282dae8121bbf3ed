
mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn when_move_right_observes_move_right(){
        let level = r#"
WWWW
WP.W
WWWW
"#;
        let mut game = GameTestState::new(level);
        game.assert_step(UserAction::Move(Right));

        game.assert_matches(r#"
WWWW
W.PW
WWWW
"#);
        assert_eq!(game.game_state.player, Vec2 { x: 2, y: 1 });
        assert_eq!(game.game_state.moves, 1);
    }

    #[test]
    fn when_push_pushes(){
        let level = r#"
WWWWW
WPB.W
WWWWW
"#;
        let mut game = GameTestState::new(level);
        let update = game.assert_step(UserAction::Move(Right));

        game.assert_matches(r#"
WWWWW
W.PBW
WWWWW
"#);
        assert!(matches!(update, GameUpdate::NextState(_, GameChangeType::PlayerAndBoxMove)));
    }

    #[test]
    fn when_push_onto_target_box_becomes_box_on_target(){
        let level = r#"
WWWWW
WPBTW
WWWWW
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Right);

        game.assert_matches(r#"
WWWWW
W.P*W
WWWWW
"#);
        assert_eq!(game.game_state.boxes_on_target, 1);
        assert!(game.game_state.is_complete());
    }

    #[test]
    fn when_block_pushed_into_block_remains_two_blocks(){
        let level = r#"
WWWWWW
WPBB.W
WWWWWW
"#;
        let mut game = GameTestState::new(level);
        game.assert_rejected(Right);

        game.assert_matches(level);
        assert_eq!(game.game_state.moves, 0);
    }

    #[test]
    fn when_walking_into_wall_nothing_changes(){
        let mut game = GameTestState::new(r#"
WWW
WPW
WWW
"#);
        game.assert_rejected(Up);
        game.assert_rejected(Down);
        game.assert_rejected(Left);
        game.assert_rejected(Right);
    }

    #[test]
    fn when_walking_onto_bare_target_nothing_changes(){
        let mut game = GameTestState::new(r#"
WWWWW
WPTBW
WWWWW
"#);
        let update = game.try_step(UserAction::Move(Right));
        assert_eq!(update, GameUpdate::NoChange(MoveRejection::TargetBlocked));
    }

    #[test]
    fn when_box_is_on_target_it_can_no_longer_be_pushed(){
        let mut game = GameTestState::new(r#"
WWWWWW
WPBT.W
WWWWWW
"#);
        game.assert_move(Right);
        game.assert_matches(r#"
WWWWWW
W.P*.W
WWWWWW
"#);
        let update = game.try_step(UserAction::Move(Right));
        assert_eq!(update, GameUpdate::NoChange(MoveRejection::TargetBlocked));
        assert_eq!(game.game_state.boxes_on_target, 1);
    }

    #[test]
    fn when_box_pushed_into_box_on_target_nothing_changes(){
        let mut game = GameTestState::new(r#"
WWWWWW
WPB*.W
WWWWWW
"#);
        let update = game.try_step(UserAction::Move(Right));
        assert_eq!(update, GameUpdate::NoChange(MoveRejection::BoxBlocked));
    }

    #[test]
    fn when_box_pushed_into_wall_nothing_changes(){
        let mut game = GameTestState::new(r#"
WWWW
WPBW
WWWW
"#);
        let update = game.try_step(UserAction::Move(Right));
        assert_eq!(update, GameUpdate::NoChange(MoveRejection::BoxBlocked));
    }

    #[test]
    fn when_grid_has_open_edge_moves_stop_at_bounds(){
        let mut game = GameTestState::new(r#"
P.B
"#);
        assert_eq!(game.try_step(UserAction::Move(Left)), GameUpdate::NoChange(MoveRejection::OutOfBounds));
        game.assert_move(Right);
        assert_eq!(game.try_step(UserAction::Move(Right)), GameUpdate::NoChange(MoveRejection::BoxOutOfBounds));
        game.assert_matches(".PB");
    }

    #[test]
    fn when_rows_are_ragged_short_rows_end_the_board(){
        let mut game = GameTestState::new(r#"
WWWWW
WP.
WWWWW
"#);
        game.assert_move(Right);
        assert_eq!(game.try_step(UserAction::Move(Right)), GameUpdate::NoChange(MoveRejection::OutOfBounds));
    }

    #[test]
    fn when_move_accepted_previous_grid_is_untouched(){
        let game = GameTestState::new(r#"
WWWWW
WPB.W
WWWWW
"#);
        let before = game.game_state.clone();
        let GameUpdate::NextState(after, _) = step(&before, UserAction::Move(Right)) else {
            panic!("push should be accepted");
        };
        assert_eq!(before.grid[1], vec![Cell::Wall, Cell::Player, Cell::Box, Cell::Floor, Cell::Wall]);
        assert_eq!(after.grid[1], vec![Cell::Wall, Cell::Floor, Cell::Player, Cell::Box, Cell::Wall]);
        assert_eq!(before.moves, 0);
    }

    #[test]
    fn when_player_moves_back_board_is_equal(){
        let level = r#"
WWWWW
WP.BW
WWWWW
"#;
        let mut game = GameTestState::new(level);
        let original_state = game.game_state.clone();
        game.assert_move(Right);
        game.assert_move(Left);

        game.assert_matches(level);
        assert_eq!(original_state.grid, game.game_state.grid);
        assert_eq!(game.game_state.moves, 2);
    }

    #[test]
    fn when_boxes_swap_board_returns_to_start(){
        let level = r#"
WWWWWW
W....W
WPB..W
W.B..W
W....W
WWWWWW
"#;
        let mut game = GameTestState::new(level);
        let original_state = game.game_state.clone();
        game.assert_moves(&[
            Right, Left,
            Down, Down,
            Right, Up,
            Right, Right, Up, Up,
            Left, Down, Right, Down, Left,]);
        game.assert_matches(r#"
WWWWWW
W....W
W.B..W
W.BP.W
W....W
WWWWWW
"#);
        game.assert_moves(&[
            Down, Left, Left, Up, Up,]);

        game.assert_matches(level);
        assert_eq!(original_state.grid, game.game_state.grid);
        assert_eq!(game.game_state.moves, 20);
    }
}
