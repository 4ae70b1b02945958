use Direction::*;
use crate::core::*;
use crate::test::test_util::GameTestState;

#[test]
fn when_move_right_observes_move_right() {
    let level = r#"
#@ #
"#;
    let mut game = GameTestState::new(level);
    assert_eq!(game.assert_move(Right), MoveOutcome::Moved);

    let expected_level = r#"
# @#
"#;
    game.assert_matches(expected_level);
    assert_eq!(game.state.step_count(), 1);
    assert_eq!(game.state.history().to_lurd(), "r");
}

#[test]
fn when_push_pushes() {
    let level = r#"
#@$ #
"#;
    let mut game = GameTestState::new(level);
    assert_eq!(game.assert_move(Right), MoveOutcome::Pushed);

    let expected_level = r#"
# @$#
"#;
    game.assert_matches(expected_level);
    assert_eq!(game.state.history().to_lurd(), "R");
}

#[test]
fn when_crate_pushed_onto_target_level_is_solved() {
    let mut state = GridState::from_grid(1, Grid::parse(3, "@$.").unwrap());
    assert!(!state.is_solved());

    assert_eq!(state.step(Right), Ok(MoveOutcome::Pushed));
    assert_eq!(
        state.grid().cells(),
        &[Cell::Empty, Cell::Player, Cell::CrateOnTarget]
    );
    assert!(state.is_solved());
    assert_eq!(state.step_count(), 1);
}

#[test]
fn when_walking_into_wall_nothing_changes() {
    let mut game = GameTestState::new(r#"
#@ #
"#);
    game.assert_blocked(Left);
    assert_eq!(game.state.step_count(), 0);
    assert!(game.state.history().is_empty());
}

#[test]
fn when_crate_pushed_into_crate_remains_two_crates() {
    let level = r#"
#@$$ #
"#;
    let mut game = GameTestState::new(level);
    game.assert_blocked(Right);

    let expected_level = r#"
#@$$ #
"#;
    game.assert_matches(expected_level);
}

#[test]
fn when_crate_pushed_into_crate_on_target_is_blocked() {
    let mut game = GameTestState::new(r#"
#@$*.#
"#);
    game.assert_blocked(Right);
}

#[test]
fn when_crate_pushed_into_wall_is_blocked() {
    let mut game = GameTestState::new(r#"
#@$#
"#);
    game.assert_blocked(Right);
}

#[test]
fn when_stepping_off_the_grid_is_blocked() {
    let mut game = GameTestState::new("@ .");
    game.assert_blocked(Left);
    game.assert_blocked(Up);
    game.assert_blocked(Down);
    game.assert_moves(&[Right, Right]);
    game.assert_matches("  +");
    game.assert_blocked(Right);
}

#[test]
fn when_pushing_a_crate_off_the_grid_is_blocked() {
    let mut game = GameTestState::new(" @$");
    game.assert_blocked(Right);

    let mut game = GameTestState::new(r#"
$
@
"#);
    game.assert_blocked(Up);
}

#[test]
fn when_last_column_is_probed_the_next_row_is_not_used() {
    // a row-major index past the width would land on the next row's floor
    let mut state = GridState::from_grid(1, Grid::parse(2, " @  ").unwrap());
    let before = state.clone();
    assert_eq!(state.step(Right), Ok(MoveOutcome::Blocked));
    assert_eq!(state, before);
}

#[test]
fn when_player_leaves_target_target_remains() {
    let mut game = GameTestState::new(r#"
#+ #
"#);
    game.assert_move(Right);
    game.assert_matches(r#"
#.@#
"#);
    game.assert_move(Left);
    game.assert_matches(r#"
#+ #
"#);
}

#[test]
fn when_crate_pushed_off_target_player_stands_on_target() {
    let mut game = GameTestState::new(r#"
#@* #
"#);
    assert_eq!(game.assert_move(Right), MoveOutcome::Pushed);
    game.assert_matches(r#"
# +$#
"#);
    assert!(!game.state.is_solved());
}

#[test]
fn when_crate_pushed_from_target_to_target_stays_placed() {
    let mut game = GameTestState::new(r#"
#@*.#
"#);
    game.assert_move(Right);
    game.assert_matches(r#"
# +*#
"#);
    assert!(game.state.is_solved());
}

#[test]
fn when_pushing_up_and_down_crate_follows() {
    let mut game = GameTestState::new(r#"
###
#.#
# #
#$#
#@#
###
"#);
    game.assert_moves(&[Up, Up]);
    game.assert_matches(r#"
###
#*#
#@#
# #
# #
###
"#);
    game.assert_blocked(Up);
    game.assert_moves(&[Down, Down]);
    assert_eq!(game.state.history().to_lurd(), "UUdd");
}

#[test]
fn when_player_moves_back_game_is_equal() {
    let level = r#"
#@ $#
"#;
    let mut game = GameTestState::new(level);
    let original_grid = game.state.grid().clone();
    game.assert_move(Right);
    game.assert_move(Left);

    let expected_level = r#"
#@ $#
"#;
    game.assert_matches(expected_level);
    assert_eq!(&original_grid, game.state.grid());
    assert_eq!(game.state.step_count(), 2);
}

#[test]
fn when_crates_swap_game_remains_equal() {
    let level = r#"
######
#    #
#@$  #
# $  #
#    #
######
"#;
    let mut game = GameTestState::new(level);
    let original_grid = game.state.grid().clone();
    game.assert_moves(&[
        Right, Left,
        Down, Down,
        Right, Up,
        Right, Right, Up, Up,
        Left, Down, Right, Down, Left,]);
    game.assert_matches(r#"
######
#    #
# $  #
# $@ #
#    #
######
"#);
    game.assert_moves(&[
        Down, Left, Left, Up, Up,]);

    let expected_level = r#"
######
#    #
#@$  #
# $  #
#    #
######
"#;
    game.assert_matches(expected_level);
    assert_eq!(&original_grid, game.state.grid());
}

#[test]
fn when_more_targets_than_crates_level_reads_solved() {
    let game = GameTestState::new(r#"
#@*..#
"#);
    assert!(game.state.is_solved());
    assert!(game.state.target_count() > game.state.crate_count());
}

#[test]
fn when_no_player_step_fails() {
    let mut state = GridState::from_grid(1, Grid::parse(3, "$. ").unwrap());
    assert_eq!(state.step(Right), Err(GameError::NoPlayerFound));
    assert_eq!(state.undo(), Ok(false));
}

#[test]
fn when_level_has_no_player_it_does_not_start() {
    let levels = [(1, LevelDescriptor::new(2, "$."))].into_iter().collect();
    let store = LevelStore::new(levels).unwrap();
    assert_eq!(GridState::new(&store, 1), Err(GameError::NoPlayerFound));
    assert_eq!(GridState::new(&store, 2), Err(GameError::NoSuchLevel(2)));
}

#[test]
fn when_level_starts_it_is_a_fresh_copy() {
    let store = LevelStore::builtin();
    let mut state = GridState::new(&store, 1).unwrap();
    assert_eq!(state.player_position(), Ok(Position::new(11, 8)));
    assert_eq!(state.step(Up), Ok(MoveOutcome::Moved));
    assert_eq!(state.step(Down), Ok(MoveOutcome::Moved));
    assert_eq!(state.step(Down), Ok(MoveOutcome::Blocked));

    let fresh = GridState::new(&store, 1).unwrap();
    assert_eq!(fresh.step_count(), 0);
    assert_eq!(fresh.grid(), state.grid());
    assert_eq!(store.get(1).unwrap().to_grid().unwrap(), *fresh.grid());
}

#[test]
fn replay_applies_lurd_moves() {
    let mut game = GameTestState::new(r#"
#######
#@$ . #
#######
"#);
    assert_eq!(game.state.replay("RR"), Ok(2));
    game.assert_matches(r#"
#######
#  @* #
#######
"#);
    assert!(game.state.is_solved());
}

#[test]
fn replay_stops_at_a_mismatch() {
    let mut game = GameTestState::new(r#"
#@$ .#
"#);
    assert_eq!(game.state.replay("r"), Err(GameError::ReplayMismatch { index: 0 }));
    game.assert_matches(r#"
#@$ .#
"#);
    assert_eq!(game.state.step_count(), 0);

    assert_eq!(game.state.replay("Rl R"), Err(GameError::ReplayMismatch { index: 2 }));
    assert_eq!(game.state.history().to_lurd(), "Rl");

    assert_eq!(game.state.replay("x"), Err(GameError::InvalidActionCode('x')));
    assert_eq!(game.state.history().to_lurd(), "Rl");
}
