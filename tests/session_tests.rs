//! Session tests - whole turns, settling and inventory

use tile_blast::core::{Board, GameController, RandomSource, SimpleRng};
use tile_blast::engine::{Session, TapError, TapOutcome, Turn};
use tile_blast::types::{BoosterKind, GameConfig, GameStatus, TileColor};

use TileColor::{Blue as B, Green as G, Purple as P, Red as R, Yellow as Y};

fn session(colors: &[Vec<TileColor>], config: GameConfig, seed: u32) -> Session {
    let board = Board::from_colors(colors).unwrap();
    Session::with_controller(config, GameController::from_board(board, SimpleRng::new(seed)))
        .unwrap()
}

fn resolved(outcome: Result<TapOutcome, TapError>) -> Turn {
    match outcome {
        Ok(TapOutcome::Resolved(turn)) => turn,
        other => panic!("expected a resolved turn, got {:?}", other),
    }
}

#[test]
fn test_invalid_config_rejected() {
    let config = GameConfig {
        moves: 0,
        ..GameConfig::default()
    };
    assert!(Session::new(config).is_err());

    let config = GameConfig {
        rows: -2,
        ..GameConfig::default()
    };
    assert!(Session::new(config).is_err());
}

#[test]
fn test_turn_reports_every_step() {
    let config = GameConfig {
        moves: 10,
        goal_score: 1000,
        ..GameConfig::default()
    };
    // Red L-shape in column 0 with tiles above it in column 1
    let mut s = session(
        &[vec![G, Y, B], vec![R, P, Y], vec![R, R, G]],
        config,
        9,
    );
    let turn = resolved(s.tap(2, 0));
    assert_eq!(turn.booster, BoosterKind::ChooseGroup);
    assert_eq!(turn.removed.len(), 3);
    assert_eq!(turn.score_gained, 6);
    // G falls two rows in column 0; Y and P fall one row in column 1
    assert_eq!(turn.dropped.len(), 3);
    assert_eq!(turn.created.len(), 3);
    assert!(turn.swapped.is_empty());
    assert!(s.controller().board().is_full());
    assert!(s.controller().board().is_consistent());
}

#[test]
fn test_swap_that_keeps_a_group_needs_no_reshuffle() {
    let config = GameConfig {
        moves: 10,
        goal_score: 1000,
        ..GameConfig::default()
    };
    let mut s = session(&[vec![R, R, B], vec![G, B, G]], config, 3);
    s.select_booster(BoosterKind::SwapTile).unwrap();
    s.tap(0, 1).unwrap();
    let turn = resolved(s.tap(0, 2));

    // R B R / G B G: the blue pair in column 1 survives
    assert!(turn.reshuffled.is_none());
    assert_eq!(s.controller().shuffle_count(), 3);
}

#[test]
fn test_dead_board_after_swap_is_reshuffled() {
    let config = GameConfig {
        moves: 10,
        goal_score: 1000,
        ..GameConfig::default()
    };
    let mut s = session(&[vec![R, R, B], vec![G, Y, G]], config, 3);
    s.select_booster(BoosterKind::SwapTile).unwrap();
    s.tap(0, 1).unwrap();
    let turn = resolved(s.tap(0, 2));

    // R B R / G Y G has no adjacent pair
    let tiles = turn.reshuffled.expect("dead board should be reshuffled");
    assert_eq!(tiles.len(), 6);
    assert_eq!(s.controller().shuffle_count(), 2);
    assert!(s.controller().has_any_group());
    assert_eq!(turn.status, GameStatus::Playing);
}

#[test]
fn test_dead_board_without_shuffles_loses() {
    let config = GameConfig {
        moves: 10,
        goal_score: 1000,
        shuffle_allowance: 0,
        ..GameConfig::default()
    };
    let mut s = session(&[vec![R, R, B], vec![G, Y, G]], config, 3);
    s.select_booster(BoosterKind::SwapTile).unwrap();
    s.tap(0, 1).unwrap();
    let turn = resolved(s.tap(0, 2));
    assert!(turn.reshuffled.is_none());
    assert_eq!(turn.status, GameStatus::Lost);
    assert_eq!(s.select_booster(BoosterKind::Bomb), Err(TapError::NotPlayable));
}

/// Refill colours taken from a fixed cycle of palette indices
#[derive(Debug, Clone)]
struct Scripted {
    colors: Vec<u32>,
    next: usize,
}

impl RandomSource for Scripted {
    fn next_u32(&mut self) -> u32 {
        let color = self.colors[self.next % self.colors.len()];
        self.next += 1;
        color << 16
    }
}

#[test]
fn test_loss_reported_before_win() {
    // The last group reaches the goal, the refill leaves a dead board and
    // no shuffles remain: both outcomes hold, the loss wins.
    let config = GameConfig {
        moves: 10,
        goal_score: 3,
        shuffle_allowance: 0,
        ..GameConfig::default()
    };
    let board = Board::from_colors(&[vec![R, R, B]]).unwrap();
    // Green then Yellow
    let rng = Scripted {
        colors: vec![1, 3],
        next: 0,
    };
    let mut s = Session::with_controller(config, GameController::from_board(board, rng)).unwrap();

    let turn = resolved(s.tap(0, 0));
    assert_eq!(turn.score_gained, 3);
    assert_eq!(s.controller().get_tile(0, 0).map(|t| t.color), Some(G));
    assert_eq!(s.controller().get_tile(0, 1).map(|t| t.color), Some(Y));
    assert!(s.controller().is_win());
    assert!(s.controller().is_game_over());
    assert_eq!(turn.status, GameStatus::Lost);
}

#[test]
fn test_bomb_is_a_move_and_consumes_charge() {
    let config = GameConfig {
        moves: 10,
        goal_score: 1000,
        bomb_boosters: 1,
        ..GameConfig::default()
    };
    let mut s = session(&[vec![R, G, B], vec![G, B, R], vec![B, R, G]], config, 1);
    s.select_booster(BoosterKind::Bomb).unwrap();
    let turn = resolved(s.tap(0, 0));
    assert_eq!(turn.booster, BoosterKind::Bomb);
    assert_eq!(turn.removed.len(), 4);
    assert_eq!(s.controller().moves(), 9);
    assert_eq!(s.controller().inventory().bomb, 0);
    assert_eq!(
        s.select_booster(BoosterKind::Bomb),
        Err(TapError::BoosterUnavailable(BoosterKind::Bomb))
    );
}

#[test]
fn test_selecting_other_booster_drops_pending_swap() {
    let mut s = session(
        &[vec![R, R], vec![G, B]],
        GameConfig::default(),
        1,
    );
    s.select_booster(BoosterKind::SwapTile).unwrap();
    s.tap(0, 0).unwrap();
    assert_eq!(s.pending_swap(), Some((0, 0)));

    s.select_booster(BoosterKind::ChooseGroup).unwrap();
    assert_eq!(s.pending_swap(), None);
    assert_eq!(s.controller().inventory().swap, 3);
}

#[test]
fn test_snapshot_carries_session_state() {
    let mut s = session(&[vec![R, R], vec![G, B]], GameConfig::default(), 1);
    s.select_booster(BoosterKind::SwapTile).unwrap();
    s.tap(1, 1).unwrap();
    let snap = s.snapshot();
    assert_eq!(snap.active_booster, BoosterKind::SwapTile);
    assert_eq!(snap.pending_swap, Some((1, 1)));
    assert_eq!(snap.moves, GameConfig::default().moves);
    assert_eq!(snap.status, GameStatus::Playing);
}

#[test]
fn test_restart_keeps_board_dimensions() {
    let config = GameConfig {
        moves: 5,
        ..GameConfig::default()
    };
    let mut session = session(&[vec![R, R, B]], config, 3);
    assert_eq!((session.config().rows, session.config().cols), (1, 3));

    session.restart().unwrap();
    let controller = session.controller();
    assert_eq!((controller.rows(), controller.cols()), (1, 3));
    let snap = session.snapshot();
    assert_eq!((snap.rows, snap.cols), (1, 3));
    assert_eq!(snap.cells.len(), 3);
}
