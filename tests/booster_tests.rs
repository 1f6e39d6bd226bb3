//! Booster tests - tap strategies against a real controller

use tile_blast::core::{Board, Booster, BoosterOutcome, GameController, SimpleRng};
use tile_blast::types::{BoosterKind, Tile, TileColor};

use TileColor::{Blue as B, Green as G, Red as R, Yellow as Y};

fn full_board() -> GameController {
    let board = Board::from_colors(&[
        vec![R, G, B, Y],
        vec![G, B, Y, R],
        vec![B, Y, R, G],
        vec![Y, R, G, B],
    ])
    .unwrap();
    GameController::from_board(board, SimpleRng::new(4))
}

#[test]
fn test_swap_scenario() {
    let mut game = full_board();
    let a = game.get_tile(0, 0).unwrap();
    let b = game.get_tile(0, 1).unwrap();

    let mut swap = Booster::for_kind(BoosterKind::SwapTile, 0);
    assert_eq!(swap.action(&mut game, 0, 0), BoosterOutcome::NoEffect);

    let BoosterOutcome::Moved(moved) = swap.action(&mut game, 0, 1) else {
        panic!("second tap should swap");
    };
    let ids: Vec<u32> = moved.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);

    assert_eq!(game.get_tile(0, 1).unwrap().id, a.id);
    assert_eq!(game.get_tile(0, 0).unwrap().id, b.id);
    assert_eq!(game.get_tile(0, 1).unwrap().color, a.color);
    assert!(game.board().is_consistent());

    // The booster is ready for a new pair
    assert_eq!(swap.pending(), None);
    assert_eq!(swap.action(&mut game, 3, 3), BoosterOutcome::NoEffect);
    assert_eq!(swap.pending(), Some((3, 3)));
}

#[test]
fn test_swap_any_distance() {
    let mut game = full_board();
    let corner = game.get_tile(3, 3).unwrap();
    let mut swap = Booster::SwapTile { pending: None };
    swap.action(&mut game, 0, 0);
    let outcome = swap.action(&mut game, 3, 3);
    assert!(matches!(outcome, BoosterOutcome::Moved(ref t) if t.len() == 2));
    assert_eq!(game.get_tile(0, 0).unwrap().id, corner.id);
}

#[test]
fn test_bomb_scenario_corner() {
    let mut game = full_board();
    let mut bomb = Booster::for_kind(BoosterKind::Bomb, 1);
    let BoosterOutcome::Removed(tiles) = bomb.action(&mut game, 0, 0) else {
        panic!("bomb on a full board removes tiles");
    };
    let cells: Vec<(i32, i32)> = tiles.iter().map(Tile::position).collect();
    assert_eq!(cells, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);

    // Bomb only selects; removal goes through the controller
    assert!(game.board().is_full());
    game.remove_group(&tiles);
    assert_eq!(game.score(), 10);
}

#[test]
fn test_bomb_radius_two_in_middle() {
    let mut game = full_board();
    let mut bomb = Booster::Bomb { radius: 2 };
    let BoosterOutcome::Removed(tiles) = bomb.action(&mut game, 2, 2) else {
        panic!("expected removal");
    };
    assert_eq!(tiles.len(), 16);
}

#[test]
fn test_choose_group_delegates_to_find_match() {
    let mut game = full_board();
    let mut choose = Booster::default();
    for (r, c) in [(0, 0), (1, 2), (3, 3)] {
        let expected = game.find_match(r, c);
        assert_eq!(
            choose.action(&mut game, r, c),
            BoosterOutcome::Removed(expected)
        );
    }
    // Outside the board the group is empty but still a removal result
    assert_eq!(
        choose.action(&mut game, 9, 9),
        BoosterOutcome::Removed(Vec::new())
    );
}
