use tile_blast::engine::Session;
use tile_blast::term::{encode_diff_into, FrameBuffer, GameView, Viewport};
use tile_blast::types::{BoosterKind, GameConfig};

fn session() -> Session {
    Session::new(GameConfig {
        seed: 12,
        ..GameConfig::default()
    })
    .unwrap()
}

fn screen(fb: &FrameBuffer) -> Vec<String> {
    (0..fb.height()).map(|y| fb.row_text(y)).collect()
}

#[test]
fn test_default_board_fits_80x24() {
    let s = session();
    let fb = GameView::default().render(&s.snapshot(), Some((4, 4)), Viewport::new(80, 24));
    let lines = screen(&fb);

    // 9 columns of 2 chars plus the border
    let top = lines.iter().find(|l| l.contains('┌')).unwrap();
    let width = top.chars().skip_while(|&c| c != '┌').take_while(|&c| c != '┐').count() + 1;
    assert_eq!(width, 20);

    let board_rows = lines.iter().filter(|l| l.contains('│')).count();
    assert_eq!(board_rows, 9);
    assert!(lines.iter().any(|l| l.contains("[]")));
    assert!(lines.iter().any(|l| l.contains("MOVES")));
}

#[test]
fn test_pending_swap_and_booster_shown() {
    let mut s = session();
    s.select_booster(BoosterKind::SwapTile).unwrap();
    s.tap(0, 0).unwrap();
    let fb = GameView::default().render(&s.snapshot(), None, Viewport::new(80, 24));
    let lines = screen(&fb);
    assert!(lines.iter().any(|l| l.contains("│<>")));
    assert!(lines.iter().any(|l| l.contains("SWAP") && l.contains("2nd tap")));
}

#[test]
fn test_tiny_viewport_does_not_panic() {
    let s = session();
    let fb = GameView::default().render(&s.snapshot(), Some((0, 0)), Viewport::new(5, 3));
    assert_eq!(fb.width(), 5);
    assert_eq!(fb.height(), 3);
}

#[test]
fn test_cursor_move_changes_few_cells() {
    let s = session();
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let a = view.render(&s.snapshot(), Some((4, 4)), viewport);
    let b = view.render(&s.snapshot(), Some((4, 5)), viewport);

    let changed = a
        .cells()
        .iter()
        .zip(b.cells())
        .filter(|(x, y)| x != y)
        .count();
    assert_eq!(changed, 4);

    let mut out = Vec::new();
    encode_diff_into(&a, &b, &mut out).unwrap();
    assert!(!out.is_empty());
}
