//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! ```text
//! ┌──────────────────┐  SCORE
//! │████[]████████████│  45/500
//! │██████<>██████████│  MOVES
//! │··················│  17
//! └──────────────────┘  ...
//! ```
//!
//! `[]` marks the cursor, `<>` the first tile of a pending swap.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BoosterKind, GameStatus, TileColor};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
/// Rows used by the side panel including help
const PANEL_HEIGHT: u16 = 18;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Display colour of a tile
pub fn tile_rgb(color: TileColor) -> Rgb {
    match color {
        TileColor::Red => Rgb::new(220, 80, 80),
        TileColor::Green => Rgb::new(100, 220, 120),
        TileColor::Blue => Rgb::new(80, 120, 220),
        TileColor::Yellow => Rgb::new(240, 220, 80),
        TileColor::Purple => Rgb::new(200, 120, 220),
    }
}

fn booster_label(kind: BoosterKind) -> &'static str {
    match kind {
        BoosterKind::ChooseGroup => "GROUP",
        BoosterKind::SwapTile => "SWAP",
        BoosterKind::Bomb => "BOMB",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    None,
    Cursor,
    Pending,
}

/// A lightweight terminal view of the board and session counters.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    show_help: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            show_help: true,
        }
    }
}

impl GameView {
    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<(i32, i32)>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let rows = snap.rows.max(0) as u16;
        let cols = snap.cols.max(0) as u16;
        let frame_w = cols.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = rows.saturating_add(2);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        fb.draw_box(
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG),
        );

        for r in 0..snap.rows {
            for c in 0..snap.cols {
                let marker = if cursor == Some((r, c)) {
                    Marker::Cursor
                } else if snap.pending_swap == Some((r, c)) {
                    Marker::Pending
                } else {
                    Marker::None
                };
                let x = start_x
                    .saturating_add(1)
                    .saturating_add((c as u16).saturating_mul(self.cell_w));
                let y = start_y.saturating_add(1).saturating_add(r as u16);
                self.draw_cell(fb, x, y, snap.cell(r, c).map(|t| t.color), marker);
            }
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, snap, viewport, panel_x, start_y);

        let banner = match snap.status {
            GameStatus::Won => Some("YOU WIN"),
            GameStatus::Lost => Some("GAME OVER"),
            GameStatus::Playing => None,
        };
        if let Some(text) = banner {
            let mid_y = start_y.saturating_add(frame_h / 2);
            let style = CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG).bold();
            draw_centered(fb, start_x, frame_w, mid_y, text, style);
            draw_centered(
                fb,
                start_x,
                frame_w,
                mid_y.saturating_add(1),
                "r: restart",
                CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG),
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        cursor: Option<(i32, i32)>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        color: Option<TileColor>,
        marker: Marker,
    ) {
        let Some(color) = color else {
            let style = CellStyle::plain(Rgb::new(90, 90, 100), BOARD_BG).dim();
            fb.fill_rect(x, y, self.cell_w, 1, '·', style);
            if marker == Marker::Cursor {
                self.draw_brackets(fb, x, y, ('[', ']'), BOARD_BG);
            }
            return;
        };

        let rgb = tile_rgb(color);
        fb.fill_rect(x, y, self.cell_w, 1, '█', CellStyle::plain(rgb, BOARD_BG));
        match marker {
            Marker::Cursor => self.draw_brackets(fb, x, y, ('[', ']'), rgb),
            Marker::Pending => self.draw_brackets(fb, x, y, ('<', '>'), rgb),
            Marker::None => {}
        }
    }

    fn draw_brackets(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        (open, close): (char, char),
        bg: Rgb,
    ) {
        let style = CellStyle::plain(Rgb::new(255, 255, 255), bg).bold();
        fb.put_char(x, y, open, style);
        if self.cell_w > 1 {
            fb.put_char(x.saturating_add(self.cell_w - 1), y, close, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        let active = CellStyle::plain(Rgb::new(240, 220, 80), PANEL_BG).bold();

        let mut y = start_y.min(viewport.height.saturating_sub(PANEL_HEIGHT));
        fb.put_str(panel_x, y, "SCORE", label);
        let x = fb.put_u32(panel_x, y + 1, snap.score, value);
        let x = fb.put_str(x, y + 1, "/", value);
        fb.put_u32(x, y + 1, snap.goal_score, value);
        y += 3;

        fb.put_str(panel_x, y, "MOVES", label);
        fb.put_i32(panel_x, y + 1, snap.moves, value);
        y += 3;

        fb.put_str(panel_x, y, "SHUFFLES", label);
        fb.put_u32(panel_x, y + 1, snap.shuffle_count, value);
        y += 3;

        fb.put_str(panel_x, y, "BOOSTER", label);
        let x = fb.put_str(panel_x, y + 1, booster_label(snap.active_booster), active);
        if snap.pending_swap.is_some() {
            fb.put_str(x + 1, y + 1, "2nd tap", value.dim());
        }
        y += 3;

        let x = fb.put_str(panel_x, y, "SWAP ", label);
        fb.put_u32(x, y, snap.swap_boosters, value);
        let x = fb.put_str(panel_x, y + 1, "BOMB ", label);
        fb.put_u32(x, y + 1, snap.bomb_boosters, value);
        y += 3;

        if !self.show_help {
            return;
        }
        let help = value.dim();
        for line in ["1 group  2 swap", "3 bomb   f shuffle", "r restart  q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y += 1;
        }
    }
}

fn draw_centered(
    fb: &mut FrameBuffer,
    start_x: u16,
    frame_w: u16,
    y: u16,
    text: &str,
    style: CellStyle,
) {
    let text_w = text.chars().count() as u16;
    let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    fb.put_str(x, y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, GameController, SimpleRng};
    use crate::types::TileColor::{Blue as B, Red as R};

    fn snapshot() -> GameSnapshot {
        let board = Board::from_colors(&[vec![R, B], vec![B, R]]).unwrap();
        let mut c = GameController::from_board(board, SimpleRng::new(1));
        c.set_moves(7);
        c.set_goal_score(50);
        c.snapshot()
    }

    fn contains(fb: &FrameBuffer, needle: &str) -> bool {
        (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
    }

    #[test]
    fn test_board_frame_and_tiles() {
        let fb = GameView::default().render(&snapshot(), None, Viewport::new(40, 12));
        let frame_rows: Vec<String> = (0..12).map(|y| fb.row_text(y)).collect();
        assert!(frame_rows.iter().any(|row| row.contains("┌────┐")));
        assert!(frame_rows.iter().any(|row| row.contains("│████│")));

        let red = fb.cells().iter().filter(|cell| cell.style.fg == tile_rgb(R)).count();
        assert_eq!(red, 4);
    }

    #[test]
    fn test_cursor_marker() {
        let fb = GameView::default().render(&snapshot(), Some((0, 1)), Viewport::new(40, 12));
        assert!(contains(&fb, "│██[]│"));
    }

    #[test]
    fn test_side_panel_values() {
        let fb = GameView::default().render(&snapshot(), None, Viewport::new(40, 16));
        assert!(contains(&fb, "SCORE"));
        assert!(contains(&fb, "0/50"));
        assert!(contains(&fb, "GROUP"));
        assert!(contains(&fb, "SWAP 0"));
    }

    #[test]
    fn test_help_can_be_hidden() {
        let viewport = Viewport::new(50, 20);
        let fb = GameView::default().render(&snapshot(), None, viewport);
        assert!(contains(&fb, "q quit"));

        let fb = GameView::default().with_help(false).render(&snapshot(), None, viewport);
        assert!(!contains(&fb, "q quit"));
        assert!(contains(&fb, "SCORE"));
    }

    #[test]
    fn test_banner_for_terminal_status() {
        let mut snap = snapshot();
        snap.status = GameStatus::Lost;
        let fb = GameView::default().render(&snap, None, Viewport::new(40, 12));
        assert!(contains(&fb, "GAME OVER"));

        snap.status = GameStatus::Won;
        let fb = GameView::default().render(&snap, None, Viewport::new(40, 12));
        assert!(contains(&fb, "YOU WIN"));
    }
}
