//! Board cursor driven by the keyboard.

use crate::types::GameAction;

/// Cell the next tap goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: i32,
    pub col: i32,
}

impl Cursor {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Centre of a `rows x cols` board
    pub fn centered(rows: i32, cols: i32) -> Self {
        Self::new(rows.max(1) / 2, cols.max(1) / 2)
    }

    /// Move for a cursor action, staying on the board
    ///
    /// Returns true if the action was a cursor movement. Other actions are
    /// left to the caller.
    pub fn apply(&mut self, action: GameAction, rows: i32, cols: i32) -> bool {
        let (dr, dc) = match action {
            GameAction::CursorUp => (-1, 0),
            GameAction::CursorDown => (1, 0),
            GameAction::CursorLeft => (0, -1),
            GameAction::CursorRight => (0, 1),
            _ => return false,
        };
        self.row = (self.row + dr).clamp(0, (rows - 1).max(0));
        self.col = (self.col + dc).clamp(0, (cols - 1).max(0));
        true
    }

    /// Pull the cursor back inside a (possibly smaller) board
    pub fn clamp_to(&mut self, rows: i32, cols: i32) {
        self.row = self.row.clamp(0, (rows - 1).max(0));
        self.col = self.col.clamp(0, (cols - 1).max(0));
    }

    pub fn position(&self) -> (i32, i32) {
        (self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_and_clamps() {
        let mut cursor = Cursor::new(0, 0);
        assert!(cursor.apply(GameAction::CursorUp, 3, 4));
        assert_eq!(cursor.position(), (0, 0));
        cursor.apply(GameAction::CursorDown, 3, 4);
        cursor.apply(GameAction::CursorRight, 3, 4);
        assert_eq!(cursor.position(), (1, 1));
        for _ in 0..10 {
            cursor.apply(GameAction::CursorRight, 3, 4);
            cursor.apply(GameAction::CursorDown, 3, 4);
        }
        assert_eq!(cursor.position(), (2, 3));
    }

    #[test]
    fn test_non_cursor_action_ignored() {
        let mut cursor = Cursor::centered(9, 9);
        assert_eq!(cursor.position(), (4, 4));
        assert!(!cursor.apply(GameAction::Tap, 9, 9));
        assert_eq!(cursor.position(), (4, 4));
    }

    #[test]
    fn test_clamp_to_smaller_board() {
        let mut cursor = Cursor::new(8, 8);
        cursor.clamp_to(5, 3);
        assert_eq!(cursor.position(), (4, 2));
    }
}
