//! Board module - owns the tile grid
//!
//! The board is a `rows x cols` grid where each cell is either empty or holds
//! a [`Tile`]. Uses a flat array (row-major, `row * cols + col`) for cache
//! locality. Row 0 is the top of the board.
//!
//! The board also owns the tile id counter, so ids are unique per board and
//! reproducible from a seed.
//!
//! Invariant: a tile stored at `(r, c)` has `tile.row == r && tile.col == c`.
//! Every mutator here preserves it.

use arrayvec::ArrayVec;

use crate::config::validate_dimensions;
use crate::error::ConfigError;
use crate::rng::RandomSource;
use crate::types::{Tile, TileColor};

/// Orthogonal neighbour offsets (down, up, right, left)
const NEIGHBOURS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A single grid cell
pub type Cell = Option<Tile>;

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: i32,
    cols: i32,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
    /// Last id handed out; the next tile gets `next_id + 1`
    next_id: u32,
}

impl Board {
    /// Create a fully populated board with random colours
    pub fn new<R: RandomSource + ?Sized>(
        rows: i32,
        cols: i32,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let mut board = Self::empty(rows, cols)?;
        for r in 0..rows {
            for c in 0..cols {
                let tile = board.new_tile(r, c, rng);
                board.set(r, c, Some(tile));
            }
        }
        Ok(board)
    }

    /// Create a board with every cell empty
    pub fn empty(rows: i32, cols: i32) -> Result<Self, ConfigError> {
        validate_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![None; (rows as usize) * (cols as usize)],
            next_id: 0,
        })
    }

    /// Create a board from explicit colours, one inner vec per row
    ///
    /// Ids are assigned in row-major order starting at 1.
    pub fn from_colors(colors: &[Vec<TileColor>]) -> Result<Self, ConfigError> {
        let rows = colors.len();
        let cols = colors.first().map(|row| row.len()).unwrap_or(0);
        let dims = (i32::try_from(rows), i32::try_from(cols));
        let (Ok(rows_i), Ok(cols_i)) = dims else {
            return Err(ConfigError::InvalidDimensions {
                rows: i32::MAX,
                cols: i32::MAX,
            });
        };

        let mut board = Self::empty(rows_i, cols_i)?;
        for (r, row) in colors.iter().enumerate() {
            if row.len() != cols {
                return Err(ConfigError::RaggedRows {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, &color) in row.iter().enumerate() {
                board.next_id += 1;
                let tile = Tile::new(board.next_id, color, r as i32, c as i32);
                board.set(r as i32, c as i32, Some(tile));
            }
        }
        Ok(board)
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if !self.in_bounds(row, col) {
            return None;
        }
        Some((row as usize) * (self.cols as usize) + (col as usize))
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Whether (row, col) is a valid grid index
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && row < self.rows && col < self.cols
    }

    /// Allocate a tile with a fresh id and a random colour
    ///
    /// The tile is not placed; callers put it into the grid themselves.
    pub fn new_tile<R: RandomSource + ?Sized>(&mut self, row: i32, col: i32, rng: &mut R) -> Tile {
        self.next_id += 1;
        let pick = rng.next_range(TileColor::COUNT as u32) as usize;
        let color = TileColor::ALL[pick % TileColor::COUNT];
        Tile::new(self.next_id, color, row, col)
    }

    /// Last id handed out by this board
    pub fn last_id(&self) -> u32 {
        self.next_id
    }

    /// Tile at (row, col); `None` if empty or out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Tile> {
        self.index(row, col).and_then(|idx| self.cells[idx])
    }

    /// Place a tile (or clear the cell)
    ///
    /// The stored tile's row/col are rewritten to the cell. Returns false if
    /// out of bounds, in which case nothing changes.
    pub fn set(&mut self, row: i32, col: i32, tile: Option<Tile>) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = tile.map(|mut t| {
                    t.row = row;
                    t.col = col;
                    t
                });
                true
            }
            None => false,
        }
    }

    /// Remove and return the tile at (row, col)
    pub fn take(&mut self, row: i32, col: i32) -> Option<Tile> {
        self.index(row, col).and_then(|idx| self.cells[idx].take())
    }

    /// Exchange the contents of two cells
    ///
    /// Returns false (and changes nothing) if either cell is out of bounds.
    pub fn swap(&mut self, a: (i32, i32), b: (i32, i32)) -> bool {
        let (Some(ia), Some(ib)) = (self.index(a.0, a.1), self.index(b.0, b.1)) else {
            return false;
        };
        self.cells.swap(ia, ib);
        for (idx, (row, col)) in [(ia, a), (ib, b)] {
            if let Some(tile) = self.cells[idx].as_mut() {
                tile.row = row;
                tile.col = col;
            }
        }
        true
    }

    /// True if both cells hold tiles of the same colour
    pub fn same_color(&self, a: (i32, i32), b: (i32, i32)) -> bool {
        match (self.get(a.0, a.1), self.get(b.0, b.1)) {
            (Some(x), Some(y)) => x.color == y.color,
            _ => false,
        }
    }

    /// In-bounds orthogonal neighbours of (row, col)
    pub fn neighbours(&self, row: i32, col: i32) -> ArrayVec<(i32, i32), 4> {
        NEIGHBOURS
            .iter()
            .map(|&(dr, dc)| (row + dr, col + dc))
            .filter(|&(r, c)| self.in_bounds(r, c))
            .collect()
    }

    /// Tiles in the square `[row-radius, row+radius] x [col-radius, col+radius]`
    /// clamped to the board, row-major
    pub fn tiles_in_square(&self, row: i32, col: i32, radius: i32) -> Vec<Tile> {
        let radius = radius.max(0);
        let r0 = row.saturating_sub(radius).max(0);
        let r1 = row.saturating_add(radius).min(self.rows - 1);
        let c0 = col.saturating_sub(radius).max(0);
        let c1 = col.saturating_add(radius).min(self.cols - 1);

        let mut tiles = Vec::new();
        for r in r0..=r1 {
            for c in c0..=c1 {
                if let Some(tile) = self.get(r, c) {
                    tiles.push(tile);
                }
            }
        }
        tiles
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// All tiles in row-major order, skipping empty cells
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().filter_map(|cell| *cell)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Check the position invariant for every cell
    pub fn is_consistent(&self) -> bool {
        self.cells.iter().enumerate().all(|(idx, cell)| match cell {
            Some(tile) => {
                let row = (idx / self.cols as usize) as i32;
                let col = (idx % self.cols as usize) as i32;
                tile.row == row && tile.col == col
            }
            None => true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;
    use crate::types::TileColor::{Blue as B, Red as R};

    #[test]
    fn test_board_index_calculation() {
        let board = Board::empty(3, 4).unwrap();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 3), Some(3));
        assert_eq!(board.index(1, 0), Some(4));
        assert_eq!(board.index(2, 3), Some(11));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(0, 4), None);
        assert_eq!(board.index(3, 0), None);
    }

    #[test]
    fn test_new_board_is_full_and_consistent() {
        let mut rng = SimpleRng::new(42);
        let board = Board::new(5, 6, &mut rng).unwrap();
        assert!(board.is_full());
        assert!(board.is_consistent());
        assert_eq!(board.tiles().count(), 30);
        assert_eq!(board.last_id(), 30);
    }

    #[test]
    fn test_new_tile_ids_increase() {
        let mut rng = SimpleRng::new(1);
        let mut board = Board::empty(2, 2).unwrap();
        let a = board.new_tile(0, 0, &mut rng);
        let b = board.new_tile(1, 1, &mut rng);
        assert_eq!(a.id + 1, b.id);
        assert_eq!((b.row, b.col), (1, 1));
        // new_tile does not place anything
        assert_eq!(board.empty_count(), 4);
    }

    #[test]
    fn test_set_rewrites_position() {
        let mut board = Board::empty(2, 2).unwrap();
        let stray = Tile::new(9, R, 7, 7);
        assert!(board.set(1, 0, Some(stray)));
        let placed = board.get(1, 0).unwrap();
        assert_eq!((placed.row, placed.col), (1, 0));
        assert!(!board.set(2, 0, Some(stray)));
        assert!(board.is_consistent());
    }

    #[test]
    fn test_swap_updates_both_tiles() {
        let mut board = Board::from_colors(&[vec![R, B]]).unwrap();
        assert!(board.swap((0, 0), (0, 1)));
        assert_eq!(board.get(0, 0).unwrap().color, B);
        assert_eq!(board.get(0, 1).unwrap().color, R);
        assert!(board.is_consistent());
        assert!(!board.swap((0, 0), (0, 5)));
    }

    #[test]
    fn test_from_colors_rejects_ragged_rows() {
        let err = Board::from_colors(&[vec![R, B], vec![R]]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert!(Board::from_colors(&[]).is_err());
    }

    #[test]
    fn test_neighbours_clamped() {
        let board = Board::empty(3, 3).unwrap();
        assert_eq!(board.neighbours(0, 0).len(), 2);
        assert_eq!(board.neighbours(1, 1).len(), 4);
        assert_eq!(board.neighbours(2, 1).len(), 3);
    }
}
