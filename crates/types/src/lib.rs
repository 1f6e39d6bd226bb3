//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic, making them usable in any
//! context (rule engine, session orchestration, terminal rendering, observers).
//!
//! # Session Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 9 | Board rows |
//! | `DEFAULT_COLS` | 9 | Board columns |
//! | `DEFAULT_MOVES` | 20 | Moves available at the start of a session |
//! | `DEFAULT_GOAL_SCORE` | 500 | Score needed to win |
//! | `SHUFFLE_ALLOWANCE` | 3 | Reshuffles available per session |
//! | `DEFAULT_BOMB_RADIUS` | 1 | Bomb booster covers a 3x3 square |
//! | `DEFAULT_SWAP_BOOSTERS` | 3 | Starting swap booster count |
//! | `DEFAULT_BOMB_BOOSTERS` | 3 | Starting bomb booster count |
//! | `MIN_GROUP_SIZE` | 2 | Smallest removable group |
//! | `MAX_SHUFFLE_ATTEMPTS` | 1000 | Permutations tried before a shuffle gives up |
//!
//! # Coordinates
//!
//! `(row, col)` with row 0 at the top. Gravity pulls tiles toward higher row
//! indices. Coordinates are signed so that neighbour arithmetic and
//! out-of-bounds input never wrap.
//!
//! # Examples
//!
//! ```
//! use tile_blast_types::{BoosterKind, GameAction, TileColor};
//!
//! assert_eq!(TileColor::from_str("RED"), Some(TileColor::Red));
//! assert_eq!(BoosterKind::from_str("bomb"), Some(BoosterKind::Bomb));
//! assert_eq!(
//!     GameAction::from_str("selectSwapTile"),
//!     Some(GameAction::SelectBooster(BoosterKind::SwapTile))
//! );
//! ```

use serde::Serialize;

/// Default board rows
pub const DEFAULT_ROWS: i32 = 9;

/// Default board columns
pub const DEFAULT_COLS: i32 = 9;

/// Moves granted at the start of a session
pub const DEFAULT_MOVES: i32 = 20;

/// Score required to win a session
pub const DEFAULT_GOAL_SCORE: u32 = 500;

/// Number of reshuffles (automatic or manual) allowed per session
pub const SHUFFLE_ALLOWANCE: u32 = 3;

/// Radius of the bomb booster (radius 1 = 3x3 square)
pub const DEFAULT_BOMB_RADIUS: i32 = 1;

/// Starting swap booster inventory
pub const DEFAULT_SWAP_BOOSTERS: u32 = 3;

/// Starting bomb booster inventory
pub const DEFAULT_BOMB_BOOSTERS: u32 = 3;

/// A single isolated tile is not a match.
pub const MIN_GROUP_SIZE: usize = 2;

/// Upper bound on permutations tried by one shuffle.
///
/// Some boards (1x1, or a palette split that cannot be arranged into an
/// adjacent pair) never reach a groupable state.
pub const MAX_SHUFFLE_ATTEMPTS: u32 = 1000;


/// The fixed tile palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
}

impl TileColor {
    /// Every palette entry, in index order
    pub const ALL: [TileColor; 5] = [
        TileColor::Red,
        TileColor::Green,
        TileColor::Blue,
        TileColor::Yellow,
        TileColor::Purple,
    ];

    /// Palette size
    pub const COUNT: usize = Self::ALL.len();

    /// Palette entry at `index`, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse a colour name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_blast_types::TileColor;
    ///
    /// assert_eq!(TileColor::from_str("purple"), Some(TileColor::Purple));
    /// assert_eq!(TileColor::from_str("Green"), Some(TileColor::Green));
    /// assert_eq!(TileColor::from_str("orange"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(TileColor::Red),
            "green" => Some(TileColor::Green),
            "blue" => Some(TileColor::Blue),
            "yellow" => Some(TileColor::Yellow),
            "purple" => Some(TileColor::Purple),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TileColor::Red => "red",
            TileColor::Green => "green",
            TileColor::Blue => "blue",
            TileColor::Yellow => "yellow",
            TileColor::Purple => "purple",
        }
    }
}

/// A tile on the board
///
/// `id` is unique within a board and never changes. `row`/`col` always equal
/// the cell the tile currently occupies; the board rewrites them whenever the
/// tile moves. Tiles handed out by the engine are copies of the grid contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Tile {
    pub id: u32,
    pub color: TileColor,
    pub row: i32,
    pub col: i32,
}

impl Tile {
    pub fn new(id: u32, color: TileColor, row: i32, col: i32) -> Self {
        Self { id, color, row, col }
    }

    /// `(row, col)` of the tile
    pub fn position(&self) -> (i32, i32) {
        (self.row, self.col)
    }
}

/// Group-selection strategies available to the player
///
/// - **ChooseGroup**: default; tap removes the same-colour group under the cursor
/// - **SwapTile**: two taps exchange any two tiles
/// - **Bomb**: tap clears a square around the cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoosterKind {
    #[default]
    ChooseGroup,
    SwapTile,
    Bomb,
}

impl BoosterKind {
    /// Parse booster kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "choosegroup" | "group" => Some(BoosterKind::ChooseGroup),
            "swaptile" | "swap" => Some(BoosterKind::SwapTile),
            "bomb" => Some(BoosterKind::Bomb),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BoosterKind::ChooseGroup => "chooseGroup",
            BoosterKind::SwapTile => "swapTile",
            BoosterKind::Bomb => "bomb",
        }
    }
}

/// Session state machine: `Playing -> {Won, Lost}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Won and Lost are final until the session is recreated.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

/// Commands produced by the presentation layer
///
/// Cursor movement stays in the frontend; everything else is forwarded to
/// the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the cursor one row up
    CursorUp,
    /// Move the cursor one row down
    CursorDown,
    /// Move the cursor one column left
    CursorLeft,
    /// Move the cursor one column right
    CursorRight,
    /// Apply the active booster at the cursor
    Tap,
    /// Make a booster the active strategy
    SelectBooster(BoosterKind),
    /// Spend one reshuffle
    Shuffle,
    /// Start a new session
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_blast_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("tap"), Some(GameAction::Tap));
    /// assert_eq!(GameAction::from_str("cursorLeft"), Some(GameAction::CursorLeft));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorup" => Some(GameAction::CursorUp),
            "cursordown" => Some(GameAction::CursorDown),
            "cursorleft" => Some(GameAction::CursorLeft),
            "cursorright" => Some(GameAction::CursorRight),
            "tap" => Some(GameAction::Tap),
            "selectchoosegroup" => Some(GameAction::SelectBooster(BoosterKind::ChooseGroup)),
            "selectswaptile" => Some(GameAction::SelectBooster(BoosterKind::SwapTile)),
            "selectbomb" => Some(GameAction::SelectBooster(BoosterKind::Bomb)),
            "shuffle" => Some(GameAction::Shuffle),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::CursorUp => "cursorUp",
            GameAction::CursorDown => "cursorDown",
            GameAction::CursorLeft => "cursorLeft",
            GameAction::CursorRight => "cursorRight",
            GameAction::Tap => "tap",
            GameAction::SelectBooster(BoosterKind::ChooseGroup) => "selectChooseGroup",
            GameAction::SelectBooster(BoosterKind::SwapTile) => "selectSwapTile",
            GameAction::SelectBooster(BoosterKind::Bomb) => "selectBomb",
            GameAction::Shuffle => "shuffle",
            GameAction::Restart => "restart",
        }
    }
}

/// Session parameters supplied at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    pub rows: i32,
    pub cols: i32,
    pub moves: i32,
    pub goal_score: u32,
    pub shuffle_allowance: u32,
    pub swap_boosters: u32,
    pub bomb_boosters: u32,
    pub bomb_radius: i32,
    /// RNG seed for tile colours and shuffles
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            moves: DEFAULT_MOVES,
            goal_score: DEFAULT_GOAL_SCORE,
            shuffle_allowance: SHUFFLE_ALLOWANCE,
            swap_boosters: DEFAULT_SWAP_BOOSTERS,
            bomb_boosters: DEFAULT_BOMB_BOOSTERS,
            bomb_radius: DEFAULT_BOMB_RADIUS,
            seed: 1,
        }
    }
}
