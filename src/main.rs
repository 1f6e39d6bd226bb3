//! Terminal tile-blast runner (default binary).
//!
//! crossterm for input, the framebuffer renderer for output. Logs go to a
//! file because the terminal is in raw mode while playing.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use flexi_logger::{FileSpec, Logger, WriteMode};
use log::{debug, info};

use tile_blast::engine::{Session, TapOutcome};
use tile_blast::input::{handle_key_event, should_quit, Cursor};
use tile_blast::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tile_blast::types::{
    GameAction, GameConfig, DEFAULT_BOMB_BOOSTERS, DEFAULT_BOMB_RADIUS, DEFAULT_COLS,
    DEFAULT_GOAL_SCORE, DEFAULT_MOVES, DEFAULT_ROWS, DEFAULT_SWAP_BOOSTERS, SHUFFLE_ALLOWANCE,
};

/// Redraw at least this often so resizes are picked up.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Parser)]
#[command(name = "tile-blast", version, about = "Tile-matching puzzle for the terminal")]
struct Args {
    /// Board rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: i32,

    /// Board columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: i32,

    /// Moves available
    #[arg(short, long, default_value_t = DEFAULT_MOVES)]
    moves: i32,

    /// Score needed to win
    #[arg(short, long, default_value_t = DEFAULT_GOAL_SCORE)]
    goal: u32,

    /// Reshuffles available
    #[arg(long, default_value_t = SHUFFLE_ALLOWANCE)]
    shuffles: u32,

    /// Swap boosters available
    #[arg(long, default_value_t = DEFAULT_SWAP_BOOSTERS)]
    swaps: u32,

    /// Bomb boosters available
    #[arg(long, default_value_t = DEFAULT_BOMB_BOOSTERS)]
    bombs: u32,

    /// Bomb reach in cells around the tapped tile
    #[arg(long, default_value_t = DEFAULT_BOMB_RADIUS)]
    bomb_radius: i32,

    /// RNG seed (defaults to the clock)
    #[arg(short, long)]
    seed: Option<u32>,

    /// Log filter, e.g. `debug` or `tile_blast_engine=trace` (RUST_LOG wins)
    #[arg(long)]
    log_level: Option<String>,

    /// Hide the key help under the side panel
    #[arg(long)]
    no_help: bool,

    /// Directory for the log file
    #[arg(long, default_value = ".")]
    log_dir: PathBuf,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig {
            rows: self.rows,
            cols: self.cols,
            moves: self.moves,
            goal_score: self.goal,
            shuffle_allowance: self.shuffles,
            swap_boosters: self.swaps,
            bomb_boosters: self.bombs,
            bomb_radius: self.bomb_radius,
            seed: self.seed.unwrap_or_else(clock_seed),
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _logger = Logger::try_with_env_or_str(args.log_level.as_deref().unwrap_or("info"))?
        .log_to_file(
            FileSpec::default()
                .directory(&args.log_dir)
                .basename("tile-blast")
                .suppress_timestamp(),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .start()?;

    let config = args.config();
    let session = Session::new(config).context("invalid game configuration")?;
    info!("starting {}x{} board, seed {}", config.rows, config.cols, config.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let view = GameView::default().with_help(!args.no_help);
    let result = run(&mut term, &view, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, view: &GameView, mut session: Session) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);
    let mut cursor = Cursor::centered(session.config().rows, session.config().cols);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(
            &session.snapshot(),
            Some(cursor.position()),
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw_swap(&mut fb)?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if should_quit(key) {
                    info!("quit at score {}", session.controller().score());
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    dispatch(&mut session, &mut cursor, action)?;
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

fn dispatch(session: &mut Session, cursor: &mut Cursor, action: GameAction) -> Result<()> {
    let (rows, cols) = (session.config().rows, session.config().cols);
    if cursor.apply(action, rows, cols) {
        return Ok(());
    }

    let result = match action {
        GameAction::Tap => session.tap(cursor.row, cursor.col).map(|outcome| {
            if let TapOutcome::Resolved(turn) = outcome {
                debug!(
                    "+{} score, {} dropped, {} created",
                    turn.score_gained,
                    turn.dropped.len(),
                    turn.created.len()
                );
            }
        }),
        GameAction::SelectBooster(kind) => session.select_booster(kind),
        GameAction::Shuffle => session.shuffle().map(|_| ()),
        GameAction::Restart => {
            session.restart()?;
            *cursor = Cursor::centered(rows, cols);
            Ok(())
        }
        _ => Ok(()),
    };

    if let Err(err) = result {
        debug!("{} rejected: {} ({})", action.as_str(), err, err.code());
    }
    Ok(())
}
