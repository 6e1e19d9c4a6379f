//! Batch self-play.
//!
//! Plays many independent Greedy games on one board, optionally across a
//! rayon pool, and records how each one went. A game that has not ended after
//! `max_turns` decisions is stopped and flagged as stalled.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, warn};

use crate::board::BoardGraph;
use crate::game::{GameConfig, GameError, GameState, PlayerId, TurnStatus};

/// Configuration for a batch of self-play games.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Players per game.
    pub players: usize,
    /// Targets dealt to each player.
    pub targets_per_player: usize,
    /// Decisions after which an unfinished game is abandoned.
    pub max_turns: u64,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Base seed (0 = use entropy). Game `i` is seeded with `seed + i`.
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            players: 2,
            targets_per_player: 3,
            max_turns: 10_000,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

impl SelfPlayConfig {
    /// Seed for game `game_id`, or `None` when games draw from entropy.
    pub fn game_seed(&self, game_id: usize) -> Option<u64> {
        (self.seed != 0).then(|| self.seed.wrapping_add(game_id as u64))
    }

    fn game_config(&self, game_id: usize) -> GameConfig {
        GameConfig {
            players: self.players,
            targets_per_player: self.targets_per_player,
            seed: self.game_seed(game_id),
            ..Default::default()
        }
    }
}

/// Outcome of one self-play game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub game_id: usize,
    pub seed: Option<u64>,
    /// Decisions made, captures included.
    pub turns: u64,
    pub captures: u64,
    pub finish_order: Vec<PlayerId>,
    /// First player to finish, if anyone did.
    pub winner: Option<PlayerId>,
    pub stalled: bool,
}

/// Errors that stop a self-play batch.
#[derive(Debug, thiserror::Error)]
pub enum SelfPlayError {
    #[error("game {game_id} failed: {source}")]
    Game {
        game_id: usize,
        #[source]
        source: GameError,
    },

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Plays game `game_id` of the batch to completion or until it stalls.
pub fn play_game(
    board: &BoardGraph,
    config: &SelfPlayConfig,
    game_id: usize,
) -> Result<GameRecord, GameError> {
    let game_config = config.game_config(game_id);
    let mut state = GameState::new(board.clone(), &game_config)?;
    let mut captures = 0;

    while state.decisions() < config.max_turns {
        match state.next_move()? {
            TurnStatus::Capture => captures += 1,
            TurnStatus::Continue => {}
            TurnStatus::GameOver => break,
        }
    }

    let stalled = !state.is_over();
    if stalled {
        warn!(game_id, turns = state.decisions(), "game stalled");
    }
    let finish_order = state.finish_order().to_vec();
    Ok(GameRecord {
        game_id,
        seed: game_config.seed,
        turns: state.decisions(),
        captures,
        winner: finish_order.first().copied(),
        finish_order,
        stalled,
    })
}

/// Plays `config.num_games` games on `board`, ordered by game id.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_self_play(
    board: &BoardGraph,
    config: &SelfPlayConfig,
) -> Result<Vec<GameRecord>, SelfPlayError> {
    if config.threads > 1 {
        run_self_play_parallel(board, config)
    } else {
        (0..config.num_games)
            .map(|i| play_and_report(board, config, i, i + 1))
            .collect()
    }
}

fn run_self_play_parallel(
    board: &BoardGraph,
    config: &SelfPlayConfig,
) -> Result<Vec<GameRecord>, SelfPlayError> {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;
    let completed = AtomicUsize::new(0);

    pool.install(|| {
        (0..config.num_games)
            .into_par_iter()
            .map(|i| {
                let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                play_and_report(board, config, i, n)
            })
            .collect()
    })
}

fn play_and_report(
    board: &BoardGraph,
    config: &SelfPlayConfig,
    game_id: usize,
    n: usize,
) -> Result<GameRecord, SelfPlayError> {
    let game_start = Instant::now();
    let game = play_game(board, config, game_id)
        .map_err(|source| SelfPlayError::Game { game_id, source })?;
    debug!(game_id, turns = game.turns, "game done");
    if !config.quiet {
        let outcome = match (game.stalled, game.winner) {
            (true, _) => "stalled".to_string(),
            (false, Some(w)) => format!("player {} wins", w),
            (false, None) => "no winner".to_string(),
        };
        eprintln!(
            "Game {}/{}: {} after {} turns ({:.1}ms)",
            n,
            config.num_games,
            outcome,
            game.turns,
            game_start.elapsed().as_secs_f64() * 1000.0,
        );
    }
    Ok(game)
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Prints a summary of self-play results to stderr.
pub fn print_summary(games: &[GameRecord], players: usize) {
    let total = games.len();
    let mut win_counts = vec![0usize; players];
    let mut stalled = 0usize;
    let mut turns = 0u64;
    let mut captures = 0u64;

    for game in games {
        turns += game.turns;
        captures += game.captures;
        if game.stalled {
            stalled += 1;
        }
        if let Some(count) = game.winner.and_then(|w| win_counts.get_mut(w)) {
            *count += 1;
        }
    }

    let per_game = |x: u64| x as f64 / total.max(1) as f64;
    eprintln!("=== Self-Play Summary ===");
    eprintln!("Games: {}", total);
    eprintln!("Avg turns/game: {:.1}", per_game(turns));
    eprintln!("Avg captures/game: {:.1}", per_game(captures));
    eprintln!("Stalled: {}", stalled);
    eprintln!("Win distribution:");
    for (player, &wins) in win_counts.iter().enumerate() {
        let pct = 100.0 * wins as f64 / total.max(1) as f64;
        eprintln!("  player {:>2}: {} ({:.1}%)", player, wins, pct);
    }
}
