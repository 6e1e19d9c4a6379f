//! Turn engine.
//!
//! `GameState` owns the board, the players, the Boeg, and the move order,
//! and advances the game one decision at a time through `next_move`. A
//! regular move that lands on the Boeg reports `TurnStatus::Capture` and
//! leaves the cursor in place, so the next call is the capturing player's
//! follow-up move as the Boeg.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::board::{BoardGraph, GraphError, VertexId};
use crate::strategy::MoveStrategy;

use super::config::GameConfig;
use super::player::{Player, PlayerId};
use super::rules::{validate_move, RuleViolation};

/// Highest face of the dice.
pub const DICE_SIDES: u32 = 6;

/// Errors raised while setting up or running a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("at least 2 players are required, got {0}")]
    TooFewPlayers(usize),

    #[error("each player needs at least one target")]
    NoTargetsPerPlayer,

    #[error("{found} strategies configured for {expected} players")]
    StrategyCount { expected: usize, found: usize },

    #[error("invalid board: {0}")]
    Board(#[from] GraphError),

    #[error("rule violation: {0}")]
    Rule(#[from] RuleViolation),

    #[error("the {strategy} strategy is not implemented")]
    NotImplemented { strategy: &'static str },
}

/// The shared capturable piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Boeg {
    position: VertexId,
    controller: Option<PlayerId>,
}

impl Boeg {
    pub fn new(position: VertexId, controller: Option<PlayerId>) -> Self {
        Boeg {
            position,
            controller,
        }
    }

    pub fn position(&self) -> VertexId {
        self.position
    }

    /// Player currently steering the Boeg, if any.
    pub fn controller(&self) -> Option<PlayerId> {
        self.controller
    }
}

/// Engine state between calls to `next_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TurnPhase {
    /// Normal turn advance.
    Playing,
    /// The current player just captured the Boeg and moves again.
    Captured,
    GameOver,
    /// A strategy failed or broke the rules; the run cannot continue.
    Faulted,
}

/// Outcome of one `next_move` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TurnStatus {
    Continue,
    Capture,
    GameOver,
}

/// What happened during the last processed decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    pub player: PlayerId,
    pub roll: u32,
    pub path: Vec<VertexId>,
    /// The player moved the Boeg rather than their own piece.
    pub as_boeg: bool,
    pub captured: bool,
    pub claimed_target: Option<VertexId>,
    pub finished: bool,
}

/// Complete game state and turn engine.
#[derive(Debug, Clone)]
pub struct GameState {
    board: BoardGraph,
    players: Vec<Player>,
    boeg: Boeg,
    move_order: Vec<PlayerId>,
    cursor: usize,
    active_players: usize,
    phase: TurnPhase,
    finish_order: Vec<PlayerId>,
    decisions: u64,
    last_turn: Option<TurnRecord>,
    fault: Option<GameError>,
    rng: SmallRng,
}

impl GameState {
    /// Sets up a new game on `board`.
    ///
    /// Target vertices are shuffled and dealt `targets_per_player` to each
    /// player; the Boeg starts on one of the undealt targets. Players start on
    /// shuffled station vertices, sharing stations only when there are fewer
    /// stations than players.
    pub fn new(board: BoardGraph, config: &GameConfig) -> Result<Self, GameError> {
        let count = config.players;
        let per_player = config.targets_per_player;
        if count < 2 {
            return Err(GameError::TooFewPlayers(count));
        }
        if per_player == 0 {
            return Err(GameError::NoTargetsPerPlayer);
        }
        if !config.strategies.is_empty() && config.strategies.len() != count {
            return Err(GameError::StrategyCount {
                expected: count,
                found: config.strategies.len(),
            });
        }
        board.ensure_capacity(count, per_player)?;

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let mut targets = board.target_vertices().to_vec();
        targets.shuffle(&mut rng);
        let mut stations = board.station_vertices().to_vec();
        stations.shuffle(&mut rng);

        let vertex_count = board.vertex_count() as usize;
        let players: Vec<Player> = (0..count)
            .map(|id| {
                let dealt = &targets[id * per_player..(id + 1) * per_player];
                Player::new(
                    id,
                    stations[id % stations.len()],
                    dealt.iter().copied(),
                    config.strategy_for(id),
                    vertex_count,
                )
            })
            .collect();

        let spare = &targets[count * per_player..];
        let boeg_start = spare
            .choose(&mut rng)
            .copied()
            .ok_or(GraphError::InsufficientTargets {
                required: count * per_player + 1,
                available: targets.len(),
            })?;

        let mut move_order: Vec<PlayerId> = (0..count).collect();
        if config.randomize_move_order {
            move_order.shuffle(&mut rng);
        }

        debug!(
            players = count,
            targets_per_player = per_player,
            boeg = boeg_start,
            ?move_order,
            "game set up"
        );

        Ok(GameState {
            board,
            players,
            boeg: Boeg::new(boeg_start, None),
            move_order,
            cursor: 0,
            active_players: count,
            phase: TurnPhase::Playing,
            finish_order: Vec::new(),
            decisions: 0,
            last_turn: None,
            fault: None,
            rng,
        })
    }

    pub fn board(&self) -> &BoardGraph {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn boeg(&self) -> &Boeg {
        &self.boeg
    }

    pub fn move_order(&self) -> &[PlayerId] {
        &self.move_order
    }

    /// Player whose turn `next_move` will process.
    pub fn current_player(&self) -> PlayerId {
        self.move_order[self.cursor]
    }

    /// Players with targets left.
    pub fn active_players(&self) -> usize {
        self.active_players
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == TurnPhase::GameOver
    }

    /// The error that stopped the run, if any.
    pub fn fault(&self) -> Option<&GameError> {
        self.fault.as_ref()
    }

    /// Players in the order they emptied their target sets.
    pub fn finish_order(&self) -> &[PlayerId] {
        &self.finish_order
    }

    /// Number of decisions taken so far (skipped turns excluded).
    pub fn decisions(&self) -> u64 {
        self.decisions
    }

    pub fn last_turn(&self) -> Option<&TurnRecord> {
        self.last_turn.as_ref()
    }

    /// Whether an unfinished opponent of `player` stands on `vertex`.
    pub fn is_opponent_at(&self, player: PlayerId, vertex: VertexId) -> bool {
        self.players
            .iter()
            .any(|p| p.id() != player && !p.is_finished() && p.position() == vertex)
    }

    /// Where `player` moves from this turn: the Boeg if they control it,
    /// otherwise their own piece.
    pub fn move_origin(&self, player: PlayerId) -> VertexId {
        if self.boeg.controller == Some(player) {
            self.boeg.position
        } else {
            self.players[player].position()
        }
    }

    fn roll_dice(&mut self) -> u32 {
        self.rng.gen_range(1..=DICE_SIDES)
    }

    fn advance_cursor(&mut self) {
        self.cursor = (self.cursor + 1) % self.move_order.len();
    }

    /// Processes one decision.
    ///
    /// Returns `Capture` when the current player landed on the Boeg; the next
    /// call then moves the Boeg for the same player. Returns `GameOver` once at
    /// most one player has targets left, and on every call after that.
    ///
    /// A strategy error or rule violation ends the run: the game enters
    /// `TurnPhase::Faulted` and every later call returns the same error.
    pub fn next_move(&mut self) -> Result<TurnStatus, GameError> {
        if let Some(fault) = &self.fault {
            return Err(fault.clone());
        }
        if self.phase == TurnPhase::GameOver {
            return Ok(TurnStatus::GameOver);
        }

        let id = self.current_player();
        if self.players[id].is_finished() {
            self.advance_cursor();
            return Ok(TurnStatus::Continue);
        }

        let roll = self.roll_dice();
        let as_boeg = self.boeg.controller == Some(id);
        let strategy = self.players[id].strategy();
        let path = match self.decide(id, strategy, roll) {
            Ok(path) => path,
            Err(e) => return Err(self.fault_with(id, e)),
        };
        let Some(&end) = path.last() else {
            return Err(self.fault_with(id, RuleViolation::EmptyPath { player: id }.into()));
        };
        self.decisions += 1;
        debug!(player = id, roll, as_boeg, ?path, "move");

        let mut record = TurnRecord {
            player: id,
            roll,
            path,
            as_boeg,
            captured: false,
            claimed_target: None,
            finished: false,
        };

        let status = if as_boeg {
            self.boeg.position = end;
            if self.players[id].has_target(end) && !self.is_opponent_at(id, end) {
                self.players[id].claim_target(end);
                record.claimed_target = Some(end);
                info!(player = id, target = end, "target claimed");

                if self.players[id].is_finished() {
                    record.finished = true;
                    self.boeg.controller = None;
                    self.active_players -= 1;
                    self.finish_order.push(id);
                    info!(player = id, remaining = self.active_players, "player finished");
                }
            }

            if self.active_players <= 1 {
                self.phase = TurnPhase::GameOver;
                info!(finish_order = ?self.finish_order, "game over");
                TurnStatus::GameOver
            } else {
                self.phase = TurnPhase::Playing;
                self.advance_cursor();
                TurnStatus::Continue
            }
        } else {
            self.players[id].set_position(end);
            if end == self.boeg.position {
                self.boeg.controller = Some(id);
                self.phase = TurnPhase::Captured;
                record.captured = true;
                info!(player = id, vertex = end, "boeg captured");
                TurnStatus::Capture
            } else {
                self.phase = TurnPhase::Playing;
                self.advance_cursor();
                TurnStatus::Continue
            }
        };

        self.last_turn = Some(record);
        Ok(status)
    }

    /// Asks the player's strategy for a path and validates it, lending both
    /// steps the player's scratch.
    fn decide(
        &mut self,
        id: PlayerId,
        strategy: MoveStrategy,
        roll: u32,
    ) -> Result<Vec<VertexId>, GameError> {
        let mut scratch = self.players[id].take_scratch();
        let decision = strategy
            .make_move(self, &self.players[id], &mut scratch, roll)
            .and_then(|path| {
                validate_move(self, id, roll, &path, &mut scratch.origin)?;
                Ok(path)
            });
        self.players[id].restore_scratch(scratch);
        decision
    }

    fn fault_with(&mut self, id: PlayerId, error: GameError) -> GameError {
        warn!(player = id, %error, "run faulted");
        self.phase = TurnPhase::Faulted;
        self.fault = Some(error.clone());
        error
    }

    #[cfg(test)]
    pub(crate) fn place_player(&mut self, id: PlayerId, position: VertexId) {
        self.players[id].set_position(position);
    }

    #[cfg(test)]
    pub(crate) fn set_player_targets(&mut self, id: PlayerId, targets: &[VertexId]) {
        self.players[id].set_targets(targets.iter().copied());
    }

    #[cfg(test)]
    pub(crate) fn place_boeg(&mut self, position: VertexId, controller: Option<PlayerId>) {
        self.boeg = Boeg::new(position, controller);
    }
}
