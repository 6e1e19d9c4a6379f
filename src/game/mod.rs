//! Game state and turn engine.
//!
//! Contains the per-player state, game configuration, the move rulebook, and
//! the `GameState` turn engine that ties them to a board.

pub mod config;
pub mod player;
pub mod rules;
pub mod state;

pub use config::GameConfig;
pub use player::{Player, PlayerId, PlayerScratch, TargetSet};
pub use rules::{validate_move, RuleViolation};
pub use state::{Boeg, GameError, GameState, TurnPhase, TurnRecord, TurnStatus, DICE_SIDES};
