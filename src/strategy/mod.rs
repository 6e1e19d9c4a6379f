//! Move strategies.
//!
//! A strategy turns a dice roll into a proposed path for one player. Only the
//! greedy strategy is implemented; the other variants are part of the
//! interface and fail with `GameError::NotImplemented` when asked to move.

pub mod greedy;

use serde::{Deserialize, Serialize};

use crate::board::VertexId;
use crate::game::{GameError, GameState, Player, PlayerScratch};

/// The move-decision variants a player can be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveStrategy {
    /// Head for the Boeg, then for the nearest free targets.
    #[default]
    Greedy,
    /// Keep away from opponents while closing in on targets.
    Avoidant,
    /// Moves chosen by a human.
    UserControlled,
}

impl MoveStrategy {
    pub const fn name(self) -> &'static str {
        match self {
            MoveStrategy::Greedy => "greedy",
            MoveStrategy::Avoidant => "avoidant",
            MoveStrategy::UserControlled => "user",
        }
    }

    /// Parses a strategy from its name.
    pub fn from_name(s: &str) -> Option<MoveStrategy> {
        match s {
            "greedy" => Some(MoveStrategy::Greedy),
            "avoidant" => Some(MoveStrategy::Avoidant),
            "user" => Some(MoveStrategy::UserControlled),
            _ => None,
        }
    }

    /// Proposes a path for `player` given this turn's dice roll.
    ///
    /// `roll` is the single roll drawn for this decision; the engine validates
    /// the returned path against the same value. Dispatches on whether the
    /// player currently controls the Boeg.
    pub fn make_move(
        self,
        state: &GameState,
        player: &Player,
        scratch: &mut PlayerScratch,
        roll: u32,
    ) -> Result<Vec<VertexId>, GameError> {
        if player.controls_boeg(state.boeg()) {
            self.move_boeg(state, player, scratch, roll)
        } else {
            self.move_player(state, player, scratch, roll)
        }
    }

    /// Moves the Boeg for its controller.
    pub fn move_boeg(
        self,
        state: &GameState,
        player: &Player,
        scratch: &mut PlayerScratch,
        roll: u32,
    ) -> Result<Vec<VertexId>, GameError> {
        match self {
            MoveStrategy::Greedy => greedy::move_boeg(state, player, scratch, roll),
            MoveStrategy::Avoidant | MoveStrategy::UserControlled => {
                Err(GameError::NotImplemented {
                    strategy: self.name(),
                })
            }
        }
    }

    /// Moves the player's own piece.
    pub fn move_player(
        self,
        state: &GameState,
        player: &Player,
        scratch: &mut PlayerScratch,
        roll: u32,
    ) -> Result<Vec<VertexId>, GameError> {
        match self {
            MoveStrategy::Greedy => greedy::move_player(state, player, scratch, roll),
            MoveStrategy::Avoidant | MoveStrategy::UserControlled => {
                Err(GameError::NotImplemented {
                    strategy: self.name(),
                })
            }
        }
    }
}
