//! Move validation.
//!
//! Every path a strategy proposes is checked here before it is applied. A
//! failed check is a `RuleViolation`: the strategy broke the rules, and the
//! engine never corrects or retries the move.
//!
//! Rules, for a dice roll `r` and a path of `n` edges:
//! - `n <= r`, and the path is a simple path from the mover's origin using
//!   only edges the mover may take (Boeg-only edges need Boeg control).
//! - Moving the Boeg with `n < r`:
//!   - `n == 0` is allowed if the Boeg already sits on one of the player's
//!     free targets, or if no move existed: no free target within `r` steps
//!     and no free vertex at the end of an `r`-step simple path.
//!   - otherwise the path must end on one of the player's free targets.
//! - Moving the Boeg with `n == r`: the path must not end on a target vertex
//!   an opponent occupies. Any board target counts, dealt or not; stations
//!   and other vertices stay open even when occupied.
//! - Moving a regular piece with `n < r`: the path must end on the Boeg, or
//!   be empty when no `r`-step simple path exists at all.
//!
//! "Free" means no unfinished opponent stands there.

use crate::board::{SearchScratch, VertexId};

use super::player::PlayerId;
use super::state::{GameError, GameState};

/// A proposed move that breaks the rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    #[error("player {player} proposed an empty path")]
    EmptyPath { player: PlayerId },

    #[error("player {player} moved {steps} steps on a roll of {roll}")]
    PathTooLong {
        player: PlayerId,
        steps: usize,
        roll: u32,
    },

    #[error("player {player} proposed {path:?}, which is not a usable simple path from {origin}")]
    InvalidPath {
        player: PlayerId,
        origin: VertexId,
        path: Vec<VertexId>,
    },

    #[error("player {player} kept the Boeg at {vertex} although a move was available")]
    IllegalStay { player: PlayerId, vertex: VertexId },

    #[error("player {player} stopped the Boeg short at {vertex}, which is not a free target of theirs")]
    ShortMoveOffTarget { player: PlayerId, vertex: VertexId },

    #[error("player {player} stopped short at {vertex} without capturing the Boeg")]
    ShortMoveWithoutCapture { player: PlayerId, vertex: VertexId },

    #[error("player {player} moved the Boeg onto target {vertex}, which an opponent occupies")]
    OccupiedEndpoint { player: PlayerId, vertex: VertexId },
}

/// Checks `path` as `player`'s move for a roll of `roll`.
///
/// `scratch` is working memory for the Boeg stay check.
pub fn validate_move(
    state: &GameState,
    player: PlayerId,
    roll: u32,
    path: &[VertexId],
    scratch: &mut SearchScratch,
) -> Result<(), GameError> {
    let (&first, &end) = match (path.first(), path.last()) {
        (Some(first), Some(end)) => (first, end),
        _ => return Err(RuleViolation::EmptyPath { player }.into()),
    };

    let steps = path.len() - 1;
    if steps > roll as usize {
        return Err(RuleViolation::PathTooLong {
            player,
            steps,
            roll,
        }
        .into());
    }

    let as_boeg = state.boeg().controller() == Some(player);
    let origin = state.move_origin(player);
    if first != origin || !state.board().is_valid_path(path, origin, end, steps as u32, as_boeg) {
        return Err(RuleViolation::InvalidPath {
            player,
            origin,
            path: path.to_vec(),
        }
        .into());
    }

    if as_boeg {
        check_boeg_move(state, player, roll, steps, end, scratch)
    } else {
        check_regular_move(state, player, roll, steps, end)
    }
}

fn check_boeg_move(
    state: &GameState,
    player: PlayerId,
    roll: u32,
    steps: usize,
    end: VertexId,
    scratch: &mut SearchScratch,
) -> Result<(), GameError> {
    if steps == roll as usize {
        if state.board().target_vertices().contains(&end) && state.is_opponent_at(player, end) {
            return Err(RuleViolation::OccupiedEndpoint {
                player,
                vertex: end,
            }
            .into());
        }
        return Ok(());
    }

    if is_free_target(state, player, end) {
        return Ok(());
    }
    if steps > 0 {
        return Err(RuleViolation::ShortMoveOffTarget {
            player,
            vertex: end,
        }
        .into());
    }
    if boeg_has_move(state, player, end, roll, scratch)? {
        return Err(RuleViolation::IllegalStay {
            player,
            vertex: end,
        }
        .into());
    }
    Ok(())
}

fn check_regular_move(
    state: &GameState,
    player: PlayerId,
    roll: u32,
    steps: usize,
    end: VertexId,
) -> Result<(), GameError> {
    if steps == roll as usize || end == state.boeg().position() {
        return Ok(());
    }
    if steps == 0 {
        let reachable = state
            .board()
            .find_all_reachable_vertices(end, roll, false)?;
        if reachable.is_empty() {
            return Ok(());
        }
    }
    Err(RuleViolation::ShortMoveWithoutCapture {
        player,
        vertex: end,
    }
    .into())
}

fn is_free_target(state: &GameState, player: PlayerId, vertex: VertexId) -> bool {
    state
        .player(player)
        .is_some_and(|p| p.has_target(vertex))
        && !state.is_opponent_at(player, vertex)
}

/// Whether the Boeg at `origin` had any legal move for `roll`.
fn boeg_has_move(
    state: &GameState,
    player: PlayerId,
    origin: VertexId,
    roll: u32,
    scratch: &mut SearchScratch,
) -> Result<bool, GameError> {
    let board = state.board();
    board.shortest_paths(origin, scratch, true)?;

    if let Some(p) = state.player(player) {
        let target_in_reach = p.targets().iter().any(|&t| {
            scratch.distance_to(t).is_some_and(|d| d <= roll) && !state.is_opponent_at(player, t)
        });
        if target_in_reach {
            return Ok(true);
        }
    }

    let reachable = board.find_all_reachable_vertices(origin, roll, true)?;
    Ok(reachable.iter().any(|&v| !state.is_opponent_at(player, v)))
}
