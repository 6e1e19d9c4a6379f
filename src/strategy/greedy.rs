//! Greedy strategy.
//!
//! As a regular piece, run straight at the Boeg. As the Boeg, prefer a free
//! target within reach, choosing the one that leaves the remaining targets
//! closest together; otherwise close in on the nearest target, or fall back to
//! the free position at exactly the roll's distance that best serves the
//! remaining targets.

use crate::board::{BoardGraph, GraphError, SearchScratch, VertexId};
use crate::game::{GameError, GameState, Player, PlayerScratch, TargetSet};

/// Proposes a Boeg move for `player`, who controls it.
pub fn move_boeg(
    state: &GameState,
    player: &Player,
    scratch: &mut PlayerScratch,
    roll: u32,
) -> Result<Vec<VertexId>, GameError> {
    let board = state.board();
    let start = state.boeg().position();
    let targets = player.targets();
    let id = player.id();
    let PlayerScratch { origin, lookahead } = scratch;

    board.shortest_paths(start, origin, true)?;

    // Closest reachable target regardless of occupancy, and the best free
    // target within reach.
    let mut closest: Option<(u32, VertexId)> = None;
    let mut best: Option<(u64, VertexId)> = None;
    for &target in targets {
        let Some(distance) = origin.distance_to(target) else {
            continue;
        };
        if closest.map_or(true, |(d, _)| distance < d) {
            closest = Some((distance, target));
        }
        if distance <= roll && !state.is_opponent_at(id, target) {
            let cost = lookahead_cost(board, target, targets, lookahead)?;
            if best.map_or(true, |(c, _)| cost < c) {
                best = Some((cost, target));
            }
        }
    }

    if let Some((_, target)) = best {
        if let Some(path) = origin.follow_min_path(target, roll) {
            return Ok(path);
        }
    }

    if let Some((_, target)) = closest {
        if let Some(path) = origin.follow_min_path(target, roll) {
            let stop = path.last().copied().unwrap_or(start);
            if !state.is_opponent_at(id, stop) {
                return Ok(path);
            }
        }
    }

    // Nothing to aim at directly: pick the free end of an exact-roll path
    // that is closest to all remaining targets.
    let mut best: Option<(u64, VertexId)> = None;
    for &v in &board.find_all_reachable_vertices(start, roll, true)? {
        if state.is_opponent_at(id, v) {
            continue;
        }
        let cost = lookahead_cost(board, v, targets, lookahead)?;
        if best.map_or(true, |(c, _)| cost < c) {
            best = Some((cost, v));
        }
    }
    if let Some((_, v)) = best {
        return Ok(board.find_path_of_length(start, v, roll, true)?);
    }

    Ok(vec![start])
}

/// Proposes a move for `player`'s own piece: up to `roll` steps along the
/// shortest normal-edge path toward the Boeg.
pub fn move_player(
    state: &GameState,
    player: &Player,
    scratch: &mut PlayerScratch,
    roll: u32,
) -> Result<Vec<VertexId>, GameError> {
    let board = state.board();
    let start = player.position();
    board.shortest_paths(start, &mut scratch.origin, false)?;

    if let Some(path) = scratch.origin.follow_min_path(state.boeg().position(), roll) {
        return Ok(path);
    }

    // The Boeg is out of reach over normal edges; wander a full roll if possible.
    let reachable = board.find_all_reachable_vertices(start, roll, false)?;
    match reachable.first() {
        Some(&v) => Ok(board.find_path_of_length(start, v, roll, false)?),
        None => Ok(vec![start]),
    }
}

/// Sum of Boeg distances from `candidate` to every remaining target.
///
/// Targets the Boeg cannot reach from `candidate` count as the vertex count,
/// which exceeds any real distance.
fn lookahead_cost(
    board: &BoardGraph,
    candidate: VertexId,
    targets: &TargetSet,
    scratch: &mut SearchScratch,
) -> Result<u64, GraphError> {
    board.shortest_paths(candidate, scratch, true)?;
    let unreachable = board.vertex_count() as u64;
    Ok(targets
        .iter()
        .map(|&t| scratch.distance_to(t).map_or(unreachable, u64::from))
        .sum())
}
