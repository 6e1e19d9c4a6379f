//! Per-player state.

use std::collections::BTreeSet;

use crate::board::{SearchScratch, VertexId};
use crate::strategy::MoveStrategy;

use super::state::Boeg;

/// Index of a player in the game's player list.
pub type PlayerId = usize;

/// Targets a player still has to visit. Only ever shrinks.
pub type TargetSet = BTreeSet<VertexId>;

/// Private traversal buffers a player's strategy reuses every turn.
#[derive(Debug, Clone, Default)]
pub struct PlayerScratch {
    /// Traversal from the mover's current position.
    pub origin: SearchScratch,
    /// Traversal from a candidate position during look-ahead.
    pub lookahead: SearchScratch,
}

impl PlayerScratch {
    pub fn new(vertex_count: usize) -> Self {
        PlayerScratch {
            origin: SearchScratch::new(vertex_count),
            lookahead: SearchScratch::new(vertex_count),
        }
    }
}

/// A player: position, remaining targets, and strategy.
///
/// Whether the player controls the Boeg is not stored here; it is read off
/// the Boeg's controller so the two can never disagree.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    position: VertexId,
    targets: TargetSet,
    strategy: MoveStrategy,
    scratch: PlayerScratch,
}

impl Player {
    pub fn new<I>(
        id: PlayerId,
        position: VertexId,
        targets: I,
        strategy: MoveStrategy,
        vertex_count: usize,
    ) -> Self
    where
        I: IntoIterator<Item = VertexId>,
    {
        Player {
            id,
            position,
            targets: targets.into_iter().collect(),
            strategy,
            scratch: PlayerScratch::new(vertex_count),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn position(&self) -> VertexId {
        self.position
    }

    /// Targets not yet visited.
    pub fn targets(&self) -> &TargetSet {
        &self.targets
    }

    pub fn strategy(&self) -> MoveStrategy {
        self.strategy
    }

    pub fn has_target(&self, vertex: VertexId) -> bool {
        self.targets.contains(&vertex)
    }

    /// A finished player has no targets left and never moves again.
    pub fn is_finished(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn controls_boeg(&self, boeg: &Boeg) -> bool {
        boeg.controller() == Some(self.id)
    }

    pub(crate) fn set_position(&mut self, position: VertexId) {
        self.position = position;
    }

    /// Removes `vertex` from the target set. Returns true if it was a target.
    pub(crate) fn claim_target(&mut self, vertex: VertexId) -> bool {
        self.targets.remove(&vertex)
    }

    /// Moves the scratch buffers out so a strategy can use them while the
    /// player itself is borrowed immutably.
    pub(crate) fn take_scratch(&mut self) -> PlayerScratch {
        std::mem::take(&mut self.scratch)
    }

    pub(crate) fn restore_scratch(&mut self, scratch: PlayerScratch) {
        self.scratch = scratch;
    }

    #[cfg(test)]
    pub(crate) fn set_targets<I: IntoIterator<Item = VertexId>>(&mut self, targets: I) {
        self.targets = targets.into_iter().collect();
    }
}
