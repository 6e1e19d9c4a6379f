//! Game setup options.

use crate::strategy::MoveStrategy;

/// Configuration for a single game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Number of players (at least 2).
    pub players: usize,
    /// Targets dealt to each player.
    pub targets_per_player: usize,
    /// Random seed. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Shuffle the move order; otherwise players move in id order.
    pub randomize_move_order: bool,
    /// Strategy per player, by id. Empty means every player is greedy.
    pub strategies: Vec<MoveStrategy>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            players: 2,
            targets_per_player: 3,
            seed: None,
            randomize_move_order: true,
            strategies: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Strategy assigned to player `id`.
    pub fn strategy_for(&self, id: usize) -> MoveStrategy {
        self.strategies.get(id).copied().unwrap_or_default()
    }
}
