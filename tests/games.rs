//! Full games through the public engine API.
//!
//! Games are played on the bundled boards and on generated ones, checking the
//! turn-engine invariants after every step.

use fang::board::{BoardDescription, BoardGraph, Directedness, EdgeRecord};
use fang::game::{GameConfig, GameError, GameState, TurnPhase, TurnRecord, TurnStatus};
use fang::protocol::load_board;
use fang::strategy::MoveStrategy;

const MAX_DECISIONS: u64 = 10_000;

fn bundled(name: &str) -> BoardGraph {
    let path = format!("{}/boards/{}.json", env!("CARGO_MANIFEST_DIR"), name);
    load_board(&path).unwrap_or_else(|e| panic!("{}: {}", path, e))
}

/// Undirected wheel: hub 0 joined to a rim of `rim` vertices. Rim vertices
/// are targets except the first two, which are stations together with the
/// hub. Every third spoke is Boeg-only.
fn wheel(rim: u32) -> BoardGraph {
    let mut edges = Vec::new();
    for i in 1..=rim {
        let next = if i == rim { 1 } else { i + 1 };
        edges.push(EdgeRecord::normal(i, next));
        edges.push(EdgeRecord {
            source: 0,
            target: i,
            restricted: i % 3 == 0,
        });
    }
    BoardGraph::new(BoardDescription {
        vertex_count: rim + 1,
        directedness: Directedness::Undirected,
        edges,
        target_vertices: (3..=rim).collect(),
        station_vertices: vec![0, 1, 2],
        names: Vec::new(),
    })
    .unwrap()
}

fn config(players: usize, targets: usize, seed: u64) -> GameConfig {
    GameConfig {
        players,
        targets_per_player: targets,
        seed: Some(seed),
        ..Default::default()
    }
}

/// Plays a game to the end, checking invariants after every step, and
/// returns the recorded decisions.
fn play_checked(board: BoardGraph, config: &GameConfig) -> (GameState, Vec<TurnRecord>) {
    let mut state = GameState::new(board, config).unwrap();
    let mut records = Vec::new();

    while !state.is_over() {
        assert!(state.decisions() < MAX_DECISIONS, "game did not finish");
        let id = state.current_player();
        let active = state.active_players();
        let decisions = state.decisions();
        let status = state.next_move().unwrap();

        assert!(state.active_players() <= active);
        if state.decisions() == decisions {
            // Finished players are skipped without a decision.
            assert!(state.player(id).unwrap().is_finished());
            assert_eq!(status, TurnStatus::Continue);
            continue;
        }
        let record = state.last_turn().unwrap().clone();
        assert_eq!(record.player, id);
        assert!((1..=6).contains(&record.roll));
        assert!(record.path.len() <= record.roll as usize + 1);

        match status {
            TurnStatus::Capture => {
                assert!(record.captured);
                assert!(!record.as_boeg);
                assert_eq!(state.current_player(), id);
                assert_eq!(state.phase(), TurnPhase::Captured);
                assert_eq!(state.boeg().controller(), Some(id));
                assert_eq!(
                    state.boeg().position(),
                    state.player(id).unwrap().position()
                );
            }
            TurnStatus::Continue => {
                assert!(!record.captured);
                assert_eq!(state.phase(), TurnPhase::Playing);
                assert!(state.active_players() >= 2);
            }
            TurnStatus::GameOver => {
                assert!(record.as_boeg);
                assert!(record.finished);
                assert_eq!(state.active_players(), 1);
            }
        }
        if record.finished {
            assert_eq!(state.boeg().controller(), None);
            assert_eq!(state.finish_order().last(), Some(&id));
            assert!(state.player(id).unwrap().targets().is_empty());
        }
        if record.as_boeg {
            assert_eq!(record.path.last(), Some(&state.boeg().position()));
        }
        records.push(record);
    }

    (state, records)
}

fn assert_finished(state: &GameState, players: usize) {
    assert_eq!(state.phase(), TurnPhase::GameOver);
    assert_eq!(state.finish_order().len(), players - 1);
    let unfinished: Vec<_> = state
        .players()
        .iter()
        .filter(|p| !p.is_finished())
        .collect();
    assert_eq!(unfinished.len(), 1);
}

#[test]
fn ring_games_finish() {
    for seed in 1..=20 {
        let (state, _) = play_checked(bundled("ring"), &config(2, 3, seed));
        assert_finished(&state, 2);
    }
}

#[test]
fn village_games_finish() {
    for (players, targets) in [(2, 3), (3, 3), (4, 2)] {
        for seed in 1..=8 {
            let (state, _) = play_checked(bundled("village"), &config(players, targets, seed));
            assert_finished(&state, players);
        }
    }
}

#[test]
fn wheel_games_finish() {
    for seed in 1..=10 {
        let (state, records) = play_checked(wheel(12), &config(3, 2, seed));
        assert_finished(&state, 3);
        let claimed = records
            .iter()
            .filter(|r| r.claimed_target.is_some())
            .count();
        assert!(claimed >= 4);
    }
}

#[test]
fn same_seed_same_game() {
    let (_, a) = play_checked(bundled("village"), &config(3, 2, 1234));
    let (_, b) = play_checked(bundled("village"), &config(3, 2, 1234));
    assert_eq!(a, b);
}

#[test]
fn game_over_is_terminal() {
    let (mut state, _) = play_checked(bundled("ring"), &config(2, 1, 9));
    let decisions = state.decisions();
    let boeg = *state.boeg();
    for _ in 0..3 {
        assert_eq!(state.next_move().unwrap(), TurnStatus::GameOver);
    }
    assert_eq!(state.decisions(), decisions);
    assert_eq!(*state.boeg(), boeg);
}

#[test]
fn capture_is_followed_by_boeg_move() {
    let (_, records) = play_checked(bundled("village"), &config(2, 3, 77));
    let mut captures = 0;
    for pair in records.windows(2) {
        if pair[0].captured {
            captures += 1;
            assert_eq!(pair[1].player, pair[0].player);
            assert!(pair[1].as_boeg);
        }
    }
    assert!(captures > 0);
}

#[test]
fn undealt_targets_are_never_claimed() {
    let (state, records) = play_checked(bundled("ring"), &config(2, 2, 31));
    let targets = state.board().target_vertices();
    for r in &records {
        if let Some(t) = r.claimed_target {
            assert!(targets.contains(&t));
            assert!(r.as_boeg);
        }
    }
}

#[test]
fn unimplemented_strategies_fail() {
    for strategy in [MoveStrategy::Avoidant, MoveStrategy::UserControlled] {
        let config = GameConfig {
            randomize_move_order: false,
            strategies: vec![strategy, MoveStrategy::Greedy],
            ..config(2, 2, 3)
        };
        let mut state = GameState::new(bundled("ring"), &config).unwrap();
        assert_eq!(state.current_player(), 0);
        assert_eq!(
            state.next_move(),
            Err(GameError::NotImplemented {
                strategy: strategy.name()
            })
        );
    }
}

#[test]
fn board_too_small_for_players() {
    match GameState::new(bundled("ring"), &config(4, 2, 1)) {
        Err(GameError::Board(_)) => {}
        other => panic!("expected board error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn square_cycle_searches() {
    let board = BoardGraph::new(BoardDescription {
        vertex_count: 4,
        edges: vec![
            EdgeRecord::normal(0, 1),
            EdgeRecord::normal(1, 2),
            EdgeRecord::normal(2, 3),
            EdgeRecord::normal(3, 0),
        ],
        target_vertices: vec![2],
        station_vertices: vec![0],
        ..Default::default()
    })
    .unwrap();

    let mut scratch = board.new_scratch();
    board.shortest_paths(0, &mut scratch, false).unwrap();
    let distances: Vec<u32> = (0..4).map(|v| scratch.min_distance(v)).collect();
    assert_eq!(distances, vec![0, 1, 2, 1]);

    let path = board.find_path_of_length(0, 2, 2, false).unwrap();
    assert!(path == vec![0, 1, 2] || path == vec![0, 3, 2]);
    let reachable: Vec<_> = board
        .find_all_reachable_vertices(0, 2, false)
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(reachable, vec![2]);
    assert_eq!(board.edge_count() * 2, board.raw_edge_count());
}
