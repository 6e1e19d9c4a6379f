//! fang -- plays one game of Boeg on a board file.
//!
//! Every decision is printed to stdout; diagnostics go to stderr through
//! `tracing` (set `RUST_LOG` or pass `--verbose`).
//!
//! Usage:
//!   fang BOARD.json [OPTIONS]
//!
//! Options:
//!   --players N      Number of players (default: 2)
//!   --targets N      Targets per player (default: 3)
//!   --seed N         Random seed (default: entropy)
//!   --strategy NAME  Strategy for every player: greedy, avoidant, user
//!   --max-turns N    Stop after N decisions (default: 10000)
//!   --verbose        Log captures and claimed targets

use std::env;
use std::process;

use tracing_subscriber::EnvFilter;

use fang::board::{BoardGraph, VertexId};
use fang::game::{GameConfig, GameState, TurnRecord, TurnStatus};
use fang::protocol::load_board;
use fang::strategy::MoveStrategy;

struct Options {
    board_path: String,
    config: GameConfig,
    max_turns: u64,
    verbose: bool,
}

fn main() {
    let options = parse_args(env::args().skip(1).collect());

    let default_level = if options.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let board = match load_board(&options.board_path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("{}: {}", options.board_path, e);
            process::exit(1);
        }
    };
    let mut state = match GameState::new(board, &options.config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("cannot start game: {}", e);
            process::exit(1);
        }
    };

    print_setup(&state);
    loop {
        if state.decisions() >= options.max_turns {
            println!("stopped after {} turns", state.decisions());
            process::exit(2);
        }
        let before = state.decisions();
        let status = match state.next_move() {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        };
        // Finished players are skipped without a decision.
        if state.decisions() > before {
            if let Some(record) = state.last_turn() {
                print_turn(state.board(), record);
            }
        }
        if status == TurnStatus::GameOver {
            break;
        }
    }

    let order: Vec<String> = state
        .finish_order()
        .iter()
        .map(|p| format!("player {}", p))
        .collect();
    println!(
        "game over after {} turns: {}",
        state.decisions(),
        order.join(", ")
    );
}

fn print_setup(state: &GameState) {
    let board = state.board();
    println!(
        "board: {} vertices, {} edges",
        board.vertex_count(),
        board.edge_count()
    );
    for player in state.players() {
        let targets: Vec<String> = player.targets().iter().map(|&t| label(board, t)).collect();
        println!(
            "player {} ({}) starts at {}, targets: {}",
            player.id(),
            player.strategy().name(),
            label(board, player.position()),
            targets.join(", ")
        );
    }
    println!("boeg starts at {}", label(board, state.boeg().position()));
}

fn print_turn(board: &BoardGraph, record: &TurnRecord) {
    let path: Vec<String> = record.path.iter().map(|&v| label(board, v)).collect();
    let piece = if record.as_boeg { "boeg" } else { "piece" };
    let mut line = format!(
        "player {} rolls {}, moves {}: {}",
        record.player,
        record.roll,
        piece,
        path.join(" -> ")
    );
    if record.captured {
        line.push_str(" [captures the boeg]");
    }
    if let Some(t) = record.claimed_target {
        line.push_str(&format!(" [claims {}]", label(board, t)));
    }
    if record.finished {
        line.push_str(" [finished]");
    }
    println!("{}", line);
}

fn label(board: &BoardGraph, v: VertexId) -> String {
    match board.vertex_name(v) {
        Some(name) => name.to_string(),
        None => v.to_string(),
    }
}

fn parse_args(args: Vec<String>) -> Options {
    let mut options = Options {
        board_path: String::new(),
        config: GameConfig::default(),
        max_turns: 10_000,
        verbose: false,
    };
    let mut strategy = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--players" => {
                options.config.players = parse_value(&args, &mut i, "--players");
            }
            "--targets" => {
                options.config.targets_per_player = parse_value(&args, &mut i, "--targets");
            }
            "--seed" => {
                options.config.seed = Some(parse_value(&args, &mut i, "--seed"));
            }
            "--max-turns" => {
                options.max_turns = parse_value(&args, &mut i, "--max-turns");
            }
            "--strategy" => {
                let name: String = parse_value(&args, &mut i, "--strategy");
                match MoveStrategy::from_name(&name) {
                    Some(s) => strategy = Some(s),
                    None => usage_error(&format!("unknown strategy: {}", name)),
                }
            }
            "--verbose" | "-v" => {
                options.verbose = true;
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other if other.starts_with('-') => {
                usage_error(&format!("unknown argument: {}", other));
            }
            path => {
                if !options.board_path.is_empty() {
                    usage_error("only one board file may be given");
                }
                options.board_path = path.to_string();
            }
        }
        i += 1;
    }

    if options.board_path.is_empty() {
        usage_error("missing board file");
    }
    if let Some(s) = strategy {
        options.config.strategies = vec![s; options.config.players];
    }
    options
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> T {
    *i += 1;
    match args.get(*i).map(|s| s.parse()) {
        Some(Ok(v)) => v,
        _ => usage_error(&format!("invalid {} value", flag)),
    }
}

fn usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    print_usage();
    process::exit(1);
}

fn print_usage() {
    eprintln!("Usage: fang BOARD.json [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --players N      Number of players (default: 2)");
    eprintln!("  --targets N      Targets per player (default: 3)");
    eprintln!("  --seed N         Random seed (default: entropy)");
    eprintln!("  --strategy NAME  Strategy for every player: greedy, avoidant, user");
    eprintln!("  --max-turns N    Stop after N decisions (default: 10000)");
    eprintln!("  --verbose        Log captures and claimed targets");
    eprintln!("  --help           Show this help");
}
