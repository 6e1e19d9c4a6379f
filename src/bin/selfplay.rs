//! Self-play batch CLI.
//!
//! Plays many Greedy games on one board and writes one JSON record per game.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- --board FILE [OPTIONS]
//!
//! Options:
//!   --board FILE     Board file (required)
//!   --games N        Number of games to play (default: 10)
//!   --players N      Players per game (default: 2)
//!   --targets N      Targets per player (default: 3)
//!   --max-turns N    Decisions before a game counts as stalled (default: 10000)
//!   --threads N      Number of parallel threads (default: 4)
//!   --seed N         Random seed, 0 for entropy (default: 0)
//!   --output FILE    Output file path (default: stdout)
//!   --quiet          Suppress progress and summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::process;
use std::time::Instant;

use tracing_subscriber::EnvFilter;

use fang::protocol::load_board;
use fang::selfplay::{self, SelfPlayConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let mut config = SelfPlayConfig::default();
    let mut board_path: Option<String> = None;
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--board" => {
                i += 1;
                board_path = Some(value(&args, i, "--board").to_string());
            }
            "--games" => {
                i += 1;
                config.num_games = parse(&args, i, "--games");
            }
            "--players" => {
                i += 1;
                config.players = parse(&args, i, "--players");
            }
            "--targets" => {
                i += 1;
                config.targets_per_player = parse(&args, i, "--targets");
            }
            "--max-turns" => {
                i += 1;
                config.max_turns = parse(&args, i, "--max-turns");
            }
            "--threads" => {
                i += 1;
                config.threads = parse(&args, i, "--threads");
            }
            "--seed" => {
                i += 1;
                config.seed = parse(&args, i, "--seed");
            }
            "--output" => {
                i += 1;
                output_path = Some(value(&args, i, "--output").to_string());
            }
            "--quiet" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let Some(board_path) = board_path else {
        eprintln!("Missing --board");
        print_usage();
        process::exit(1);
    };
    let board = match load_board(&board_path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("{}: {}", board_path, e);
            process::exit(1);
        }
    };

    if !config.quiet {
        eprintln!(
            "Self-play: {} games on {} ({} vertices), {} players x {} targets, {} threads",
            config.num_games,
            board_path,
            board.vertex_count(),
            config.players,
            config.targets_per_player,
            config.threads
        );
    }

    let start = Instant::now();
    let games = match selfplay::run_self_play(&board, &config) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("self-play failed: {}", e);
            process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    if !config.quiet {
        eprintln!(
            "Completed {} games in {:.2}s",
            games.len(),
            elapsed.as_secs_f64()
        );
        selfplay::print_summary(&games, config.players);
    }

    let written = match output_path {
        Some(path) => File::create(&path).and_then(|file| {
            selfplay::write_jsonl(&games, &mut BufWriter::new(file))?;
            if !config.quiet {
                eprintln!("Wrote {} games to {}", games.len(), path);
            }
            Ok(())
        }),
        None => {
            let stdout = io::stdout();
            selfplay::write_jsonl(&games, &mut BufWriter::new(stdout.lock()))
        }
    };
    if let Err(e) = written {
        eprintln!("failed to write output: {}", e);
        process::exit(1);
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i) {
        Some(v) => v,
        None => {
            eprintln!("Missing value for {}", flag);
            process::exit(1);
        }
    }
}

fn parse<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match value(args, i, flag).parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Invalid {} value", flag);
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: selfplay --board FILE [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --board FILE     Board file (required)");
    eprintln!("  --games N        Number of games to play (default: 10)");
    eprintln!("  --players N      Players per game (default: 2)");
    eprintln!("  --targets N      Targets per player (default: 3)");
    eprintln!("  --max-turns N    Decisions before a game counts as stalled (default: 10000)");
    eprintln!("  --threads N      Number of parallel threads (default: 4)");
    eprintln!("  --seed N         Random seed, 0 for entropy (default: 0)");
    eprintln!("  --output FILE    Output file path (default: stdout)");
    eprintln!("  --quiet          Suppress progress and summary output");
    eprintln!("  --help           Show this help");
}
