//! Self-play match generation CLI.
//!
//! Plays hexduel matches with random legal actions and random judge
//! results, and optionally writes the outcomes as JSONL.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N       Number of matches to play (default: 10)
//!   --max-turns N   Turn cap per match (default: 200)
//!   --threads N     Number of parallel threads (default: 1)
//!   --seed N        Random seed, 0 for entropy (default: 0)
//!   --output FILE   JSONL output file path (default: none)
//!   --quiet         Suppress summary output

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

use hexduel::registry::Registry;
use hexduel::selfplay::{run_self_play, SelfPlayConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = SelfPlayConfig::default();
    let mut output_path: Option<String> = None;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.num_games = args[i].parse().expect("invalid --games value");
            }
            "--max-turns" => {
                i += 1;
                config.max_turns = args[i].parse().expect("invalid --max-turns value");
            }
            "--threads" => {
                i += 1;
                config.threads = args[i].parse().expect("invalid --threads value");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("invalid --seed value");
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--quiet" => {
                quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if !quiet {
        eprintln!(
            "Self-play: {} games, max {} turns, {} threads, seed {}",
            config.num_games, config.max_turns, config.threads, config.seed
        );
    }

    let registry = Registry::standard();
    let start = Instant::now();
    let outcomes = run_self_play(&registry, &config);
    let elapsed = start.elapsed();

    if let Some(path) = output_path {
        let file = File::create(&path).expect("failed to create output file");
        let mut out = BufWriter::new(file);
        for outcome in &outcomes {
            let json = serde_json::to_string(outcome).expect("failed to serialize outcome");
            writeln!(out, "{}", json).expect("failed to write outcome");
        }
        out.flush().expect("failed to flush output file");
    }

    if !quiet {
        let mut wins = [0usize; 2];
        let mut capped = 0usize;
        let mut total_turns = 0u64;
        for outcome in &outcomes {
            match outcome.winner {
                Some(w) => wins[w] += 1,
                None => capped += 1,
            }
            total_turns += u64::from(outcome.turns);
        }

        eprintln!(
            "Completed {} games in {:.1}s",
            outcomes.len(),
            elapsed.as_secs_f64()
        );
        eprintln!(
            "Avg turns/game: {:.1}",
            total_turns as f64 / outcomes.len().max(1) as f64
        );
        eprintln!("Player 0 wins: {}", wins[0]);
        eprintln!("Player 1 wins: {}", wins[1]);
        eprintln!("Hit turn cap: {}", capped);
    }
}

fn print_usage() {
    eprintln!("Usage: selfplay [--games N] [--max-turns N] [--threads N] [--seed N] [--output FILE] [--quiet]");
}
