//! Hexduel -- a deterministic turn-resolution engine for a two-player
//! coding-battle game.
//!
//! This binary reads line commands from stdin and writes responses to
//! stdout. The engine itself is a pure library; this loop only wires the
//! text protocol to the session.

use std::io::{self, BufRead};

use hexduel::protocol::parser::{parse_command, Command};
use hexduel::registry::Registry;
use hexduel::session::Session;

/// Runs the main command loop, reading commands from stdin and writing
/// responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = Session::new(Registry::standard());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::New { p1, p2, ids } => {
                let ids = [ids[0].as_str(), ids[1].as_str(), ids[2].as_str(), ids[3].as_str()];
                if let Err(e) = session.start_match(&p1, &p2, ids) {
                    eprintln!("{}", e);
                }
            }
            Command::Roster => {
                session.handle_roster(&mut out);
            }
            Command::State => {
                session.handle_state(&mut out);
            }
            Command::Actions => {
                session.handle_actions(&mut out);
            }
            Command::Act { notation } => {
                if let Err(e) = session.handle_act(&notation, &mut out) {
                    eprintln!("{}", e);
                }
            }
            Command::EndCoding { results } => {
                if let Err(e) = session.handle_endcoding(results, &mut out) {
                    eprintln!("{}", e);
                }
            }
            Command::Advance => {
                if let Err(e) = session.handle_advance(&mut out) {
                    eprintln!("{}", e);
                }
            }
            Command::Save => {
                if let Err(e) = session.handle_save(&mut out) {
                    eprintln!("{}", e);
                }
            }
            Command::Load { json } => {
                if let Err(e) = session.load_snapshot(&json) {
                    eprintln!("{}", e);
                }
            }
            Command::SelfPlay { games, seed } => {
                session.handle_selfplay(games, seed, &mut out);
            }
            Command::Quit => {
                break;
            }
        }
    }
}
