//! Session state management.
//!
//! Holds the injected character registry and the current match between
//! commands, and dispatches the driver loop's commands against the engine's
//! public operations. Every command writes its reply to an `impl Write` so
//! the driver and the tests share the same code path.

use std::io::Write;

use crate::movegen::legal_actions;
use crate::protocol::notation::{format_action, parse_action};
use crate::registry::Registry;
use crate::resolve::{advance_turn, current_actor_index, end_coding_phase, resolve_action};
use crate::selfplay::{run_self_play, SelfPlayConfig};
use crate::state::match_state::{CodingResult, MatchState, Phase};

/// Holds the mutable state of the driver between commands.
pub struct Session {
    registry: Registry,
    pub state: Option<MatchState>,
}

impl Session {
    /// Creates a session over the given registry with no match running.
    pub fn new(registry: Registry) -> Self {
        Session { registry, state: None }
    }

    /// The registry this session serves.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Starts a new match, replacing any match in progress.
    /// Returns an error message when a character id is unknown.
    pub fn start_match(
        &mut self,
        p1: &str,
        p2: &str,
        ids: [&str; 4],
    ) -> Result<(), String> {
        match MatchState::new(&self.registry, p1, p2, [ids[0], ids[1]], [ids[2], ids[3]]) {
            Ok(state) => {
                self.state = Some(state);
                Ok(())
            }
            Err(e) => Err(format!("failed to start match: {}", e)),
        }
    }

    /// Restores a match from its JSON snapshot.
    pub fn load_snapshot(&mut self, json: &str) -> Result<(), String> {
        match serde_json::from_str::<MatchState>(json) {
            Ok(state) => {
                self.state = Some(state);
                Ok(())
            }
            Err(e) => Err(format!("failed to load snapshot: {}", e)),
        }
    }

    /// Handles the `roster` command: one line per character definition.
    pub fn handle_roster<W: Write>(&self, out: &mut W) {
        for def in self.registry.defs() {
            writeln!(out, "{} {} ({})", def.id, def.name, def.role).unwrap();
        }
        out.flush().unwrap();
    }

    /// Handles the `state` command: phase header plus one line per character.
    pub fn handle_state<W: Write>(&self, out: &mut W) {
        let Some(state) = &self.state else {
            writeln!(out, "no match").unwrap();
            out.flush().unwrap();
            return;
        };

        let phase = match state.phase {
            Phase::Coding => "coding",
            Phase::Action => "action",
            Phase::Finished => "finished",
        };
        writeln!(out, "phase {} turn {}", phase, state.turn_number).unwrap();
        if state.phase == Phase::Action {
            if let Some(actor) = current_actor_index(state) {
                writeln!(out, "actor {}", actor).unwrap();
            }
        }
        if let Some(winner) = state.winner {
            writeln!(out, "winner {} {}", winner, state.players[winner].name).unwrap();
        }

        for (idx, ch) in state.characters.iter().enumerate() {
            let liveness = if ch.is_alive { "alive" } else { "down" };
            let mut line = format!(
                "{} {} hp {} mana {} {}",
                idx, ch.def_id, ch.hp, ch.mana, liveness
            );
            if !ch.effects.is_empty() {
                let labels: Vec<&str> = ch.effects.keys().map(|ty| ty.label()).collect();
                line.push_str(&format!(" [{}]", labels.join(",")));
            }
            writeln!(out, "{}", line).unwrap();
        }
        out.flush().unwrap();
    }

    /// Handles the `actions` command: legal actions in compact notation,
    /// one per line.
    pub fn handle_actions<W: Write>(&self, out: &mut W) {
        let Some(state) = &self.state else {
            writeln!(out, "no match").unwrap();
            out.flush().unwrap();
            return;
        };
        for action in legal_actions(&self.registry, state) {
            writeln!(out, "{}", format_action(&action)).unwrap();
        }
        out.flush().unwrap();
    }

    /// Handles the `act` command: resolves one action and prints its log
    /// line. Returns an error message for bad notation or a missing match.
    pub fn handle_act<W: Write>(&mut self, notation: &str, out: &mut W) -> Result<(), String> {
        let Some(state) = &self.state else {
            return Err("no match".to_string());
        };
        let action = parse_action(notation).map_err(|e| format!("bad notation: {}", e))?;

        let (mut next, entry) = resolve_action(&self.registry, state, &action);
        writeln!(out, "{}", entry.detail).unwrap();
        next.push_log(entry);
        self.state = Some(next);
        out.flush().unwrap();
        Ok(())
    }

    /// Handles the `endcoding` command: grants mana rewards and moves the
    /// match into the action phase.
    pub fn handle_endcoding<W: Write>(
        &mut self,
        results: [Option<CodingResult>; 2],
        out: &mut W,
    ) -> Result<(), String> {
        let Some(state) = &self.state else {
            return Err("no match".to_string());
        };
        let next = end_coding_phase(state, results);
        if let Some(actor) = current_actor_index(&next) {
            writeln!(out, "phase action actor {}", actor).unwrap();
        }
        self.state = Some(next);
        out.flush().unwrap();
        Ok(())
    }

    /// Handles the `advance` command: moves past the current actor and
    /// prints where the match stands.
    pub fn handle_advance<W: Write>(&mut self, out: &mut W) -> Result<(), String> {
        let Some(state) = &self.state else {
            return Err("no match".to_string());
        };
        let next = advance_turn(state);
        match next.phase {
            Phase::Finished => {
                let winner = next.winner.expect("finished match always has a winner");
                writeln!(out, "winner {} {}", winner, next.players[winner].name).unwrap();
            }
            Phase::Action => {
                let actor = current_actor_index(&next)
                    .expect("action phase always has a current actor");
                writeln!(out, "phase action actor {}", actor).unwrap();
            }
            Phase::Coding => {
                writeln!(out, "phase coding turn {}", next.turn_number).unwrap();
            }
        }
        self.state = Some(next);
        out.flush().unwrap();
        Ok(())
    }

    /// Handles the `save` command: the match as one-line JSON.
    pub fn handle_save<W: Write>(&self, out: &mut W) -> Result<(), String> {
        let Some(state) = &self.state else {
            return Err("no match".to_string());
        };
        let json = serde_json::to_string(state).map_err(|e| e.to_string())?;
        writeln!(out, "{}", json).unwrap();
        out.flush().unwrap();
        Ok(())
    }

    /// Handles the `selfplay` command: plays random matches and prints one
    /// summary line per match.
    pub fn handle_selfplay<W: Write>(&self, games: usize, seed: u64, out: &mut W) {
        let config = SelfPlayConfig { num_games: games, seed, ..SelfPlayConfig::default() };
        let outcomes = run_self_play(&self.registry, &config);
        for outcome in &outcomes {
            let winner = match outcome.winner {
                Some(w) => w.to_string(),
                None => "-".to_string(),
            };
            writeln!(
                out,
                "game {} winner {} turns {} actions {}",
                outcome.game_id, winner, outcome.turns, outcome.actions
            )
            .unwrap();
        }
        writeln!(out, "selfplay done: {} games", outcomes.len()).unwrap();
        out.flush().unwrap();
    }
}
