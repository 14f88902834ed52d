//! The match-state aggregate and its factory.
//!
//! Holds the complete snapshot of a match at a point in time: phase, turn
//! counter, both players, all four combatants, the fixed action queue, the
//! coding-phase results, and the append-only action log. Every engine
//! operation takes a state by reference and returns a fresh snapshot; the
//! engine never retains or aliases caller-held state.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::action::ActionKind;
use super::character::CharacterState;
use crate::registry::Registry;

/// The stage the match is currently in.
///
/// Character selection happens before the engine is handed the match and is
/// not represented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Players are solving coding problems for mana.
    Coding,
    /// Characters act in queue order.
    Action,
    /// A winner has been declared; the state is final.
    Finished,
}

/// Declared difficulty of a coding problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Outcome of one player's coding submission, produced by the external judge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodingResult {
    pub difficulty: Difficulty,
    pub passed: bool,
    pub tests_total: u32,
    pub tests_passed: u32,
}

/// One line of the match log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub turn: u32,
    pub actor: usize,
    pub kind: ActionKind,
    pub detail: String,
    pub timestamp_ms: u64,
}

impl LogEntry {
    /// Creates a log entry stamped with the current wall-clock time.
    pub fn new(turn: u32, actor: usize, kind: ActionKind, detail: String) -> Self {
        LogEntry { turn, actor, kind, detail, timestamp_ms: now_ms() }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// One player's name and the indices of their two characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    pub character_indices: [usize; 2],
}

/// Errors raised when constructing a match.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("unknown character id '{0}'")]
    UnknownCharacter(String),
}

/// Complete match state at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub phase: Phase,
    /// Monotonically increasing turn counter, starting at 1.
    pub turn_number: u32,
    pub players: [PlayerState; 2],
    /// Exactly four combatants: indices 0-1 owned by player 0, 2-3 by player 1.
    pub characters: Vec<CharacterState>,
    /// Fixed turn order of character indices, interleaved by owner.
    pub action_queue: Vec<usize>,
    /// Pointer into `action_queue` (not a character index).
    pub current_actor: usize,
    /// Judge outcomes for the current coding phase, one slot per player.
    pub coding_results: [Option<CodingResult>; 2],
    /// Append-only ordered log of everything that happened.
    pub action_log: Vec<LogEntry>,
    /// Set exactly once, when `phase` becomes `Finished`.
    pub winner: Option<usize>,
}

impl MatchState {
    /// Creates the initial state for a new match.
    ///
    /// Both character id pairs are validated against the registry. The
    /// match starts in the coding phase on turn 1 with every character at
    /// full HP and starting mana.
    pub fn new(
        registry: &Registry,
        p1_name: &str,
        p2_name: &str,
        p1_ids: [&str; 2],
        p2_ids: [&str; 2],
    ) -> Result<MatchState, MatchError> {
        for id in p1_ids.iter().chain(p2_ids.iter()) {
            if registry.get(id).is_none() {
                return Err(MatchError::UnknownCharacter((*id).to_string()));
            }
        }

        let characters = vec![
            CharacterState::new(p1_ids[0], 0),
            CharacterState::new(p1_ids[1], 0),
            CharacterState::new(p2_ids[0], 1),
            CharacterState::new(p2_ids[1], 1),
        ];

        Ok(MatchState {
            phase: Phase::Coding,
            turn_number: 1,
            players: [
                PlayerState { name: p1_name.to_string(), character_indices: [0, 1] },
                PlayerState { name: p2_name.to_string(), character_indices: [2, 3] },
            ],
            characters,
            // Sides alternate: P1's first, P2's first, P1's second, P2's second.
            action_queue: vec![0, 2, 1, 3],
            current_actor: 0,
            coding_results: [None, None],
            action_log: Vec::new(),
            winner: None,
        })
    }

    /// Indices of the given player's living characters.
    pub fn living_characters(&self, owner: usize) -> Vec<usize> {
        self.characters
            .iter()
            .enumerate()
            .filter(|(_, c)| c.owner == owner && c.is_alive)
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of both characters on the same side as `char_index`,
    /// including `char_index` itself.
    pub fn allies(&self, char_index: usize) -> Vec<usize> {
        let owner = self.characters[char_index].owner;
        self.characters
            .iter()
            .enumerate()
            .filter(|(_, c)| c.owner == owner)
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of both characters on the opposing side of `char_index`.
    pub fn enemies(&self, char_index: usize) -> Vec<usize> {
        let owner = self.characters[char_index].owner;
        self.characters
            .iter()
            .enumerate()
            .filter(|(_, c)| c.owner != owner)
            .map(|(i, _)| i)
            .collect()
    }

    /// The player owning the character at `char_index`.
    pub fn owner_of(&self, char_index: usize) -> usize {
        self.characters[char_index].owner
    }

    /// True when all of the player's characters are down.
    pub fn is_team_defeated(&self, owner: usize) -> bool {
        self.living_characters(owner).is_empty()
    }

    /// Appends a line to the action log.
    pub fn push_log(&mut self, entry: LogEntry) {
        self.action_log.push(entry);
    }
}
