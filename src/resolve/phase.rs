//! Phase sequencing and turn management.
//!
//! Drives the match state machine: the coding phase grants mana from judge
//! results and hands over to the action phase, the action phase walks the
//! fixed actor queue (skipping dead slots), and every advance checks the win
//! condition.
//!
//! Phase flow:
//! - Coding -> Action (once both judge results are in)
//! - Action -> Action (next living queue slot)
//! - Action -> Coding (queue exhausted; next turn)
//! - any    -> Finished (a side has no living characters)

use crate::state::action::ActionKind;
use crate::state::constants::{EASY_MANA_REWARD, HARD_MANA_REWARD, MEDIUM_MANA_REWARD};
use crate::state::match_state::{CodingResult, Difficulty, LogEntry, MatchState, Phase};
use crate::state::status::tick_status_effects;

/// Mana granted for passing a problem of the given difficulty.
pub fn mana_reward(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Easy => EASY_MANA_REWARD,
        Difficulty::Medium => MEDIUM_MANA_REWARD,
        Difficulty::Hard => HARD_MANA_REWARD,
    }
}

/// Ends the coding phase and transitions to the action phase.
///
/// Each player with a passing judge result grants the difficulty's mana
/// reward to every one of their living characters, clamped to the mana cap.
/// The actor pointer is reset to the first living slot in the queue.
pub fn end_coding_phase(state: &MatchState, results: [Option<CodingResult>; 2]) -> MatchState {
    let mut next = state.clone();
    next.coding_results = results;

    for (player, result) in results.iter().enumerate() {
        if let Some(result) = result {
            if result.passed {
                let reward = mana_reward(result.difficulty);
                for idx in next.living_characters(player) {
                    next.characters[idx].gain_mana(reward);
                }
            }
        }
    }

    next.phase = Phase::Action;
    next.current_actor = 0;
    skip_dead(&mut next);
    next
}

/// Advances past the character who just acted.
///
/// Ticks the actor's periodic status effects (appending any damage-over-time
/// log lines), checks the win condition, then moves the pointer to the next
/// living queue slot. When the queue is exhausted the turn counter
/// increments and the match returns to the coding phase.
pub fn advance_turn(state: &MatchState) -> MatchState {
    let mut next = state.clone();

    if let Some(&char_idx) = next.action_queue.get(next.current_actor) {
        if next.characters[char_idx].is_alive {
            let outcome = tick_status_effects(&mut next.characters[char_idx]);
            for line in outcome.log {
                let entry = LogEntry::new(next.turn_number, char_idx, ActionKind::DoNothing, line);
                next.push_log(entry);
            }
        }
    }

    if let Some(winner) = check_win_condition(&next) {
        next.winner = Some(winner);
        next.phase = Phase::Finished;
        return next;
    }

    next.current_actor += 1;
    skip_dead(&mut next);

    if next.current_actor >= next.action_queue.len() {
        next.turn_number += 1;
        next.current_actor = 0;
        skip_dead(&mut next);
        next.phase = Phase::Coding;
        next.coding_results = [None, None];
    }

    next
}

/// Determines the winner, if any.
///
/// A side loses when none of its characters are alive. When both sides are
/// wiped out in the same resolution, player 1 wins; this asymmetric
/// tie-break is a deliberate rule of the game.
pub fn check_win_condition(state: &MatchState) -> Option<usize> {
    let team0_dead = state.is_team_defeated(0);
    let team1_dead = state.is_team_defeated(1);

    match (team0_dead, team1_dead) {
        (true, _) => Some(1),
        (false, true) => Some(0),
        (false, false) => None,
    }
}

/// Resolves the queue pointer to the character index whose action is
/// expected next. `None` only when the pointer is past the end of the queue.
pub fn current_actor_index(state: &MatchState) -> Option<usize> {
    state.action_queue.get(state.current_actor).copied()
}

fn skip_dead(state: &mut MatchState) {
    while let Some(&char_idx) = state.action_queue.get(state.current_actor) {
        if state.characters[char_idx].is_alive {
            break;
        }
        state.current_actor += 1;
    }
}
