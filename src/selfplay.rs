//! Self-play match generation.
//!
//! Plays full matches with random legal actions and random judge results,
//! mainly to soak-test the engine's invariants and to drive benchmarks.
//! Randomness stays entirely in action/result selection; the resolution
//! math itself is deterministic.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::movegen::random_action;
use crate::registry::Registry;
use crate::resolve::{advance_turn, end_coding_phase, resolve_action};
use crate::state::action::Action;
use crate::state::match_state::{CodingResult, Difficulty, MatchState, Phase};

/// Configuration for self-play generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of matches to play.
    pub num_games: usize,
    /// Turn cap per match; matches still open at the cap are abandoned.
    pub max_turns: u32,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Number of parallel threads for concurrent matches.
    pub threads: usize,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig { num_games: 10, max_turns: 200, seed: 0, threads: 1 }
    }
}

/// Summary of one completed self-play match.
#[derive(Debug, Clone, Serialize)]
pub struct GameOutcome {
    /// Sequential match id.
    pub game_id: usize,
    /// Winning player, or `None` if the turn cap was hit.
    pub winner: Option<usize>,
    /// Turn counter when the match ended.
    pub turns: u32,
    /// Number of actions resolved.
    pub actions: usize,
    /// Final state, for callers that want to inspect or assert on it.
    pub final_state: MatchState,
}

fn random_difficulty(rng: &mut SmallRng) -> Difficulty {
    match rng.gen_range(0..3) {
        0 => Difficulty::Easy,
        1 => Difficulty::Medium,
        _ => Difficulty::Hard,
    }
}

fn random_coding_result(rng: &mut SmallRng) -> Option<CodingResult> {
    if rng.gen_bool(0.2) {
        // Timed out; no submission from this player.
        return None;
    }
    let difficulty = random_difficulty(rng);
    let passed = rng.gen_bool(0.6);
    Some(CodingResult {
        difficulty,
        passed,
        tests_total: 5,
        tests_passed: if passed { 5 } else { rng.gen_range(0..5) },
    })
}

fn random_pair<'a>(registry: &'a Registry, rng: &mut SmallRng) -> [&'a str; 2] {
    let ids: Vec<&str> = registry.ids().collect();
    [ids[rng.gen_range(0..ids.len())], ids[rng.gen_range(0..ids.len())]]
}

/// Plays one full match with random rosters, actions, and judge results.
pub fn play_game(registry: &Registry, game_id: usize, config: &SelfPlayConfig, rng: &mut SmallRng) -> GameOutcome {
    let p1 = random_pair(registry, rng);
    let p2 = random_pair(registry, rng);
    let mut state = MatchState::new(registry, "Player 1", "Player 2", p1, p2)
        .expect("standard roster ids are always valid");

    let mut actions = 0usize;
    while state.phase != Phase::Finished && state.turn_number <= config.max_turns {
        match state.phase {
            Phase::Coding => {
                let results = [random_coding_result(rng), random_coding_result(rng)];
                state = end_coding_phase(&state, results);
            }
            Phase::Action => {
                let action = random_action(registry, &state, rng).unwrap_or(Action::DoNothing {
                    actor: state.action_queue[state.current_actor],
                });
                let (next, entry) = resolve_action(registry, &state, &action);
                state = next;
                state.push_log(entry);
                actions += 1;
                state = advance_turn(&state);
            }
            Phase::Finished => {}
        }
    }

    GameOutcome {
        game_id,
        winner: state.winner,
        turns: state.turn_number,
        actions,
        final_state: state,
    }
}

/// Runs self-play, producing one outcome per match.
///
/// When `config.threads > 1`, matches are played concurrently using rayon.
pub fn run_self_play(registry: &Registry, config: &SelfPlayConfig) -> Vec<GameOutcome> {
    if config.threads > 1 {
        run_self_play_parallel(registry, config)
    } else {
        run_self_play_sequential(registry, config)
    }
}

fn run_self_play_sequential(registry: &Registry, config: &SelfPlayConfig) -> Vec<GameOutcome> {
    let mut rng = if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed)
    } else {
        SmallRng::from_entropy()
    };

    (0..config.num_games)
        .map(|i| play_game(registry, i, config, &mut rng))
        .collect()
}

fn run_self_play_parallel(registry: &Registry, config: &SelfPlayConfig) -> Vec<GameOutcome> {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .expect("failed to build rayon thread pool");

    pool.install(|| {
        (0..config.num_games)
            .into_par_iter()
            .map(|i| {
                let mut rng = if config.seed != 0 {
                    SmallRng::seed_from_u64(config.seed.wrapping_add(i as u64))
                } else {
                    SmallRng::from_entropy()
                };
                play_game(registry, i, config, &mut rng)
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_game_reaches_a_terminal_or_capped_state() {
        let registry = Registry::standard();
        let config = SelfPlayConfig { num_games: 1, max_turns: 100, seed: 42, threads: 1 };
        let mut rng = SmallRng::seed_from_u64(config.seed);

        let outcome = play_game(&registry, 0, &config, &mut rng);
        if let Some(winner) = outcome.winner {
            assert!(winner < 2);
            assert_eq!(outcome.final_state.phase, Phase::Finished);
        } else {
            assert!(outcome.turns > config.max_turns);
        }
    }

    #[test]
    fn batch_produces_one_outcome_per_game() {
        let registry = Registry::standard();
        let config = SelfPlayConfig { num_games: 4, max_turns: 100, seed: 7, threads: 1 };
        let outcomes = run_self_play(&registry, &config);
        assert_eq!(outcomes.len(), 4);
    }

    #[test]
    fn parallel_batch_matches_requested_count() {
        let registry = Registry::standard();
        let config = SelfPlayConfig { num_games: 6, max_turns: 100, seed: 9, threads: 3 };
        let outcomes = run_self_play(&registry, &config);
        assert_eq!(outcomes.len(), 6);
    }
}
