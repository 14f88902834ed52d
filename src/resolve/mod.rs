//! Action and turn resolution.
//!
//! Resolves submitted actions into new match snapshots and drives the
//! coding/action/finished phase state machine.

pub mod combat;
pub mod damage;
pub mod phase;

pub use combat::resolve_action;
pub use damage::{apply_damage, DamageOutcome};
pub use phase::{
    advance_turn, check_win_condition, current_actor_index, end_coding_phase, mana_reward,
};
