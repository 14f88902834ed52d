//! Core data model: constants, status effects, combatants, actions, and
//! the match-state aggregate.

pub mod action;
pub mod character;
pub mod constants;
pub mod match_state;
pub mod status;

pub use action::{Action, ActionKind};
pub use character::CharacterState;
pub use constants::{
    ATTACK_MANA_GAIN, BASE_ATTACK_DAMAGE, BASE_HP, DEFEND_MANA_GAIN, DEFEND_REDUCTION_PCT,
    EASY_MANA_REWARD, HARD_MANA_REWARD, MAX_MANA, MEDIUM_MANA_REWARD, REVIVE_HP, STARTING_MANA,
};
pub use match_state::{
    CodingResult, Difficulty, LogEntry, MatchError, MatchState, Phase, PlayerState,
};
pub use status::{
    apply_status, clean_expired, consume_status, get_status, has_status, tick_status_effects,
    StatusEffect, StatusEffectType, TickOutcome, UNTIL_CONSUMED,
};
