//! Status effects and the operations that manage them.
//!
//! A character carries at most one active effect per type: effects live in
//! a map keyed by [`StatusEffectType`], so re-applying a type replaces the
//! previous instance instead of stacking. Only the periodic types (poison,
//! bleed) are affected by end-of-turn ticking; every other type ends by
//! being consumed when its trigger fires.

use serde::{Deserialize, Serialize};

use super::character::CharacterState;

/// The closed set of status-effect types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatusEffectType {
    /// Incoming damage (attack or spell) reduced by `value` percent; consumed on hit.
    Defending,
    /// The next incoming hit is fully avoided; consumed on hit.
    DodgeNext,
    /// The character's next action is skipped; consumed when skipped.
    Stunned,
    /// Deals `value` damage at the end of each of the character's turns.
    Poison,
    /// Deals `value` damage at the end of each of the character's turns.
    Bleed,
    /// Incoming spell damage reduced by `value` percent; consumed on hit.
    ShieldSpell,
    /// The character's next attack deals half damage; consumed on attack.
    Weakened,
}

impl StatusEffectType {
    /// Human-readable label used in log lines.
    pub fn label(self) -> &'static str {
        match self {
            StatusEffectType::Defending => "defending",
            StatusEffectType::DodgeNext => "dodge",
            StatusEffectType::Stunned => "stunned",
            StatusEffectType::Poison => "poison",
            StatusEffectType::Bleed => "bleed",
            StatusEffectType::ShieldSpell => "spell shield",
            StatusEffectType::Weakened => "weakened",
        }
    }

    /// Whether this type deals damage on the end-of-turn tick.
    pub fn is_periodic(self) -> bool {
        matches!(self, StatusEffectType::Poison | StatusEffectType::Bleed)
    }
}

/// Duration used for effects that persist until their trigger consumes them.
pub const UNTIL_CONSUMED: i32 = -1;

/// An active status effect on a character.
///
/// `remaining_turns == UNTIL_CONSUMED` marks an effect that never expires
/// by time; non-negative durations count down on tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub remaining_turns: i32,
    pub value: u32,
}

/// Result of ticking a character's periodic effects.
#[derive(Debug, Clone, Default)]
pub struct TickOutcome {
    /// Total damage dealt by periodic effects this tick.
    pub damage: u32,
    /// One line per effect that dealt damage.
    pub log: Vec<String>,
}

/// Returns true if the character has an active effect of the given type.
pub fn has_status(ch: &CharacterState, ty: StatusEffectType) -> bool {
    ch.effects.contains_key(&ty)
}

/// Returns the active effect of the given type, if any.
pub fn get_status(ch: &CharacterState, ty: StatusEffectType) -> Option<StatusEffect> {
    ch.effects.get(&ty).copied()
}

/// Applies an effect, replacing any existing effect of the same type.
///
/// Last write wins: durations are not extended and values are not summed.
pub fn apply_status(ch: &mut CharacterState, ty: StatusEffectType, effect: StatusEffect) {
    ch.effects.insert(ty, effect);
}

/// Removes one active effect of the given type, returning it if present.
///
/// Used for single-trigger effects (dodge, shields, defend, weaken, stun).
pub fn consume_status(ch: &mut CharacterState, ty: StatusEffectType) -> Option<StatusEffect> {
    ch.effects.remove(&ty)
}

/// Ticks the character's periodic effects at the end of their turn.
///
/// Poison and bleed each deal their `value` as damage and count down one
/// turn, disappearing once their duration is spent. HP is clamped at zero
/// and `is_alive` recomputed. Non-periodic effects are untouched.
pub fn tick_status_effects(ch: &mut CharacterState) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    let periodic: Vec<StatusEffectType> = ch
        .effects
        .keys()
        .copied()
        .filter(|ty| ty.is_periodic())
        .collect();

    for ty in periodic {
        let effect = ch.effects[&ty];
        outcome.damage += effect.value;
        outcome
            .log
            .push(format!("takes {} {} damage", effect.value, ty.label()));
        if effect.remaining_turns <= 1 {
            ch.effects.remove(&ty);
        } else {
            ch.effects.get_mut(&ty).unwrap().remaining_turns -= 1;
        }
    }

    ch.hp = ch.hp.saturating_sub(outcome.damage);
    ch.is_alive = ch.hp > 0;
    outcome
}

/// Drops effects whose timed duration has run out (`remaining_turns == 0`).
///
/// Effects marked [`UNTIL_CONSUMED`] are never removed by this sweep.
pub fn clean_expired(ch: &mut CharacterState) {
    ch.effects.retain(|_, e| e.remaining_turns != 0);
}
