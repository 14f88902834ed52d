//! The shared damage pipeline.
//!
//! Every damaging hit, attack or spell, single- or multi-target, is routed
//! through [`apply_damage`] once per target. The pipeline owns the defensive
//! status interactions (dodge, spell shield, defend) and the passive-revival
//! override, so the per-action resolvers never touch HP directly.

use crate::registry::Registry;
use crate::state::constants::REVIVE_HP;
use crate::state::match_state::MatchState;
use crate::state::status::{consume_status, get_status, has_status, StatusEffectType};

/// What happened to one target of a damaging hit.
#[derive(Debug, Clone, Default)]
pub struct DamageOutcome {
    /// Damage actually applied after all reductions.
    pub actual_damage: u32,
    /// True when the hit was fully avoided by a dodge.
    pub dodged: bool,
    /// Extra log fragments (shield absorption, defend reduction, revival).
    pub log: Vec<String>,
}

/// Applies `raw` damage to the character at `target_idx`.
///
/// Order of checks, each consuming its status when it fires:
/// 1. dead targets are a silent no-op;
/// 2. a pending dodge avoids the hit entirely;
/// 3. a spell shield reduces spell damage by its percentage;
/// 4. a defend guard reduces any remaining damage by its percentage
///    (attacks and spells alike);
/// 5. HP is clamped and liveness recomputed;
/// 6. a lethal result is overridden by an armed, unspent revival passive.
pub fn apply_damage(
    registry: &Registry,
    state: &mut MatchState,
    target_idx: usize,
    raw: u32,
    is_spell: bool,
) -> DamageOutcome {
    let mut outcome = DamageOutcome::default();
    let target = &mut state.characters[target_idx];

    if !target.is_alive {
        return outcome;
    }

    if has_status(target, StatusEffectType::DodgeNext) {
        consume_status(target, StatusEffectType::DodgeNext);
        outcome.dodged = true;
        outcome.log.push("dodged the attack!".to_string());
        return outcome;
    }

    let mut damage = raw;

    if is_spell {
        if let Some(shield) = get_status(target, StatusEffectType::ShieldSpell) {
            let absorbed = raw * shield.value / 100;
            damage = damage * (100 - shield.value) / 100;
            consume_status(target, StatusEffectType::ShieldSpell);
            outcome
                .log
                .push(format!("shield absorbed {} spell damage", absorbed));
        }
    }

    if let Some(guard) = get_status(target, StatusEffectType::Defending) {
        damage = damage * (100 - guard.value) / 100;
        consume_status(target, StatusEffectType::Defending);
        outcome
            .log
            .push(format!("defended, reducing damage by {}%", guard.value));
    }

    target.take_damage(damage);
    outcome.actual_damage = damage;

    if target.hp == 0 && !target.revive_spent {
        if let Some(def) = registry.get(&target.def_id) {
            if let Some(slot) = def.revival_slot() {
                if target.items_used[slot] {
                    target.hp = REVIVE_HP;
                    target.is_alive = true;
                    target.revive_spent = true;
                    outcome.log.push(format!(
                        "{} activated! Survived with {} HP!",
                        def.items[slot].name, REVIVE_HP
                    ));
                }
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::status::{apply_status, StatusEffect, UNTIL_CONSUMED};
    use crate::state::MatchState;

    fn setup() -> (Registry, MatchState) {
        let registry = Registry::standard();
        let state = MatchState::new(
            &registry,
            "p1",
            "p2",
            ["harry", "hermione"],
            ["voldemort", "bellatrix"],
        )
        .unwrap();
        (registry, state)
    }

    #[test]
    fn plain_hit_reduces_hp() {
        let (registry, mut state) = setup();
        let outcome = apply_damage(&registry, &mut state, 2, 14, false);
        assert_eq!(outcome.actual_damage, 14);
        assert!(!outcome.dodged);
        assert_eq!(state.characters[2].hp, 36);
    }

    #[test]
    fn dead_target_is_a_silent_no_op() {
        let (registry, mut state) = setup();
        state.characters[2].take_damage(100);
        let outcome = apply_damage(&registry, &mut state, 2, 14, false);
        assert_eq!(outcome.actual_damage, 0);
        assert!(outcome.log.is_empty());
        assert_eq!(state.characters[2].hp, 0);
    }

    #[test]
    fn dodge_avoids_the_hit_and_is_consumed() {
        let (registry, mut state) = setup();
        apply_status(
            &mut state.characters[2],
            StatusEffectType::DodgeNext,
            StatusEffect { remaining_turns: UNTIL_CONSUMED, value: 0 },
        );

        let outcome = apply_damage(&registry, &mut state, 2, 14, false);
        assert!(outcome.dodged);
        assert_eq!(state.characters[2].hp, 50);
        assert!(!has_status(&state.characters[2], StatusEffectType::DodgeNext));
    }

    #[test]
    fn spell_shield_only_blocks_spells() {
        let (registry, mut state) = setup();
        apply_status(
            &mut state.characters[2],
            StatusEffectType::ShieldSpell,
            StatusEffect { remaining_turns: UNTIL_CONSUMED, value: 50 },
        );

        // An attack passes straight through the spell shield.
        let outcome = apply_damage(&registry, &mut state, 2, 14, false);
        assert_eq!(outcome.actual_damage, 14);
        assert!(has_status(&state.characters[2], StatusEffectType::ShieldSpell));

        // A spell is halved and the shield consumed.
        let outcome = apply_damage(&registry, &mut state, 2, 20, true);
        assert_eq!(outcome.actual_damage, 10);
        assert!(!has_status(&state.characters[2], StatusEffectType::ShieldSpell));
    }

    #[test]
    fn defend_blocks_both_attack_and_spell_damage() {
        let (registry, mut state) = setup();
        for is_spell in [false, true] {
            apply_status(
                &mut state.characters[2],
                StatusEffectType::Defending,
                StatusEffect { remaining_turns: UNTIL_CONSUMED, value: 50 },
            );
            let outcome = apply_damage(&registry, &mut state, 2, 14, is_spell);
            assert_eq!(outcome.actual_damage, 7);
            assert!(!has_status(&state.characters[2], StatusEffectType::Defending));
        }
    }

    #[test]
    fn shield_and_defend_stack_multiplicatively_on_spells() {
        let (registry, mut state) = setup();
        apply_status(
            &mut state.characters[2],
            StatusEffectType::ShieldSpell,
            StatusEffect { remaining_turns: UNTIL_CONSUMED, value: 50 },
        );
        apply_status(
            &mut state.characters[2],
            StatusEffectType::Defending,
            StatusEffect { remaining_turns: UNTIL_CONSUMED, value: 50 },
        );

        let outcome = apply_damage(&registry, &mut state, 2, 20, true);
        assert_eq!(outcome.actual_damage, 5);
    }

    #[test]
    fn armed_revival_passive_overrides_a_lethal_hit_once() {
        let (registry, mut state) = setup();
        // Character 2 is Voldemort; arm the passive by using item slot 0.
        state.characters[2].items_used[0] = true;

        let outcome = apply_damage(&registry, &mut state, 2, 60, true);
        assert_eq!(state.characters[2].hp, REVIVE_HP);
        assert!(state.characters[2].is_alive);
        assert!(state.characters[2].revive_spent);
        assert!(outcome.log.iter().any(|l| l.contains("Survived")));

        // A second lethal hit is final.
        apply_damage(&registry, &mut state, 2, 60, true);
        assert_eq!(state.characters[2].hp, 0);
        assert!(!state.characters[2].is_alive);
    }

    #[test]
    fn unarmed_passive_does_not_trigger() {
        let (registry, mut state) = setup();
        apply_damage(&registry, &mut state, 2, 60, true);
        assert!(!state.characters[2].is_alive);
        assert!(!state.characters[2].revive_spent);
    }
}
