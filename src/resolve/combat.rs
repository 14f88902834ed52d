//! The action resolver.
//!
//! [`resolve_action`] is the single entry point for combat: it consumes the
//! current match state and a submitted action and produces a fresh snapshot
//! plus one log entry. It never fails — illegal or impossible actions
//! degrade to a no-op with an explanatory log line, so the engine stays
//! safe even when the caller skips legality pre-checks.

use crate::registry::{ItemSpecial, Registry, SpellSpecial, TargetType};
use crate::state::action::Action;
use crate::state::constants::{
    ATTACK_MANA_GAIN, BASE_ATTACK_DAMAGE, DEFEND_MANA_GAIN, DEFEND_REDUCTION_PCT,
};
use crate::state::match_state::{LogEntry, MatchState};
use crate::state::status::{
    apply_status, consume_status, has_status, StatusEffect, StatusEffectType, UNTIL_CONSUMED,
};

use super::damage::apply_damage;

/// Display name of the character at `idx`, falling back to its raw id.
fn char_name(registry: &Registry, state: &MatchState, idx: usize) -> String {
    let def_id = &state.characters[idx].def_id;
    registry
        .get(def_id)
        .map(|d| d.name.clone())
        .unwrap_or_else(|| def_id.clone())
}

/// Resolves one submitted action against the state.
///
/// A stunned actor loses the action (the stun is consumed) regardless of
/// what was submitted; a dead actor is a logged no-op.
pub fn resolve_action(
    registry: &Registry,
    state: &MatchState,
    action: &Action,
) -> (MatchState, LogEntry) {
    let mut next = state.clone();
    let actor_idx = action.actor();

    if has_status(&next.characters[actor_idx], StatusEffectType::Stunned) {
        consume_status(&mut next.characters[actor_idx], StatusEffectType::Stunned);
        let detail = format!(
            "{} is stunned and can't act!",
            char_name(registry, &next, actor_idx)
        );
        let entry = LogEntry::new(state.turn_number, actor_idx, action.kind(), detail);
        return (next, entry);
    }

    if !next.characters[actor_idx].is_alive {
        let detail = format!(
            "{} is defeated and cannot act.",
            char_name(registry, &next, actor_idx)
        );
        let entry = LogEntry::new(state.turn_number, actor_idx, action.kind(), detail);
        return (next, entry);
    }

    let detail = match *action {
        Action::Attack { actor, target } => resolve_attack(registry, &mut next, actor, target),
        Action::Spell { actor, spell, target } => {
            resolve_spell(registry, &mut next, actor, spell, target)
        }
        Action::Item { actor, item, target } => {
            resolve_item(registry, &mut next, actor, item, target)
        }
        Action::Defend { actor } => resolve_defend(registry, &mut next, actor),
        Action::DoNothing { actor } => {
            format!("{} does nothing.", char_name(registry, &next, actor))
        }
    };

    let entry = LogEntry::new(state.turn_number, actor_idx, action.kind(), detail);
    (next, entry)
}

fn resolve_attack(
    registry: &Registry,
    state: &mut MatchState,
    actor_idx: usize,
    target_idx: usize,
) -> String {
    let actor_name = char_name(registry, state, actor_idx);
    let target_name = char_name(registry, state, target_idx);

    let mut damage = BASE_ATTACK_DAMAGE;
    if has_status(&state.characters[actor_idx], StatusEffectType::Weakened) {
        damage /= 2;
        consume_status(&mut state.characters[actor_idx], StatusEffectType::Weakened);
    }
    if let Some(bonus) = state.characters[actor_idx].next_attack_bonus.take() {
        damage += bonus;
    }

    let outcome = apply_damage(registry, state, target_idx, damage, false);

    // The attacker builds mana whether or not the hit landed.
    state.characters[actor_idx].gain_mana(ATTACK_MANA_GAIN);

    let mut parts = vec![format!("{} attacks {}", actor_name, target_name)];
    if outcome.dodged {
        parts.push("but it was dodged!".to_string());
    } else {
        parts.push(format!("for {} damage", outcome.actual_damage));
    }
    parts.extend(outcome.log);
    parts.join(" ")
}

fn resolve_spell(
    registry: &Registry,
    state: &mut MatchState,
    actor_idx: usize,
    spell_idx: usize,
    target_idx: Option<usize>,
) -> String {
    let actor_name = char_name(registry, state, actor_idx);
    let Some(def) = registry.get(&state.characters[actor_idx].def_id) else {
        return format!("{} has no known spells.", actor_name);
    };
    let Some(spell) = def.spells.get(spell_idx).cloned() else {
        return format!("{} fumbles an unknown spell.", actor_name);
    };

    // A pending free-cast is spent the moment a cast is attempted, even if
    // the cast then fails the once-per-game check.
    let mut mana_cost = spell.mana_cost;
    if state.characters[actor_idx].free_next_spell {
        mana_cost = 0;
        state.characters[actor_idx].free_next_spell = false;
    }

    if state.characters[actor_idx].mana < mana_cost {
        return format!("{} doesn't have enough mana for {}!", actor_name, spell.name);
    }

    let once_per_game = matches!(spell.special, Some(SpellSpecial::OncePerGame));
    if once_per_game && state.characters[actor_idx].ultimate_used {
        return format!("{} has already used {}!", actor_name, spell.name);
    }

    state.characters[actor_idx].lose_mana(mana_cost);
    if once_per_game {
        state.characters[actor_idx].ultimate_used = true;
    }

    let mut bonus = 0;
    if spell.damage > 0 {
        if let Some(pending) = state.characters[actor_idx].next_spell_bonus.take() {
            bonus = pending;
        }
    }
    let total_damage = spell.damage + bonus;

    let mut parts = vec![format!("{} casts {}!", actor_name, spell.name)];

    if total_damage > 0 {
        match spell.target {
            TargetType::BothEnemies => {
                for enemy_idx in state.enemies(actor_idx) {
                    if !state.characters[enemy_idx].is_alive {
                        continue;
                    }
                    let enemy_name = char_name(registry, state, enemy_idx);
                    let outcome = apply_damage(registry, state, enemy_idx, total_damage, true);
                    if outcome.dodged {
                        parts.push(format!("{} dodged!", enemy_name));
                    } else {
                        parts.push(format!(
                            "{} takes {} damage.",
                            enemy_name, outcome.actual_damage
                        ));
                    }
                    parts.extend(outcome.log);
                }
            }
            TargetType::EnemySingle => {
                if let Some(target_idx) = target_idx {
                    let target_name = char_name(registry, state, target_idx);
                    let outcome = apply_damage(registry, state, target_idx, total_damage, true);
                    if outcome.dodged {
                        parts.push(format!("{} dodged!", target_name));
                    } else {
                        parts.push(format!(
                            "{} takes {} damage.",
                            target_name, outcome.actual_damage
                        ));
                    }
                    parts.extend(outcome.log);
                }
            }
            _ => {}
        }
    }

    if spell.healing > 0 {
        match spell.target {
            TargetType::AllySingle => {
                if let Some(target_idx) = target_idx {
                    if state.characters[target_idx].is_alive {
                        state.characters[target_idx].heal(spell.healing);
                        parts.push(format!(
                            "{} healed for {} HP.",
                            char_name(registry, state, target_idx),
                            spell.healing
                        ));
                    }
                }
            }
            TargetType::SelfOnly => {
                state.characters[actor_idx].heal(spell.healing);
                parts.push(format!("{} healed for {} HP.", actor_name, spell.healing));
            }
            _ => {}
        }
    }

    if let Some(status) = spell.status {
        if let Some(target_idx) = target_idx {
            apply_status(
                &mut state.characters[target_idx],
                status.effect,
                StatusEffect { remaining_turns: status.turns, value: status.value },
            );
            parts.push(format!(
                "{} is now {}!",
                char_name(registry, state, target_idx),
                status.effect.label()
            ));
        }
    }

    if let Some(special) = spell.special {
        resolve_spell_special(registry, state, actor_idx, target_idx, special, &mut parts);
    }

    parts.join(" ")
}

fn resolve_spell_special(
    registry: &Registry,
    state: &mut MatchState,
    actor_idx: usize,
    target_idx: Option<usize>,
    special: SpellSpecial,
    parts: &mut Vec<String>,
) {
    let actor_name = char_name(registry, state, actor_idx);
    match special {
        SpellSpecial::WeakenAttack { percent } => {
            if let Some(target_idx) = target_idx {
                apply_status(
                    &mut state.characters[target_idx],
                    StatusEffectType::Weakened,
                    StatusEffect { remaining_turns: UNTIL_CONSUMED, value: percent },
                );
                parts.push(format!(
                    "{}'s next attack is weakened!",
                    char_name(registry, state, target_idx)
                ));
            }
        }
        SpellSpecial::SelfDodge => {
            apply_status(
                &mut state.characters[actor_idx],
                StatusEffectType::DodgeNext,
                StatusEffect { remaining_turns: UNTIL_CONSUMED, value: 0 },
            );
            parts.push(format!("{} gains Dodge!", actor_name));
        }
        SpellSpecial::FreeNextSpell => {
            state.characters[actor_idx].free_next_spell = true;
            parts.push(format!("{}'s next spell will cost 0 mana!", actor_name));
        }
        SpellSpecial::NextSpellBonus { amount } => {
            state.characters[actor_idx].next_spell_bonus = Some(amount);
            parts.push(format!("{}'s next spell will deal +{} damage!", actor_name, amount));
        }
        SpellSpecial::NextAttackBonus { amount } => {
            state.characters[actor_idx].next_attack_bonus = Some(amount);
            parts.push(format!("{}'s next attack will deal +{} damage!", actor_name, amount));
        }
        // Consumed by the cast pre-checks; no side effect here.
        SpellSpecial::OncePerGame => {}
        SpellSpecial::LingeringCurse { damage } => {
            if let Some(target_idx) = target_idx {
                apply_status(
                    &mut state.characters[target_idx],
                    StatusEffectType::Bleed,
                    StatusEffect { remaining_turns: 1, value: damage },
                );
                parts.push(format!(
                    "{} will take {} lingering damage at the end of their next turn!",
                    char_name(registry, state, target_idx),
                    damage
                ));
            }
        }
        SpellSpecial::ShieldAllies { percent } => {
            for ally_idx in state.allies(actor_idx) {
                if state.characters[ally_idx].is_alive {
                    apply_status(
                        &mut state.characters[ally_idx],
                        StatusEffectType::ShieldSpell,
                        StatusEffect { remaining_turns: UNTIL_CONSUMED, value: percent },
                    );
                }
            }
            parts.push("Both allies gain Shield Spell!".to_string());
        }
        SpellSpecial::GuardSelf { percent } => {
            apply_status(
                &mut state.characters[actor_idx],
                StatusEffectType::Defending,
                StatusEffect { remaining_turns: UNTIL_CONSUMED, value: percent },
            );
            parts.push(format!("{} raises a powerful shield!", actor_name));
        }
    }
}

fn resolve_item(
    registry: &Registry,
    state: &mut MatchState,
    actor_idx: usize,
    item_idx: usize,
    target_idx: Option<usize>,
) -> String {
    let actor_name = char_name(registry, state, actor_idx);
    let Some(def) = registry.get(&state.characters[actor_idx].def_id) else {
        return format!("{} has no known items.", actor_name);
    };
    let Some(item) = def.items.get(item_idx).cloned() else {
        return format!("{} reaches for an item that isn't there.", actor_name);
    };

    if state.characters[actor_idx].items_used[item_idx] {
        return format!("{} has already used {}!", actor_name, item.name);
    }
    state.characters[actor_idx].items_used[item_idx] = true;

    let mut parts = vec![format!("{} uses {}!", actor_name, item.name)];
    let effect = item.effect;

    if let Some(healing) = effect.healing {
        match item.target {
            TargetType::SelfOnly => {
                state.characters[actor_idx].heal(healing);
                parts.push(format!("Healed for {} HP.", healing));
            }
            TargetType::AllySingle => {
                if let Some(target_idx) = target_idx {
                    state.characters[target_idx].heal(healing);
                    parts.push(format!(
                        "{} healed for {} HP.",
                        char_name(registry, state, target_idx),
                        healing
                    ));
                }
            }
            TargetType::BothAllies => {
                for ally_idx in state.allies(actor_idx) {
                    if state.characters[ally_idx].is_alive {
                        state.characters[ally_idx].heal(healing);
                    }
                }
                parts.push(format!("Both allies healed for {} HP.", healing));
            }
            _ => {}
        }
    }

    if let Some(gain) = effect.mana_gain {
        match item.target {
            TargetType::SelfOnly => {
                state.characters[actor_idx].gain_mana(gain);
                parts.push(format!("Gained {} mana.", gain));
            }
            TargetType::BothAllies => {
                for ally_idx in state.allies(actor_idx) {
                    if state.characters[ally_idx].is_alive {
                        state.characters[ally_idx].gain_mana(gain);
                    }
                }
                parts.push(format!("Both allies gain {} mana.", gain));
            }
            _ => {}
        }
    }

    if let Some(loss) = effect.mana_loss {
        match item.target {
            TargetType::EnemySingle => {
                if let Some(target_idx) = target_idx {
                    state.characters[target_idx].lose_mana(loss);
                    parts.push(format!(
                        "{} loses {} mana.",
                        char_name(registry, state, target_idx),
                        loss
                    ));
                }
            }
            TargetType::BothEnemies => {
                for enemy_idx in state.enemies(actor_idx) {
                    if state.characters[enemy_idx].is_alive {
                        state.characters[enemy_idx].lose_mana(loss);
                    }
                }
                parts.push(format!("Both enemies lose {} mana.", loss));
            }
            _ => {}
        }
    }

    if let Some(status) = effect.apply_status {
        if item.target == TargetType::SelfOnly {
            let value = if status == StatusEffectType::Defending {
                DEFEND_REDUCTION_PCT
            } else {
                0
            };
            apply_status(
                &mut state.characters[actor_idx],
                status,
                StatusEffect { remaining_turns: UNTIL_CONSUMED, value },
            );
            parts.push(format!("{} gains {}!", actor_name, status.label()));
        }
    }

    if let Some(special) = effect.special {
        match special {
            ItemSpecial::SurviveFatal => {
                // Passive only: marking the slot used above is what arms it;
                // the damage pipeline performs the actual check.
                parts.push(format!(
                    "{} is now active. Will survive one fatal blow.",
                    item.name
                ));
            }
            ItemSpecial::GuardAllies { percent } => {
                for ally_idx in state.allies(actor_idx) {
                    if state.characters[ally_idx].is_alive {
                        apply_status(
                            &mut state.characters[ally_idx],
                            StatusEffectType::Defending,
                            StatusEffect { remaining_turns: UNTIL_CONSUMED, value: percent },
                        );
                    }
                }
                parts.push("Both allies gain Defend!".to_string());
            }
            ItemSpecial::AlsoShieldSelf { percent } => {
                apply_status(
                    &mut state.characters[actor_idx],
                    StatusEffectType::ShieldSpell,
                    StatusEffect { remaining_turns: UNTIL_CONSUMED, value: percent },
                );
                parts.push(format!("{} also gains Shield Spell!", actor_name));
            }
        }
    }

    parts.join(" ")
}

fn resolve_defend(registry: &Registry, state: &mut MatchState, actor_idx: usize) -> String {
    apply_status(
        &mut state.characters[actor_idx],
        StatusEffectType::Defending,
        StatusEffect { remaining_turns: UNTIL_CONSUMED, value: DEFEND_REDUCTION_PCT },
    );
    state.characters[actor_idx].gain_mana(DEFEND_MANA_GAIN);
    format!(
        "{} defends! (+{} mana)",
        char_name(registry, state, actor_idx),
        DEFEND_MANA_GAIN
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::constants::{BASE_HP, STARTING_MANA};

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
    fn attack_deals_base_damage_and_grants_mana() {
        let (registry, state) = setup();
        let (next, entry) =
            resolve_action(&registry, &state, &Action::Attack { actor: 0, target: 2 });

        assert_eq!(next.characters[2].hp, BASE_HP - BASE_ATTACK_DAMAGE);
        assert_eq!(next.characters[0].mana, STARTING_MANA + ATTACK_MANA_GAIN);
        assert!(entry.detail.contains("attacks"));
        assert!(entry.detail.contains("14 damage"));
        // Caller-held state is untouched.
        assert_eq!(state.characters[2].hp, BASE_HP);
    }

    #[test]
    fn weakened_attacker_deals_half_damage_once() {
        let (registry, mut state) = setup();
        apply_status(
            &mut state.characters[0],
            StatusEffectType::Weakened,
            StatusEffect { remaining_turns: UNTIL_CONSUMED, value: 50 },
        );

        let (next, _) = resolve_action(&registry, &state, &Action::Attack { actor: 0, target: 2 });
        assert_eq!(next.characters[2].hp, BASE_HP - 7);
        assert!(!has_status(&next.characters[0], StatusEffectType::Weakened));

        let (after, _) = resolve_action(&registry, &next, &Action::Attack { actor: 0, target: 2 });
        assert_eq!(after.characters[2].hp, BASE_HP - 7 - BASE_ATTACK_DAMAGE);
    }

    #[test]
    fn attack_bonus_is_consumed_by_one_attack() {
        let (registry, mut state) = setup();
        state.characters[0].next_attack_bonus = Some(10);

        let (next, _) = resolve_action(&registry, &state, &Action::Attack { actor: 0, target: 2 });
        assert_eq!(next.characters[2].hp, BASE_HP - 24);
        assert_eq!(next.characters[0].next_attack_bonus, None);
    }

    #[test]
    fn dodged_attack_still_grants_attacker_mana() {
        let (registry, mut state) = setup();
        apply_status(
            &mut state.characters[2],
            StatusEffectType::DodgeNext,
            StatusEffect { remaining_turns: UNTIL_CONSUMED, value: 0 },
        );

        let (next, entry) =
            resolve_action(&registry, &state, &Action::Attack { actor: 0, target: 2 });
        assert_eq!(next.characters[2].hp, BASE_HP);
        assert_eq!(next.characters[0].mana, STARTING_MANA + ATTACK_MANA_GAIN);
        assert!(entry.detail.contains("dodged"));
    }

    #[test]
    fn stunned_actor_loses_the_action_and_the_stun() {
        let (registry, mut state) = setup();
        apply_status(
            &mut state.characters[0],
            StatusEffectType::Stunned,
            StatusEffect { remaining_turns: 1, value: 0 },
        );

        let (next, entry) =
            resolve_action(&registry, &state, &Action::Attack { actor: 0, target: 2 });
        assert_eq!(next.characters[2].hp, BASE_HP);
        assert!(!has_status(&next.characters[0], StatusEffectType::Stunned));
        assert!(entry.detail.contains("stunned"));
    }

    #[test]
    fn dead_actor_is_a_logged_no_op() {
        let (registry, mut state) = setup();
        state.characters[0].take_damage(100);

        let (next, entry) =
            resolve_action(&registry, &state, &Action::Attack { actor: 0, target: 2 });
        assert_eq!(next.characters[2].hp, BASE_HP);
        assert!(entry.detail.contains("defeated"));
    }

    #[test]
    fn spell_costs_mana_and_damages_target() {
        let (registry, state) = setup();
        // Hermione's Diffindo: 5 mana, 16 damage.
        let (next, entry) = resolve_action(
            &registry,
            &state,
            &Action::Spell { actor: 1, spell: 1, target: Some(2) },
        );
        assert_eq!(next.characters[1].mana, STARTING_MANA - 5);
        assert_eq!(next.characters[2].hp, BASE_HP - 16);
        assert!(entry.detail.contains("Diffindo"));
    }

    #[test]
    fn insufficient_mana_is_a_logged_no_op() {
        let (registry, mut state) = setup();
        state.characters[1].mana = 2;

        let (next, entry) = resolve_action(
            &registry,
            &state,
            &Action::Spell { actor: 1, spell: 1, target: Some(2) },
        );
        assert_eq!(next.characters[2].hp, BASE_HP);
        assert_eq!(next.characters[1].mana, 2);
        assert!(entry.detail.contains("enough mana"));
    }

    #[test]
    fn once_per_game_spell_cannot_be_cast_twice() {
        let (registry, mut state) = setup();
        state.characters[2].mana = 20;
        let avada = Action::Spell { actor: 2, spell: 0, target: Some(0) };

        let (next, _) = resolve_action(&registry, &state, &avada);
        assert_eq!(next.characters[0].hp, BASE_HP - 40);
        assert!(next.characters[2].ultimate_used);
        assert_eq!(next.characters[2].mana, 10);

        let (after, entry) = resolve_action(&registry, &next, &avada);
        assert_eq!(after.characters[0].hp, BASE_HP - 40);
        assert_eq!(after.characters[2].mana, 10);
        assert!(entry.detail.contains("already used"));
    }

    #[test]
    fn free_next_spell_zeroes_the_cost_once() {
        let (registry, state) = setup();
        // Voldemort: Dark Empowerment (6 mana) then Fiendfyre (9 mana) for free.
        let (next, _) = resolve_action(
            &registry,
            &state,
            &Action::Spell { actor: 2, spell: 3, target: None },
        );
        assert!(next.characters[2].free_next_spell);
        assert_eq!(next.characters[2].mana, STARTING_MANA - 6);

        let (after, _) = resolve_action(
            &registry,
            &next,
            &Action::Spell { actor: 2, spell: 2, target: None },
        );
        assert!(!after.characters[2].free_next_spell);
        assert_eq!(after.characters[2].mana, STARTING_MANA - 6);
        assert_eq!(after.characters[0].hp, BASE_HP - 20);
        assert_eq!(after.characters[1].hp, BASE_HP - 20);
    }

    #[test]
    fn spell_bonus_applies_to_damaging_spells_only() {
        let (registry, mut state) = setup();
        state.characters[3].mana = 20;
        // Unhinged Power sets the bonus.
        let (next, _) = resolve_action(
            &registry,
            &state,
            &Action::Spell { actor: 3, spell: 3, target: None },
        );
        assert_eq!(next.characters[3].next_spell_bonus, Some(10));

        // Dark Whiplash (18) lands for 28 and consumes the bonus.
        let (after, _) = resolve_action(
            &registry,
            &next,
            &Action::Spell { actor: 3, spell: 0, target: Some(0) },
        );
        assert_eq!(after.characters[0].hp, BASE_HP - 28);
        assert_eq!(after.characters[3].next_spell_bonus, None);
    }

    #[test]
    fn multi_target_spell_skips_dead_enemies() {
        let (registry, mut state) = setup();
        state.characters[1].mana = 20;
        state.characters[2].take_damage(100);

        let (next, _) = resolve_action(
            &registry,
            &state,
            &Action::Spell { actor: 1, spell: 3, target: None },
        );
        assert_eq!(next.characters[2].hp, 0);
        assert_eq!(next.characters[3].hp, BASE_HP - 14);
    }

    #[test]
    fn stun_spell_applies_status_to_target() {
        let (registry, state) = setup();
        let (next, _) = resolve_action(
            &registry,
            &state,
            &Action::Spell { actor: 1, spell: 0, target: Some(3) },
        );
        assert_eq!(next.characters[3].hp, BASE_HP - 10);
        assert!(has_status(&next.characters[3], StatusEffectType::Stunned));
    }

    #[test]
    fn weaken_spell_weakens_the_target() {
        let (registry, state) = setup();
        let (next, _) = resolve_action(
            &registry,
            &state,
            &Action::Spell { actor: 0, spell: 0, target: Some(2) },
        );
        assert_eq!(next.characters[2].hp, BASE_HP - 14);
        let weakened = crate::state::status::get_status(
            &next.characters[2],
            StatusEffectType::Weakened,
        )
        .unwrap();
        assert_eq!(weakened.value, 50);
    }

    #[test]
    fn lingering_curse_applies_a_one_turn_bleed() {
        let (registry, state) = setup();
        let (next, _) = resolve_action(
            &registry,
            &state,
            &Action::Spell { actor: 2, spell: 1, target: Some(0) },
        );
        assert_eq!(next.characters[0].hp, BASE_HP - 24);
        let bleed =
            crate::state::status::get_status(&next.characters[0], StatusEffectType::Bleed)
                .unwrap();
        assert_eq!(bleed.remaining_turns, 1);
        assert_eq!(bleed.value, 8);
    }

    #[test]
    fn shield_allies_covers_both_living_allies() {
        let (registry, mut state) = setup();
        state.characters[0].def_id = "hagrid".to_string();

        let (next, _) = resolve_action(
            &registry,
            &state,
            &Action::Spell { actor: 0, spell: 1, target: None },
        );
        assert!(has_status(&next.characters[0], StatusEffectType::ShieldSpell));
        assert!(has_status(&next.characters[1], StatusEffectType::ShieldSpell));
        assert!(!has_status(&next.characters[2], StatusEffectType::ShieldSpell));
    }

    #[test]
    fn item_is_single_use_per_match() {
        let (registry, mut state) = setup();
        state.characters[0].hp = 10;
        let cloak = Action::Item { actor: 0, item: 0, target: None };

        let (next, _) = resolve_action(&registry, &state, &cloak);
        assert!(next.characters[0].items_used[0]);
        assert!(has_status(&next.characters[0], StatusEffectType::DodgeNext));

        let (after, entry) = resolve_action(&registry, &next, &cloak);
        assert!(entry.detail.contains("already used"));
        assert_eq!(after.characters[0], next.characters[0]);
    }

    #[test]
    fn mana_drain_item_hits_both_enemies() {
        let (registry, state) = setup();
        // Voldemort's Dark Mark.
        let (next, _) = resolve_action(
            &registry,
            &state,
            &Action::Item { actor: 2, item: 1, target: None },
        );
        assert_eq!(next.characters[0].mana, STARTING_MANA - 3);
        assert_eq!(next.characters[1].mana, STARTING_MANA - 3);
    }

    #[test]
    fn dual_effect_item_grants_defend_and_spell_shield() {
        let (registry, mut state) = setup();
        state.characters[0].def_id = "hagrid".to_string();

        let (next, _) = resolve_action(
            &registry,
            &state,
            &Action::Item { actor: 0, item: 0, target: None },
        );
        let guard =
            crate::state::status::get_status(&next.characters[0], StatusEffectType::Defending)
                .unwrap();
        assert_eq!(guard.value, DEFEND_REDUCTION_PCT);
        assert!(has_status(&next.characters[0], StatusEffectType::ShieldSpell));
    }

    #[test]
    fn defend_applies_guard_and_grants_mana() {
        let (registry, state) = setup();
        let (next, entry) = resolve_action(&registry, &state, &Action::Defend { actor: 0 });
        let guard =
            crate::state::status::get_status(&next.characters[0], StatusEffectType::Defending)
                .unwrap();
        assert_eq!(guard.value, DEFEND_REDUCTION_PCT);
        assert_eq!(next.characters[0].mana, STARTING_MANA + DEFEND_MANA_GAIN);
        assert!(entry.detail.contains("defends"));
    }

    #[test]
    fn do_nothing_only_logs() {
        let (registry, state) = setup();
        let (next, entry) = resolve_action(&registry, &state, &Action::DoNothing { actor: 0 });
        assert_eq!(next.characters, state.characters);
        assert!(entry.detail.contains("does nothing"));
    }
}
