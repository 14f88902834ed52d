//! Legal action enumeration.
//!
//! Generates the set of actions the current actor can usefully submit:
//! attacks on living enemies, spells the actor can afford with every valid
//! target, unused items, Defend, and DoNothing. The resolver stays defensive
//! regardless, so "legal" here means "would not soft-fail a mana,
//! single-use, or targeting check".

use rand::Rng;

use crate::registry::{Registry, SpellSpecial, TargetType};
use crate::state::action::Action;
use crate::state::match_state::{MatchState, Phase};

/// Valid targets for a spell or item with the given target type, or `None`
/// target for the variants that resolve their own targets.
fn targets_for(state: &MatchState, actor: usize, target: TargetType) -> Vec<Option<usize>> {
    match target {
        TargetType::EnemySingle => state
            .enemies(actor)
            .into_iter()
            .filter(|&i| state.characters[i].is_alive)
            .map(Some)
            .collect(),
        TargetType::AllySingle => state
            .allies(actor)
            .into_iter()
            .filter(|&i| state.characters[i].is_alive)
            .map(Some)
            .collect(),
        TargetType::BothEnemies | TargetType::BothAllies | TargetType::SelfOnly => vec![None],
    }
}

/// Enumerates the legal actions for the character whose turn it is.
///
/// Returns an empty set outside the action phase or when the queue pointer
/// does not rest on a living character.
pub fn legal_actions(registry: &Registry, state: &MatchState) -> Vec<Action> {
    if state.phase != Phase::Action {
        return Vec::new();
    }
    let Some(&actor) = state.action_queue.get(state.current_actor) else {
        return Vec::new();
    };
    let character = &state.characters[actor];
    if !character.is_alive {
        return Vec::new();
    }

    let mut actions = Vec::new();

    for enemy in state.enemies(actor) {
        if state.characters[enemy].is_alive {
            actions.push(Action::Attack { actor, target: enemy });
        }
    }

    if let Some(def) = registry.get(&character.def_id) {
        for (spell_idx, spell) in def.spells.iter().enumerate() {
            let cost = if character.free_next_spell { 0 } else { spell.mana_cost };
            if character.mana < cost {
                continue;
            }
            if matches!(spell.special, Some(SpellSpecial::OncePerGame))
                && character.ultimate_used
            {
                continue;
            }
            for target in targets_for(state, actor, spell.target) {
                actions.push(Action::Spell { actor, spell: spell_idx, target });
            }
        }

        for (item_idx, item) in def.items.iter().enumerate() {
            if character.items_used[item_idx] {
                continue;
            }
            for target in targets_for(state, actor, item.target) {
                actions.push(Action::Item { actor, item: item_idx, target });
            }
        }
    }

    actions.push(Action::Defend { actor });
    actions.push(Action::DoNothing { actor });
    actions
}

/// Picks one legal action at random, or `None` when no action is available.
pub fn random_action(
    registry: &Registry,
    state: &MatchState,
    rng: &mut impl Rng,
) -> Option<Action> {
    let actions = legal_actions(registry, state);
    if actions.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..actions.len());
    Some(actions[idx])
}
