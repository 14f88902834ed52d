//! Character definitions and the registry that supplies them.
//!
//! Definitions are immutable data consumed by the resolver: each character
//! carries four spells and two items, and each spell/item declares its
//! numbers plus an optional status application and an optional special
//! behavior drawn from a closed set of variants. The registry is injected
//! into every operation that needs it, never held as global state, so tests
//! can run against synthetic rosters.

pub mod roster;

use serde::{Deserialize, Serialize};

use crate::state::status::StatusEffectType;

/// Who a spell, item, or attack is allowed to hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetType {
    /// One living enemy, chosen by the actor.
    EnemySingle,
    /// One character on the actor's side, chosen by the actor.
    AllySingle,
    /// Both characters on the opposing side.
    BothEnemies,
    /// Both characters on the actor's side, the actor included.
    BothAllies,
    /// The actor only.
    SelfOnly,
}

/// A status effect a spell applies to its target on hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusApplication {
    pub effect: StatusEffectType,
    /// Duration in turns, or [`crate::state::UNTIL_CONSUMED`].
    pub turns: i32,
    pub value: u32,
}

/// Bespoke spell behaviors, dispatched after damage, healing, and status
/// application have resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpellSpecial {
    /// Target's next attack deals `percent` percent reduced damage.
    WeakenAttack { percent: u32 },
    /// The caster dodges the next incoming hit.
    SelfDodge,
    /// The caster's next spell costs no mana.
    FreeNextSpell,
    /// The caster's next damaging spell deals `amount` extra damage.
    NextSpellBonus { amount: u32 },
    /// The caster's next attack deals `amount` extra damage.
    NextAttackBonus { amount: u32 },
    /// The spell can be cast at most once per match.
    OncePerGame,
    /// The target bleeds for `damage` at the end of their next turn.
    LingeringCurse { damage: u32 },
    /// Both of the caster's characters gain a `percent` spell shield.
    ShieldAllies { percent: u32 },
    /// The caster reduces all incoming damage by `percent` until hit.
    GuardSelf { percent: u32 },
}

/// Bespoke item behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemSpecial {
    /// Arms a passive: the first fatal blow after use leaves the character
    /// at the fixed revival HP instead of dying. Fires once per match.
    SurviveFatal,
    /// Both of the user's characters gain a `percent` damage-reduction guard.
    GuardAllies { percent: u32 },
    /// The user additionally gains a `percent` spell shield.
    AlsoShieldSelf { percent: u32 },
}

/// One castable spell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub id: String,
    pub name: String,
    pub mana_cost: u32,
    pub damage: u32,
    pub healing: u32,
    pub target: TargetType,
    pub status: Option<StatusApplication>,
    pub special: Option<SpellSpecial>,
    pub description: String,
}

/// The declared effect of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemEffect {
    pub healing: Option<u32>,
    pub mana_gain: Option<u32>,
    pub mana_loss: Option<u32>,
    pub apply_status: Option<StatusEffectType>,
    pub special: Option<ItemSpecial>,
}

/// One single-use item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub target: TargetType,
    pub effect: ItemEffect,
    pub description: String,
}

/// An immutable character definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDef {
    pub id: String,
    pub name: String,
    pub role: String,
    pub spells: [Spell; 4],
    pub items: [Item; 2],
}

impl CharacterDef {
    /// The item slot carrying the revival passive, if this character has one.
    pub fn revival_slot(&self) -> Option<usize> {
        self.items
            .iter()
            .position(|item| matches!(item.effect.special, Some(ItemSpecial::SurviveFatal)))
    }
}

/// Read-only lookup table of character definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    defs: Vec<CharacterDef>,
}

impl Registry {
    /// Builds a registry from arbitrary definitions (synthetic rosters in
    /// tests, or data loaded from elsewhere).
    pub fn new(defs: Vec<CharacterDef>) -> Self {
        Registry { defs }
    }

    /// The standard six-character roster.
    pub fn standard() -> Self {
        Registry { defs: roster::standard_roster() }
    }

    /// Looks up a definition by id.
    pub fn get(&self, id: &str) -> Option<&CharacterDef> {
        self.defs.iter().find(|d| d.id == id)
    }

    /// All definitions, in roster order.
    pub fn defs(&self) -> &[CharacterDef] {
        &self.defs
    }

    /// All character ids, in roster order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.defs.iter().map(|d| d.id.as_str())
    }
}
