//! Per-combatant state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::constants::{BASE_HP, MAX_MANA, STARTING_MANA};
use super::status::{StatusEffect, StatusEffectType};

/// Mutable state of one combatant.
///
/// The immutable definition (name, spells, items) lives in the injected
/// registry and is referenced by `def_id`. `is_alive` is derived from `hp`
/// and must be recomputed after every HP mutation; the clamp helpers below
/// do this for callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterState {
    /// Registry id of the character definition.
    pub def_id: String,
    /// Owning player, 0 or 1.
    pub owner: usize,
    pub hp: u32,
    pub mana: u32,
    /// Active status effects, at most one per type.
    pub effects: BTreeMap<StatusEffectType, StatusEffect>,
    /// One flag per item slot; set permanently when the item is used.
    pub items_used: [bool; 2],
    pub is_alive: bool,
    /// Set when the character's once-per-game spell has been cast.
    pub ultimate_used: bool,
    /// Set when the armed revival passive has already fired.
    pub revive_spent: bool,
    /// The next spell cast costs no mana; consumed on cast.
    pub free_next_spell: bool,
    /// Extra damage added to the next damaging spell; consumed on cast.
    pub next_spell_bonus: Option<u32>,
    /// Extra damage added to the next attack; consumed on attack.
    pub next_attack_bonus: Option<u32>,
}

impl CharacterState {
    /// Creates a fresh combatant at full HP and starting mana.
    pub fn new(def_id: &str, owner: usize) -> Self {
        CharacterState {
            def_id: def_id.to_string(),
            owner,
            hp: BASE_HP,
            mana: STARTING_MANA,
            effects: BTreeMap::new(),
            items_used: [false, false],
            is_alive: true,
            ultimate_used: false,
            revive_spent: false,
            free_next_spell: false,
            next_spell_bonus: None,
            next_attack_bonus: None,
        }
    }

    /// Adds HP, clamped to `BASE_HP`, and recomputes `is_alive`.
    pub fn heal(&mut self, amount: u32) {
        self.hp = (self.hp + amount).min(BASE_HP);
        self.is_alive = self.hp > 0;
    }

    /// Subtracts HP, clamped to zero, and recomputes `is_alive`.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
        self.is_alive = self.hp > 0;
    }

    /// Adds mana, clamped to `MAX_MANA`.
    pub fn gain_mana(&mut self, amount: u32) {
        self.mana = (self.mana + amount).min(MAX_MANA);
    }

    /// Subtracts mana, clamped to zero.
    pub fn lose_mana(&mut self, amount: u32) {
        self.mana = self.mana.saturating_sub(amount);
    }
}
