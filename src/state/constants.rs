//! Balance constants shared by the resolver and turn manager.

/// Maximum (and starting) hit points for every character.
pub const BASE_HP: u32 = 50;

/// Mana every character starts the match with.
pub const STARTING_MANA: u32 = 10;

/// Mana cap; all mana gains clamp to this.
pub const MAX_MANA: u32 = 20;

/// Damage of a basic attack before modifiers.
pub const BASE_ATTACK_DAMAGE: u32 = 14;

/// Mana granted to the attacker on every attack, dodged or not.
pub const ATTACK_MANA_GAIN: u32 = 1;

/// Mana granted by the Defend action.
pub const DEFEND_MANA_GAIN: u32 = 1;

/// Damage reduction percentage of the Defend action's status.
pub const DEFEND_REDUCTION_PCT: u32 = 50;

/// HP a character survives with when its armed revival passive triggers.
pub const REVIVE_HP: u32 = 20;

/// Mana rewards for passing a coding problem, by difficulty.
pub const EASY_MANA_REWARD: u32 = 3;
pub const MEDIUM_MANA_REWARD: u32 = 4;
pub const HARD_MANA_REWARD: u32 = 5;
