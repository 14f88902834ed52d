//! The standard six-character roster.

use crate::state::status::StatusEffectType;

use super::{
    CharacterDef, Item, ItemEffect, ItemSpecial, Spell, SpellSpecial, StatusApplication,
    TargetType,
};

fn spell(
    id: &str,
    name: &str,
    mana_cost: u32,
    damage: u32,
    healing: u32,
    target: TargetType,
    description: &str,
) -> Spell {
    Spell {
        id: id.to_string(),
        name: name.to_string(),
        mana_cost,
        damage,
        healing,
        target,
        status: None,
        special: None,
        description: description.to_string(),
    }
}

fn item(id: &str, name: &str, target: TargetType, effect: ItemEffect, description: &str) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        target,
        effect,
        description: description.to_string(),
    }
}

fn harry() -> CharacterDef {
    CharacterDef {
        id: "harry".to_string(),
        name: "Harry Potter".to_string(),
        role: "Balanced Duelist".to_string(),
        spells: [
            Spell {
                special: Some(SpellSpecial::WeakenAttack { percent: 50 }),
                ..spell(
                    "harry_expelliarmus",
                    "Expelliarmus",
                    4,
                    14,
                    0,
                    TargetType::EnemySingle,
                    "Disarms target. Target's next Attack deals 50% reduced damage.",
                )
            },
            spell(
                "harry_stupefy",
                "Stupefy",
                6,
                20,
                0,
                TargetType::EnemySingle,
                "A powerful stunning spell dealing 20 damage to a single target.",
            ),
            Spell {
                special: Some(SpellSpecial::GuardSelf { percent: 75 }),
                ..spell(
                    "harry_protego",
                    "Protego",
                    5,
                    0,
                    0,
                    TargetType::SelfOnly,
                    "Reduce next incoming attack by 75%.",
                )
            },
            Spell {
                special: Some(SpellSpecial::SelfDodge),
                ..spell(
                    "harry_expecto_patronum",
                    "Expecto Patronum",
                    8,
                    12,
                    0,
                    TargetType::BothEnemies,
                    "Deals 12 damage to both enemies. Caster gains Dodge Next.",
                )
            },
        ],
        items: [
            item(
                "harry_invisibility_cloak",
                "Invisibility Cloak",
                TargetType::SelfOnly,
                ItemEffect {
                    apply_status: Some(StatusEffectType::DodgeNext),
                    ..ItemEffect::default()
                },
                "Gain Dodge Next.",
            ),
            item(
                "harry_golden_snitch_charm",
                "Golden Snitch Charm",
                TargetType::AllySingle,
                ItemEffect { healing: Some(20), ..ItemEffect::default() },
                "Heal one ally for 20 HP.",
            ),
        ],
    }
}

fn hermione() -> CharacterDef {
    CharacterDef {
        id: "hermione".to_string(),
        name: "Hermione Granger".to_string(),
        role: "Tactical Support / Control".to_string(),
        spells: [
            Spell {
                status: Some(StatusApplication {
                    effect: StatusEffectType::Stunned,
                    turns: 1,
                    value: 0,
                }),
                ..spell(
                    "hermione_petrificus_totalus",
                    "Petrificus Totalus",
                    6,
                    10,
                    0,
                    TargetType::EnemySingle,
                    "Deals 10 damage and stuns target for 1 turn.",
                )
            },
            spell(
                "hermione_diffindo",
                "Diffindo",
                5,
                16,
                0,
                TargetType::EnemySingle,
                "A cutting spell dealing 16 damage to a single target.",
            ),
            spell(
                "hermione_episkey",
                "Episkey",
                5,
                0,
                18,
                TargetType::AllySingle,
                "Heal one ally for 18 HP.",
            ),
            spell(
                "hermione_incendio",
                "Incendio",
                7,
                14,
                0,
                TargetType::BothEnemies,
                "Deals 14 damage to both enemies.",
            ),
        ],
        items: [
            item(
                "hermione_time_turner",
                "Time-Turner",
                TargetType::BothAllies,
                ItemEffect { mana_gain: Some(4), ..ItemEffect::default() },
                "Both allies gain +4 mana.",
            ),
            item(
                "hermione_beaded_bag",
                "Beaded Bag",
                TargetType::BothAllies,
                ItemEffect { healing: Some(10), ..ItemEffect::default() },
                "Heal both allies 10 HP.",
            ),
        ],
    }
}

fn ron() -> CharacterDef {
    CharacterDef {
        id: "ron".to_string(),
        name: "Ron Weasley".to_string(),
        role: "Risk / Burst Fighter".to_string(),
        spells: [
            spell(
                "ron_wingardium_leviosa",
                "Wingardium Leviosa",
                4,
                12,
                0,
                TargetType::EnemySingle,
                "Levitates and slams the target for 12 damage.",
            ),
            spell(
                "ron_slugulus_eructo",
                "Slugulus Eructo",
                7,
                22,
                0,
                TargetType::EnemySingle,
                "A disgusting but powerful slug hex dealing 22 damage.",
            ),
            Spell {
                special: Some(SpellSpecial::NextAttackBonus { amount: 10 }),
                ..spell(
                    "ron_leprechaun_luck",
                    "Leprechaun Luck",
                    6,
                    0,
                    0,
                    TargetType::SelfOnly,
                    "Next Attack deals +10 bonus damage.",
                )
            },
            Spell {
                special: Some(SpellSpecial::SelfDodge),
                ..spell(
                    "ron_chasers_feint",
                    "Chaser's Feint",
                    5,
                    0,
                    8,
                    TargetType::SelfOnly,
                    "Gain Dodge Next and heal self 8 HP.",
                )
            },
        ],
        items: [
            item(
                "ron_deluminator",
                "Deluminator",
                TargetType::BothAllies,
                ItemEffect {
                    special: Some(ItemSpecial::GuardAllies { percent: 50 }),
                    ..ItemEffect::default()
                },
                "Both allies gain Defend.",
            ),
            item(
                "ron_chocolate_frog",
                "Chocolate Frog",
                TargetType::SelfOnly,
                ItemEffect { healing: Some(25), ..ItemEffect::default() },
                "Heal self 25 HP.",
            ),
        ],
    }
}

fn voldemort() -> CharacterDef {
    CharacterDef {
        id: "voldemort".to_string(),
        name: "Lord Voldemort".to_string(),
        role: "High Burst Dark DPS".to_string(),
        spells: [
            Spell {
                special: Some(SpellSpecial::OncePerGame),
                ..spell(
                    "voldemort_avada_kedavra",
                    "Avada Kedavra",
                    10,
                    40,
                    0,
                    TargetType::EnemySingle,
                    "Deals 40 damage. Can only be used once per game.",
                )
            },
            Spell {
                special: Some(SpellSpecial::LingeringCurse { damage: 8 }),
                ..spell(
                    "voldemort_crucio",
                    "Crucio",
                    8,
                    24,
                    0,
                    TargetType::EnemySingle,
                    "Deals 24 damage and 8 lingering damage at the end of the target's next turn.",
                )
            },
            spell(
                "voldemort_fiendfyre",
                "Fiendfyre",
                9,
                20,
                0,
                TargetType::BothEnemies,
                "Cursed fire dealing 20 damage to both enemies.",
            ),
            Spell {
                special: Some(SpellSpecial::FreeNextSpell),
                ..spell(
                    "voldemort_dark_empowerment",
                    "Dark Empowerment",
                    6,
                    0,
                    0,
                    TargetType::SelfOnly,
                    "Next spell costs 0 mana.",
                )
            },
        ],
        items: [
            item(
                "voldemort_horcrux_fragment",
                "Horcrux Fragment",
                TargetType::SelfOnly,
                ItemEffect {
                    special: Some(ItemSpecial::SurviveFatal),
                    ..ItemEffect::default()
                },
                "If fatal damage would occur, survive with 20 HP. One-time use.",
            ),
            item(
                "voldemort_dark_mark",
                "Dark Mark",
                TargetType::BothEnemies,
                ItemEffect { mana_loss: Some(3), ..ItemEffect::default() },
                "Both enemies lose 3 mana.",
            ),
        ],
    }
}

fn hagrid() -> CharacterDef {
    CharacterDef {
        id: "hagrid".to_string(),
        name: "Rubeus Hagrid".to_string(),
        role: "Tank / Bruiser".to_string(),
        spells: [
            spell(
                "hagrid_brute_swing",
                "Brute Swing",
                5,
                18,
                0,
                TargetType::EnemySingle,
                "A heavy swing dealing 18 damage.",
            ),
            Spell {
                special: Some(SpellSpecial::ShieldAllies { percent: 50 }),
                ..spell(
                    "hagrid_guardian_of_the_grounds",
                    "Guardian of the Grounds",
                    6,
                    0,
                    0,
                    TargetType::BothAllies,
                    "Apply Shield Spell (50% spell damage reduction) to both allies.",
                )
            },
            spell(
                "hagrid_fangs_loyalty",
                "Fang's Loyalty",
                5,
                0,
                15,
                TargetType::SelfOnly,
                "Heal self 15 HP.",
            ),
            spell(
                "hagrid_creature_stampede",
                "Creature Stampede",
                8,
                15,
                0,
                TargetType::BothEnemies,
                "Creatures stampede dealing 15 damage to both enemies.",
            ),
        ],
        items: [
            item(
                "hagrid_dragon_hide_coat",
                "Dragon Hide Coat",
                TargetType::SelfOnly,
                ItemEffect {
                    apply_status: Some(StatusEffectType::Defending),
                    special: Some(ItemSpecial::AlsoShieldSelf { percent: 50 }),
                    ..ItemEffect::default()
                },
                "Gain Defend and reduce next spell damage by 50%.",
            ),
            item(
                "hagrid_giants_endurance",
                "Giant's Endurance",
                TargetType::SelfOnly,
                ItemEffect { healing: Some(30), ..ItemEffect::default() },
                "Heal self 30 HP.",
            ),
        ],
    }
}

fn bellatrix() -> CharacterDef {
    CharacterDef {
        id: "bellatrix".to_string(),
        name: "Bellatrix Lestrange".to_string(),
        role: "Aggressive Chaos Mage".to_string(),
        spells: [
            spell(
                "bellatrix_dark_whiplash",
                "Dark Whiplash",
                5,
                18,
                0,
                TargetType::EnemySingle,
                "A vicious whip of dark energy dealing 18 damage.",
            ),
            Spell {
                status: Some(StatusApplication {
                    effect: StatusEffectType::Bleed,
                    turns: 2,
                    value: 5,
                }),
                ..spell(
                    "bellatrix_cruciatus_fury",
                    "Cruciatus Fury",
                    8,
                    22,
                    0,
                    TargetType::EnemySingle,
                    "Deals 22 damage and applies Bleed (5 damage for 2 turns).",
                )
            },
            spell(
                "bellatrix_maniacal_burst",
                "Maniacal Burst",
                7,
                16,
                0,
                TargetType::BothEnemies,
                "An explosive burst dealing 16 damage to both enemies.",
            ),
            Spell {
                special: Some(SpellSpecial::NextSpellBonus { amount: 10 }),
                ..spell(
                    "bellatrix_unhinged_power",
                    "Unhinged Power",
                    6,
                    0,
                    0,
                    TargetType::SelfOnly,
                    "Next spell deals +10 damage.",
                )
            },
        ],
        items: [
            item(
                "bellatrix_obsessive_devotion",
                "Obsessive Devotion",
                TargetType::SelfOnly,
                ItemEffect { mana_gain: Some(5), ..ItemEffect::default() },
                "Gain +5 mana.",
            ),
            item(
                "bellatrix_torturers_focus",
                "Torturer's Focus",
                TargetType::EnemySingle,
                ItemEffect { mana_loss: Some(5), ..ItemEffect::default() },
                "Target enemy loses 5 mana.",
            ),
        ],
    }
}

/// Builds the full standard roster, in selection-screen order.
pub fn standard_roster() -> Vec<CharacterDef> {
    vec![harry(), hermione(), ron(), voldemort(), hagrid(), bellatrix()]
}
