//! Player actions submitted to the resolver.

use serde::{Deserialize, Serialize};

/// A submitted action for the character whose turn it is.
///
/// Indices are character indices into `MatchState::characters`. A target is
/// only carried by the variants that aim at a single character; spells and
/// items whose target type covers a whole side resolve their targets from
/// the match state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Attack { actor: usize, target: usize },
    Spell { actor: usize, spell: usize, target: Option<usize> },
    Item { actor: usize, item: usize, target: Option<usize> },
    Defend { actor: usize },
    DoNothing { actor: usize },
}

impl Action {
    /// The character performing this action.
    pub fn actor(&self) -> usize {
        match *self {
            Action::Attack { actor, .. }
            | Action::Spell { actor, .. }
            | Action::Item { actor, .. }
            | Action::Defend { actor }
            | Action::DoNothing { actor } => actor,
        }
    }

    /// The flat kind tag recorded in log entries.
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Attack { .. } => ActionKind::Attack,
            Action::Spell { .. } => ActionKind::Spell,
            Action::Item { .. } => ActionKind::Item,
            Action::Defend { .. } => ActionKind::Defend,
            Action::DoNothing { .. } => ActionKind::DoNothing,
        }
    }
}

/// Action discriminant stored on log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    Attack,
    Spell,
    Item,
    Defend,
    DoNothing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actor_is_extracted_from_every_variant() {
        let actions = [
            Action::Attack { actor: 0, target: 2 },
            Action::Spell { actor: 1, spell: 0, target: None },
            Action::Item { actor: 2, item: 1, target: Some(3) },
            Action::Defend { actor: 3 },
            Action::DoNothing { actor: 1 },
        ];
        let actors: Vec<usize> = actions.iter().map(Action::actor).collect();
        assert_eq!(actors, vec![0, 1, 2, 3, 1]);
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Action::Defend { actor: 0 }.kind(), ActionKind::Defend);
        assert_eq!(
            Action::Spell { actor: 0, spell: 1, target: Some(2) }.kind(),
            ActionKind::Spell
        );
    }
}
