//! Compact action notation.
//!
//! A single-line text form for actions, used by the `act` and `actions`
//! commands of the CLI driver: a one-letter kind tag followed by indices.
//!
//! - `A <actor> <target>` — attack
//! - `S <actor> <spell> [target]` — cast spell
//! - `I <actor> <item> [target]` — use item
//! - `D <actor>` — defend
//! - `N <actor>` — do nothing

use thiserror::Error;

use crate::state::action::Action;

/// Errors that can occur when parsing action notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty input")]
    EmptyInput,

    #[error("unknown action tag '{0}'")]
    UnknownTag(String),

    #[error("missing {0}")]
    MissingField(&'static str),

    #[error("invalid index '{0}'")]
    InvalidIndex(String),
}

/// Formats an action in compact notation.
pub fn format_action(action: &Action) -> String {
    match *action {
        Action::Attack { actor, target } => format!("A {} {}", actor, target),
        Action::Spell { actor, spell, target: Some(t) } => format!("S {} {} {}", actor, spell, t),
        Action::Spell { actor, spell, target: None } => format!("S {} {}", actor, spell),
        Action::Item { actor, item, target: Some(t) } => format!("I {} {} {}", actor, item, t),
        Action::Item { actor, item, target: None } => format!("I {} {}", actor, item),
        Action::Defend { actor } => format!("D {}", actor),
        Action::DoNothing { actor } => format!("N {}", actor),
    }
}

fn index(tokens: &[&str], pos: usize, what: &'static str) -> Result<usize, NotationError> {
    let tok = tokens.get(pos).ok_or(NotationError::MissingField(what))?;
    tok.parse::<usize>()
        .map_err(|_| NotationError::InvalidIndex((*tok).to_string()))
}

fn optional_index(tokens: &[&str], pos: usize) -> Result<Option<usize>, NotationError> {
    match tokens.get(pos) {
        None => Ok(None),
        Some(tok) => tok
            .parse::<usize>()
            .map(Some)
            .map_err(|_| NotationError::InvalidIndex((*tok).to_string())),
    }
}

/// Parses a single action from compact notation.
pub fn parse_action(s: &str) -> Result<Action, NotationError> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    let Some(&tag) = tokens.first() else {
        return Err(NotationError::EmptyInput);
    };

    match tag {
        "A" => Ok(Action::Attack {
            actor: index(&tokens, 1, "actor index")?,
            target: index(&tokens, 2, "target index")?,
        }),
        "S" => Ok(Action::Spell {
            actor: index(&tokens, 1, "actor index")?,
            spell: index(&tokens, 2, "spell index")?,
            target: optional_index(&tokens, 3)?,
        }),
        "I" => Ok(Action::Item {
            actor: index(&tokens, 1, "actor index")?,
            item: index(&tokens, 2, "item index")?,
            target: optional_index(&tokens, 3)?,
        }),
        "D" => Ok(Action::Defend { actor: index(&tokens, 1, "actor index")? }),
        "N" => Ok(Action::DoNothing { actor: index(&tokens, 1, "actor index")? }),
        other => Err(NotationError::UnknownTag(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_every_variant() {
        let actions = [
            Action::Attack { actor: 0, target: 2 },
            Action::Spell { actor: 1, spell: 3, target: Some(2) },
            Action::Spell { actor: 2, spell: 0, target: None },
            Action::Item { actor: 3, item: 1, target: Some(0) },
            Action::Item { actor: 0, item: 0, target: None },
            Action::Defend { actor: 1 },
            Action::DoNothing { actor: 3 },
        ];
        for action in actions {
            let text = format_action(&action);
            assert_eq!(parse_action(&text), Ok(action), "{}", text);
        }
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_action(""), Err(NotationError::EmptyInput));
        assert_eq!(
            parse_action("X 0"),
            Err(NotationError::UnknownTag("X".to_string()))
        );
        assert_eq!(
            parse_action("A 0"),
            Err(NotationError::MissingField("target index"))
        );
        assert_eq!(
            parse_action("A 0 banana"),
            Err(NotationError::InvalidIndex("banana".to_string()))
        );
    }
}
