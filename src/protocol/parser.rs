//! CLI command parser.
//!
//! Parses the line commands of the driver loop into structured `Command`
//! variants that the session dispatches on. Unknown or malformed commands
//! parse to `None` and are ignored by the loop.

use crate::state::match_state::{CodingResult, Difficulty};

/// A parsed driver command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a match: `new <p1> <p2> <id> <id> <id> <id>`.
    New { p1: String, p2: String, ids: [String; 4] },

    /// List the registry's characters.
    Roster,

    /// Print the current match state.
    State,

    /// List legal actions for the current actor in compact notation.
    Actions,

    /// Resolve one action given in compact notation: `act A 0 2`.
    Act { notation: String },

    /// End the coding phase: `endcoding <spec> <spec>` where each spec is
    /// `easy+`, `medium-`, `hard+`, ... or `-` for no submission.
    EndCoding { results: [Option<CodingResult>; 2] },

    /// Advance past the current actor.
    Advance,

    /// Print the match state as one-line JSON.
    Save,

    /// Restore a match from one-line JSON: `load <json>`.
    Load { json: String },

    /// Play random matches: `selfplay <games> [seed]`.
    SelfPlay { games: usize, seed: u64 },

    /// Terminate the driver.
    Quit,
}

/// Parses a judge-result spec: difficulty name followed by `+` (passed) or
/// `-` (failed), or a lone `-` for an absent submission.
fn parse_result_spec(tok: &str) -> Option<Option<CodingResult>> {
    if tok == "-" {
        return Some(None);
    }
    let (name, passed) = if let Some(name) = tok.strip_suffix('+') {
        (name, true)
    } else if let Some(name) = tok.strip_suffix('-') {
        (name, false)
    } else {
        return None;
    };
    let difficulty = match name {
        "easy" => Difficulty::Easy,
        "medium" => Difficulty::Medium,
        "hard" => Difficulty::Hard,
        _ => return None,
    };
    Some(Some(CodingResult {
        difficulty,
        passed,
        tests_total: 0,
        tests_passed: 0,
    }))
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines and anything unrecognized.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    match tokens[0] {
        "new" => {
            if tokens.len() != 7 {
                return None;
            }
            Some(Command::New {
                p1: tokens[1].to_string(),
                p2: tokens[2].to_string(),
                ids: [
                    tokens[3].to_string(),
                    tokens[4].to_string(),
                    tokens[5].to_string(),
                    tokens[6].to_string(),
                ],
            })
        }
        "roster" => Some(Command::Roster),
        "state" => Some(Command::State),
        "actions" => Some(Command::Actions),
        "act" => {
            if tokens.len() < 2 {
                return None;
            }
            Some(Command::Act { notation: tokens[1..].join(" ") })
        }
        "endcoding" => {
            if tokens.len() != 3 {
                return None;
            }
            let first = parse_result_spec(tokens[1])?;
            let second = parse_result_spec(tokens[2])?;
            Some(Command::EndCoding { results: [first, second] })
        }
        "advance" => Some(Command::Advance),
        "save" => Some(Command::Save),
        "load" => {
            let json = trimmed.strip_prefix("load")?.trim();
            if json.is_empty() {
                return None;
            }
            Some(Command::Load { json: json.to_string() })
        }
        "selfplay" => {
            let games = tokens.get(1)?.parse().ok()?;
            let seed = match tokens.get(2) {
                Some(tok) => tok.parse().ok()?,
                None => 0,
            };
            Some(Command::SelfPlay { games, seed })
        }
        "quit" => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_new_with_exact_arity() {
        let cmd = parse_command("new Alice Bob harry hermione voldemort bellatrix").unwrap();
        assert_eq!(
            cmd,
            Command::New {
                p1: "Alice".to_string(),
                p2: "Bob".to_string(),
                ids: [
                    "harry".to_string(),
                    "hermione".to_string(),
                    "voldemort".to_string(),
                    "bellatrix".to_string(),
                ],
            }
        );
        assert_eq!(parse_command("new Alice Bob harry"), None);
    }

    #[test]
    fn parses_act_with_notation_remainder() {
        assert_eq!(
            parse_command("act S 0 1 2"),
            Some(Command::Act { notation: "S 0 1 2".to_string() })
        );
        assert_eq!(parse_command("act"), None);
    }

    #[test]
    fn parses_endcoding_result_specs() {
        let cmd = parse_command("endcoding easy+ -").unwrap();
        let Command::EndCoding { results } = cmd else {
            panic!("wrong variant");
        };
        let first = results[0].unwrap();
        assert_eq!(first.difficulty, Difficulty::Easy);
        assert!(first.passed);
        assert_eq!(results[1], None);

        let cmd = parse_command("endcoding hard- medium+").unwrap();
        let Command::EndCoding { results } = cmd else {
            panic!("wrong variant");
        };
        assert!(!results[0].unwrap().passed);
        assert_eq!(results[1].unwrap().difficulty, Difficulty::Medium);

        assert_eq!(parse_command("endcoding bogus+ -"), None);
    }

    #[test]
    fn parses_selfplay_with_optional_seed() {
        assert_eq!(
            parse_command("selfplay 5"),
            Some(Command::SelfPlay { games: 5, seed: 0 })
        );
        assert_eq!(
            parse_command("selfplay 5 99"),
            Some(Command::SelfPlay { games: 5, seed: 99 })
        );
        assert_eq!(parse_command("selfplay"), None);
    }

    #[test]
    fn unknown_and_empty_lines_are_ignored() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("frobnicate 1 2"), None);
    }
}
