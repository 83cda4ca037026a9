//! Player command model and the table-driven line parser.

use std::fmt;

use crate::types::Direction;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Look,
    Examine,
    Inventory,
    Take(Option<String>),
    Drop(Option<String>),
    Map,
    ToggleVerbose,
    Save,
    Restart,
    Quit,
    Help,
    Xyzzy,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    UnknownVerb(String),
    MissingDirection(String),
    UnexpectedArgument(String),
    DoubledWord(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Nothing entered. Try 'help'."),
            Self::UnknownVerb(verb) => write!(f, "I don't know how to '{verb}'."),
            Self::MissingDirection(verb) => write!(f, "{verb} which way?"),
            Self::UnexpectedArgument(verb) => write!(f, "'{verb}' takes no argument."),
            Self::DoubledWord(word) => write!(f, "You can't {word} the {word}."),
        }
    }
}

const DIRECTION_WORDS: [(&str, Direction); 8] = [
    ("north", Direction::North),
    ("n", Direction::North),
    ("south", Direction::South),
    ("s", Direction::South),
    ("east", Direction::East),
    ("e", Direction::East),
    ("west", Direction::West),
    ("w", Direction::West),
];

/// Verbs that walk in a named direction: `go north`, `head e`, ...
const WALK_VERBS: [&str; 4] = ["go", "walk", "head", "move"];

const TAKE_VERBS: [&str; 3] = ["take", "get", "grab"];

fn direction_word(word: &str) -> Option<Direction> {
    DIRECTION_WORDS
        .iter()
        .find(|(candidate, _)| *candidate == word)
        .map(|&(_, direction)| direction)
}

/// Parse one input line. Matching is case-insensitive; the first word is the
/// verb, the remainder (if any) its argument.
pub fn parse(input: &str) -> Result<Command, ParseError> {
    let lowered = input.trim().to_lowercase();
    let mut words = lowered.split_whitespace();
    let Some(verb) = words.next() else {
        return Err(ParseError::Empty);
    };
    let rest: Vec<&str> = words.collect();
    let argument = if rest.is_empty() { None } else { Some(rest.join(" ")) };

    if argument.as_deref() == Some(verb) {
        return Err(ParseError::DoubledWord(verb.to_string()));
    }

    if let Some(direction) = direction_word(verb) {
        return match argument {
            None => Ok(Command::Move(direction)),
            Some(_) => Err(ParseError::UnexpectedArgument(verb.to_string())),
        };
    }

    if WALK_VERBS.contains(&verb) {
        let Some(word) = argument else {
            return Err(ParseError::MissingDirection(verb.to_string()));
        };
        return match direction_word(&word) {
            Some(direction) => Ok(Command::Move(direction)),
            None => Err(ParseError::MissingDirection(verb.to_string())),
        };
    }

    if TAKE_VERBS.contains(&verb) {
        return Ok(Command::Take(argument));
    }
    if verb == "drop" {
        return Ok(Command::Drop(argument));
    }

    let command = match verb {
        "look" | "l" => Command::Look,
        "examine" | "x" | "search" => Command::Examine,
        "inventory" | "inv" | "i" => Command::Inventory,
        "map" | "draw" => Command::Map,
        "verbose" => Command::ToggleVerbose,
        "save" => Command::Save,
        "restart" | "new" => Command::Restart,
        "quit" | "exit" | "q" => Command::Quit,
        "help" | "?" => Command::Help,
        "xyzzy" => Command::Xyzzy,
        unknown => return Err(ParseError::UnknownVerb(unknown.to_string())),
    };

    match argument {
        None => Ok(command),
        Some(_) => Err(ParseError::UnexpectedArgument(verb.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_direction_alias_moves() {
        for (word, direction) in DIRECTION_WORDS {
            assert_eq!(parse(word), Ok(Command::Move(direction)));
        }
    }

    #[test]
    fn walk_verbs_require_a_direction() {
        assert_eq!(parse("go north"), Ok(Command::Move(Direction::North)));
        assert_eq!(parse("head e"), Ok(Command::Move(Direction::East)));
        assert_eq!(parse("walk"), Err(ParseError::MissingDirection("walk".to_string())));
        assert_eq!(parse("go sideways"), Err(ParseError::MissingDirection("go".to_string())));
    }

    #[test]
    fn take_and_drop_carry_optional_arguments() {
        assert_eq!(parse("take"), Ok(Command::Take(None)));
        assert_eq!(parse("grab rusty sword"), Ok(Command::Take(Some("rusty sword".to_string()))));
        assert_eq!(parse("drop"), Ok(Command::Drop(None)));
        assert_eq!(parse("drop lantern"), Ok(Command::Drop(Some("lantern".to_string()))));
    }

    #[test]
    fn bare_verbs_reject_arguments() {
        assert_eq!(parse("look"), Ok(Command::Look));
        assert_eq!(parse("look around"), Err(ParseError::UnexpectedArgument("look".to_string())));
        assert_eq!(parse("north by northwest"), Err(ParseError::UnexpectedArgument("north".to_string())));
    }

    #[test]
    fn input_is_case_and_whitespace_insensitive() {
        assert_eq!(parse("  LOOK  "), Ok(Command::Look));
        assert_eq!(parse("Take  Rusty   Sword"), Ok(Command::Take(Some("rusty sword".to_string()))));
    }

    #[test]
    fn doubled_words_get_the_twice_message() {
        let error = parse("take take").expect_err("doubled word is an error");
        assert_eq!(error, ParseError::DoubledWord("take".to_string()));
        assert_eq!(error.to_string(), "You can't take the take.");
    }

    #[test]
    fn empty_and_unknown_input_have_distinct_errors() {
        assert_eq!(parse("   "), Err(ParseError::Empty));
        assert_eq!(parse("dance"), Err(ParseError::UnknownVerb("dance".to_string())));
    }

    #[test]
    fn meta_verbs_parse() {
        assert_eq!(parse("save"), Ok(Command::Save));
        assert_eq!(parse("restart"), Ok(Command::Restart));
        assert_eq!(parse("q"), Ok(Command::Quit));
        assert_eq!(parse("help"), Ok(Command::Help));
        assert_eq!(parse("xyzzy"), Ok(Command::Xyzzy));
        assert_eq!(parse("verbose"), Ok(Command::ToggleVerbose));
    }

    #[test]
    fn every_alias_reaches_the_same_command() {
        for (line, expected) in [
            ("l", Command::Look),
            ("x", Command::Examine),
            ("search", Command::Examine),
            ("inv", Command::Inventory),
            ("draw", Command::Map),
            ("exit", Command::Quit),
            ("new", Command::Restart),
            ("?", Command::Help),
            ("get lantern", Command::Take(Some("lantern".to_string()))),
            ("move w", Command::Move(Direction::West)),
        ] {
            assert_eq!(parse(line), Ok(expected), "alias '{line}'");
        }
    }
}
