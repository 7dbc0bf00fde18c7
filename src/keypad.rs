use crate::editor::Symbol;
use crate::error::CommandError;
use crate::field::Field;

/// Physical key arrangement, top row first.
pub const KEYPAD_LAYOUT: [[&str; 4]; 4] = [
    ["7", "8", "9", "⌫"],
    ["4", "5", "6", "±"],
    ["1", "2", "3", "C"],
    ["0", ".", "00", "AC"],
];

/// A single keypad press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Press(Symbol),
    ToggleSign,
    Backspace,
    ClearActive,
    ClearAll,
    Evaluate,
    Select(Field),
}

fn named_key(token: &str) -> Option<Key> {
    let key = match token.to_ascii_lowercase().as_str() {
        "00" => Key::Press(Symbol::DoubleZero),
        "±" | "+/-" | "+-" | "neg" => Key::ToggleSign,
        "⌫" | "bs" | "back" => Key::Backspace,
        "c" => Key::ClearActive,
        "ac" => Key::ClearAll,
        "=" => Key::Evaluate,
        name => Key::Select(name.parse().ok()?),
    };
    Some(key)
}

/// Splits a typed line into key presses.
///
/// Tokens are separated by whitespace. A run of digits and points such as
/// `12.5` is one press per character; `00` on its own is the double-zero key.
pub fn parse_keys(line: &str) -> Result<Vec<Key>, CommandError> {
    let mut keys = Vec::new();
    for token in line.split_whitespace() {
        if let Some(key) = named_key(token) {
            keys.push(key);
        } else if token.chars().all(|c| c.is_ascii_digit() || c == '.') {
            for c in token.chars() {
                keys.push(Key::Press(c.to_string().parse()?));
            }
        } else {
            return Err(CommandError::UnknownKey(token.to_owned()));
        }
    }
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_runs_expand_per_character() {
        assert_eq!(
            parse_keys("12.5").unwrap(),
            [
                Key::Press(Symbol::digit(1).unwrap()),
                Key::Press(Symbol::digit(2).unwrap()),
                Key::Press(Symbol::Point),
                Key::Press(Symbol::digit(5).unwrap()),
            ]
        );
        assert_eq!(parse_keys("00").unwrap(), [Key::Press(Symbol::DoubleZero)]);
        assert_eq!(parse_keys("000").unwrap().len(), 3);
    }

    #[test]
    fn named_keys() {
        assert_eq!(
            parse_keys("± bs C AC = base").unwrap(),
            [
                Key::ToggleSign,
                Key::Backspace,
                Key::ClearActive,
                Key::ClearAll,
                Key::Evaluate,
                Key::Select(Field::Base),
            ]
        );
        assert_eq!(parse_keys("b").unwrap(), [Key::Select(Field::B)]);
    }

    #[test]
    fn every_layout_label_is_a_key() {
        for row in KEYPAD_LAYOUT {
            for label in row {
                assert_eq!(parse_keys(label).unwrap().len(), 1, "{}", label);
            }
        }
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert_eq!(
            parse_keys("1 x 2"),
            Err(CommandError::UnknownKey("x".to_owned()))
        );
        assert!(parse_keys("   ").unwrap().is_empty());
    }
}
