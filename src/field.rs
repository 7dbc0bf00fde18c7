use crate::error::EditError;
use std::fmt;
use std::str::FromStr;

/// One of the three editable slots on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// First operand, relevant for every operation.
    A,
    /// Second operand of the binary operations.
    B,
    /// Logarithm base.
    Base,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::A, Field::B, Field::Base];

    pub fn name(self) -> &'static str {
        match self {
            Field::A => "a",
            Field::B => "b",
            Field::Base => "base",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::A => "a (first value)",
            Field::B => "b (second value)",
            Field::Base => "base (log base)",
        }
    }

    /// Value the field holds after a clear.
    pub fn default_value(self) -> &'static str {
        match self {
            Field::Base => "10",
            Field::A | Field::B => "0",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Field::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| EditError::InvalidField(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_published_names() {
        assert_eq!("a".parse::<Field>(), Ok(Field::A));
        assert_eq!(" B ".parse::<Field>(), Ok(Field::B));
        assert_eq!("BASE".parse::<Field>(), Ok(Field::Base));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "c".parse::<Field>(),
            Err(EditError::InvalidField("c".to_owned()))
        );
        assert!("".parse::<Field>().is_err());
    }

    #[test]
    fn base_defaults_to_ten() {
        assert_eq!(Field::A.default_value(), "0");
        assert_eq!(Field::B.default_value(), "0");
        assert_eq!(Field::Base.default_value(), "10");
    }
}
