//! The field store and the keypad edit operations acting on it.
//!
//! A [`FieldStore`] belongs to exactly one session. Every edit acts on the
//! active field only and hands back a [`Snapshot`] the caller can display.

use crate::error::{CommandError, EditError};
use crate::field::Field;
use crate::normalize::normalize;
use log::debug;
use std::fmt;
use std::str::FromStr;

/// A decimal digit, always in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Digit> {
        (value <= 9).then_some(Digit(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// A character group the keypad can append to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Digit(Digit),
    Point,
    /// The `00` key.
    DoubleZero,
}

impl Symbol {
    /// The key for `value`, or `None` if it is not a single decimal digit.
    pub fn digit(value: u8) -> Option<Symbol> {
        Digit::new(value).map(Symbol::Digit)
    }

    fn is_digits(self) -> bool {
        !matches!(self, Symbol::Point)
    }

    fn push_to(self, s: &mut String) {
        match self {
            Symbol::Digit(d) => s.push(char::from(b'0' + d.value())),
            Symbol::Point => s.push('.'),
            Symbol::DoubleZero => s.push_str("00"),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::new();
        self.push_to(&mut s);
        f.write_str(&s)
    }
}

impl FromStr for Symbol {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [c @ b'0'..=b'9'] => Ok(Symbol::Digit(Digit(c - b'0'))),
            b"." => Ok(Symbol::Point),
            b"00" => Ok(Symbol::DoubleZero),
            _ => Err(CommandError::UnknownKey(s.to_owned())),
        }
    }
}

/// Display state after an edit: all three field strings and the active field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub a: String,
    pub b: String,
    pub base: String,
    pub active: Field,
}

impl Snapshot {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::A => &self.a,
            Field::B => &self.b,
            Field::Base => &self.base,
        }
    }
}

/// Session-owned editing state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStore {
    a: String,
    b: String,
    base: String,
    active: Field,
}

impl Default for FieldStore {
    fn default() -> Self {
        FieldStore {
            a: Field::A.default_value().to_owned(),
            b: Field::B.default_value().to_owned(),
            base: Field::Base.default_value().to_owned(),
            active: Field::A,
        }
    }
}

impl FieldStore {
    pub fn new() -> FieldStore {
        FieldStore::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::A => &self.a,
            Field::B => &self.b,
            Field::Base => &self.base,
        }
    }

    pub fn active(&self) -> Field {
        self.active
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            a: self.a.clone(),
            b: self.b.clone(),
            base: self.base.clone(),
            active: self.active,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::A => &mut self.a,
            Field::B => &mut self.b,
            Field::Base => &mut self.base,
        }
    }

    fn store_active(&mut self, value: String) {
        debug!("{} <- {:?}", self.active, value);
        *self.slot(self.active) = value;
    }

    pub fn select(&mut self, field: Field) -> Snapshot {
        debug!("active field {} -> {}", self.active, field);
        self.active = field;
        self.snapshot()
    }

    /// Selects a field by its published name (`a`, `b` or `base`).
    pub fn select_by_name(&mut self, name: &str) -> Result<Snapshot, EditError> {
        let field = name.parse::<Field>()?;
        Ok(self.select(field))
    }

    /// Appends a digit, the decimal point or `00` to the active field.
    ///
    /// Digits typed onto a bare `"0"` replace it. A second decimal point is
    /// ignored.
    pub fn append(&mut self, symbol: Symbol) -> Snapshot {
        let current = self.get(self.active);
        let next = if current == "0" && symbol.is_digits() {
            symbol.to_string()
        } else if symbol == Symbol::Point && current.contains('.') {
            return self.snapshot();
        } else {
            let mut next = current.to_owned();
            symbol.push_to(&mut next);
            next
        };
        self.store_active(normalize(&next));
        self.snapshot()
    }

    pub fn toggle_sign(&mut self) -> Snapshot {
        let current = self.get(self.active).trim();
        let next = match current.strip_prefix('-') {
            Some("") => "0".to_owned(),
            Some(magnitude) => magnitude.to_owned(),
            None if current.is_empty() || current == "0" => "-0".to_owned(),
            None => format!("-{}", current),
        };
        self.store_active(normalize(&next));
        self.snapshot()
    }

    /// Removes the last character of the active field. A field emptied down
    /// to nothing or a lone sign becomes `"0"`.
    pub fn backspace(&mut self) -> Snapshot {
        let current = self.get(self.active);
        if current.is_empty() || current == "0" {
            return self.snapshot();
        }
        let mut next = current.to_owned();
        next.pop();
        if next.is_empty() || next == "-" {
            next = "0".to_owned();
        }
        self.store_active(normalize(&next));
        self.snapshot()
    }

    pub fn clear_active(&mut self) -> Snapshot {
        self.store_active(self.active.default_value().to_owned());
        self.snapshot()
    }

    pub fn clear_all(&mut self) -> Snapshot {
        debug!("clearing all fields");
        *self = FieldStore::default();
        self.snapshot()
    }

    /// Replaces the active field with free-form text, as when typing straight
    /// into the field rather than using the keypad.
    pub fn type_text(&mut self, raw: &str) -> Snapshot {
        let mut next = normalize(raw);
        if next.is_empty() {
            next = "0".to_owned();
        }
        self.store_active(next);
        self.snapshot()
    }
}
