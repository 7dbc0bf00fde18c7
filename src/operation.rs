use crate::error::CommandError;
use crate::field::Field;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// The arithmetic operations offered by the keypad, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Operation {
    #[serde(rename = "add", alias = "addition")]
    Add,
    #[serde(rename = "sub", alias = "subtract")]
    Subtract,
    #[serde(rename = "mul", alias = "multiply")]
    Multiply,
    #[serde(rename = "div", alias = "divide")]
    Divide,
    #[serde(rename = "mod", alias = "modulo")]
    Modulo,
    #[serde(rename = "pow", alias = "power")]
    Power,
    #[serde(rename = "log", alias = "logarithm")]
    Log,
}

/// The field an operation reads besides `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auxiliary {
    B,
    Base,
}

impl Auxiliary {
    pub fn field(self) -> Field {
        match self {
            Auxiliary::B => Field::B,
            Auxiliary::Base => Field::Base,
        }
    }
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Modulo,
        Operation::Power,
        Operation::Log,
    ];

    pub fn auxiliary(self) -> Auxiliary {
        match self {
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Modulo
            | Operation::Power => Auxiliary::B,
            Operation::Log => Auxiliary::Base,
        }
    }

    /// Whether `field` matters for this operation. Advisory only; the editor
    /// accepts edits to any field.
    pub fn needs(self, field: Field) -> bool {
        field == Field::A || field == self.auxiliary().field()
    }

    pub fn relevant_fields(self) -> [Field; 2] {
        [Field::A, self.auxiliary().field()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "sub",
            Operation::Multiply => "mul",
            Operation::Divide => "div",
            Operation::Modulo => "mod",
            Operation::Power => "pow",
            Operation::Log => "log",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
            Operation::Modulo => "%",
            Operation::Power => "^",
            Operation::Log => "log",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Addition (+)",
            Operation::Subtract => "Subtraction (-)",
            Operation::Multiply => "Multiplication (×)",
            Operation::Divide => "Division (÷)",
            Operation::Modulo => "Modulo (%)",
            Operation::Power => "Power (a^b)",
            Operation::Log => "Logarithm (log_base(a))",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Operation {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();
        let op = match text.as_str() {
            "add" | "addition" | "+" => Operation::Add,
            "sub" | "subtract" | "subtraction" | "-" => Operation::Subtract,
            "mul" | "multiply" | "multiplication" | "*" | "x" | "×" => Operation::Multiply,
            "div" | "divide" | "division" | "/" | "÷" => Operation::Divide,
            "mod" | "modulo" | "%" => Operation::Modulo,
            "pow" | "power" | "^" | "**" => Operation::Power,
            "log" | "logarithm" => Operation::Log,
            _ => return Err(CommandError::UnknownOperation(s.trim().to_owned())),
        };
        Ok(op)
    }
}
