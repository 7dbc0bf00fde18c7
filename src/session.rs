//! One user's calculator session: the field store, the selected operation and
//! a tape of the evaluations made so far.

use crate::config::{Config, DisplayConfig};
use crate::editor::{FieldStore, Snapshot};
use crate::error::{CommandError, EvalError};
use crate::evaluate::Evaluation;
use crate::field::Field;
use crate::format::format_result;
use crate::keypad::{parse_keys, Key, KEYPAD_LAYOUT};
use crate::operation::Operation;
use chrono::{DateTime, Local};
use log::debug;

const HELP: &str = "\
Keys (separate with spaces): 0-9 . 00  ± bs C AC =  a b base
Digit runs like 12.5 are typed one key at a time.
Commands:
  :op <name>     select the operation (add sub mul div mod pow log)
  :ops           list the operations
  :field <name>  make a, b or base the active field
  :set <text>    type text straight into the active field
  :tape          show this session's results
  :keys          show the keypad
  :quit          leave (an empty line does too)";

/// What a handled line produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Edited(Snapshot),
    Evaluated(Result<Evaluation, EvalError>),
    Message(String),
    Quit,
}

#[derive(Debug, Clone)]
pub struct TapeEntry {
    pub at: DateTime<Local>,
    pub evaluation: Evaluation,
}

#[derive(Debug, Clone)]
pub struct Session {
    store: FieldStore,
    operation: Operation,
    display: DisplayConfig,
    tape: Vec<TapeEntry>,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(&Config::default())
    }
}

impl Session {
    pub fn new(config: &Config) -> Session {
        Session {
            store: FieldStore::new(),
            operation: config.operation,
            display: config.display.clone(),
            tape: Vec::new(),
        }
    }

    pub fn store(&self) -> &FieldStore {
        &self.store
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    pub fn tape(&self) -> &[TapeEntry] {
        &self.tape
    }

    /// Selects `operation`. If the active field is of no use to it, the
    /// keypad falls back to `a`.
    pub fn set_operation(&mut self, operation: Operation) {
        debug!("operation -> {}", operation.name());
        self.operation = operation;
        if !operation.needs(self.store.active()) {
            self.store.select(Field::A);
        }
    }

    pub fn evaluate(&mut self) -> Result<Evaluation, EvalError> {
        let outcome = self.store.evaluate(self.operation);
        if let Ok(evaluation) = &outcome {
            self.tape.push(TapeEntry {
                at: Local::now(),
                evaluation: *evaluation,
            });
        }
        outcome
    }

    pub fn press(&mut self, key: Key) -> Outcome {
        let snapshot = match key {
            Key::Press(symbol) => self.store.append(symbol),
            Key::ToggleSign => self.store.toggle_sign(),
            Key::Backspace => self.store.backspace(),
            Key::ClearActive => self.store.clear_active(),
            Key::ClearAll => self.store.clear_all(),
            Key::Select(field) => self.store.select(field),
            Key::Evaluate => return Outcome::Evaluated(self.evaluate()),
        };
        Outcome::Edited(snapshot)
    }

    /// Handles one typed line: a `:command`, or a sequence of keys. For a key
    /// sequence the outcome of the last key is returned.
    pub fn handle(&mut self, line: &str) -> Result<Outcome, CommandError> {
        let line = line.trim();
        if let Some(command) = line.strip_prefix(':') {
            return self.command(command);
        }

        let keys = parse_keys(line)?;
        let mut outcome = Outcome::Edited(self.store.snapshot());
        for key in keys {
            outcome = self.press(key);
        }
        Ok(outcome)
    }

    fn command(&mut self, command: &str) -> Result<Outcome, CommandError> {
        let (name, argument) = match command.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (command, ""),
        };

        let outcome = match name.to_ascii_lowercase().as_str() {
            "op" => {
                if argument.is_empty() {
                    return Err(CommandError::MissingArgument("op"));
                }
                self.set_operation(argument.parse()?);
                Outcome::Message(format!("Operation: {}", self.operation.label()))
            }
            "ops" => Outcome::Message(self.catalog()),
            "field" => {
                if argument.is_empty() {
                    return Err(CommandError::MissingArgument("field"));
                }
                Outcome::Edited(self.store.select_by_name(argument)?)
            }
            "set" => {
                if argument.is_empty() {
                    return Err(CommandError::MissingArgument("set"));
                }
                Outcome::Edited(self.store.type_text(argument))
            }
            "tape" => Outcome::Message(self.render_tape()),
            "keys" => Outcome::Message(render_keypad()),
            "help" => Outcome::Message(HELP.to_owned()),
            "quit" | "q" | "exit" => Outcome::Quit,
            _ => return Err(CommandError::UnknownCommand(name.to_owned())),
        };
        Ok(outcome)
    }

    fn catalog(&self) -> String {
        Operation::ALL
            .iter()
            .map(|&op| {
                let marker = if op == self.operation { '*' } else { ' ' };
                let [a, aux] = op.relevant_fields();
                format!("{} {:<4}{:<26}uses {}, {}", marker, op.name(), op.label(), a, aux)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_tape(&self) -> String {
        if self.tape.is_empty() {
            return "No results yet.".to_owned();
        }
        self.tape
            .iter()
            .map(|entry| {
                format!(
                    "[{}] {}",
                    entry.at.format("%H:%M:%S"),
                    describe(&entry.evaluation, &self.display)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One-line account of an evaluation, such as `2 + 3 = 5` or `log_2(8) = 3`.
pub fn describe(evaluation: &Evaluation, display: &DisplayConfig) -> String {
    let a = format_result(evaluation.a(), display);
    let result = format_result(evaluation.result(), display);
    let operation = evaluation.operation();
    match (evaluation.b(), evaluation.base()) {
        (Some(b), _) => format!(
            "{} {} {} = {}",
            a,
            operation.symbol(),
            format_result(b, display),
            result
        ),
        (None, Some(base)) => format!(
            "log_{}({}) = {}",
            format_result(base, display),
            a,
            result
        ),
        (None, None) => format!("{} = {}", a, result),
    }
}

pub fn render_keypad() -> String {
    KEYPAD_LAYOUT
        .iter()
        .map(|row| {
            row.iter()
                .map(|label| format!("[{:^4}]", label))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
