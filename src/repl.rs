use crate::config::{Colours, Config, Rgb};
use crate::editor::Snapshot;
use crate::error::EvalError;
use crate::evaluate::{evaluate, Evaluation};
use crate::field::Field;
use crate::format::format_result;
use crate::operation::{Auxiliary, Operation};
use crate::session::{describe, render_keypad, Outcome, Session};
use anyhow::Result;
use colored::*;
use log::debug;
use rustyline::{error::ReadlineError, Config as EditorConfig, DefaultEditor};

trait Paint {
    fn paint(self, rgb: Rgb) -> ColoredString;
}

impl Paint for &str {
    fn paint(self, rgb: Rgb) -> ColoredString {
        self.truecolor(rgb.0, rgb.1, rgb.2)
    }
}

/// The status line shown above the prompt: every field, with the active one
/// highlighted and the ones the operation ignores dimmed.
fn fields_line(snapshot: &Snapshot, operation: Operation, colours: &Colours) -> String {
    let fields: Vec<String> = Field::ALL
        .iter()
        .map(|&field| {
            let text = format!("{}: {}", field.name(), snapshot.get(field));
            let colour = if field == snapshot.active {
                colours.active_field
            } else if operation.needs(field) {
                colours.field
            } else {
                colours.unused_field
            };
            let marker = if field == snapshot.active { ">" } else { " " };
            format!("{}{}", marker, text.as_str().paint(colour))
        })
        .collect();
    format!(
        "{}  {}",
        fields.join("  "),
        operation.label().paint(colours.operation)
    )
}

fn print_evaluation(
    outcome: &std::result::Result<Evaluation, EvalError>,
    session: &Session,
    colours: &Colours,
) {
    match outcome {
        Ok(evaluation) => {
            println!(
                "{}",
                format_result(evaluation.result(), session.display())
                    .as_str()
                    .paint(colours.result)
                    .bold()
            );
            println!(
                "{}",
                describe(evaluation, session.display())
                    .as_str()
                    .paint(colours.message)
            );
        }
        Err(err) => println!(
            "{}",
            format!("{}: {}", err.category().title(), err)
                .as_str()
                .paint(colours.error)
        ),
    }
}

/// Runs the interactive keypad until an empty line, `:quit` or Ctrl-C.
pub fn run(config: &Config) -> Result<()> {
    if !config.colour {
        colored::control::set_override(false);
    }
    let colours = &config.colours;

    let editor_config = EditorConfig::builder().auto_add_history(true).build();
    let mut rl = DefaultEditor::with_config(editor_config)?;
    let mut session = Session::new(config);

    println!("{}", render_keypad().as_str().paint(colours.keypad));
    println!("{}", "Type :help for keys and commands.".paint(colours.message));

    loop {
        println!(
            "{}",
            fields_line(&session.store().snapshot(), session.operation(), colours)
        );
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("Pressing enter with no input will exit as well.");
                break;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        if line.trim().is_empty() {
            println!("Goodbye!");
            break;
        }

        debug!("input: {:?}", line);
        match session.handle(&line) {
            Ok(Outcome::Edited(_)) => {}
            Ok(Outcome::Evaluated(outcome)) => print_evaluation(&outcome, &session, colours),
            Ok(Outcome::Message(message)) => {
                println!("{}", message.as_str().paint(colours.message))
            }
            Ok(Outcome::Quit) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => println!("{}", err.to_string().as_str().paint(colours.error)),
        }
    }

    Ok(())
}

/// Evaluates once without a keypad. `operand` is `b`, or the base for the
/// logarithm.
pub fn eval_once(
    config: &Config,
    operation: Operation,
    a: &str,
    operand: Option<&str>,
) -> std::result::Result<String, EvalError> {
    let evaluation = match operation.auxiliary() {
        Auxiliary::B => evaluate(operation, a, operand, None),
        Auxiliary::Base => evaluate(operation, a, None, operand),
    }?;
    Ok(format_result(evaluation.result(), &config.display))
}
