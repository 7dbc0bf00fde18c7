//! Keypad-driven numeric entry and evaluation.
//!
//! A [`FieldStore`] holds the three decimal strings being typed (`a`, `b` and
//! `base`) and applies keypad edits to whichever one is active. [`evaluate()`]
//! turns those strings into numbers and runs one of the seven
//! [`Operation`]s on them, reporting failures as an [`EvalError`].

pub mod config;
pub mod editor;
pub mod error;
pub mod evaluate;
pub mod field;
pub mod format;
pub mod keypad;
pub mod normalize;
pub mod operation;
pub mod repl;
pub mod session;

pub use config::Config;
pub use editor::{Digit, FieldStore, Snapshot, Symbol};
pub use error::{CommandError, EditError, ErrorCategory, EvalError};
pub use evaluate::{evaluate, parse_lenient, Evaluation};
pub use field::Field;
pub use keypad::{parse_keys, Key};
pub use normalize::normalize;
pub use operation::{Auxiliary, Operation};
pub use session::{Outcome, Session};
