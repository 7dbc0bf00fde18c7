//! Parses the field strings and runs the selected operation on them.

use crate::editor::FieldStore;
use crate::error::EvalError;
use crate::field::Field;
use crate::operation::{Auxiliary, Operation};
use log::debug;

/// The record of a successful evaluation: what was computed from what.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    operation: Operation,
    a: f64,
    b: Option<f64>,
    base: Option<f64>,
    result: f64,
}

impl Evaluation {
    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    /// Second operand; `None` for the logarithm.
    pub fn b(&self) -> Option<f64> {
        self.b
    }

    /// Logarithm base; `None` for the binary operations.
    pub fn base(&self) -> Option<f64> {
        self.base
    }

    pub fn result(&self) -> f64 {
        self.result
    }
}

/// Reads a field string as a number, ignoring surrounding whitespace and
/// any `,` grouping separators.
pub fn parse_lenient(field: Field, raw: &str) -> Result<f64, EvalError> {
    let cleaned: String = raw.trim().chars().filter(|&c| c != ',').collect();
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(EvalError::NumericParse {
            field,
            raw: raw.to_owned(),
        }),
    }
}

/// Floored remainder: a non-zero result takes the sign of the divisor.
fn floor_mod(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

/// Evaluates `operation` on the given field strings.
///
/// Only the auxiliary value the operation reads is consulted: `b` for the
/// binary operations, `base` for the logarithm. The other one is ignored and
/// may be malformed or absent.
pub fn evaluate(
    operation: Operation,
    a: &str,
    b: Option<&str>,
    base: Option<&str>,
) -> Result<Evaluation, EvalError> {
    debug!("evaluate {} a={:?} b={:?} base={:?}", operation.name(), a, b, base);
    let outcome = compute(operation, a, b, base);
    match &outcome {
        Ok(evaluation) => debug!("{} -> {}", operation.name(), evaluation.result),
        Err(err) => debug!("{} failed: {}", operation.name(), err),
    }
    outcome
}

fn compute(
    operation: Operation,
    a: &str,
    b: Option<&str>,
    base: Option<&str>,
) -> Result<Evaluation, EvalError> {
    let a = parse_lenient(Field::A, a)?;

    let auxiliary = operation.auxiliary();
    let raw = match auxiliary {
        Auxiliary::B => b,
        Auxiliary::Base => base,
    };
    let raw = raw.ok_or(EvalError::MissingOperand {
        operation,
        field: auxiliary.field(),
    })?;
    let x = parse_lenient(auxiliary.field(), raw)?;

    let result = match operation {
        Operation::Add => a + x,
        Operation::Subtract => a - x,
        Operation::Multiply => a * x,
        Operation::Divide => {
            if x == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            a / x
        }
        Operation::Modulo => {
            if x == 0.0 {
                return Err(EvalError::ModuloByZero);
            }
            floor_mod(a, x)
        }
        Operation::Power => a.powf(x),
        Operation::Log => {
            if a <= 0.0 {
                return Err(EvalError::LogDomain);
            }
            if x <= 0.0 || x == 1.0 {
                return Err(EvalError::LogBase);
            }
            a.ln() / x.ln()
        }
    };

    if !result.is_finite() {
        return Err(EvalError::InvalidOperationResult {
            operation,
            value: result,
        });
    }

    let (b, base) = match auxiliary {
        Auxiliary::B => (Some(x), None),
        Auxiliary::Base => (None, Some(x)),
    };
    Ok(Evaluation {
        operation,
        a,
        b,
        base,
        result,
    })
}

impl FieldStore {
    /// Evaluates `operation` against the current field strings.
    pub fn evaluate(&self, operation: Operation) -> Result<Evaluation, EvalError> {
        let (b, base) = match operation.auxiliary() {
            Auxiliary::B => (Some(self.get(Field::B)), None),
            Auxiliary::Base => (None, Some(self.get(Field::Base))),
        };
        evaluate(operation, self.get(Field::A), b, base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(operation: Operation, a: &str, x: &str) -> f64 {
        let (b, base) = match operation.auxiliary() {
            Auxiliary::B => (Some(x), None),
            Auxiliary::Base => (None, Some(x)),
        };
        evaluate(operation, a, b, base).unwrap().result()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn basic_arithmetic() {
        assert_eq!(result(Operation::Add, "2", "3"), 5.0);
        assert_eq!(result(Operation::Subtract, "2", "3"), -1.0);
        assert_eq!(result(Operation::Multiply, "-4", "2.5"), -10.0);
        assert_eq!(result(Operation::Divide, "7", "2"), 3.5);
        assert_eq!(result(Operation::Power, "2", "10"), 1024.0);
        assert!(close(result(Operation::Power, "9", "0.5"), 3.0));
    }

    #[test]
    fn logarithms() {
        assert!(close(result(Operation::Log, "8", "2"), 3.0));
        assert!(close(result(Operation::Log, "1000", "10"), 3.0));
        assert!(close(result(Operation::Log, "0.25", "2"), -2.0));
        assert!(close(result(Operation::Log, "4", "0.5"), -2.0));
    }

    #[test]
    fn modulo_takes_divisor_sign() {
        assert_eq!(result(Operation::Modulo, "10", "3"), 1.0);
        assert_eq!(result(Operation::Modulo, "-7", "3"), 2.0);
        assert_eq!(result(Operation::Modulo, "7", "-3"), -2.0);
        assert_eq!(result(Operation::Modulo, "-7", "-3"), -1.0);
        assert_eq!(result(Operation::Modulo, "6", "-3"), 0.0);
        assert!(close(result(Operation::Modulo, "5.5", "2"), 1.5));
    }

    #[test]
    fn zero_divisors_are_rejected() {
        assert_eq!(
            evaluate(Operation::Divide, "10", Some("0"), None),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            evaluate(Operation::Divide, "10", Some("-0"), None),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            evaluate(Operation::Modulo, "10", Some("0"), None),
            Err(EvalError::ModuloByZero)
        );
    }

    #[test]
    fn log_domain_and_base_checks() {
        assert_eq!(
            evaluate(Operation::Log, "-1", None, Some("10")),
            Err(EvalError::LogDomain)
        );
        assert_eq!(
            evaluate(Operation::Log, "0", None, Some("10")),
            Err(EvalError::LogDomain)
        );
        assert_eq!(
            evaluate(Operation::Log, "10", None, Some("1")),
            Err(EvalError::LogBase)
        );
        assert_eq!(
            evaluate(Operation::Log, "10", None, Some("-2")),
            Err(EvalError::LogBase)
        );
        assert_eq!(
            evaluate(Operation::Log, "10", None, Some("0")),
            Err(EvalError::LogBase)
        );
    }

    #[test]
    fn missing_auxiliary_values() {
        assert_eq!(
            evaluate(Operation::Add, "1", None, Some("10")),
            Err(EvalError::MissingOperand {
                operation: Operation::Add,
                field: Field::B,
            })
        );
        assert_eq!(
            evaluate(Operation::Log, "-1", Some("2"), None),
            Err(EvalError::MissingOperand {
                operation: Operation::Log,
                field: Field::Base,
            })
        );
    }

    #[test]
    fn unused_auxiliary_is_never_parsed() {
        let eval = evaluate(Operation::Log, "100", Some("-"), Some("10")).unwrap();
        assert!(close(eval.result(), 2.0));
        assert_eq!(eval.b(), None);
        assert_eq!(eval.base(), Some(10.0));

        let eval = evaluate(Operation::Add, "1", Some("2"), Some("garbage")).unwrap();
        assert_eq!(eval.b(), Some(2.0));
        assert_eq!(eval.base(), None);
    }

    #[test]
    fn lenient_parse() {
        assert_eq!(parse_lenient(Field::A, "1,234"), Ok(1234.0));
        assert_eq!(parse_lenient(Field::A, " 1,234,567.5 "), Ok(1234567.5));
        assert_eq!(parse_lenient(Field::A, "-0"), Ok(0.0));
        assert_eq!(parse_lenient(Field::A, "0."), Ok(0.0));
        assert_eq!(parse_lenient(Field::A, ".5"), Ok(0.5));
        for raw in ["", "-", "1.2.3", "abc", "inf", "NaN", "1e999"] {
            assert_eq!(
                parse_lenient(Field::B, raw),
                Err(EvalError::NumericParse {
                    field: Field::B,
                    raw: raw.to_owned(),
                }),
                "{:?}",
                raw
            );
        }
    }

    #[test]
    fn parse_errors_name_the_field() {
        assert_eq!(
            evaluate(Operation::Add, "-", Some("1"), None),
            Err(EvalError::NumericParse {
                field: Field::A,
                raw: "-".to_owned(),
            })
        );
        assert_eq!(
            evaluate(Operation::Log, "5", None, Some("")),
            Err(EvalError::NumericParse {
                field: Field::Base,
                raw: String::new(),
            })
        );
    }

    #[test]
    fn non_finite_results_are_flagged() {
        match evaluate(Operation::Power, "-8", Some("0.5"), None) {
            Err(EvalError::InvalidOperationResult { operation, value }) => {
                assert_eq!(operation, Operation::Power);
                assert!(value.is_nan());
            }
            other => panic!("expected an undefined result, got {:?}", other),
        }
        assert!(matches!(
            evaluate(Operation::Power, "10", Some("400"), None),
            Err(EvalError::InvalidOperationResult { .. })
        ));
    }

    #[test]
    fn record_echoes_operands() {
        let eval = evaluate(Operation::Subtract, "1,000", Some("0.5"), None).unwrap();
        assert_eq!(eval.operation(), Operation::Subtract);
        assert_eq!(eval.a(), 1000.0);
        assert_eq!(eval.b(), Some(0.5));
        assert_eq!(eval.result(), 999.5);
    }

    #[test]
    fn store_passes_only_the_needed_field() {
        let mut store = FieldStore::new();
        store.type_text("8");
        store.select(Field::B);
        store.type_text("-");
        store.select(Field::Base);
        store.type_text("2");
        let eval = store.evaluate(Operation::Log).unwrap();
        assert!(close(eval.result(), 3.0));
        assert!(matches!(
            store.evaluate(Operation::Add),
            Err(EvalError::NumericParse { field: Field::B, .. })
        ));
    }
}
