//! Parsing and evaluation of accumulation chains.
//!
//! An expression is a list of tokens: an initial operand followed by any
//! number of `<operator> <operand>` pairs, e.g. `3,4 *= 1,2 -= 1`.

use crate::error::EvalError;
use numval::{Complex, DynVector};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Accumulation operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `+=`
    Add,
    /// `-=`
    Sub,
    /// `*=`
    Mul,
    /// `/=`
    Div,
}

impl FromStr for Op {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+=" | "+" => Ok(Op::Add),
            "-=" | "-" => Ok(Op::Sub),
            "*=" | "*" | "x" => Ok(Op::Mul),
            "/=" | "/" => Ok(Op::Div),
            _ => Err(EvalError::UnknownOperator(s.to_owned())),
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Op::Add => "+=",
            Op::Sub => "-=",
            Op::Mul => "*=",
            Op::Div => "/=",
        })
    }
}

/// Splits the tokens into the initial operand and the `(operator, operand)`
/// steps that follow it.
fn split_chain<S: AsRef<str>>(tokens: &[S]) -> Result<(&str, Vec<(Op, &str)>), EvalError> {
    let (first, rest) = tokens.split_first().ok_or(EvalError::EmptyExpression)?;
    let mut steps = Vec::with_capacity(rest.len() / 2);
    for pair in rest.chunks(2) {
        let op = pair[0].as_ref().parse::<Op>()?;
        let operand = pair.get(1).ok_or(EvalError::MissingOperand(op))?;
        steps.push((op, operand.as_ref()));
    }
    Ok((first.as_ref(), steps))
}

fn parse_elem(operand: &str, token: &str) -> Result<f64, EvalError> {
    token
        .trim()
        .parse::<f64>()
        .map_err(|err| EvalError::InvalidOperand {
            operand: operand.to_owned(),
            reason: err.to_string(),
        })
}

/// Parses `re,im` or a lone `re` into a complex number.
pub fn parse_complex(operand: &str) -> Result<Complex, EvalError> {
    let inner = operand
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')');
    let parts = inner.split(',').collect::<Vec<_>>();
    match parts.as_slice() {
        [re] => Ok(Complex::from(parse_elem(operand, re)?)),
        [re, im] => Ok(Complex::new(
            parse_elem(operand, re)?,
            parse_elem(operand, im)?,
        )),
        _ => Err(EvalError::InvalidOperand {
            operand: operand.to_owned(),
            reason: String::from("expected `re` or `re,im`"),
        }),
    }
}

/// Parses a comma-separated list of elements, optionally wrapped in
/// brackets, into a vector. An empty list gives an empty vector.
pub fn parse_vector(operand: &str) -> Result<DynVector, EvalError> {
    let inner = operand
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .trim();
    if inner.is_empty() {
        return Ok(DynVector::zeros(0));
    }
    inner
        .split(',')
        .map(|token| parse_elem(operand, token))
        .collect::<Result<Vec<_>, _>>()
        .map(DynVector::from)
}

/// Evaluates a complex accumulation chain.
pub fn eval_complex<S: AsRef<str>>(tokens: &[S]) -> Result<Complex, EvalError> {
    let (first, steps) = split_chain(tokens)?;
    let mut acc = parse_complex(first)?;
    log::debug!("Initial value: {acc}");
    for (op, operand) in steps {
        let rhs = parse_complex(operand)?;
        log::info!("{acc} {op} {rhs}");
        match op {
            Op::Add => acc += rhs,
            Op::Sub => acc -= rhs,
            Op::Mul => acc *= rhs,
            Op::Div => acc /= rhs,
        }
    }
    log::debug!("Result: {acc}");
    Ok(acc)
}

/// Evaluates a vector accumulation chain. Only `+=` and `-=` are defined and
/// every operand must have the length of the first one.
pub fn eval_vector<S: AsRef<str>>(tokens: &[S]) -> Result<DynVector, EvalError> {
    let (first, steps) = split_chain(tokens)?;
    let mut acc = parse_vector(first)?;
    log::debug!("Initial value: {acc}");
    for (op, operand) in steps {
        let rhs = parse_vector(operand)?;
        log::info!("{acc} {op} {rhs}");
        match op {
            Op::Add => acc.try_accumulate_add(&rhs)?,
            Op::Sub => acc.try_accumulate_sub(&rhs)?,
            Op::Mul | Op::Div => {
                return Err(EvalError::UnsupportedOperator { op, kind: "vector" });
            },
        };
    }
    log::debug!("Result: {acc}");
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use numval::NumvalError;

    #[test]
    fn parse_operators() {
        assert_eq!("+=".parse::<Op>().unwrap(), Op::Add);
        assert_eq!("-".parse::<Op>().unwrap(), Op::Sub);
        assert_eq!("*=".parse::<Op>().unwrap(), Op::Mul);
        assert_eq!("/=".parse::<Op>().unwrap(), Op::Div);
        assert!(matches!(
            "%=".parse::<Op>(),
            Err(EvalError::UnknownOperator(op)) if op == "%="
        ));
        assert_eq!(Op::Mul.to_string(), "*=");
    }

    #[test]
    fn parse_complex_operands() {
        assert_eq!(parse_complex("3,4").unwrap(), Complex::new(3.0, 4.0));
        assert_eq!(parse_complex("(-5, 10)").unwrap(), Complex::new(-5.0, 10.0));
        assert_eq!(parse_complex("5").unwrap(), Complex::new(5.0, 0.0));
        assert!(matches!(
            parse_complex("1,2,3"),
            Err(EvalError::InvalidOperand { .. })
        ));
        assert!(matches!(
            parse_complex("a,b"),
            Err(EvalError::InvalidOperand { .. })
        ));
    }

    #[test]
    fn parse_vector_operands() {
        assert_eq!(
            parse_vector("1,2,3").unwrap(),
            DynVector::from(vec![1.0, 2.0, 3.0])
        );
        assert_eq!(
            parse_vector("[0.5, -1]").unwrap(),
            DynVector::from(vec![0.5, -1.0])
        );
        assert_eq!(parse_vector("[]").unwrap(), DynVector::zeros(0));
        assert!(parse_vector("1,,2").is_err());
    }

    #[test]
    fn evaluate_complex_chain() {
        assert_eq!(
            eval_complex(&["3,4", "*=", "1,2"]).unwrap(),
            Complex::new(-5.0, 10.0)
        );
        assert_eq!(
            eval_complex(&["-5,10", "/=", "1,2"]).unwrap(),
            Complex::new(3.0, 4.0)
        );
        assert_eq!(
            eval_complex(&["1,1", "+=", "2,3", "-=", "1"]).unwrap(),
            Complex::new(2.0, 4.0)
        );
        assert_eq!(eval_complex(&["7"]).unwrap(), Complex::new(7.0, 0.0));
    }

    #[test]
    fn evaluate_complex_division_by_zero() {
        let c = eval_complex(&["1,1", "/=", "0,0"]).unwrap();
        assert!(!c.re.is_finite() && !c.im.is_finite());
    }

    #[test]
    fn evaluate_malformed_chains() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            eval_complex(&empty),
            Err(EvalError::EmptyExpression)
        ));
        assert!(matches!(
            eval_complex(&["1,2", "+="]),
            Err(EvalError::MissingOperand(Op::Add))
        ));
        assert!(matches!(
            eval_complex(&["1,2", "1,2"]),
            Err(EvalError::UnknownOperator(_))
        ));
    }

    #[test]
    fn evaluate_vector_chain() {
        let v = eval_vector(&["1,2,3", "+=", "1,1,1", "-=", "0,0,4"]).unwrap();
        assert_eq!(v.as_slice(), &[2.0, 3.0, 0.0]);
        assert_eq!(v.to_string(), "[2, 3, 0]");
    }

    #[test]
    fn evaluate_vector_errors() {
        assert!(matches!(
            eval_vector(&["1,2", "+=", "1,2,3"]),
            Err(EvalError::Numval(NumvalError::DimensionMismatch {
                expected: 2,
                actual: 3
            }))
        ));
        assert!(matches!(
            eval_vector(&["1,2", "*=", "1,2"]),
            Err(EvalError::UnsupportedOperator { op: Op::Mul, .. })
        ));
    }
}
