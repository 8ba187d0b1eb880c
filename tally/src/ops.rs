//! Arithmetic primitives: the binary operator and unary function
//! vocabularies and the checked computations over them.

use crate::{MathError, MathResult};
use serde::Serialize;
use std::fmt;

/// Magnitude below which a value is treated as zero, both for division
/// guards and for display normalization.
pub const ZERO_EPSILON: f64 = 1e-12;

/// A binary operator awaiting (or applied to) two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// Map a keypad symbol to an operator. Unrecognized symbols yield
    /// `None`; callers treat that as a no-op keystroke.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '^' => Some(Operator::Power),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A unary function on the displayed value.
///
/// Trigonometric functions take degrees, converted to radians
/// internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnaryFn {
    Sqrt,
    Sin,
    Cos,
    Tan,
    Ln,
    Log,
    Inv,
}

impl UnaryFn {
    /// Map a keypad name to a function. Unrecognized names yield
    /// `None`; callers treat that as a no-op keystroke.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sqrt" => Some(UnaryFn::Sqrt),
            "sin" => Some(UnaryFn::Sin),
            "cos" => Some(UnaryFn::Cos),
            "tan" => Some(UnaryFn::Tan),
            "ln" => Some(UnaryFn::Ln),
            "log" => Some(UnaryFn::Log),
            "inv" => Some(UnaryFn::Inv),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            UnaryFn::Sqrt => "sqrt",
            UnaryFn::Sin => "sin",
            UnaryFn::Cos => "cos",
            UnaryFn::Tan => "tan",
            UnaryFn::Ln => "ln",
            UnaryFn::Log => "log",
            UnaryFn::Inv => "inv",
        }
    }
}

impl fmt::Display for UnaryFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Apply a binary operator to two operands.
///
/// Division by a divisor of magnitude below [`ZERO_EPSILON`] and any
/// non-finite result are reported as errors for the caller to fold
/// into the engine's error state.
pub fn apply_operation(lhs: f64, rhs: f64, op: Operator) -> MathResult<f64> {
    let out = match op {
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Multiply => lhs * rhs,
        Operator::Power => lhs.powf(rhs),
        Operator::Divide => {
            if rhs.abs() < ZERO_EPSILON {
                return Err(MathError::DivisionByZero);
            }
            lhs / rhs
        }
    };

    if out.is_finite() {
        Ok(out)
    } else {
        Err(MathError::NonFinite)
    }
}

/// Apply a unary function to an operand, checking its domain first.
pub fn apply_unary(value: f64, function: UnaryFn) -> MathResult<f64> {
    let out = match function {
        UnaryFn::Sqrt => {
            if value < 0.0 {
                return Err(MathError::Domain);
            }
            value.sqrt()
        }
        UnaryFn::Sin => value.to_radians().sin(),
        UnaryFn::Cos => value.to_radians().cos(),
        UnaryFn::Tan => value.to_radians().tan(),
        UnaryFn::Ln => {
            if value <= 0.0 {
                return Err(MathError::Domain);
            }
            value.ln()
        }
        UnaryFn::Log => {
            if value <= 0.0 {
                return Err(MathError::Domain);
            }
            value.log10()
        }
        UnaryFn::Inv => {
            if value.abs() < ZERO_EPSILON {
                return Err(MathError::Domain);
            }
            1.0 / value
        }
    };

    if out.is_finite() {
        Ok(out)
    } else {
        Err(MathError::NonFinite)
    }
}
