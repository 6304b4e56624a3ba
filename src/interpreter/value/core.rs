use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::{error::RuntimeError, interpreter::value::matrix::Matrix};

/// Represents a runtime value in the interpreter.
///
/// This enum models the three types that can appear in expressions,
/// declarations and function results.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A text value. Produced by quoted literals and by text operations
    /// such as concatenation and case folding.
    Text(String),
    /// A two-dimensional matrix of values.
    Matrix(Matrix),
}

/// The kind of a [`Value`], used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A numeric value.
    Number,
    /// A text value.
    Text,
    /// A matrix value.
    Matrix,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "Number"),
            Self::Text => write!(f, "Text"),
            Self::Matrix => write!(f, "Matrix"),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<Matrix> for Value {
    fn from(v: Matrix) -> Self {
        Self::Matrix(v)
    }
}

impl Value {
    /// The canonical truth value, `1`.
    pub const TRUE: Self = Self::Number(1.0);
    /// The canonical falsity value, `0`.
    pub const FALSE: Self = Self::Number(0.0);

    /// Builds a value from an atomic literal's source text.
    ///
    /// Text that reads as a number becomes [`Value::Number`]; anything
    /// else, including malformed numbers such as `1.2.3`, stays text.
    #[must_use]
    pub fn from_literal(text: &str) -> Self {
        text.parse::<f64>()
            .map_or_else(|_| Self::Text(text.to_string()), Self::Number)
    }

    /// Converts a boolean into the canonical `1` or `0`.
    #[must_use]
    pub const fn boolean(condition: bool) -> Self {
        if condition {
            Self::TRUE
        } else {
            Self::FALSE
        }
    }

    /// Returns the kind of this value for error reports.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Number(_) => ValueKind::Number,
            Self::Text(_) => ValueKind::Text,
            Self::Matrix(_) => ValueKind::Matrix,
        }
    }

    /// Returns `true` if the value is the canonical truth value.
    #[must_use]
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Number(n) if *n == 1.0)
    }

    /// Builds the error for a monadic function that rejects this operand.
    pub(crate) fn rejects(&self, function: &'static str) -> RuntimeError {
        RuntimeError::UnsupportedOperand { function,
                                           operand: self.kind() }
    }

    /// Builds the error for a dyadic function that rejects this pair of
    /// operands.
    pub(crate) fn rejects_pair(&self, function: &'static str, arg: &Self) -> RuntimeError {
        RuntimeError::UnsupportedOperands { function,
                                            left: self.kind(),
                                            right: arg.kind() }
    }

    /// Builds the error for a monadic function with no behaviour for this
    /// operand kind.
    pub(crate) fn unimplemented(&self, function: &'static str) -> RuntimeError {
        RuntimeError::NotImplemented { function,
                                       operand: self.kind() }
    }

    /// Builds the error for a dyadic function with no behaviour for this
    /// pair of operand kinds.
    pub(crate) fn unimplemented_pair(&self, function: &'static str, arg: &Self) -> RuntimeError {
        RuntimeError::NotImplementedOperands { function,
                                               left: self.kind(),
                                               right: arg.kind() }
    }

    /// Orders two values for sorting and the lexicographic comparisons.
    ///
    /// Numbers order numerically, text orders lexicographically and
    /// matrices order by comparing shapes and then cells. Mismatched
    /// kinds order arbitrarily but consistently enough for sorting.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => OrderedFloat(*a).cmp(&OrderedFloat(*b)),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Matrix(a), Self::Matrix(b)) => {
                if !a.same_shape(b) {
                    return a.shape().cmp(&b.shape());
                }
                for (x, y) in a.cells().iter().zip(b.cells().iter()) {
                    let ordering = x.compare(y);
                    if ordering != Ordering::Equal {
                        return ordering;
                    }
                }
                Ordering::Equal
            },
            (Self::Number(_), _) => Ordering::Less,
            (_, Self::Number(_)) => Ordering::Greater,
            (Self::Text(_), _) => Ordering::Less,
            (_, Self::Text(_)) => Ordering::Greater,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(t) => write!(f, "{t}"),
            Self::Matrix(m) => write!(f, "{m}"),
        }
    }
}
