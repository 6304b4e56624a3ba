use std::cmp::Ordering;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, matrix::Matrix},
    },
};

const EQUALS: &str = "equals (=)";
const GREATER: &str = "greater than (>)";
const LESS: &str = "less than (<)";
const GREATER_EQUAL: &str = "greater or equal (>=)";
const LESS_EQUAL: &str = "less or equal (<=)";
const BIGGER: &str = "bigger";
const SMALLER: &str = "smaller";

/// The comparison family. Dyadic forms yield the canonical `1` or `0`
/// (or a matrix of them), never a Rust boolean.
impl Value {
    /// Dyadic `=`. Number-matrix pairs compare cell by cell, matrix pairs
    /// compare as a whole and text pairs yield a per-position mask over
    /// the longer text.
    pub fn equals(&self, arg: &Self) -> EvalResult<Self> {
        match (self, arg) {
            (Self::Number(a), Self::Number(b)) => Ok(Self::boolean(a == b)),
            (Self::Number(_), Self::Matrix(m)) => Ok(m.map_cells(|cell| self.equals(cell))?.into()),
            (Self::Matrix(m), Self::Number(_)) => Ok(m.map_cells(|cell| cell.equals(arg))?.into()),
            (Self::Matrix(m), Self::Matrix(n)) => {
                if !m.same_shape(n) {
                    return Err(RuntimeError::ShapeMismatch { function: EQUALS,
                                                             left:     m.shape(),
                                                             right:    n.shape(), });
                }
                let equal = m.cells()
                             .iter()
                             .zip(n.cells().iter())
                             .all(|(a, b)| a == b);
                Ok(Self::boolean(equal))
            },
            (Self::Text(t), Self::Text(u)) => {
                let length = t.chars().count().max(u.chars().count());
                let mut mask = Vec::with_capacity(length);
                let mut left = t.chars();
                let mut right = u.chars();
                for _ in 0..length {
                    let same = match (left.next(), right.next()) {
                        (Some(a), Some(b)) => a == b,
                        _ => false,
                    };
                    mask.push(Self::boolean(same));
                }
                Ok(Matrix::row(mask).into())
            },
            _ => Ok(Self::FALSE),
        }
    }

    /// Monadic `=` has no defined meaning.
    pub fn monadic_equals(&self) -> EvalResult<Self> {
        Err(self.unimplemented(EQUALS))
    }

    /// Dyadic `>`.
    pub fn greater_than(&self, arg: &Self) -> EvalResult<Self> {
        self.ordering_compare(arg, GREATER, |ordering| ordering == Ordering::Greater)
    }

    /// Monadic `>`: identity on numbers, the largest cell of a matrix.
    pub fn monadic_greater_than(&self) -> EvalResult<Self> {
        match self {
            Self::Number(_) => Ok(self.clone()),
            Self::Text(_) => Err(self.rejects(GREATER)),
            Self::Matrix(m) => extreme_cell(m, GREATER, Ordering::Greater),
        }
    }

    /// Dyadic `<`.
    pub fn less_than(&self, arg: &Self) -> EvalResult<Self> {
        self.ordering_compare(arg, LESS, |ordering| ordering == Ordering::Less)
    }

    /// Monadic `<`: identity on numbers, the smallest cell of a matrix.
    pub fn monadic_less_than(&self) -> EvalResult<Self> {
        match self {
            Self::Number(_) => Ok(self.clone()),
            Self::Text(_) => Err(self.rejects(LESS)),
            Self::Matrix(m) => extreme_cell(m, LESS, Ordering::Less),
        }
    }

    /// Dyadic `>=`.
    pub fn greater_equal(&self, arg: &Self) -> EvalResult<Self> {
        self.ordering_compare(arg, GREATER_EQUAL, |ordering| ordering != Ordering::Less)
    }

    /// Monadic `>=` has no defined meaning.
    pub fn monadic_greater_equal(&self) -> EvalResult<Self> {
        Err(self.unimplemented(GREATER_EQUAL))
    }

    /// Dyadic `<=`.
    pub fn less_equal(&self, arg: &Self) -> EvalResult<Self> {
        self.ordering_compare(arg, LESS_EQUAL, |ordering| ordering != Ordering::Greater)
    }

    /// Monadic `<=` has no defined meaning.
    pub fn monadic_less_equal(&self) -> EvalResult<Self> {
        Err(self.unimplemented(LESS_EQUAL))
    }

    /// Dyadic `bigger`: the larger of two numbers or two texts.
    pub fn bigger(&self, arg: &Self) -> EvalResult<Self> {
        match (self, arg) {
            (Self::Number(_), Self::Number(_)) | (Self::Text(_), Self::Text(_)) => {
                if self.compare(arg) == Ordering::Less {
                    Ok(arg.clone())
                } else {
                    Ok(self.clone())
                }
            },
            (Self::Matrix(_), _) | (_, Self::Matrix(_)) => {
                Err(self.unimplemented_pair(BIGGER, arg))
            },
            _ => Err(self.rejects_pair(BIGGER, arg)),
        }
    }

    /// Monadic `bigger`: rounds a number up.
    pub fn monadic_bigger(&self) -> EvalResult<Self> {
        match self {
            Self::Number(n) => Ok(Self::Number(n.ceil())),
            Self::Text(_) => Err(self.rejects(BIGGER)),
            Self::Matrix(m) => Ok(m.map_cells(Self::monadic_bigger)?.into()),
        }
    }

    /// Dyadic `smaller`: the smaller of two numbers or two texts.
    pub fn smaller(&self, arg: &Self) -> EvalResult<Self> {
        match (self, arg) {
            (Self::Number(_), Self::Number(_)) | (Self::Text(_), Self::Text(_)) => {
                if self.compare(arg) == Ordering::Greater {
                    Ok(arg.clone())
                } else {
                    Ok(self.clone())
                }
            },
            (Self::Matrix(_), _) | (_, Self::Matrix(_)) => {
                Err(self.unimplemented_pair(SMALLER, arg))
            },
            _ => Err(self.rejects_pair(SMALLER, arg)),
        }
    }

    /// Monadic `smaller`: rounds a number down.
    pub fn monadic_smaller(&self) -> EvalResult<Self> {
        match self {
            Self::Number(n) => Ok(Self::Number(n.floor())),
            Self::Text(_) => Err(self.rejects(SMALLER)),
            Self::Matrix(m) => Ok(m.map_cells(Self::monadic_smaller)?.into()),
        }
    }

    /// Shared dispatch for the four ordering comparisons.
    fn ordering_compare<F>(&self, arg: &Self, function: &'static str, accept: F)
                           -> EvalResult<Self>
        where F: Fn(Ordering) -> bool + Copy
    {
        match (self, arg) {
            (Self::Number(_), Self::Number(_)) | (Self::Text(_), Self::Text(_)) => {
                Ok(Self::boolean(accept(self.compare(arg))))
            },
            (Self::Number(_), Self::Matrix(m)) => {
                Ok(m.map_cells(|cell| self.ordering_compare(cell, function, accept))?
                    .into())
            },
            (Self::Matrix(m), Self::Number(_)) => {
                Ok(m.map_cells(|cell| cell.ordering_compare(arg, function, accept))?
                    .into())
            },
            (Self::Matrix(_), Self::Matrix(_)) => Err(self.unimplemented_pair(function, arg)),
            _ => Err(self.rejects_pair(function, arg)),
        }
    }
}

/// Picks the cell that wins every pairwise comparison in the given
/// direction.
fn extreme_cell(matrix: &Matrix, function: &'static str, direction: Ordering)
                -> EvalResult<Value> {
    let mut cells = matrix.cells().iter();
    let Some(first) = cells.next() else {
        return Err(RuntimeError::InvalidArgument {
            details: format!("the function '{function}' cannot pick a cell from an empty matrix"),
        });
    };
    let mut winner = first;
    for cell in cells {
        if cell.compare(winner) == direction {
            winner = cell;
        }
    }
    Ok(winner.clone())
}
