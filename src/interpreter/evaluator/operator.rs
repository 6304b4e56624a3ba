use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            builtin::call_binary,
            core::{evaluate, require_value, Environment, EvalResult},
        },
        value::{core::Value, matrix::Matrix},
    },
};

const REDUCE: &str = "reduce (/)";
const SCAN: &str = "scan (\\)";
const COMPRESS: &str = "compress (\\)";
const INNER: &str = "inner product (.)";
const OUTER: &str = "outer product (@.)";

/// Evaluates `f / EXPR`: folds a dyadic function across a matrix.
///
/// Cells are consumed in reverse row-major order with a running
/// accumulator, so `- / [1 2 3]` is `3 - 2 - 1`. The accumulator carries
/// across row boundaries; its value at the start of each row is
/// snapshotted, and the snapshots form the result. A single-row matrix
/// collapses to one value.
///
/// # Parameters
/// - `function`: The name of the dyadic function being folded.
/// - `operand`: The expression supplying the matrix.
/// - `env`: The environment, needed to apply the function.
///
/// # Returns
/// The folded value, or a column of per-row results.
///
/// # Errors
/// - `UnsupportedOperand` if the operand is not a matrix.
/// - `InvalidArgument` if the matrix is empty.
/// - Propagates any errors from the folded function.
pub(crate) fn reduce(function: &str, operand: &Expr, env: &mut Environment) -> EvalResult<Value> {
    let matrix = require_matrix(REDUCE, operand, env)?;
    let mut accumulator: Option<Value> = None;
    let mut snapshots = Vec::with_capacity(matrix.rows());

    for row in (0..matrix.rows()).rev() {
        for column in (0..matrix.columns()).rev() {
            let cell = matrix.get(row, column)?.clone();
            accumulator = Some(match accumulator.take() {
                None => cell,
                Some(total) => call_binary(function, &total, &cell, env)?,
            });
        }
        let snapshot = accumulator.clone().ok_or_else(|| empty_operand(REDUCE))?;
        snapshots.push(snapshot);
    }

    if snapshots.is_empty() {
        return Err(empty_operand(REDUCE));
    }
    if snapshots.len() == 1 {
        let Some(total) = snapshots.pop() else {
            return Err(empty_operand(REDUCE));
        };
        return Ok(total);
    }
    Ok(Matrix::row(snapshots).into())
}

/// Evaluates `f \ EXPR`: the same reverse fold as reduce, but keeping the
/// accumulator after every cell.
///
/// The accumulator runs across row boundaries without resetting, and the
/// per-cell snapshots are reshaped so the result has as many columns as
/// the source has rows.
///
/// # Parameters
/// - `function`: The name of the dyadic function being folded.
/// - `operand`: The expression supplying the matrix.
/// - `env`: The environment, needed to apply the function.
///
/// # Returns
/// The matrix of intermediate results.
///
/// # Errors
/// - `UnsupportedOperand` if the operand is not a matrix.
/// - Propagates any errors from the folded function.
pub(crate) fn scan(function: &str, operand: &Expr, env: &mut Environment) -> EvalResult<Value> {
    let matrix = require_matrix(SCAN, operand, env)?;
    let mut accumulator: Option<Value> = None;
    let mut snapshots = Vec::with_capacity(matrix.cells().len());

    for row in (0..matrix.rows()).rev() {
        for column in (0..matrix.columns()).rev() {
            let cell = matrix.get(row, column)?.clone();
            let next = match accumulator.take() {
                None => cell,
                Some(total) => call_binary(function, &total, &cell, env)?,
            };
            snapshots.push(next.clone());
            accumulator = Some(next);
        }
    }

    if matrix.rows() > 1 {
        Ok(Matrix::new(snapshots, matrix.rows())?.into())
    } else {
        Ok(Matrix::row(snapshots).into())
    }
}

/// Evaluates `MASK \ EXPR`: keeps the cells or characters the mask
/// selects.
///
/// The mask is a matrix of `1`s and `0`s. Filtering a matrix needs
/// matching shapes and yields a single row of the kept cells; filtering
/// text reads the mask's first row against the characters.
///
/// # Parameters
/// - `mask`: The expression supplying the mask.
/// - `value`: The expression supplying the matrix or text.
/// - `env`: The environment.
///
/// # Returns
/// The filtered row or text.
///
/// # Errors
/// - `UnsupportedOperands` if the operands are not a matrix and a
///   matrix or text.
/// - `ShapeMismatch` / `InvalidArgument` if the mask does not cover the
///   value.
pub(crate) fn compress(mask: &Expr, value: &Expr, env: &mut Environment) -> EvalResult<Value> {
    let mask_value = require_value(evaluate(mask, env)?)?;
    let value = require_value(evaluate(value, env)?)?;
    let Value::Matrix(mask) = &mask_value else {
        return Err(mask_value.rejects_pair(COMPRESS, &value));
    };

    match &value {
        Value::Matrix(m) => {
            if !mask.same_shape(m) {
                return Err(RuntimeError::ShapeMismatch { function: COMPRESS,
                                                         left:     mask.shape(),
                                                         right:    m.shape(), });
            }
            let kept = mask.cells()
                           .iter()
                           .zip(m.cells().iter())
                           .filter(|(keep, _)| keep.is_true())
                           .map(|(_, cell)| cell.clone())
                           .collect();
            Ok(Matrix::row(kept).into())
        },
        Value::Text(t) => {
            let characters: Vec<char> = t.chars().collect();
            if mask.columns() != characters.len() {
                return Err(RuntimeError::InvalidArgument {
                    details: format!("a mask of {} columns cannot filter a text of {} characters",
                                     mask.columns(),
                                     characters.len()),
                });
            }
            let mut kept = String::new();
            for (column, character) in characters.iter().enumerate() {
                if mask.get(0, column)?.is_true() {
                    kept.push(*character);
                }
            }
            Ok(Value::Text(kept))
        },
        Value::Number(_) => Err(mask_value.rejects_pair(COMPRESS, &value)),
    }
}

/// Evaluates `A f.g B`: pairs cells of the two matrices with `g`, then
/// folds each row of pairings with `f`.
///
/// The left matrix walks its rows; for each left cell `(i, j)` the
/// partner is the right cell `(j, i)`, so the left row count must equal
/// the right column count. The fold runs left to right across each row's
/// pairings and the per-row results form a single row.
///
/// # Parameters
/// - `fold`: The name of the folding function.
/// - `combine`: The name of the pairwise function.
/// - `left`, `right`: The expressions supplying the matrices.
/// - `env`: The environment.
///
/// # Returns
/// A single row holding one folded value per left row.
///
/// # Errors
/// - `InvalidArgument` if either operand is not a matrix or the
///   dimensions do not line up.
/// - `IndexOutOfBounds` if the right matrix is too short for a pairing.
/// - Propagates any errors from the applied functions.
pub(crate) fn inner_product(fold: &str, combine: &str, left: &Expr, right: &Expr,
                            env: &mut Environment)
                            -> EvalResult<Value> {
    let left = require_matrix(INNER, left, env)?;
    let right = require_matrix(INNER, right, env)?;
    if left.rows() != right.columns() {
        return Err(RuntimeError::InvalidArgument {
            details: format!("the operator '.' pairs an m x n matrix with an n x m one, not {} x \
                              {} with {} x {}",
                             left.rows(),
                             left.columns(),
                             right.rows(),
                             right.columns()),
        });
    }

    let mut results = Vec::with_capacity(left.rows());
    for row in 0..left.rows() {
        let mut total: Option<Value> = None;
        for column in 0..left.columns() {
            let pair = call_binary(combine,
                                   left.get(row, column)?,
                                   right.get(column, row)?,
                                   env)?;
            total = Some(match total.take() {
                None => pair,
                Some(total) => call_binary(fold, &total, &pair, env)?,
            });
        }
        results.push(total.ok_or_else(|| empty_operand(INNER))?);
    }
    Ok(Matrix::row(results).into())
}

/// Evaluates `A @.g B`: applies `g` to every pairing of elements from two
/// vectors.
///
/// Both operands must be vectors (a single row or a single column). The
/// result has one row per left element and one column per right element.
///
/// # Parameters
/// - `combine`: The name of the pairwise function.
/// - `left`, `right`: The expressions supplying the vectors.
/// - `env`: The environment.
///
/// # Returns
/// The matrix of all pairings.
///
/// # Errors
/// - `InvalidArgument` if either operand is not a vector.
/// - Propagates any errors from the applied function.
pub(crate) fn outer_product(combine: &str, left: &Expr, right: &Expr, env: &mut Environment)
                            -> EvalResult<Value> {
    let left = require_matrix(OUTER, left, env)?;
    let right = require_matrix(OUTER, right, env)?;
    if !left.is_vector() || !right.is_vector() {
        return Err(RuntimeError::InvalidArgument {
            details: "the operator '@.' requires two vectors as arguments".to_string(),
        });
    }
    if right.cells().is_empty() {
        return Err(empty_operand(OUTER));
    }

    let mut results = Vec::with_capacity(left.cells().len() * right.cells().len());
    for a in left.cells() {
        for b in right.cells() {
            results.push(call_binary(combine, a, b, env)?);
        }
    }
    Ok(Matrix::new(results, right.cells().len())?.into())
}

/// Evaluates an operand that must come out as a matrix.
fn require_matrix(function: &'static str, operand: &Expr, env: &mut Environment)
                  -> EvalResult<Matrix> {
    let value = require_value(evaluate(operand, env)?)?;
    match value {
        Value::Matrix(m) => Ok(m),
        other => Err(other.rejects(function)),
    }
}

fn empty_operand(function: &'static str) -> RuntimeError {
    RuntimeError::InvalidArgument { details: format!("the function '{function}' cannot operate \
                                                      on an empty matrix"), }
}
