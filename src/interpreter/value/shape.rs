use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, matrix::Matrix},
    },
    util::num::{f64_to_usize_checked, usize_to_f64},
};

const SIZE: &str = "size (p)";
const RESHAPE: &str = "reshape (p)";
const INDEX: &str = "index (i)";
const EXTRACT: &str = "extract ($)";
const FIND: &str = "find";

/// The shape and lookup family.
impl Value {
    /// Monadic `p`: the shape of a value as a `[rows columns]` pair.
    /// Numbers are a single cell, text is one row of characters.
    pub fn size(&self) -> EvalResult<Self> {
        match self {
            Self::Number(_) => Ok(Matrix::pair(1, 1).into()),
            Self::Text(t) => Ok(Matrix::pair(1, t.chars().count()).into()),
            Self::Matrix(m) => Ok(Matrix::pair(m.rows(), m.columns()).into()),
        }
    }

    /// Dyadic `p`, written `SHAPE p VALUE`, called on the value with the
    /// shape as the argument.
    ///
    /// A numeric shape gives a single row of that many columns; a
    /// `[columns rows]` pair gives a full reshape. Numbers are repeated
    /// to fill the shape, matrices must divide evenly into it.
    pub fn reshape(&self, shape: &Self) -> EvalResult<Self> {
        match (self, shape) {
            (Self::Number(_), Self::Number(c)) => {
                let columns = checked_dimension(*c)?;
                Ok(Matrix::new(vec![self.clone(); columns], columns)?.into())
            },
            (Self::Number(_), Self::Matrix(m)) => {
                let (columns, rows) = reshape_pair(m)?;
                Ok(Matrix::new(vec![self.clone(); columns * rows], columns)?.into())
            },
            (Self::Matrix(m), Self::Number(c)) => {
                let columns = checked_dimension(*c)?;
                Ok(Matrix::new(m.cells().to_vec(), columns)?.into())
            },
            (Self::Matrix(m), Self::Matrix(n)) => {
                let (columns, rows) = reshape_pair(n)?;
                if columns * rows != m.cells().len() {
                    return Err(RuntimeError::InvalidMatrixSize { cells: m.cells().len(),
                                                                 columns });
                }
                Ok(Matrix::new(m.cells().to_vec(), columns)?.into())
            },
            _ => Err(self.rejects_pair(RESHAPE, shape)),
        }
    }

    /// Monadic `i`: counts from `1` up to the operand as a single row, so
    /// `i 4` is `[1 2 3 4]`.
    pub fn monadic_index(&self) -> EvalResult<Self> {
        match self {
            Self::Number(n) => {
                let count = checked_count(*n, INDEX)?;
                let cells = (1..=count).map(|v| Self::Number(usize_to_f64(v))).collect();
                Ok(Matrix::row(cells).into())
            },
            _ => Err(self.rejects(INDEX)),
        }
    }

    /// Dyadic `i`, written `POSITION i MATRIX`: the cell at the given
    /// position. A numeric position reads the first row; a
    /// `[row column]` pair addresses any cell.
    pub fn index(&self, arg: &Self) -> EvalResult<Self> {
        match (self, arg) {
            (Self::Number(n), Self::Matrix(m)) => {
                let column = checked_count(*n, INDEX)?;
                Ok(m.get(0, column)?.clone())
            },
            (Self::Matrix(position), Self::Matrix(m)) => {
                let row = cell_count(position, 0, INDEX)?;
                let column = cell_count(position, 1, INDEX)?;
                Ok(m.get(row, column)?.clone())
            },
            _ => Err(self.rejects_pair(INDEX, arg)),
        }
    }

    /// Dyadic `$`, written `POSITION $ MATRIX`: extracts a single cell.
    /// A numeric position reads the first row; a `[row column]` pair
    /// addresses any cell.
    pub fn extract(&self, arg: &Self) -> EvalResult<Self> {
        match (self, arg) {
            (Self::Number(n), Self::Matrix(m)) => {
                let column = checked_count(*n, EXTRACT)?;
                Ok(m.get(0, column)?.clone())
            },
            (Self::Matrix(position), Self::Matrix(m)) => {
                let row = cell_count(position, 0, EXTRACT)?;
                let column = cell_count(position, 1, EXTRACT)?;
                Ok(m.get(row, column)?.clone())
            },
            _ => Err(self.rejects_pair(EXTRACT, arg)),
        }
    }

    /// Dyadic `find`: the position of the left value inside the right.
    /// A number in a matrix yields its `[row column]` pair, text in text
    /// yields a character offset; a miss yields `-1`.
    pub fn find(&self, arg: &Self) -> EvalResult<Self> {
        match (self, arg) {
            (Self::Number(_), Self::Matrix(m)) => {
                for row in 0..m.rows() {
                    for column in 0..m.columns() {
                        if m.get(row, column)? == self {
                            return Ok(Matrix::pair(row, column).into());
                        }
                    }
                }
                Ok(Self::Number(-1.0))
            },
            (Self::Text(t), Self::Text(u)) => {
                let position = u.find(t.as_str())
                                .map(|byte| usize_to_f64(u[..byte].chars().count()));
                Ok(Self::Number(position.unwrap_or(-1.0)))
            },
            (Self::Text(_), Self::Matrix(m)) => Ok(m.map_cells(|cell| self.find(cell))?.into()),
            _ => Err(self.rejects_pair(FIND, arg)),
        }
    }
}

/// Reads a `[columns rows]` pair out of a reshape argument.
fn reshape_pair(shape: &Matrix) -> EvalResult<(usize, usize)> {
    if shape.columns() != 2 {
        return Err(RuntimeError::InvalidArgument {
            details: "a reshape needs a [columns rows] pair".to_string(),
        });
    }
    let columns = cell_count(shape, 0, RESHAPE)?;
    let rows = cell_count(shape, 1, RESHAPE)?;
    if columns == 0 {
        return Err(RuntimeError::InvalidMatrixSize { cells: columns * rows,
                                                     columns });
    }
    Ok((columns, rows))
}

/// Reads a whole non-negative number from the first row of a matrix.
fn cell_count(matrix: &Matrix, column: usize, function: &'static str) -> EvalResult<usize> {
    match matrix.get(0, column)? {
        Value::Number(n) => checked_count(*n, function),
        other => Err(other.rejects(function)),
    }
}

/// Converts a numeric dimension, rejecting zero and fractions.
fn checked_dimension(value: f64) -> EvalResult<usize> {
    let columns = checked_count(value, RESHAPE)?;
    if columns == 0 {
        return Err(RuntimeError::InvalidMatrixSize { cells: 0, columns });
    }
    Ok(columns)
}

/// Converts a numeric argument to a cell or column count.
fn checked_count(value: f64, function: &'static str) -> EvalResult<usize> {
    f64_to_usize_checked(value, RuntimeError::InvalidArgument {
        details: format!("the function '{function}' needs a whole non-negative number, not {value}"),
    })
}
