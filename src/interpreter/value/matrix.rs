use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::usize_to_f64,
};

/// A two-dimensional collection of values stored in row-major order.
///
/// The shape is carried as a column count; the row count follows from the
/// number of cells. Cells are themselves values, so matrices can hold
/// numbers, text or nested matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    cells:   Vec<Value>,
    columns: usize,
}

impl Matrix {
    /// Creates a matrix from row-major cells and a column count.
    ///
    /// # Parameters
    /// - `cells`: The cell values in row-major order.
    /// - `columns`: The number of columns per row.
    ///
    /// # Returns
    /// - `Ok(Matrix)`: If the cells divide evenly into the columns.
    /// - `Err(RuntimeError::InvalidMatrixSize)`: Otherwise.
    ///
    /// # Example
    /// ```
    /// use rapl::interpreter::value::{core::Value, matrix::Matrix};
    ///
    /// let m = Matrix::new(vec![Value::Number(1.0), Value::Number(2.0)], 2).unwrap();
    /// assert_eq!(m.rows(), 1);
    /// ```
    pub fn new(cells: Vec<Value>, columns: usize) -> EvalResult<Self> {
        if columns == 0 && !cells.is_empty() || columns != 0 && cells.len() % columns != 0 {
            return Err(RuntimeError::InvalidMatrixSize { cells: cells.len(),
                                                         columns });
        }
        Ok(Self { cells, columns })
    }

    /// Creates a single-row matrix whose column count equals the cell
    /// count.
    pub fn row(cells: Vec<Value>) -> Self {
        let columns = cells.len();
        Self { cells, columns }
    }

    /// Creates the `1x2` matrix `[a b]` used to report shapes and
    /// positions.
    pub fn pair(a: usize, b: usize) -> Self {
        Self::row(vec![Value::Number(usize_to_f64(a)), Value::Number(usize_to_f64(b))])
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        if self.columns == 0 {
            0
        } else {
            self.cells.len() / self.columns
        }
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the shape as a `(rows, columns)` pair.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.columns)
    }

    /// Returns `true` if the two matrices have the same shape.
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }

    /// Returns `true` if either dimension is at most one, so the cells
    /// form a single sequence.
    #[must_use]
    pub fn is_vector(&self) -> bool {
        self.rows() <= 1 || self.columns <= 1
    }

    /// Returns the cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Value] {
        &self.cells
    }

    /// Returns the cell at the given zero-based row and column.
    ///
    /// # Returns
    /// - `Ok(&Value)`: The cell.
    /// - `Err(RuntimeError::IndexOutOfBounds)`: If the position is outside
    ///   the matrix.
    pub fn get(&self, row: usize, column: usize) -> EvalResult<&Value> {
        if row >= self.rows() || column >= self.columns {
            return Err(RuntimeError::IndexOutOfBounds { row,
                                                        column,
                                                        rows: self.rows(),
                                                        columns: self.columns });
        }
        Ok(&self.cells[row * self.columns + column])
    }

    /// Applies a fallible function to every cell, keeping the shape.
    pub fn map_cells<F>(&self, mut apply: F) -> EvalResult<Self>
        where F: FnMut(&Value) -> EvalResult<Value>
    {
        let cells = self.cells
                        .iter()
                        .map(|cell| apply(cell))
                        .collect::<EvalResult<Vec<_>>>()?;
        Ok(Self { cells,
                  columns: self.columns })
    }

    /// Combines two matrices of the same shape cell by cell.
    ///
    /// # Parameters
    /// - `other`: The matrix supplying the right-hand cells.
    /// - `function`: The name reported when the shapes differ.
    /// - `combine`: The pairwise combination.
    ///
    /// # Returns
    /// - `Ok(Matrix)`: The combined matrix with the shared shape.
    /// - `Err(RuntimeError::ShapeMismatch)`: If the shapes differ.
    pub fn zip_cells<F>(&self, other: &Self, function: &'static str, mut combine: F)
                        -> EvalResult<Self>
        where F: FnMut(&Value, &Value) -> EvalResult<Value>
    {
        if !self.same_shape(other) {
            return Err(RuntimeError::ShapeMismatch { function,
                                                     left: self.shape(),
                                                     right: other.shape() });
        }
        let cells = self.cells
                        .iter()
                        .zip(other.cells.iter())
                        .map(|(a, b)| combine(a, b))
                        .collect::<EvalResult<Vec<_>>>()?;
        Ok(Self { cells,
                  columns: self.columns })
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for column in 0..self.columns {
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[row * self.columns + column])?;
            }
            write!(f, "]")?;
        }
        if self.rows() == 0 {
            write!(f, "[]")?;
        }
        Ok(())
    }
}
