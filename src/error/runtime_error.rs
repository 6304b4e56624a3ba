use crate::interpreter::value::core::ValueKind;

#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to read an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called an unknown function.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// Tried to assign to one of the seeded constants.
    ReservedVariable {
        /// The name of the constant.
        name: String,
    },
    /// A monadic function was applied to a value it cannot operate on.
    UnsupportedOperand {
        /// The name of the function.
        function: &'static str,
        /// The kind of the operand.
        operand:  ValueKind,
    },
    /// A dyadic function was applied to a pair of values it cannot
    /// operate on.
    UnsupportedOperands {
        /// The name of the function.
        function: &'static str,
        /// The kind of the left operand.
        left:     ValueKind,
        /// The kind of the right operand.
        right:    ValueKind,
    },
    /// A monadic function has no behaviour for this operand kind yet.
    NotImplemented {
        /// The name of the function.
        function: &'static str,
        /// The kind of the operand.
        operand:  ValueKind,
    },
    /// A dyadic function has no behaviour for this pair of operand kinds
    /// yet.
    NotImplementedOperands {
        /// The name of the function.
        function: &'static str,
        /// The kind of the left operand.
        left:     ValueKind,
        /// The kind of the right operand.
        right:    ValueKind,
    },
    /// Two matrices with different shapes were combined cell by cell.
    ShapeMismatch {
        /// The name of the function.
        function: &'static str,
        /// The shape of the left operand as rows by columns.
        left:     (usize, usize),
        /// The shape of the right operand as rows by columns.
        right:    (usize, usize),
    },
    /// The cells of a matrix do not divide evenly into its columns.
    InvalidMatrixSize {
        /// The number of cells.
        cells:   usize,
        /// The requested column count.
        columns: usize,
    },
    /// Attempted division (or modulus) by zero.
    DivisionByZero {
        /// The name of the function.
        function: &'static str,
    },
    /// Tried to access a matrix cell outside the allowed bounds.
    IndexOutOfBounds {
        /// The requested row.
        row:     usize,
        /// The requested column.
        column:  usize,
        /// The number of rows in the matrix.
        rows:    usize,
        /// The number of columns in the matrix.
        columns: usize,
    },
    /// An argument was invalid or out of range.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
    /// An expected value was missing (e.g., a declaration was used where
    /// a value was required).
    MissingValue,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => {
                write!(f, "Runtime error: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name } => {
                write!(f, "Runtime error: Unknown function '{name}'.")
            },
            Self::ReservedVariable { name } => write!(f,
                                                      "Runtime error: '{name}' is a reserved name and cannot be assigned."),

            Self::UnsupportedOperand { function, operand } => write!(f,
                                                                     "Runtime error: The argument type '{operand}' passed to the function '{function}' is not acceptable."),
            Self::UnsupportedOperands { function, left, right } => write!(f,
                                                                          "Runtime error: The argument types '{left}' and '{right}' passed to the function '{function}' are not acceptable."),

            Self::NotImplemented { function, operand } => write!(f,
                                                                 "Runtime error: The function '{function}' has not been implemented for '{operand}' operands."),
            Self::NotImplementedOperands { function, left, right } => write!(f,
                                                                             "Runtime error: The function '{function}' has not been implemented for '{left}' and '{right}' operands."),

            Self::ShapeMismatch { function, left, right } => write!(f,
                                                                    "Runtime error: The function '{function}' requires matrices of the same size, but {}x{} and {}x{} were given.",
                                                                    left.0, left.1, right.0, right.1),

            Self::InvalidMatrixSize { cells, columns } => write!(f,
                                                                 "Runtime error: {cells} cells cannot be arranged into rows of {columns} columns."),

            Self::DivisionByZero { function } => write!(f,
                                                        "Runtime error: The function '{function}' is not capable of dividing by 0."),

            Self::IndexOutOfBounds { row, column, rows, columns } => write!(f,
                                                                            "Runtime error: The cell ({row}, {column}) is outside a matrix of {rows} rows and {columns} columns."),

            Self::InvalidArgument { details } => {
                write!(f, "Runtime error: Invalid argument: {details}.")
            },

            Self::MissingValue => write!(f, "Runtime error: Value missing."),
        }
    }
}

impl std::error::Error for RuntimeError {}
