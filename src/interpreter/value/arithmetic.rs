use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, matrix::Matrix},
    },
    util::num::f64_to_usize_checked,
};

const ADD: &str = "add (+)";
const SUBTRACT: &str = "subtract (-)";
const MULTIPLY: &str = "multiply (x)";
const DIVIDE: &str = "divide (%)";
const MODULUS: &str = "modulus (|)";

/// The `+ - x % |` family.
///
/// Every dyadic form broadcasts over matrices: scalar-matrix pairs apply
/// the scalar to every cell and matrix-matrix pairs combine cell by cell
/// when the shapes agree.
impl Value {
    /// Dyadic `+`: numeric addition, or concatenation when either side is
    /// text.
    pub fn add(&self, arg: &Self) -> EvalResult<Self> {
        match (self, arg) {
            (Self::Number(a), Self::Number(b)) => Ok(Self::Number(a + b)),
            (Self::Number(a), Self::Text(t)) => Ok(Self::Text(format!("{a}{t}"))),
            (Self::Text(t), Self::Number(b)) => Ok(Self::Text(format!("{t}{b}"))),
            (Self::Text(t), Self::Text(u)) => Ok(Self::Text(format!("{t}{u}"))),
            (Self::Number(_) | Self::Text(_), Self::Matrix(m)) => {
                Ok(m.map_cells(|cell| self.add(cell))?.into())
            },
            (Self::Matrix(m), Self::Number(_) | Self::Text(_)) => {
                Ok(m.map_cells(|cell| cell.add(arg))?.into())
            },
            (Self::Matrix(m), Self::Matrix(n)) => {
                Ok(m.zip_cells(n, ADD, |a, b| a.add(b))?.into())
            },
        }
    }

    /// Monadic `+`: identity on numbers, uppercase on text.
    pub fn monadic_add(&self) -> EvalResult<Self> {
        match self {
            Self::Number(_) => Ok(self.clone()),
            Self::Text(t) => Ok(Self::Text(t.to_uppercase())),
            Self::Matrix(m) => Ok(m.map_cells(Self::monadic_add)?.into()),
        }
    }

    /// Dyadic `-`: numeric subtraction, cropping text by a count or
    /// removing the first occurrence of one text from another.
    pub fn subtract(&self, arg: &Self) -> EvalResult<Self> {
        match (self, arg) {
            (Self::Number(a), Self::Number(b)) => Ok(Self::Number(a - b)),
            (Self::Number(_), Self::Text(_)) => Err(self.rejects_pair(SUBTRACT, arg)),
            (Self::Text(t), Self::Number(b)) => {
                let count =
                    f64_to_usize_checked(*b, RuntimeError::InvalidArgument {
                        details: format!("a text cannot be cropped by {b}"),
                    })?;
                let characters: Vec<char> = t.chars().collect();
                if count > characters.len() {
                    return Err(RuntimeError::InvalidArgument {
                        details: format!("the text '{t}' cannot be cropped by more than its length"),
                    });
                }
                Ok(Self::Text(characters[..characters.len() - count].iter().collect()))
            },
            (Self::Text(t), Self::Text(u)) => {
                if t.contains(u.as_str()) {
                    Ok(Self::Text(t.replacen(u.as_str(), "", 1)))
                } else {
                    Err(RuntimeError::InvalidArgument {
                        details: format!("the text '{u}' does not occur in '{t}'"),
                    })
                }
            },
            (Self::Number(_) | Self::Text(_), Self::Matrix(m)) => {
                Ok(m.map_cells(|cell| self.subtract(cell))?.into())
            },
            (Self::Matrix(m), Self::Number(_) | Self::Text(_)) => {
                Ok(m.map_cells(|cell| cell.subtract(arg))?.into())
            },
            (Self::Matrix(m), Self::Matrix(n)) => {
                Ok(m.zip_cells(n, SUBTRACT, |a, b| a.subtract(b))?.into())
            },
        }
    }

    /// Monadic `-`: negation on numbers, lowercase on text.
    pub fn monadic_subtract(&self) -> EvalResult<Self> {
        match self {
            Self::Number(n) => Ok(Self::Number(-n)),
            Self::Text(t) => Ok(Self::Text(t.to_lowercase())),
            Self::Matrix(m) => Ok(m.map_cells(Self::monadic_subtract)?.into()),
        }
    }

    /// Dyadic `x`: numeric multiplication, or repetition when one side is
    /// text and the other a count.
    pub fn multiply(&self, arg: &Self) -> EvalResult<Self> {
        match (self, arg) {
            (Self::Number(a), Self::Number(b)) => Ok(Self::Number(a * b)),
            (Self::Number(a), Self::Text(t)) | (Self::Text(t), Self::Number(a)) => {
                let count =
                    f64_to_usize_checked(*a, RuntimeError::InvalidArgument {
                        details: format!("a text cannot be repeated {a} times"),
                    })?;
                Ok(Self::Text(t.repeat(count)))
            },
            (Self::Text(_), Self::Text(_)) => Err(self.rejects_pair(MULTIPLY, arg)),
            (Self::Number(_) | Self::Text(_), Self::Matrix(m)) => {
                Ok(m.map_cells(|cell| self.multiply(cell))?.into())
            },
            (Self::Matrix(m), Self::Number(_) | Self::Text(_)) => {
                Ok(m.map_cells(|cell| cell.multiply(arg))?.into())
            },
            (Self::Matrix(m), Self::Matrix(n)) => {
                Ok(m.zip_cells(n, MULTIPLY, |a, b| a.multiply(b))?.into())
            },
        }
    }

    /// Monadic `x`: the sign of a number as `-1`, `0` or `1`.
    pub fn monadic_multiply(&self) -> EvalResult<Self> {
        match self {
            Self::Number(n) => {
                let sign = if *n > 0.0 {
                    1.0
                } else if *n < 0.0 {
                    -1.0
                } else {
                    0.0
                };
                Ok(Self::Number(sign))
            },
            Self::Text(_) => Err(self.rejects(MULTIPLY)),
            Self::Matrix(m) => Ok(m.map_cells(Self::monadic_multiply)?.into()),
        }
    }

    /// Dyadic `%`: numeric division, or splitting text into fixed-size
    /// chunks.
    pub fn divide(&self, arg: &Self) -> EvalResult<Self> {
        match (self, arg) {
            (Self::Number(a), Self::Number(b)) => {
                if *b == 0.0 {
                    return Err(RuntimeError::DivisionByZero { function: DIVIDE });
                }
                Ok(Self::Number(a / b))
            },
            (Self::Number(_), Self::Text(_)) | (Self::Text(_), Self::Text(_)) => {
                Err(self.rejects_pair(DIVIDE, arg))
            },
            (Self::Text(t), Self::Number(b)) => {
                let size =
                    f64_to_usize_checked(*b, RuntimeError::InvalidArgument {
                        details: format!("a text cannot be split into chunks of {b}"),
                    })?;
                if size == 0 {
                    return Err(RuntimeError::DivisionByZero { function: DIVIDE });
                }
                let characters: Vec<char> = t.chars().collect();
                let chunks = characters.chunks(size)
                                       .map(|chunk| Self::Text(chunk.iter().collect()))
                                       .collect();
                Ok(Matrix::row(chunks).into())
            },
            (Self::Number(_) | Self::Text(_), Self::Matrix(m)) => {
                Ok(m.map_cells(|cell| self.divide(cell))?.into())
            },
            (Self::Matrix(m), Self::Number(_) | Self::Text(_)) => {
                Ok(m.map_cells(|cell| cell.divide(arg))?.into())
            },
            (Self::Matrix(m), Self::Matrix(n)) => {
                Ok(m.zip_cells(n, DIVIDE, |a, b| a.divide(b))?.into())
            },
        }
    }

    /// Monadic `%`: the reciprocal of a number, or text exploded into a
    /// row of single characters.
    pub fn monadic_divide(&self) -> EvalResult<Self> {
        match self {
            Self::Number(n) => {
                if *n == 0.0 {
                    return Err(RuntimeError::DivisionByZero { function: DIVIDE });
                }
                Ok(Self::Number(1.0 / n))
            },
            Self::Text(t) => {
                let characters = t.chars().map(|c| Self::Text(c.to_string())).collect();
                Ok(Matrix::row(characters).into())
            },
            Self::Matrix(m) => Ok(m.map_cells(Self::monadic_divide)?.into()),
        }
    }

    /// Dyadic `|` (also spelled `mod`): the remainder of numeric division.
    pub fn modulus(&self, arg: &Self) -> EvalResult<Self> {
        match (self, arg) {
            (Self::Number(a), Self::Number(b)) => {
                if *b == 0.0 {
                    return Err(RuntimeError::DivisionByZero { function: MODULUS });
                }
                Ok(Self::Number(a % b))
            },
            (Self::Number(_), Self::Matrix(m)) => {
                Ok(m.map_cells(|cell| self.modulus(cell))?.into())
            },
            (Self::Matrix(m), Self::Number(_)) => {
                Ok(m.map_cells(|cell| cell.modulus(arg))?.into())
            },
            (Self::Matrix(m), Self::Matrix(n)) => {
                Ok(m.zip_cells(n, MODULUS, |a, b| a.modulus(b))?.into())
            },
            _ => Err(self.rejects_pair(MODULUS, arg)),
        }
    }

    /// Monadic `|`: the absolute value of a number.
    pub fn monadic_modulus(&self) -> EvalResult<Self> {
        match self {
            Self::Number(n) => Ok(Self::Number(n.abs())),
            Self::Text(_) => Err(self.rejects(MODULUS)),
            Self::Matrix(m) => Ok(m.map_cells(Self::monadic_modulus)?.into()),
        }
    }
}
