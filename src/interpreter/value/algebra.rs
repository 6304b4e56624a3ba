use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

const POWER: &str = "power (^)";
const LOG: &str = "log";
const FACTORIAL: &str = "factorial (!)";
const INVERT: &str = "invert (~)";
const SQRT: &str = "sqrt";
const NROOT: &str = "nroot";

/// The `^ log ! ~ sqrt nroot` family.
impl Value {
    /// Dyadic `^`: raises the left number to the right number.
    pub fn power(&self, arg: &Self) -> EvalResult<Self> {
        match (self, arg) {
            (Self::Number(a), Self::Number(b)) => Ok(Self::Number(a.powf(*b))),
            (Self::Number(_), Self::Matrix(m)) => Ok(m.map_cells(|cell| self.power(cell))?.into()),
            (Self::Matrix(m), Self::Number(_)) => Ok(m.map_cells(|cell| cell.power(arg))?.into()),
            (Self::Matrix(m), Self::Matrix(n)) => {
                Ok(m.zip_cells(n, POWER, |a, b| a.power(b))?.into())
            },
            _ => Err(self.rejects_pair(POWER, arg)),
        }
    }

    /// Monadic `^`: `e` raised to the number.
    pub fn monadic_power(&self) -> EvalResult<Self> {
        match self {
            Self::Number(n) => Ok(Self::Number(n.exp())),
            Self::Text(_) => Err(self.rejects(POWER)),
            Self::Matrix(_) => Err(self.unimplemented(POWER)),
        }
    }

    /// Dyadic `log`: the logarithm of the left number in the base given
    /// on the right.
    pub fn log(&self, arg: &Self) -> EvalResult<Self> {
        match (self, arg) {
            (Self::Number(a), Self::Number(b)) => Ok(Self::Number(a.log(*b))),
            (Self::Number(_), Self::Matrix(m)) => Ok(m.map_cells(|cell| self.log(cell))?.into()),
            (Self::Matrix(_), _) => Err(self.unimplemented_pair(LOG, arg)),
            _ => Err(self.rejects_pair(LOG, arg)),
        }
    }

    /// Monadic `log`: the natural logarithm.
    pub fn monadic_log(&self) -> EvalResult<Self> {
        match self {
            Self::Number(n) => Ok(Self::Number(n.ln())),
            Self::Text(_) => Err(self.rejects(LOG)),
            Self::Matrix(_) => Err(self.unimplemented(LOG)),
        }
    }

    /// Dyadic `!`: the number of ways to choose the right count from the
    /// left count, `n ! r`.
    pub fn factorial(&self, arg: &Self) -> EvalResult<Self> {
        match (self, arg) {
            (Self::Number(n), Self::Number(r)) => {
                if *n < 0.0 || *r < 0.0 {
                    return Err(self.rejects_pair(FACTORIAL, arg));
                }
                if *r > *n {
                    return Ok(Self::Number(0.0));
                }
                let mut result = 1.0;
                let mut k = 1.0;
                while k <= *r {
                    result *= (n - r + k) / k;
                    k += 1.0;
                }
                Ok(Self::Number(result))
            },
            (Self::Number(_), Self::Matrix(m)) => {
                Ok(m.map_cells(|cell| self.factorial(cell))?.into())
            },
            (Self::Matrix(_), _) => Err(self.unimplemented_pair(FACTORIAL, arg)),
            _ => Err(self.rejects_pair(FACTORIAL, arg)),
        }
    }

    /// Monadic `!`: the sum of the whole numbers below the operand, so
    /// `! 4` is `0 + 1 + 2 + 3`.
    pub fn monadic_factorial(&self) -> EvalResult<Self> {
        match self {
            Self::Number(n) => {
                let mut total = 0.0;
                let mut i = 0.0;
                while i < *n {
                    total += i;
                    i += 1.0;
                }
                Ok(Self::Number(total))
            },
            Self::Text(_) => Err(self.rejects(FACTORIAL)),
            Self::Matrix(m) => Ok(m.map_cells(Self::monadic_factorial)?.into()),
        }
    }

    /// Dyadic `~` has no defined meaning.
    pub fn invert_pair(&self, arg: &Self) -> EvalResult<Self> {
        Err(self.unimplemented_pair(INVERT, arg))
    }

    /// Monadic `~`: boolean not on `0` and `1`, negation on other
    /// numbers, case swapping on text.
    pub fn invert(&self) -> EvalResult<Self> {
        match self {
            Self::Number(n) => {
                if *n == 0.0 {
                    Ok(Self::TRUE)
                } else if *n == 1.0 {
                    Ok(Self::FALSE)
                } else {
                    Ok(Self::Number(-n))
                }
            },
            Self::Text(t) => {
                let swapped = t.chars()
                               .map(|c| {
                                   if c.is_uppercase() {
                                       c.to_ascii_lowercase()
                                   } else {
                                       c.to_ascii_uppercase()
                                   }
                               })
                               .collect();
                Ok(Self::Text(swapped))
            },
            Self::Matrix(m) => Ok(m.map_cells(Self::invert)?.into()),
        }
    }

    /// Monadic `sqrt`: the square root of a number.
    pub fn sqrt(&self) -> EvalResult<Self> {
        match self {
            Self::Number(n) => Ok(Self::Number(n.sqrt())),
            Self::Text(_) => Err(self.unimplemented(SQRT)),
            Self::Matrix(m) => Ok(m.map_cells(Self::sqrt)?.into()),
        }
    }

    /// Dyadic `nroot` has no defined meaning yet.
    pub fn nroot(&self, arg: &Self) -> EvalResult<Self> {
        Err(self.unimplemented_pair(NROOT, arg))
    }
}
