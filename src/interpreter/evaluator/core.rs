use std::collections::HashMap;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{builtin, operator},
        value::{core::Value, matrix::Matrix},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Names seeded into the global scope that can never be assigned.
pub const RESERVED_NAMES: [&str; 4] = ["E", "PI", "TRUE", "FALSE"];

/// A user-defined function: its parameter names and unevaluated body.
#[derive(Debug, Clone)]
pub struct FunctionDef {
    /// The parameter names, one for a unary function and two for a
    /// dyadic one.
    pub parameters: Vec<String>,
    /// The body evaluated on every call.
    pub body:       Expr,
}

/// Stores the runtime evaluation state.
///
/// This struct holds the variable scopes and the user-defined functions.
/// The bottom scope is global and comes seeded with the constants `E`,
/// `PI`, `TRUE` and `FALSE`; `let` expressions and function calls stack
/// further scopes on top.
///
/// ## Usage
///
/// An `Environment` is created once and reused across lines, so
/// declarations on one line are visible on the next.
pub struct Environment {
    scopes:           Vec<HashMap<String, Value>>,
    unary_functions:  HashMap<String, FunctionDef>,
    binary_functions: HashMap<String, FunctionDef>,
}

#[allow(clippy::new_without_default)]
impl Environment {
    /// Creates a new environment holding only the seeded constants.
    #[must_use]
    pub fn new() -> Self {
        let mut globals = HashMap::new();
        globals.insert("E".to_string(), Value::Number(std::f64::consts::E));
        globals.insert("PI".to_string(), Value::Number(std::f64::consts::PI));
        globals.insert("TRUE".to_string(), Value::TRUE);
        globals.insert("FALSE".to_string(), Value::FALSE);

        Self { scopes:           vec![globals],
               unary_functions:  HashMap::new(),
               binary_functions: HashMap::new(), }
    }

    /// Looks a variable up, innermost scope first.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Binds a variable in the innermost scope.
    ///
    /// # Errors
    /// Returns `RuntimeError::ReservedVariable` for the seeded constants.
    pub fn set_variable(&mut self, name: &str, value: Value) -> EvalResult<()> {
        if RESERVED_NAMES.contains(&name) {
            return Err(RuntimeError::ReservedVariable { name: name.to_string() });
        }
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), value);
        }
        Ok(())
    }

    /// Looks up a user-defined unary function.
    #[must_use]
    pub fn unary_function(&self, name: &str) -> Option<&FunctionDef> {
        self.unary_functions.get(name)
    }

    /// Looks up a user-defined dyadic function.
    #[must_use]
    pub fn binary_function(&self, name: &str) -> Option<&FunctionDef> {
        self.binary_functions.get(name)
    }

    pub(crate) fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    pub(crate) fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Swaps every scope above the global one for a fresh call scope.
    /// Function bodies only see their parameters and the globals, so a
    /// function cannot read its caller's locals.
    pub(crate) fn enter_call_scope(&mut self) -> Vec<HashMap<String, Value>> {
        let saved = self.scopes.split_off(1);
        self.scopes.push(HashMap::new());
        saved
    }

    /// Restores the caller's scopes after a function call.
    pub(crate) fn exit_call_scope(&mut self, saved: Vec<HashMap<String, Value>>) {
        self.scopes.truncate(1);
        self.scopes.extend(saved);
    }

    pub(crate) fn declare_function(&mut self, name: &str, definition: FunctionDef) {
        if definition.parameters.len() == 2 {
            self.binary_functions.insert(name.to_string(), definition);
        } else {
            self.unary_functions.insert(name.to_string(), definition);
        }
    }
}

/// Evaluates an expression and returns the resulting value.
///
/// This is the main entry point for expression evaluation. The evaluator
/// dispatches on the expression variant: literals, matrix literals,
/// variables, declarations, function application, the structural
/// operators, `let` expressions and conditionals.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
/// - `env`: The environment supplying variables and functions.
///
/// # Returns
/// `Some(Value)` for expressions that produce a value, or `None` for the
/// declarations, which do not yield one.
pub fn evaluate(expr: &Expr, env: &mut Environment) -> EvalResult<Option<Value>> {
    match expr {
        Expr::Literal(text) => Ok(Some(Value::from_literal(text))),

        Expr::MatrixLiteral(elements) => {
            let cells = elements.iter()
                                .map(|element| require_value(evaluate(element, env)?))
                                .collect::<EvalResult<Vec<_>>>()?;
            let columns = cells.len();
            Ok(Some(Matrix::new(cells, columns)?.into()))
        },

        Expr::Variable(name) => {
            env.get_variable(name)
               .cloned()
               .map(Some)
               .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone() })
        },

        Expr::VariableDeclaration { name, value } => {
            let value = require_value(evaluate(value, env)?)?;
            env.set_variable(name, value)?;
            Ok(None)
        },

        Expr::FunctionDeclaration { name,
                                    parameter,
                                    second,
                                    body, } => {
            let mut parameters = vec![parameter.clone()];
            parameters.extend(second.clone());
            env.declare_function(name, FunctionDef { parameters,
                                                     body: body.as_ref().clone() });
            Ok(None)
        },

        Expr::Call { name, arguments } => match arguments.as_slice() {
            [argument] => {
                let argument = require_value(evaluate(argument, env)?)?;
                Ok(Some(builtin::call_unary(name, &argument, env)?))
            },
            [left, right] => {
                let left = require_value(evaluate(left, env)?)?;
                let right = require_value(evaluate(right, env)?)?;
                Ok(Some(builtin::call_binary(name, &left, &right, env)?))
            },
            _ => Err(RuntimeError::UnknownFunction { name: name.clone() }),
        },

        Expr::Reduce { function, operand } => {
            Ok(Some(operator::reduce(function, operand, env)?))
        },

        Expr::Scan { function, operand } => Ok(Some(operator::scan(function, operand, env)?)),

        Expr::Compress { mask, value } => Ok(Some(operator::compress(mask, value, env)?)),

        Expr::InnerProduct { fold,
                             combine,
                             left,
                             right, } => {
            Ok(Some(operator::inner_product(fold, combine, left, right, env)?))
        },

        Expr::OuterProduct { combine, left, right } => {
            Ok(Some(operator::outer_product(combine, left, right, env)?))
        },

        Expr::LetExpression { name, binding, body } => {
            let bound = require_value(evaluate(binding, env)?)?;
            env.push_scope();
            let result = env.set_variable(name, bound)
                            .and_then(|()| evaluate(body, env));
            env.pop_scope();
            result
        },

        Expr::Conditional { condition,
                            then_branch,
                            else_branch, } => {
            let condition = require_value(evaluate(condition, env)?)?;
            if condition_holds(&condition)? {
                evaluate(then_branch, env)
            } else if let Some(else_branch) = else_branch {
                evaluate(else_branch, env)
            } else {
                Ok(None)
            }
        },
    }
}

/// Unwraps an evaluation result that must produce a value.
///
/// # Errors
/// Returns `RuntimeError::MissingValue` if the expression was a
/// declaration and produced none.
pub fn require_value(value: Option<Value>) -> EvalResult<Value> {
    value.ok_or(RuntimeError::MissingValue)
}

/// Decides whether a condition value selects the `then` branch.
///
/// A number must be the canonical `1`; a matrix holds if any cell is a
/// non-zero number.
fn condition_holds(condition: &Value) -> EvalResult<bool> {
    match condition {
        Value::Number(_) => Ok(condition.is_true()),
        Value::Matrix(m) => Ok(m.cells()
                                .iter()
                                .any(|cell| !matches!(cell, Value::Number(n) if *n == 0.0))),
        Value::Text(_) => Err(RuntimeError::InvalidArgument {
            details: "a condition must be a number or a matrix".to_string(),
        }),
    }
}
