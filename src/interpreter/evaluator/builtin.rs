use rand::{
    seq::{index, SliceRandom},
    Rng,
};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{evaluate, require_value, Environment, EvalResult, FunctionDef},
        value::{core::Value, matrix::Matrix},
    },
    util::num::{f64_to_usize_checked, usize_to_f64},
};

const DEAL: &str = "deal (?)";
const SORT: &str = "sorta";

/// Applies a named function to a single argument.
///
/// Built-in names are dispatched to the value operations; any other name
/// is looked up among the user-defined unary functions.
///
/// # Parameters
/// - `name`: The function name as written in the source.
/// - `argument`: The evaluated argument.
/// - `env`: The environment, needed for user-defined bodies.
///
/// # Returns
/// The function result.
///
/// # Errors
/// - `UnknownFunction` if the name is neither built in nor declared.
/// - Propagates any errors from the operation itself.
pub fn call_unary(name: &str, argument: &Value, env: &mut Environment) -> EvalResult<Value> {
    match name {
        "+" => argument.monadic_add(),
        "-" => argument.monadic_subtract(),
        "x" => argument.monadic_multiply(),
        "%" => argument.monadic_divide(),
        "mod" | "|" => argument.monadic_modulus(),
        "=" => argument.monadic_equals(),
        ">" => argument.monadic_greater_than(),
        "<" => argument.monadic_less_than(),
        ">=" => argument.monadic_greater_equal(),
        "<=" => argument.monadic_less_equal(),
        "bigger" => argument.monadic_bigger(),
        "smaller" => argument.monadic_smaller(),
        "^" => argument.monadic_power(),
        "log" => argument.monadic_log(),
        "sqrt" => argument.sqrt(),
        "!" => argument.monadic_factorial(),
        "~" => argument.invert(),
        "p" => argument.size(),
        "i" => argument.monadic_index(),
        "sorta" => sort_ascending(argument),
        "?" => deal_one(argument),
        _ => call_user_unary(name, argument, env),
    }
}

/// Applies a named function to two arguments.
///
/// Built-in names are dispatched to the value operations; any other name
/// is looked up among the user-defined dyadic functions.
///
/// # Parameters
/// - `name`: The function name as written in the source.
/// - `left`: The evaluated left argument.
/// - `right`: The evaluated right argument.
/// - `env`: The environment, needed for user-defined bodies.
///
/// # Returns
/// The function result.
///
/// # Errors
/// - `UnknownFunction` if the name is neither built in nor declared.
/// - Propagates any errors from the operation itself.
pub fn call_binary(name: &str, left: &Value, right: &Value, env: &mut Environment)
                   -> EvalResult<Value> {
    match name {
        "+" => left.add(right),
        "-" => left.subtract(right),
        "x" => left.multiply(right),
        "%" => left.divide(right),
        "mod" | "|" => left.modulus(right),
        "=" => left.equals(right),
        ">" => left.greater_than(right),
        "<" => left.less_than(right),
        ">=" => left.greater_equal(right),
        "<=" => left.less_equal(right),
        "bigger" => left.bigger(right),
        "smaller" => left.smaller(right),
        "^" => left.power(right),
        "log" => left.log(right),
        "!" => left.factorial(right),
        "~" => left.invert_pair(right),
        "nroot" => left.nroot(right),
        "p" => right.reshape(left),
        "i" => left.index(right),
        "$" => left.extract(right),
        "find" => left.find(right),
        "?" => deal(left, right),
        _ => call_user_binary(name, left, right, env),
    }
}

/// Calls a user-defined unary function.
fn call_user_unary(name: &str, argument: &Value, env: &mut Environment) -> EvalResult<Value> {
    let definition =
        env.unary_function(name)
           .cloned()
           .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string() })?;
    call_user(&definition, &[argument], env)
}

/// Calls a user-defined dyadic function.
fn call_user_binary(name: &str, left: &Value, right: &Value, env: &mut Environment)
                    -> EvalResult<Value> {
    let definition =
        env.binary_function(name)
           .cloned()
           .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string() })?;
    call_user(&definition, &[left, right], env)
}

/// Runs a user-defined function body with its arguments bound.
///
/// The call runs in a fresh scope that sees only the parameters and the
/// globals; the caller's scopes are restored afterwards whether or not
/// the body succeeds.
fn call_user(definition: &FunctionDef, arguments: &[&Value], env: &mut Environment)
             -> EvalResult<Value> {
    let saved = env.enter_call_scope();
    let mut bound = Ok(());
    for (parameter, argument) in definition.parameters.iter().zip(arguments) {
        bound = bound.and_then(|()| env.set_variable(parameter, (*argument).clone()));
    }
    let result = bound.and_then(|()| evaluate(&definition.body, env));
    env.exit_call_scope(saved);

    require_value(result?)
}

/// Monadic `?`: one random draw from the operand. A number `n` yields a
/// whole number below `n`; text and matrices yield one of their elements.
fn deal_one(argument: &Value) -> EvalResult<Value> {
    let mut rng = rand::thread_rng();
    match argument {
        Value::Number(n) => {
            let max = deal_range(*n)?;
            Ok(Value::Number(usize_to_f64(rng.gen_range(0..max))))
        },
        Value::Text(t) => {
            let characters: Vec<char> = t.chars().collect();
            let drawn = characters.choose(&mut rng).ok_or_else(empty_deal)?;
            Ok(Value::Text(drawn.to_string()))
        },
        Value::Matrix(m) => {
            let drawn = m.cells().choose(&mut rng).ok_or_else(empty_deal)?;
            Ok(drawn.clone())
        },
    }
}

/// Dyadic `?`, written `COUNT ? SOURCE`: a row of random draws.
///
/// Drawing from a number `m` yields whole numbers below `m`; the draws
/// are distinct whenever the count fits, otherwise repeats are allowed.
/// Drawing from text or a matrix samples elements with replacement.
fn deal(count: &Value, source: &Value) -> EvalResult<Value> {
    let Value::Number(requested) = count else {
        return Err(count.rejects_pair(DEAL, source));
    };
    let requested = f64_to_usize_checked(*requested, RuntimeError::InvalidArgument {
        details: format!("the function '{DEAL}' needs a whole non-negative count, not {count}"),
    })?;
    let mut rng = rand::thread_rng();

    match source {
        Value::Number(n) => {
            let max = deal_range(*n)?;
            let draws = if requested <= max {
                index::sample(&mut rng, max, requested)
                    .iter()
                    .map(|value| Value::Number(usize_to_f64(value)))
                    .collect()
            } else {
                (0..requested).map(|_| Value::Number(usize_to_f64(rng.gen_range(0..max))))
                              .collect()
            };
            Ok(Matrix::row(draws).into())
        },
        Value::Text(t) => {
            let characters: Vec<char> = t.chars().collect();
            if characters.is_empty() && requested > 0 {
                return Err(empty_deal());
            }
            let drawn = (0..requested).filter_map(|_| characters.choose(&mut rng))
                                      .collect::<String>();
            Ok(Value::Text(drawn))
        },
        Value::Matrix(m) => {
            if m.cells().is_empty() && requested > 0 {
                return Err(empty_deal());
            }
            let draws = (0..requested).filter_map(|_| m.cells().choose(&mut rng))
                                      .cloned()
                                      .collect();
            Ok(Matrix::row(draws).into())
        },
    }
}

/// Monadic `sorta`: the elements in ascending order. Matrices keep their
/// shape, text is sorted character by character.
fn sort_ascending(argument: &Value) -> EvalResult<Value> {
    match argument {
        Value::Number(_) => Err(argument.unimplemented(SORT)),
        Value::Text(t) => {
            let mut characters: Vec<char> = t.chars().collect();
            characters.sort_unstable();
            Ok(Value::Text(characters.into_iter().collect()))
        },
        Value::Matrix(m) => {
            let mut cells = m.cells().to_vec();
            cells.sort_by(Value::compare);
            Ok(Matrix::new(cells, m.columns())?.into())
        },
    }
}

/// Converts the upper bound of a deal into a non-empty range.
fn deal_range(value: f64) -> EvalResult<usize> {
    let max = f64_to_usize_checked(value, RuntimeError::InvalidArgument {
        details: format!("the function '{DEAL}' needs a whole non-negative bound, not {value}"),
    })?;
    if max == 0 {
        return Err(empty_deal());
    }
    Ok(max)
}

fn empty_deal() -> RuntimeError {
    RuntimeError::InvalidArgument { details: format!("the function '{DEAL}' cannot draw from an \
                                                      empty source"), }
}
