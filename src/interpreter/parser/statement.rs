use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{
            expect_function_name, expect_variable_name, parse_atomic, parse_expression,
            ParseResult,
        },
    },
};

/// Parses a `let` expression.
///
/// Grammar: `let := "let" NAME "as" atomic "in" expression`
///
/// The binding is restricted to an atomic expression; a parenthesized
/// expression serves when more is needed.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `let` keyword.
///
/// # Returns
/// An `Expr::LetExpression` node.
///
/// # Errors
/// - `ExpectedVariableName` if the bound name is missing.
/// - `ExpectedKeyword` if `as` or `in` is missing.
/// - Propagates any errors from sub-expression parsing.
pub(crate) fn parse_let<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.next();
    let name = expect_variable_name(tokens)?;
    expect_keyword(tokens, &Token::As, "as")?;
    let binding = parse_atomic(tokens)?;
    expect_keyword(tokens, &Token::In, "in")?;
    let body = parse_expression(tokens)?;

    Ok(Expr::LetExpression { name,
                             binding: Box::new(binding),
                             body: Box::new(body) })
}

/// Parses a variable declaration.
///
/// Grammar: `variable := "variable" NAME "is" expression`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `variable` keyword.
///
/// # Returns
/// An `Expr::VariableDeclaration` node.
///
/// # Errors
/// - `ExpectedVariableName` if the declared name is missing.
/// - `ExpectedKeyword` if `is` is missing.
/// - Propagates any errors from sub-expression parsing.
pub(crate) fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.next();
    let name = expect_variable_name(tokens)?;
    expect_is(tokens)?;
    let value = parse_expression(tokens)?;

    Ok(Expr::VariableDeclaration { name,
                                   value: Box::new(value) })
}

/// Parses a function declaration with one or two parameters.
///
/// Grammar: `function := "function" name NAME NAME? "is" expression`
///
/// One parameter declares a unary function, two declare a dyadic one.
/// The same name can carry both a unary and a dyadic definition.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `function` keyword.
///
/// # Returns
/// An `Expr::FunctionDeclaration` node.
///
/// # Errors
/// - `ExpectedFunctionName` / `ExpectedVariableName` if the names are
///   missing.
/// - `ExpectedKeyword` if `is` is missing.
/// - Propagates any errors from sub-expression parsing.
pub(crate) fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.next();
    let name = expect_function_name(tokens)?;
    let parameter = expect_variable_name(tokens)?;
    let second = match tokens.peek() {
        Some(Token::VariableName(second)) => {
            let second = (*second).clone();
            tokens.next();
            Some(second)
        },
        _ => None,
    };
    expect_is(tokens)?;
    let body = parse_expression(tokens)?;

    Ok(Expr::FunctionDeclaration { name,
                                   parameter,
                                   second,
                                   body: Box::new(body) })
}

/// Parses a conditional expression.
///
/// Grammar: `if := "if" expression "then" expression ("else" expression)?`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `if` keyword.
///
/// # Returns
/// An `Expr::Conditional` node.
///
/// # Errors
/// - `ExpectedKeyword` if `then` is missing.
/// - Propagates any errors from sub-expression parsing.
pub(crate) fn parse_conditional<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.next();
    let condition = parse_expression(tokens)?;
    expect_keyword(tokens, &Token::Then, "then")?;
    let then_branch = parse_expression(tokens)?;

    let else_branch = match tokens.peek() {
        Some(Token::Else) => {
            tokens.next();
            Some(Box::new(parse_expression(tokens)?))
        },
        _ => None,
    };

    Ok(Expr::Conditional { condition: Box::new(condition),
                           then_branch: Box::new(then_branch),
                           else_branch })
}

/// Consumes the next token, which must equal the expected keyword token.
fn expect_keyword<'a, I>(tokens: &mut Peekable<I>, expected: &Token, keyword: &'static str)
                         -> ParseResult<()>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.next() {
        Some(token) if token == expected => Ok(()),
        _ => Err(ParseError::ExpectedKeyword { keyword }),
    }
}

/// Consumes the `is` separator, which the lexer hands over as an ordinary
/// lowercase function name.
fn expect_is<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.next() {
        Some(Token::FunctionName(word)) if word == "is" => Ok(()),
        _ => Err(ParseError::ExpectedKeyword { keyword: "is" }),
    }
}
