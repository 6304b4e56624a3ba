use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            apply::parse_application,
            statement::{
                parse_conditional, parse_function_declaration, parse_let,
                parse_variable_declaration,
            },
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into a single expression.
///
/// Whitespace tokens are discarded before parsing, and any tokens left
/// over once the expression ends are reported as an error.
///
/// # Parameters
/// - `tokens`: The token sequence for one source line.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `EmptyExpression` if there is nothing to parse.
/// - `UnexpectedTrailingTokens` if the expression ends before the tokens
///   do.
/// - Propagates any errors from expression parsing.
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    let mut tokens = tokens.iter()
                           .filter(|token| !matches!(token, Token::Whitespace))
                           .peekable();
    let expression = parse_expression(&mut tokens)?;
    if let Some(extra) = tokens.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: extra.to_string() });
    }
    Ok(expression)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. The keyword forms are
/// recognized by their leading token; everything else is function
/// application or an atomic expression.
///
/// Grammar: `expression := let | variable | function | if | application`
///
/// # Parameters
/// - `tokens`: Token iterator with whitespace already removed.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.peek() {
        None => Err(ParseError::EmptyExpression),
        Some(Token::Let) => parse_let(tokens),
        Some(Token::Variable) => parse_variable_declaration(tokens),
        Some(Token::Function) => parse_function_declaration(tokens),
        Some(Token::If) => parse_conditional(tokens),
        Some(_) => parse_application(tokens),
    }
}

/// Parses an atomic expression: a literal, a variable, a parenthesized
/// expression or a matrix literal. A function name in atomic position
/// starts a fresh application, so a unary function swallows everything to
/// its right.
///
/// Grammar: `atomic := literal | variable | "(" expression ")" | "[" atomic* "]"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the atom.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the tokens run out.
/// - `UnterminatedParenthesis` / `UnterminatedMatrix` for missing closers.
/// - `UnexpectedToken` for anything that cannot start an atom.
pub(crate) fn parse_atomic<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(Token::FunctionName(_)) = tokens.peek() {
        return parse_application(tokens);
    }

    match tokens.next() {
        None => Err(ParseError::UnexpectedEndOfInput),

        Some(Token::Number(text) | Token::Text(text)) => Ok(Expr::Literal(text.clone())),

        Some(Token::VariableName(name)) => Ok(Expr::Variable(name.clone())),

        Some(Token::LParen) => {
            let expression = parse_expression(tokens)?;
            match tokens.next() {
                Some(Token::RParen) => Ok(expression),
                _ => Err(ParseError::UnterminatedParenthesis),
            }
        },

        Some(Token::LBracket) => {
            let mut elements = Vec::new();
            loop {
                match tokens.peek() {
                    None => return Err(ParseError::UnterminatedMatrix),
                    Some(Token::RBracket) => {
                        tokens.next();
                        break;
                    },
                    Some(_) => elements.push(parse_atomic(tokens)?),
                }
            }
            Ok(Expr::MatrixLiteral(elements))
        },

        Some(other) => Err(ParseError::UnexpectedToken { token: other.to_string() }),
    }
}

/// Returns `true` if the next token (or the end of input) closes the
/// current expression.
pub(in crate::interpreter::parser) fn at_expression_end<'a, I>(tokens: &mut Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token> + Clone
{
    matches!(tokens.peek(),
             None
             | Some(Token::RParen
                    | Token::RBracket
                    | Token::Then
                    | Token::Else
                    | Token::In))
}

/// Consumes the next token, which must be an uppercase variable name.
pub(in crate::interpreter::parser) fn expect_variable_name<'a, I>(tokens: &mut Peekable<I>)
                                                                  -> ParseResult<String>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.next() {
        Some(Token::VariableName(name)) => Ok(name.clone()),
        Some(other) => Err(ParseError::ExpectedVariableName { token: other.to_string() }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Consumes the next token, which must be a function name.
pub(in crate::interpreter::parser) fn expect_function_name<'a, I>(tokens: &mut Peekable<I>)
                                                                  -> ParseResult<String>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.next() {
        Some(Token::FunctionName(name)) => Ok(name.clone()),
        Some(other) => Err(ParseError::ExpectedFunctionName { token: other.to_string() }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}
