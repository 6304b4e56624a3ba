use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{
            at_expression_end, expect_function_name, parse_atomic, parse_expression, ParseResult,
        },
    },
};

/// Parses function application and the structural operators.
///
/// A leading function name starts a function-led form: reduce (`f / E`),
/// scan (`f \ E`) or unary application (`f E`). Anything else starts with
/// an atomic left operand, which may then be followed by compress
/// (`A \ E`), outer product (`A @.g B`), inner product (`A f.g B`) or
/// dyadic application (`A f B`).
///
/// Grammar:
/// ```text
///     application := function "/" expression
///                  | function "\" expression
///                  | function expression
///                  | atomic "\" expression
///                  | atomic "@" "." function expression
///                  | atomic function "." function expression
///                  | atomic function expression
///                  | atomic
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the application.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `MissingOperand` if a function has nothing to operate on.
/// - `UnexpectedToken` if an operand is followed by something that cannot
///   continue the expression.
/// - Propagates any errors from sub-expression parsing.
pub(crate) fn parse_application<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(Token::FunctionName(name)) = tokens.peek() {
        let function = (*name).clone();
        tokens.next();

        match tokens.peek() {
            Some(Token::Slash) => {
                tokens.next();
                let operand = parse_expression(tokens)?;
                return Ok(Expr::Reduce { function,
                                         operand: Box::new(operand) });
            },

            Some(Token::Backslash) => {
                tokens.next();
                let operand = parse_expression(tokens)?;
                return Ok(Expr::Scan { function,
                                       operand: Box::new(operand) });
            },

            _ => {
                if at_expression_end(tokens) {
                    return Err(ParseError::MissingOperand { function });
                }
                let argument = parse_expression(tokens)?;
                return Ok(Expr::Call { name:      function,
                                       arguments: vec![argument], });
            },
        }
    }

    let left = parse_atomic(tokens)?;

    match tokens.peek() {
        None
        | Some(Token::RParen | Token::RBracket | Token::Then | Token::Else | Token::In) => {
            Ok(left)
        },

        Some(Token::Backslash) => {
            tokens.next();
            let value = parse_expression(tokens)?;
            Ok(Expr::Compress { mask:  Box::new(left),
                                value: Box::new(value), })
        },

        Some(Token::At) => {
            tokens.next();
            match tokens.next() {
                Some(Token::Dot) => {},
                Some(other) => {
                    return Err(ParseError::UnexpectedToken { token: other.to_string() })
                },
                None => return Err(ParseError::UnexpectedEndOfInput),
            }
            let combine = expect_function_name(tokens)?;
            let right = parse_expression(tokens)?;
            Ok(Expr::OuterProduct { combine,
                                    left: Box::new(left),
                                    right: Box::new(right) })
        },

        Some(Token::FunctionName(name)) => {
            let function = (*name).clone();
            tokens.next();

            if matches!(tokens.peek(), Some(Token::Dot)) {
                tokens.next();
                let combine = expect_function_name(tokens)?;
                let right = parse_expression(tokens)?;
                return Ok(Expr::InnerProduct { fold: function,
                                               combine,
                                               left: Box::new(left),
                                               right: Box::new(right) });
            }

            if at_expression_end(tokens) {
                return Err(ParseError::MissingOperand { function });
            }
            let right = parse_expression(tokens)?;
            Ok(Expr::Call { name:      function,
                            arguments: vec![left, right], })
        },

        Some(other) => Err(ParseError::UnexpectedToken { token: other.to_string() }),
    }
}
