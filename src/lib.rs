//! # rapl
//!
//! rapl is an APL-flavoured expression language interpreter written in
//! Rust. It scans, parses, and evaluates one expression per line, with
//! numbers, text and matrices as values, single-character built-in
//! functions, and the classic structural operators: reduce, scan,
//! compress and the inner and outer products.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum that represents the syntactic
/// structure of an expression as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression types for all language constructs.
/// - Separates the syntactic forms from their runtime behaviour.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating a line. It standardizes error reporting and carries
/// detailed information about failures for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches the names, operand kinds and shapes involved.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and error handling to provide a complete runtime for
/// the language. It exposes the building blocks behind the crate-level
/// entry points.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and
///   value types.
/// - Provides entry points for scanning, parsing and evaluating lines.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable conversion helpers used throughout the
/// evaluator, chiefly between `f64` values and the `usize` counts and
/// positions the matrix code needs.
///
/// # Responsibilities
/// - Safely convert between `f64` and `usize` without silent data loss.
pub mod util;

pub use crate::{
    ast::Expr,
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::core::{evaluate, Environment},
        lexer::Token,
        parser::core::parse,
        value::{core::Value, matrix::Matrix},
    },
};

/// Scans a source line into tokens.
///
/// Scanning stops at the first character that fits no token class, so
/// everything from that character on is ignored. An unterminated text
/// literal runs to the end of the line. Scanning itself never fails.
///
/// # Examples
/// ```
/// use rapl::{scan, Token};
///
/// let tokens: Vec<Token> = scan("X + 1").collect();
/// assert_eq!(tokens.len(), 5);
/// ```
pub fn scan(line: &str) -> impl Iterator<Item = Token> + '_ {
    Token::lexer(line).map_while(Result::ok)
}

/// Scans, parses and evaluates a single source line.
///
/// This is the top-level entry point tying the three phases together.
/// Declarations update the environment and yield no value; everything
/// else yields one.
///
/// # Errors
/// Returns the underlying `ParseError` or `RuntimeError` if any phase
/// fails.
///
/// # Examples
/// ```
/// use rapl::{evaluate_line, Environment};
///
/// let mut env = Environment::new();
/// evaluate_line("variable X is 5", &mut env).unwrap();
///
/// let value = evaluate_line("X + 1", &mut env).unwrap();
/// assert_eq!(value.unwrap().to_string(), "6");
/// ```
pub fn evaluate_line(line: &str,
                     env: &mut Environment)
                     -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let tokens: Vec<Token> = scan(line).filter(|token| !matches!(token, Token::Whitespace))
                                       .collect();
    let expression = parse(&tokens)?;
    let value = evaluate(&expression, env)?;
    Ok(value)
}
