/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, applies built-in and user-defined
/// functions, manages variable scopes, and produces results. It is the
/// core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, conditionals and the structural
///   operators.
/// - Reports runtime errors such as division by zero or invalid operands.
pub mod evaluator;
/// The lexer module tokenizes source lines for further parsing.
///
/// The lexer (tokenizer) reads a raw source line and produces a stream of
/// tokens, classified by their leading character: uppercase names,
/// lowercase keywords and function names, numeric literals, quoted text
/// and symbol runs. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into typed tokens.
/// - Handles numeric and text literals, names, and symbolic functions.
/// - Tolerates sloppy input such as unterminated text literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of the
/// expression. This enables the evaluator to execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates correct grammar and syntax, reporting parse errors.
/// - Supports function application, the structural operators and the
///   keyword forms.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during evaluation: numbers,
/// text and matrices. The operation modules implement the behaviour of
/// every built-in function across those types.
///
/// # Responsibilities
/// - Defines the `Value` enum and the `Matrix` type.
/// - Implements arithmetic, comparison, algebraic and shape operations.
/// - Reports unsupported operand combinations as typed runtime errors.
pub mod value;
