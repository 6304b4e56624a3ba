/// Parsing errors.
///
/// Defines all error types that can occur while parsing a token sequence.
/// Parse errors include syntax mistakes, unexpected tokens, missing
/// keywords, and any other issues detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include things like division by zero, unsupported operand
/// kinds, mismatched matrix shapes, or failed numeric conversions.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
