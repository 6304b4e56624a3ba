/// Core parsing logic and shared helpers.
///
/// Contains the parsing entry points, atomic expression parsing, and the
/// helpers the other parser modules share.
pub mod core;

/// Function application and the structural operators.
///
/// Parses unary and dyadic application, reduce, scan, compress, and the
/// inner and outer products.
pub mod apply;

/// Keyword forms.
///
/// Parses the `let`, `variable`, `function` and `if` forms, each
/// recognized by its leading keyword token.
pub mod statement;
