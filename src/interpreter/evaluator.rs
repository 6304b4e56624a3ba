/// Core evaluation logic and runtime state.
///
/// Contains the expression dispatcher, the `Environment` with its scope
/// stack, and the user-defined function definitions.
pub mod core;

/// Built-in function dispatch.
///
/// Maps function names to the value operations, handles the random deal
/// and sorting built-ins, and calls user-defined functions in their own
/// scopes.
pub mod builtin;

/// The structural operators.
///
/// Implements reduce, scan, compress, and the inner and outer products
/// on top of the built-in function dispatch.
pub mod operator;
