/// Matrix representation.
///
/// Defines the `Matrix` type: a row-major, shape-checked grid of values
/// that backs both matrix literals and the results of the structural
/// operators.
pub mod matrix;

pub mod core;

mod algebra;
mod arithmetic;
mod compare;
mod shape;
