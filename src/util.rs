/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between the `f64`
/// values the language computes with and the `usize` counts, positions
/// and dimensions the matrix code needs, without risking silent data loss
/// or rounding errors.
///
/// All fallible functions return a `Result`, which is `Ok` if the
/// conversion is lossless and valid, or the caller's error if the value
/// is out of range or not an integer.
pub mod num;
