/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: f64 = 9_007_199_254_740_991.0;

/// Safely converts an `f64` to `usize` if the value is finite, non-negative,
/// within range, and not fractional.
///
/// ## Errors
/// Returns `Err(error)` for non-finite, negative, out-of-range, or
/// fractional values.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Returns
/// - `Ok(usize)`: The converted value if it is safe.
/// - `Err(error)`: If the conversion is invalid.
///
/// ## Example
/// ```
/// use rapl::util::num::f64_to_usize_checked;
///
/// // Works for safe values
/// assert_eq!(f64_to_usize_checked(42.0, "bad count").unwrap(), 42);
///
/// // Fails for fractional values
/// assert!(f64_to_usize_checked(1.5, "bad count").is_err());
///
/// // Fails for negative values
/// assert!(f64_to_usize_checked(-1.0, "bad count").is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_usize_checked<E>(value: f64, error: E) -> Result<usize, E> {
    if !value.is_finite() || value < 0.0 || value > MAX_SAFE_INT || value.fract() != 0.0 {
        return Err(error);
    }
    Ok(value as usize)
}

/// Converts a `usize` to `f64`. Counts and positions in this crate stay
/// far below `2^53`, where the conversion is exact.
///
/// ## Example
/// ```
/// use rapl::util::num::usize_to_f64;
///
/// assert_eq!(usize_to_f64(100), 100.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    value as f64
}
