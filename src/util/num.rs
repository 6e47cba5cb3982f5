/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: u64 = 9_007_199_254_740_991;

/// Converts an `i64` to `f64` if and only if the conversion is exact.
///
/// ## Errors
/// Returns `Err(error)` if the magnitude of `value` exceeds `MAX_SAFE_INT`.
///
/// ## Example
/// ```
/// use mathbind::util::num::{MAX_SAFE_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(16, "too big"), Ok(16.0));
///
/// let big = MAX_SAFE_INT as i64 + 1;
/// assert_eq!(i64_to_f64_checked(big, "too big"), Err("too big"));
/// assert!(i64_to_f64_checked(-big, "too big").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_INT {
        return Err(error);
    }
    Ok(value as f64)
}
