use crate::error::CallError;

/// Adds two integers.
///
/// ## Errors
/// Returns `CallError::Overflow` if the sum does not fit in an `i64`.
///
/// ## Example
/// ```
/// use mathbind::math::add;
///
/// assert_eq!(add(5, 3), Ok(8));
/// assert!(add(i64::MAX, 1).is_err());
/// ```
pub fn add(a: i64, b: i64) -> Result<i64, CallError> {
    a.checked_add(b).ok_or(CallError::Overflow { name: "add" })
}

/// Multiplies two floating-point numbers.
///
/// ## Example
/// ```
/// use mathbind::math::multiply;
///
/// assert_eq!(multiply(4.5, 2.0), 9.0);
/// ```
#[must_use]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Calculates the square root of a number.
///
/// Negative inputs yield NaN.
///
/// ## Example
/// ```
/// use mathbind::math::square_root;
///
/// assert_eq!(square_root(16.0), 4.0);
/// assert!(square_root(-1.0).is_nan());
/// ```
#[must_use]
pub fn square_root(x: f64) -> f64 {
    x.sqrt()
}

/// Checks if a number is even.
///
/// ## Example
/// ```
/// use mathbind::math::is_even;
///
/// assert!(is_even(42));
/// assert!(is_even(-4));
/// assert!(!is_even(-3));
/// ```
#[must_use]
pub const fn is_even(n: i64) -> bool {
    n % 2 == 0
}
