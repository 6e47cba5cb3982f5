use std::fmt;

/// A value passed to or returned from an exported function.
///
/// Exported functions are called with a slice of `Value`s and produce a
/// single `Value`, mirroring how a dynamically-typed caller sees them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64 bit integer, passed to `int` parameters.
    Integer(i64),
    /// A double precision floating-point number, passed to `double`
    /// parameters.
    Real(f64),
    /// A boolean, only ever produced as a return value.
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl Value {
    /// Returns a short lowercase name for the variant, used in log output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Bool(_) => "bool",
        }
    }
}

/// Formats a real so that it always reads as a floating-point number.
///
/// Integral reals keep a trailing `.0`, very large and very small
/// magnitudes switch to exponent form with an explicit sign and at least two
/// exponent digits, and non-finite values print as `nan`, `inf` or `-inf`.
fn fmt_real(f: &mut fmt::Formatter<'_>, r: f64) -> fmt::Result {
    if r.is_nan() {
        return f.write_str("nan");
    }
    if r.is_infinite() {
        return f.write_str(if r > 0.0 { "inf" } else { "-inf" });
    }

    let magnitude = r.abs();
    if magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-4) {
        let formatted = format!("{r:e}");
        let Some((mantissa, exponent)) = formatted.split_once('e') else {
            return f.write_str(&formatted);
        };
        let (sign, digits) = exponent.strip_prefix('-')
                                     .map_or(('+', exponent), |rest| ('-', rest));
        return write!(f, "{mantissa}e{sign}{digits:0>2}");
    }

    if r.fract() == 0.0 {
        write!(f, "{r:.1}")
    } else {
        write!(f, "{r}")
    }
}

/// Renders values the way the demo prints them.
///
/// # Example
/// ```
/// use mathbind::value::Value;
///
/// assert_eq!(Value::Integer(8).to_string(), "8");
/// assert_eq!(Value::Real(9.0).to_string(), "9.0");
/// assert_eq!(Value::Real(0.1).to_string(), "0.1");
/// assert_eq!(Value::Real(1e16).to_string(), "1e+16");
/// assert_eq!(Value::Real(1.5e-5).to_string(), "1.5e-05");
/// assert_eq!(Value::Real(f64::NEG_INFINITY).to_string(), "-inf");
/// assert_eq!(Value::Bool(true).to_string(), "True");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => fmt_real(f, *r),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
        }
    }
}
