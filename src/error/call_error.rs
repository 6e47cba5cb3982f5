use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
/// Represents all errors that can occur while calling an exported function.
pub enum CallError {
    /// No export with this name exists.
    #[error("Unknown function '{name}'.")]
    UnknownFunction {
        /// The name that failed to resolve.
        name: String,
    },
    /// The wrong number of arguments was supplied.
    #[error("'{name}' takes {expected} argument(s), but {found} were given.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     &'static str,
        /// The number of declared parameters.
        expected: usize,
        /// The number of arguments actually passed.
        found:    usize,
    },
    /// An `int` parameter received something other than an integer.
    #[error("'{name}' expected an integer for parameter '{param}'.")]
    ExpectedInteger {
        /// The name of the function.
        name:  &'static str,
        /// The name of the parameter.
        param: &'static str,
    },
    /// A numeric parameter received a non-numeric value.
    #[error("'{name}' expected a number for parameter '{param}'.")]
    ExpectedNumber {
        /// The name of the function.
        name:  &'static str,
        /// The name of the parameter.
        param: &'static str,
    },
    /// An integer argument cannot be represented exactly as a `double`.
    #[error("Integer argument for '{param}' of '{name}' is too large to convert to a double.")]
    LiteralTooLarge {
        /// The name of the function.
        name:  &'static str,
        /// The name of the parameter.
        param: &'static str,
    },
    /// Arithmetic overflowed the integer range.
    #[error("Integer overflow while computing '{name}'.")]
    Overflow {
        /// The name of the function.
        name: &'static str,
    },
}
