use thiserror::Error;

/// Export call errors.
///
/// Contains all error types that can be raised when a function is resolved
/// from the export table or invoked through it: unknown names, arity and
/// argument type mismatches, and arithmetic overflow.
pub mod call_error;

pub use call_error::CallError;

/// Crate-level error returned by the demo runner.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Call(#[from] CallError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
