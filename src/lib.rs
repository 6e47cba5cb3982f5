//! # mathbind
//!
//! mathbind is a small demonstration of calling functions through an export
//! table. The `math` module provides four arithmetic functions, `exports`
//! makes them callable by name with dynamically-typed arguments, and `demo`
//! calls each one once and prints the result.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// The demonstration procedure.
///
/// Declares the fixed sequence of calls the program makes and how each
/// result is turned into a line of output.
pub mod demo;
/// Error types for export calls and the demo runner.
pub mod error;
/// The export table.
///
/// This module describes every function the `math` module exports: its name,
/// declared parameters, return type and docstring. Callers resolve functions
/// by name and pass arguments as [`value::Value`]s, which are checked
/// against the declaration before the native function runs.
///
/// # Responsibilities
/// - Resolves names, reporting unknown functions.
/// - Checks arity and coerces arguments to their declared C types.
/// - Renders C prototypes for listing.
pub mod exports;
/// The native arithmetic functions.
pub mod math;
/// General utilities for safe numeric conversion.
pub mod util;
/// Values crossing the export boundary and how they are displayed.
pub mod value;

pub use error::{CallError, Error, Result};

/// Returns one `<signature>: <docstring>` line per export.
///
/// # Example
/// ```
/// let listing = mathbind::export_listing();
///
/// assert_eq!(listing[0], "int add(int a, int b): Adds two integers.");
/// assert_eq!(listing.len(), 4);
/// ```
#[must_use]
pub fn export_listing() -> Vec<String> {
    exports::EXPORTS.iter()
                    .map(|export| format!("{}: {}", export.signature(), export.doc))
                    .collect()
}
