/// Numeric conversion helpers.
///
/// Conversions between the integer and floating-point representations used
/// at the export boundary. They refuse to lose precision silently.
pub mod num;
