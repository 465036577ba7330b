// ============================================================================
// Numeric Module
// Error types and exact decimal conversion
// ============================================================================
//
// This module provides:
// - FormatError: configuration errors raised at construction time
// - Rejection: reasons a candidate value does not conform
// - to_decimal: exact conversion of a conforming value to rust_decimal
//
// Design principles:
// - Construction is the only place that fails
// - Queries are total: every input classifies, nothing panics
// - No floating-point operations

mod decimal;
mod errors;

pub use decimal::to_decimal;
pub use errors::{FormatError, FormatResult, Rejection};
