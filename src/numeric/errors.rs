// ============================================================================
// Validation Errors
// Configuration errors and per-value rejection reasons
// ============================================================================

use std::fmt;

/// Errors raised while building a number format or validator.
///
/// These are the only failures the crate produces. Once a validator exists,
/// every query classifies to a boolean (or a [`Rejection`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatError {
    /// Precision was zero or negative
    NonPositivePrecision { precision: i32 },
    /// Scale was negative, or not strictly below precision
    ScaleOutOfRange { scale: i32, precision: i32 },
    /// Text was not in `N(m)` / `N(m,k)` notation
    MalformedNotation,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::NonPositivePrecision { precision } => {
                write!(f, "precision must be a positive number, got {}", precision)
            },
            FormatError::ScaleOutOfRange { scale, precision } => write!(
                f,
                "scale must be a non-negative number less than precision {}, got {}",
                precision, scale
            ),
            FormatError::MalformedNotation => {
                write!(f, "invalid format notation: expected N(m) or N(m,k)")
            },
        }
    }
}

impl std::error::Error for FormatError {}

/// Result type alias for format construction
pub type FormatResult<T> = Result<T, FormatError>;

/// Why a candidate value did not conform.
///
/// Returned by diagnostic queries. A rejection is a normal outcome, never a
/// failure of the validator itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Value was absent or empty
    Empty,
    /// Value does not follow `[+-]digits[(.|,)digits]`
    Malformed,
    /// Sign plus digits occupy more slots than precision allows
    PrecisionExceeded { digits: usize, precision: usize },
    /// More fraction digits than scale allows
    ScaleExceeded { fraction_digits: usize, scale: usize },
    /// Negative sign on a positive-only format
    NegativeNotAllowed,
    /// Conforming value too large for an exact `Decimal`
    Unrepresentable,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Empty => write!(f, "value is empty"),
            Rejection::Malformed => write!(f, "value is not a decimal number"),
            Rejection::PrecisionExceeded { digits, precision } => write!(
                f,
                "value occupies {} positions, precision allows {}",
                digits, precision
            ),
            Rejection::ScaleExceeded {
                fraction_digits,
                scale,
            } => write!(
                f,
                "value has {} fraction digits, scale allows {}",
                fraction_digits, scale
            ),
            Rejection::NegativeNotAllowed => write!(f, "negative values are not allowed"),
            Rejection::Unrepresentable => {
                write!(f, "value cannot be represented exactly as a decimal")
            },
        }
    }
}

impl std::error::Error for Rejection {}
