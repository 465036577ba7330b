// ============================================================================
// Number Validator Library
// Fixed-point decimal format checking for N(m,k) number fields
// ============================================================================

//! # Number Validator
//!
//! Checks whether a string is a well-formed fixed-point decimal that fits a
//! `N(m,k)` format: at most `m` positions in total (sign of a negative number,
//! integer digits and fraction digits) and at most `k` fraction digits.
//!
//! ## Features
//!
//! - **Total queries**: any input, including `None`, classifies to `true`/`false`
//! - **Both separators**: `.` and `,` are accepted for the fraction
//! - **Positive-only formats**: reject `-` while still allowing an explicit `+`
//! - **Diagnostics**: [`NumberValidator::check`](engine::NumberValidator::check)
//!   reports which rule a value broke
//! - **Decimal conversion** of conforming values via `rust_decimal`
//!
//! ## Example
//!
//! ```rust
//! use number_validator::prelude::*;
//!
//! let format: NumberFormat = "N(4,2)".parse()?;
//! let validator = NumberValidator::from_format(format.only_positive())?;
//!
//! assert!(validator.is_valid_number("12.34"));
//! assert!(validator.is_valid_number("+1,2"));
//! assert!(!validator.is_valid_number("0.000"));
//! assert_eq!(validator.check("-1.2"), Err(Rejection::NegativeNotAllowed));
//! # Ok::<(), FormatError>(())
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{NumberFormat, NumberParts};
    pub use crate::engine::NumberValidator;
    pub use crate::numeric::{FormatError, FormatResult, Rejection};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_value_table() {
        let cases: &[(i32, i32, bool, Option<&str>, bool)] = &[
            (4, 2, true, None, false),
            (4, 2, true, Some(""), false),
            (4, 2, true, Some("0."), false),
            (4, 2, true, Some(".0"), false),
            (4, 2, true, Some("asd"), false),
            (4, 2, true, Some("a.sd"), false),
            (4, 2, true, Some("00000"), false),
            (4, 2, true, Some("000.00"), false),
            (4, 2, true, Some("0.000"), false),
            (4, 2, false, Some("-0000"), false),
            (4, 2, true, Some("+0000"), false),
            (4, 2, true, Some("-1.2"), false),
            (4, 2, false, Some("-1.2"), true),
            (4, 2, true, Some("+1.2"), true),
            (4, 2, true, Some("1234"), true),
            (4, 2, true, Some("12.34"), true),
        ];

        for &(precision, scale, only_positive, value, expected) in cases {
            let validator = NumberValidator::new(precision, scale, only_positive).unwrap();
            assert_eq!(
                validator.is_valid_number(value),
                expected,
                "N({precision},{scale}) only_positive={only_positive} value={value:?}"
            );
        }
    }

    #[test]
    fn test_construction_table() {
        let cases: &[(i32, i32, bool)] =
            &[(-1, 2, true), (0, 2, true), (1, -2, true), (1, 2, false)];

        for &(precision, scale, only_positive) in cases {
            assert!(
                NumberValidator::new(precision, scale, only_positive).is_err(),
                "precision={precision} scale={scale} should be rejected"
            );
        }
    }

    #[test]
    fn test_notation_to_decimal() {
        let format: NumberFormat = "N(6.2)".parse().unwrap();
        let validator = NumberValidator::from_format(format).unwrap();

        let amount = validator.parse_decimal("-123,45").unwrap();
        assert_eq!(amount.to_string(), "-123.45");
        assert_eq!(validator.format().to_string(), "N(6,2)");
    }
}
