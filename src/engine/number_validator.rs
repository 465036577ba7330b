// ============================================================================
// Number Validator
// Classifies strings against an N(m,k) fixed-point format
// ============================================================================

use super::grammar;
use crate::domain::{NumberFormat, NumberParts};
use crate::numeric::{self, FormatResult, Rejection};
use rust_decimal::Decimal;

/// Validator for a fixed-point decimal format.
///
/// Built once from a checked [`NumberFormat`], then queried any number of
/// times. Holds no mutable state, so a single instance can be shared across
/// threads without locking.
///
/// # Example
/// ```
/// use number_validator::prelude::*;
///
/// let validator = NumberValidator::new(4, 2, true)?;
/// assert!(validator.is_valid_number("12.34"));
/// assert!(validator.is_valid_number("+1,2"));
/// assert!(!validator.is_valid_number("-1.2"));
/// assert!(!validator.is_valid_number(None::<&str>));
/// # Ok::<(), number_validator::numeric::FormatError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberValidator {
    format: NumberFormat,
    precision: usize,
    scale: usize,
}

impl NumberValidator {
    /// Create a validator for `N(precision, scale)`.
    ///
    /// # Errors
    /// - `NonPositivePrecision` if `precision <= 0`
    /// - `ScaleOutOfRange` if `scale < 0` or `scale >= precision`
    pub fn new(precision: i32, scale: i32, only_positive: bool) -> FormatResult<Self> {
        let mut format = NumberFormat::new(precision).with_scale(scale);
        format.only_positive = only_positive;
        Self::from_format(format)
    }

    /// Create a validator for whole numbers (`scale = 0`, signs allowed).
    pub fn with_precision(precision: i32) -> FormatResult<Self> {
        Self::from_format(NumberFormat::new(precision))
    }

    /// Create a validator from a format configuration.
    pub fn from_format(format: NumberFormat) -> FormatResult<Self> {
        if let Err(err) = format.validate() {
            tracing::warn!(
                %err,
                precision = format.precision,
                scale = format.scale,
                "rejected number format"
            );
            return Err(err);
        }

        tracing::debug!(%format, only_positive = format.only_positive, "number validator created");

        // validate() guarantees both are non-negative
        Ok(Self {
            format,
            precision: format.precision.unsigned_abs() as usize,
            scale: format.scale.unsigned_abs() as usize,
        })
    }

    /// The format this validator checks against.
    #[inline]
    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// Check whether `value` conforms to the format.
    ///
    /// Absent, empty or malformed values are simply `false`; this never
    /// panics for any input.
    #[inline]
    pub fn is_valid_number<'v>(&self, value: impl Into<Option<&'v str>>) -> bool {
        self.check(value).is_ok()
    }

    /// Check `value` and report the decomposition or the first failed rule.
    ///
    /// Rules are applied in order: empty, grammar, precision, scale, sign.
    pub fn check<'v>(
        &self,
        value: impl Into<Option<&'v str>>,
    ) -> Result<NumberParts<'v>, Rejection> {
        let result = self.classify(value.into());
        if let Err(rejection) = &result {
            tracing::trace!(format = %self.format, %rejection, "value rejected");
        }
        result
    }

    /// Check `value` and convert it to a `Decimal` with the written scale.
    ///
    /// Either separator is accepted. There is no range check beyond the
    /// digit counts enforced by the format.
    pub fn parse_decimal<'v>(
        &self,
        value: impl Into<Option<&'v str>>,
    ) -> Result<Decimal, Rejection> {
        let parts = self.check(value)?;
        numeric::to_decimal(&parts)
    }

    fn classify<'v>(&self, value: Option<&'v str>) -> Result<NumberParts<'v>, Rejection> {
        let value = match value {
            Some(v) if !v.is_empty() => v,
            _ => return Err(Rejection::Empty),
        };

        let parts = grammar::decompose(value).ok_or(Rejection::Malformed)?;

        let digits = parts.occupied();
        if digits > self.precision {
            return Err(Rejection::PrecisionExceeded {
                digits,
                precision: self.precision,
            });
        }

        let fraction_digits = parts.fraction_digits().len();
        if fraction_digits > self.scale {
            return Err(Rejection::ScaleExceeded {
                fraction_digits,
                scale: self.scale,
            });
        }

        if self.format.only_positive && parts.is_negative() {
            return Err(Rejection::NegativeNotAllowed);
        }

        Ok(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::FormatError;

    fn validator(precision: i32, scale: i32, only_positive: bool) -> NumberValidator {
        NumberValidator::new(precision, scale, only_positive).unwrap()
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            NumberValidator::new(-1, 2, true),
            Err(FormatError::NonPositivePrecision { precision: -1 })
        );
        assert_eq!(
            NumberValidator::new(0, 2, true),
            Err(FormatError::NonPositivePrecision { precision: 0 })
        );
        assert_eq!(
            NumberValidator::new(1, -2, true),
            Err(FormatError::ScaleOutOfRange {
                scale: -2,
                precision: 1
            })
        );
        assert_eq!(
            NumberValidator::new(1, 2, false),
            Err(FormatError::ScaleOutOfRange {
                scale: 2,
                precision: 1
            })
        );
    }

    #[test]
    fn test_with_precision_defaults() {
        let v = NumberValidator::with_precision(3).unwrap();
        assert_eq!(v.format().scale, 0);
        assert!(!v.format().only_positive);
        assert!(v.is_valid_number("-12"));
        assert!(!v.is_valid_number("1.2"));
    }

    #[test]
    fn test_empty_and_absent() {
        let v = validator(4, 2, false);
        assert!(!v.is_valid_number(None::<&str>));
        assert!(!v.is_valid_number(""));
        assert_eq!(v.check(None::<&str>), Err(Rejection::Empty));
    }

    #[test]
    fn test_capacity_guard() {
        let v = validator(4, 2, true);
        assert!(v.is_valid_number("12.34"));
        assert!(v.is_valid_number("1234"));
        assert_eq!(
            v.check("0.000"),
            Err(Rejection::ScaleExceeded {
                fraction_digits: 3,
                scale: 2
            })
        );
        assert_eq!(
            v.check("00000"),
            Err(Rejection::PrecisionExceeded {
                digits: 5,
                precision: 4
            })
        );
        assert!(!v.is_valid_number("000.00"));
    }

    #[test]
    fn test_sign_occupies_a_position() {
        let v = validator(4, 2, true);
        assert!(!v.is_valid_number("+0000"));
        assert!(v.is_valid_number("+000"));

        let v = validator(4, 2, false);
        assert!(!v.is_valid_number("-0000"));
        assert!(v.is_valid_number("-000"));
    }

    #[test]
    fn test_only_positive() {
        let v = validator(4, 2, true);
        assert!(v.is_valid_number("+1.2"));
        assert_eq!(v.check("-1.2"), Err(Rejection::NegativeNotAllowed));

        let v = validator(4, 2, false);
        assert!(v.is_valid_number("-1.2"));
    }

    #[test]
    fn test_capacity_checked_before_sign() {
        let v = validator(3, 1, true);
        assert!(matches!(
            v.check("-12.5"),
            Err(Rejection::PrecisionExceeded { .. })
        ));
    }

    #[test]
    fn test_malformed_grammar() {
        let v = validator(10, 5, false);
        for value in ["0.", ".0", "asd", "a.sd", "1.2.3", " 12", "12 ", "１２"] {
            assert_eq!(v.check(value), Err(Rejection::Malformed), "{value:?}");
        }
    }

    #[test]
    fn test_leading_zeros_allowed() {
        let v = validator(4, 0, false);
        assert!(v.is_valid_number("0000"));
        assert!(v.is_valid_number("0001"));
    }

    #[test]
    fn test_check_returns_parts() {
        let v = validator(6, 3, false);
        let parts = v.check("-1,25").unwrap();
        assert_eq!(parts.sign(), Some('-'));
        assert_eq!(parts.integer_digits(), "1");
        assert_eq!(parts.fraction_digits(), "25");
        assert_eq!(parts.separator(), Some(','));
    }

    #[test]
    fn test_parse_decimal() {
        let v = validator(6, 2, false);
        assert_eq!(v.parse_decimal("12,30"), Ok(Decimal::new(1230, 2)));
        assert_eq!(v.parse_decimal("-0.5"), Ok(Decimal::new(-5, 1)));
        assert_eq!(
            v.parse_decimal("1.234"),
            Err(Rejection::ScaleExceeded {
                fraction_digits: 3,
                scale: 2
            })
        );
        assert_eq!(v.parse_decimal(None::<&str>), Err(Rejection::Empty));
    }

    #[test]
    fn test_parse_decimal_unrepresentable() {
        let v = validator(60, 0, false);
        let huge = "9".repeat(50);
        assert!(v.is_valid_number(huge.as_str()));
        assert_eq!(v.parse_decimal(huge.as_str()), Err(Rejection::Unrepresentable));
    }

    #[test]
    fn test_pathological_input() {
        let v = validator(4, 2, false);
        let long = "1".repeat(100_000);
        assert!(!v.is_valid_number(long.as_str()));
        assert!(!v.is_valid_number("\u{0}\u{feff}🦀"));
    }

    #[test]
    fn test_validator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NumberValidator>();
    }

    #[test]
    fn test_concurrent_queries() {
        let v = std::sync::Arc::new(validator(4, 2, true));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let v = v.clone();
                std::thread::spawn(move || {
                    (0..1000).all(|_| v.is_valid_number("12.34") && !v.is_valid_number("-1.2"))
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
