// ============================================================================
// Decimal Conversion
// Exact conversion of a matched value into rust_decimal::Decimal
// ============================================================================

use super::errors::Rejection;
use crate::domain::NumberParts;
use rust_decimal::Decimal;

/// Convert matched parts into a `Decimal` carrying the written scale.
///
/// `"12,30"` becomes `12.30` (scale 2). No rounding is performed.
///
/// # Errors
/// Returns `Unrepresentable` when the digits do not fit the 96-bit mantissa
/// or the fraction is longer than `Decimal` supports.
pub fn to_decimal(parts: &NumberParts<'_>) -> Result<Decimal, Rejection> {
    let fraction = parts.fraction_digits();
    let scale = u32::try_from(fraction.len()).map_err(|_| Rejection::Unrepresentable)?;

    let mut digits = String::with_capacity(parts.integer_digits().len() + fraction.len());
    digits.push_str(parts.integer_digits());
    digits.push_str(fraction);

    let mantissa: i128 = digits.parse().map_err(|_| Rejection::Unrepresentable)?;
    let value = Decimal::try_from_i128_with_scale(mantissa, scale)
        .map_err(|_| Rejection::Unrepresentable)?;

    if parts.is_negative() {
        Ok(-value)
    } else {
        Ok(value)
    }
}
