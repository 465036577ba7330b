// ============================================================================
// Number Parts
// Transient decomposition of a matched candidate value
// ============================================================================

/// A candidate value split into sign, integer digits and fraction digits.
///
/// Borrows from the input; lives only as long as the query that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberParts<'a> {
    pub(crate) sign: Option<char>,
    pub(crate) integer: &'a str,
    pub(crate) separator: Option<char>,
    pub(crate) fraction: &'a str,
}

impl<'a> NumberParts<'a> {
    /// Explicit sign character (`+` or `-`), if present.
    #[inline]
    pub fn sign(&self) -> Option<char> {
        self.sign
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Some('-')
    }

    /// Integer-part digits, leading zeros included.
    #[inline]
    pub fn integer_digits(&self) -> &'a str {
        self.integer
    }

    /// Fraction-part digits; empty when there is no fractional group.
    #[inline]
    pub fn fraction_digits(&self) -> &'a str {
        self.fraction
    }

    /// Separator that introduced the fraction (`.` or `,`).
    #[inline]
    pub fn separator(&self) -> Option<char> {
        self.separator
    }

    /// Positions consumed against precision: sign plus all digits.
    ///
    /// The sign counts as a position, following the `N(m,k)` rule where `m`
    /// includes the sign of a negative number.
    #[inline]
    pub fn occupied(&self) -> usize {
        usize::from(self.sign.is_some()) + self.integer.len() + self.fraction.len()
    }
}
