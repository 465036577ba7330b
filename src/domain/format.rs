// ============================================================================
// Number Format Configuration
// Precision / scale / sign settings and the N(m,k) notation
// ============================================================================

use crate::numeric::{FormatError, FormatResult};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static NOTATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[nN]\s*\(\s*([0-9]+)\s*(?:[.,]\s*([0-9]+)\s*)?\)\s*$")
        .expect("notation pattern is valid")
});

// ============================================================================
// Number Format
// ============================================================================

/// Configuration of a fixed-point number format.
///
/// - `precision`: total positions available, counting the sign of a negative
///   number, integer digits and fraction digits (`m` in `N(m,k)`)
/// - `scale`: maximum fraction digits (`k` in `N(m,k)`)
/// - `only_positive`: reject values written with a leading `-`
///
/// Fields are signed so that out-of-range settings can be represented and
/// reported by [`NumberFormat::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumberFormat {
    pub precision: i32,

    #[cfg_attr(feature = "serde", serde(default))]
    pub scale: i32,

    #[cfg_attr(feature = "serde", serde(default))]
    pub only_positive: bool,
}

impl NumberFormat {
    /// Create a format with the given precision, scale 0, signs allowed.
    pub fn new(precision: i32) -> Self {
        Self {
            precision,
            scale: 0,
            only_positive: false,
        }
    }

    /// Builder method: Set fraction digit capacity
    pub fn with_scale(mut self, scale: i32) -> Self {
        self.scale = scale;
        self
    }

    /// Builder method: Reject negative values
    pub fn only_positive(mut self) -> Self {
        self.only_positive = true;
        self
    }

    /// Validate the configuration.
    ///
    /// Precision is checked before scale.
    pub fn validate(&self) -> FormatResult<()> {
        if self.precision <= 0 {
            return Err(FormatError::NonPositivePrecision {
                precision: self.precision,
            });
        }

        // At least one position must remain for the integer part
        if self.scale < 0 || self.scale >= self.precision {
            return Err(FormatError::ScaleOutOfRange {
                scale: self.scale,
                precision: self.precision,
            });
        }

        Ok(())
    }
}

// ============================================================================
// Preset Formats (Factory Methods)
// ============================================================================

impl NumberFormat {
    /// Whole numbers only: `N(precision)`
    pub fn integer(precision: i32) -> Self {
        Self::new(precision)
    }

    /// Monetary amounts: `N(19,2)`
    pub fn money() -> Self {
        Self::new(19).with_scale(2)
    }

    /// Non-negative percentages with two decimals: `N(5,2)`
    pub fn percentage() -> Self {
        Self::new(5).with_scale(2).only_positive()
    }
}

// ============================================================================
// N(m,k) Notation
// ============================================================================

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            write!(f, "N({})", self.precision)
        } else {
            write!(f, "N({},{})", self.precision, self.scale)
        }
    }
}

impl FromStr for NumberFormat {
    type Err = FormatError;

    /// Parse `N(m)`, `N(m,k)` or `N(m.k)`.
    ///
    /// The parsed format is validated; `only_positive` is always `false`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = NOTATION_REGEX
            .captures(s)
            .ok_or(FormatError::MalformedNotation)?;

        let precision: i32 = caps[1]
            .parse()
            .map_err(|_| FormatError::MalformedNotation)?;
        let scale: i32 = match caps.get(2) {
            Some(k) => k
                .as_str()
                .parse()
                .map_err(|_| FormatError::MalformedNotation)?,
            None => 0,
        };

        let format = Self::new(precision).with_scale(scale);
        format.validate()?;
        Ok(format)
    }
}
