// ============================================================================
// Domain Models Module
// Number format configuration and matched-value decomposition
// ============================================================================

pub mod format;
pub mod parts;

pub use format::NumberFormat;
pub use parts::NumberParts;
