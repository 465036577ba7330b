// ============================================================================
// Validation Engine Module
// Number grammar matching and the validator built on it
// ============================================================================

mod grammar;
mod number_validator;

pub use number_validator::NumberValidator;
