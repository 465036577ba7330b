// ============================================================================
// Basic Usage Example
// ============================================================================

use number_validator::prelude::*;

fn main() -> Result<(), FormatError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Number Validator Example ===\n");

    let validator = NumberValidator::new(4, 2, true)?;
    println!("Validating against {} (positive only)\n", validator.format());

    for value in ["12.34", "+1,2", "-1.2", "0.000", "00000", "0.", "asd"] {
        match validator.check(value) {
            Ok(parts) => println!(
                "  {:<8} ok        ({} positions, {} fraction digits)",
                value,
                parts.occupied(),
                parts.fraction_digits().len()
            ),
            Err(rejection) => println!("  {:<8} rejected  ({})", value, rejection),
        }
    }

    println!("\nParsing formats from notation...");
    for notation in ["N(19,2)", "N(7)", "N(2,2)", "N(0)"] {
        match notation.parse::<NumberFormat>() {
            Ok(format) => println!("  {:<8} -> {:?}", notation, format),
            Err(err) => println!("  {:<8} -> error: {}", notation, err),
        }
    }

    println!("\nConverting to decimals...");
    let money = NumberValidator::from_format(NumberFormat::money())?;
    for value in ["1999,99", "-0.5", "12.345"] {
        match money.parse_decimal(value) {
            Ok(amount) => println!("  {:<8} -> {}", value, amount),
            Err(rejection) => println!("  {:<8} -> {}", value, rejection),
        }
    }

    Ok(())
}
