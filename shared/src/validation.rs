//! Validation utilities for the Crop Insurance Calculator
//!
//! The calculator rejects out-of-range inputs outright; the form layers call these
//! same checks to show a friendly message before invoking the calculator at all.

use rust_decimal::Decimal;

// ============================================================================
// Limits
// ============================================================================

/// Largest land area accepted for a single policy
pub const MAX_AREA_HECTARES: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// Largest expected or actual yield accepted for a single policy
pub const MAX_YIELD_QUINTALS: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

/// Longest farmer name accepted by the form
pub const MAX_FARMER_NAME_LEN: usize = 100;

// ============================================================================
// Policy Input Validations
// ============================================================================

/// Validate that a crop identifier was supplied
pub fn validate_crop_type_present(crop_type: &str) -> Result<(), &'static str> {
    if crop_type.trim().is_empty() {
        return Err("Crop type is required");
    }
    Ok(())
}

/// Validate land area is positive and within limits
pub fn validate_area_hectares(area: Decimal) -> Result<(), &'static str> {
    if area <= Decimal::ZERO {
        return Err("Area must be greater than zero");
    }
    if area > MAX_AREA_HECTARES {
        return Err("Area exceeds the maximum insurable area");
    }
    Ok(())
}

/// Validate expected yield is positive and within limits
pub fn validate_expected_yield(expected_yield: Decimal) -> Result<(), &'static str> {
    if expected_yield <= Decimal::ZERO {
        return Err("Expected yield must be greater than zero");
    }
    if expected_yield > MAX_YIELD_QUINTALS {
        return Err("Expected yield exceeds the maximum accepted yield");
    }
    Ok(())
}

/// Validate actual yield is non-negative and within limits
pub fn validate_actual_yield(actual_yield: Decimal) -> Result<(), &'static str> {
    if actual_yield < Decimal::ZERO {
        return Err("Actual yield cannot be negative");
    }
    if actual_yield > MAX_YIELD_QUINTALS {
        return Err("Actual yield exceeds the maximum accepted yield");
    }
    Ok(())
}

/// Validate farmer name is present and not too long
pub fn validate_farmer_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Farmer name is required");
    }
    if trimmed.chars().count() > MAX_FARMER_NAME_LEN {
        return Err("Farmer name must be at most 100 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_validate_crop_type_present() {
        assert!(validate_crop_type_present("wheat").is_ok());
        // Unknown crops are rejected by the rate table lookup, not here
        assert!(validate_crop_type_present("banana").is_ok());
        assert!(validate_crop_type_present("").is_err());
        assert!(validate_crop_type_present("   ").is_err());
    }

    #[test]
    fn test_validate_area_valid() {
        assert!(validate_area_hectares(dec("0.1")).is_ok());
        assert!(validate_area_hectares(dec("1")).is_ok());
        assert!(validate_area_hectares(MAX_AREA_HECTARES).is_ok());
    }

    #[test]
    fn test_validate_area_invalid() {
        assert!(validate_area_hectares(Decimal::ZERO).is_err());
        assert!(validate_area_hectares(dec("-1")).is_err());
        assert!(validate_area_hectares(MAX_AREA_HECTARES + Decimal::ONE).is_err());
    }

    #[test]
    fn test_validate_expected_yield() {
        assert!(validate_expected_yield(dec("50")).is_ok());
        assert!(validate_expected_yield(Decimal::ZERO).is_err());
        assert!(validate_expected_yield(dec("-0.1")).is_err());
        assert!(validate_expected_yield(MAX_YIELD_QUINTALS + Decimal::ONE).is_err());
    }

    #[test]
    fn test_validate_actual_yield() {
        // A total crop failure is a valid observation
        assert!(validate_actual_yield(Decimal::ZERO).is_ok());
        assert!(validate_actual_yield(dec("30")).is_ok());
        assert!(validate_actual_yield(dec("-5")).is_err());
    }

    #[test]
    fn test_validate_farmer_name() {
        assert!(validate_farmer_name("Ramesh Kumar").is_ok());
        assert!(validate_farmer_name("").is_err());
        assert!(validate_farmer_name("  ").is_err());
        assert!(validate_farmer_name(&"a".repeat(101)).is_err());
        assert!(validate_farmer_name(&"a".repeat(100)).is_ok());
    }
}
