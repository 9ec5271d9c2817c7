//! WebAssembly module for the Crop Insurance Calculator
//!
//! Provides client-side computation for:
//! - Premium quotes from crop, area and expected yield
//! - Claim assessment from the observed yield
//! - The two-step form session (quote, then claim)

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

use shared::{PolicyCalculator, PolicyError};

/// Shown when the quote form is incomplete or has non-positive numbers
pub const FORM_INCOMPLETE_MESSAGE: &str = "Please fill all the required fields correctly.";

/// Shown when the actual yield is negative or not a number
pub const INVALID_ACTUAL_YIELD_MESSAGE: &str = "Please enter a valid actual yield.";

/// Shown when a claim is requested before any premium was quoted
pub const NO_POLICY_MESSAGE: &str = "Calculate a premium before calculating a claim.";

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    console_log("Crop insurance calculator loaded");
}

fn console_log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

fn to_decimal(value: f64, field: &'static str) -> Result<Decimal, PolicyError> {
    Decimal::try_from(value)
        .map(|d| d.normalize())
        .map_err(|_| PolicyError::InvalidInput {
            field,
            message: "must be a finite number within range",
        })
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

// ============================================================================
// Stateless Calculations
// ============================================================================

/// Quote a premium and return the new policy as JSON
pub fn premium_policy_json(
    crop_type: &str,
    area_hectares: f64,
    expected_yield_quintals: f64,
) -> Result<String, String> {
    let area = to_decimal(area_hectares, "area_hectares").map_err(|e| e.to_string())?;
    let expected = to_decimal(expected_yield_quintals, "expected_yield_quintals")
        .map_err(|e| e.to_string())?;

    let policy = PolicyCalculator::new()
        .compute_premium(crop_type, area, expected)
        .map_err(|e| e.to_string())?;

    serde_json::to_string(&policy).map_err(|e| e.to_string())
}

/// Assess a claim for a JSON policy and return the assessment as JSON
pub fn claim_assessment_json(policy_json: &str, actual_yield_quintals: f64) -> Result<String, String> {
    let policy: Policy =
        serde_json::from_str(policy_json).map_err(|e| format!("Invalid policy JSON: {}", e))?;
    let actual = to_decimal(actual_yield_quintals, "actual_yield_quintals")
        .map_err(|e| e.to_string())?;

    let assessment = PolicyCalculator::new()
        .compute_claim(&policy, actual)
        .map_err(|e| e.to_string())?;

    serde_json::to_string(&assessment).map_err(|e| e.to_string())
}

/// Calculate a premium; returns the policy as a JSON string
#[wasm_bindgen]
pub fn calculate_premium(
    crop_type: &str,
    area_hectares: f64,
    expected_yield_quintals: f64,
) -> Result<String, JsValue> {
    premium_policy_json(crop_type, area_hectares, expected_yield_quintals)
        .map_err(|e| JsValue::from_str(&e))
}

/// Calculate a claim for a policy JSON string; returns the assessment as JSON
#[wasm_bindgen]
pub fn calculate_claim(policy_json: &str, actual_yield_quintals: f64) -> Result<String, JsValue> {
    claim_assessment_json(policy_json, actual_yield_quintals).map_err(|e| JsValue::from_str(&e))
}

/// Premium rate for a crop (case-insensitive)
#[wasm_bindgen]
pub fn premium_rate(crop_type: &str) -> Result<f64, JsValue> {
    PremiumRateTable::lookup(crop_type)
        .map(|(_, rate)| to_f64(rate))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Crop identifiers for the selection box
#[wasm_bindgen]
pub fn crop_types() -> js_sys::Array {
    CropType::ALL
        .iter()
        .map(|crop| JsValue::from_str(crop.as_str()))
        .collect()
}

/// Check the quote form before calling the calculator
#[wasm_bindgen]
pub fn is_quote_form_complete(farmer_name: &str, area_hectares: f64, expected_yield_quintals: f64) -> bool {
    validate_farmer_name(farmer_name).is_ok()
        && area_hectares.is_finite()
        && area_hectares > 0.0
        && expected_yield_quintals.is_finite()
        && expected_yield_quintals > 0.0
}

// ============================================================================
// Form Session
// ============================================================================

/// Quote/claim state for one open form.
///
/// A new quote replaces the current policy and clears any claim. Each claim is
/// assessed against the quoted policy, so the farmer can correct the actual
/// yield and recalculate.
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct QuoteSession {
    policy: Option<Policy>,
    claim: Option<ClaimAssessment>,
    currency: Currency,
}

#[wasm_bindgen]
impl QuoteSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Quote a premium; returns the premium formatted to 2 places
    pub fn quote(
        &mut self,
        farmer_name: &str,
        crop_type: &str,
        area_hectares: f64,
        expected_yield_quintals: f64,
    ) -> Result<String, JsValue> {
        self.try_quote(farmer_name, crop_type, area_hectares, expected_yield_quintals)
            .map(|premium| premium.to_string())
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Assess the claim; returns the claim amount formatted to 2 places
    pub fn claim(&mut self, actual_yield_quintals: f64) -> Result<String, JsValue> {
        self.try_claim(actual_yield_quintals)
            .map(|amount| amount.to_string())
            .map_err(|e| JsValue::from_str(&e))
    }

    /// "no_policy", "policy_quoted" or "claim_computed"
    pub fn stage(&self) -> String {
        match (&self.policy, &self.claim) {
            (None, _) => "no_policy",
            (Some(_), None) => "policy_quoted",
            (Some(_), Some(_)) => "claim_computed",
        }
        .to_string()
    }

    /// Current policy as JSON, if one has been quoted
    pub fn policy_json(&self) -> Option<String> {
        self.policy
            .as_ref()
            .and_then(|policy| serde_json::to_string(policy).ok())
    }

    /// Result lines for display, one per line
    pub fn summary(&self) -> String {
        self.summary_lines().join("\n")
    }

    pub fn reset(&mut self) {
        self.policy = None;
        self.claim = None;
    }
}

impl QuoteSession {
    pub fn try_quote(
        &mut self,
        farmer_name: &str,
        crop_type: &str,
        area_hectares: f64,
        expected_yield_quintals: f64,
    ) -> Result<Decimal, String> {
        if crop_type.trim().is_empty()
            || !is_quote_form_complete(farmer_name, area_hectares, expected_yield_quintals)
        {
            return Err(FORM_INCOMPLETE_MESSAGE.to_string());
        }

        // Values Decimal cannot hold, or that underflow to zero, are form errors
        let (area, expected) = match (
            to_decimal(area_hectares, "area_hectares"),
            to_decimal(expected_yield_quintals, "expected_yield_quintals"),
        ) {
            (Ok(area), Ok(expected)) if area > Decimal::ZERO && expected > Decimal::ZERO => {
                (area, expected)
            }
            _ => return Err(FORM_INCOMPLETE_MESSAGE.to_string()),
        };

        let policy = PolicyCalculator::new()
            .compute_premium(crop_type, area, expected)
            .map_err(|e| e.to_string())?
            .for_farmer(farmer_name);

        let premium = policy.premium_display();
        self.policy = Some(policy);
        self.claim = None;
        Ok(premium)
    }

    pub fn try_claim(&mut self, actual_yield_quintals: f64) -> Result<Decimal, String> {
        let policy = self.policy.as_ref().ok_or_else(|| NO_POLICY_MESSAGE.to_string())?;

        if !actual_yield_quintals.is_finite() || actual_yield_quintals < 0.0 {
            return Err(INVALID_ACTUAL_YIELD_MESSAGE.to_string());
        }
        let actual = to_decimal(actual_yield_quintals, "actual_yield_quintals")
            .map_err(|_| INVALID_ACTUAL_YIELD_MESSAGE.to_string())?;

        let assessment = PolicyCalculator::new()
            .compute_claim(policy, actual)
            .map_err(|e| e.to_string())?;

        let amount = assessment.claim_amount_display();
        self.claim = Some(assessment);
        Ok(amount)
    }

    pub fn current_policy(&self) -> Option<&Policy> {
        self.policy.as_ref()
    }

    pub fn summary_lines(&self) -> Vec<String> {
        let Some(policy) = &self.policy else {
            return Vec::new();
        };

        let mut lines = Vec::with_capacity(7);
        if let Some(name) = &policy.farmer_name {
            lines.push(format!("Farmer: {}", name));
        }
        lines.push(format!("Crop Type: {}", policy.crop_type));
        lines.push(format!("Area: {} hectares", policy.area_hectares));
        lines.push(format!(
            "Expected Yield: {} quintals",
            policy.expected_yield_quintals
        ));
        lines.push(format!(
            "Premium: {}",
            format_amount(policy.premium, self.currency)
        ));

        if let Some(claim) = &self.claim {
            if let Some(actual) = claim.policy.actual_yield_quintals {
                lines.push(format!("Actual Yield: {} quintals", actual));
            }
            lines.push(format!(
                "Claim Amount: {}",
                format_amount(claim.claim_amount, self.currency)
            ));
        }
        lines
    }
}
