//! Premium and claim calculation
//!
//! Premium = 20000 × area × rate[crop] × (1 − 0.75)
//! Claim   = (shortfall / expected yield) × 20000 × area, or 0 without a shortfall

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{PolicyError, PolicyResult};
use crate::models::{ClaimAssessment, Policy, PremiumRateTable};
use crate::types::{farmer_share, SUM_INSURED_PER_HECTARE};
use crate::validation::{
    validate_actual_yield, validate_area_hectares, validate_crop_type_present,
    validate_expected_yield,
};

/// Stateless premium and claim evaluator. Callers own the `Policy` values.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyCalculator;

impl PolicyCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Quote a premium and create a fresh policy
    pub fn compute_premium(
        &self,
        crop_type: &str,
        area_hectares: Decimal,
        expected_yield_quintals: Decimal,
    ) -> PolicyResult<Policy> {
        validate_crop_type_present(crop_type)
            .map_err(|msg| PolicyError::invalid("crop_type", msg))?;
        validate_area_hectares(area_hectares)
            .map_err(|msg| PolicyError::invalid("area_hectares", msg))?;
        validate_expected_yield(expected_yield_quintals)
            .map_err(|msg| PolicyError::invalid("expected_yield_quintals", msg))?;

        let (crop, rate) = PremiumRateTable::lookup(crop_type)?;

        let sum_insured = SUM_INSURED_PER_HECTARE * area_hectares;
        let premium = sum_insured * rate * farmer_share();

        Ok(Policy {
            id: Uuid::new_v4(),
            farmer_name: None,
            crop_type: crop,
            area_hectares,
            expected_yield_quintals,
            sum_insured,
            premium_rate: rate,
            premium,
            actual_yield_quintals: None,
            quoted_at: Utc::now(),
        })
    }

    /// Record the actual yield on a copy of `policy` and assess the claim
    pub fn compute_claim(
        &self,
        policy: &Policy,
        actual_yield_quintals: Decimal,
    ) -> PolicyResult<ClaimAssessment> {
        validate_actual_yield(actual_yield_quintals)
            .map_err(|msg| PolicyError::invalid("actual_yield_quintals", msg))?;
        // A policy handed back by a client may have been edited
        validate_area_hectares(policy.area_hectares)
            .map_err(|msg| PolicyError::invalid("area_hectares", msg))?;
        validate_expected_yield(policy.expected_yield_quintals)
            .map_err(|msg| PolicyError::invalid("expected_yield_quintals", msg))?;

        let settled = policy.clone().record_actual_yield(actual_yield_quintals)?;
        let yield_loss = settled.yield_loss()?;
        let claim_amount = settled.claim_amount()?;
        let loss_ratio = yield_loss / settled.expected_yield_quintals;

        Ok(ClaimAssessment {
            policy: settled,
            yield_loss_quintals: yield_loss,
            loss_ratio,
            claim_amount,
        })
    }
}
