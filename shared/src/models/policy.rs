//! Insurance policy models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CropType;
use crate::error::PolicyError;
use crate::types::{round_for_display, SUM_INSURED_PER_HECTARE};

/// One farmer's insurance quote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Policy {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farmer_name: Option<String>,
    pub crop_type: CropType,
    pub area_hectares: Decimal,
    pub expected_yield_quintals: Decimal,
    pub sum_insured: Decimal,
    pub premium_rate: Decimal,
    /// Farmer's premium after subsidy, full precision
    pub premium: Decimal,
    /// Set once, at the claim step
    #[serde(default)]
    pub actual_yield_quintals: Option<Decimal>,
    pub quoted_at: DateTime<Utc>,
}

/// Where a policy is in the quote/claim flow
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PolicyStage {
    Quoted,
    ClaimComputed,
}

impl Policy {
    /// Attach the farmer's name to the quote
    pub fn for_farmer(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        self.farmer_name = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub fn stage(&self) -> PolicyStage {
        if self.actual_yield_quintals.is_some() {
            PolicyStage::ClaimComputed
        } else {
            PolicyStage::Quoted
        }
    }

    pub fn premium_display(&self) -> Decimal {
        round_for_display(self.premium)
    }

    pub fn sum_insured_display(&self) -> Decimal {
        round_for_display(self.sum_insured)
    }

    /// Record the observed yield. Once recorded it cannot be changed;
    /// recording the same value again is a no-op.
    pub fn record_actual_yield(mut self, actual_yield: Decimal) -> Result<Self, PolicyError> {
        match self.actual_yield_quintals {
            Some(existing) if existing != actual_yield => {
                Err(PolicyError::ActualYieldAlreadyRecorded)
            }
            Some(_) => Ok(self),
            None => {
                self.actual_yield_quintals = Some(actual_yield);
                Ok(self)
            }
        }
    }

    /// Yield shortfall against the expected yield, never negative
    pub fn yield_loss(&self) -> Result<Decimal, PolicyError> {
        let actual = self
            .actual_yield_quintals
            .ok_or(PolicyError::ActualYieldNotSet)?;

        if actual < self.expected_yield_quintals {
            Ok(self.expected_yield_quintals - actual)
        } else {
            Ok(Decimal::ZERO)
        }
    }

    /// Claim payout for the recorded actual yield, full precision
    pub fn claim_amount(&self) -> Result<Decimal, PolicyError> {
        let yield_loss = self.yield_loss()?;
        if yield_loss.is_zero() {
            return Ok(Decimal::ZERO);
        }

        // (loss / expected) × 20000 × area, multiplied first so the single
        // division keeps the result monotonic in the actual yield
        let coverage = SUM_INSURED_PER_HECTARE * self.area_hectares;
        Ok(coverage * yield_loss / self.expected_yield_quintals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn wheat_policy() -> Policy {
        Policy {
            id: Uuid::new_v4(),
            farmer_name: None,
            crop_type: CropType::Wheat,
            area_hectares: dec("1"),
            expected_yield_quintals: dec("50"),
            sum_insured: dec("20000"),
            premium_rate: dec("0.02"),
            premium: dec("100"),
            actual_yield_quintals: None,
            quoted_at: Utc::now(),
        }
    }

    #[test]
    fn test_stage_transitions() {
        let policy = wheat_policy();
        assert_eq!(policy.stage(), PolicyStage::Quoted);

        let settled = policy.record_actual_yield(dec("30")).unwrap();
        assert_eq!(settled.stage(), PolicyStage::ClaimComputed);
    }

    #[test]
    fn test_claim_requires_actual_yield() {
        let policy = wheat_policy();
        assert_eq!(policy.claim_amount(), Err(PolicyError::ActualYieldNotSet));
        assert_eq!(policy.yield_loss(), Err(PolicyError::ActualYieldNotSet));
    }

    #[test]
    fn test_actual_yield_is_immutable_once_recorded() {
        let settled = wheat_policy().record_actual_yield(dec("30")).unwrap();

        let again = settled.clone().record_actual_yield(dec("30.0")).unwrap();
        assert_eq!(again.actual_yield_quintals, Some(dec("30")));

        assert_eq!(
            settled.record_actual_yield(dec("40")),
            Err(PolicyError::ActualYieldAlreadyRecorded)
        );
    }

    #[test]
    fn test_claim_amount_shortfall() {
        let settled = wheat_policy().record_actual_yield(dec("30")).unwrap();
        assert_eq!(settled.yield_loss().unwrap(), dec("20"));
        assert_eq!(settled.claim_amount().unwrap(), dec("8000"));
    }

    #[test]
    fn test_claim_amount_no_shortfall() {
        let equal = wheat_policy().record_actual_yield(dec("50")).unwrap();
        assert_eq!(equal.claim_amount().unwrap(), Decimal::ZERO);

        let surplus = wheat_policy().record_actual_yield(dec("60")).unwrap();
        assert_eq!(surplus.yield_loss().unwrap(), Decimal::ZERO);
        assert_eq!(surplus.claim_amount().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_total_crop_failure_pays_full_sum_insured() {
        let settled = wheat_policy().record_actual_yield(Decimal::ZERO).unwrap();
        assert_eq!(settled.claim_amount().unwrap(), settled.sum_insured);
    }

    #[test]
    fn test_for_farmer_trims_name() {
        let policy = wheat_policy().for_farmer("  Asha Devi ");
        assert_eq!(policy.farmer_name.as_deref(), Some("Asha Devi"));

        let unnamed = wheat_policy().for_farmer("   ");
        assert_eq!(unnamed.farmer_name, None);
    }

    #[test]
    fn test_serialization_shape() {
        let policy = wheat_policy().for_farmer("Asha");
        let json = serde_json::to_value(&policy).unwrap();
        assert_eq!(json["crop_type"], "wheat");
        assert_eq!(json["farmer_name"], "Asha");
        assert!(json["actual_yield_quintals"].is_null());

        let parsed: Policy = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, policy);
    }
}
