//! Premium quote and claim assessment service

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{
    round_for_display, validate_farmer_name, ClaimAssessment, Currency, Policy, PolicyCalculator,
    PremiumRateTable, RateEntry,
};
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Stateless policy service. The client holds the quoted policy and sends it
/// back for the claim step.
#[derive(Debug, Clone, Copy)]
pub struct PolicyService {
    calculator: PolicyCalculator,
    currency: Currency,
}

/// Input for requesting a premium quote
#[derive(Debug, Deserialize, Validate)]
pub struct PremiumQuoteInput {
    #[validate(length(min = 1, max = 100))]
    pub farmer_name: String,
    pub crop_type: String,
    pub area_hectares: Decimal,
    pub expected_yield_quintals: Decimal,
}

/// Input for assessing a claim against a previously quoted policy
#[derive(Debug, Deserialize)]
pub struct ClaimInput {
    pub policy: Policy,
    pub actual_yield_quintals: Decimal,
}

/// Premium quote returned to the form
#[derive(Debug, Serialize)]
pub struct PremiumQuote {
    pub policy: Policy,
    /// Rounded to 2 places
    pub premium: Decimal,
    /// Rounded to 2 places
    pub sum_insured: Decimal,
    pub premium_rate: Decimal,
    pub currency: Currency,
}

/// Claim settlement returned to the form
#[derive(Debug, Serialize)]
pub struct ClaimSettlement {
    pub policy: Policy,
    pub yield_loss_quintals: Decimal,
    pub loss_ratio: Decimal,
    /// Rounded to 2 places
    pub claim_amount: Decimal,
    pub payable: bool,
    pub currency: Currency,
}

impl From<(ClaimAssessment, Currency)> for ClaimSettlement {
    fn from((assessment, currency): (ClaimAssessment, Currency)) -> Self {
        Self {
            claim_amount: assessment.claim_amount_display(),
            payable: assessment.is_payable(),
            yield_loss_quintals: assessment.yield_loss_quintals,
            loss_ratio: assessment.loss_ratio,
            policy: assessment.policy,
            currency,
        }
    }
}

impl PolicyService {
    /// Create a new PolicyService instance
    pub fn new(currency: Currency) -> Self {
        Self {
            calculator: PolicyCalculator::new(),
            currency,
        }
    }

    /// List the insurable crops and their premium rates
    pub fn rate_table(&self) -> Vec<RateEntry> {
        PremiumRateTable::entries().collect()
    }

    /// Quote a premium for a farmer. Each quote is a brand-new policy.
    pub fn quote_premium(&self, input: PremiumQuoteInput) -> AppResult<PremiumQuote> {
        input.validate()?;
        validate_farmer_name(&input.farmer_name).map_err(|msg| AppError::Validation {
            field: "farmer_name".to_string(),
            message: msg.to_string(),
            message_hi: "किसान का नाम आवश्यक है".to_string(),
        })?;

        let policy = self
            .calculator
            .compute_premium(
                &input.crop_type,
                input.area_hectares,
                input.expected_yield_quintals,
            )?
            .for_farmer(input.farmer_name);

        tracing::info!(
            policy_id = %policy.id,
            crop = %policy.crop_type,
            area_hectares = %policy.area_hectares,
            premium = %policy.premium_display(),
            "Premium quoted"
        );

        Ok(PremiumQuote {
            premium: policy.premium_display(),
            sum_insured: policy.sum_insured_display(),
            premium_rate: policy.premium_rate,
            currency: self.currency,
            policy,
        })
    }

    /// Record the actual yield and compute the claim payout
    pub fn assess_claim(&self, input: ClaimInput) -> AppResult<ClaimSettlement> {
        let assessment = self
            .calculator
            .compute_claim(&input.policy, input.actual_yield_quintals)?;

        tracing::info!(
            policy_id = %assessment.policy.id,
            crop = %assessment.policy.crop_type,
            yield_loss = %assessment.yield_loss_quintals,
            claim_amount = %round_for_display(assessment.claim_amount),
            "Claim assessed"
        );

        Ok(ClaimSettlement::from((assessment, self.currency)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn service() -> PolicyService {
        PolicyService::new(Currency::Inr)
    }

    fn quote_input(crop: &str, area: &str, expected: &str) -> PremiumQuoteInput {
        PremiumQuoteInput {
            farmer_name: "Ramesh".to_string(),
            crop_type: crop.to_string(),
            area_hectares: dec(area),
            expected_yield_quintals: dec(expected),
        }
    }

    #[test]
    fn test_quote_premium() {
        let quote = service().quote_premium(quote_input("wheat", "1", "50")).unwrap();
        assert_eq!(quote.premium.to_string(), "100.00");
        assert_eq!(quote.sum_insured.to_string(), "20000.00");
        assert_eq!(quote.policy.farmer_name.as_deref(), Some("Ramesh"));
        assert_eq!(quote.currency, Currency::Inr);
    }

    #[test]
    fn test_quote_requires_farmer_name() {
        let mut input = quote_input("wheat", "1", "50");
        input.farmer_name = String::new();
        assert!(matches!(
            service().quote_premium(input),
            Err(AppError::Validation { ref field, .. }) if field == "farmer_name"
        ));

        let mut input = quote_input("wheat", "1", "50");
        input.farmer_name = "   ".to_string();
        assert!(matches!(
            service().quote_premium(input),
            Err(AppError::Validation { ref field, .. }) if field == "farmer_name"
        ));
    }

    #[test]
    fn test_quote_unknown_crop() {
        let result = service().quote_premium(quote_input("banana", "1", "10"));
        assert!(matches!(result, Err(AppError::InvalidCropType(_))));
    }

    #[test]
    fn test_assess_claim() {
        let quote = service().quote_premium(quote_input("wheat", "1", "50")).unwrap();

        let settlement = service()
            .assess_claim(ClaimInput {
                policy: quote.policy.clone(),
                actual_yield_quintals: dec("30"),
            })
            .unwrap();
        assert_eq!(settlement.claim_amount.to_string(), "8000.00");
        assert!(settlement.payable);

        let settlement = service()
            .assess_claim(ClaimInput {
                policy: quote.policy,
                actual_yield_quintals: dec("60"),
            })
            .unwrap();
        assert_eq!(settlement.claim_amount.to_string(), "0.00");
        assert!(!settlement.payable);
    }

    #[test]
    fn test_assess_claim_negative_yield() {
        let quote = service().quote_premium(quote_input("rice", "2", "40")).unwrap();
        let result = service().assess_claim(ClaimInput {
            policy: quote.policy,
            actual_yield_quintals: dec("-5"),
        });
        assert!(matches!(
            result,
            Err(AppError::Validation { ref field, .. }) if field == "actual_yield_quintals"
        ));
    }

    #[test]
    fn test_rate_table_lists_all_crops() {
        let table = service().rate_table();
        assert_eq!(table.len(), 9);
        assert!(table.iter().all(|entry| entry.premium_rate > Decimal::ZERO));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// Displayed premium always carries exactly two decimal places
        #[test]
        fn prop_premium_display_scale(area in 1i64..=100_000i64) {
            let mut input = quote_input("spinach", "1", "25");
            input.area_hectares = Decimal::new(area, 2);

            let quote = service().quote_premium(input).unwrap();
            prop_assert_eq!(quote.premium.scale(), 2);
            prop_assert!((quote.premium - quote.policy.premium).abs() <= dec("0.005"));
        }
    }
}
