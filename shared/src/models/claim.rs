//! Claim assessment models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Policy;
use crate::types::round_for_display;

/// Outcome of the claim step for one policy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClaimAssessment {
    /// The policy with its actual yield recorded
    pub policy: Policy,
    pub yield_loss_quintals: Decimal,
    /// Shortfall as a fraction of expected yield (0-1)
    pub loss_ratio: Decimal,
    /// Payout, full precision
    pub claim_amount: Decimal,
}

impl ClaimAssessment {
    pub fn claim_amount_display(&self) -> Decimal {
        round_for_display(self.claim_amount)
    }

    pub fn is_payable(&self) -> bool {
        self.claim_amount > Decimal::ZERO
    }
}
