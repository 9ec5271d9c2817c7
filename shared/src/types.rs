//! Common types and constants used across the platform

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Sum insured per hectare of cultivated land, in currency units
pub const SUM_INSURED_PER_HECTARE: Decimal = Decimal::from_parts(20000, 0, 0, false, 0);

/// Share of the actuarial premium covered by the government (75%)
pub const GOVERNMENT_SUBSIDY: Decimal = Decimal::from_parts(75, 0, 0, false, 2);

/// Number of decimal places shown for money amounts
pub const DISPLAY_SCALE: u32 = 2;

/// Share of the actuarial premium paid by the farmer
pub fn farmer_share() -> Decimal {
    Decimal::ONE - GOVERNMENT_SUBSIDY
}

/// Round an amount for display (2 places, midpoint away from zero)
pub fn round_for_display(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    // Pad whole amounts so they always carry two places (8000 -> 8000.00)
    rounded.rescale(DISPLAY_SCALE);
    rounded
}

/// Format an amount the way the calculator form shows it, e.g. `100.00 INR`
pub fn format_amount(amount: Decimal, currency: Currency) -> String {
    format!("{:.2} {}", round_for_display(amount), currency.code())
}

/// Supported currencies
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Inr,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "INR" => Some(Currency::Inr),
            _ => None,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
