//! Crop types and the premium rate table

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PolicyError;

/// Insurable crops
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CropType {
    Wheat,
    Rice,
    Maize,
    Mango,
    Potato,
    Onion,
    Carrot,
    Tomato,
    Spinach,
}

impl CropType {
    /// All crops, in the order the selection form lists them
    pub const ALL: [CropType; 9] = [
        CropType::Wheat,
        CropType::Rice,
        CropType::Maize,
        CropType::Mango,
        CropType::Potato,
        CropType::Onion,
        CropType::Carrot,
        CropType::Tomato,
        CropType::Spinach,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CropType::Wheat => "wheat",
            CropType::Rice => "rice",
            CropType::Maize => "maize",
            CropType::Mango => "mango",
            CropType::Potato => "potato",
            CropType::Onion => "onion",
            CropType::Carrot => "carrot",
            CropType::Tomato => "tomato",
            CropType::Spinach => "spinach",
        }
    }

    /// Premium rate for this crop
    pub fn premium_rate(&self) -> Decimal {
        PremiumRateTable::rate(*self)
    }
}

impl std::fmt::Display for CropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CropType {
    type Err = PolicyError;

    /// Parses a crop identifier, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        CropType::ALL
            .into_iter()
            .find(|crop| crop.as_str() == normalized)
            .ok_or_else(|| PolicyError::InvalidCropType(s.trim().to_string()))
    }
}

/// Premium rate in basis points (1 bp = 0.0001)
const fn premium_rate_bp(crop_type: CropType) -> i64 {
    match crop_type {
        CropType::Wheat => 200,
        CropType::Rice => 150,
        CropType::Maize => 180,
        CropType::Mango => 290,
        CropType::Potato => 120,
        CropType::Onion => 200,
        CropType::Carrot => 150,
        CropType::Tomato => 100,
        CropType::Spinach => 250,
    }
}

/// One row of the premium rate table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateEntry {
    pub crop_type: CropType,
    pub premium_rate: Decimal,
}

/// Fixed mapping from crop to premium rate, shared read-only by all calculations
pub struct PremiumRateTable;

impl PremiumRateTable {
    pub fn rate(crop_type: CropType) -> Decimal {
        Decimal::new(premium_rate_bp(crop_type), 4).normalize()
    }

    /// Look up a crop identifier (case-insensitive) and its rate
    pub fn lookup(crop_type: &str) -> Result<(CropType, Decimal), PolicyError> {
        let crop: CropType = crop_type.parse()?;
        Ok((crop, Self::rate(crop)))
    }

    pub fn entries() -> impl Iterator<Item = RateEntry> {
        CropType::ALL.into_iter().map(|crop| RateEntry {
            crop_type: crop,
            premium_rate: Self::rate(crop),
        })
    }
}
