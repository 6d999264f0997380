//! Customer risk: weighted combination of country, occupation, and KYC
//! verification lookups.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::RiskRatingError;
use crate::tables::{KycStatus, ReferenceTables};
use crate::types::{clamp, Rate, Score};
use crate::RiskRatingResult;

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

/// Raw customer selections. `None` means the field was never selected,
/// which is distinct from a selected key that happens to score zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kyc_status: Option<KycStatus>,
}

/// Linear weights over the three lookups. Must be non-negative and sum
/// to exactly 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerWeights {
    pub country: Rate,
    pub occupation: Rate,
    pub kyc: Rate,
}

impl Default for CustomerWeights {
    /// Equal country/occupation weighting: 0.4 / 0.4 / 0.2.
    fn default() -> Self {
        CustomerWeights {
            country: dec!(0.4),
            occupation: dec!(0.4),
            kyc: dec!(0.2),
        }
    }
}

impl CustomerWeights {
    /// The weighting used by the income-aware build: 0.3 / 0.4 / 0.3.
    pub fn income_aware() -> Self {
        CustomerWeights {
            country: dec!(0.3),
            occupation: dec!(0.4),
            kyc: dec!(0.3),
        }
    }

    pub fn validate(&self) -> RiskRatingResult<()> {
        for (field, weight) in [
            ("country", self.country),
            ("occupation", self.occupation),
            ("kyc", self.kyc),
        ] {
            if weight < Decimal::ZERO {
                return Err(RiskRatingError::InvalidInput {
                    field: format!("weights.{}", field),
                    reason: "weight must be non-negative".to_string(),
                });
            }
        }
        let sum = self.country + self.occupation + self.kyc;
        if sum != Decimal::ONE {
            return Err(RiskRatingError::InvalidInput {
                field: "weights".to_string(),
                reason: format!("weights must sum to 1, got {}", sum),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerScoreComponents {
    pub country_score: Score,
    pub occupation_score: Score,
    pub kyc_score: Score,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerScoreOutput {
    /// 0-100
    pub score: Score,
    pub components: CustomerScoreComponents,
    pub weights_used: CustomerWeights,
    pub warnings: Vec<String>,
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score a customer profile against the reference tables.
///
/// A provided key that is not in its table is an `UnknownKey` error. An
/// absent selection contributes a zero component and is reported in the
/// output warnings.
pub fn score_customer(
    tables: &ReferenceTables,
    profile: &CustomerProfile,
    weights: &CustomerWeights,
) -> RiskRatingResult<CustomerScoreOutput> {
    weights.validate()?;

    let mut warnings = Vec::new();

    let country_score = match &profile.country {
        Some(country) => {
            tables
                .country_score(country)
                .ok_or_else(|| RiskRatingError::UnknownKey {
                    table: "countries",
                    key: country.clone(),
                })?
        }
        None => {
            warnings.push("country not selected; contributes zero risk".to_string());
            Decimal::ZERO
        }
    };

    let occupation_score = match &profile.occupation {
        Some(occupation) => {
            tables
                .occupation_score(occupation)
                .ok_or_else(|| RiskRatingError::UnknownKey {
                    table: "occupations",
                    key: occupation.clone(),
                })?
        }
        None => {
            warnings.push("occupation not selected; contributes zero risk".to_string());
            Decimal::ZERO
        }
    };

    let kyc_score = match profile.kyc_status {
        Some(status) => tables
            .kyc_score(status)
            .ok_or_else(|| RiskRatingError::UnknownKey {
                table: "kyc_statuses",
                key: format!("{:?}", status),
            })?,
        None => {
            warnings.push("KYC status not selected; contributes zero risk".to_string());
            Decimal::ZERO
        }
    };

    let weighted = weights.country * country_score
        + weights.occupation * occupation_score
        + weights.kyc * kyc_score;
    let score = clamp(weighted, Decimal::ZERO, Decimal::ONE_HUNDRED);

    Ok(CustomerScoreOutput {
        score,
        components: CustomerScoreComponents {
            country_score,
            occupation_score,
            kyc_score,
        },
        weights_used: *weights,
        warnings,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
