//! Aggregation of the three sub-scores into one tiered result.
//!
//! Each aggregation scheme owns its tier bands and scale, so a formula
//! can never be paired with thresholds from a different scale.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::RiskRatingError;
use crate::types::{clamp, RiskTier, Score};
use crate::RiskRatingResult;

// ---------------------------------------------------------------------------
// Score set
// ---------------------------------------------------------------------------

/// Accumulates the independently computed sub-scores. Aggregation
/// requires all three to be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreSet {
    pub customer: Option<Score>,
    pub transaction: Option<Score>,
    pub behavioral: Option<Score>,
}

impl ScoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_components().is_empty()
    }

    /// Names of the sub-scores not yet computed, in a fixed order.
    pub fn missing_components(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.customer.is_none() {
            missing.push("customer");
        }
        if self.transaction.is_none() {
            missing.push("transaction");
        }
        if self.behavioral.is_none() {
            missing.push("behavioral");
        }
        missing
    }
}

// ---------------------------------------------------------------------------
// Schemes
// ---------------------------------------------------------------------------

/// Tier boundaries. Scores strictly above `high_floor` are High, strictly
/// above `medium_floor` Medium, anything else Low.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TierBands {
    pub medium_floor: Score,
    pub high_floor: Score,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregationScheme {
    /// `(customer + transaction + behavioral) / 3` on a 0-100 scale.
    #[default]
    UnweightedMean,
    /// `(transaction*0.5 + customer*0.3 + behavioral*0.2) * 10` on a
    /// 0-1000 scale, for "score out of 1000" presentation.
    WeightedRescaled,
}

impl AggregationScheme {
    pub fn tier_bands(&self) -> TierBands {
        match self {
            AggregationScheme::UnweightedMean => TierBands {
                medium_floor: dec!(40),
                high_floor: dec!(70),
            },
            AggregationScheme::WeightedRescaled => TierBands {
                medium_floor: dec!(400),
                high_floor: dec!(700),
            },
        }
    }

    pub fn scale_max(&self) -> Score {
        match self {
            AggregationScheme::UnweightedMean => dec!(100),
            AggregationScheme::WeightedRescaled => dec!(1000),
        }
    }

    fn combine(&self, customer: Score, transaction: Score, behavioral: Score) -> Score {
        match self {
            AggregationScheme::UnweightedMean => (customer + transaction + behavioral) / dec!(3),
            AggregationScheme::WeightedRescaled => {
                (transaction * dec!(0.5) + customer * dec!(0.3) + behavioral * dec!(0.2))
                    * dec!(10)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateOutput {
    pub score: Score,
    pub tier: RiskTier,
    pub advisory: String,
    pub scheme: AggregationScheme,
    pub scale_max: Score,
    pub bands: TierBands,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Combine a complete score set into an aggregate score, tier, and
/// advisory. Recomputed from scratch on every call; a score set with any
/// missing sub-score is rejected and produces no partial result.
pub fn aggregate(
    scores: &ScoreSet,
    scheme: AggregationScheme,
) -> RiskRatingResult<AggregateOutput> {
    let missing = scores.missing_components();
    if !missing.is_empty() {
        return Err(RiskRatingError::IncompleteScoreSet { missing });
    }

    // Completeness checked above.
    let customer = scores.customer.unwrap_or_default();
    let transaction = scores.transaction.unwrap_or_default();
    let behavioral = scores.behavioral.unwrap_or_default();

    let combined = scheme.combine(customer, transaction, behavioral);
    let score = clamp(combined, Decimal::ZERO, scheme.scale_max());

    let bands = scheme.tier_bands();
    let tier = if score > bands.high_floor {
        RiskTier::High
    } else if score > bands.medium_floor {
        RiskTier::Medium
    } else {
        RiskTier::Low
    };

    Ok(AggregateOutput {
        score,
        tier,
        advisory: tier.advisory().to_string(),
        scheme,
        scale_max: scheme.scale_max(),
        bands,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
