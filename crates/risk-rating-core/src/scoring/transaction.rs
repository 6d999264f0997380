use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::RiskRatingError;
use crate::tables::{IncomeRange, ReferenceTables};
use crate::types::{Money, Score};
use crate::RiskRatingResult;

/// Absolute band limits used when no income range is declared.
const ABSOLUTE_LOW_CEILING: Decimal = dec!(10_000);
const ABSOLUTE_HIGH_FLOOR: Decimal = dec!(50_000);

/// Fraction of the income median that bounds the low band; the medium
/// band extends to twice this threshold.
const INCOME_THRESHOLD_FRACTION: Decimal = dec!(0.33);

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionInput {
    /// Transaction amount. Must be non-negative.
    pub amount: Money,
    /// Declared income band. When present, band limits are derived from
    /// the band's median instead of the absolute limits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_range: Option<IncomeRange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeBand {
    Low,
    Medium,
    High,
}

/// The band limits that were actually applied, for traceability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ThresholdBasis {
    Absolute {
        low_ceiling: Money,
        high_floor: Money,
    },
    IncomeRelative {
        income_range: IncomeRange,
        income_median: Money,
        low_ceiling: Money,
        medium_ceiling: Money,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionScoreOutput {
    /// One of the volume band scores (10 / 50 / 80 with builtin tables).
    pub score: Score,
    pub band: VolumeBand,
    pub basis: ThresholdBasis,
    pub warnings: Vec<String>,
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Band a transaction amount and map the band to its score.
///
/// Without an income range: amount < 10,000 is low, 10,000 to 50,000
/// inclusive is medium, above 50,000 is high. With an income range the
/// low ceiling is 0.33x the band's median and the medium ceiling twice
/// that, both inclusive. Monotonic non-decreasing in the amount for a
/// fixed income range.
pub fn score_transaction(
    tables: &ReferenceTables,
    input: &TransactionInput,
) -> RiskRatingResult<TransactionScoreOutput> {
    if input.amount < Decimal::ZERO {
        return Err(RiskRatingError::InvalidInput {
            field: "amount".to_string(),
            reason: "transaction amount must be non-negative".to_string(),
        });
    }

    let mut warnings = Vec::new();

    let (band, basis) = match input.income_range {
        None => {
            let band = if input.amount < ABSOLUTE_LOW_CEILING {
                VolumeBand::Low
            } else if input.amount <= ABSOLUTE_HIGH_FLOOR {
                VolumeBand::Medium
            } else {
                VolumeBand::High
            };
            let basis = ThresholdBasis::Absolute {
                low_ceiling: ABSOLUTE_LOW_CEILING,
                high_floor: ABSOLUTE_HIGH_FLOOR,
            };
            (band, basis)
        }
        Some(range) => {
            let median =
                tables
                    .income_median(range)
                    .ok_or_else(|| RiskRatingError::UnknownKey {
                        table: "income_medians",
                        key: format!("{:?}", range),
                    })?;
            let low_ceiling = median * INCOME_THRESHOLD_FRACTION;
            let medium_ceiling = low_ceiling * dec!(2);
            if low_ceiling == Decimal::ZERO {
                warnings.push(
                    "income median is zero; every positive amount bands as high".to_string(),
                );
            }
            let band = if input.amount <= low_ceiling {
                VolumeBand::Low
            } else if input.amount <= medium_ceiling {
                VolumeBand::Medium
            } else {
                VolumeBand::High
            };
            let basis = ThresholdBasis::IncomeRelative {
                income_range: range,
                income_median: median,
                low_ceiling,
                medium_ceiling,
            };
            (band, basis)
        }
    };

    let score = match band {
        VolumeBand::Low => tables.volume_bands.low,
        VolumeBand::Medium => tables.volume_bands.medium,
        VolumeBand::High => tables.volume_bands.high,
    };

    Ok(TransactionScoreOutput {
        score,
        band,
        basis,
        warnings,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
