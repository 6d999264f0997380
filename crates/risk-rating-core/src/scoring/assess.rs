use serde::{Deserialize, Serialize};

use crate::scoring::aggregate::{aggregate, AggregateOutput, AggregationScheme, ScoreSet};
use crate::scoring::behavior::{score_behavior, BehaviorInput, BehaviorScoreOutput};
use crate::scoring::customer::{
    score_customer, CustomerProfile, CustomerScoreOutput, CustomerWeights,
};
use crate::scoring::transaction::{score_transaction, TransactionInput, TransactionScoreOutput};
use crate::tables::ReferenceTables;
use crate::RiskRatingResult;

/// Everything needed for a one-shot assessment: the three raw inputs
/// plus optional weighting and aggregation choices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessmentInput {
    pub customer: CustomerProfile,
    pub transaction: TransactionInput,
    #[serde(default)]
    pub behavior: BehaviorInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<CustomerWeights>,
    #[serde(default)]
    pub scheme: AggregationScheme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessmentOutput {
    pub customer: CustomerScoreOutput,
    pub transaction: TransactionScoreOutput,
    pub behavior: BehaviorScoreOutput,
    pub aggregate: AggregateOutput,
}

/// Run all three calculators and the aggregator in one call. Stateless;
/// the score set exists only for the duration of the request.
pub fn assess_risk(
    tables: &ReferenceTables,
    input: &RiskAssessmentInput,
) -> RiskRatingResult<RiskAssessmentOutput> {
    let weights = input.weights.unwrap_or_default();

    let customer = score_customer(tables, &input.customer, &weights)?;
    let transaction = score_transaction(tables, &input.transaction)?;
    let behavior = score_behavior(tables, &input.behavior)?;

    let scores = ScoreSet {
        customer: Some(customer.score),
        transaction: Some(transaction.score),
        behavioral: Some(behavior.score),
    };
    let aggregate = aggregate(&scores, input.scheme)?;

    Ok(RiskAssessmentOutput {
        customer,
        transaction,
        behavior,
        aggregate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{BehaviorPattern, KycStatus};
    use crate::types::RiskTier;
    use rust_decimal_macros::dec;

    #[test]
    fn full_pipeline_worked_example() {
        let tables = ReferenceTables::builtin();
        let input = RiskAssessmentInput {
            customer: CustomerProfile {
                country: Some("Germany".to_string()),
                occupation: Some("Engineer".to_string()),
                kyc_status: Some(KycStatus::FullyVerified),
            },
            transaction: TransactionInput {
                amount: dec!(60_000),
                income_range: None,
            },
            behavior: BehaviorInput {
                pattern: Some(BehaviorPattern::NormalPast),
            },
            weights: None,
            scheme: AggregationScheme::UnweightedMean,
        };

        let result = assess_risk(&tables, &input).unwrap();
        // customer 12, transaction 80, behavior 50, mean 47.33 -> Medium.
        assert_eq!(result.customer.score, dec!(12.0));
        assert_eq!(result.transaction.score, dec!(80));
        assert_eq!(result.behavior.score, dec!(50));
        assert_eq!(result.aggregate.score.round_dp(2), dec!(47.33));
        assert_eq!(result.aggregate.tier, RiskTier::Medium);
    }
}
