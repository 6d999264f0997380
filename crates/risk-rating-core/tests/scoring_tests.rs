use risk_rating_core::scoring::aggregate::{aggregate, AggregationScheme, ScoreSet};
use risk_rating_core::scoring::assess::{assess_risk, RiskAssessmentInput};
use risk_rating_core::scoring::behavior::{score_behavior, BehaviorInput};
use risk_rating_core::scoring::customer::{score_customer, CustomerProfile, CustomerWeights};
use risk_rating_core::scoring::transaction::{score_transaction, TransactionInput, VolumeBand};
use risk_rating_core::tables::{BehaviorPattern, IncomeRange, KycStatus, ReferenceTables};
use risk_rating_core::{RiskRatingError, RiskTier};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// End-to-end scenarios
// ===========================================================================

fn engineer_in_germany() -> CustomerProfile {
    CustomerProfile {
        country: Some("Germany".to_string()),
        occupation: Some("Engineer".to_string()),
        kyc_status: Some(KycStatus::FullyVerified),
    }
}

#[test]
fn test_reference_scenario_fixed_thresholds() {
    let tables = ReferenceTables::builtin();

    // Customer: 0.4*15 + 0.4*10 + 0.2*10 = 12
    let customer = score_customer(
        &tables,
        &engineer_in_germany(),
        &CustomerWeights::default(),
    )
    .unwrap();
    assert_eq!(customer.score, dec!(12.0));

    // Transaction: 60,000 > 50,000 -> high -> 80
    let transaction = score_transaction(
        &tables,
        &TransactionInput {
            amount: dec!(60_000),
            income_range: None,
        },
    )
    .unwrap();
    assert_eq!(transaction.score, dec!(80));

    // Behavior: Normal Past -> 50
    let behavior = score_behavior(
        &tables,
        &BehaviorInput {
            pattern: Some(BehaviorPattern::NormalPast),
        },
    )
    .unwrap();
    assert_eq!(behavior.score, dec!(50));

    // Aggregate: (12 + 80 + 50) / 3 = 47.33 -> Medium, "monitored"
    let scores = ScoreSet {
        customer: Some(customer.score),
        transaction: Some(transaction.score),
        behavioral: Some(behavior.score),
    };
    let result = aggregate(&scores, AggregationScheme::UnweightedMean).unwrap();
    assert_eq!(result.score.round_dp(2), dec!(47.33));
    assert_eq!(result.tier, RiskTier::Medium);
    assert!(result.advisory.contains("monitored"));
}

#[test]
fn test_reference_scenario_income_relative() {
    let tables = ReferenceTables::builtin();

    // Below 2 Lakhs: median 100,000, threshold 33,000.
    // 40,000 > 33,000 and <= 66,000 -> medium -> 50.
    let result = score_transaction(
        &tables,
        &TransactionInput {
            amount: dec!(40_000),
            income_range: Some(IncomeRange::Below2Lakhs),
        },
    )
    .unwrap();
    assert_eq!(result.band, VolumeBand::Medium);
    assert_eq!(result.score, dec!(50));
}

#[test]
fn test_boundary_amount_belongs_to_medium() {
    let tables = ReferenceTables::builtin();
    let result = score_transaction(
        &tables,
        &TransactionInput {
            amount: dec!(10_000),
            income_range: None,
        },
    )
    .unwrap();
    assert_eq!(result.band, VolumeBand::Medium);
}

#[test]
fn test_customer_score_bounded_for_all_builtin_combinations() {
    let tables = ReferenceTables::builtin();
    let weights = CustomerWeights::default();
    let statuses = [
        KycStatus::FullyVerified,
        KycStatus::PartiallyVerified,
        KycStatus::NotVerified,
    ];

    let countries: Vec<String> = tables.countries.keys().cloned().collect();
    let occupations: Vec<String> = tables.occupations.keys().cloned().collect();
    for country in countries.iter().take(20) {
        for occupation in &occupations {
            for status in statuses {
                let profile = CustomerProfile {
                    country: Some(country.clone()),
                    occupation: Some(occupation.clone()),
                    kyc_status: Some(status),
                };
                let result = score_customer(&tables, &profile, &weights).unwrap();
                assert!(result.score >= Decimal::ZERO && result.score <= dec!(100));

                // The score is exactly the linear combination of lookups.
                let expected = weights.country * result.components.country_score
                    + weights.occupation * result.components.occupation_score
                    + weights.kyc * result.components.kyc_score;
                assert_eq!(result.score, expected);
            }
        }
    }
}

#[test]
fn test_incomplete_score_set_never_produces_a_result() {
    let partial_sets = [
        ScoreSet::new(),
        ScoreSet {
            customer: Some(dec!(50)),
            ..ScoreSet::new()
        },
        ScoreSet {
            customer: Some(dec!(50)),
            transaction: Some(dec!(50)),
            behavioral: None,
        },
    ];
    for scores in &partial_sets {
        for scheme in [
            AggregationScheme::UnweightedMean,
            AggregationScheme::WeightedRescaled,
        ] {
            let err = aggregate(scores, scheme).unwrap_err();
            assert!(matches!(err, RiskRatingError::IncompleteScoreSet { .. }));
        }
    }
}

#[test]
fn test_calculators_are_deterministic() {
    let tables = ReferenceTables::builtin();
    let input = RiskAssessmentInput {
        customer: engineer_in_germany(),
        transaction: TransactionInput {
            amount: dec!(25_000),
            income_range: Some(IncomeRange::TwoToFiveLakhs),
        },
        behavior: BehaviorInput {
            pattern: Some(BehaviorPattern::VeryGoodPast),
        },
        weights: Some(CustomerWeights::income_aware()),
        scheme: AggregationScheme::WeightedRescaled,
    };

    let first = assess_risk(&tables, &input).unwrap();
    let second = assess_risk(&tables, &input).unwrap();
    assert_eq!(first.aggregate.score, second.aggregate.score);
    assert_eq!(first.aggregate.tier, second.aggregate.tier);
}

#[test]
fn test_assessment_input_round_trips_as_json() {
    let tables = ReferenceTables::builtin();
    // The wire keys are the human-readable labels of the source data.
    let json = r#"{
        "customer": {
            "country": "Germany",
            "occupation": "Engineer",
            "kyc_status": "Fully Verified"
        },
        "transaction": { "amount": 60000 },
        "behavior": { "pattern": "Normal Past" }
    }"#;
    let input: RiskAssessmentInput = serde_json::from_str(json).unwrap();
    assert_eq!(input.scheme, AggregationScheme::UnweightedMean);

    let result = assess_risk(&tables, &input).unwrap();
    assert_eq!(result.aggregate.tier, RiskTier::Medium);
}

#[test]
fn test_low_tier_advisory() {
    let tables = ReferenceTables::builtin();
    let input = RiskAssessmentInput {
        customer: engineer_in_germany(),
        transaction: TransactionInput {
            amount: dec!(500),
            income_range: None,
        },
        behavior: BehaviorInput {
            pattern: Some(BehaviorPattern::VeryGoodPast),
        },
        weights: None,
        scheme: AggregationScheme::UnweightedMean,
    };
    // (12 + 10 + 10) / 3 = 10.67 <= 40 -> Low.
    let result = assess_risk(&tables, &input).unwrap();
    assert_eq!(result.aggregate.tier, RiskTier::Low);
    assert!(result.aggregate.advisory.contains("clean"));
}
