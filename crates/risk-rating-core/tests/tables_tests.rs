use pretty_assertions::assert_eq;
use risk_rating_core::scoring::customer::{score_customer, CustomerProfile, CustomerWeights};
use risk_rating_core::scoring::transaction::{score_transaction, TransactionInput, VolumeBand};
use risk_rating_core::tables::{IncomeRange, KycStatus, ReferenceTables};
use risk_rating_core::RiskRatingError;
use rust_decimal_macros::dec;

// ===========================================================================
// Externally loaded table sets
// ===========================================================================

/// A compliance-tuned table set: a stricter jurisdiction list and custom
/// band scores, as an operator would supply via a tables file.
fn custom_tables_json() -> String {
    r#"{
        "countries": { "Freedonia": 95, "Sylvania": 20 },
        "occupations": { "Courier": 60 },
        "kyc_statuses": { "Fully Verified": 5, "Not Verified": 90 },
        "income_medians": { "Below 2 Lakhs": 90000 },
        "behaviors": { "Normal Past": 40 },
        "volume_bands": { "low": 20, "medium": 40, "high": 95 }
    }"#
    .to_string()
}

#[test]
fn test_custom_tables_drive_the_calculators() {
    let tables = ReferenceTables::from_json_str(&custom_tables_json()).unwrap();

    let profile = CustomerProfile {
        country: Some("Freedonia".to_string()),
        occupation: Some("Courier".to_string()),
        kyc_status: Some(KycStatus::NotVerified),
    };
    let customer = score_customer(&tables, &profile, &CustomerWeights::default()).unwrap();
    // 0.4*95 + 0.4*60 + 0.2*90 = 38 + 24 + 18 = 80
    assert_eq!(customer.score, dec!(80.0));

    // Median 90,000 -> low ceiling 29,700, medium ceiling 59,400.
    let transaction = score_transaction(
        &tables,
        &TransactionInput {
            amount: dec!(30_000),
            income_range: Some(IncomeRange::Below2Lakhs),
        },
    )
    .unwrap();
    assert_eq!(transaction.band, VolumeBand::Medium);
    assert_eq!(transaction.score, dec!(40));
}

#[test]
fn test_custom_tables_reject_builtin_only_keys() {
    let tables = ReferenceTables::from_json_str(&custom_tables_json()).unwrap();
    let profile = CustomerProfile {
        country: Some("Germany".to_string()),
        occupation: None,
        kyc_status: None,
    };
    let err = score_customer(&tables, &profile, &CustomerWeights::default()).unwrap_err();
    assert!(matches!(
        err,
        RiskRatingError::UnknownKey { table: "countries", .. }
    ));
}

#[test]
fn test_out_of_range_score_rejected_on_load() {
    let json = r#"{
        "countries": { "Freedonia": 101 },
        "occupations": { "Courier": 60 },
        "kyc_statuses": {},
        "income_medians": {},
        "behaviors": {},
        "volume_bands": { "low": 10, "medium": 50, "high": 80 }
    }"#;
    let err = ReferenceTables::from_json_str(json).unwrap_err();
    assert!(matches!(err, RiskRatingError::InvalidTable { .. }));
}

#[test]
fn test_negative_income_median_rejected_on_load() {
    let json = r#"{
        "countries": { "Freedonia": 50 },
        "occupations": { "Courier": 60 },
        "kyc_statuses": {},
        "income_medians": { "Below 2 Lakhs": -1 },
        "behaviors": {},
        "volume_bands": { "low": 10, "medium": 50, "high": 80 }
    }"#;
    let err = ReferenceTables::from_json_str(json).unwrap_err();
    assert!(matches!(
        err,
        RiskRatingError::InvalidTable { ref table, .. } if table == "income_medians"
    ));
}

#[test]
fn test_malformed_tables_json_is_a_serialization_error() {
    let err = ReferenceTables::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, RiskRatingError::SerializationError(_)));
}

// ===========================================================================
// Country prefix search
// ===========================================================================

#[test]
fn test_prefix_search_basic_examples() {
    let tables = ReferenceTables::builtin();
    assert_eq!(tables.match_countries("ger"), vec!["Germany".to_string()]);
    assert_eq!(tables.match_countries(""), Vec::<String>::new());
}

#[test]
fn test_prefix_search_returns_every_match_in_order() {
    let tables = ReferenceTables::builtin();
    let expected: Vec<String> = tables
        .countries
        .keys()
        .filter(|name| name.to_lowercase().starts_with("united"))
        .cloned()
        .collect();
    assert_eq!(tables.match_countries("United"), expected);
    assert_eq!(expected.len(), 3);
}

#[test]
fn test_prefix_search_is_restartable() {
    let tables = ReferenceTables::builtin();
    let first = tables.match_countries("ma");
    let second = tables.match_countries("ma");
    assert_eq!(first, second);
}
