use napi::Result as NapiResult;
use napi_derive::napi;

use risk_rating_core::tables::ReferenceTables;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Sub-score calculators
// ---------------------------------------------------------------------------

#[napi]
pub fn score_customer(profile_json: String) -> NapiResult<String> {
    let profile: risk_rating_core::scoring::customer::CustomerProfile =
        serde_json::from_str(&profile_json).map_err(to_napi_error)?;
    let tables = ReferenceTables::builtin();
    let weights = risk_rating_core::scoring::customer::CustomerWeights::default();
    let output = risk_rating_core::scoring::customer::score_customer(&tables, &profile, &weights)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn score_transaction(input_json: String) -> NapiResult<String> {
    let input: risk_rating_core::scoring::transaction::TransactionInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let tables = ReferenceTables::builtin();
    let output = risk_rating_core::scoring::transaction::score_transaction(&tables, &input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn score_behavior(input_json: String) -> NapiResult<String> {
    let input: risk_rating_core::scoring::behavior::BehaviorInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let tables = ReferenceTables::builtin();
    let output = risk_rating_core::scoring::behavior::score_behavior(&tables, &input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

#[napi]
pub fn aggregate_scores(scores_json: String) -> NapiResult<String> {
    let scores: risk_rating_core::scoring::aggregate::ScoreSet =
        serde_json::from_str(&scores_json).map_err(to_napi_error)?;
    let output = risk_rating_core::scoring::aggregate::aggregate(
        &scores,
        risk_rating_core::scoring::aggregate::AggregationScheme::default(),
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn assess_risk(input_json: String) -> NapiResult<String> {
    let input: risk_rating_core::scoring::assess::RiskAssessmentInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let tables = ReferenceTables::builtin();
    let output = risk_rating_core::scoring::assess::assess_risk(&tables, &input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Country search
// ---------------------------------------------------------------------------

#[napi]
pub fn match_countries(prefix: String) -> NapiResult<String> {
    let tables = ReferenceTables::builtin();
    let matched = tables.match_countries(&prefix);
    serde_json::to_string(&matched).map_err(to_napi_error)
}
