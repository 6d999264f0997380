use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use risk_rating_core::scoring::aggregate::{self, AggregationScheme, ScoreSet};
use risk_rating_core::scoring::assess::{self, RiskAssessmentInput};
use risk_rating_core::tables::ReferenceTables;

use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SchemeArg {
    /// Unweighted mean on a 0-100 scale, tier bands at 40/70
    Mean,
    /// Weighted and rescaled to 0-1000, tier bands at 400/700
    Weighted,
}

impl From<SchemeArg> for AggregationScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Mean => AggregationScheme::UnweightedMean,
            SchemeArg::Weighted => AggregationScheme::WeightedRescaled,
        }
    }
}

/// Arguments for score aggregation
#[derive(Args)]
pub struct AggregateArgs {
    /// Path to a JSON or YAML score set file
    #[arg(long)]
    pub input: Option<String>,

    /// Customer sub-score
    #[arg(long)]
    pub customer: Option<Decimal>,

    /// Transaction sub-score
    #[arg(long)]
    pub transaction: Option<Decimal>,

    /// Behavioral sub-score
    #[arg(long)]
    pub behavioral: Option<Decimal>,

    /// Aggregation scheme
    #[arg(long, value_enum, default_value = "mean")]
    pub scheme: SchemeArg,
}

/// Arguments for a one-shot assessment
#[derive(Args)]
pub struct AssessArgs {
    /// Path to a JSON or YAML assessment input file
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_aggregate(args: AggregateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let scores: ScoreSet = if let Some(ref path) = args.input {
        input::file::read_structured(path)?
    } else if args.customer.is_some() || args.transaction.is_some() || args.behavioral.is_some() {
        ScoreSet {
            customer: args.customer,
            transaction: args.transaction,
            behavioral: args.behavioral,
        }
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err(
            "--input <file>, sub-score flags, or stdin required for aggregation".into(),
        );
    };

    let result = aggregate::aggregate(&scores, args.scheme.into())?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_assess(
    args: AssessArgs,
    tables: &ReferenceTables,
) -> Result<Value, Box<dyn std::error::Error>> {
    let assess_input: RiskAssessmentInput = if let Some(ref path) = args.input {
        input::file::read_structured(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file> or stdin required for assessment".into());
    };

    let result = assess::assess_risk(tables, &assess_input)?;
    Ok(serde_json::to_value(result)?)
}
