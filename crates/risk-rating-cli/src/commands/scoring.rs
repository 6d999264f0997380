use clap::Args;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;

use risk_rating_core::scoring::behavior::{self, BehaviorInput};
use risk_rating_core::scoring::customer::{self, CustomerProfile, CustomerWeights};
use risk_rating_core::scoring::transaction::{self, TransactionInput};
use risk_rating_core::tables::{BehaviorPattern, IncomeRange, ReferenceTables};

use crate::input;

/// Arguments for customer risk scoring
#[derive(Args)]
pub struct CustomerArgs {
    /// Path to a JSON or YAML profile file
    #[arg(long)]
    pub input: Option<String>,

    /// Use the income-aware weighting (0.3/0.4/0.3) instead of the
    /// default 0.4/0.4/0.2
    #[arg(long)]
    pub income_aware: bool,
}

/// Arguments for transaction risk scoring
#[derive(Args)]
pub struct TransactionArgs {
    /// Path to a JSON or YAML input file
    #[arg(long, conflicts_with = "amount")]
    pub input: Option<String>,

    /// Transaction amount; non-numeric or empty input counts as zero
    #[arg(long)]
    pub amount: Option<String>,

    /// Declared income band label, e.g. "Below 2 Lakhs"
    #[arg(long)]
    pub income_range: Option<String>,
}

/// Arguments for behavioral risk scoring
#[derive(Args)]
pub struct BehaviorArgs {
    /// Path to a JSON or YAML input file
    #[arg(long, conflicts_with = "pattern")]
    pub input: Option<String>,

    /// Behavior pattern label, e.g. "Normal Past"
    #[arg(long)]
    pub pattern: Option<String>,
}

pub fn run_customer(
    args: CustomerArgs,
    tables: &ReferenceTables,
) -> Result<Value, Box<dyn std::error::Error>> {
    let profile: CustomerProfile = if let Some(ref path) = args.input {
        input::file::read_structured(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file> or stdin required for customer scoring".into());
    };

    let weights = if args.income_aware {
        CustomerWeights::income_aware()
    } else {
        CustomerWeights::default()
    };

    let result = customer::score_customer(tables, &profile, &weights)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_transaction(
    args: TransactionArgs,
    tables: &ReferenceTables,
) -> Result<Value, Box<dyn std::error::Error>> {
    let tx_input: TransactionInput = if let Some(ref path) = args.input {
        input::file::read_structured(path)?
    } else if let Some(ref raw) = args.amount {
        TransactionInput {
            amount: parse_amount_lenient(raw),
            income_range: args
                .income_range
                .as_deref()
                .map(parse_label::<IncomeRange>)
                .transpose()?,
        }
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file>, --amount, or stdin required for transaction scoring".into());
    };

    let result = transaction::score_transaction(tables, &tx_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_behavior(
    args: BehaviorArgs,
    tables: &ReferenceTables,
) -> Result<Value, Box<dyn std::error::Error>> {
    let behavior_input: BehaviorInput = if let Some(ref path) = args.input {
        input::file::read_structured(path)?
    } else if let Some(ref label) = args.pattern {
        BehaviorInput {
            pattern: Some(parse_label::<BehaviorPattern>(label)?),
        }
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file>, --pattern, or stdin required for behavior scoring".into());
    };

    let result = behavior::score_behavior(tables, &behavior_input)?;
    Ok(serde_json::to_value(result)?)
}

/// Lenient amount parsing: anything that does not parse as a number is a
/// zero amount, never an error.
fn parse_amount_lenient(raw: &str) -> Decimal {
    raw.trim().parse().unwrap_or(Decimal::ZERO)
}

/// Parse a human-readable label (e.g. "Normal Past") into its enum.
fn parse_label<T: DeserializeOwned>(label: &str) -> Result<T, Box<dyn std::error::Error>> {
    serde_json::from_value(Value::String(label.to_string()))
        .map_err(|_| format!("unrecognised label: '{}'", label).into())
}
