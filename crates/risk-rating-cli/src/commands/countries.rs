use clap::Args;
use serde_json::Value;

use risk_rating_core::tables::ReferenceTables;

/// Arguments for country prefix search
#[derive(Args)]
pub struct CountriesArgs {
    /// Prefix to match, case-insensitive; empty matches nothing
    pub prefix: String,
}

pub fn run_countries(
    args: CountriesArgs,
    tables: &ReferenceTables,
) -> Result<Value, Box<dyn std::error::Error>> {
    let matched = tables.match_countries(&args.prefix);
    Ok(serde_json::to_value(matched)?)
}
