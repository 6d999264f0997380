mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::aggregate::{AggregateArgs, AssessArgs};
use commands::countries::CountriesArgs;
use commands::scoring::{BehaviorArgs, CustomerArgs, TransactionArgs};
use risk_rating_core::tables::ReferenceTables;

/// Rule-based risk scoring against fixed reference tables
#[derive(Parser)]
#[command(
    name = "rra",
    version,
    about = "Rule-based customer and transaction risk scoring",
    long_about = "A CLI for rule-based risk rating with decimal precision. \
                  Scores customer profiles, transaction amounts, and behavior \
                  patterns against fixed reference tables, then aggregates the \
                  three sub-scores into a risk tier with an advisory message."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Reference tables file (JSON or YAML); defaults to the builtin tables
    #[arg(long, global = true)]
    tables: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a customer profile (country, occupation, KYC status)
    Customer(CustomerArgs),
    /// Score a transaction amount against absolute or income-relative bands
    Transaction(TransactionArgs),
    /// Score a transaction behavior pattern
    Behavior(BehaviorArgs),
    /// Combine three sub-scores into an aggregate score, tier, and advisory
    Aggregate(AggregateArgs),
    /// Run all three calculators and the aggregation in one call
    Assess(AssessArgs),
    /// List countries matching a prefix (incremental search)
    Countries(CountriesArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let tables = match load_tables(cli.tables.as_deref()) {
        Ok(tables) => tables,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    };

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Customer(args) => commands::scoring::run_customer(args, &tables),
        Commands::Transaction(args) => commands::scoring::run_transaction(args, &tables),
        Commands::Behavior(args) => commands::scoring::run_behavior(args, &tables),
        Commands::Aggregate(args) => commands::aggregate::run_aggregate(args),
        Commands::Assess(args) => commands::aggregate::run_assess(args, &tables),
        Commands::Countries(args) => commands::countries::run_countries(args, &tables),
        Commands::Version => {
            println!("rra {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}

fn load_tables(path: Option<&str>) -> Result<ReferenceTables, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let tables: ReferenceTables = input::file::read_structured(path)?;
            tables.validate()?;
            Ok(tables)
        }
        None => Ok(ReferenceTables::builtin()),
    }
}
