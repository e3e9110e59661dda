//! Expense approval CLI entry point.
//!
//! A thin front-end around the engine: reads an expense record from a JSON
//! file or interactive prompts, evaluates it against the spending policy
//! over file-backed stores, and prints the decision, decision path, and
//! reason summary. All decision logic lives in the library.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use expense_engine::config::PolicyConfig;
use expense_engine::evaluation::ApprovalEngine;
use expense_engine::models::{EvaluationRecord, Expense, ExpenseCategory};
use expense_engine::stores::FileStores;

/// Expense Approval Engine
///
/// Evaluates a business expense claim against tiered spending policies and
/// returns APPROVE, REVIEW, or REJECT with a full decision trail.
#[derive(Parser, Debug)]
#[command(name = "expense-engine", version, about, long_about = None)]
struct Cli {
    /// Expense record to evaluate, as a JSON file. Prompts interactively
    /// when omitted.
    #[arg(long)]
    expense: Option<PathBuf>,

    /// Directory holding the persisted stores.
    #[arg(long, default_value = "./data")]
    data_dir: PathBuf,

    /// Policy YAML document. Uses the compiled-in policy when omitted.
    #[arg(long)]
    policy: Option<PathBuf>,

    /// Write the full evaluation record as JSON to this path.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable verbose output. Repeat for more verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let policy = match &cli.policy {
        Some(path) => PolicyConfig::load(path)?,
        None => PolicyConfig::default(),
    };

    let expense = match &cli.expense {
        Some(path) => read_expense_file(path)?,
        None => prompt_expense()?,
    };
    expense.validate()?;

    let stores = FileStores::new(&cli.data_dir);
    let mut engine = ApprovalEngine::from_policy(stores, policy)?;
    let record = engine.evaluate(expense)?;

    print_report(&record);

    if let Some(path) = &cli.output {
        let json = serde_json::to_string_pretty(&record)
            .context("failed to serialize the evaluation record")?;
        fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}

fn read_expense_file(path: &Path) -> Result<Expense> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse expense record {}", path.display()))
}

fn prompt_expense() -> Result<Expense> {
    println!();
    println!("Enter Expense Details");
    println!("----------------------");

    let employee_id = prompt("Employee ID (E101-E400)")?;
    let expense_type: ExpenseCategory = prompt("Expense Type (food/travel/accommodation/...)")?
        .parse()
        .context("unknown expense category")?;
    let expense_amount: Decimal = prompt("Expense Amount")?
        .parse()
        .context("expense amount must be a decimal number")?;
    let monthly_expense_total: Decimal = prompt("Monthly Expense Total")?
        .parse()
        .context("monthly expense total must be a decimal number")?;
    let receipt_uploaded = prompt("Receipt Available? (yes/no)")?.eq_ignore_ascii_case("yes");
    let receipt_id = if receipt_uploaded {
        Some(prompt("Receipt ID")?)
    } else {
        None
    };

    Ok(Expense {
        employee_id,
        expense_type,
        expense_amount,
        monthly_expense_total,
        receipt_uploaded,
        receipt_id,
        employee_level: None,
    })
}

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read input")?;
    Ok(line.trim().to_string())
}

fn print_report(record: &EvaluationRecord) {
    println!();
    println!("Expense Approval Result");
    println!("------------------------");
    println!("Decision: {}", record.decision);

    println!();
    println!("Decision Path:");
    for step in &record.decision_path {
        println!("- {}", step);
    }

    println!();
    println!("Reason Summary:");
    for reason in &record.reasons {
        println!("- {}", reason);
    }
}
