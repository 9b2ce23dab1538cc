mod engine;
mod ingest;
mod models;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::engine::TransactionQueries;
use crate::ingest::load_transactions;
use crate::models::Transaction;

const DEFAULT_INPUT_PATH: &str = "transactions.json";
const REPORTED_CLIENT: &str = "Arthur Shelby";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 3 {
        eprintln!("Usage: transaction-query-engine [input].json [log_level:optional]");
        eprintln!("Available log levels: off, error, warn, info, debug, trace (default: error)");
        std::process::exit(1);
    }

    let path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_INPUT_PATH);
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let transactions = load_transactions(path)?;

    let timer = Instant::now();
    write_report_to_stdout(&transactions)?;
    let duration = timer.elapsed();

    info!("Answered queries in: {duration:?}");

    Ok(())
}

/// Accepts any level name `LevelFilter` parses ("off", "info", "3", ...), case-insensitive.
fn parse_log_level(level: &str) -> LevelFilter {
    level.parse::<LevelFilter>().unwrap_or_else(|error| {
        eprintln!("Unrecognised log level '{level}' ({error}), logging errors only");
        LevelFilter::ERROR
    })
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the report, logging goes to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(stderr).with_filter(level))
        .init();
}

fn write_report_to_stdout(transactions: &[Transaction]) -> Result<()> {
    let queries = TransactionQueries::new(transactions);
    let mut output = BufWriter::new(stdout().lock());

    match queries.total_transaction_amount() {
        Ok(total) => writeln!(output, "Total Transaction Amount: {total}")?,
        Err(error) => {
            warn!("Total transaction amount unavailable: {error}");
            writeln!(output, "Total Transaction Amount: {error}")?
        }
    }

    writeln!(output, "Total Transaction Amount Sent By {REPORTED_CLIENT}: {}", queries.total_transaction_amount_sent_by(REPORTED_CLIENT))?;
    writeln!(output, "Max Transaction Amount: {}", queries.max_transaction_amount())?;
    writeln!(output, "Count Unique Clients: {}", queries.count_unique_clients())?;
    writeln!(output, "Open Compliance Issues For {REPORTED_CLIENT}: {}", queries.has_open_compliance_issues(REPORTED_CLIENT))?;
    writeln!(output, "Transactions By Beneficiary Name: {}", serde_json::to_string(&queries.transactions_by_beneficiary_name())?)?;
    writeln!(output, "Unsolved Issue IDs: {}", serde_json::to_string(&queries.unsolved_issue_ids())?)?;
    writeln!(output, "Solved Issue Messages: {}", serde_json::to_string(&queries.solved_issue_messages())?)?;
    writeln!(output, "Top 3 Transactions By Amount: {}", serde_json::to_string(&queries.top3_transactions_by_amount())?)?;
    writeln!(output, "Top Sender: {}", queries.top_sender().unwrap_or("none"))?;

    output.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_log_level;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_log_level_parsing_is_case_insensitive() {
        assert_eq!(parse_log_level("DEBUG"), LevelFilter::DEBUG);
        assert_eq!(parse_log_level("off"), LevelFilter::OFF);
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_error() {
        assert_eq!(parse_log_level("chatty"), LevelFilter::ERROR);
    }
}
