use anyhow::Result;
use clap::Parser;
use csvprep_cli::{init_tracing, parse_args, render_extract_report, CommonArgs};
use csvprep_core::{extract_day, TargetDate};
use std::path::PathBuf;

/// Extract the rows of one calendar day from a semicolon-delimited CSV file
#[derive(Parser)]
#[command(name = "split_csv_by_day")]
#[command(version)]
#[command(
    about = "Extract the rows of one calendar day from a semicolon-delimited CSV file",
    long_about = None
)]
struct Cli {
    /// CSV file to filter; output is written next to it as <DATE>_bme280.csv
    #[arg(value_name = "INPUT_CSV")]
    input: PathBuf,

    /// Date to extract (overrides config; default 2025-06-01)
    #[arg(short, long, value_name = "YYYY-MM-DD")]
    date: Option<TargetDate>,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let cli: Cli = parse_args();

    let config = cli.common.load_config()?;
    init_tracing(&config);

    let target = match cli.date {
        Some(date) => date,
        None => config.target_date()?,
    };

    let report = extract_day(&cli.input, &target)?;
    render_extract_report(&mut std::io::stdout().lock(), &report)?;

    Ok(())
}
