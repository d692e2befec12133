use anyhow::Result;
use clap::Parser;
use csvprep_cli::{init_tracing, parse_args, parse_num_chunks, render_chunk_report, CommonArgs};
use csvprep_core::chunk_file;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Split a semicolon-delimited CSV file into N chunks for parallel producers
#[derive(Parser)]
#[command(name = "chunk_csv")]
#[command(version)]
#[command(
    about = "Split a semicolon-delimited CSV file into N chunks for parallel producers",
    long_about = None
)]
struct Cli {
    /// CSV file to split; chunks are written to a sibling `chunks/` directory
    #[arg(value_name = "INPUT_CSV")]
    input: PathBuf,

    /// Number of chunks to create (at least 1)
    #[arg(
        value_name = "NUM_CHUNKS",
        value_parser = parse_num_chunks,
        allow_negative_numbers = true
    )]
    num_chunks: NonZeroUsize,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let cli: Cli = parse_args();

    let config = cli.common.load_config()?;
    init_tracing(&config);

    let dir_name = config.chunk_dir_name()?;
    let report = chunk_file(&cli.input, cli.num_chunks, dir_name)?;
    render_chunk_report(&mut std::io::stdout().lock(), &report)?;

    Ok(())
}
