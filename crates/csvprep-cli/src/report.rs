//! Human-readable run summaries printed to stdout

use csvprep_core::{ChunkReport, ExtractReport};
use std::io::{self, Write};

/// Totals, one line per written chunk, then the completion message
pub fn render_chunk_report<W: Write>(out: &mut W, report: &ChunkReport) -> io::Result<()> {
    let plan = &report.plan;
    let output_dir = report.output_dir.display();

    writeln!(out, "Total rows: {}", plan.total_rows)?;
    writeln!(out, "Number of chunks: {}", plan.num_chunks)?;
    writeln!(out, "Rows per chunk: {}", plan.chunk_size)?;
    writeln!(out, "Creating chunks in: {}", output_dir)?;
    writeln!(out)?;

    for chunk in &report.written {
        let span = &chunk.span;
        writeln!(
            out,
            "Created {}: rows {}-{} ({} records)",
            span.file_name(),
            span.start,
            span.end - 1,
            span.len()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Chunking complete! Files ready in: {}", output_dir)?;
    out.flush()
}

pub fn render_extract_report<W: Write>(out: &mut W, report: &ExtractReport) -> io::Result<()> {
    writeln!(
        out,
        "Created {}: {} records for {}",
        report.output_file_name(),
        report.matched,
        report.target
    )?;
    out.flush()
}
