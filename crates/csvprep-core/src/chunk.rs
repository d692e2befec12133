//! Partition a dataset into N contiguous chunk files
//!
//! Boundaries come from ceiling division, so every chunk except the last
//! holds exactly `chunk_size` rows. Spans that would be empty are dropped
//! from the plan and never produce a file, which leaves gaps in the chunk
//! numbering when N exceeds what the data needs.

use std::fs;
use std::num::NonZeroUsize;
use std::ops::Range;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::dataset::{ensure_exists, input_dir, write_csv, Dataset};
use crate::error::{PrepError, Result};

/// Directory created next to the input to hold chunk files
pub const DEFAULT_CHUNK_DIR: &str = "chunks";

/// Row index range `[start, end)` assigned to chunk `index`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSpan {
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

impl ChunkSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn file_name(&self) -> String {
        format!("chunk_{}.csv", self.index)
    }
}

/// Non-empty spans covering `0..total_rows` in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkPlan {
    pub total_rows: usize,
    pub num_chunks: NonZeroUsize,
    pub chunk_size: usize,
    pub spans: Vec<ChunkSpan>,
}

/// Compute chunk boundaries for `total_rows` rows split `num_chunks` ways.
pub fn plan_chunks(total_rows: usize, num_chunks: NonZeroUsize) -> ChunkPlan {
    let chunk_size = total_rows.div_ceil(num_chunks.get());

    // Spans are monotonic: once one is empty, every later one is too.
    let spans = (0..num_chunks.get())
        .map(|index| ChunkSpan {
            index,
            start: index.saturating_mul(chunk_size).min(total_rows),
            end: (index + 1).saturating_mul(chunk_size).min(total_rows),
        })
        .take_while(|span| !span.is_empty())
        .collect();

    ChunkPlan {
        total_rows,
        num_chunks,
        chunk_size,
        spans,
    }
}

/// A chunk file that was written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenChunk {
    pub span: ChunkSpan,
    pub path: PathBuf,
}

/// Outcome of a chunking run
#[derive(Debug, Clone)]
pub struct ChunkReport {
    pub plan: ChunkPlan,
    pub output_dir: PathBuf,
    pub written: Vec<WrittenChunk>,
}

/// Split `input` into at most `num_chunks` files under `<input_dir>/<dir_name>/`.
///
/// Each file repeats the input header. Existing chunk files with the same
/// names are overwritten.
pub fn chunk_file(input: &Path, num_chunks: NonZeroUsize, dir_name: &str) -> Result<ChunkReport> {
    ensure_exists(input)?;
    let dataset = Dataset::read(input)?;

    let output_dir = input_dir(input).join(dir_name);
    fs::create_dir_all(&output_dir).map_err(|e| PrepError::io(&output_dir, e))?;

    let plan = plan_chunks(dataset.len(), num_chunks);
    debug!(
        total_rows = plan.total_rows,
        num_chunks = plan.num_chunks.get(),
        chunk_size = plan.chunk_size,
        "Planned chunks"
    );

    let mut written = Vec::with_capacity(plan.spans.len());
    for span in &plan.spans {
        let path = output_dir.join(span.file_name());
        write_csv(&path, dataset.header(), &dataset.records()[span.range()])?;

        debug!(
            chunk_index = span.index,
            start = span.start,
            end = span.end,
            rows = span.len(),
            "Wrote chunk"
        );
        written.push(WrittenChunk { span: *span, path });
    }

    info!(
        output_dir = %output_dir.display(),
        chunk_count = written.len(),
        "CSV chunking complete"
    );

    Ok(ChunkReport {
        plan,
        output_dir,
        written,
    })
}
