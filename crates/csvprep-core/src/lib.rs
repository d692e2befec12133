//! Preprocessing for semicolon-delimited BME280 sensor logs
//!
//! Two independent transformations built on one shared CSV helper:
//! - [`chunk_file`] partitions a log into N contiguous chunk files
//! - [`extract_day`] keeps only the rows recorded on one calendar date
//!
//! Both read the whole input into memory, run a single pass, and write
//! their output next to the input file.

mod chunk;
mod dataset;
mod error;
mod extract;

pub use chunk::{
    chunk_file, plan_chunks, ChunkPlan, ChunkReport, ChunkSpan, WrittenChunk, DEFAULT_CHUNK_DIR,
};
pub use dataset::{input_dir, write_csv, Dataset, DELIMITER};
pub use error::{PrepError, Result};
pub use extract::{
    date_prefix, extract_day, DayFilter, ExtractReport, RowOutcome, TargetDate,
    DEFAULT_TARGET_DATE, TIMESTAMP_FIELD,
};

// Re-exported so callers can build records without naming the csv crate
pub use csv::ByteRecord;
