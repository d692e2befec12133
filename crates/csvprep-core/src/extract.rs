//! Extract the rows recorded on one calendar date
//!
//! The timestamp lives in column 5 and looks like `2025-06-01T10:00:00`.
//! Only the text before the first `T` is compared; no timezone handling.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;
use csv::ByteRecord;
use tracing::{info, warn};

use crate::dataset::{ensure_exists, input_dir, write_csv, Dataset};
use crate::error::{PrepError, Result};

/// Date extracted when no other date is configured
pub const DEFAULT_TARGET_DATE: &str = "2025-06-01";

/// Zero-based column holding the ISO-8601 timestamp
pub const TIMESTAMP_FIELD: usize = 5;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar date rows are filtered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetDate(NaiveDate);

impl TargetDate {
    /// `<YYYY-MM-DD>_bme280.csv`
    pub fn output_file_name(&self) -> String {
        format!("{}_bme280.csv", self)
    }
}

impl fmt::Display for TargetDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for TargetDate {
    type Err = PrepError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|source| PrepError::InvalidTargetDate {
                value: s.to_string(),
                source,
            })
    }
}

/// Date portion of a timestamp: everything before the first `T`
pub fn date_prefix(timestamp: &str) -> &str {
    timestamp
        .split_once('T')
        .map_or(timestamp, |(date, _)| date)
}

/// How a single data row relates to the target date
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Matched,
    OtherDate,
    /// Fewer than six fields. Skipped without a warning.
    Malformed,
    /// Timestamp is not valid UTF-8; carries the lossily decoded value.
    Unparsable(String),
}

/// Classifies rows against one target date
#[derive(Debug, Clone)]
pub struct DayFilter {
    prefix: String,
}

impl DayFilter {
    pub fn new(target: TargetDate) -> Self {
        Self {
            prefix: target.to_string(),
        }
    }

    pub fn classify(&self, record: &ByteRecord) -> RowOutcome {
        let Some(raw) = record.get(TIMESTAMP_FIELD) else {
            return RowOutcome::Malformed;
        };

        match std::str::from_utf8(raw) {
            Ok(timestamp) if date_prefix(timestamp) == self.prefix => RowOutcome::Matched,
            Ok(_) => RowOutcome::OtherDate,
            Err(_) => RowOutcome::Unparsable(String::from_utf8_lossy(raw).into_owned()),
        }
    }
}

/// Outcome of an extraction run
#[derive(Debug, Clone)]
pub struct ExtractReport {
    pub target: TargetDate,
    pub output_path: PathBuf,
    pub matched: usize,
    pub malformed: usize,
    /// Rows skipped with a timestamp warning
    pub unparsable: usize,
}

impl ExtractReport {
    pub fn output_file_name(&self) -> String {
        self.output_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.target.output_file_name())
    }
}

/// Write every row of `input` dated `target` to `<input_dir>/<target>_bme280.csv`.
///
/// Fails with [`PrepError::NoMatches`] without writing anything when no row
/// falls on the target date.
pub fn extract_day(input: &Path, target: &TargetDate) -> Result<ExtractReport> {
    ensure_exists(input)?;
    let dataset = Dataset::read(input)?;
    let filter = DayFilter::new(*target);

    let mut matched: Vec<&ByteRecord> = Vec::new();
    let mut malformed = 0;
    let mut unparsable = 0;

    for record in dataset.records() {
        match filter.classify(record) {
            RowOutcome::Matched => matched.push(record),
            RowOutcome::OtherDate => {}
            RowOutcome::Malformed => malformed += 1,
            RowOutcome::Unparsable(raw) => {
                warn!("Could not parse timestamp: {}", raw);
                unparsable += 1;
            }
        }
    }

    if matched.is_empty() {
        return Err(PrepError::NoMatches {
            date: target.to_string(),
        });
    }

    let output_path = input_dir(input).join(target.output_file_name());
    write_csv(&output_path, dataset.header(), matched.iter().copied())?;

    let report = ExtractReport {
        target: *target,
        output_path,
        matched: matched.len(),
        malformed,
        unparsable,
    };

    info!(
        output = %report.output_path.display(),
        matched = report.matched,
        malformed = report.malformed,
        unparsable = report.unparsable,
        "Day extraction complete"
    );

    Ok(report)
}
