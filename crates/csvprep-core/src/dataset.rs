//! Shared CSV helper: load a whole `;`-delimited file, write header + rows
//!
//! Records are kept as raw bytes so rows pass through untouched, whatever
//! their encoding. Row widths are not enforced on either side; the
//! extractor does its own column-count check.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};

use csv::{ByteRecord, ReaderBuilder, Terminator, WriterBuilder};
use tracing::debug;

use crate::error::{PrepError, Result};

/// Field delimiter for every file read or written
pub const DELIMITER: u8 = b';';

/// Header plus every data row of one input file, held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    header: ByteRecord,
    records: Vec<ByteRecord>,
}

impl Dataset {
    /// Read `path` in full. The first row becomes the header.
    pub fn read(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| PrepError::io(path, e))?;
        Self::from_reader(BufReader::new(file), path)
    }

    fn from_reader<R: Read>(reader: R, path: &Path) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut rows = reader.byte_records();
        let header = match rows.next() {
            Some(row) => row.map_err(|e| PrepError::csv(path, e))?,
            None => {
                return Err(PrepError::EmptyInput {
                    path: path.to_path_buf(),
                })
            }
        };

        let records = rows
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PrepError::csv(path, e))?;

        debug!(
            path = %path.display(),
            columns = header.len(),
            rows = records.len(),
            "Loaded dataset"
        );

        Ok(Self { header, records })
    }

    pub fn header(&self) -> &ByteRecord {
        &self.header
    }

    pub fn records(&self) -> &[ByteRecord] {
        &self.records
    }

    /// Number of data rows, header excluded
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Write `header` followed by `rows` to `path`, replacing any existing file.
///
/// Fields are quoted only when needed and records end with CRLF.
pub fn write_csv<'a, I>(path: &Path, header: &ByteRecord, rows: I) -> Result<()>
where
    I: IntoIterator<Item = &'a ByteRecord>,
{
    let file = File::create(path).map_err(|e| PrepError::io(path, e))?;
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .terminator(Terminator::CRLF)
        .flexible(true)
        .from_writer(BufWriter::new(file));

    writer
        .write_byte_record(header)
        .map_err(|e| PrepError::csv(path, e))?;
    for row in rows {
        writer
            .write_byte_record(row)
            .map_err(|e| PrepError::csv(path, e))?;
    }
    writer.flush().map_err(|e| PrepError::io(path, e))?;

    Ok(())
}

/// Directory that holds `path`; outputs are written alongside the input.
pub fn input_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) => parent.to_path_buf(),
        None => PathBuf::from("."),
    }
}

pub(crate) fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(PrepError::InputNotFound {
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_csv(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("input.csv");
        fs::write(&path, content).expect("Failed to write test CSV");
        path
    }

    #[test]
    fn test_read_splits_header_from_rows() {
        let dir = TempDir::new().unwrap();
        let path = create_test_csv(
            &dir,
            "id;sensor;ts\n1;s1;2025-06-01T10:00:00\n2;s2;2025-06-01T11:00:00\n",
        );

        let dataset = Dataset::read(&path).unwrap();
        assert_eq!(dataset.header(), &ByteRecord::from(vec!["id", "sensor", "ts"]));
        assert_eq!(dataset.len(), 2);
        assert_eq!(&dataset.records()[1][0], b"2");
    }

    #[test]
    fn test_read_tolerates_short_rows() {
        let dir = TempDir::new().unwrap();
        let path = create_test_csv(&dir, "a;b;c;d;e;f\n1;2;3;4\n1;2;3;4;5;6\n");

        let dataset = Dataset::read(&path).unwrap();
        assert_eq!(dataset.records()[0].len(), 4);
        assert_eq!(dataset.records()[1].len(), 6);
    }

    #[test]
    fn test_read_header_only() {
        let dir = TempDir::new().unwrap();
        let path = create_test_csv(&dir, "id;sensor\n");

        let dataset = Dataset::read(&path).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_read_empty_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = create_test_csv(&dir, "");

        let err = Dataset::read(&path).unwrap_err();
        assert!(matches!(err, PrepError::EmptyInput { .. }));
    }

    #[test]
    fn test_write_uses_semicolons_and_crlf() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let header = ByteRecord::from(vec!["id", "note"]);
        let rows = vec![
            ByteRecord::from(vec!["1", "plain"]),
            ByteRecord::from(vec!["2", "has;semicolon"]),
        ];

        write_csv(&path, &header, &rows).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "id;note\r\n1;plain\r\n2;\"has;semicolon\"\r\n");
    }

    #[test]
    fn test_quoted_fields_survive_a_rewrite() {
        let dir = TempDir::new().unwrap();
        let path = create_test_csv(&dir, "id;note\n1;\"a;b\"\n");

        let dataset = Dataset::read(&path).unwrap();
        assert_eq!(&dataset.records()[0][1], b"a;b");

        let out = dir.path().join("copy.csv");
        write_csv(&out, dataset.header(), dataset.records()).unwrap();
        assert_eq!(Dataset::read(&out).unwrap(), dataset);
    }

    #[test]
    fn test_input_dir() {
        assert_eq!(input_dir(Path::new("/data/log.csv")), PathBuf::from("/data"));
        assert_eq!(input_dir(Path::new("log.csv")), PathBuf::from(""));
    }

    #[test]
    fn test_ensure_exists() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.csv");
        assert!(matches!(
            ensure_exists(&missing),
            Err(PrepError::InputNotFound { .. })
        ));
        assert!(ensure_exists(dir.path()).is_ok());
    }
}
