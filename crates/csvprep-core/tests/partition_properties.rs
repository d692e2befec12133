//! Partition properties of the chunker over real files
//!
//! Exercises chunk_file end to end and checks that the written chunks
//! form a lossless, ordered partition of the input rows.

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use csvprep_core::{chunk_file, plan_chunks, Dataset, DEFAULT_CHUNK_DIR};
use tempfile::TempDir;

fn write_log(dir: &Path, rows: usize) -> PathBuf {
    let mut content = String::from("id;sensor;temp;hum;pressure;ts\n");
    for i in 0..rows {
        content.push_str(&format!(
            "{i};bme280-{};{}.5;4{}.0;1013.{};2025-06-{:02}T{:02}:00:00\n",
            i % 3,
            18 + i % 7,
            i % 10,
            i % 4,
            1 + i % 28,
            i % 24
        ));
    }
    let path = dir.join("sensor_log.csv");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn plan_sizes_sum_to_total_for_all_small_inputs() {
    for total in 0..40 {
        for chunks in 1..15 {
            let plan = plan_chunks(total, NonZeroUsize::new(chunks).unwrap());
            let sizes: Vec<usize> = plan.spans.iter().map(|s| s.len()).collect();

            assert_eq!(sizes.iter().sum::<usize>(), total, "total={total} n={chunks}");
            assert!(plan.spans.len() <= chunks);
            assert!(sizes.iter().all(|&size| size > 0));

            // Every span but the last is exactly chunk_size
            if let Some((_, leading)) = sizes.split_last() {
                assert!(leading.iter().all(|&size| size == plan.chunk_size));
            }

            // Contiguous, no gaps, no overlaps
            let mut expected_start = 0;
            for span in &plan.spans {
                assert_eq!(span.start, expected_start);
                expected_start = span.end;
            }
        }
    }
}

#[test]
fn concatenated_chunks_reproduce_input_rows() {
    let dir = TempDir::new().unwrap();
    let input = write_log(dir.path(), 23);
    let original = Dataset::read(&input).unwrap();

    for chunks in [1, 2, 3, 5, 7, 23, 30] {
        let chunk_dir = format!("chunks_{chunks}");
        let report = chunk_file(&input, NonZeroUsize::new(chunks).unwrap(), &chunk_dir).unwrap();

        let mut rows = Vec::new();
        for written in &report.written {
            let chunk = Dataset::read(&written.path).unwrap();
            assert_eq!(chunk.header(), original.header());
            assert_eq!(chunk.len(), written.span.len());
            rows.extend(chunk.records().iter().cloned());
        }

        assert_eq!(rows.as_slice(), original.records(), "n={chunks}");
    }
}

#[test]
fn chunking_twice_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let input = write_log(dir.path(), 17);
    let n = NonZeroUsize::new(4).unwrap();

    let first = chunk_file(&input, n, DEFAULT_CHUNK_DIR).unwrap();
    let first_bytes: Vec<Vec<u8>> = first
        .written
        .iter()
        .map(|chunk| fs::read(&chunk.path).unwrap())
        .collect();

    let second = chunk_file(&input, n, DEFAULT_CHUNK_DIR).unwrap();
    let second_bytes: Vec<Vec<u8>> = second
        .written
        .iter()
        .map(|chunk| fs::read(&chunk.path).unwrap())
        .collect();

    assert_eq!(first.written, second.written);
    assert_eq!(first_bytes, second_bytes);
}
