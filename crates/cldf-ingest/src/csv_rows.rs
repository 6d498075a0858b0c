//! Header-keyed and positional CSV readers.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use indexmap::IndexMap;

use crate::error::{IngestError, Result};

/// A CSV row keyed by header name, with the line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub line: u64,
    pub cells: IndexMap<String, String>,
}

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

fn ensure_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

fn csv_error(path: &Path, source: csv::Error) -> IngestError {
    IngestError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

fn record_line(record: &StringRecord) -> u64 {
    record.position().map_or(0, csv::Position::line)
}

/// Read a CSV file with a header row into header-keyed rows.
///
/// Cell contents are kept as written; only header names are cleaned.
pub fn read_csv_rows(path: &Path) -> Result<Vec<CsvRow>> {
    ensure_file(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| csv_error(path, source))?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| csv_error(path, source))?
        .iter()
        .map(normalize_header)
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| csv_error(path, source))?;
        let cells = headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(CsvRow {
            line: record_line(&record),
            cells,
        });
    }
    Ok(rows)
}

/// Read a CSV file as positional records of exactly `N` fields, dropping
/// the header row.
pub fn read_csv_records<const N: usize>(path: &Path) -> Result<Vec<[String; N]>> {
    ensure_file(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| csv_error(path, source))?;
    let mut records = Vec::new();
    for record in reader.records().skip(1) {
        let record = record.map_err(|source| csv_error(path, source))?;
        let fields: Vec<String> = record.iter().map(str::to_string).collect();
        let fields: [String; N] =
            fields
                .try_into()
                .map_err(|fields: Vec<String>| IngestError::RecordArity {
                    path: path.to_path_buf(),
                    line: record_line(&record),
                    expected: N,
                    found: fields.len(),
                })?;
        records.push(fields);
    }
    Ok(records)
}
