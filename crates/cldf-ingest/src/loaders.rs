//! Loaders for the configuration tables and auxiliary mappings.

use std::path::Path;

use cldf_model::{Bibliography, Code, Parameter};
use indexmap::IndexMap;
use tracing::debug;

use crate::bibtex::parse_bibtex;
use crate::csv_rows::{CsvRow, read_csv_records, read_csv_rows};
use crate::error::{IngestError, Result};
use crate::raw::RawRow;

/// Citations per glottocode.
pub type LanguageSources = IndexMap<String, Vec<String>>;

/// Comment and citations per `(glottocode, parameter)`.
pub type ValueSources = IndexMap<(String, String), ValueSource>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueSource {
    pub comment: String,
    pub source: Vec<String>,
}

/// Split on `separator`, trimming pieces and dropping empty ones.
pub fn split_list(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

fn required<'a>(row: &'a CsvRow, column: &str) -> Result<&'a str> {
    row.cells
        .get(column)
        .map(String::as_str)
        .ok_or_else(|| IngestError::MissingColumn {
            column: column.to_string(),
            row: format!("at line {}", row.line),
        })
}

fn optional(row: &CsvRow, column: &str) -> String {
    row.cells.get(column).cloned().unwrap_or_default()
}

/// Parameters in file order. Columns other than the known five are ignored.
pub fn load_parameters(path: &Path) -> Result<Vec<Parameter>> {
    let rows = read_csv_rows(path)?;
    let mut parameters = Vec::with_capacity(rows.len());
    for row in &rows {
        let sheet_column = optional(row, "Sheet_Column");
        parameters.push(Parameter {
            id: required(row, "ID")?.to_string(),
            name: optional(row, "Name"),
            description: optional(row, "Description"),
            grammacodes: split_list(&optional(row, "Grammacodes"), ','),
            sheet_column: (!sheet_column.is_empty()).then_some(sheet_column),
        });
    }
    debug!(path = %path.display(), count = parameters.len(), "loaded parameters");
    Ok(parameters)
}

/// Codes keyed by ID in file order; a repeated ID keeps its first position.
pub fn load_codes(path: &Path) -> Result<IndexMap<String, Code>> {
    let rows = read_csv_rows(path)?;
    let mut codes = IndexMap::with_capacity(rows.len());
    for row in &rows {
        let code = Code {
            id: required(row, "ID")?.to_string(),
            parameter_id: optional(row, "Parameter_ID"),
            name: optional(row, "Name"),
            description: optional(row, "Description"),
        };
        codes.insert(code.id.clone(), code);
    }
    debug!(path = %path.display(), count = codes.len(), "loaded codes");
    Ok(codes)
}

pub fn load_raw_rows(path: &Path) -> Result<Vec<RawRow>> {
    let rows: Vec<RawRow> = read_csv_rows(path)?
        .into_iter()
        .map(RawRow::from)
        .collect();
    debug!(path = %path.display(), count = rows.len(), "loaded raw appendix");
    Ok(rows)
}

pub fn load_bibliography(path: &Path) -> Result<Bibliography> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let bibliography = parse_bibtex(&text).map_err(|source| IngestError::Bibtex {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), count = bibliography.len(), "loaded bibliography");
    Ok(bibliography)
}

/// `glottocode,sources` records; sources are comma separated.
pub fn load_language_sources(path: &Path) -> Result<LanguageSources> {
    let mut sources = LanguageSources::new();
    for [glottocode, citations] in read_csv_records::<2>(path)? {
        sources.insert(glottocode, split_list(&citations, ','));
    }
    debug!(path = %path.display(), count = sources.len(), "loaded language sources");
    Ok(sources)
}

/// `glottocode,parameter,comment,sources` records; sources are semicolon separated.
pub fn load_value_sources(path: &Path) -> Result<ValueSources> {
    let mut sources = ValueSources::new();
    for [glottocode, parameter, comment, citations] in read_csv_records::<4>(path)? {
        sources.insert(
            (glottocode, parameter),
            ValueSource {
                comment,
                source: split_list(&citations, ';'),
            },
        );
    }
    debug!(path = %path.display(), count = sources.len(), "loaded value sources");
    Ok(sources)
}
