//! Rows of the raw appendix spreadsheet.

use indexmap::IndexMap;

use crate::csv_rows::CsvRow;
use crate::error::{IngestError, Result};

/// Column names of the raw appendix the pipeline reads directly.
pub mod columns {
    pub const ID: &str = "ID";
    pub const GLOTTOCODE: &str = "Glottocode";
    pub const LANGUAGE: &str = "Language";
    pub const BRANCH: &str = "Branch";
    pub const SUBBRANCH: &str = "Subbranch";
    pub const SUBSUBBRANCH: &str = "Subsubbranch";
    pub const EARLY_TIME_BP: &str = "EarlyTimeBP";
    pub const LATE_TIME_BP: &str = "LateTimeBP";
    pub const AV_TIME_BP: &str = "AvTimeBP";
    pub const LATITUDE: &str = "Latitude";
    pub const LONGITUDE: &str = "Longitude";
    pub const RM_FORM: &str = "RMform";
    pub const NOTES: &str = "Notes";
}

/// One construction row of the appendix, keyed by column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    line: u64,
    cells: IndexMap<String, String>,
}

impl RawRow {
    pub fn new(line: u64, cells: IndexMap<String, String>) -> Self {
        Self { line, cells }
    }

    /// Build a row from `(column, value)` pairs.
    pub fn from_pairs<'a>(line: u64, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let cells = pairs
            .into_iter()
            .map(|(column, value)| (column.to_string(), value.to_string()))
            .collect();
        Self { line, cells }
    }

    pub fn line(&self) -> u64 {
        self.line
    }

    /// Raw text of `column`; a column absent from the sheet is an error.
    pub fn get(&self, column: &str) -> Result<&str> {
        self.cells
            .get(column)
            .map(String::as_str)
            .ok_or_else(|| IngestError::MissingColumn {
                column: column.to_string(),
                row: self.label(),
            })
    }

    pub fn id(&self) -> Result<&str> {
        self.get(columns::ID)
    }

    pub fn glottocode(&self) -> Result<&str> {
        self.get(columns::GLOTTOCODE)
    }

    pub fn form(&self) -> Result<&str> {
        self.get(columns::RM_FORM)
    }

    /// Row identifier when present, otherwise its line number.
    fn label(&self) -> String {
        match self.cells.get(columns::ID) {
            Some(id) if !id.is_empty() => id.clone(),
            _ => format!("at line {}", self.line),
        }
    }
}

impl From<CsvRow> for RawRow {
    fn from(row: CsvRow) -> Self {
        Self::new(row.line, row.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_present_columns() {
        let row = RawRow::from_pairs(2, [("ID", "R1"), ("RMform", "ke"), ("Notes", "")]);
        assert_eq!(row.id().unwrap(), "R1");
        assert_eq!(row.form().unwrap(), "ke");
        assert_eq!(row.get("Notes").unwrap(), "");
    }

    #[test]
    fn missing_column_names_the_row() {
        let row = RawRow::from_pairs(2, [("ID", "R1")]);
        let err = row.glottocode().unwrap_err();
        assert_eq!(err.to_string(), "row R1 has no column 'Glottocode'");

        let anonymous = RawRow::from_pairs(7, [("Language", "Latin")]);
        let err = anonymous.id().unwrap_err();
        assert_eq!(err.to_string(), "row at line 7 has no column 'ID'");
    }
}
