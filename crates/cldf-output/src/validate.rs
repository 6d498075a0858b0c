//! Schema validation of the derived collections.
//!
//! Runs before anything is written: identifiers, foreign keys, source
//! citations and decimal columns.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use cldf_model::{Bibliography, CellValue, SourceRef};
use tracing::debug;

use crate::schema::{Datatype, Property, TableSchema};
use crate::tables::TableRows;

#[derive(Debug, Clone, PartialEq)]
pub enum IssueKind {
    /// The record type cannot supply a declared column.
    UndeclaredColumn,
    MissingId,
    InvalidId { id: String },
    DuplicateId { id: String },
    DanglingReference { value: String, table: String },
    UnknownSource { reference: String },
    MalformedSource { reference: String },
    InvalidNumber { value: String },
    NumberOutOfRange { value: String, minimum: f64, maximum: f64 },
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::UndeclaredColumn => write!(f, "record has no value for this column"),
            IssueKind::MissingId => write!(f, "empty identifier"),
            IssueKind::InvalidId { id } => write!(f, "invalid identifier '{id}'"),
            IssueKind::DuplicateId { id } => write!(f, "duplicate identifier '{id}'"),
            IssueKind::DanglingReference { value, table } => {
                write!(f, "'{value}' does not resolve to a row of {table}")
            }
            IssueKind::UnknownSource { reference } => {
                write!(f, "source '{reference}' is not in the bibliography")
            }
            IssueKind::MalformedSource { reference } => {
                write!(f, "malformed source reference '{reference}'")
            }
            IssueKind::InvalidNumber { value } => write!(f, "'{value}' is not a decimal"),
            IssueKind::NumberOutOfRange {
                value,
                minimum,
                maximum,
            } => write!(f, "{value} is outside [{minimum}, {maximum}]"),
        }
    }
}

/// A single violation, located by table, 1-based data row and column.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub table: String,
    pub row: usize,
    pub column: String,
    pub kind: IssueKind,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} row {} column {}: {}",
            self.table, self.row, self.column, self.kind
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// Issue counts per table.
    pub fn counts_by_table(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for issue in &self.issues {
            *counts.entry(issue.table.as_str()).or_default() += 1;
        }
        counts
    }

    fn push(&mut self, table: &TableSchema, row: usize, column: &str, kind: IssueKind) {
        self.issues.push(ValidationIssue {
            table: table.url.to_string(),
            row,
            column: column.to_string(),
            kind,
        });
    }
}

/// CLDF identifiers: ASCII letters, digits, `_` and `-`.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
}

/// Validate every table against its schema; foreign keys resolve against
/// the identifiers of the other tables in `tables`.
pub fn validate_tables(tables: &[TableRows<'_>], sources: &Bibliography) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut ids: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();

    for table in tables {
        let known = check_ids(table, &mut report);
        ids.insert(table.schema.url, known);
        check_cells(table, sources, &mut report);
    }
    for table in tables {
        check_foreign_keys(table, &ids, &mut report);
    }
    debug!(
        tables = tables.len(),
        issues = report.issue_count(),
        "validated tables"
    );
    report
}

fn cell(table: &TableRows<'_>, index: usize, column: &str) -> Option<CellValue> {
    table.records[index].cell(column)
}

fn check_ids(table: &TableRows<'_>, report: &mut ValidationReport) -> BTreeSet<String> {
    let mut seen = BTreeSet::new();
    let Some(id_column) = table.schema.id_column() else {
        return seen;
    };
    for index in 0..table.records.len() {
        let row = index + 1;
        let Some(value) = cell(table, index, id_column.name) else {
            report.push(table.schema, row, id_column.name, IssueKind::UndeclaredColumn);
            continue;
        };
        let id = value.render(None);
        if id.is_empty() {
            report.push(table.schema, row, id_column.name, IssueKind::MissingId);
        } else if !is_valid_id(&id) {
            report.push(table.schema, row, id_column.name, IssueKind::InvalidId { id });
        } else if !seen.insert(id.clone()) {
            report.push(table.schema, row, id_column.name, IssueKind::DuplicateId { id });
        }
    }
    seen
}

fn check_cells(table: &TableRows<'_>, sources: &Bibliography, report: &mut ValidationReport) {
    for column in &table.schema.columns {
        for index in 0..table.records.len() {
            let row = index + 1;
            let Some(value) = cell(table, index, column.name) else {
                report.push(table.schema, row, column.name, IssueKind::UndeclaredColumn);
                continue;
            };
            if column.property == Some(Property::Source) {
                for reference in value.values() {
                    let kind = match SourceRef::parse(reference) {
                        Ok(parsed) if sources.contains_key(parsed.key()) => continue,
                        Ok(_) => IssueKind::UnknownSource {
                            reference: reference.to_string(),
                        },
                        Err(_) => IssueKind::MalformedSource {
                            reference: reference.to_string(),
                        },
                    };
                    report.push(table.schema, row, column.name, kind);
                }
            }
            if let Datatype::Decimal { minimum, maximum } = column.datatype {
                for text in value.values() {
                    let kind = match text.trim().parse::<f64>() {
                        Ok(number) if (minimum..=maximum).contains(&number) => continue,
                        Ok(_) => IssueKind::NumberOutOfRange {
                            value: text.to_string(),
                            minimum,
                            maximum,
                        },
                        Err(_) => IssueKind::InvalidNumber {
                            value: text.to_string(),
                        },
                    };
                    report.push(table.schema, row, column.name, kind);
                }
            }
        }
    }
}

fn check_foreign_keys(
    table: &TableRows<'_>,
    ids: &BTreeMap<&str, BTreeSet<String>>,
    report: &mut ValidationReport,
) {
    for foreign_key in &table.schema.foreign_keys {
        let targets = ids.get(foreign_key.reference_table);
        for index in 0..table.records.len() {
            let Some(value) = cell(table, index, foreign_key.column) else {
                continue;
            };
            for reference in value.values() {
                if targets.is_some_and(|ids| ids.contains(reference)) {
                    continue;
                }
                report.push(
                    table.schema,
                    index + 1,
                    foreign_key.column,
                    IssueKind::DanglingReference {
                        value: reference.to_string(),
                        table: foreign_key.reference_table.to_string(),
                    },
                );
            }
        }
    }
}
