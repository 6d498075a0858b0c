//! CLDF output generation.
//!
//! Declares the table schemas of the dataset, validates the derived
//! collections against them and writes the CSV tables, the JSON metadata
//! descriptor and the BibTeX sources.

mod error;
pub mod metadata;
pub mod schema;
mod tables;
pub mod validate;
mod writer;

pub use error::{OutputError, Result};
pub use metadata::{METADATA_FILE, SOURCES_FILE, descriptor, render_descriptor};
pub use schema::{
    CODES, CONSTRUCTIONS, CVALUES, ColumnSpec, Datatype, DatasetSchema, ForeignKey, LANGUAGES,
    PARAMETERS, Property, TableSchema, VALUES, dataset_schema,
};
pub use tables::{TableRows, dataset_tables};
pub use validate::{IssueKind, ValidationIssue, ValidationReport, is_valid_id, validate_tables};
pub use writer::{WriteOptions, WriteReport, WrittenFile, render_table, sha256_hex, write_dataset};
