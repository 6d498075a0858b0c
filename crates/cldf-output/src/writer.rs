//! Rendering and writing of the dataset files.

use std::fs;
use std::path::{Path, PathBuf};

use cldf_model::CldfDataset;
use sha2::{Digest, Sha256};
use tracing::{debug, error, info};

use crate::error::{OutputError, Result};
use crate::metadata::{METADATA_FILE, SOURCES_FILE, render_descriptor};
use crate::schema::dataset_schema;
use crate::tables::{TableRows, dataset_tables};
use crate::validate::validate_tables;

#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// Validate and render without touching the output directory.
    pub dry_run: bool,
}

/// One rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub name: String,
    pub path: PathBuf,
    /// Data rows, for table files.
    pub rows: Option<usize>,
    pub sha256: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub output_dir: PathBuf,
    pub files: Vec<WrittenFile>,
    pub dry_run: bool,
}

impl WriteReport {
    pub fn file(&self, name: &str) -> Option<&WrittenFile> {
        self.files.iter().find(|file| file.name == name)
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Render one table as CSV: header row, `\n` line ends, list cells joined
/// by the column separator.
pub fn render_table(table: &TableRows<'_>) -> Result<Vec<u8>> {
    let csv_error = |source| OutputError::Csv {
        table: table.schema.url.to_string(),
        source,
    };
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer
        .write_record(table.schema.columns.iter().map(|column| column.name))
        .map_err(csv_error)?;
    for record in &table.records {
        let row: Vec<String> = table
            .schema
            .columns
            .iter()
            .map(|column| {
                record
                    .cell(column.name)
                    .map(|cell| cell.render(column.separator))
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&row).map_err(csv_error)?;
    }
    writer.into_inner().map_err(|err| OutputError::Io {
        path: PathBuf::from(table.schema.url),
        source: err.into_error(),
    })
}

/// Validate `dataset`, then write its tables, descriptor and bibliography
/// into `output_dir`. Nothing is written when validation fails.
pub fn write_dataset(
    dataset: &CldfDataset,
    output_dir: &Path,
    options: WriteOptions,
) -> Result<WriteReport> {
    let schema = dataset_schema();
    let tables = dataset_tables(&schema, dataset);

    let report = validate_tables(&tables, &dataset.sources);
    if !report.is_valid() {
        for issue in &report.issues {
            error!(table = %issue.table, row = issue.row, column = %issue.column, "{}", issue.kind);
        }
        return Err(OutputError::Validation(report));
    }

    let mut rendered: Vec<(String, Option<usize>, Vec<u8>)> = Vec::new();
    for table in &tables {
        let bytes = render_table(table)?;
        rendered.push((table.schema.url.to_string(), Some(table.records.len()), bytes));
    }
    rendered.push((
        METADATA_FILE.to_string(),
        None,
        render_descriptor(&schema)?.into_bytes(),
    ));
    rendered.push((
        SOURCES_FILE.to_string(),
        None,
        dataset.sources.to_bibtex().into_bytes(),
    ));

    if !options.dry_run {
        fs::create_dir_all(output_dir).map_err(|source| OutputError::Io {
            path: output_dir.to_path_buf(),
            source,
        })?;
    }
    let mut files = Vec::with_capacity(rendered.len());
    for (name, rows, bytes) in rendered {
        let path = output_dir.join(&name);
        if !options.dry_run {
            fs::write(&path, &bytes).map_err(|source| OutputError::Io {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
        }
        files.push(WrittenFile {
            name,
            path,
            rows,
            sha256: sha256_hex(&bytes),
        });
    }
    info!(
        output_dir = %output_dir.display(),
        files = files.len(),
        dry_run = options.dry_run,
        "dataset emitted"
    );
    Ok(WriteReport {
        output_dir: output_dir.to_path_buf(),
        files,
        dry_run: options.dry_run,
    })
}
