//! Loading of the relative-pronoun dataset inputs.
//!
//! # Inputs
//!
//! - `etc/parameters.csv`, `etc/codes.csv`: parameter and code definitions
//! - `raw/InterrogativeRelativeIE_Appendix1.csv`: one row per construction
//! - `raw/AudersetReferences.bib`: the bibliography
//! - `etc/language-sources.csv`, `etc/value-sources.csv`: citation mappings
//!
//! # Example
//!
//! ```ignore
//! use cldf_ingest::{DatasetLayout, load_dataset};
//!
//! let layout = DatasetLayout::new("datasets/relpron");
//! let source = load_dataset(&layout)?;
//! println!("{} constructions", source.rows.len());
//! ```

pub mod bibtex;
mod csv_rows;
mod dataset;
mod error;
mod layout;
mod loaders;
pub mod raw;

// === Error Types ===
pub use error::{IngestError, Result};

// === Layout ===
pub use layout::{DATASET_DIR_ENV_VAR, DatasetLayout};

// === Loading ===
pub use bibtex::{BibtexError, parse_bibtex};
pub use csv_rows::{CsvRow, read_csv_records, read_csv_rows};
pub use dataset::{SourceDataset, load_dataset};
pub use loaders::{
    LanguageSources, ValueSource, ValueSources, load_bibliography, load_codes,
    load_language_sources, load_parameters, load_raw_rows, load_value_sources, split_list,
};
pub use raw::RawRow;
