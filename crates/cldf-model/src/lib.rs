//! Record types shared by the relative-pronoun CLDF pipeline.
//!
//! Loaders produce [`Parameter`], [`Code`] and [`Bibliography`] values,
//! the transformer derives the remaining records and the writer consumes
//! everything through the [`Record`] trait.

pub mod bibliography;
pub mod citation;
pub mod dataset;
pub mod error;
pub mod records;
pub mod table;

pub use bibliography::{BibEntry, Bibliography};
pub use citation::SourceRef;
pub use dataset::CldfDataset;
pub use error::{ModelError, Result};
pub use records::{CValue, Code, Construction, Language, Parameter, Value};
pub use table::{CellValue, Record};
