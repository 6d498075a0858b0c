use cldf_model::{Bibliography, Code, Parameter};
use indexmap::IndexMap;
use tracing::info;

use crate::error::Result;
use crate::layout::DatasetLayout;
use crate::loaders::{
    LanguageSources, ValueSources, load_bibliography, load_codes, load_language_sources,
    load_parameters, load_raw_rows, load_value_sources,
};
use crate::raw::RawRow;

/// Every input of the pipeline, as loaded from disk.
#[derive(Debug, Clone, Default)]
pub struct SourceDataset {
    pub parameters: Vec<Parameter>,
    pub codes: IndexMap<String, Code>,
    pub rows: Vec<RawRow>,
    pub bibliography: Bibliography,
    pub language_sources: LanguageSources,
    pub value_sources: ValueSources,
}

/// Load all six inputs named by `layout`.
pub fn load_dataset(layout: &DatasetLayout) -> Result<SourceDataset> {
    let dataset = SourceDataset {
        parameters: load_parameters(&layout.parameters)?,
        codes: load_codes(&layout.codes)?,
        rows: load_raw_rows(&layout.appendix)?,
        bibliography: load_bibliography(&layout.bibliography)?,
        language_sources: load_language_sources(&layout.language_sources)?,
        value_sources: load_value_sources(&layout.value_sources)?,
    };
    info!(
        root = %layout.root.display(),
        parameters = dataset.parameters.len(),
        codes = dataset.codes.len(),
        rows = dataset.rows.len(),
        sources = dataset.bibliography.len(),
        "inputs loaded"
    );
    Ok(dataset)
}
