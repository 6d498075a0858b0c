//! The `make` pipeline: ingest, transform and emit, each in its own span.

use std::time::Instant;

use anyhow::{Context, Result, bail};
use cldf_ingest::{DatasetLayout, load_dataset};
use cldf_output::{WriteOptions, WriteReport, write_dataset};
use cldf_transform::build_dataset;
use tracing::{info, info_span};

/// Build the dataset rooted at `layout` into `layout.output_dir`.
///
/// Nothing is written unless every stage, validation included, succeeds.
pub fn run_make(layout: &DatasetLayout, options: WriteOptions) -> Result<WriteReport> {
    let make_span = info_span!("make", dataset = %layout.root.display());
    let _make_guard = make_span.enter();

    let missing = layout.missing_inputs();
    if !missing.is_empty() {
        let listed: Vec<String> = missing
            .iter()
            .map(|path| path.display().to_string())
            .collect();
        bail!("missing input files: {}", listed.join(", "));
    }

    let ingest_start = Instant::now();
    let source = info_span!("ingest")
        .in_scope(|| load_dataset(layout))
        .with_context(|| format!("load dataset from {}", layout.root.display()))?;
    info!(
        rows = source.rows.len(),
        parameters = source.parameters.len(),
        codes = source.codes.len(),
        references = source.bibliography.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let transform_start = Instant::now();
    let dataset = info_span!("transform")
        .in_scope(|| build_dataset(source))
        .context("derive CLDF records")?;
    info!(
        languages = dataset.languages.len(),
        constructions = dataset.constructions.len(),
        cvalues = dataset.cvalues.len(),
        values = dataset.values.len(),
        duration_ms = transform_start.elapsed().as_millis(),
        "transform complete"
    );

    let emit_start = Instant::now();
    let output_dir = &layout.output_dir;
    let report = info_span!("emit", output_dir = %output_dir.display())
        .in_scope(|| write_dataset(&dataset, output_dir, options))
        .with_context(|| format!("write CLDF dataset to {}", output_dir.display()))?;
    info!(
        files = report.files.len(),
        dry_run = options.dry_run,
        duration_ms = emit_start.elapsed().as_millis(),
        "emit complete"
    );
    Ok(report)
}
