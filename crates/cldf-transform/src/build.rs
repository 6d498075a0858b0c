//! Derivation of the output collections.

use cldf_ingest::raw::{RawRow, columns};
use cldf_ingest::{SourceDataset, ValueSources};
use cldf_model::{CValue, CldfDataset, Construction, Language, Parameter, Value};
use indexmap::IndexMap;
use tracing::{debug, info};

use crate::error::{Result, TransformError};
use crate::index::{index_forms, index_languages};
use crate::slug::slug;

/// Free-text parameter holding a construction's relative-marker form.
pub const FORM_PARAMETER: &str = "rmform";
/// Language-level parameter aggregating every attested form.
pub const FORMS_PARAMETER: &str = "rmforms";
/// Separator between aggregated forms.
pub const FORM_SEPARATOR: &str = " / ";

pub fn construction_name(language_name: &str, form: &str) -> String {
    format!("{language_name} relative pronoun {form}")
}

pub fn cvalue_id(row_id: &str, parameter_id: &str) -> String {
    format!("{row_id}-{parameter_id}")
}

pub fn code_id(parameter_id: &str, value: &str) -> String {
    format!("{parameter_id}-{}", slug(value))
}

pub fn aggregated_value_id(glottocode: &str) -> String {
    format!("{FORMS_PARAMETER}-{glottocode}")
}

/// One construction per raw row, named after its (first-seen) language.
pub fn build_constructions(
    rows: &[RawRow],
    languages: &IndexMap<String, Language>,
) -> Result<Vec<Construction>> {
    rows.iter()
        .map(|row| -> Result<Construction> {
            let id = row.id()?;
            let glottocode = row.glottocode()?;
            let language =
                languages
                    .get(glottocode)
                    .ok_or_else(|| TransformError::UnknownLanguage {
                        row: id.to_string(),
                        glottocode: glottocode.to_string(),
                    })?;
            Ok(Construction {
                id: id.to_string(),
                language_id: glottocode.to_string(),
                name: construction_name(&language.name, row.form()?),
                description: None,
            })
        })
        .collect()
}

/// One value per row and parameter; the aggregated-forms parameter is
/// derived per language instead.
pub fn build_cvalues(rows: &[RawRow], parameters: &[Parameter]) -> Result<Vec<CValue>> {
    let coded: Vec<(&Parameter, &str)> = parameters
        .iter()
        .filter(|parameter| parameter.id != FORMS_PARAMETER)
        .map(|parameter| {
            parameter
                .sheet_column
                .as_deref()
                .map(|column| (parameter, column))
                .ok_or_else(|| TransformError::MissingSheetColumn {
                    parameter: parameter.id.clone(),
                })
        })
        .collect::<Result<_>>()?;

    let mut cvalues = Vec::with_capacity(rows.len() * coded.len());
    for row in rows {
        let row_id = row.id()?;
        for (parameter, column) in &coded {
            let value = row.get(column)?;
            let (code, comment) = if parameter.id == FORM_PARAMETER {
                (None, Some(row.get(columns::NOTES)?.to_string()))
            } else {
                (Some(code_id(&parameter.id, value)), None)
            };
            cvalues.push(CValue {
                id: cvalue_id(row_id, &parameter.id),
                construction_id: row_id.to_string(),
                parameter_id: parameter.id.clone(),
                code_id: code,
                value: value.to_string(),
                comment,
            });
        }
    }
    Ok(cvalues)
}

/// One aggregated-forms value per language.
pub fn build_values(
    forms: &IndexMap<String, Vec<String>>,
    value_sources: &ValueSources,
) -> Vec<Value> {
    forms
        .iter()
        .map(|(glottocode, forms)| {
            let sourced = value_sources.get(&(glottocode.clone(), FORMS_PARAMETER.to_string()));
            Value {
                id: aggregated_value_id(glottocode),
                language_id: glottocode.clone(),
                parameter_id: FORMS_PARAMETER.to_string(),
                value: forms.join(FORM_SEPARATOR),
                code_id: None,
                comment: sourced.map(|s| s.comment.clone()).unwrap_or_default(),
                source: sourced.map(|s| s.source.clone()).unwrap_or_default(),
            }
        })
        .collect()
}

/// Run the indexer and transformer over everything the loader produced.
pub fn build_dataset(source: SourceDataset) -> Result<CldfDataset> {
    let SourceDataset {
        parameters,
        codes,
        rows,
        bibliography,
        language_sources,
        value_sources,
    } = source;

    let languages = index_languages(&rows, &language_sources)?;
    let forms = index_forms(&rows)?;
    debug!(
        languages = languages.len(),
        rows = rows.len(),
        "indexed raw appendix"
    );

    let constructions = build_constructions(&rows, &languages)?;
    let cvalues = build_cvalues(&rows, &parameters)?;
    let values = build_values(&forms, &value_sources);
    info!(
        languages = languages.len(),
        constructions = constructions.len(),
        cvalues = cvalues.len(),
        values = values.len(),
        "dataset derived"
    );

    Ok(CldfDataset {
        languages: languages.into_values().collect(),
        parameters,
        codes,
        constructions,
        cvalues,
        values,
        sources: bibliography,
    })
}
