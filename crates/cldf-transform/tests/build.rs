//! Tests for indexing and derivation of the output collections.

use cldf_ingest::raw::RawRow;
use cldf_ingest::{LanguageSources, ValueSource, ValueSources};
use cldf_model::Parameter;
use cldf_transform::{
    TransformError, build_constructions, build_cvalues, build_values, index_forms,
    index_languages,
};
use indexmap::IndexMap;

fn row(id: &str, glottocode: &str, language: &str, form: &str, notes: &str) -> RawRow {
    RawRow::from_pairs(
        0,
        [
            ("ID", id),
            ("Glottocode", glottocode),
            ("Language", language),
            ("Branch", "Italic"),
            ("Subbranch", ""),
            ("Subsubbranch", ""),
            ("EarlyTimeBP", "2200"),
            ("LateTimeBP", "1500"),
            ("AvTimeBP", "1850"),
            ("Latitude", "41.9"),
            ("Longitude", "12.5"),
            ("RMform", form),
            ("RMsource", "Interrogative (wh-)"),
            ("Notes", notes),
        ],
    )
}

fn parameter(id: &str, sheet_column: Option<&str>) -> Parameter {
    Parameter {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        grammacodes: Vec::new(),
        sheet_column: sheet_column.map(str::to_string),
    }
}

fn sample_rows() -> Vec<RawRow> {
    vec![
        row("R1", "lati1261", "Latin", "qui", "inflects"),
        row("R2", "west2369", "Persian", "ke", "invariant"),
        row("R3", "lati1261", "Old Latin", "quod", ""),
    ]
}

#[test]
fn first_row_wins_for_languages() {
    let mut sources = LanguageSources::new();
    sources.insert("lati1261".to_string(), vec!["Pinkster2015".to_string()]);

    let languages = index_languages(&sample_rows(), &sources).unwrap();
    let ids: Vec<&str> = languages.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["lati1261", "west2369"]);
    assert_eq!(languages["lati1261"].name, "Latin");
    assert_eq!(languages["lati1261"].source, vec!["Pinkster2015"]);
    assert!(languages["west2369"].source.is_empty());
    assert_eq!(languages["west2369"].glottocode, "west2369");
}

#[test]
fn forms_are_grouped_in_row_order() {
    let forms = index_forms(&sample_rows()).unwrap();
    assert_eq!(forms["lati1261"], vec!["qui", "quod"]);
    assert_eq!(forms["west2369"], vec!["ke"]);
}

#[test]
fn constructions_use_first_seen_language_name() {
    let rows = sample_rows();
    let languages = index_languages(&rows, &LanguageSources::new()).unwrap();
    let constructions = build_constructions(&rows, &languages).unwrap();
    assert_eq!(constructions.len(), 3);
    assert_eq!(constructions[1].id, "R2");
    assert_eq!(constructions[1].name, "Persian relative pronoun ke");
    assert_eq!(constructions[1].language_id, "west2369");
    assert_eq!(constructions[2].name, "Latin relative pronoun quod");
}

#[test]
fn constructions_require_indexed_languages() {
    let rows = sample_rows();
    let err = build_constructions(&rows, &IndexMap::new()).unwrap_err();
    assert!(matches!(err, TransformError::UnknownLanguage { .. }));
}

#[test]
fn cvalues_follow_parameter_kind() {
    let parameters = vec![
        parameter("rmform", Some("RMform")),
        parameter("rmforms", None),
        parameter("rmsource", Some("RMsource")),
    ];
    let cvalues = build_cvalues(&sample_rows(), &parameters).unwrap();
    assert_eq!(cvalues.len(), 6);

    let form = &cvalues[2];
    assert_eq!(form.id, "R2-rmform");
    assert_eq!(form.construction_id, "R2");
    assert_eq!(form.code_id, None);
    assert_eq!(form.comment.as_deref(), Some("invariant"));
    assert_eq!(form.value, "ke");

    let source = &cvalues[3];
    assert_eq!(source.id, "R2-rmsource");
    assert_eq!(source.code_id.as_deref(), Some("rmsource-interrogativewh"));
    assert_eq!(source.comment, None);
    assert_eq!(source.value, "Interrogative (wh-)");

    assert!(cvalues.iter().all(|cvalue| cvalue.parameter_id != "rmforms"));
}

#[test]
fn cvalues_need_a_sheet_column() {
    let parameters = vec![parameter("rmsource", None)];
    let err = build_cvalues(&sample_rows(), &parameters).unwrap_err();
    assert_eq!(err.to_string(), "parameter 'rmsource' has no Sheet_Column");
}

#[test]
fn cvalues_fail_on_unknown_sheet_column() {
    let parameters = vec![parameter("inflection", Some("Inflection"))];
    let err = build_cvalues(&sample_rows(), &parameters).unwrap_err();
    assert_eq!(err.to_string(), "row R1 has no column 'Inflection'");
}

#[test]
fn values_aggregate_forms_with_defaults() {
    let forms = index_forms(&sample_rows()).unwrap();
    let mut value_sources = ValueSources::new();
    value_sources.insert(
        ("lati1261".to_string(), "rmforms".to_string()),
        ValueSource {
            comment: "Classical paradigm".to_string(),
            source: vec!["Pinkster2015".to_string()],
        },
    );
    value_sources.insert(
        ("west2369".to_string(), "rmform".to_string()),
        ValueSource {
            comment: "wrong parameter".to_string(),
            source: vec!["Lazard1992".to_string()],
        },
    );

    let values = build_values(&forms, &value_sources);
    assert_eq!(values.len(), 2);
    assert_eq!(values[0].id, "rmforms-lati1261");
    assert_eq!(values[0].parameter_id, "rmforms");
    assert_eq!(values[0].value, "qui / quod");
    assert_eq!(values[0].comment, "Classical paradigm");
    assert_eq!(values[0].source, vec!["Pinkster2015"]);

    assert_eq!(values[1].id, "rmforms-west2369");
    assert_eq!(values[1].value, "ke");
    assert_eq!(values[1].comment, "");
    assert!(values[1].source.is_empty());
}

#[test]
fn persian_example_row() {
    let rows = vec![RawRow::from_pairs(
        2,
        [
            ("ID", "R1"),
            ("Glottocode", "stan1293"),
            ("Language", "Persian"),
            ("Branch", ""),
            ("Subbranch", ""),
            ("Subsubbranch", ""),
            ("EarlyTimeBP", ""),
            ("LateTimeBP", ""),
            ("AvTimeBP", ""),
            ("Latitude", ""),
            ("Longitude", ""),
            ("RMform", "ke"),
            ("Notes", "invariant"),
        ],
    )];
    let languages = index_languages(&rows, &LanguageSources::new()).unwrap();
    let construction = &build_constructions(&rows, &languages).unwrap()[0];
    assert_eq!(construction.id, "R1");
    assert_eq!(construction.name, "Persian relative pronoun ke");
    assert_eq!(construction.language_id, "stan1293");

    let cvalue = &build_cvalues(&rows, &[parameter("rmform", Some("RMform"))]).unwrap()[0];
    assert_eq!(cvalue.id, "R1-rmform");
    assert_eq!(cvalue.code_id, None);
    assert_eq!(cvalue.comment.as_deref(), Some("invariant"));
    assert_eq!(cvalue.value, "ke");
}
