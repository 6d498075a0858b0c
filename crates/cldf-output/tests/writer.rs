//! Integration tests for validation and writing.

use std::fs;

use cldf_model::{BibEntry, CValue, CldfDataset, Code, Construction, Language, Parameter, Value};
use cldf_output::{
    CONSTRUCTIONS, CVALUES, IssueKind, METADATA_FILE, OutputError, SOURCES_FILE, WriteOptions,
    write_dataset,
};
use indexmap::IndexMap;

fn language(id: &str, name: &str, sources: &[&str]) -> Language {
    Language {
        id: id.to_string(),
        name: name.to_string(),
        glottocode: id.to_string(),
        family: "Italic".to_string(),
        subbranch: String::new(),
        subsubbranch: String::new(),
        early_time_bp: "2200".to_string(),
        late_time_bp: "1500".to_string(),
        av_time_bp: "1850".to_string(),
        latitude: "41.9".to_string(),
        longitude: "12.5".to_string(),
        source: sources.iter().map(|s| s.to_string()).collect(),
    }
}

fn parameter(id: &str, grammacodes: &[&str]) -> Parameter {
    Parameter {
        id: id.to_string(),
        name: format!("{id} name"),
        description: String::new(),
        grammacodes: grammacodes.iter().map(|s| s.to_string()).collect(),
        sheet_column: None,
    }
}

fn cvalue(row: &str, parameter: &str, code: Option<&str>, value: &str) -> CValue {
    CValue {
        id: format!("{row}-{parameter}"),
        construction_id: row.to_string(),
        parameter_id: parameter.to_string(),
        code_id: code.map(str::to_string),
        value: value.to_string(),
        comment: None,
    }
}

fn sample_dataset() -> CldfDataset {
    let mut codes = IndexMap::new();
    codes.insert(
        "rmsource-particle".to_string(),
        Code {
            id: "rmsource-particle".to_string(),
            parameter_id: "rmsource".to_string(),
            name: "particle".to_string(),
            description: String::new(),
        },
    );
    let mut rmform = cvalue("R3", "rmform", None, "ke");
    rmform.comment = Some("invariant, \"that\"".to_string());

    CldfDataset {
        languages: vec![
            language("lati1261", "Latin", &["Pinkster2015"]),
            language("west2369", "Persian", &[]),
        ],
        parameters: vec![
            parameter("rmform", &[]),
            parameter("rmforms", &[]),
            parameter("rmsource", &["RM", "IRP"]),
        ],
        codes,
        constructions: vec![
            Construction {
                id: "R1".to_string(),
                language_id: "lati1261".to_string(),
                name: "Latin relative pronoun qui".to_string(),
                description: None,
            },
            Construction {
                id: "R3".to_string(),
                language_id: "west2369".to_string(),
                name: "Persian relative pronoun ke".to_string(),
                description: None,
            },
        ],
        cvalues: vec![
            cvalue("R1", "rmform", None, "qui"),
            rmform,
            cvalue("R3", "rmsource", Some("rmsource-particle"), "Particle"),
        ],
        values: vec![Value {
            id: "rmforms-lati1261".to_string(),
            language_id: "lati1261".to_string(),
            parameter_id: "rmforms".to_string(),
            value: "qui / quod".to_string(),
            code_id: None,
            comment: String::new(),
            source: vec!["Pinkster2015[331-380]".to_string(), "Hahn1964".to_string()],
        }],
        sources: vec![
            BibEntry::new("book", "Pinkster2015").with_field("year", "2015"),
            BibEntry::new("book", "Hahn1964").with_field("year", "1964"),
        ]
        .into_iter()
        .collect(),
    }
}

fn validation_issues(err: OutputError) -> Vec<IssueKind> {
    match err {
        OutputError::Validation(report) => {
            report.issues.into_iter().map(|issue| issue.kind).collect()
        }
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn writes_every_table() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("cldf");
    let report = write_dataset(&sample_dataset(), &out, WriteOptions::default()).unwrap();

    let names: Vec<&str> = report.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "values.csv",
            "languages.csv",
            "parameters.csv",
            "codes.csv",
            "constructions.csv",
            "cvalues.csv",
            METADATA_FILE,
            SOURCES_FILE,
        ]
    );
    for file in &report.files {
        assert!(file.path.is_file(), "{} missing", file.name);
    }
    assert_eq!(report.file(CVALUES).unwrap().rows, Some(3));
    assert_eq!(report.file(METADATA_FILE).unwrap().rows, None);

    let constructions = fs::read_to_string(out.join(CONSTRUCTIONS)).unwrap();
    insta::assert_snapshot!(constructions.trim_end(), @r"
    ID,Language_ID,Name,Description
    R1,lati1261,Latin relative pronoun qui,
    R3,west2369,Persian relative pronoun ke,
    ");

    let cvalues = fs::read_to_string(out.join(CVALUES)).unwrap();
    insta::assert_snapshot!(cvalues.trim_end(), @r#"
    ID,Construction_ID,Parameter_ID,Code_ID,Value,Comment
    R1-rmform,R1,rmform,,qui,
    R3-rmform,R3,rmform,,ke,"invariant, ""that"""
    R3-rmsource,R3,rmsource,rmsource-particle,Particle,
    "#);
}

#[test]
fn list_columns_use_their_separator() {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(&sample_dataset(), dir.path(), WriteOptions::default()).unwrap();

    let values = fs::read_to_string(dir.path().join("values.csv")).unwrap();
    assert_eq!(
        values,
        "ID,Language_ID,Parameter_ID,Value,Code_ID,Comment,Source\n\
         rmforms-lati1261,lati1261,rmforms,qui / quod,,,Pinkster2015[331-380];Hahn1964\n"
    );

    let parameters = fs::read_to_string(dir.path().join("parameters.csv")).unwrap();
    assert!(parameters.contains("rmsource,rmsource name,,RM;IRP\n"));

    let languages = fs::read_to_string(dir.path().join("languages.csv")).unwrap();
    assert!(languages.starts_with(
        "ID,Name,Macroarea,Latitude,Longitude,Glottocode,ISO639P3code,Family,Subbranch,\
         Subsubbranch,EarlyTimeBP,LateTimeBP,AvTimeBP,Source\n"
    ));
    assert!(
        languages.contains("\nwest2369,Persian,,41.9,12.5,west2369,,Italic,,,2200,1500,1850,\n")
    );
}

#[test]
fn metadata_declares_the_construction_foreign_key() {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(&sample_dataset(), dir.path(), WriteOptions::default()).unwrap();

    let text = fs::read_to_string(dir.path().join(METADATA_FILE)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        json["dc:conformsTo"],
        "http://cldf.clld.org/v1.0/terms.rdf#StructureDataset"
    );
    let tables = json["tables"].as_array().unwrap();
    let cvalues = tables.iter().find(|t| t["url"] == "cvalues.csv").unwrap();
    let foreign_keys = cvalues["tableSchema"]["foreignKeys"].as_array().unwrap();
    assert!(foreign_keys.iter().any(|fk| {
        fk["columnReference"][0] == "Construction_ID"
            && fk["reference"]["resource"] == "constructions.csv"
            && fk["reference"]["columnReference"][0] == "ID"
    }));
    let parameters = tables.iter().find(|t| t["url"] == "parameters.csv").unwrap();
    let grammacodes = parameters["tableSchema"]["columns"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == "Grammacodes")
        .unwrap();
    assert_eq!(grammacodes["separator"], ";");
}

#[test]
fn sources_are_written_as_bibtex() {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(&sample_dataset(), dir.path(), WriteOptions::default()).unwrap();
    let bib = fs::read_to_string(dir.path().join(SOURCES_FILE)).unwrap();
    assert!(bib.starts_with("@book{Pinkster2015,\n    year = {2015}\n}\n"));
    assert!(bib.contains("@book{Hahn1964,"));
}

#[test]
fn orphan_construction_reference_is_fatal() {
    let mut dataset = sample_dataset();
    dataset.cvalues.push(cvalue("R9", "rmform", None, "qua"));
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("cldf");

    let err = write_dataset(&dataset, &out, WriteOptions::default()).unwrap_err();
    assert_eq!(
        validation_issues(err),
        vec![IssueKind::DanglingReference {
            value: "R9".to_string(),
            table: "constructions.csv".to_string(),
        }]
    );
    assert!(!out.exists());
}

#[test]
fn duplicate_ids_and_unknown_codes_are_fatal() {
    let mut dataset = sample_dataset();
    dataset.cvalues.push(cvalue("R1", "rmform", None, "quae"));
    dataset.cvalues.push(cvalue(
        "R1",
        "rmsource",
        Some("rmsource-interrogative"),
        "Interrogative",
    ));
    let dir = tempfile::tempdir().unwrap();

    let issues = validation_issues(
        write_dataset(&dataset, dir.path(), WriteOptions::default()).unwrap_err(),
    );
    assert_eq!(
        issues,
        vec![
            IssueKind::DuplicateId {
                id: "R1-rmform".to_string()
            },
            IssueKind::DanglingReference {
                value: "rmsource-interrogative".to_string(),
                table: "codes.csv".to_string(),
            },
        ]
    );
}

#[test]
fn unknown_citations_and_bad_coordinates_are_fatal() {
    let mut dataset = sample_dataset();
    dataset.languages[1].source = vec!["Lazard1992".to_string()];
    dataset.languages[1].latitude = "132".to_string();
    dataset.languages[1].longitude = "east".to_string();
    let dir = tempfile::tempdir().unwrap();

    let issues = validation_issues(
        write_dataset(&dataset, dir.path(), WriteOptions::default()).unwrap_err(),
    );
    assert_eq!(issues.len(), 3);
    assert!(issues.contains(&IssueKind::UnknownSource {
        reference: "Lazard1992".to_string()
    }));
    assert!(issues.contains(&IssueKind::NumberOutOfRange {
        value: "132".to_string(),
        minimum: -90.0,
        maximum: 90.0,
    }));
    assert!(issues.contains(&IssueKind::InvalidNumber {
        value: "east".to_string()
    }));
}

#[test]
fn dry_run_writes_nothing_but_reports_digests() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("cldf");
    let dry = write_dataset(&sample_dataset(), &out, WriteOptions { dry_run: true }).unwrap();
    assert!(dry.dry_run);
    assert!(!out.exists());

    let real = write_dataset(&sample_dataset(), &out, WriteOptions::default()).unwrap();
    let dry_digests: Vec<&str> = dry.files.iter().map(|f| f.sha256.as_str()).collect();
    let real_digests: Vec<&str> = real.files.iter().map(|f| f.sha256.as_str()).collect();
    assert_eq!(dry_digests, real_digests);
    assert_eq!(real_digests[0].len(), 64);
}
