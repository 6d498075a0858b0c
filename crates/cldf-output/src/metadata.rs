//! CSVW-style JSON descriptor of the written tables.

use serde::Serialize;

use crate::schema::{Datatype, DatasetSchema, TableSchema};

pub const METADATA_FILE: &str = "StructureDataset-metadata.json";
pub const SOURCES_FILE: &str = "sources.bib";

const CSVW_CONTEXT: &str = "http://www.w3.org/ns/csvw";
const ID_FORMAT: &str = "[a-zA-Z0-9_\\-]+";

#[derive(Debug, Serialize)]
pub struct Descriptor {
    #[serde(rename = "@context")]
    context: (&'static str, Language),
    #[serde(rename = "dc:conformsTo")]
    conforms_to: String,
    #[serde(rename = "dc:source")]
    source: &'static str,
    tables: Vec<TableDescriptor>,
}

#[derive(Debug, Serialize)]
struct Language {
    #[serde(rename = "@language")]
    language: &'static str,
}

#[derive(Debug, Serialize)]
struct TableDescriptor {
    url: &'static str,
    #[serde(rename = "dc:conformsTo", skip_serializing_if = "Option::is_none")]
    conforms_to: Option<String>,
    #[serde(rename = "tableSchema")]
    table_schema: SchemaDescriptor,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SchemaDescriptor {
    columns: Vec<ColumnDescriptor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    foreign_keys: Vec<ForeignKeyDescriptor>,
    primary_key: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ColumnDescriptor {
    name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    property_url: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    required: bool,
    datatype: DatatypeDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    separator: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum DatatypeDescriptor {
    Named(&'static str),
    Constrained {
        base: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        format: Option<&'static str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        minimum: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        maximum: Option<f64>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ForeignKeyDescriptor {
    column_reference: Vec<&'static str>,
    reference: ReferenceDescriptor,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReferenceDescriptor {
    resource: &'static str,
    column_reference: Vec<&'static str>,
}

pub fn descriptor(schema: &DatasetSchema) -> Descriptor {
    Descriptor {
        context: (CSVW_CONTEXT, Language { language: "en" }),
        conforms_to: schema.conforms_to(),
        source: SOURCES_FILE,
        tables: schema.tables.iter().map(table_descriptor).collect(),
    }
}

fn table_descriptor(table: &TableSchema) -> TableDescriptor {
    let id_column = table.id_column().map(|column| column.name);
    let columns = table
        .columns
        .iter()
        .map(|column| {
            let is_id = Some(column.name) == id_column;
            let datatype = match (column.datatype, is_id) {
                (_, true) => DatatypeDescriptor::Constrained {
                    base: "string",
                    format: Some(ID_FORMAT),
                    minimum: None,
                    maximum: None,
                },
                (Datatype::Decimal { minimum, maximum }, false) => {
                    DatatypeDescriptor::Constrained {
                        base: "decimal",
                        format: None,
                        minimum: Some(minimum),
                        maximum: Some(maximum),
                    }
                }
                (Datatype::String, false) => DatatypeDescriptor::Named("string"),
            };
            ColumnDescriptor {
                name: column.name,
                property_url: column.property.map(|property| property.url()),
                required: is_id,
                datatype,
                separator: column.separator,
            }
        })
        .collect();
    let foreign_keys = table
        .foreign_keys
        .iter()
        .map(|fk| ForeignKeyDescriptor {
            column_reference: vec![fk.column],
            reference: ReferenceDescriptor {
                resource: fk.reference_table,
                column_reference: vec![fk.reference_column],
            },
        })
        .collect();
    TableDescriptor {
        url: table.url,
        conforms_to: table.conforms_to(),
        table_schema: SchemaDescriptor {
            columns,
            foreign_keys,
            primary_key: id_column.into_iter().collect(),
        },
    }
}

/// Pretty-printed descriptor with a trailing newline.
pub fn render_descriptor(schema: &DatasetSchema) -> serde_json::Result<String> {
    let mut text = serde_json::to_string_pretty(&descriptor(schema))?;
    text.push('\n');
    Ok(text)
}
