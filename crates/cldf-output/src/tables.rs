use cldf_model::{CldfDataset, Record};

use crate::schema::{
    CODES, CONSTRUCTIONS, CVALUES, DatasetSchema, LANGUAGES, PARAMETERS, TableSchema, VALUES,
};

/// The records of one table paired with its schema.
pub struct TableRows<'a> {
    pub schema: &'a TableSchema,
    pub records: Vec<&'a dyn Record>,
}

fn records<T: Record>(items: &[T]) -> Vec<&dyn Record> {
    items.iter().map(|item| item as &dyn Record).collect()
}

/// Pair every declared table with its collection from `dataset`.
pub fn dataset_tables<'a>(
    schema: &'a DatasetSchema,
    dataset: &'a CldfDataset,
) -> Vec<TableRows<'a>> {
    schema
        .tables
        .iter()
        .map(|table| {
            let records = match table.url {
                LANGUAGES => records(&dataset.languages),
                PARAMETERS => records(&dataset.parameters),
                CODES => dataset
                    .codes
                    .values()
                    .map(|code| code as &dyn Record)
                    .collect(),
                VALUES => records(&dataset.values),
                CONSTRUCTIONS => records(&dataset.constructions),
                CVALUES => records(&dataset.cvalues),
                _ => Vec::new(),
            };
            TableRows {
                schema: table,
                records,
            }
        })
        .collect()
}
