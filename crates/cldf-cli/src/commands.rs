use anyhow::Result;
use cldf_cli::pipeline::run_make;
use cldf_ingest::DatasetLayout;
use cldf_output::{WriteOptions, WriteReport, dataset_schema};
use comfy_table::{Cell, Table};

use crate::cli::MakeArgs;
use crate::summary::{apply_table_style, header_cell};

pub fn run_tables() -> Result<()> {
    let schema = dataset_schema();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Component"),
        header_cell("Columns"),
        header_cell("References"),
    ]);
    apply_table_style(&mut table);
    for declared in &schema.tables {
        let columns: Vec<String> = declared
            .columns
            .iter()
            .map(|column| match column.separator {
                Some(separator) => format!("{} ({separator})", column.name),
                None => column.name.to_string(),
            })
            .collect();
        let references: Vec<String> = declared
            .foreign_keys
            .iter()
            .map(|fk| format!("{} -> {}", fk.column, fk.reference_table))
            .collect();
        table.add_row(vec![
            Cell::new(declared.url),
            Cell::new(declared.component.unwrap_or("-")),
            Cell::new(columns.join(", ")),
            Cell::new(references.join("\n")),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_make_command(args: &MakeArgs) -> Result<WriteReport> {
    let mut layout = DatasetLayout::new(&args.dataset_dir);
    if let Some(output_dir) = &args.output_dir {
        layout = layout.with_output_dir(output_dir);
    }
    let options = WriteOptions {
        dry_run: args.dry_run,
    };
    run_make(&layout, options)
}
