//! The `list` command: tabulate the available demonstrations.

use anyhow::Result;
use serde::Serialize;

use crate::OutputFormat;
use crate::demos::{self, Category};
use crate::output;

/// One row of `list` output.
#[derive(Serialize)]
struct DemoRow {
    name: &'static str,
    category: Category,
    complexity: &'static str,
}

/// Runs the list command.
pub fn run(format: OutputFormat) -> Result<()> {
    let rows: Vec<DemoRow> = demos::registry()
        .values()
        .map(|demo| DemoRow {
            name: demo.name(),
            category: demo.category(),
            complexity: demo.complexity(),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Table => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["Name", "Category", "Complexity"]);
            for row in &rows {
                table.add_row(vec![
                    row.name.to_string(),
                    row.category.to_string(),
                    row.complexity.to_string(),
                ]);
            }
            println!("{table}");
        }
    }
    Ok(())
}
