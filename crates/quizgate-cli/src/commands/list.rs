//! The `quizgate list` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizgate_core::engine::ReviewEngine;

pub async fn execute(engine: &ReviewEngine) -> Result<()> {
    let listing = engine.list().await?;

    if listing.is_empty() {
        println!("No generations stored.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Id", "Filename"]);
    for summary in &listing {
        table.add_row(vec![Cell::new(summary.id), Cell::new(&summary.filename)]);
    }
    println!("{table}");
    println!("{} generation(s).", listing.len());

    Ok(())
}
