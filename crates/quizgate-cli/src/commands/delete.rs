//! The `quizgate delete` command.

use anyhow::Result;

use quizgate_core::engine::ReviewEngine;

pub async fn execute(engine: &ReviewEngine, generation_id: u64, yes: bool) -> Result<()> {
    anyhow::ensure!(
        yes,
        "refusing to delete generation {generation_id}; pass --yes to confirm"
    );

    let listing = engine.delete_generation(generation_id).await?;
    println!(
        "Generation {generation_id} deleted. {} generation(s) remain.",
        listing.len()
    );

    Ok(())
}
