//! The `quizgate generate` command.

use anyhow::Result;

use quizgate_core::engine::ReviewEngine;
use quizgate_core::scoring::find_unscored;

pub async fn execute(engine: &ReviewEngine, generation_id: u64, count: u32) -> Result<()> {
    let generation = engine.add_questions(generation_id, count).await?;

    println!(
        "Generated {count} question(s). {} now has {} question(s), {} answer choice(s) awaiting a score.",
        generation.filename,
        generation.questions.len(),
        find_unscored(&generation).len()
    );

    Ok(())
}
