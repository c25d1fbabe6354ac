//! The `quizgate add-question` command.

use anyhow::Result;

use quizgate_core::engine::ReviewEngine;

pub async fn execute(engine: &ReviewEngine, generation_id: u64, question: &str) -> Result<()> {
    let generation = engine.create_question(generation_id, question).await?;

    println!(
        "Question created. {} now has {} question(s).",
        generation.filename,
        generation.questions.len()
    );

    Ok(())
}
