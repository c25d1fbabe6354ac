//! The `quizgate score` command.

use anyhow::Result;

use quizgate_core::engine::ReviewEngine;
use quizgate_core::model::Feedback;
use quizgate_core::scoring::{find_unscored, is_export_ready};

pub async fn execute(
    engine: &ReviewEngine,
    generation_id: u64,
    question_id: u64,
    answer_id: u64,
    feedback: Feedback,
) -> Result<()> {
    let snapshot = engine.fetch(generation_id).await?;
    let generation = engine
        .set_feedback(&snapshot, question_id, answer_id, feedback)
        .await?;

    println!("Answer choice {answer_id} marked {feedback}.");
    if is_export_ready(&generation) {
        println!("Every answer choice is scored; the quiz is ready to export.");
    } else {
        println!(
            "{} answer choice(s) still awaiting a score.",
            find_unscored(&generation).len()
        );
    }

    Ok(())
}
