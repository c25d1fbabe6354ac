//! The `quizgate status` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizgate_core::engine::ReviewEngine;
use quizgate_core::scoring::unscored_report;

pub async fn execute(engine: &ReviewEngine, generation_id: u64) -> Result<()> {
    let generation = engine.fetch(generation_id).await?;

    println!("{} (generation {})", generation.filename, generation.id);

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Answers", "Scored"]);
    for (i, question) in generation.questions.iter().enumerate() {
        let scored = question
            .answers
            .iter()
            .filter(|a| a.user_feedback.is_scored())
            .count();
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&question.question),
            Cell::new(question.answers.len()),
            Cell::new(format!("{scored}/{}", question.answers.len())),
        ]);
    }
    println!("{table}");

    let unscored = unscored_report(&generation)?;
    if unscored.is_empty() {
        println!("Export ready: every answer choice is scored.");
    } else {
        println!(
            "Not export ready. Assign correct or incorrect to {} answer choice(s):",
            unscored.len()
        );
        for entry in &unscored {
            println!("  {entry}");
        }
    }

    Ok(())
}
