//! The `quizgate export` command.

use anyhow::Result;

use quizgate_core::engine::ReviewEngine;
use quizgate_core::error::WorkflowError;
use quizgate_core::service::ExportRequest;
use quizgate_core::validate::validate_export;

pub async fn execute(engine: &ReviewEngine, generation_id: u64, email: &str) -> Result<()> {
    // Reject a malformed destination before touching the service at all.
    validate_export(&ExportRequest {
        email: email.trim().to_string(),
    })?;

    // Always gate against a fresh snapshot, not whatever the user last saw.
    let generation = engine.fetch(generation_id).await?;

    match engine.export_to_form(&generation, email).await {
        Ok(()) => {
            println!("Export submitted. The form link will be sent to {email}.");
            Ok(())
        }
        Err(WorkflowError::NotExportReady { unscored }) => {
            eprintln!("All answer choices must be scored before export. Still unscored:");
            for entry in &unscored {
                eprintln!("  {entry}");
            }
            anyhow::bail!(
                "export blocked: {} answer choice(s) still unscored",
                unscored.len()
            )
        }
        Err(e) => Err(e.into()),
    }
}
