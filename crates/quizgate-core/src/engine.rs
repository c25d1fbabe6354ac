//! The review workflow engine.
//!
//! Mediates every mutating operation against the remote service: validate
//! the input, check the gate, fire the request, then refetch the canonical
//! state the operation invalidated. The engine holds no quiz state of its
//! own — every derivation is a pure function of the caller's last-fetched
//! snapshot, and a failed request leaves that snapshot untouched.

use std::sync::Arc;

use crate::error::{ServiceError, WorkflowError};
use crate::model::{Feedback, Generation, GenerationSummary};
use crate::position::PositionMap;
use crate::scoring::{is_export_ready, unscored_report};
use crate::service::{AddQuestions, ExportRequest, FeedbackUpdate, NewQuestion, QuizService};
use crate::validate;

/// Coordinates the review-and-export workflow for generated quizzes.
pub struct ReviewEngine {
    service: Arc<dyn QuizService>,
}

impl ReviewEngine {
    pub fn new(service: Arc<dyn QuizService>) -> Self {
        Self { service }
    }

    /// Read the current snapshot of one generation.
    pub async fn fetch(&self, generation_id: u64) -> Result<Generation, ServiceError> {
        self.service.fetch(generation_id).await
    }

    /// List every stored generation.
    pub async fn list(&self) -> Result<Vec<GenerationSummary>, ServiceError> {
        self.service.list().await
    }

    /// Append a custom question, then return the refreshed snapshot.
    pub async fn create_question(
        &self,
        generation_id: u64,
        question_text: &str,
    ) -> Result<Generation, WorkflowError> {
        let request = NewQuestion {
            question: question_text.trim().to_string(),
        };
        validate::validate_new_question(&request)?;

        self.service.create_question(generation_id, &request).await?;
        tracing::info!(generation_id, "custom question created");
        Ok(self.service.fetch(generation_id).await?)
    }

    /// Request `count` more generated questions, then return the refreshed
    /// snapshot.
    pub async fn add_questions(
        &self,
        generation_id: u64,
        count: u32,
    ) -> Result<Generation, WorkflowError> {
        let request = AddQuestions { count };
        validate::validate_add_questions(&request)?;

        self.service.add_questions(generation_id, &request).await?;
        tracing::info!(generation_id, count, "generated additional questions");
        Ok(self.service.fetch(generation_id).await?)
    }

    /// Delete the generation, then return the refreshed all-generations
    /// list (the deleted id will be absent).
    pub async fn delete_generation(
        &self,
        generation_id: u64,
    ) -> Result<Vec<GenerationSummary>, WorkflowError> {
        self.service.delete_generation(generation_id).await?;
        tracing::info!(generation_id, "generation deleted");
        Ok(self.service.list().await?)
    }

    /// Export the quiz to the external form system.
    ///
    /// The gate is enforced here, client-side: if any answer choice on the
    /// caller's snapshot is unscored, no request is issued and the error
    /// carries the positional diagnostics. The generation itself is
    /// unaffected by a successful export, so nothing is refetched.
    pub async fn export_to_form(
        &self,
        snapshot: &Generation,
        email: &str,
    ) -> Result<(), WorkflowError> {
        let request = ExportRequest {
            email: email.trim().to_string(),
        };
        validate::validate_export(&request)?;

        if !is_export_ready(snapshot) {
            let unscored = unscored_report(snapshot)?;
            return Err(WorkflowError::NotExportReady { unscored });
        }

        self.service.export_to_form(snapshot.id, &request).await?;
        tracing::info!(generation_id = snapshot.id, "quiz exported to form");
        Ok(())
    }

    /// Update one answer choice's feedback label, then return the
    /// refreshed snapshot.
    ///
    /// The target must resolve against the caller's snapshot; submitting
    /// the label the snapshot already holds is a no-op that skips the
    /// request entirely.
    pub async fn set_feedback(
        &self,
        snapshot: &Generation,
        question_id: u64,
        answer_id: u64,
        feedback: Feedback,
    ) -> Result<Generation, WorkflowError> {
        let positions = PositionMap::build(snapshot);
        let (qi, ai) = positions.resolve_answer(answer_id, question_id)?;

        let current = snapshot.questions[qi].answers[ai].user_feedback;
        if current == feedback {
            tracing::debug!(answer_id, %feedback, "feedback unchanged, skipping request");
            return Ok(snapshot.clone());
        }

        let request = FeedbackUpdate {
            question_id,
            answer_id,
            user_feedback: feedback,
        };
        self.service.set_feedback(snapshot.id, &request).await?;
        tracing::info!(answer_id, from = %current, to = %feedback, "answer rescored");
        Ok(self.service.fetch(snapshot.id).await?)
    }
}
