//! The remote quiz service contract.
//!
//! The service is the sole source of truth for quiz state. Mutating calls
//! return no data; on success the caller must discard any held snapshot and
//! refetch. Implemented over HTTP by `quizgate-client`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::model::{Feedback, Generation, GenerationSummary};

/// Async interface to the generation/storage service.
#[async_trait]
pub trait QuizService: Send + Sync {
    /// Read the current snapshot of one generation.
    async fn fetch(&self, generation_id: u64) -> Result<Generation, ServiceError>;

    /// List every stored generation.
    async fn list(&self) -> Result<Vec<GenerationSummary>, ServiceError>;

    /// Append a custom question to the generation.
    async fn create_question(
        &self,
        generation_id: u64,
        request: &NewQuestion,
    ) -> Result<(), ServiceError>;

    /// Have the service generate and append `count` more questions.
    async fn add_questions(
        &self,
        generation_id: u64,
        request: &AddQuestions,
    ) -> Result<(), ServiceError>;

    /// Remove the generation entirely.
    async fn delete_generation(&self, generation_id: u64) -> Result<(), ServiceError>;

    /// Create an external form artifact from the current state and send it
    /// to `email`. The generation itself is unaffected.
    async fn export_to_form(
        &self,
        generation_id: u64,
        request: &ExportRequest,
    ) -> Result<(), ServiceError>;

    /// Update one answer choice's feedback label, addressed by id.
    async fn set_feedback(
        &self,
        generation_id: u64,
        request: &FeedbackUpdate,
    ) -> Result<(), ServiceError>;
}

/// Body of the create-custom-question operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
}

/// Body of the generate-more-questions operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddQuestions {
    pub count: u32,
}

/// Body of the export operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    pub email: String,
}

/// Body of the feedback update issued by the scoring surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackUpdate {
    pub question_id: u64,
    pub answer_id: u64,
    pub user_feedback: Feedback,
}
