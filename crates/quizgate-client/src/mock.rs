//! In-memory quiz service for testing.
//!
//! Behaves like the remote service from the engine's point of view:
//! mutations change held state, reads serve fresh snapshots, and a queued
//! failure lets tests assert that a failed submission leaves caller state
//! untouched.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use quizgate_core::error::ServiceError;
use quizgate_core::model::{AnswerChoice, Feedback, Generation, GenerationSummary, Question};
use quizgate_core::service::{
    AddQuestions, ExportRequest, FeedbackUpdate, NewQuestion, QuizService,
};

/// Answer choices attached to each mock-generated question.
const ANSWERS_PER_GENERATED_QUESTION: u64 = 4;

/// A scriptable in-memory `QuizService`.
pub struct MockQuizService {
    generations: Mutex<BTreeMap<u64, Generation>>,
    next_id: AtomicU64,
    call_count: AtomicU32,
    fail_next: Mutex<Option<ServiceError>>,
    last_export: Mutex<Option<(u64, String)>>,
}

impl MockQuizService {
    pub fn new() -> Self {
        Self {
            generations: Mutex::new(BTreeMap::new()),
            next_id: AtomicU64::new(1000),
            call_count: AtomicU32::new(0),
            fail_next: Mutex::new(None),
            last_export: Mutex::new(None),
        }
    }

    /// Seed the service with a generation.
    pub fn with_generation(generation: Generation) -> Self {
        let service = Self::new();
        service
            .generations
            .lock()
            .unwrap()
            .insert(generation.id, generation);
        service
    }

    /// Make the next service call fail with `error`.
    pub fn queue_failure(&self, error: ServiceError) {
        *self.fail_next.lock().unwrap() = Some(error);
    }

    /// Total number of service calls made.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// The (generation id, email) of the last successful export.
    pub fn last_export(&self) -> Option<(u64, String)> {
        self.last_export.lock().unwrap().clone()
    }

    fn begin(&self) -> Result<(), ServiceError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        match self.fail_next.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fresh_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    fn generated_question(&self, index: u64) -> Question {
        let question_id = self.fresh_id();
        Question {
            id: question_id,
            question: format!("generated question {index}"),
            answers: (0..ANSWERS_PER_GENERATED_QUESTION)
                .map(|_| AnswerChoice {
                    id: self.fresh_id(),
                    question_id,
                    user_feedback: Feedback::Unselected,
                })
                .collect(),
        }
    }
}

impl Default for MockQuizService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuizService for MockQuizService {
    async fn fetch(&self, generation_id: u64) -> Result<Generation, ServiceError> {
        self.begin()?;
        self.generations
            .lock()
            .unwrap()
            .get(&generation_id)
            .cloned()
            .ok_or(ServiceError::GenerationNotFound(generation_id))
    }

    async fn list(&self) -> Result<Vec<GenerationSummary>, ServiceError> {
        self.begin()?;
        Ok(self
            .generations
            .lock()
            .unwrap()
            .values()
            .map(|g| GenerationSummary {
                id: g.id,
                filename: g.filename.clone(),
            })
            .collect())
    }

    async fn create_question(
        &self,
        generation_id: u64,
        request: &NewQuestion,
    ) -> Result<(), ServiceError> {
        self.begin()?;
        let mut generations = self.generations.lock().unwrap();
        let generation = generations
            .get_mut(&generation_id)
            .ok_or(ServiceError::GenerationNotFound(generation_id))?;
        let id = self.fresh_id();
        generation.questions.push(Question {
            id,
            question: request.question.clone(),
            answers: vec![],
        });
        Ok(())
    }

    async fn add_questions(
        &self,
        generation_id: u64,
        request: &AddQuestions,
    ) -> Result<(), ServiceError> {
        self.begin()?;
        let mut generations = self.generations.lock().unwrap();
        let generation = generations
            .get_mut(&generation_id)
            .ok_or(ServiceError::GenerationNotFound(generation_id))?;
        for index in 0..u64::from(request.count) {
            let question = self.generated_question(index);
            generation.questions.push(question);
        }
        Ok(())
    }

    async fn delete_generation(&self, generation_id: u64) -> Result<(), ServiceError> {
        self.begin()?;
        self.generations
            .lock()
            .unwrap()
            .remove(&generation_id)
            .map(|_| ())
            .ok_or(ServiceError::GenerationNotFound(generation_id))
    }

    async fn export_to_form(
        &self,
        generation_id: u64,
        request: &ExportRequest,
    ) -> Result<(), ServiceError> {
        self.begin()?;
        if !self.generations.lock().unwrap().contains_key(&generation_id) {
            return Err(ServiceError::GenerationNotFound(generation_id));
        }
        *self.last_export.lock().unwrap() = Some((generation_id, request.email.clone()));
        Ok(())
    }

    async fn set_feedback(
        &self,
        generation_id: u64,
        request: &FeedbackUpdate,
    ) -> Result<(), ServiceError> {
        self.begin()?;
        let mut generations = self.generations.lock().unwrap();
        let generation = generations
            .get_mut(&generation_id)
            .ok_or(ServiceError::GenerationNotFound(generation_id))?;
        let answer = generation
            .questions
            .iter_mut()
            .filter(|q| q.id == request.question_id)
            .flat_map(|q| q.answers.iter_mut())
            .find(|a| a.id == request.answer_id);
        match answer {
            Some(answer) => {
                answer.user_feedback = request.user_feedback;
                Ok(())
            }
            None => Err(ServiceError::Rejected {
                status: 422,
                message: format!(
                    "answer {} not found in question {}",
                    request.answer_id, request.question_id
                ),
            }),
        }
    }
}
