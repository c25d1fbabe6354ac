//! HTTP implementation of the quiz service contract.
//!
//! Routes follow the generation service's REST surface: reads are GETs,
//! every mutation is a POST returning no body. Failures map onto
//! `ServiceError` so the engine can classify them without string matching.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use quizgate_core::error::ServiceError;
use quizgate_core::model::{Generation, GenerationSummary};
use quizgate_core::service::{
    AddQuestions, ExportRequest, FeedbackUpdate, NewQuestion, QuizService,
};

use crate::config::ClientConfig;

/// `QuizService` over the generation service's HTTP API.
pub struct HttpQuizService {
    base_url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpQuizService {
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
            client,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.api_url, config.timeout_secs)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn send_error(&self, e: reqwest::Error) -> ServiceError {
        if e.is_timeout() {
            ServiceError::Timeout(self.timeout_secs)
        } else {
            ServiceError::Network(e.to_string())
        }
    }

    /// Map an error status onto the service taxonomy. `generation_id` is
    /// the id named in the request path, used for the 404 case.
    async fn check(
        response: reqwest::Response,
        generation_id: Option<u64>,
    ) -> Result<reqwest::Response, ServiceError> {
        let status = response.status().as_u16();
        if status < 400 {
            return Ok(response);
        }
        if status == 404 {
            if let Some(id) = generation_id {
                return Err(ServiceError::GenerationNotFound(id));
            }
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|e| e.detail)
            .unwrap_or(body);
        if status == 400 || status == 422 {
            return Err(ServiceError::Rejected { status, message });
        }
        Err(ServiceError::Api { status, message })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        generation_id: Option<u64>,
    ) -> Result<T, ServiceError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| self.send_error(e))?;
        let response = Self::check(response, generation_id).await?;
        response.json().await.map_err(|e| ServiceError::Api {
            status: 0,
            message: format!("failed to parse response: {e}"),
        })
    }

    async fn post<B: Serialize>(
        &self,
        path: &str,
        generation_id: u64,
        body: Option<&B>,
    ) -> Result<(), ServiceError> {
        let mut request = self.client.post(self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(|e| self.send_error(e))?;
        Self::check(response, Some(generation_id)).await?;
        Ok(())
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    detail: String,
}

#[async_trait]
impl QuizService for HttpQuizService {
    #[instrument(skip(self))]
    async fn fetch(&self, generation_id: u64) -> Result<Generation, ServiceError> {
        self.get_json(&format!("generated/{generation_id}"), Some(generation_id))
            .await
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<GenerationSummary>, ServiceError> {
        self.get_json("generated", None).await
    }

    #[instrument(skip(self, request))]
    async fn create_question(
        &self,
        generation_id: u64,
        request: &NewQuestion,
    ) -> Result<(), ServiceError> {
        self.post(&format!("generated/{generation_id}/new"), generation_id, Some(request))
            .await
    }

    #[instrument(skip(self, request), fields(count = request.count))]
    async fn add_questions(
        &self,
        generation_id: u64,
        request: &AddQuestions,
    ) -> Result<(), ServiceError> {
        self.post(&format!("generated/{generation_id}/more"), generation_id, Some(request))
            .await
    }

    #[instrument(skip(self))]
    async fn delete_generation(&self, generation_id: u64) -> Result<(), ServiceError> {
        self.post::<()>(&format!("generated/{generation_id}/delete"), generation_id, None)
            .await
    }

    #[instrument(skip(self, request))]
    async fn export_to_form(
        &self,
        generation_id: u64,
        request: &ExportRequest,
    ) -> Result<(), ServiceError> {
        self.post(
            &format!("generated/{generation_id}/google_form"),
            generation_id,
            Some(request),
        )
        .await
    }

    #[instrument(skip(self, request), fields(answer_id = request.answer_id))]
    async fn set_feedback(
        &self,
        generation_id: u64,
        request: &FeedbackUpdate,
    ) -> Result<(), ServiceError> {
        self.post(
            &format!("generated/{generation_id}/feedback"),
            generation_id,
            Some(request),
        )
        .await
    }
}
