//! quizgate-client — access to the quiz generation service.
//!
//! Implements the `QuizService` trait over the service's REST routes,
//! loads connection configuration, and ships an in-memory mock service
//! for exercising the review workflow without a server.

pub mod config;
pub mod http;
pub mod mock;

pub use config::{load_config, load_config_from, ClientConfig};
pub use http::HttpQuizService;
pub use mock::MockQuizService;
