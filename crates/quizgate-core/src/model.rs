//! Quiz snapshot types.
//!
//! A `Generation` is one generated quiz: the root aggregate of questions
//! and answer choices. The remote service owns these; a snapshot is
//! immutable for the duration of one derivation cycle and is only ever
//! replaced wholesale by a refetch after a mutating operation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One generated quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generation {
    /// Stable identifier assigned by the remote service.
    pub id: u64,
    /// Display name, usually the uploaded source file.
    pub filename: String,
    /// Ordered questions; order determines the 1-based "Question N" label.
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// A question within a generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier, unique within the generation.
    pub id: u64,
    /// The question text.
    pub question: String,
    /// Ordered answer choices; order determines the display numbering.
    #[serde(default)]
    pub answers: Vec<AnswerChoice>,
}

/// A candidate answer awaiting a reviewer's verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerChoice {
    /// Stable identifier, unique within the question.
    pub id: u64,
    /// Back-reference to the containing question. Non-owning; must match
    /// the id of the question whose `answers` holds this choice.
    pub question_id: u64,
    /// The reviewer's verdict on this choice.
    #[serde(default)]
    pub user_feedback: Feedback,
}

/// Element of the all-generations listing. Question bodies are omitted;
/// fetch the generation itself for the full snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub id: u64,
    pub filename: String,
}

/// The scoring label a reviewer attaches to an answer choice.
///
/// Every transition between labels is permitted: scoring, re-scoring, and
/// un-scoring back to `Unselected`. The core only reads this field; it is
/// mutated remotely and observed via snapshot refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    #[default]
    Unselected,
    Correct,
    Incorrect,
}

impl Feedback {
    /// Whether a reviewer has made a decision on this choice.
    pub fn is_scored(self) -> bool {
        !matches!(self, Feedback::Unselected)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Unselected => write!(f, "unselected"),
            Feedback::Correct => write!(f, "correct"),
            Feedback::Incorrect => write!(f, "incorrect"),
        }
    }
}

impl FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unselected" => Ok(Feedback::Unselected),
            "correct" => Ok(Feedback::Correct),
            "incorrect" => Ok(Feedback::Incorrect),
            other => Err(format!("unknown feedback label: {other}")),
        }
    }
}
