//! The completeness gate.
//!
//! Export is permitted only when every answer choice across every question
//! carries a non-`unselected` feedback label. These are pure derivations
//! over one snapshot; nothing here mutates or performs I/O.

use std::fmt;

use serde::Serialize;

use crate::error::ConsistencyError;
use crate::model::{AnswerChoice, Feedback, Generation};
use crate::position::PositionMap;

/// Flatten every question's answers in question order, then answer order.
/// This flattening is the basis for all scoring-completeness checks.
pub fn collect_answers(generation: &Generation) -> Vec<&AnswerChoice> {
    generation
        .questions
        .iter()
        .flat_map(|q| q.answers.iter())
        .collect()
}

/// The flattened answer sequence filtered to choices still awaiting a
/// verdict, in display order.
pub fn find_unscored(generation: &Generation) -> Vec<&AnswerChoice> {
    collect_answers(generation)
        .into_iter()
        .filter(|a| a.user_feedback == Feedback::Unselected)
        .collect()
}

/// True iff no answer choice is unscored. A generation with zero questions
/// (or questions with zero answers) is trivially ready; that is not an
/// error state.
pub fn is_export_ready(generation: &Generation) -> bool {
    find_unscored(generation).is_empty()
}

/// One unscored answer choice with its resolved 1-based display position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnscoredAnswer {
    /// 1-based "Question N" label.
    pub question_number: usize,
    /// 1-based position within the question's answers.
    pub answer_number: usize,
    pub question_id: u64,
    pub answer_id: u64,
}

impl fmt::Display for UnscoredAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Question {}, answer choice {}",
            self.question_number, self.answer_number
        )
    }
}

/// Annotate every unscored choice with its display position.
///
/// An id that fails to resolve means the snapshot violates its own
/// invariants; the whole report is refused rather than rendering a bogus
/// position for the broken entry.
pub fn unscored_report(generation: &Generation) -> Result<Vec<UnscoredAnswer>, ConsistencyError> {
    let positions = PositionMap::build(generation);

    find_unscored(generation)
        .into_iter()
        .map(|answer| {
            let (qi, ai) = positions
                .resolve_answer(answer.id, answer.question_id)
                .inspect_err(|err| {
                    tracing::warn!(%err, "refusing to render position for inconsistent snapshot");
                })?;
            Ok(UnscoredAnswer {
                question_number: qi + 1,
                answer_number: ai + 1,
                question_id: answer.question_id,
                answer_id: answer.id,
            })
        })
        .collect()
}
