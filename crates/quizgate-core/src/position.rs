//! Id-to-position resolution for display diagnostics.
//!
//! Feedback is addressed by entity id, which stays stable across
//! reorderings, but diagnostics must read "Question 3, answer choice 2".
//! The map is built once per snapshot; a lookup miss is an explicit `None`
//! rather than a sentinel index, so a stale or corrupt snapshot can never
//! be rendered as a valid position.

use std::collections::HashMap;

use crate::error::ConsistencyError;
use crate::model::Generation;

/// Precomputed id → display-position lookups for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionMap {
    questions: HashMap<u64, usize>,
    answers: HashMap<u64, (usize, usize)>,
}

impl PositionMap {
    /// Build the map in one pass over the snapshot.
    ///
    /// Duplicate ids keep their first occurrence, matching the lookup
    /// semantics the feedback store relies on. A mismatched back-reference
    /// is logged here but still indexed under its containing question.
    pub fn build(generation: &Generation) -> Self {
        let mut questions = HashMap::new();
        let mut answers = HashMap::new();

        for (qi, question) in generation.questions.iter().enumerate() {
            questions.entry(question.id).or_insert(qi);
            for (ai, answer) in question.answers.iter().enumerate() {
                if answer.question_id != question.id {
                    tracing::warn!(
                        answer_id = answer.id,
                        expected = question.id,
                        actual = answer.question_id,
                        "answer choice back-reference does not match its containing question"
                    );
                }
                answers.entry(answer.id).or_insert((qi, ai));
            }
        }

        Self { questions, answers }
    }

    /// Zero-based index of the question within the generation.
    pub fn question_position(&self, question_id: u64) -> Option<usize> {
        self.questions.get(&question_id).copied()
    }

    /// Zero-based (question index, answer index) of the answer choice.
    pub fn answer_position(&self, answer_id: u64) -> Option<(usize, usize)> {
        self.answers.get(&answer_id).copied()
    }

    /// Resolve an answer choice through its question back-reference,
    /// verifying the snapshot invariants along the way.
    pub fn resolve_answer(
        &self,
        answer_id: u64,
        question_id: u64,
    ) -> Result<(usize, usize), ConsistencyError> {
        let qi = self
            .question_position(question_id)
            .ok_or(ConsistencyError::UnknownQuestion {
                answer_id,
                question_id,
            })?;
        let (found_qi, ai) = self
            .answer_position(answer_id)
            .ok_or(ConsistencyError::UnknownAnswer { answer_id })?;
        if found_qi != qi {
            return Err(ConsistencyError::NotInQuestion {
                answer_id,
                question_id,
            });
        }
        Ok((qi, ai))
    }
}
