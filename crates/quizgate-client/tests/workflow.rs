//! End-to-end review workflow tests: the engine driving the mock service
//! through the mutate-then-refetch protocol.

use std::sync::Arc;

use quizgate_client::MockQuizService;
use quizgate_core::engine::ReviewEngine;
use quizgate_core::error::{ServiceError, WorkflowError};
use quizgate_core::model::{AnswerChoice, Feedback, Generation, Question};
use quizgate_core::scoring::{find_unscored, is_export_ready};

fn seed_generation(feedback: Feedback) -> Generation {
    Generation {
        id: 1,
        filename: "lecture-3.pdf".into(),
        questions: vec![
            Question {
                id: 10,
                question: "Which keyword declares a constant?".into(),
                answers: vec![
                    AnswerChoice {
                        id: 100,
                        question_id: 10,
                        user_feedback: feedback,
                    },
                    AnswerChoice {
                        id: 101,
                        question_id: 10,
                        user_feedback: feedback,
                    },
                ],
            },
            Question {
                id: 20,
                question: "Which method clones a value?".into(),
                answers: vec![AnswerChoice {
                    id: 200,
                    question_id: 20,
                    user_feedback: feedback,
                }],
            },
        ],
    }
}

fn setup(feedback: Feedback) -> (Arc<MockQuizService>, ReviewEngine) {
    let service = Arc::new(MockQuizService::with_generation(seed_generation(feedback)));
    let engine = ReviewEngine::new(service.clone());
    (service, engine)
}

#[tokio::test]
async fn adding_questions_appends_after_existing() {
    let (_service, engine) = setup(Feedback::Unselected);

    let before = engine.fetch(1).await.unwrap();
    let after = engine.add_questions(1, 5).await.unwrap();

    assert_eq!(after.questions.len(), before.questions.len() + 5);
    // existing order preserved, new ones appended
    let kept: Vec<u64> = after.questions[..2].iter().map(|q| q.id).collect();
    assert_eq!(kept, vec![10, 20]);
    assert!(!is_export_ready(&after), "new questions arrive unscored");
}

#[tokio::test]
async fn deleted_generation_disappears() {
    let (_service, engine) = setup(Feedback::Correct);

    let listing = engine.delete_generation(1).await.unwrap();
    assert!(listing.iter().all(|summary| summary.id != 1));

    let err = engine.fetch(1).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn failed_mutation_leaves_state_unchanged() {
    let (service, engine) = setup(Feedback::Unselected);

    service.queue_failure(ServiceError::Timeout(30));
    let err = engine.add_questions(1, 5).await.unwrap_err();
    assert!(matches!(
        err,
        WorkflowError::Service(ServiceError::Timeout(30))
    ));

    let snapshot = engine.fetch(1).await.unwrap();
    assert_eq!(snapshot.questions.len(), 2);
}

#[tokio::test]
async fn scoring_every_answer_opens_the_gate() {
    let (_service, engine) = setup(Feedback::Unselected);

    let mut snapshot = engine.fetch(1).await.unwrap();
    assert_eq!(find_unscored(&snapshot).len(), 3);

    let verdicts = [
        (10, 100, Feedback::Correct),
        (10, 101, Feedback::Incorrect),
        (20, 200, Feedback::Correct),
    ];
    for (question_id, answer_id, feedback) in verdicts {
        snapshot = engine
            .set_feedback(&snapshot, question_id, answer_id, feedback)
            .await
            .unwrap();
    }

    assert!(is_export_ready(&snapshot));
    engine
        .export_to_form(&snapshot, "teacher@example.com")
        .await
        .unwrap();
}

#[tokio::test]
async fn export_records_destination() {
    let (service, engine) = setup(Feedback::Correct);

    let snapshot = engine.fetch(1).await.unwrap();
    engine
        .export_to_form(&snapshot, "teacher@example.com")
        .await
        .unwrap();

    assert_eq!(
        service.last_export(),
        Some((1, "teacher@example.com".to_string()))
    );
    // export leaves the generation itself untouched
    let after = engine.fetch(1).await.unwrap();
    assert_eq!(after.questions.len(), snapshot.questions.len());
}

#[tokio::test]
async fn blocked_export_issues_no_request() {
    let (service, engine) = setup(Feedback::Unselected);

    let snapshot = engine.fetch(1).await.unwrap();
    let calls_before = service.call_count();

    let err = engine
        .export_to_form(&snapshot, "teacher@example.com")
        .await
        .unwrap_err();
    match err {
        WorkflowError::NotExportReady { unscored } => {
            let rendered: Vec<String> = unscored.iter().map(|u| u.to_string()).collect();
            assert_eq!(
                rendered,
                vec![
                    "Question 1, answer choice 1",
                    "Question 1, answer choice 2",
                    "Question 2, answer choice 1",
                ]
            );
        }
        other => panic!("expected NotExportReady, got {other:?}"),
    }
    assert_eq!(service.call_count(), calls_before);
    assert_eq!(service.last_export(), None);
}

#[tokio::test]
async fn custom_question_appears_in_fresh_snapshot() {
    let (_service, engine) = setup(Feedback::Correct);

    let after = engine
        .create_question(1, "What does the borrow checker enforce?")
        .await
        .unwrap();

    assert_eq!(after.questions.len(), 3);
    assert_eq!(
        after.questions[2].question,
        "What does the borrow checker enforce?"
    );
    // a custom question starts with no answers, so the gate stays open
    assert!(is_export_ready(&after));
}
