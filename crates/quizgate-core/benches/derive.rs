use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizgate_core::model::{AnswerChoice, Feedback, Generation, Question};
use quizgate_core::position::PositionMap;
use quizgate_core::scoring::{is_export_ready, unscored_report};

fn make_generation(questions: u64, answers_per_question: u64, scored: bool) -> Generation {
    let feedback = if scored {
        Feedback::Correct
    } else {
        Feedback::Unselected
    };
    Generation {
        id: 1,
        filename: "bench.pdf".into(),
        questions: (0..questions)
            .map(|qi| Question {
                id: qi,
                question: format!("question {qi}"),
                answers: (0..answers_per_question)
                    .map(|ai| AnswerChoice {
                        id: qi * answers_per_question + ai,
                        question_id: qi,
                        user_feedback: feedback,
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn bench_export_ready(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_export_ready");

    for (questions, answers) in [(10, 4), (100, 4), (1000, 4)] {
        let scored = make_generation(questions, answers, true);
        group.bench_function(format!("scored_{questions}x{answers}"), |b| {
            b.iter(|| is_export_ready(black_box(&scored)))
        });
    }

    group.finish();
}

fn bench_unscored_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("unscored_report");

    for (questions, answers) in [(10, 4), (100, 4)] {
        let unscored = make_generation(questions, answers, false);
        group.bench_function(format!("unscored_{questions}x{answers}"), |b| {
            b.iter(|| unscored_report(black_box(&unscored)).unwrap())
        });
    }

    group.finish();
}

fn bench_position_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("position_map");

    let generation = make_generation(100, 4, true);
    group.bench_function("build_100x4", |b| {
        b.iter(|| PositionMap::build(black_box(&generation)))
    });

    let positions = PositionMap::build(&generation);
    group.bench_function("resolve_100x4", |b| {
        b.iter(|| positions.resolve_answer(black_box(399), black_box(99)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_export_ready,
    bench_unscored_report,
    bench_position_map
);
criterion_main!(benches);
