use criterion::{black_box, criterion_group, criterion_main, Criterion};

use assessor_core::grading::{build_reviews, compare_answer, grade_evaluation};
use assessor_core::model::{
    AnswerMap, AnswerOption, AnswerValue, Evaluation, EvaluationStatus, EvaluationType, Question,
    QuestionType,
};

fn make_questions(count: u32) -> Vec<Question> {
    (1..=count)
        .map(|id| Question {
            id,
            kind: match id % 3 {
                0 => QuestionType::ShortAnswer,
                1 => QuestionType::Mcq,
                _ => QuestionType::TrueFalse,
            },
            prompt: format!("question {id}"),
            points: 10,
            options: vec![
                AnswerOption {
                    id: "a".into(),
                    text: "first".into(),
                },
                AnswerOption {
                    id: "b".into(),
                    text: "second".into(),
                },
            ],
            correct_answer: Some(match id % 3 {
                0 => AnswerValue::Text("labels".into()),
                1 => AnswerValue::Text("b".into()),
                _ => AnswerValue::Bool(true),
            }),
        })
        .collect()
}

fn make_answers(questions: &[Question]) -> AnswerMap {
    questions
        .iter()
        .map(|q| {
            let answer = match q.kind {
                QuestionType::Mcq => AnswerValue::Text("b".into()),
                QuestionType::TrueFalse => AnswerValue::Bool(true),
                QuestionType::ShortAnswer => AnswerValue::Text("  Good LABELS and hints ".into()),
            };
            (q.id, answer)
        })
        .collect()
}

fn make_evaluation() -> Evaluation {
    Evaluation {
        id: 1,
        title: "bench".into(),
        description: String::new(),
        course: String::new(),
        kind: EvaluationType::Quiz,
        status: EvaluationStatus::NotStarted,
        duration_minutes: 20,
        passing_score: 70,
        score: None,
        question_count: 0,
    }
}

fn bench_compare_answer(c: &mut Criterion) {
    let user = AnswerValue::Text("  Good LABELS and hints ".into());
    let correct = AnswerValue::Text("labels".into());

    c.bench_function("compare_answer/short_answer", |b| {
        b.iter(|| {
            compare_answer(
                black_box(Some(&user)),
                black_box(&correct),
                QuestionType::ShortAnswer,
            )
        })
    });
}

fn bench_grade_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("grade_evaluation");
    let evaluation = make_evaluation();

    for count in [10u32, 100, 1000] {
        let questions = make_questions(count);
        let answers = make_answers(&questions);

        group.bench_function(format!("questions={count}"), |b| {
            b.iter(|| grade_evaluation(black_box(&evaluation), &questions, &answers))
        });
    }
    group.finish();
}

fn bench_build_reviews(c: &mut Criterion) {
    let questions = make_questions(100);
    let answers = make_answers(&questions);

    c.bench_function("build_reviews/questions=100", |b| {
        b.iter(|| build_reviews(black_box(&questions), black_box(&answers)))
    });
}

criterion_group!(
    benches,
    bench_compare_answer,
    bench_grade_evaluation,
    bench_build_reviews
);
criterion_main!(benches);
