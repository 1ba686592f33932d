use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use quizdrill_core::answers_match;
use quizdrill_core::model::QuizItem;
use quizdrill_core::session::PlaySession;

fn make_items(n: u64) -> Vec<QuizItem> {
    (0..n)
        .map(|i| QuizItem::new(i, format!("question {i}"), format!("answer {i}")))
        .collect()
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw");

    for n in [10u64, 1_000, 10_000] {
        let items = make_items(n);
        group.bench_function(format!("correct playthrough n={n}"), |b| {
            b.iter(|| {
                let mut session = PlaySession::new(StdRng::seed_from_u64(7));
                session.load(items.clone());
                while let Some(quiz) = session.draw() {
                    let answer = quiz.answer.clone();
                    session.answer(black_box(&answer));
                }
                session.score()
            })
        });
    }

    group.finish();
}

fn bench_matching(c: &mut Criterion) {
    c.bench_function("answers_match", |b| {
        b.iter(|| answers_match(black_box("  Capital Of FRANCE  "), black_box("capital of france")))
    });
}

criterion_group!(benches, bench_draw, bench_matching);
criterion_main!(benches);
