use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mf_core::Role;
use mf_session::{render_transcript, ConversationStore};

fn bench_store_create(c: &mut Criterion) {
    c.bench_function("store_create_1000_cap_100", |b| {
        b.iter(|| {
            let store = ConversationStore::new(100);
            for i in 0..1000 {
                black_box(store.create(Some(format!("user_{i}")), None));
            }
        })
    });
}

fn bench_add_messages(c: &mut Criterion) {
    c.bench_function("store_add_100_exchanges", |b| {
        b.iter(|| {
            let store = ConversationStore::new(10);
            let id = store.create(None, None);
            for i in 0..100 {
                store.add_message(&id, Role::User, format!("Question {i}: which courses should I take to learn statistics?"), None);
                store.add_message(&id, Role::Assistant, format!("Answer {i}: start with Khan Academy, then move to a Coursera specialization."), None);
            }
            black_box(store.history(&id, 20));
        })
    });
}

fn bench_transcript(c: &mut Criterion) {
    let store = ConversationStore::new(10);
    for i in 0..50 {
        store.add_message("bench", Role::User, format!("User message {i}"), None);
        store.add_message("bench", Role::Assistant, format!("Assistant response {i}"), None);
    }

    c.bench_function("history_for_llm_and_render_1000", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                let turns = store.history_for_llm("bench", 3);
                black_box(render_transcript(&turns));
            }
        })
    });
}

criterion_group!(benches, bench_store_create, bench_add_messages, bench_transcript);
criterion_main!(benches);
