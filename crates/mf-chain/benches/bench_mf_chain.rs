use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mf_chain::{extract_json_object, research_hub_chain, ChainState, PromptTemplate};

fn generate_paper(size_kb: usize) -> String {
    let base = "We study transformer models for low-resource machine translation. Our method combines back-translation with curriculum learning and reports gains on four language pairs. ";
    let mut text = String::with_capacity(size_kb * 1024);
    while text.len() < size_kb * 1024 {
        text.push_str(base);
    }
    text.truncate(size_kb * 1024);
    text
}

fn bench_template_parse(c: &mut Criterion) {
    c.bench_function("template_parse_1000", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(PromptTemplate::new(black_box(
                    "Paper: {paper_text}\nKey Concepts: {key_concepts}\nSummary: {summary} {{literal}}",
                )));
            }
        })
    });
}

fn bench_step_render(c: &mut Criterion) {
    let chain = research_hub_chain();
    let step = &chain.steps()[3];
    for kb in [1, 50] {
        let state = ChainState::new()
            .with("paper_text", generate_paper(kb))
            .with("key_concepts", "attention, back-translation, curriculum learning")
            .with("summary", "A study of low-resource translation.");
        c.bench_function(&format!("render_professor_matcher_{kb}kb"), |b| {
            b.iter(|| black_box(step.render(black_box(&state))))
        });
    }
}

fn bench_extract_json(c: &mut Criterion) {
    let wrapped = format!(
        "Sure! Here is the result:\n```json\n{{\"verified\": true, \"confidence_score\": 85, \"summary\": \"{}\"}}\n```",
        "evidence ".repeat(200)
    );
    c.bench_function("extract_json_wrapped", |b| {
        b.iter(|| black_box(extract_json_object(black_box(&wrapped))))
    });
}

criterion_group!(benches, bench_template_parse, bench_step_render, bench_extract_json);
criterion_main!(benches);
