use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mf_agents::verify::heuristic_verdict;
use mf_agents::{AgentKind, AgentRunner, Evidence, Insights};
use mf_core::Role;
use mf_session::HistoryTurn;

fn generate_response(size_kb: usize) -> String {
    let base = "For machine learning, start with the Coursera specialization, then practise on Kaggle. Consider the Fulbright and DAAD scholarships, and attend a regional workshop or an annual conference to meet researchers. ";
    let mut text = String::with_capacity(size_kb * 1024);
    while text.len() < size_kb * 1024 {
        text.push_str(base);
    }
    text.truncate(size_kb * 1024);
    text
}

fn bench_insights(c: &mut Criterion) {
    let text_1k = generate_response(1);
    let text_10k = generate_response(10);

    for kind in AgentKind::ALL {
        c.bench_function(&format!("insights_{}_1kb", kind.id()), |b| {
            b.iter(|| black_box(Insights::analyze(kind, black_box(&text_1k))))
        });
        c.bench_function(&format!("insights_{}_10kb", kind.id()), |b| {
            b.iter(|| black_box(Insights::analyze(kind, black_box(&text_10k))))
        });
    }
}

fn bench_build_prompt(c: &mut Criterion) {
    let history: Vec<HistoryTurn> = (0..6)
        .map(|i| HistoryTurn {
            role: if i % 2 == 0 { Role::User } else { Role::Assistant },
            content: format!("turn {i}: {}", "some earlier discussion ".repeat(20)),
        })
        .collect();

    c.bench_function("build_prompt_3_exchanges", |b| {
        b.iter(|| {
            black_box(AgentRunner::build_prompt(
                AgentKind::SkillCoach,
                black_box("Which statistics course should I take next?"),
                &history,
            ))
        })
    });
}

fn bench_heuristic(c: &mut Criterion) {
    let evidence = Evidence {
        research_area: Some("Natural Language Processing".into()),
        publications: (0..5).map(|i| format!("Paper {i}")).collect(),
        semantic_scholar_text: Some("Author: X | Papers: 120".into()),
        links: (0..20).map(|i| format!("https://scholar.google.com/citations?user={i}")).collect(),
        ..Evidence::default()
    };

    c.bench_function("heuristic_verdict", |b| {
        b.iter(|| black_box(heuristic_verdict(black_box(&evidence), &evidence.links)))
    });
}

criterion_group!(benches, bench_insights, bench_build_prompt, bench_heuristic);
criterion_main!(benches);
