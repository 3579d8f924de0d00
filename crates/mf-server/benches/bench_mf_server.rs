use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mf_core::MentorflowConfig;
use mf_provider::{FallbackSelector, ProviderKind, ScriptedProvider};
use mf_server::{app_with_state, state::AppState};
use tokio::runtime::Runtime;
use tower::ServiceExt;

fn scripted_state() -> AppState {
    let provider = ScriptedProvider::new(ProviderKind::Gemini)
        .always("Start with Coursera, then join a workshop and apply for Fulbright.");
    let selector = FallbackSelector::new(ProviderKind::Gemini).with_provider(Arc::new(provider));
    AppState::with_selector(MentorflowConfig::default(), selector)
}

fn bench_http_health(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let state = AppState::default();
    c.bench_function("http_health_1000", |b| {
        b.iter(|| {
            rt.block_on(async {
                for _ in 0..1000 {
                    let app = app_with_state(state.clone());
                    let req = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
                    let resp = app.oneshot(req).await.unwrap();
                    black_box(resp.status());
                }
            })
        })
    });
}

fn bench_http_mentorship(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    c.bench_function("http_mentorship_100_same_session", |b| {
        b.iter(|| {
            rt.block_on(async {
                let state = scripted_state();
                for i in 0..100 {
                    let app = app_with_state(state.clone());
                    let body = serde_json::json!({
                        "agent_type": "skill_coach",
                        "query": format!("Question {i}: what should I study next?"),
                        "session_id": "bench-session"
                    });
                    let req = Request::builder()
                        .method("POST")
                        .uri("/mentorship")
                        .header("content-type", "application/json")
                        .body(Body::from(serde_json::to_vec(&body).unwrap()))
                        .unwrap();
                    let resp = app.oneshot(req).await.unwrap();
                    assert_eq!(resp.status(), StatusCode::OK);
                }
            })
        })
    });
}

fn bench_http_workflow(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let state = scripted_state();
    c.bench_function("http_mentorship_workflow", |b| {
        b.iter(|| {
            rt.block_on(async {
                let app = app_with_state(state.clone());
                let body = serde_json::json!({ "user_input": "data science" });
                let req = Request::builder()
                    .method("POST")
                    .uri("/api/mentorship")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap();
                black_box(app.oneshot(req).await.unwrap().status());
            })
        })
    });
}

criterion_group!(benches, bench_http_health, bench_http_mentorship, bench_http_workflow);
criterion_main!(benches);
