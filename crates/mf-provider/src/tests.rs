use crate::*;
use std::sync::Arc;

fn selector(default: ProviderKind, providers: Vec<Arc<ScriptedProvider>>) -> FallbackSelector {
    providers
        .into_iter()
        .fold(FallbackSelector::new(default), |s, p| s.with_provider(p))
}

// ========== Attempt Order ==========

#[test]
fn test_order_without_preference() {
    let s = FallbackSelector::new(ProviderKind::Gemini);
    assert_eq!(s.attempt_order(None), vec![ProviderKind::Gemini, ProviderKind::OpenAi]);
}

#[test]
fn test_order_preferred_first() {
    let s = FallbackSelector::new(ProviderKind::Gemini);
    assert_eq!(
        s.attempt_order(Some(ProviderKind::OpenAi)),
        vec![ProviderKind::OpenAi, ProviderKind::Gemini]
    );
}

#[test]
fn test_order_no_duplicates() {
    let s = FallbackSelector::new(ProviderKind::OpenAi);
    let order = s.attempt_order(Some(ProviderKind::OpenAi));
    assert_eq!(order, vec![ProviderKind::OpenAi, ProviderKind::Gemini]);
}

#[test]
fn test_configured_in_fixed_order() {
    let s = selector(
        ProviderKind::Gemini,
        vec![
            Arc::new(ScriptedProvider::new(ProviderKind::Gemini)),
            Arc::new(ScriptedProvider::new(ProviderKind::OpenAi)),
        ],
    );
    assert_eq!(s.configured(), vec![ProviderKind::OpenAi, ProviderKind::Gemini]);
    assert!(!s.is_empty());
}

#[test]
fn test_parse_preference() {
    assert_eq!(parse_preference(Some("openai")), Some(ProviderKind::OpenAi));
    assert_eq!(parse_preference(Some("  ")), None);
    assert_eq!(parse_preference(Some("mistral")), None);
    assert_eq!(parse_preference(None), None);
}

// ========== Generation ==========

#[tokio::test]
async fn test_preferred_provider_answers() {
    let gemini = Arc::new(ScriptedProvider::new(ProviderKind::Gemini).reply("from gemini"));
    let openai = Arc::new(ScriptedProvider::new(ProviderKind::OpenAi).reply("from openai"));
    let s = selector(ProviderKind::Gemini, vec![gemini.clone(), openai.clone()]);

    let out = s.generate(&Prompt::new("hi"), Some(ProviderKind::OpenAi)).await.unwrap();
    assert_eq!(out.text, "from openai");
    assert_eq!(out.provider, ProviderKind::OpenAi);
    assert_eq!(gemini.calls(), 0);
}

#[tokio::test]
async fn test_falls_back_on_failure() {
    let gemini = Arc::new(ScriptedProvider::new(ProviderKind::Gemini).fail("quota exceeded"));
    let openai = Arc::new(ScriptedProvider::new(ProviderKind::OpenAi).reply("backup"));
    let s = selector(ProviderKind::Gemini, vec![gemini.clone(), openai.clone()]);

    let out = s.generate(&Prompt::new("hi"), None).await.unwrap();
    assert_eq!(out.provider, ProviderKind::OpenAi);
    assert_eq!(out.text, "backup");
    assert_eq!(gemini.calls(), 1);
    assert_eq!(openai.calls(), 1);
}

#[tokio::test]
async fn test_blank_reply_falls_through() {
    let gemini = Arc::new(ScriptedProvider::new(ProviderKind::Gemini).reply("   "));
    let openai = Arc::new(ScriptedProvider::new(ProviderKind::OpenAi).reply("real answer"));
    let s = selector(ProviderKind::Gemini, vec![gemini.clone(), openai]);

    let out = s.generate(&Prompt::new("hi"), None).await.unwrap();
    assert_eq!(out.provider, ProviderKind::OpenAi);
    assert_eq!(out.text, "real answer");
    assert_eq!(gemini.calls(), 1);
}

#[tokio::test]
async fn test_blank_reply_everywhere_is_empty_response() {
    let gemini = Arc::new(ScriptedProvider::new(ProviderKind::Gemini).reply(""));
    let s = selector(ProviderKind::Gemini, vec![gemini]);
    let err = s.generate(&Prompt::new("hi"), None).await.unwrap_err();
    assert!(matches!(
        err.last_error(),
        ProviderError::EmptyResponse { provider: ProviderKind::Gemini, .. }
    ));
}

#[tokio::test]
async fn test_skips_unconfigured() {
    let gemini = Arc::new(ScriptedProvider::new(ProviderKind::Gemini).reply("ok"));
    let s = selector(ProviderKind::OpenAi, vec![gemini]);
    let out = s.generate(&Prompt::new("hi"), Some(ProviderKind::OpenAi)).await.unwrap();
    assert_eq!(out.provider, ProviderKind::Gemini);
}

#[tokio::test]
async fn test_all_failed_surfaces_last_error() {
    let gemini = Arc::new(ScriptedProvider::new(ProviderKind::Gemini).fail("first"));
    let openai = Arc::new(ScriptedProvider::new(ProviderKind::OpenAi).fail("second"));
    let s = selector(ProviderKind::Gemini, vec![gemini, openai]);

    let err = s.generate(&Prompt::new("hi"), None).await.unwrap_err();
    assert!(matches!(err, ProviderError::AllFailed(_)));
    match err.last_error() {
        ProviderError::Api { message, provider, .. } => {
            assert_eq!(message, "second");
            assert_eq!(*provider, ProviderKind::OpenAi);
        }
        other => panic!("unexpected last error: {other:?}"),
    }
}

#[tokio::test]
async fn test_real_error_not_masked_by_unconfigured() {
    let openai = Arc::new(ScriptedProvider::new(ProviderKind::OpenAi).fail("bad key"));
    let s = selector(ProviderKind::OpenAi, vec![openai]);
    let err = s.generate(&Prompt::new("hi"), None).await.unwrap_err();
    assert!(err.to_string().contains("bad key"));
}

#[tokio::test]
async fn test_empty_selector_reports_not_configured() {
    let s = FallbackSelector::new(ProviderKind::Gemini);
    let err = s.generate(&Prompt::new("hi"), None).await.unwrap_err();
    assert!(matches!(err.last_error(), ProviderError::NotConfigured(ProviderKind::Gemini)));
}

// ========== Prompt ==========

#[test]
fn test_prompt_flattened() {
    let p = Prompt::new("question").with_system("be brief");
    assert_eq!(p.flattened(), "be brief\n\nquestion");
    assert_eq!(Prompt::new("only").flattened(), "only");
}

#[tokio::test]
async fn test_scripted_records_prompts() {
    let p = ScriptedProvider::new(ProviderKind::Gemini).always("same");
    p.generate(&Prompt::new("a")).await.unwrap();
    p.generate(&Prompt::new("b")).await.unwrap();
    let seen: Vec<_> = p.prompts().into_iter().map(|p| p.user).collect();
    assert_eq!(seen, vec!["a", "b"]);
}

#[test]
fn test_gemini_parse_text() {
    let body = serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": "Hi!" }], "role": "model" } }]
    });
    assert_eq!(GeminiProvider::parse_text(&body).as_deref(), Some("Hi!"));
    assert!(GeminiProvider::parse_text(&serde_json::json!({})).is_none());
}

#[test]
fn test_openai_parse_text() {
    let body = serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": "Hello" } }]
    });
    assert_eq!(OpenAiProvider::parse_text(&body).as_deref(), Some("Hello"));
}

#[test]
fn test_gemini_body_uses_prompt_temperature() {
    let provider = GeminiProvider::new(reqwest::Client::new(), "k", Default::default());
    let body = provider.build_body(&Prompt::new("x").with_system("sys").with_temperature(0.0));
    assert_eq!(body["generationConfig"]["temperature"], 0.0);
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 2000);
    assert_eq!(body["contents"][0]["parts"][0]["text"], "sys\n\nx");
}

#[test]
fn test_openai_body_messages() {
    let provider = OpenAiProvider::new(reqwest::Client::new(), "k", Default::default());
    let body = provider.build_body(&Prompt::new("x").with_system("sys"));
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["content"], "x");
    assert_eq!(body["model"], "gpt-3.5-turbo");
    assert_eq!(body["max_tokens"], 1500);
}

#[test]
fn test_openai_body_skips_blank_system() {
    let provider = OpenAiProvider::new(reqwest::Client::new(), "k", Default::default());
    let body = provider.build_body(&Prompt::new("x").with_system(""));
    assert_eq!(body["messages"].as_array().unwrap().len(), 1);
    assert_eq!(body["messages"][0]["role"], "user");
}
