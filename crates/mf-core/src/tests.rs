use crate::*;
use std::collections::HashMap;
use std::str::FromStr;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ========== ProviderKind ==========

#[test]
fn test_provider_kind_parse() {
    assert_eq!(ProviderKind::from_str("gemini").unwrap(), ProviderKind::Gemini);
    assert_eq!(ProviderKind::from_str(" OpenAI ").unwrap(), ProviderKind::OpenAi);
    assert!(ProviderKind::from_str("claude").is_err());
}

#[test]
fn test_provider_kind_display_roundtrip() {
    for kind in ProviderKind::FALLBACK_ORDER {
        assert_eq!(ProviderKind::from_str(&kind.to_string()).unwrap(), kind);
    }
}

#[test]
fn test_provider_kind_serde() {
    let json = serde_json::to_string(&ProviderKind::OpenAi).unwrap();
    assert_eq!(json, "\"openai\"");
    let kind: ProviderKind = serde_json::from_str("\"gemini\"").unwrap();
    assert_eq!(kind, ProviderKind::Gemini);
}

#[test]
fn test_role_parse() {
    assert_eq!(Role::from_str("assistant").unwrap(), Role::Assistant);
    assert!(Role::from_str("tool").is_err());
    assert_eq!(Role::User.to_string(), "user");
}

// ========== Config ==========

#[test]
fn test_config_defaults() {
    let cfg = MentorflowConfig::default();
    assert_eq!(cfg.providers.default_provider, ProviderKind::Gemini);
    assert_eq!(cfg.server.port, 8000);
    assert_eq!(cfg.sessions.max_sessions, 100);
    assert_eq!(cfg.providers.gemini.models[0], "gemini-2.5-flash");
    assert!(cfg.available_providers().is_empty());
}

#[test]
fn test_config_from_lookup() {
    let cfg = MentorflowConfig::from_lookup(lookup(&[
        ("GEMINI_API_KEY", "g-key"),
        ("OPENAI_API_KEY", "o-key"),
        ("AI_PROVIDER", "OpenAI"),
        ("API_PORT", "9090"),
        ("MAX_SESSIONS", "5"),
        ("GEMINI_MODELS", "gemini-2.0-flash, gemini-1.5-pro"),
    ]))
    .unwrap();
    assert_eq!(cfg.providers.default_provider, ProviderKind::OpenAi);
    assert_eq!(cfg.server.port, 9090);
    assert_eq!(cfg.sessions.max_sessions, 5);
    assert_eq!(cfg.providers.gemini.models, vec!["gemini-2.0-flash", "gemini-1.5-pro"]);
    assert_eq!(cfg.available_providers(), vec![ProviderKind::OpenAi, ProviderKind::Gemini]);
}

#[test]
fn test_config_invalid_provider_falls_back_to_gemini() {
    let cfg = MentorflowConfig::from_lookup(lookup(&[("AI_PROVIDER", "llama")])).unwrap();
    assert_eq!(cfg.providers.default_provider, ProviderKind::Gemini);
}

#[test]
fn test_config_blank_key_is_unset() {
    let cfg = MentorflowConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "   ")])).unwrap();
    assert!(cfg.api_key(ProviderKind::OpenAi).is_none());
}

#[test]
fn test_debug_flag_overrides_log_level() {
    let cfg = MentorflowConfig::from_lookup(lookup(&[("LOG_LEVEL", "WARN")])).unwrap();
    assert_eq!(cfg.server.effective_log_level(), "warn");

    let cfg = MentorflowConfig::from_lookup(lookup(&[("LOG_LEVEL", "warn"), ("DEBUG", "True")])).unwrap();
    assert!(cfg.server.debug);
    assert_eq!(cfg.server.effective_log_level(), "debug");
}

#[test]
fn test_config_bad_port() {
    let err = MentorflowConfig::from_lookup(lookup(&[("API_PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, MfError::InvalidConfig { .. }));
}

#[test]
fn test_validate_requires_a_key() {
    assert!(MentorflowConfig::default().validate().is_err());
    let cfg = MentorflowConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "k")])).unwrap();
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_api_key_not_serialized() {
    let cfg = MentorflowConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "secret")])).unwrap();
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(!json.contains("secret"));
}
