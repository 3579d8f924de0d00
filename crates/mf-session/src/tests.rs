use crate::*;
use mf_core::Role;

// ========== Conversation ==========

#[test]
fn test_conversation_tail() {
    let mut c = Conversation::new("c1", None, None);
    for i in 0..5 {
        c.push(ChatMessage::new(Role::User, format!("m{i}")));
    }
    let tail: Vec<_> = c.tail(2).iter().map(|m| m.content.as_str()).collect();
    assert_eq!(tail, vec!["m3", "m4"]);
    assert_eq!(c.tail(50).len(), 5);
}

#[test]
fn test_conversation_display() {
    let c = Conversation::new("0123456789abcdef", None, None);
    assert_eq!(c.to_string(), "Conversation(01234567, 0 messages)");
}

// ========== Store Lifecycle ==========

#[test]
fn test_create_and_get() {
    let store = ConversationStore::new(10);
    let id = store.create(Some("u1".into()), Some("skill_coach".into()));
    let c = store.get(&id).unwrap();
    assert_eq!(c.user_id.as_deref(), Some("u1"));
    assert_eq!(c.agent_type.as_deref(), Some("skill_coach"));
    assert!(c.messages.is_empty());
}

#[test]
fn test_ids_unique() {
    let store = ConversationStore::new(10);
    let a = store.create(None, None);
    let b = store.create(None, None);
    assert_ne!(a, b);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_ensure_keeps_existing() {
    let store = ConversationStore::new(10);
    assert!(store.ensure("given-id", None, None));
    store.add_message("given-id", Role::User, "hello", None);
    assert!(!store.ensure("given-id", None, None));
    assert_eq!(store.history("given-id", 10).len(), 1);
}

#[test]
fn test_add_message_autocreates_under_id() {
    let store = ConversationStore::new(10);
    store.add_message("fresh", Role::User, "hi", None);
    assert!(store.contains("fresh"));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_message_order_preserved() {
    let store = ConversationStore::new(10);
    let id = store.create(None, None);
    store.add_message(&id, Role::User, "q1", None);
    store.add_message(&id, Role::Assistant, "a1", None);
    store.add_message(&id, Role::User, "q2", None);
    let contents: Vec<_> = store.history(&id, 10).into_iter().map(|m| m.content).collect();
    assert_eq!(contents, vec!["q1", "a1", "q2"]);
}

#[test]
fn test_message_metadata() {
    let store = ConversationStore::new(10);
    let mut meta = serde_json::Map::new();
    meta.insert("ai_provider".into(), "gemini".into());
    store.add_message("s", Role::Assistant, "answer", Some(meta));
    let msg = &store.history("s", 1)[0];
    assert_eq!(msg.metadata["ai_provider"], "gemini");
}

// ========== Eviction ==========

#[test]
fn test_evicts_oldest_created() {
    let store = ConversationStore::new(3);
    let first = store.create(None, None);
    let second = store.create(None, None);
    store.create(None, None);
    store.add_message(&first, Role::User, "still oldest", None);
    store.create(None, None);
    assert_eq!(store.len(), 3);
    assert!(!store.contains(&first));
    assert!(store.contains(&second));
}

#[test]
fn test_evicts_several_after_burst() {
    let store = ConversationStore::new(2);
    let ids: Vec<_> = (0..5).map(|_| store.create(None, None)).collect();
    assert_eq!(store.len(), 2);
    assert!(store.contains(&ids[3]));
    assert!(store.contains(&ids[4]));
}

#[test]
fn test_removed_session_not_double_counted() {
    let store = ConversationStore::new(2);
    let a = store.create(None, None);
    store.remove(&a);
    let b = store.create(None, None);
    let c = store.create(None, None);
    assert!(store.contains(&b) && store.contains(&c));
}

#[test]
fn test_zero_cap_clamped() {
    let store = ConversationStore::new(0);
    assert_eq!(store.max_sessions(), 1);
    store.create(None, None);
    assert_eq!(store.len(), 1);
}

// ========== History ==========

#[test]
fn test_history_unknown_is_empty() {
    let store = ConversationStore::default();
    assert!(store.history("nope", 20).is_empty());
    assert!(store.history_for_llm("nope", 3).is_empty());
}

#[test]
fn test_history_for_llm_pairs() {
    let store = ConversationStore::default();
    for i in 0..10 {
        store.add_message("s", Role::User, format!("q{i}"), None);
        store.add_message("s", Role::Assistant, format!("a{i}"), None);
    }
    let turns = store.history_for_llm("s", 3);
    assert_eq!(turns.len(), 6);
    assert_eq!(turns[0], HistoryTurn { role: Role::User, content: "q7".into() });
    assert_eq!(turns[5].content, "a9");
}

#[test]
fn test_clear_keeps_session() {
    let store = ConversationStore::default();
    store.add_message("s", Role::User, "x", None);
    assert!(store.clear("s"));
    assert!(store.contains("s"));
    assert!(store.history("s", 10).is_empty());
    assert!(!store.clear("missing"));
}

#[test]
fn test_store_shared_across_threads() {
    use std::thread;
    let store = ConversationStore::new(1000);
    let other = store.clone();
    let h = thread::spawn(move || {
        for _ in 0..50 {
            other.create(None, None);
        }
    });
    for _ in 0..50 {
        store.create(None, None);
    }
    h.join().unwrap();
    assert_eq!(store.len(), 100);
}

// ========== Transcript ==========

#[test]
fn test_render_transcript() {
    let turns = vec![
        HistoryTurn { role: Role::System, content: "hidden".into() },
        HistoryTurn { role: Role::User, content: "What is ML?".into() },
        HistoryTurn { role: Role::Assistant, content: "Machine learning.".into() },
    ];
    assert_eq!(render_transcript(&turns), "User: What is ML?\nAssistant: Machine learning.");
    assert_eq!(render_transcript(&[]), "");
}
