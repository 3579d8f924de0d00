use crate::session::HistoryTurn;
use mf_core::Role;

/// `User: …` / `Assistant: …` lines; other roles are left out.
pub fn render_transcript(turns: &[HistoryTurn]) -> String {
    turns
        .iter()
        .filter_map(|t| match t.role {
            Role::User => Some(format!("User: {}", t.content)),
            Role::Assistant => Some(format!("Assistant: {}", t.content)),
            Role::System => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
