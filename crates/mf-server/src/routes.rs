use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use mf_agents::{
    generate_proposal, literature_summary, professor_guidance, suggest_topics, verify_professor, AgentKind, AgentReply,
    AgentRequest, Evidence, ProfessorVerdict, TopicSuggestions,
};
use mf_chain::workflows::{MENTORSHIP_INPUT, PAPER_TEXT, PAPER_TITLE};
use mf_chain::{mentorship_chain, research_hub_chain, ChainOutcome, ChainState, StepTrace};
use mf_provider::parse_preference;
use mf_session::ChatMessage;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::ApiError;
use crate::state::AppState;

type JsonBody<T> = Result<Json<T>, JsonRejection>;

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
}

pub fn agent_routes() -> Router<AppState> {
    Router::new()
        .route("/agents", get(list_agents))
        .route("/mentorship", post(mentorship))
        .route("/mentorship/{agent_type}", post(mentorship_for_agent))
        .route("/api/topics", post(topics))
        .route("/verify-professor", post(verify))
}

pub fn workflow_routes() -> Router<AppState> {
    Router::new()
        .route("/api/mentorship", post(run_mentorship))
        .route("/api/run-gemini-mentorship", post(run_mentorship))
        .route("/api/paper-analysis", post(analyze_paper))
        .route("/api/analyze-paper", post(analyze_paper))
}

pub fn journey_routes() -> Router<AppState> {
    Router::new()
        .route("/api/research-journey/suggest-topics", post(journey_topics))
        .route("/api/research-journey/generate-proposal", post(journey_proposal))
        .route("/api/research-journey/literature-summary", post(journey_literature))
        .route("/api/research-journey/professor-guidance", post(journey_guidance))
}

pub fn session_routes() -> Router<AppState> {
    Router::new().route("/sessions/{id}", get(get_session).delete(clear_session))
}

fn require_providers(state: &AppState) -> Result<(), ApiError> {
    if state.selector.is_empty() {
        return Err(ApiError::bad_request(
            "No AI provider is configured. Set GEMINI_API_KEY or OPENAI_API_KEY.",
        ));
    }
    Ok(())
}

// ========== Health ==========

async fn health(State(state): State<AppState>) -> Json<Value> {
    let providers: Vec<&str> = state.selector.configured().iter().map(|k| k.as_str()).collect();
    let ready = !state.selector.is_empty();
    Json(json!({
        "status": "healthy",
        "message": "Mentorflow API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
        "agents": AgentKind::ALL.iter().map(|k| k.id()).collect::<Vec<_>>(),
        "providers": providers,
        "default_provider": state.selector.default_provider(),
        "gemini_configured": state.config.api_key(mf_provider::ProviderKind::Gemini).is_some(),
        "workflows_available": {
            "mentorship": ready,
            "research_hub": ready,
        },
        "sessions": state.store.len(),
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

// ========== Agents ==========

async fn list_agents() -> Json<Value> {
    let agents: Map<String, Value> = AgentKind::ALL
        .iter()
        .map(|kind| {
            (
                kind.id().to_string(),
                json!({
                    "name": kind.display_name(),
                    "description": kind.description(),
                    "type": kind.id(),
                }),
            )
        })
        .collect();
    Json(Value::Object(agents))
}

#[derive(Debug, Deserialize)]
pub struct MentorshipRequest {
    #[serde(default)]
    pub agent_type: Option<String>,
    pub query: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub preferred_provider: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

async fn mentorship(
    State(state): State<AppState>,
    payload: JsonBody<MentorshipRequest>,
) -> Result<Json<AgentReply>, ApiError> {
    let Json(req) = payload?;
    let raw = req
        .agent_type
        .clone()
        .ok_or_else(|| ApiError::bad_request("agent_type is required"))?;
    respond(&state, &raw, req).await
}

async fn mentorship_for_agent(
    State(state): State<AppState>,
    Path(agent_type): Path<String>,
    payload: JsonBody<MentorshipRequest>,
) -> Result<Json<AgentReply>, ApiError> {
    let Json(req) = payload?;
    respond(&state, &agent_type, req).await
}

async fn respond(state: &AppState, agent_type: &str, req: MentorshipRequest) -> Result<Json<AgentReply>, ApiError> {
    let kind: AgentKind = agent_type.parse()?;
    require_providers(state)?;

    let request = AgentRequest::new(kind, req.query)
        .with_user(req.user_id)
        .with_preferred(parse_preference(req.preferred_provider.as_deref()));
    let request = match req.session_id {
        Some(id) => request.with_session(id),
        None => request,
    };
    let reply = state.runner.respond(request).await?;
    Ok(Json(reply))
}

#[derive(Debug, Deserialize)]
pub struct TopicsRequest {
    #[serde(default)]
    pub area_of_interest: String,
    #[serde(default)]
    pub preferred_provider: Option<String>,
}

async fn topics(
    State(state): State<AppState>,
    payload: JsonBody<TopicsRequest>,
) -> Result<Json<TopicSuggestions>, ApiError> {
    let Json(req) = payload?;
    let preferred = parse_preference(req.preferred_provider.as_deref());
    let suggestions = suggest_topics(&state.selector, &req.area_of_interest, preferred).await?;
    Ok(Json(suggestions))
}

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub university: String,
    #[serde(default)]
    pub evidence: Evidence,
    #[serde(default)]
    pub preferred_provider: Option<String>,
}

async fn verify(
    State(state): State<AppState>,
    payload: JsonBody<VerifyRequest>,
) -> Result<Json<ProfessorVerdict>, ApiError> {
    let Json(req) = payload?;
    let preferred = parse_preference(req.preferred_provider.as_deref());
    let verdict = verify_professor(&state.selector, &req.name, &req.university, &req.evidence, preferred).await?;
    Ok(Json(verdict))
}

// ========== Research Journey ==========

#[derive(Debug, Deserialize)]
pub struct JourneyRequest {
    #[serde(default)]
    pub area_of_interest: String,
    #[serde(default)]
    pub selected_topic: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub research_questions: String,
    #[serde(default)]
    pub preferred_provider: Option<String>,
}

impl JourneyRequest {
    fn preferred(&self) -> Option<mf_provider::ProviderKind> {
        parse_preference(self.preferred_provider.as_deref())
    }
}

async fn journey_topics(State(state): State<AppState>, payload: JsonBody<JourneyRequest>) -> Result<Json<Value>, ApiError> {
    let Json(req) = payload?;
    let suggestions = suggest_topics(&state.selector, &req.area_of_interest, req.preferred()).await?;
    Ok(Json(json!({ "suggestions": suggestions })))
}

async fn journey_proposal(State(state): State<AppState>, payload: JsonBody<JourneyRequest>) -> Result<Json<Value>, ApiError> {
    let Json(req) = payload?;
    let proposal = generate_proposal(&state.selector, &req.topic, &req.research_questions, req.preferred()).await?;
    Ok(Json(json!({ "proposal": proposal })))
}

async fn journey_literature(State(state): State<AppState>, payload: JsonBody<JourneyRequest>) -> Result<Json<Value>, ApiError> {
    let Json(req) = payload?;
    let summary = literature_summary(&state.selector, &req.selected_topic, req.preferred()).await?;
    Ok(Json(json!({ "literature_summary": summary })))
}

async fn journey_guidance(State(state): State<AppState>, payload: JsonBody<JourneyRequest>) -> Result<Json<Value>, ApiError> {
    let Json(req) = payload?;
    let guidance = professor_guidance(&state.selector, &req.topic, req.preferred()).await?;
    Ok(Json(json!({ "guidance": guidance })))
}

// ========== Workflows ==========

#[derive(Debug, Deserialize)]
pub struct WorkflowRequest {
    #[serde(default)]
    pub user_input: String,
    #[serde(default)]
    pub preferred_provider: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MentorshipReport {
    pub research_scope: String,
    pub analyst_report: String,
    pub resource_map: String,
    pub final_report: String,
    pub model_used: Option<String>,
    pub trace: Vec<StepTrace>,
}

fn take(outcome: &ChainOutcome, key: &str) -> String {
    outcome.get(key).unwrap_or_default().to_string()
}

async fn run_mentorship(
    State(state): State<AppState>,
    payload: JsonBody<WorkflowRequest>,
) -> Result<Json<MentorshipReport>, ApiError> {
    let Json(req) = payload?;
    let user_input = req.user_input.trim();
    if user_input.is_empty() {
        return Err(ApiError::bad_request("User input is required"));
    }
    require_providers(&state)?;

    let preferred = parse_preference(req.preferred_provider.as_deref());
    let initial = ChainState::new().with(MENTORSHIP_INPUT, user_input);
    let outcome = mentorship_chain().run(&state.selector, preferred, initial).await?;

    Ok(Json(MentorshipReport {
        research_scope: take(&outcome, "research_scope"),
        analyst_report: take(&outcome, "analyst_report"),
        resource_map: take(&outcome, "resource_map"),
        final_report: take(&outcome, "final_report"),
        model_used: outcome.last_provider().map(|p| p.to_string()),
        trace: outcome.trace,
    }))
}

#[derive(Debug, Deserialize)]
pub struct PaperRequest {
    #[serde(default)]
    pub paper_text: String,
    #[serde(default)]
    pub paper_title: Option<String>,
    #[serde(default)]
    pub preferred_provider: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PaperReport {
    pub paper_title: String,
    pub summary: String,
    pub key_concepts: String,
    pub related_resources: String,
    pub professor_suggestions: String,
    pub model_used: Option<String>,
    pub trace: Vec<StepTrace>,
}

async fn analyze_paper(
    State(state): State<AppState>,
    payload: JsonBody<PaperRequest>,
) -> Result<Json<PaperReport>, ApiError> {
    let Json(req) = payload?;
    let paper_text = req.paper_text.trim();
    if paper_text.is_empty() {
        return Err(ApiError::bad_request("paper_text is required"));
    }
    require_providers(&state)?;

    let title = req
        .paper_title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or("Untitled paper")
        .to_string();
    let preferred = parse_preference(req.preferred_provider.as_deref());
    let initial = ChainState::new()
        .with(PAPER_TEXT, paper_text)
        .with(PAPER_TITLE, title.clone());
    let outcome = research_hub_chain().run(&state.selector, preferred, initial).await?;

    Ok(Json(PaperReport {
        paper_title: title,
        summary: take(&outcome, "summary"),
        key_concepts: take(&outcome, "key_concepts"),
        related_resources: take(&outcome, "related_resources"),
        professor_suggestions: take(&outcome, "professor_suggestions"),
        model_used: outcome.last_provider().map(|p| p.to_string()),
        trace: outcome.trace,
    }))
}

// ========== Sessions ==========

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SessionHistory {
    pub session_id: String,
    pub user_id: Option<String>,
    pub agent_type: Option<String>,
    pub created_at: String,
    pub message_count: usize,
    pub messages: Vec<ChatMessage>,
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<HistoryParams>, QueryRejection>,
) -> Result<Json<SessionHistory>, ApiError> {
    let Query(params) = query?;
    let conversation = state
        .store
        .get(&id)
        .ok_or_else(|| ApiError::not_found(format!("Session not found: {id}")))?;
    let limit = params.limit.unwrap_or(state.config.sessions.default_history_limit);

    Ok(Json(SessionHistory {
        session_id: conversation.id.clone(),
        user_id: conversation.user_id.clone(),
        agent_type: conversation.agent_type.clone(),
        created_at: conversation.created_at.to_rfc3339(),
        message_count: conversation.message_count(),
        messages: conversation.tail(limit).to_vec(),
    }))
}

async fn clear_session(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, ApiError> {
    if !state.store.clear(&id) {
        return Err(ApiError::not_found(format!("Session not found: {id}")));
    }
    Ok(Json(json!({ "session_id": id, "cleared": true })))
}

pub async fn not_found() -> ApiError {
    ApiError::not_found("Endpoint not found")
}
