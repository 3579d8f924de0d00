//! Professor verification from caller-gathered evidence.
//!
//! The model is asked for a strict JSON verdict. Without a usable reply a
//! fixed heuristic scores the evidence instead, weighting publication
//! signals above general web presence.

use mf_chain::extract_json_object;
use mf_provider::{FallbackSelector, Prompt, ProviderKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AgentError;

const MAX_EVIDENCE_LINKS: usize = 10;
const PROMPT_LINKS: usize = 15;
const VERIFIED_THRESHOLD: u8 = 60;
const RESEARCH_SITES: &[&str] = &[
    "scholar", "arxiv", "researchgate", "pubmed", "semanticscholar", "dblp", "acm", "ieee",
];

/// What the caller already knows about the person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Evidence {
    pub research_area: Option<String>,
    pub publications: Vec<String>,
    pub keywords: Vec<String>,
    pub wikipedia_text: Option<String>,
    pub semantic_scholar_text: Option<String>,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessorVerdict {
    pub verified: bool,
    pub confidence_score: u8,
    pub evidence_links: Vec<String>,
    pub summary: String,
}

fn present(text: &Option<String>) -> Option<&str> {
    text.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn dedup_links(links: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(links.len());
    for link in links {
        let link = link.trim();
        if !link.is_empty() && !out.iter().any(|l| l == link) {
            out.push(link.to_string());
        }
    }
    out
}

pub fn verification_prompt(name: &str, university: &str, evidence: &Evidence, links: &[String]) -> Prompt {
    let mut context = format!("Name: {name}\nUniversity: {university}\n");
    if let Some(area) = present(&evidence.research_area) {
        context.push_str(&format!("Research Area: {area}\n"));
    }
    if !evidence.keywords.is_empty() {
        let keywords: Vec<&str> = evidence.keywords.iter().take(5).map(String::as_str).collect();
        context.push_str(&format!("Keywords: {}\n", keywords.join(", ")));
    }
    if !evidence.publications.is_empty() {
        context.push_str("\nPublications from Profile:\n");
        for publication in evidence.publications.iter().take(5) {
            context.push_str(&format!("- {publication}\n"));
        }
    }
    context.push_str(&format!(
        "\nWikipedia:\n{}\n\nSemantic Scholar (Research Publications):\n{}\n\nTop Evidence Links:\n{}",
        present(&evidence.wikipedia_text).unwrap_or("[none]"),
        present(&evidence.semantic_scholar_text).unwrap_or("[none]"),
        links.iter().take(PROMPT_LINKS).cloned().collect::<Vec<_>>().join("\n"),
    ));

    Prompt::new(format!(
        "You are verifying whether a person is a real and active professor based on their RESEARCH PUBLICATIONS and academic profile. \
Focus on: 1) Research publications found in Semantic Scholar or profile, 2) Academic affiliations matching the university, \
3) Research area consistency, 4) Evidence of active research work. \
Prioritize verification based on PUBLICATION RECORD and research activity over general web presence. \
Return STRICT JSON with keys: verified (bool), confidence_score (0-100), summary (string explaining verification based on research/publications).\n\n\
CONTEXT\n-----\n{context}\n\n\
JSON ONLY RESPONSE EXAMPLE:\n\
{{\n  \"verified\": true,\n  \"confidence_score\": 87,\n  \"summary\": \"Professor is active in AI research at MIT with recent publications.\"\n}}"
    ))
}

fn clamp_score(raw: i64) -> u8 {
    raw.clamp(0, 100) as u8
}

/// Models sometimes quote booleans or answer with 0/1.
fn parse_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "yes"),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}

/// Read `{verified, confidence_score, summary}` from a model reply.
pub fn parse_model_verdict(value: &Value, links: &[String]) -> ProfessorVerdict {
    let score = match &value["confidence_score"] {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)).unwrap_or(0),
        Value::String(s) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    };
    let summary = match &value["summary"] {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };
    ProfessorVerdict {
        verified: parse_flag(&value["verified"]),
        confidence_score: clamp_score(score),
        evidence_links: links.iter().take(MAX_EVIDENCE_LINKS).cloned().collect(),
        summary,
    }
}

/// Score the evidence without a model.
pub fn heuristic_verdict(evidence: &Evidence, links: &[String]) -> ProfessorVerdict {
    let mut score: i64 = 0;
    let publications = evidence.publications.len();
    let research_area = present(&evidence.research_area);
    let s2_text = present(&evidence.semantic_scholar_text);

    if publications > 0 {
        score += 30;
        if publications >= 2 {
            score += 10;
        }
    }
    if research_area.is_some() {
        score += 10;
    }
    if let Some(text) = s2_text {
        score += if text.to_lowercase().contains("papers:") { 50 } else { 30 };
    }
    if present(&evidence.wikipedia_text).is_some() {
        score += 20;
    }
    let research_links = links
        .iter()
        .filter(|link| {
            let lower = link.to_lowercase();
            RESEARCH_SITES.iter().any(|site| lower.contains(site))
        })
        .count();
    if research_links > 0 {
        score += (research_links as i64 * 5).min(20);
    }

    let confidence_score = clamp_score(score);
    let verified = confidence_score >= VERIFIED_THRESHOLD;

    let mut parts = Vec::new();
    if publications > 0 {
        parts.push(format!("Found {publications} publication(s) in profile"));
    }
    if let Some(area) = research_area {
        parts.push(format!("Research area: {area}"));
    }
    if research_links > 0 {
        parts.push(format!("Found {research_links} research-related evidence links"));
    }
    if s2_text.is_some() {
        parts.push("Semantic Scholar author profile found".to_string());
    }

    let mut summary = String::from("Heuristic result (no AI key). ");
    if !parts.is_empty() {
        summary.push_str(&parts.join(" | "));
        summary.push_str(". ");
    }
    summary.push_str(if verified {
        "Likely professor based on research activity."
    } else {
        "Limited evidence of research activity."
    });

    ProfessorVerdict {
        verified,
        confidence_score,
        evidence_links: links.iter().take(MAX_EVIDENCE_LINKS).cloned().collect(),
        summary,
    }
}

pub async fn verify_professor(
    selector: &FallbackSelector,
    name: &str,
    university: &str,
    evidence: &Evidence,
    preferred: Option<ProviderKind>,
) -> Result<ProfessorVerdict, AgentError> {
    let name = name.trim();
    let university = university.trim();
    if name.chars().count() < 2 || university.chars().count() < 2 {
        return Err(AgentError::InvalidInput(
            "name and university must be at least 2 characters".into(),
        ));
    }

    let links = dedup_links(&evidence.links);
    if selector.is_empty() {
        tracing::info!(professor = %name, "no provider configured, scoring evidence heuristically");
        return Ok(heuristic_verdict(evidence, &links));
    }

    let prompt = verification_prompt(name, university, evidence, &links);
    match selector.generate(&prompt, preferred).await {
        Ok(generation) => match extract_json_object(&generation.text) {
            Some(value) => Ok(parse_model_verdict(&value, &links)),
            None => {
                tracing::warn!(professor = %name, "verification reply had no JSON, using heuristic");
                Ok(heuristic_verdict(evidence, &links))
            }
        },
        Err(e) => {
            tracing::warn!(professor = %name, error = %e, "verification call failed, using heuristic");
            Ok(heuristic_verdict(evidence, &links))
        }
    }
}
