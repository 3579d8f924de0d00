//! Keyword mentions pulled out of agent responses.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::kind::AgentKind;

const PLATFORMS: &[&str] = &[
    "Coursera", "Udemy", "edX", "YouTube", "Khan Academy", "Pluralsight",
    "LinkedIn Learning", "Skillshare", "FreeCodeCamp", "Codecademy",
    "MIT OpenCourseWare", "Stanford Online", "FutureLearn",
];

const OPPORTUNITIES: &[(&str, &[&str])] = &[
    ("scholarship", &["Fulbright", "Chevening", "DAAD", "Commonwealth", "Erasmus", "Rhodes", "Gates", "Schwarzman"]),
    ("fellowship", &["Rhodes", "Gates", "Schwarzman", "Fulbright", "Humboldt"]),
    ("grant", &["NSF", "NIH", "research grant", "Marie Curie"]),
];

/// Checked in order; the first group with a hit wins.
const WRITING_TYPES: &[(&str, &[&str])] = &[
    ("abstract", &["abstract", "summary"]),
    ("cv", &["cv", "resume", "curriculum vitae"]),
    ("proposal", &["proposal", "grant"]),
    ("paper", &["paper", "manuscript", "article"]),
];

const EVENT_TYPES: &[&str] = &["conference", "workshop", "seminar", "webinar", "symposium", "summit"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceMention {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub provider: &'static str,
    pub mentioned: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpportunityMention {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub program: &'static str,
    pub mentioned: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventMention {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mentioned: bool,
}

/// Per-agent structured extras; only the field for the answering agent is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Insights {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<ResourceMention>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunities: Option<Vec<OpportunityMention>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writing_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<EventMention>>,
}

impl Insights {
    /// Run the agent's extractor over its response.
    pub fn analyze(kind: AgentKind, response: &str) -> Self {
        match kind {
            AgentKind::SkillCoach => Self {
                resources: Some(extract_resources(response)),
                ..Self::default()
            },
            AgentKind::CareerGuide => Self {
                opportunities: Some(extract_opportunities(response)),
                ..Self::default()
            },
            AgentKind::WritingAgent => Self {
                writing_type: Some(detect_writing_type(response)),
                ..Self::default()
            },
            AgentKind::NetworkingAgent => Self {
                events: Some(extract_events(response)),
                ..Self::default()
            },
        }
    }

    /// Count/type entries merged into the reply metadata.
    pub fn metadata(&self) -> Map<String, Value> {
        let mut meta = Map::new();
        if let Some(resources) = &self.resources {
            meta.insert("resource_count".into(), resources.len().into());
        }
        if let Some(opportunities) = &self.opportunities {
            meta.insert("opportunity_count".into(), opportunities.len().into());
        }
        if let Some(writing_type) = self.writing_type {
            meta.insert("detected_type".into(), writing_type.into());
        }
        if let Some(events) = &self.events {
            meta.insert("event_count".into(), events.len().into());
        }
        meta
    }
}

fn mentions(haystack_lower: &str, needle: &str) -> bool {
    haystack_lower.contains(needle.to_lowercase().as_str())
}

pub fn extract_resources(response: &str) -> Vec<ResourceMention> {
    let text = response.to_lowercase();
    PLATFORMS
        .iter()
        .copied()
        .filter(|p| mentions(&text, p))
        .map(|provider| ResourceMention { kind: "course", provider, mentioned: true })
        .collect()
}

/// A program listed under several types is reported once per type.
pub fn extract_opportunities(response: &str) -> Vec<OpportunityMention> {
    let lower = response.to_lowercase();
    let text = lower.as_str();
    OPPORTUNITIES
        .iter()
        .flat_map(move |&(kind, programs)| {
            programs
                .iter()
                .copied()
                .filter(move |p| mentions(text, p))
                .map(move |program| OpportunityMention { kind, program, mentioned: true })
        })
        .collect()
}

pub fn detect_writing_type(response: &str) -> &'static str {
    let text = response.to_lowercase();
    WRITING_TYPES
        .iter()
        .find(|(_, words)| words.iter().any(|w| text.contains(*w)))
        .map(|(kind, _)| *kind)
        .unwrap_or("general")
}

pub fn extract_events(response: &str) -> Vec<EventMention> {
    let text = response.to_lowercase();
    EVENT_TYPES
        .iter()
        .copied()
        .filter(|e| text.contains(e))
        .map(|kind| EventMention { kind, mentioned: true })
        .collect()
}
