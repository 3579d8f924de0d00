//! Research topic suggestions for a student's area of interest.

use mf_chain::extract_json_object;
use mf_provider::{FallbackSelector, Prompt, ProviderKind};
use serde::{Deserialize, Serialize};

use crate::error::AgentError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub questions: Vec<String>,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicSuggestions {
    pub topics: Vec<Topic>,
}

impl TopicSuggestions {
    /// Canned single topic used when the model gives nothing usable.
    pub fn fallback(area: &str) -> Self {
        Self {
            topics: vec![Topic {
                title: format!("AI Applications in {area}"),
                keywords: vec![
                    "artificial intelligence".into(),
                    "machine learning".into(),
                    area.to_lowercase(),
                ],
                questions: vec![
                    format!("How can AI improve {area}?"),
                    format!("What are the challenges of implementing AI in {area}?"),
                    format!("What are the ethical considerations of AI in {area}?"),
                ],
                explanation: format!(
                    "This topic combines your interest in {area} with current AI trends, making it highly relevant and researchable."
                ),
            }],
        }
    }
}

pub fn topics_prompt(area: &str) -> Prompt {
    Prompt::new(format!(
        r#"You are an expert research advisor helping a student choose their first research topic.

The student is interested in: {area}

Please provide:
1. 3-5 refined research topics with clear focus
2. 5-7 relevant keywords for each topic
3. 2-3 sample research questions for each topic
4. Brief explanation of why each topic is suitable for a beginner researcher

Format your response as JSON with this structure:
{{
    "topics": [
        {{
            "title": "Topic title",
            "keywords": ["keyword1", "keyword2", "keyword3"],
            "questions": ["Question 1", "Question 2", "Question 3"],
            "explanation": "Why this topic is good for beginners"
        }}
    ]
}}"#
    ))
}

/// Ask for topic suggestions; provider or parse failures yield the fallback set.
pub async fn suggest_topics(
    selector: &FallbackSelector,
    area: &str,
    preferred: Option<ProviderKind>,
) -> Result<TopicSuggestions, AgentError> {
    let area = area.trim();
    if area.is_empty() {
        return Err(AgentError::InvalidInput("area_of_interest must not be empty".into()));
    }

    let text = match selector.generate(&topics_prompt(area), preferred).await {
        Ok(generation) => generation.text,
        Err(e) => {
            tracing::warn!(error = %e, "topic suggestion failed, using fallback topics");
            return Ok(TopicSuggestions::fallback(area));
        }
    };

    let parsed = extract_json_object(&text)
        .and_then(|value| serde_json::from_value::<TopicSuggestions>(value).ok())
        .filter(|s| !s.topics.is_empty());
    match parsed {
        Some(suggestions) => Ok(suggestions),
        None => {
            tracing::warn!("topic reply was not usable JSON, using fallback topics");
            Ok(TopicSuggestions::fallback(area))
        }
    }
}
