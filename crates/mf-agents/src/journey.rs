//! Research-journey helpers: proposal drafting, literature summaries and
//! professor outreach guidance.
//!
//! Every operation degrades to canned text when no provider answers, so a
//! student always gets something to work from.

use mf_chain::workflows::{PROPOSAL_QUESTIONS, PROPOSAL_TOPIC};
use mf_chain::{proposal_chain, ChainState};
use mf_provider::{FallbackSelector, Prompt, ProviderKind};
use serde::Serialize;

use crate::error::AgentError;

/// Reference paper fed to the literature prompt as retrieval context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferencePaper {
    pub title: &'static str,
    #[serde(rename = "abstract")]
    pub summary: &'static str,
    pub keywords: &'static [&'static str],
    pub authors: &'static str,
    pub year: &'static str,
}

pub const REFERENCE_PAPERS: [ReferencePaper; 4] = [
    ReferencePaper {
        title: "Machine Learning Applications in Agricultural Yield Prediction",
        summary: "This paper explores the use of machine learning algorithms to predict agricultural yields based on weather data, soil conditions, and historical crop performance. The study demonstrates that ensemble methods achieve 85% accuracy in yield prediction.",
        keywords: &["machine learning", "agriculture", "yield prediction", "ensemble methods"],
        authors: "Smith, J., Johnson, A., Brown, K.",
        year: "2023",
    },
    ReferencePaper {
        title: "Deep Learning for Crop Disease Detection in Smart Agriculture",
        summary: "We present a deep learning approach for automated crop disease detection using computer vision. Our CNN-based model achieves 92% accuracy in identifying common crop diseases from leaf images.",
        keywords: &["deep learning", "computer vision", "crop disease", "CNN"],
        authors: "Garcia, M., Lee, S., Wilson, R.",
        year: "2023",
    },
    ReferencePaper {
        title: "IoT Sensors and AI for Precision Agriculture",
        summary: "This research investigates the integration of IoT sensors with AI algorithms for precision agriculture. The system monitors soil moisture, temperature, and nutrient levels to optimize irrigation and fertilization.",
        keywords: &["IoT", "precision agriculture", "sensors", "optimization"],
        authors: "Chen, L., Martinez, P., Taylor, D.",
        year: "2022",
    },
    ReferencePaper {
        title: "Natural Language Processing for Agricultural Knowledge Extraction",
        summary: "We develop NLP techniques to extract actionable insights from agricultural research papers and farmer reports. The system uses transformer models to identify key farming practices and recommendations.",
        keywords: &["NLP", "knowledge extraction", "transformer", "agriculture"],
        authors: "Kumar, A., Singh, V., Patel, N.",
        year: "2023",
    },
];

fn require_topic(raw: &str, field: &str) -> Result<String, AgentError> {
    let topic = raw.trim();
    if topic.is_empty() {
        return Err(AgentError::InvalidInput(format!("{field} is required")));
    }
    Ok(topic.to_string())
}

// ========== Proposal ==========

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Proposal {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub objectives: String,
    pub methodology: String,
    /// `None` when the canned proposal was returned.
    pub model_used: Option<ProviderKind>,
}

impl Proposal {
    pub fn fallback(topic: &str) -> Self {
        Self {
            title: format!("Research on {topic}"),
            abstract_text: format!(
                "This research investigates {topic} to address current challenges and opportunities in the field. The study aims to provide practical insights and contribute to the growing body of knowledge in this area."
            ),
            objectives: format!(
                "1. Analyze current state of {topic}\n2. Identify key challenges and opportunities\n3. Develop practical solutions\n4. Evaluate effectiveness of proposed approaches"
            ),
            methodology: "Mixed-methods approach combining literature review, data analysis, and practical implementation. Timeline: 6-12 months with regular milestones and progress reviews.".into(),
            model_used: None,
        }
    }
}

/// Run the four-step proposal chain; any step failure yields the canned proposal.
pub async fn generate_proposal(
    selector: &FallbackSelector,
    topic: &str,
    research_questions: &str,
    preferred: Option<ProviderKind>,
) -> Result<Proposal, AgentError> {
    let topic = require_topic(topic, "topic")?;
    let initial = ChainState::new()
        .with(PROPOSAL_TOPIC, topic.as_str())
        .with(PROPOSAL_QUESTIONS, research_questions.trim());

    match proposal_chain().run(selector, preferred, initial).await {
        Ok(outcome) => {
            let take = |key: &str| outcome.get(key).unwrap_or_default().to_string();
            Ok(Proposal {
                title: take("title"),
                abstract_text: take("abstract"),
                objectives: take("objectives"),
                methodology: take("methodology"),
                model_used: outcome.last_provider(),
            })
        }
        Err(e) => {
            tracing::warn!(step = e.step(), error = %e, "proposal chain failed, using fallback proposal");
            Ok(Proposal::fallback(&topic))
        }
    }
}

// ========== Literature ==========

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyPaper {
    pub title: String,
    pub authors: String,
    pub year: String,
    pub relevance: String,
}

impl KeyPaper {
    fn from_reference(paper: &ReferencePaper, relevance: &str) -> Self {
        Self {
            title: paper.title.into(),
            authors: paper.authors.into(),
            year: paper.year.into(),
            relevance: relevance.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiteratureSummary {
    pub summary: String,
    pub key_papers: Vec<KeyPaper>,
    pub model_used: Option<ProviderKind>,
}

impl LiteratureSummary {
    pub fn fallback(topic: &str) -> Self {
        Self {
            summary: format!(
                "Based on current research in {topic}, there are several key areas of investigation including machine learning applications, deep learning approaches, and IoT integration. Recent studies show promising results in yield prediction and disease detection using AI techniques."
            ),
            key_papers: vec![KeyPaper::from_reference(
                &REFERENCE_PAPERS[0],
                "Highly relevant to AI in agriculture research",
            )],
            model_used: None,
        }
    }
}

fn featured_papers() -> Vec<KeyPaper> {
    vec![
        KeyPaper::from_reference(&REFERENCE_PAPERS[0], "Highly relevant to AI in agriculture research"),
        KeyPaper::from_reference(&REFERENCE_PAPERS[1], "Excellent example of AI applications in agriculture"),
    ]
}

pub fn literature_prompt(topic: &str) -> Prompt {
    let context = REFERENCE_PAPERS
        .iter()
        .map(|p| {
            format!(
                "Title: {}\nAbstract: {}\nKeywords: {}\nAuthors: {}\nYear: {}",
                p.title,
                p.summary,
                p.keywords.join(", "),
                p.authors,
                p.year
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    Prompt::new(format!(
        "You are helping a student write a literature review for their research topic.

Topic: {topic}

Based on the following research papers, provide a comprehensive literature review summary:

{context}

Please provide:
1. A brief overview of current research in this area
2. Key findings from recent studies
3. Research gaps and opportunities
4. 3-5 key papers that the student should read
5. Suggestions for further reading

Format as a structured summary that a beginner researcher can understand."
    ))
}

pub async fn literature_summary(
    selector: &FallbackSelector,
    topic: &str,
    preferred: Option<ProviderKind>,
) -> Result<LiteratureSummary, AgentError> {
    let topic = require_topic(topic, "selected_topic")?;
    match selector.generate(&literature_prompt(&topic), preferred).await {
        Ok(generation) => Ok(LiteratureSummary {
            summary: generation.text.trim().to_string(),
            key_papers: featured_papers(),
            model_used: Some(generation.provider),
        }),
        Err(e) => {
            tracing::warn!(error = %e, "literature summary failed, using fallback summary");
            Ok(LiteratureSummary::fallback(&topic))
        }
    }
}

// ========== Professor Outreach ==========

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactGuidance {
    pub guidance: String,
    pub sample_email: String,
    pub model_used: Option<ProviderKind>,
}

impl ContactGuidance {
    pub fn fallback(topic: &str) -> Self {
        Self {
            guidance: format!(
                "Here's how to contact professors about your research in {topic}:

1. **Finding Professors**: Search university websites, Google Scholar, and academic databases for faculty working in your area.

2. **Email Content**: Be specific about your research interests, show you've read their work, and explain how you can contribute.

3. **Follow-up**: Send a polite follow-up after 1-2 weeks if you don't hear back.

4. **Preparation**: Have a clear research question, read their recent papers, and prepare specific questions about their work.

5. **Common Mistakes**: Don't send generic emails, don't ask for too much time initially, and always be professional."
            ),
            sample_email: sample_email(topic),
            model_used: None,
        }
    }
}

/// Outreach email template with `[placeholders]` for the student to fill in.
pub fn sample_email(topic: &str) -> String {
    format!(
        "Subject: Research Collaboration Opportunity - {topic}

Dear Professor [Name],

I hope this email finds you well. I am a [your level] student interested in conducting research in {topic}.

I have been following your work on [specific area] and believe your expertise would be invaluable for my research project. I am particularly interested in [specific aspect] and would love to discuss potential collaboration opportunities.

I have prepared a brief research proposal and would be grateful for the opportunity to meet with you to discuss my ideas and receive your guidance.

Thank you for your time and consideration.

Best regards,
[Your Name]
[Your Contact Information]"
    )
}

pub fn guidance_prompt(topic: &str) -> Prompt {
    Prompt::new(format!(
        "A student wants to contact professors about this research topic: {topic}

Provide guidance on:
1. How to find relevant professors
2. What to include in the initial email
3. Sample email template
4. Follow-up strategies
5. What to prepare before meeting
6. Common mistakes to avoid

Make the advice practical and encouraging for a beginner."
    ))
}

pub async fn professor_guidance(
    selector: &FallbackSelector,
    topic: &str,
    preferred: Option<ProviderKind>,
) -> Result<ContactGuidance, AgentError> {
    let topic = require_topic(topic, "topic")?;
    match selector.generate(&guidance_prompt(&topic), preferred).await {
        Ok(generation) => Ok(ContactGuidance {
            guidance: generation.text.trim().to_string(),
            sample_email: sample_email(&topic),
            model_used: Some(generation.provider),
        }),
        Err(e) => {
            tracing::warn!(error = %e, "professor guidance failed, using fallback guidance");
            Ok(ContactGuidance::fallback(&topic))
        }
    }
}
