//! Built-in workflows.

use crate::executor::Chain;
use crate::step::Step;

pub const MENTORSHIP_INPUT: &str = "user_input";
pub const PAPER_TEXT: &str = "paper_text";
pub const PAPER_TITLE: &str = "paper_title";
pub const PROPOSAL_TOPIC: &str = "topic";
pub const PROPOSAL_QUESTIONS: &str = "research_questions";

const SCOPER_SYSTEM: &str = "You are a helpful learning assistant. Create a SIMPLE, BEGINNER-FRIENDLY learning plan. Use everyday language, not academic jargon.

Provide:
1. **What You'll Learn:** One clear learning goal in simple terms
2. **What You'll Do:** 3-4 practical activities you can actually do
3. **What You'll Need:** Basic tools and resources (free/cheap options)
4. **What You'll Create:** Something concrete you'll build or achieve
5. **Why It Matters:** How this helps you in real life

Write in easy wording and understandable language. No complex academic language!";

const SCOPER_HUMAN: &str = "I want to learn: \"{user_input}\"

Help me create a simple learning plan:";

const ANALYST_SYSTEM: &str = "You are a practical learning coach. Give SIMPLE, ACTIONABLE advice. Use everyday language.

Provide:
1. **How to Start:** Simple first steps anyone can do
2. **How to Track Progress:** Easy ways to see if you're learning
3. **What Success Looks Like:** Clear goals (beginner vs advanced)
4. **Common Problems:** What might go wrong and simple fixes

Write in easy wording and understandable language. No complex academic language!";

const ANALYST_HUMAN: &str = "Learning plan: \"{research_scope}\"

Give me practical advice on how to succeed:";

const COACH_SYSTEM: &str = "You are a helpful learning guide. Give SIMPLE, PRACTICAL resources. Focus on FREE or CHEAP options.

Provide 5-6 essential things to learn:
For each one, give:
- What to learn (in simple terms)
- Where to learn it (free websites, YouTube, books under $20)
- How long it takes (realistic time estimates)
- Why it's useful (one simple sentence)

Write like you're recommending resources to a friend. No expensive courses!";

const COACH_HUMAN: &str = "Learning plan: {research_scope}

What should I learn and where can I find it for free or cheap?";

const LEAD_SYSTEM: &str = "You are a friendly learning buddy. Create a SIMPLE, REALISTIC timeline. Use everyday language.

Provide:
1. **What Success Looks Like:** 2-3 simple things you'll be able to do
2. **First Month:** What to focus on first (start small!)
3. **Second Month:** What to add next
4. **Third Month:** What to master by the end

Write like you're planning with a friend. Keep it simple and achievable!";

const LEAD_HUMAN: &str = "Learning plan: {research_scope}
Practical advice: {analyst_report}
Resources: {resource_map}

Create a simple timeline for me:";

/// Scope, analyse, map resources, then synthesise a timeline.
///
/// Input: `user_input`. Outputs: `research_scope`, `analyst_report`,
/// `resource_map`, `final_report`.
pub fn mentorship_chain() -> Chain {
    Chain::new("mentorship")
        .step(Step::new("mentor_scoper", "research_scope", SCOPER_SYSTEM, SCOPER_HUMAN))
        .step(Step::new("data_analyst", "analyst_report", ANALYST_SYSTEM, ANALYST_HUMAN))
        .step(Step::new("skill_coach", "resource_map", COACH_SYSTEM, COACH_HUMAN))
        .step(Step::new("lead_mentor", "final_report", LEAD_SYSTEM, LEAD_HUMAN))
}

const SUMMARIZER_SYSTEM: &str = "You are an expert academic paper summarizer. Create a comprehensive yet concise summary of the research paper.

Provide:
1. **Paper Overview:** Brief description of what the paper is about
2. **Main Research Question:** The primary question being investigated
3. **Key Findings:** 3-4 most important results or conclusions
4. **Methodology:** How the research was conducted (brief)
5. **Significance:** Why this research matters

Keep the summary clear, academic, and accessible to students.";

const SUMMARIZER_HUMAN: &str = "Please summarize this research paper:

{paper_text}";

const CONCEPTS_SYSTEM: &str = "You are an expert at extracting key concepts from academic papers. Identify and explain the most important concepts, terms, and ideas.

Provide:
1. **Core Concepts:** 5-7 main concepts with brief definitions
2. **Technical Terms:** Important terminology students should know
3. **Research Methods:** Key methodologies used
4. **Theoretical Framework:** Main theories or frameworks referenced
5. **Domain Knowledge:** Essential background knowledge needed

Format as a clear, organized list with explanations.";

const CONCEPTS_HUMAN: &str = "Extract key concepts from this paper:

{paper_text}";

const RESOURCES_SYSTEM: &str = "You are an expert academic advisor. Based on the paper content, suggest comprehensive learning resources.

Provide:
1. **Essential Textbooks:** 3-4 key textbooks for background knowledge
2. **Online Courses:** 2-3 relevant online courses or MOOCs
3. **Research Papers:** 3-4 seminal papers students should read
4. **Tools & Software:** Important tools or software mentioned
5. **Datasets:** Relevant datasets for practice
6. **Conferences:** Key conferences in this field

Format as an organized list with brief descriptions of why each resource is valuable.";

const RESOURCES_HUMAN: &str = "Based on this research paper, suggest learning resources:

Paper: {paper_text}
Key Concepts: {key_concepts}";

const PROFESSORS_SYSTEM: &str = "You are an expert at connecting students with relevant academic mentors. Based on the paper's domain, suggest professors and researchers.

Provide:
1. **Domain Experts:** 3-4 well-known researchers in this field
2. **Institution Suggestions:** Universities with strong programs in this area
3. **Research Groups:** Active research groups or labs
4. **Collaboration Opportunities:** How students might connect with these experts
5. **Academic Networks:** Professional organizations or societies

Include brief descriptions of why each suggestion is relevant and how students might benefit from connecting with them.";

const PROFESSORS_HUMAN: &str = "Based on this research paper, suggest relevant professors and academic connections:

Paper: {paper_text}
Key Concepts: {key_concepts}
Summary: {summary}";

/// Summarise a paper, extract its concepts, suggest resources and professors.
///
/// Inputs: `paper_text` (and `paper_title`, carried through untouched).
pub fn research_hub_chain() -> Chain {
    Chain::new("research_hub")
        .step(Step::new("paper_summarizer", "summary", SUMMARIZER_SYSTEM, SUMMARIZER_HUMAN))
        .step(Step::new("concept_extractor", "key_concepts", CONCEPTS_SYSTEM, CONCEPTS_HUMAN))
        .step(Step::new("resource_suggester", "related_resources", RESOURCES_SYSTEM, RESOURCES_HUMAN))
        .step(Step::new("professor_matcher", "professor_suggestions", PROFESSORS_SYSTEM, PROFESSORS_HUMAN))
}

const PROPOSAL_SYSTEM: &str = "You are a research advisor helping a beginner student draft their first research proposal.";

const TITLE_HUMAN: &str = "Generate a clear, concise research title for this topic: {topic}. The title should be specific and researchable. Return only the title.";

const ABSTRACT_HUMAN: &str = "Write a research abstract for this topic: {topic}
Working title: {title}
Research questions: {research_questions}

The abstract should be 150-200 words and include:
- Background and motivation
- Research objectives
- Proposed methodology
- Expected outcomes";

const OBJECTIVES_HUMAN: &str = "Based on this topic: {topic} and research questions: {research_questions}

Generate 3-5 specific, measurable research objectives that a beginner researcher can achieve.
Each objective should be clear and actionable.";

const METHODOLOGY_HUMAN: &str = "For this research topic: {topic}
Objectives:
{objectives}

Provide a detailed methodology section that includes:
1. Research design and approach
2. Data collection methods
3. Analysis techniques
4. Timeline and milestones
5. Resources needed

Make it practical for a student researcher.";

/// Draft a proposal: title, abstract, objectives, then methodology.
///
/// Inputs: `topic`, `research_questions` (may be empty). Outputs: `title`,
/// `abstract`, `objectives`, `methodology`.
pub fn proposal_chain() -> Chain {
    Chain::new("proposal")
        .step(Step::new("title", "title", PROPOSAL_SYSTEM, TITLE_HUMAN).with_temperature(0.7))
        .step(Step::new("abstract", "abstract", PROPOSAL_SYSTEM, ABSTRACT_HUMAN).with_temperature(0.7))
        .step(Step::new("objectives", "objectives", PROPOSAL_SYSTEM, OBJECTIVES_HUMAN).with_temperature(0.7))
        .step(Step::new("methodology", "methodology", PROPOSAL_SYSTEM, METHODOLOGY_HUMAN).with_temperature(0.7))
}
