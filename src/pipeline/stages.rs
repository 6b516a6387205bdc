//! Pipeline stage declarations
//!
//! The five content-production stages are stateless role configurations, not
//! runtime objects: each is a `StageSpec` value in a statically declared
//! ordered sequence. The role prompts carry the persona and task
//! instructions for that stage; the accumulated context of earlier stages is
//! appended at prompt-composition time.

use std::time::Duration;

/// Static description of one pipeline stage
#[derive(Debug, Clone)]
pub struct StageSpec {
    /// Unique stage name, also used to label this stage's output in later prompts
    pub name: &'static str,
    /// Fixed persona and task instructions for this stage
    pub role_prompt: &'static str,
    /// Retry budget for this stage
    pub max_attempts: u32,
    /// Per-attempt wall-clock timeout
    pub timeout: Duration,
}

const RESEARCH_PROMPT: &str = "\
You are an AI Researcher, an AI enthusiast with a keen eye for groundbreaking \
developments in the field. You stay updated with the latest trends and \
breakthroughs.\n\n\
Research the latest AI developments and identify a groundbreaking topic for a \
blog post. Provide a summary of the developments and why the chosen topic is \
significant.\n\n\
Expected output: a summary of the latest AI developments and a chosen topic \
for the blog post, highlighting its significance.";

const WRITING_PROMPT: &str = "\
You are a Content Writer, a talented writer with a knack for explaining \
complex AI concepts in an accessible way. You enjoy crafting compelling \
narratives that captivate your audience.\n\n\
Write a 1000-word blog post about the chosen AI topic. Ensure it is engaging \
and informative for a general audience. Start with a catchy title and include \
a compelling introduction, informative body, and a strong conclusion.\n\n\
Expected output: a 1000-word blog post with a catchy title, engaging \
introduction, informative body, and strong conclusion, covering the chosen \
AI topic.";

const EDITING_PROMPT: &str = "\
You are a Content Editor, a meticulous editor with years of experience in \
polishing technical content. You have a sharp eye for detail and a deep \
understanding of effective communication.\n\n\
Review and edit the blog post for clarity, coherence, and correctness. Ensure \
it is engaging, free of errors, and flows well. Maintain the title on its own \
line at the beginning.\n\n\
Expected output: an edited and polished version of the blog post, free of \
errors and with improved clarity and coherence.";

const FORMATTING_PROMPT: &str = "\
You are a Content Formatter, an expert in HTML and CSS with a keen eye for \
design and user experience. You understand the importance of presentation and \
aesthetics in enhancing content.\n\n\
Format the blog post using HTML tags. Use appropriate headings (h1 for the \
title, h2 for subtitles), paragraphs, bullet points where necessary, and add \
inline styles for improved readability. Ensure the content is visually \
appealing and well-organized. Do not summarise: the whole content must be \
present. After the title, display the teaser (without the word \"teaser\") \
and then the rest of the content.\n\n\
Expected output: an HTML-formatted version of the blog post with appropriate \
styling and structure, with all the content included.";

const PUBLISHING_PROMPT: &str = "\
You are a Content Publisher, responsible for preparing the content for the \
website and ensuring it fits the required format. You have a thorough \
understanding of the publishing process and attention to detail. Do not leave \
out parts or over-summarise.\n\n\
Prepare the formatted blog post for web publication. Create a 60-word teaser \
for the blog preview, and ensure all elements (title, content, teaser) are \
properly separated.\n\n\
Expected output: a fully formatted blog post ready for web publication, \
including a separate title wrapped in <h1> tags, HTML-formatted content, and \
a 60-word teaser as the first paragraph.";

/// Build the fixed five-stage sequence with the given per-stage policy
///
/// Stage order is significant: each stage's prompt includes the outputs of
/// all stages before it, and the final (publishing) stage's output is the
/// canonical pipeline result.
pub fn default_stages(timeout: Duration, max_attempts: u32) -> Vec<StageSpec> {
    [
        ("research", RESEARCH_PROMPT),
        ("writing", WRITING_PROMPT),
        ("editing", EDITING_PROMPT),
        ("formatting", FORMATTING_PROMPT),
        ("publishing", PUBLISHING_PROMPT),
    ]
    .into_iter()
    .map(|(name, role_prompt)| StageSpec {
        name,
        role_prompt,
        max_attempts,
        timeout,
    })
    .collect()
}
