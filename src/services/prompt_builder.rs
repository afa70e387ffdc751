use crate::constants::prompts::{
    QUICK_REVISION_PROMPT, QUIZ_PROMPT, SUMMARY_PROMPT, WEAK_TOPIC_PROMPT,
};

/// Prompt construction for each study artifact. These are pure string
/// templates; payload content is forwarded as-is, empty text included.
pub fn summary_prompt(text: &str) -> String {
    format!("{}\n\nStudy notes:\n{}", SUMMARY_PROMPT, text)
}

pub fn quiz_prompt(text: &str) -> String {
    format!("{}\n\nStudy notes:\n{}", QUIZ_PROMPT, text)
}

pub fn quick_revision_prompt(text: &str) -> String {
    format!("{}\n\nStudy notes:\n{}", QUICK_REVISION_PROMPT, text)
}

pub fn weak_topic_prompt(topics: &[String]) -> String {
    format!("{}\n\nWeak topics: {}", WEAK_TOPIC_PROMPT, topics.join(", "))
}
