/// Resume characters sent to the model; the rest is cut to fit its context window.
pub const MAX_RESUME_CHARS: usize = 4000;

pub const FEEDBACK_PROMPT_TEMPLATE: &str = "\
You are an experienced HR recruiter. \
Read the following resume text and provide bullet-point suggestions \
to improve clarity, formatting, and keyword usage for ATS optimization.

Resume:
{resume_text}";

pub fn build_feedback_prompt(resume_text: &str) -> String {
    let truncated: String = resume_text.chars().take(MAX_RESUME_CHARS).collect();
    FEEDBACK_PROMPT_TEMPLATE.replace("{resume_text}", &truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_resume() {
        let prompt = build_feedback_prompt("Rust engineer");
        assert!(prompt.starts_with("You are an experienced HR recruiter."));
        assert!(prompt.ends_with("Resume:\nRust engineer"));
    }

    #[test]
    fn test_prompt_truncates_by_chars() {
        let resume = "ü".repeat(MAX_RESUME_CHARS + 100);
        let prompt = build_feedback_prompt(&resume);
        assert_eq!(prompt.matches('ü').count(), MAX_RESUME_CHARS);
    }
}
