//! Prompt construction.

use pagebrief_protocols::SummaryStyle;

/// Appended to text cut at the input budget.
pub const TRUNCATION_MARKER: &str = "...";

/// Cut `text` to `max_chars` characters plus [`TRUNCATION_MARKER`].
///
/// Text within the budget is returned unmodified.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

pub fn build_prompt(style: SummaryStyle, text: &str) -> String {
    match style {
        SummaryStyle::Brief => format!(
            "Provide a brief summary of the following article in 2-3 sentences:\n\n{text}"
        ),
        SummaryStyle::Detailed => format!(
            "Provide a detailed summary of the following article, covering all main points and key details:\n\n{text}"
        ),
        SummaryStyle::Bullets => format!(
            "Summarize the following article in 5-7 key points. Format each point as a line starting with \"- \" (dash followed by a space). Do not use asterisks or other bullet symbols, only use the dash. Keep each point concise and focused on a single key insight from the article:\n\n{text}"
        ),
        SummaryStyle::Default => format!("Summarize the following article:\n\n{text}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_text() {
        let text = "a".repeat(20_005);
        let truncated = truncate_text(&text, 20_000);
        assert_eq!(truncated.chars().count(), 20_003);
        assert!(truncated.ends_with("aaa..."));
        assert_eq!(&truncated[..20_000], "a".repeat(20_000));
    }

    #[test]
    fn test_truncate_short_text_unmodified() {
        assert_eq!(truncate_text("short", 20_000), "short");
        let exact = "b".repeat(20_000);
        assert_eq!(truncate_text(&exact, 20_000), exact);
    }

    #[test]
    fn test_truncate_counts_characters() {
        let text = "日本語のテキスト";
        assert_eq!(truncate_text(text, 3), "日本語...");
    }

    #[test]
    fn test_brief_prompt() {
        let prompt = build_prompt(SummaryStyle::Brief, "Body");
        assert_eq!(
            prompt,
            "Provide a brief summary of the following article in 2-3 sentences:\n\nBody"
        );
    }

    #[test]
    fn test_detailed_prompt() {
        let prompt = build_prompt(SummaryStyle::Detailed, "Body");
        assert!(prompt.starts_with("Provide a detailed summary"));
        assert!(prompt.ends_with("key details:\n\nBody"));
    }

    #[test]
    fn test_bullets_prompt_requests_dashes_only() {
        let prompt = build_prompt(SummaryStyle::Bullets, "Body");
        assert!(prompt.contains("5-7 key points"));
        assert!(prompt.contains("starting with \"- \" (dash followed by a space)"));
        assert!(prompt.contains("Do not use asterisks or other bullet symbols, only use the dash."));
        assert!(prompt.ends_with("\n\nBody"));
    }

    #[test]
    fn test_default_prompt() {
        assert_eq!(
            build_prompt(SummaryStyle::Default, "Body"),
            "Summarize the following article:\n\nBody"
        );
    }

    #[test]
    fn test_unknown_selector_uses_default_prompt() {
        let style = SummaryStyle::from_selector("haiku");
        assert_eq!(
            build_prompt(style, "Body"),
            build_prompt(SummaryStyle::Default, "Body")
        );
    }
}
