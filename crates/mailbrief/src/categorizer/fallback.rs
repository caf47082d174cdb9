use super::Categorizer;
use crate::ai::AnalysisResult;

/// Number of body characters kept in a fallback summary.
pub const PREVIEW_CHARS: usize = 200;

/// Builds `"{subject}. {preview}"` from the first [`PREVIEW_CHARS`]
/// characters of the body, newlines flattened to spaces.
///
/// `...` is appended only when the body was cut.
pub fn fallback_summary(subject: &str, body: &str) -> String {
    let preview: String = body.chars().take(PREVIEW_CHARS).collect();
    let preview = preview.replace('\n', " ");
    let truncated = body.chars().nth(PREVIEW_CHARS).is_some();

    format!(
        "{}. {}{}",
        subject,
        preview.trim(),
        if truncated { "..." } else { "" }
    )
}

/// Heuristic stand-in for a remote analysis.
pub fn fallback_analysis(categorizer: &Categorizer, subject: &str, body: &str) -> AnalysisResult {
    AnalysisResult {
        summary: fallback_summary(subject, body),
        category: categorizer.categorize(subject).category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::Category;

    #[test]
    fn test_short_body_kept_whole_without_ellipsis() {
        let summary = fallback_summary("Hello", "Line one\nLine two\n");
        assert_eq!(summary, "Hello. Line one Line two");
    }

    #[test]
    fn test_body_of_exactly_200_chars_has_no_ellipsis() {
        let body = "a".repeat(PREVIEW_CHARS);
        let summary = fallback_summary("S", &body);
        assert_eq!(summary, format!("S. {}", body));
    }

    #[test]
    fn test_long_body_truncated_with_ellipsis() {
        let body = format!("{}{}", "b".repeat(PREVIEW_CHARS), "tail");
        let summary = fallback_summary("S", &body);
        assert_eq!(summary, format!("S. {}...", "b".repeat(PREVIEW_CHARS)));
        assert!(!summary.contains("tail"));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let body = "\u{e9}".repeat(PREVIEW_CHARS + 1);
        let summary = fallback_summary("S", &body);
        assert_eq!(
            summary,
            format!("S. {}...", "\u{e9}".repeat(PREVIEW_CHARS))
        );
    }

    #[test]
    fn test_summary_is_deterministic() {
        let body = "Hi team,\n\nPlease review.";
        assert_eq!(fallback_summary("X", body), fallback_summary("X", body));
    }

    #[test]
    fn test_fallback_analysis_combines_both_heuristics() {
        let result = fallback_analysis(
            &Categorizer::default(),
            "Urgent: Login Issues with Mobile App",
            "Hello Support Team,\n\nI am experiencing critical issues.",
        );
        assert_eq!(result.category, Category::SupportRequest);
        assert_eq!(
            result.summary,
            "Urgent: Login Issues with Mobile App. Hello Support Team,  I am experiencing critical issues."
        );
    }
}
