//! Template-based conversation digests

use crate::message::{ChatMessage, MessageRole};

/// Characters of a question quoted in the digest
const PREVIEW_CHARS: usize = 50;

fn preview(content: &str) -> String {
    let head: String = content.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", head)
}

/// Build a short multi-line digest of `messages`.
///
/// No model is involved: the digest lists message counts and quotes the
/// opening of the first and, when there is more than one, the latest user
/// question. An empty history produces an empty string.
pub fn generate_summary(messages: &[ChatMessage]) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let user_messages: Vec<&ChatMessage> = messages
        .iter()
        .filter(|m| m.role == MessageRole::User)
        .collect();
    let assistant_count = messages.len() - user_messages.len();

    let mut lines = vec![
        "Conversation summary:".to_string(),
        format!("- Total messages: {}", messages.len()),
        format!("- User messages: {}", user_messages.len()),
        format!("- Assistant messages: {}", assistant_count),
    ];

    if let Some(first) = user_messages.first() {
        lines.push(format!("- First question: {}", preview(&first.content)));
    }
    if let [_, .., last] = user_messages.as_slice() {
        lines.push(format!("- Latest question: {}", preview(&last.content)));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history() {
        assert_eq!(generate_summary(&[]), "");
    }

    #[test]
    fn test_single_question() {
        let messages = vec![
            ChatMessage::user("What is Rust?"),
            ChatMessage::assistant("A language."),
        ];
        let summary = generate_summary(&messages);
        assert_eq!(
            summary,
            "Conversation summary:\n\
             - Total messages: 2\n\
             - User messages: 1\n\
             - Assistant messages: 1\n\
             - First question: What is Rust?..."
        );
    }

    #[test]
    fn test_latest_question_included() {
        let messages = vec![
            ChatMessage::user("First"),
            ChatMessage::assistant("Answer"),
            ChatMessage::user("Second"),
        ];
        let summary = generate_summary(&messages);
        assert!(summary.contains("- First question: First..."));
        assert!(summary.ends_with("- Latest question: Second..."));
    }

    #[test]
    fn test_assistant_only() {
        let summary = generate_summary(&[ChatMessage::assistant("Hello")]);
        assert!(summary.contains("- User messages: 0"));
        assert!(!summary.contains("question"));
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let long = "问".repeat(80);
        let summary = generate_summary(&[ChatMessage::user(long)]);
        let expected = format!("- First question: {}...", "问".repeat(50));
        assert!(summary.ends_with(&expected));
    }
}
