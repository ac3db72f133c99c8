//! Relevance search over message history.
//!
//! Each message is scored by how often the query keywords occur in its
//! content:
//!
//! ```text
//! score = sum over keywords of (non-overlapping, case-insensitive occurrences)
//! ```
//!
//! Messages that match nothing are dropped, the rest are ranked by score with
//! ties left in history order.

use tracing::trace;

use crate::keywords::{DEFAULT_KEYWORD_LIMIT, extract_keywords};
use crate::message::ChatMessage;

/// A message paired with its relevance score
#[derive(Debug, Clone)]
struct ScoredMessage<'a> {
    message: &'a ChatMessage,
    score: usize,
}

/// Count keyword occurrences in `content`, ignoring case.
///
/// Empty keywords never match.
pub fn relevance_score(content: &str, keywords: &[String]) -> usize {
    let content_lower = content.to_lowercase();
    keywords
        .iter()
        .filter(|k| !k.is_empty())
        .map(|k| content_lower.matches(k.to_lowercase().as_str()).count())
        .sum()
}

/// Return up to `limit` messages mentioning any of `keywords`, best first.
pub fn search_relevant_memories(
    messages: &[ChatMessage],
    keywords: &[String],
    limit: usize,
) -> Vec<ChatMessage> {
    if keywords.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredMessage<'_>> = messages
        .iter()
        .map(|message| ScoredMessage {
            message,
            score: relevance_score(&message.content, keywords),
        })
        .filter(|sm| sm.score > 0)
        .collect();

    // Stable: equal scores keep their chronological order
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    trace!(
        "Relevance search matched {} of {} messages for {} keywords",
        scored.len(),
        messages.len(),
        keywords.len()
    );

    scored
        .into_iter()
        .take(limit)
        .map(|sm| sm.message.clone())
        .collect()
}

/// Extract keywords from `query` and search the history with them
pub fn find_related(messages: &[ChatMessage], query: &str, limit: usize) -> Vec<ChatMessage> {
    let keywords = extract_keywords(query, DEFAULT_KEYWORD_LIMIT);
    search_relevant_memories(messages, &keywords, limit)
}
