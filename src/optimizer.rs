//! Context window selection
//!
//! A history is reduced in three passes, each keeping a subsequence of the
//! previous one:
//!
//! 1. keep the newest `max_messages` messages;
//! 2. walking newest to oldest, keep whole messages while the running token
//!    estimate stays within `max_tokens`, stopping at the first that does not fit;
//! 3. drop leading messages until a user turn opens the conversation.
//!
//! Messages are never reordered, split or edited.

use tracing::debug;

use crate::config::MemoryConfig;
use crate::message::{ChatMessage, MessageRole};
use crate::summary::generate_summary;
use crate::tokens::TokenEstimator;

/// Result of building a context window with optional summary of what was cut
#[derive(Debug, Clone, PartialEq)]
pub struct ContextWindow {
    /// Selected messages, oldest first
    pub messages: Vec<ChatMessage>,
    /// Number of input messages left out of the window
    pub dropped: usize,
    /// Digest of the dropped messages when summaries are enabled
    pub summary: Option<String>,
}

/// Indices of the newest `max_messages` entries
fn truncate_by_count(len: usize, max_messages: usize) -> Vec<usize> {
    (len.saturating_sub(max_messages)..len).collect()
}

fn truncate_by_tokens(
    messages: &[ChatMessage],
    indices: &[usize],
    max_tokens: usize,
    estimator: &dyn TokenEstimator,
) -> Vec<usize> {
    let mut kept = Vec::new();
    let mut token_count: usize = 0;

    for &index in indices.iter().rev() {
        let tokens = estimator.estimate(&messages[index].content);
        match token_count.checked_add(tokens) {
            Some(total) if total <= max_tokens => token_count = total,
            _ => break,
        }
        kept.push(index);
    }

    kept.reverse();
    kept
}

/// Keep the conversation opening on a user turn.
///
/// Once the first user message is admitted, later messages are admitted even
/// when two turns of the same role follow each other; the expected role only
/// advances on a match.
fn balance_conversation(messages: &[ChatMessage], indices: &[usize]) -> Vec<usize> {
    let mut kept = Vec::with_capacity(indices.len());
    let mut expected = MessageRole::User;

    for &index in indices {
        let role = messages[index].role;
        if role == expected {
            kept.push(index);
            expected = expected.other();
        } else if !kept.is_empty() {
            kept.push(index);
        }
    }

    kept
}

fn select(
    messages: &[ChatMessage],
    config: &MemoryConfig,
    estimator: &dyn TokenEstimator,
) -> Vec<usize> {
    let by_count = truncate_by_count(messages.len(), config.max_messages);
    let by_tokens = truncate_by_tokens(messages, &by_count, config.max_tokens, estimator);
    let balanced = balance_conversation(messages, &by_tokens);

    debug!(
        "Context selection: {} messages -> {} by count -> {} by tokens -> {} balanced",
        messages.len(),
        by_count.len(),
        by_tokens.len(),
        balanced.len()
    );

    balanced
}

/// Select the messages to forward under `config`, oldest first.
///
/// The result never exceeds either budget and may be empty, for instance when
/// the newest message alone costs more than `max_tokens`.
pub fn optimize_with(
    messages: &[ChatMessage],
    config: &MemoryConfig,
    estimator: &dyn TokenEstimator,
) -> Vec<ChatMessage> {
    select(messages, config, estimator)
        .into_iter()
        .map(|index| messages[index].clone())
        .collect()
}

/// Like [`optimize_with`], also reporting what was left out
pub fn build_window_with(
    messages: &[ChatMessage],
    config: &MemoryConfig,
    estimator: &dyn TokenEstimator,
) -> ContextWindow {
    let selected = select(messages, config, estimator);

    let mut kept = selected.iter().peekable();
    let mut dropped = Vec::new();
    for (index, message) in messages.iter().enumerate() {
        if kept.peek() == Some(&&index) {
            kept.next();
        } else {
            dropped.push(message.clone());
        }
    }

    let summary = if config.enable_summary && !dropped.is_empty() {
        Some(generate_summary(&dropped))
    } else {
        None
    };

    ContextWindow {
        messages: selected.into_iter().map(|index| messages[index].clone()).collect(),
        dropped: dropped.len(),
        summary,
    }
}
