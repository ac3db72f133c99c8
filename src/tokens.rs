//! Heuristic token estimation
//!
//! The counts produced here are an approximation, not the output of a model
//! tokenizer. They are close enough to keep a context window inside a budget
//! but must not be used for exact billing. Swap in a provider-specific
//! encoder by implementing [`TokenEstimator`].

use crate::message::ChatMessage;

/// Trait for token counting strategies
pub trait TokenEstimator: Send + Sync {
    /// Estimate the number of tokens in the given text
    fn estimate(&self, text: &str) -> usize;

    /// Estimate the combined token cost of a list of messages
    fn estimate_messages(&self, messages: &[ChatMessage]) -> usize {
        messages
            .iter()
            .map(|m| self.estimate(&m.content))
            .fold(0, usize::saturating_add)
    }
}

/// Default estimator backed by [`estimate_tokens`]
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEstimator;

impl TokenEstimator for HeuristicEstimator {
    fn estimate(&self, text: &str) -> usize {
        estimate_tokens(text)
    }
}

fn is_chinese(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Estimate tokens as `ceil(chinese_chars * 1.5 + english_words)`.
///
/// Chinese characters are counted individually; the remaining text, with the
/// Chinese characters removed, is counted in whitespace-delimited words.
pub fn estimate_tokens(text: &str) -> usize {
    let chinese_chars = text.chars().filter(|&c| is_chinese(c)).count();
    let remainder: String = text.chars().filter(|&c| !is_chinese(c)).collect();
    let english_words = remainder.split_whitespace().count();

    // ceil(1.5 * n) in integer arithmetic
    (chinese_chars * 3).div_ceil(2) + english_words
}
