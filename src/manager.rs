//! Per-session memory manager

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::config::{MemoryConfig, MemoryConfigUpdate};
use crate::keywords;
use crate::message::{ChatMessage, HistoryEntry, MessageRole};
use crate::optimizer::{self, ContextWindow};
use crate::search;
use crate::summary;
use crate::tokens::{HeuristicEstimator, TokenEstimator};

/// Snapshot of a message list, computed on demand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_messages: usize,
    pub user_messages: usize,
    pub assistant_messages: usize,
    pub estimated_tokens: usize,
    pub earliest_message_time: Option<DateTime<Utc>>,
    pub latest_message_time: Option<DateTime<Utc>>,
}

/// Decides what part of a conversation is forwarded to the model.
///
/// Hold one manager per chat session. The config is changed through
/// [`MemoryManager::update_config`], which needs `&mut self`; readers that
/// share a manager across threads should clone a config snapshot and use the
/// free functions in [`crate::optimizer`] instead.
///
/// `keep_system_messages` never affects selection: messages only carry user
/// and assistant roles, so a system prompt has to be prepended by the caller.
#[derive(Clone)]
pub struct MemoryManager {
    config: MemoryConfig,
    estimator: Arc<dyn TokenEstimator>,
}

impl fmt::Debug for MemoryManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryManager")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for MemoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryManager {
    /// Create a manager with the default config and heuristic token estimator
    pub fn new() -> Self {
        Self::with_config(MemoryConfig::default())
    }

    pub fn with_config(config: MemoryConfig) -> Self {
        Self {
            config,
            estimator: Arc::new(HeuristicEstimator),
        }
    }

    /// Replace the token estimator, e.g. with a model-specific tokenizer
    pub fn with_estimator(mut self, estimator: Arc<dyn TokenEstimator>) -> Self {
        self.estimator = estimator;
        self
    }

    /// A copy of the current config
    pub fn get_config(&self) -> MemoryConfig {
        self.config.clone()
    }

    /// Merge `update` into the current config without validating it
    pub fn update_config(&mut self, update: MemoryConfigUpdate) {
        self.config.apply(update);
        debug!("Memory config updated: {:?}", self.config);
    }

    /// Estimate tokens for `text` with this manager's estimator
    pub fn estimate_tokens(&self, text: &str) -> usize {
        self.estimator.estimate(text)
    }

    /// Select the messages to forward for the next turn, oldest first
    pub fn optimize_context(&self, messages: &[ChatMessage]) -> Vec<ChatMessage> {
        optimizer::optimize_with(messages, &self.config, self.estimator.as_ref())
    }

    /// Same selection as [`Self::optimize_context`], reduced to `{role, content}`
    pub fn build_context_history(&self, messages: &[ChatMessage]) -> Vec<HistoryEntry> {
        self.optimize_context(messages)
            .iter()
            .map(HistoryEntry::from)
            .collect()
    }

    /// Optimized context plus a digest of the dropped messages when
    /// `enable_summary` is set
    pub fn build_context_window(&self, messages: &[ChatMessage]) -> ContextWindow {
        optimizer::build_window_with(messages, &self.config, self.estimator.as_ref())
    }

    /// Statistics over `messages` as given, not over the optimized window
    pub fn get_memory_stats(&self, messages: &[ChatMessage]) -> MemoryStats {
        let user_messages = messages
            .iter()
            .filter(|m| m.role == MessageRole::User)
            .count();

        MemoryStats {
            total_messages: messages.len(),
            user_messages,
            assistant_messages: messages.len() - user_messages,
            estimated_tokens: self.estimator.estimate_messages(messages),
            earliest_message_time: messages.first().map(|m| m.timestamp),
            latest_message_time: messages.last().map(|m| m.timestamp),
        }
    }

    pub fn extract_keywords(&self, text: &str, limit: usize) -> Vec<String> {
        keywords::extract_keywords(text, limit)
    }

    pub fn search_relevant_memories(
        &self,
        messages: &[ChatMessage],
        keywords: &[String],
        limit: usize,
    ) -> Vec<ChatMessage> {
        search::search_relevant_memories(messages, keywords, limit)
    }

    /// Search the history for messages related to a free-text query
    pub fn find_related(
        &self,
        messages: &[ChatMessage],
        query: &str,
        limit: usize,
    ) -> Vec<ChatMessage> {
        search::find_related(messages, query, limit)
    }

    pub fn generate_summary(&self, messages: &[ChatMessage]) -> String {
        summary::generate_summary(messages)
    }
}
